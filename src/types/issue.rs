use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Assignee, Author, IssueState, Labels};

/// Login shown for issues whose author account no longer exists.
const GHOST_LOGIN: &str = "ghost";

/// Snapshot of one issue as returned by the search query.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub state: IssueState,
    pub author: Option<Author>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub url: String,
    pub repository: Repository,
    pub assignees: Assignees,
    pub comments: Comments,
    pub reactions: Reactions,
    pub labels: Labels,
}

impl Issue {
    pub fn repo_name_with_owner(&self) -> &str {
        &self.repository.name_with_owner
    }

    pub fn author_login(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.login.as_str())
            .unwrap_or(GHOST_LOGIN)
    }

    pub fn label_names(&self) -> Vec<&str> {
        self.labels.nodes.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn assignee_logins(&self) -> Vec<&str> {
        self.assignees.nodes.iter().map(|a| a.login.as_str()).collect()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    #[serde(rename = "nameWithOwner")]
    pub name_with_owner: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Assignees {
    pub nodes: Vec<Assignee>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Comments {
    #[serde(rename = "totalCount", default)]
    pub total_count: u32,
    pub nodes: Vec<Comment>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Comment {
    pub author: Option<Author>,
    pub body: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default)]
pub struct Reactions {
    #[serde(rename = "totalCount")]
    pub total_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn issue_json() -> serde_json::Value {
        json!({
            "number": 42,
            "title": "Crash on startup",
            "body": "Steps to reproduce...",
            "state": "OPEN",
            "author": { "login": "octocat" },
            "updatedAt": "2024-05-01T12:30:00Z",
            "url": "https://github.com/acme/widgets/issues/42",
            "repository": { "name": "widgets", "nameWithOwner": "acme/widgets" },
            "assignees": { "nodes": [{ "login": "hubot" }] },
            "comments": {
                "totalCount": 1,
                "nodes": [{
                    "author": { "login": "hubot" },
                    "body": "Confirmed",
                    "updatedAt": "2024-05-02T08:00:00Z"
                }]
            },
            "reactions": { "totalCount": 3 },
            "labels": { "nodes": [{ "name": "bug", "color": "d73a4a" }] }
        })
    }

    #[test]
    fn test_deserialize_issue() {
        let issue: Issue = serde_json::from_value(issue_json()).unwrap();

        assert_eq!(issue.number, 42);
        assert_eq!(issue.state, IssueState::Open);
        assert_eq!(issue.author_login(), "octocat");
        assert_eq!(issue.repo_name_with_owner(), "acme/widgets");
        assert_eq!(issue.repository.name, "widgets");
        assert_eq!(issue.assignee_logins(), vec!["hubot"]);
        assert_eq!(issue.comments.total_count, 1);
        assert_eq!(issue.comments.nodes[0].body, "Confirmed");
        assert_eq!(issue.reactions.total_count, 3);
        assert_eq!(issue.label_names(), vec!["bug"]);
        assert_eq!(issue.updated_at.to_rfc3339(), "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn test_deleted_author_reads_as_ghost() {
        let mut value = issue_json();
        value["author"] = serde_json::Value::Null;

        let issue: Issue = serde_json::from_value(value).unwrap();
        assert!(issue.author.is_none());
        assert_eq!(issue.author_login(), "ghost");
    }
}
