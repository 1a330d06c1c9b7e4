//! Issue search over GitHub's GraphQL `search` connection.

use const_format::concatcp;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use crate::client::{GraphQLClient, GraphQLRequest};
use crate::error::{GhIssuesError, Result};
use crate::types::{Issue, PageInfo};

pub const SEARCH_ISSUES_OPERATION: &str = "SearchIssues";

const ISSUE_FIELDS: &str = r#"
            number
            title
            body
            state
            author {
                login
            }
            updatedAt
            url
            repository {
                name
                nameWithOwner
            }
            assignees(first: 3) {
                nodes {
                    login
                }
            }
            comments(first: 15) {
                totalCount
                nodes {
                    author {
                        login
                    }
                    body
                    updatedAt
                }
            }
            reactions(first: 1) {
                totalCount
            }
            labels(first: 3) {
                nodes {
                    color
                    name
                }
            }
"#;

pub const SEARCH_ISSUES_QUERY: &str = concatcp!(
    r#"
query SearchIssues($query: String!, $limit: Int!, $endCursor: String) {
    search(type: ISSUE, first: $limit, after: $endCursor, query: $query) {
        nodes {
            ... on Issue {"#,
    ISSUE_FIELDS,
    r#"            }
        }
        pageInfo {
            hasNextPage
            endCursor
        }
    }
}
"#
);

#[derive(Deserialize)]
struct SearchIssuesResponse {
    search: SearchConnection,
}

#[derive(Deserialize)]
struct SearchConnection {
    nodes: Vec<SearchNode>,
    #[serde(rename = "pageInfo")]
    page_info: PageInfo,
}

/// A search node. Results that are not issues come back as `{}` because
/// only the `... on Issue` fragment selects fields.
#[derive(Deserialize)]
#[serde(untagged)]
enum SearchNode {
    Issue(Box<Issue>),
    Empty(EmptyNode),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EmptyNode {}

/// One page of search results.
#[derive(Debug, Clone, Default)]
pub struct IssuePage {
    pub issues: Vec<Issue>,
    pub page_info: PageInfo,
}

/// Scope a free-text search to issues.
pub fn make_issues_query(query: &str) -> String {
    format!("is:issue {query}")
}

fn search_variables(query: &str, limit: u32, cursor: &PageInfo) -> serde_json::Value {
    let mut variables = json!({
        "query": make_issues_query(query),
        "limit": limit,
    });

    if let Some(end_cursor) = cursor.next_cursor() {
        variables["endCursor"] = json!(end_cursor);
    }

    variables
}

/// Fetch one page of issues matching `query`.
///
/// The cursor is only forwarded when it reports another page; otherwise the
/// first page is requested. Errors from the client are returned as-is.
#[instrument(skip(client, cursor), fields(after = cursor.next_cursor().is_some()))]
pub async fn fetch_issues<C>(
    client: &C,
    query: &str,
    limit: u32,
    cursor: &PageInfo,
) -> Result<IssuePage>
where
    C: GraphQLClient + ?Sized,
{
    let request = GraphQLRequest {
        query: SEARCH_ISSUES_QUERY,
        operation_name: SEARCH_ISSUES_OPERATION,
        variables: Some(search_variables(query, limit, cursor)),
    };

    let data = client.execute(&request).await?;
    let response: SearchIssuesResponse =
        serde_json::from_value(data).map_err(|e| GhIssuesError::Decode {
            operation: SEARCH_ISSUES_OPERATION,
            source: e,
        })?;

    let SearchConnection { nodes, page_info } = response.search;
    let node_count = nodes.len();
    let issues: Vec<Issue> = nodes
        .into_iter()
        .filter_map(|node| match node {
            SearchNode::Issue(issue) => Some(*issue),
            SearchNode::Empty(_) => None,
        })
        .collect();

    if issues.len() < node_count {
        debug!(
            skipped = node_count - issues.len(),
            "skipped search nodes that are not issues"
        );
    }
    debug!(
        count = issues.len(),
        has_next_page = page_info.has_next_page,
        "fetched issue page"
    );

    Ok(IssuePage { issues, page_info })
}

/// Follow the cursor from the first page until the results run out or
/// `max_pages` pages have been read. At least one page is always fetched.
pub async fn fetch_all_issues<C>(
    client: &C,
    query: &str,
    limit: u32,
    max_pages: usize,
) -> Result<IssuePage>
where
    C: GraphQLClient + ?Sized,
{
    let mut all = IssuePage::default();

    for page_number in 1..=max_pages.max(1) {
        let page = fetch_issues(client, query, limit, &all.page_info).await?;
        all.issues.extend(page.issues);
        all.page_info = page.page_info;

        if all.page_info.next_cursor().is_none() {
            break;
        }
        debug!(page_number, total = all.issues.len(), "continuing to next page");
    }

    Ok(all)
}
