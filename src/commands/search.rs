use tabled::Tabled;
use tracing::info;

use gh_issues::client::GraphQLClient;
use gh_issues::config::Config;
use gh_issues::error::Result;
use gh_issues::search::{fetch_all_issues, fetch_issues, IssuePage};
use gh_issues::types::{Issue, PageInfo};

use crate::cli::{OutputFormat, SearchArgs};
use crate::output::{self, format_relative, label_colored, truncate};

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "#")]
    number: String,
    #[tabled(rename = "Repository")]
    repository: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Labels")]
    labels: String,
    #[tabled(rename = "Comments")]
    comments: u32,
    #[tabled(rename = "Reactions")]
    reactions: u32,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Issue> for IssueRow {
    fn from(issue: &Issue) -> Self {
        Self {
            number: issue.number.to_string(),
            repository: issue.repo_name_with_owner().to_string(),
            title: truncate(&issue.title, 50),
            state: issue.state.colored(),
            author: issue.author_login().to_string(),
            labels: issue
                .labels
                .nodes
                .iter()
                .map(|l| label_colored(&l.name, &l.color))
                .collect::<Vec<_>>()
                .join(", "),
            comments: issue.comments.total_count,
            reactions: issue.reactions.total_count,
            updated: format_relative(&issue.updated_at),
        }
    }
}

fn compact_line(issue: &Issue) -> String {
    format!(
        "{}#{}\t{}\t{}",
        issue.repo_name_with_owner(),
        issue.number,
        issue.state,
        issue.title
    )
}

pub async fn run<C>(client: &C, config: &Config, args: SearchArgs) -> Result<()>
where
    C: GraphQLClient + ?Sized,
{
    let query = args.query_string();
    let limit = config.limit(args.limit);

    let page: IssuePage = if args.all {
        let max_pages = usize::try_from(args.max_pages).unwrap_or(usize::MAX);
        fetch_all_issues(client, &query, limit, max_pages).await?
    } else {
        let cursor = PageInfo {
            has_next_page: args.after.is_some(),
            end_cursor: args.after.clone(),
        };
        fetch_issues(client, &query, limit, &cursor).await?
    };

    info!(count = page.issues.len(), "search complete");

    if page.issues.is_empty() && output::format() != OutputFormat::Json {
        output::print_hint("No issues matched the search.");
    } else {
        output::print_list(&page.issues, |issue| IssueRow::from(issue), compact_line);
    }

    if let Some(cursor) = page.page_info.next_cursor() {
        output::print_hint(&format!("More results available. Continue with --after {cursor}"));
    }

    Ok(())
}
