//! Search GitHub issues through the GraphQL API.
//!
//! [`search::fetch_issues`] is the entry point: it takes any
//! [`client::GraphQLClient`], a search string and a cursor, and returns one
//! page of typed [`types::Issue`] records along with the next [`types::PageInfo`].

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod search;
pub mod types;

pub use client::{GitHubClient, GraphQLClient, GraphQLRequest};
pub use error::{GhIssuesError, Result};
pub use search::{fetch_all_issues, fetch_issues, make_issues_query, IssuePage};
pub use types::{Issue, PageInfo};
