use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{GhIssuesError, Result};

const USER_AGENT: &str = concat!("gh-issues/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize, Debug, Clone)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    #[serde(rename = "operationName")]
    pub operation_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct GraphQLResponse {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Deserialize, Debug)]
struct GraphQLError {
    message: String,
}

/// Executes GraphQL operations and hands back the `data` member of the response.
#[async_trait]
pub trait GraphQLClient: Send + Sync {
    async fn execute(&self, request: &GraphQLRequest<'_>) -> Result<serde_json::Value>;
}

pub struct GitHubClient {
    http: Client,
    token: String,
    endpoint: Url,
}

impl GitHubClient {
    pub fn new(token: String, endpoint: Url) -> Result<Self> {
        Self::with_timeout(token, endpoint, None)
    }

    pub fn with_timeout(token: String, endpoint: Url, timeout: Option<Duration>) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(GhIssuesError::MissingToken);
        }

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            token,
            endpoint,
        })
    }
}

#[async_trait]
impl GraphQLClient for GitHubClient {
    async fn execute(&self, request: &GraphQLRequest<'_>) -> Result<serde_json::Value> {
        debug!(operation = request.operation_name, endpoint = %self.endpoint, "sending GraphQL request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "application/vnd.github+json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GhIssuesError::ApiError {
                status: status.as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let gql_response: GraphQLResponse = response.json().await?;

        if let Some(errors) = gql_response.errors.filter(|errors| !errors.is_empty()) {
            debug!(count = errors.len(), "GraphQL response carried errors");
            return Err(GhIssuesError::GraphQL {
                messages: errors.into_iter().map(|e| e.message).collect(),
            });
        }

        gql_response
            .data
            .filter(|data| !data.is_null())
            .ok_or(GhIssuesError::EmptyResponse)
    }
}
