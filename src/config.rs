use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{GhIssuesError, Result};

pub const DEFAULT_HOST: &str = "github.com";
pub const DEFAULT_LIMIT: u32 = 30;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variables checked for a token, in order of precedence.
const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];
const HOST_ENV_VAR: &str = "GH_HOST";

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub token: Option<String>,
    pub host: Option<String>,
    pub default_limit: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| GhIssuesError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| GhIssuesError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "gh-issues")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(GhIssuesError::NoConfigDir)
    }

    /// Get token with env vars taking precedence over config file
    pub fn token(&self) -> Result<String> {
        self.token_with(|name| std::env::var(name).ok())
    }

    fn token_with(&self, env: impl Fn(&str) -> Option<String>) -> Result<String> {
        TOKEN_ENV_VARS
            .iter()
            .filter_map(|name| env(name))
            .find(|value| !value.trim().is_empty())
            .or_else(|| self.token.clone())
            .ok_or(GhIssuesError::MissingToken)
    }

    pub fn host(&self) -> String {
        self.host_with(|name| std::env::var(name).ok())
    }

    fn host_with(&self, env: impl Fn(&str) -> Option<String>) -> String {
        env(HOST_ENV_VAR)
            .filter(|h| !h.trim().is_empty())
            .or_else(|| self.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    /// GraphQL endpoint for the configured host.
    ///
    /// github.com is served from `api.github.com`; Enterprise Server hosts
    /// expose the API under `/api/graphql` on the host itself.
    pub fn graphql_endpoint(&self) -> Result<Url> {
        endpoint_for_host(&self.host())
    }

    pub fn limit(&self, explicit: Option<u32>) -> u32 {
        explicit
            .or(self.default_limit)
            .unwrap_or(DEFAULT_LIMIT)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

pub fn endpoint_for_host(host: &str) -> Result<Url> {
    let host = host
        .trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');

    let raw = if host.eq_ignore_ascii_case(DEFAULT_HOST) || host.eq_ignore_ascii_case("api.github.com")
    {
        "https://api.github.com/graphql".to_string()
    } else {
        format!("https://{host}/api/graphql")
    };

    Url::parse(&raw).map_err(|_| GhIssuesError::InvalidUrl(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
token = "ghp_file"
host = "github.example.com"
default_limit = 50
timeout_secs = 10
"#,
        )
        .unwrap();

        assert_eq!(config.token.as_deref(), Some("ghp_file"));
        assert_eq!(config.host.as_deref(), Some("github.example.com"));
        assert_eq!(config.limit(None), 50);
        assert_eq!(config.timeout_secs(), 10);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.limit(None), DEFAULT_LIMIT);
        assert_eq!(config.timeout_secs(), DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.host_with(no_env), DEFAULT_HOST);
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(Config::parse("default_limit = \"many\"").is_err());
    }

    #[test]
    fn test_explicit_limit_wins() {
        let config = Config {
            default_limit: Some(50),
            ..Config::default()
        };
        assert_eq!(config.limit(Some(5)), 5);
    }

    #[test]
    fn test_gh_token_takes_precedence() {
        let config = Config {
            token: Some("from-file".to_string()),
            ..Config::default()
        };
        let token = config
            .token_with(|name| match name {
                "GH_TOKEN" => Some("from-gh".to_string()),
                "GITHUB_TOKEN" => Some("from-github".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(token, "from-gh");
    }

    #[test]
    fn test_github_token_used_when_gh_token_blank() {
        let config = Config::default();
        let token = config
            .token_with(|name| match name {
                "GH_TOKEN" => Some("  ".to_string()),
                "GITHUB_TOKEN" => Some("from-github".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(token, "from-github");
    }

    #[test]
    fn test_token_falls_back_to_file() {
        let config = Config {
            token: Some("from-file".to_string()),
            ..Config::default()
        };
        assert_eq!(config.token_with(no_env).unwrap(), "from-file");
    }

    #[test]
    fn test_missing_token() {
        let err = Config::default().token_with(no_env).unwrap_err();
        assert!(matches!(err, GhIssuesError::MissingToken));
    }

    #[test]
    fn test_gh_host_env_overrides_file() {
        let config = Config {
            host: Some("file.example.com".to_string()),
            ..Config::default()
        };
        let host = config.host_with(|name| {
            (name == "GH_HOST").then(|| "env.example.com".to_string())
        });
        assert_eq!(host, "env.example.com");
    }

    #[test]
    fn test_endpoint_for_github_com() {
        let url = endpoint_for_host("github.com").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/graphql");
    }

    #[test]
    fn test_endpoint_for_enterprise_host() {
        let url = endpoint_for_host("https://github.example.com/").unwrap();
        assert_eq!(url.as_str(), "https://github.example.com/api/graphql");
    }

    #[test]
    fn test_endpoint_for_invalid_host() {
        let err = endpoint_for_host("bad host").unwrap_err();
        assert!(matches!(err, GhIssuesError::InvalidUrl(_)));
    }
}
