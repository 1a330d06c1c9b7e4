use std::fmt;

use colored::Colorize;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// State of an issue as reported by GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueState {
    Open,
    Closed,
    /// Any value the API adds later.
    Other(String),
}

impl IssueState {
    pub fn from_api(value: &str) -> Self {
        match value {
            "OPEN" => IssueState::Open,
            "CLOSED" => IssueState::Closed,
            other => IssueState::Other(other.to_string()),
        }
    }

    pub fn as_api(&self) -> &str {
        match self {
            IssueState::Open => "OPEN",
            IssueState::Closed => "CLOSED",
            IssueState::Other(value) => value,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            IssueState::Open => "Open",
            IssueState::Closed => "Closed",
            IssueState::Other(value) => value,
        }
    }

    /// Get the colored label for terminal output.
    pub fn colored(&self) -> String {
        let label = self.label();
        match self {
            IssueState::Open => label.green().to_string(),
            IssueState::Closed => label.purple().to_string(),
            IssueState::Other(_) => label.bright_black().to_string(),
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for IssueState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_api())
    }
}

impl<'de> Deserialize<'de> for IssueState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(IssueState::from_api(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_states() {
        let open: IssueState = serde_json::from_str(r#""OPEN""#).unwrap();
        let closed: IssueState = serde_json::from_str(r#""CLOSED""#).unwrap();
        assert_eq!(open, IssueState::Open);
        assert_eq!(closed, IssueState::Closed);
    }

    #[test]
    fn test_unknown_state_is_kept() {
        let state: IssueState = serde_json::from_str(r#""DRAFT""#).unwrap();
        assert_eq!(state, IssueState::Other("DRAFT".to_string()));
        assert_eq!(serde_json::to_string(&state).unwrap(), r#""DRAFT""#);
    }
}
