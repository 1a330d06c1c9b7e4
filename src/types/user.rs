use serde::{Deserialize, Serialize};

/// Login of whoever opened an issue or wrote a comment.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub login: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Assignee {
    pub login: String,
}
