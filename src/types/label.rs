use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    /// Hex colour without the leading `#`, e.g. `d73a4a`.
    pub color: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    pub nodes: Vec<Label>,
}
