mod issue;
mod label;
mod page_info;
mod state;
mod user;

pub use issue::{Assignees, Comment, Comments, Issue, Reactions, Repository};
pub use label::{Label, Labels};
pub use page_info::PageInfo;
pub use state::IssueState;
pub use user::{Assignee, Author};
