// src/github/mod.rs
// =============================================================================
// This module talks to the pull request a CI run belongs to.
//
// Currently implements:
// - Parsing the pull request number out of the git ref
// - Posting the broken links table as a review-thread comment
//
// Both are optional: without a pull request ref or a token, the audit runs
// exactly the same and simply skips the comment.
// =============================================================================

mod comment;
mod refs;

pub use comment::{PullRequestCommenter, ReviewTarget};
pub use refs::pull_request_number;
