// src/github/refs.rs
// =============================================================================
// Recovers a pull request number from the CI-provided git ref.
//
// Only one shape is accepted:
//
//   refs/pull/<number>/merge
//
// where <number> is a non-zero decimal integer. Branch refs, tag refs,
// `refs/pull/<n>/head` and anything malformed yield None, which means
// "do not comment".
// =============================================================================

// Parses `refs/pull/<number>/merge` into the pull request number
pub fn pull_request_number(git_ref: &str) -> Option<u64> {
    let mut segments = git_ref.split('/');

    let (Some("refs"), Some("pull"), Some(number), Some("merge"), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    // u64::from_str would also accept a leading '+'
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    number.parse::<u64>().ok().filter(|n| *n > 0)
}
