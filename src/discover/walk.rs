// src/discover/walk.rs
// =============================================================================
// Directory traversal for markdown discovery.
//
// We use the `ignore` crate's WalkBuilder with every standard filter turned
// off, so it behaves like a plain recursive walk:
// - hidden files and directories are visited
// - .gitignore / .ignore files are NOT honored
// - symlinked directories are not followed
//
// Entries are sorted by file name inside each directory. The order is not
// lexicographic over full paths (a directory's files and subdirectories are
// interleaved by name), but it is stable for an unchanged tree.
// =============================================================================

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;

// The extension a file name must end with to count as a document
const MARKDOWN_SUFFIX: &str = ".md";

// Lists every markdown file under `root`, recursing through all subdirectories
//
// Errors while walking (permission denied on a subdirectory, a file vanishing
// mid-walk) are logged and the rest of the tree is still scanned.
pub fn list_markdown_files(root: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry during discovery");
                continue;
            }
        };

        if is_markdown_name(&entry.file_name().to_string_lossy()) && entry.path().is_file() {
            files.push(entry.into_path());
        }
    }

    files
}

// Case-sensitive suffix check, so `NOTES.MD` is not a document
fn is_markdown_name(name: &str) -> bool {
    name.ends_with(MARKDOWN_SUFFIX)
}
