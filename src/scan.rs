//! File enumeration.
//!
//! Walks each deduplicated root collecting candidate image files. Hidden
//! entries (name starts with `.`) are pruned — for directories that skips the
//! whole subtree. A file survives only if its extension is one of the
//! supported raster formats. The combined list is sorted in natural order on
//! the full path so the per-file log and any diagnostics read in a stable,
//! human-friendly sequence.
//!
//! Enumeration happens once, before any work is dispatched, so a walk error
//! here is fatal — there is no partial-result tolerance at this stage.

use crate::ordering::natural_cmp;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Extensions with decoders compiled in (see the `image` features in
/// Cargo.toml). Matched case-insensitively.
const IMAGE_EXTENSIONS: &[&str] = &["gif", "jpg", "jpeg", "png"];

/// Collect every candidate image under the given roots, naturally sorted.
pub fn collect_files(roots: &[PathBuf]) -> Result<Vec<PathBuf>, ScanError> {
    let mut list = Vec::new();
    for root in roots {
        // Depth 0 is the root the user explicitly asked for — the hidden
        // check applies only to entries discovered below it.
        for entry in WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        {
            let entry = entry?;
            if entry.file_type().is_file() && is_image(entry.path()) {
                list.push(entry.into_path());
            }
        }
    }
    list.sort_by(|a, b| natural_cmp(&a.to_string_lossy(), &b.to_string_lossy()));
    Ok(list)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| e.eq_ignore_ascii_case(known))
        })
}
