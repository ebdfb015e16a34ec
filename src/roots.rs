//! Root path deduplication.
//!
//! Users can pass overlapping paths (`photos photos/2024 ./photos/../photos`).
//! Walking both `photos` and `photos/2024` would process the nested files
//! twice, so every candidate is resolved to a canonical absolute form and any
//! root that sits inside another kept root is dropped. Discovery order never
//! matters: an ancestor evicts an already-kept descendant just as a descendant
//! is refused when its ancestor is already present.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RootsError {
    #[error("Failed to resolve {path}: {source}")]
    Resolve {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Resolve candidate roots and return the minimal non-overlapping set.
///
/// Each path is canonicalized (symlinks and relative segments resolved);
/// failure to resolve any path is fatal. The result preserves first-seen
/// order of the surviving roots.
pub fn dedupe_roots(paths: &[PathBuf]) -> Result<Vec<PathBuf>, RootsError> {
    let mut kept: Vec<PathBuf> = Vec::new();
    for path in paths {
        let actual = std::fs::canonicalize(path).map_err(|source| RootsError::Resolve {
            path: path.clone(),
            source,
        })?;
        if kept.contains(&actual) {
            continue;
        }
        if kept.iter().any(|one| is_strict_descendant(&actual, one)) {
            continue;
        }
        // The new root may subsume one or more kept roots.
        kept.retain(|one| !is_strict_descendant(one, &actual));
        kept.push(actual);
    }
    Ok(kept)
}

/// True when `child` lies strictly below `parent` (equal paths don't count).
fn is_strict_descendant(child: &Path, parent: &Path) -> bool {
    child != parent && child.starts_with(parent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn mkdirs(tmp: &TempDir, rels: &[&str]) -> Vec<PathBuf> {
        rels.iter()
            .map(|rel| {
                let p = tmp.path().join(rel);
                std::fs::create_dir_all(&p).unwrap();
                p
            })
            .collect()
    }

    #[test]
    fn ancestor_first_drops_descendant() {
        let tmp = TempDir::new().unwrap();
        let paths = mkdirs(&tmp, &["a", "a/b"]);
        let roots = dedupe_roots(&paths).unwrap();
        assert_eq!(roots, vec![std::fs::canonicalize(tmp.path().join("a")).unwrap()]);
    }

    #[test]
    fn descendant_first_still_yields_ancestor() {
        let tmp = TempDir::new().unwrap();
        let mut paths = mkdirs(&tmp, &["a", "a/b"]);
        paths.reverse();
        let roots = dedupe_roots(&paths).unwrap();
        assert_eq!(roots, vec![std::fs::canonicalize(tmp.path().join("a")).unwrap()]);
    }

    #[test]
    fn siblings_both_kept() {
        let tmp = TempDir::new().unwrap();
        let paths = mkdirs(&tmp, &["a", "b"]);
        let roots = dedupe_roots(&paths).unwrap();
        assert_eq!(roots.len(), 2);
    }

    #[test]
    fn duplicate_path_kept_once() {
        let tmp = TempDir::new().unwrap();
        let a = mkdirs(&tmp, &["a"]);
        let paths = vec![a[0].clone(), a[0].clone()];
        let roots = dedupe_roots(&paths).unwrap();
        assert_eq!(roots.len(), 1);
    }

    #[test]
    fn relative_segments_resolve_to_same_root() {
        let tmp = TempDir::new().unwrap();
        let paths = mkdirs(&tmp, &["a"]);
        let roundabout = tmp.path().join("a/../a");
        let roots = dedupe_roots(&[paths[0].clone(), roundabout]).unwrap();
        assert_eq!(roots.len(), 1);
    }

    #[test]
    fn ancestor_evicts_multiple_descendants() {
        let tmp = TempDir::new().unwrap();
        let paths = mkdirs(&tmp, &["a/b", "a/c", "a"]);
        let roots = dedupe_roots(&paths).unwrap();
        assert_eq!(roots, vec![std::fs::canonicalize(tmp.path().join("a")).unwrap()]);
    }

    #[test]
    fn missing_path_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does-not-exist");
        let result = dedupe_roots(&[missing]);
        assert!(matches!(result, Err(RootsError::Resolve { .. })));
    }

    #[test]
    fn similar_prefix_is_not_a_descendant() {
        // "ab" must not be treated as inside "a"
        let tmp = TempDir::new().unwrap();
        let paths = mkdirs(&tmp, &["a", "ab"]);
        let roots = dedupe_roots(&paths).unwrap();
        assert_eq!(roots.len(), 2);
    }
}
