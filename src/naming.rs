//! Destination path derivation.
//!
//! A transformed image's name carries its size in grid cells, e.g.
//! `floor plan - 2x3.png` for an image spanning 2×3 cells of
//! `resize_multiple` pixels. Half cells render as `½` (`1½`, or bare `½` for
//! a zero quotient). Any `<digits>x<digits>` token already present in the
//! base name — an annotation from an earlier run — is stripped first, so
//! re-running the tool on its own output converges instead of accumulating
//! suffixes.
//!
//! Everything here is a pure function of the config, the original path, and
//! the final pixel dimensions.

use crate::config::Config;
use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

/// A prior dimension annotation anywhere in the base name, together with the
/// ` - ` separator this tool writes in front of it. Stripping the separator
/// too is what makes repeated runs converge instead of growing a dangling
/// dash per pass.
static DIMENSIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s*-\s*)?\d+[xX]\d+").expect("static regex"));

/// Derive the destination for a converted, half-suitable, or already-correct
/// image. `width`/`height` are the dimensions of the image as written (post
/// resample for converted/half, original for verbatim copies).
///
/// The original path keeps its directory structure, re-rooted under
/// `output_root`: underscores become spaces, the extension is dropped, any
/// prior annotation is removed, and ` - <W>x<H>.png` is appended.
pub fn destination(config: &Config, original: &Path, width: u32, height: u32) -> PathBuf {
    let w_label = axis_label(width, config.resize_multiple);
    let h_label = axis_label(height, config.resize_multiple);

    let spaced = original
        .with_extension("")
        .to_string_lossy()
        .replace('_', " ");
    let spaced = Path::new(&spaced);
    let dir = spaced.parent().unwrap_or_else(|| Path::new(""));
    let base = spaced
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = strip_annotation(&base);

    rebase(&config.output_root, dir).join(format!("{base} - {w_label}x{h_label}.png"))
}

/// Quarantine destination for an unsuitable image: the original path,
/// unchanged, re-rooted under `unsuitable_root`.
pub fn quarantine(config: &Config, original: &Path) -> PathBuf {
    rebase(&config.unsuitable_root, original)
}

/// Label for one axis: grid cells as a decimal, `½` appended on a nonzero
/// remainder, and exactly `½` (no leading zero) when the quotient is zero.
pub fn axis_label(dim: u32, multiple: u32) -> String {
    let quotient = dim / multiple;
    if dim % multiple == 0 {
        quotient.to_string()
    } else if quotient == 0 {
        "½".to_string()
    } else {
        format!("{quotient}½")
    }
}

/// Remove any embedded `<digits>x<digits>` tokens (and the ` - ` separator
/// preceding them), collapse the resulting space runs, and trim the ends.
fn strip_annotation(base: &str) -> String {
    let stripped = DIMENSIONS.replace_all(base, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Re-root `path` under `root`, keeping only its normal components so an
/// absolute source path nests inside the root instead of replacing it.
fn rebase(root: &Path, path: &Path) -> PathBuf {
    let mut out = root.to_path_buf();
    for component in path.components() {
        if let Component::Normal(part) = component {
            out.push(part);
        }
    }
    out
}
