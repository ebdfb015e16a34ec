//! The disposition decision.
//!
//! One evaluation per file, no state carried between files. The rules are a
//! guarded match in strict priority order — with `half` enabled an image can
//! satisfy both an exact-multiple rule and the half-grid rule, and the exact
//! rules must win, so precedence here is a policy choice rather than an
//! implementation accident.
//!
//! All size arithmetic is pure and uses truncating integer division, which
//! matters for half-grid outputs whose axis does not land on an integer
//! `resize_multiple / 2` boundary.

use crate::config::Config;

/// Mutually exclusive outcome of classifying one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Both axes are exact multiples of `in_multiple`; resample and re-encode.
    Converted,
    /// Both axes are already exact multiples of `resize_multiple`; copy bytes verbatim.
    AlreadyCorrect,
    /// Half-grid leniency matched (only reachable with `half` on); resample at half scale.
    HalfSuitable,
    /// No rule matched; quarantine under the unsuitable root.
    Unsuitable,
}

/// Classify an image by its pixel dimensions.
///
/// First match wins, top to bottom:
/// 1. exact `in_multiple` on both axes → [`Disposition::Converted`]
/// 2. exact `resize_multiple` on both axes → [`Disposition::AlreadyCorrect`]
/// 3. `half` on, each axis a multiple of `in_multiple` or `in_multiple / 2`
///    → [`Disposition::HalfSuitable`]
/// 4. otherwise → [`Disposition::Unsuitable`]
pub fn classify(width: u32, height: u32, config: &Config) -> Disposition {
    let in_m = config.in_multiple;
    let out_m = config.resize_multiple;
    let half_axis = |dim: u32| dim % in_m == 0 || dim % (in_m / 2) == 0;

    match (width, height) {
        (w, h) if w % in_m == 0 && h % in_m == 0 => Disposition::Converted,
        (w, h) if w % out_m == 0 && h % out_m == 0 => Disposition::AlreadyCorrect,
        (w, h) if config.half && half_axis(w) && half_axis(h) => Disposition::HalfSuitable,
        _ => Disposition::Unsuitable,
    }
}

/// Output size for a [`Disposition::Converted`] image: the grid-cell count is
/// preserved exactly, each cell rescaled from `in_multiple` to
/// `resize_multiple` pixels.
pub fn converted_size(width: u32, height: u32, config: &Config) -> (u32, u32) {
    (
        width / config.in_multiple * config.resize_multiple,
        height / config.in_multiple * config.resize_multiple,
    )
}

/// Output size for a [`Disposition::HalfSuitable`] image: half-cell counts on
/// the half output grid, truncating division on each step.
pub fn half_size(width: u32, height: u32, config: &Config) -> (u32, u32) {
    (
        width * 2 / config.in_multiple * (config.resize_multiple / 2),
        height * 2 / config.in_multiple * (config.resize_multiple / 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(in_multiple: u32, resize_multiple: u32, half: bool) -> Config {
        Config {
            in_multiple,
            resize_multiple,
            half,
            ..Default::default()
        }
    }

    // =========================================================================
    // classify — rule priority
    // =========================================================================

    #[test]
    fn exact_multiples_convert() {
        let c = config(200, 140, false);
        assert_eq!(classify(400, 600, &c), Disposition::Converted);
        assert_eq!(classify(200, 200, &c), Disposition::Converted);
    }

    #[test]
    fn resize_multiples_already_correct() {
        let c = config(200, 140, false);
        assert_eq!(classify(280, 140, &c), Disposition::AlreadyCorrect);
    }

    #[test]
    fn converted_wins_over_already_correct() {
        // 1400x1400 divides both 200 and 140 — rule 1 must win
        let c = config(200, 140, false);
        assert_eq!(classify(1400, 1400, &c), Disposition::Converted);
    }

    #[test]
    fn half_grid_accepted_when_enabled() {
        let c = config(200, 140, true);
        assert_eq!(classify(100, 200, &c), Disposition::HalfSuitable);
        assert_eq!(classify(100, 100, &c), Disposition::HalfSuitable);
    }

    #[test]
    fn half_grid_rejected_when_disabled() {
        let c = config(200, 140, false);
        assert_eq!(classify(100, 200, &c), Disposition::Unsuitable);
    }

    #[test]
    fn half_requires_both_axes() {
        let c = config(200, 140, true);
        // width on the half grid, height on neither
        assert_eq!(classify(100, 150, &c), Disposition::Unsuitable);
    }

    #[test]
    fn misaligned_is_unsuitable() {
        let c = config(200, 140, false);
        assert_eq!(classify(333, 444, &c), Disposition::Unsuitable);
        assert_eq!(classify(201, 200, &c), Disposition::Unsuitable);
    }

    #[test]
    fn one_axis_aligned_is_not_enough() {
        let c = config(200, 140, false);
        assert_eq!(classify(200, 300, &c), Disposition::Unsuitable);
    }

    // =========================================================================
    // Output size arithmetic
    // =========================================================================

    #[test]
    fn converted_size_preserves_cell_count() {
        let c = config(200, 140, false);
        // 2x3 cells stay 2x3 cells
        assert_eq!(converted_size(400, 600, &c), (280, 420));
    }

    #[test]
    fn converted_size_single_cell() {
        let c = config(200, 140, false);
        assert_eq!(converted_size(200, 200, &c), (140, 140));
    }

    #[test]
    fn half_size_full_and_half_axes() {
        let c = config(200, 140, true);
        // 100 = half a cell → 70; 200 = one cell → 140
        assert_eq!(half_size(100, 200, &c), (70, 140));
    }

    #[test]
    fn half_size_truncates() {
        // in=200, resize=141 would be rejected by validate() with half on,
        // but the arithmetic itself must truncate, not round: 141/2 = 70
        let c = config(200, 141, true);
        assert_eq!(half_size(100, 100, &c), (70, 70));
    }
}
