//! Natural-order string comparison.
//!
//! Embedded digit runs compare by numeric value instead of character by
//! character, so `img2.png` sorts before `img10.png`. Comparison is
//! case-insensitive (ASCII). This only affects report determinism — files are
//! processed independently — but a human scanning the output expects
//! human-friendly order.

use std::cmp::Ordering;

/// Compare two strings in natural order, case-insensitively.
///
/// Digit runs are compared as unbounded non-negative integers (leading zeros
/// ignored for magnitude, shorter run wins ties so `img01` < `img001` stays
/// stable); everything else compares as lowercased characters.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let ord = compare_digit_runs(&mut ca, &mut cb);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else {
                    let lx = x.to_ascii_lowercase();
                    let ly = y.to_ascii_lowercase();
                    if lx != ly {
                        return lx.cmp(&ly);
                    }
                    ca.next();
                    cb.next();
                }
            }
        }
    }
}

/// Consume one digit run from each iterator and compare them numerically.
///
/// Magnitude first (after stripping leading zeros: longer run is larger, then
/// lexical on equal length), then run length as a tiebreaker so strings that
/// differ only in zero padding still order consistently.
fn compare_digit_runs(
    a: &mut std::iter::Peekable<std::str::Chars<'_>>,
    b: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Ordering {
    let ra = take_digit_run(a);
    let rb = take_digit_run(b);
    let ta = ra.trim_start_matches('0');
    let tb = rb.trim_start_matches('0');
    ta.len()
        .cmp(&tb.len())
        .then_with(|| ta.cmp(tb))
        .then_with(|| ra.len().cmp(&rb.len()))
}

fn take_digit_run(it: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = it.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        it.next();
    }
    run
}
