//! # gridscale
//!
//! Batch classifier and rescaler for grid-aligned raster images. Point it at
//! one or more directory trees and every GIF/JPEG/PNG found is sorted into one
//! of four outcomes based on whether its pixel dimensions land on a
//! configurable grid:
//!
//! ```text
//! Converted        dimensions are exact multiples of --in-multiple
//!                  → resampled to the same cell count on --resize-multiple, saved as PNG
//! AlreadyCorrect   dimensions are exact multiples of --resize-multiple
//!                  → copied verbatim to the derived destination
//! HalfSuitable     (--half only) dimensions align to half the input grid
//!                  → resampled like Converted, at half scale
//! Unsuitable       none of the above → copied unchanged into the quarantine root
//! ```
//!
//! # Architecture: Classify, Then Fan Out
//!
//! The pipeline has two phases with a hard barrier between them:
//!
//! ```text
//! 1. Enumerate   roots → sorted file list     (single-threaded, fatal on error)
//! 2. Dispatch    file list → outcomes         (rayon pool, per-file errors recoverable)
//! ```
//!
//! Enumeration completes and is fully sorted before any image work starts, so
//! the report order is deterministic even though processing is not. Each file
//! is independent — the only shared mutable state is the six atomic counters
//! in [`process::RunStatus`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Run options, CLI defaults, validation |
//! | [`roots`] | Canonicalizes candidate roots, drops nested descendants |
//! | [`scan`] | Walks roots, prunes hidden entries, filters by extension, natural sort |
//! | [`ordering`] | Natural-order string comparison (numeric runs compare as integers) |
//! | [`classify`] | The four-way disposition decision and output-size arithmetic |
//! | [`naming`] | Destination path derivation — ½ labels, annotation stripping |
//! | [`imaging`] | Decode, Catmull-Rom resize, PNG encode, verbatim copy |
//! | [`process`] | Concurrent dispatch, panic isolation, atomic counters |
//! | [`output`] | Aligned summary formatting |
//!
//! # Design Decisions
//!
//! ## PNG-Only Output
//!
//! Every transformed image is encoded as PNG regardless of input format.
//! The tool exists to normalize assets onto a grid; a single lossless output
//! format keeps re-runs stable (no generational quality loss) and makes the
//! idempotence guarantee of [`naming`] meaningful.
//!
//! ## Priority-Ordered Classification
//!
//! The four rules in [`classify`] are a guarded match evaluated in a fixed
//! order. This is load-bearing: with `--half` enabled an image can satisfy
//! both the exact-multiple and the half-grid predicates, and the exact rules
//! must win. See [`classify::classify`].
//!
//! ## Atomic Counters, Not a Mutex
//!
//! Workers touch nothing shared except [`process::RunStatus`], which is one
//! atomic cell per counter. A mutex around the whole struct would serialize
//! unrelated files for no benefit; the counters are read only after the pool
//! drains.

pub mod classify;
pub mod config;
pub mod imaging;
pub mod naming;
pub mod ordering;
pub mod output;
pub mod process;
pub mod roots;
pub mod scan;
