//! Concurrent dispatch.
//!
//! One task per enumerated file, fanned out over a bounded rayon pool. Each
//! task runs decode → classify → transform end-to-end and touches nothing
//! shared except [`RunStatus`], one atomic cell per counter. The pool drains
//! completely before the summary snapshot is taken.
//!
//! Per-file failures (decode, encode, copy, mkdir) are logged and counted;
//! they never stop the run. A panicking task is caught at the task boundary
//! and converted into an error outcome so sibling workers keep going.

use crate::classify::{self, Disposition};
use crate::config::Config;
use crate::imaging::{self, ImagingError};
use crate::naming;
use rayon::prelude::*;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::error;

/// Shared outcome counters, incremented with relaxed atomic adds. Never
/// guarded by a lock — workers must not serialize on unrelated files.
#[derive(Debug, Default)]
pub struct RunStatus {
    total: AtomicU32,
    converted: AtomicU32,
    already_correct: AtomicU32,
    unsuitable: AtomicU32,
    half: AtomicU32,
    errors: AtomicU32,
}

/// Read-only snapshot of [`RunStatus`], taken after the pool drains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub total: u32,
    pub converted: u32,
    pub already_correct: u32,
    pub unsuitable: u32,
    pub half: u32,
    pub errors: u32,
}

impl RunStatus {
    pub fn new() -> Self {
        Self::default()
    }

    fn record_examined(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    fn record(&self, disposition: Disposition) {
        let counter = match disposition {
            Disposition::Converted => &self.converted,
            Disposition::AlreadyCorrect => &self.already_correct,
            Disposition::HalfSuitable => &self.half,
            Disposition::Unsuitable => &self.unsuitable,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> RunSummary {
        RunSummary {
            total: self.total.load(Ordering::Relaxed),
            converted: self.converted.load(Ordering::Relaxed),
            already_correct: self.already_correct.load(Ordering::Relaxed),
            unsuitable: self.unsuitable.load(Ordering::Relaxed),
            half: self.half.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

/// Process every file and return the drained counters.
///
/// Blocks until all submitted tasks complete. Always succeeds — per-file
/// failures are absorbed into the `errors` counter.
pub fn run(config: &Config, files: &[PathBuf]) -> RunSummary {
    let status = RunStatus::new();
    let work = || {
        files
            .par_iter()
            .for_each(|path| process_file(path, config, &status));
    };

    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.effective_threads())
        .build()
    {
        Ok(pool) => pool.install(work),
        Err(e) => {
            // Fall back to the global pool rather than refusing to run.
            error!("failed to build worker pool, using default: {e}");
            work();
        }
    }

    status.snapshot()
}

/// One task: classify and transform a single file, recording the outcome.
///
/// `catch_unwind` is the task boundary — a runtime fault in one file must not
/// tear down the pool.
fn process_file(path: &Path, config: &Config, status: &RunStatus) {
    status.record_examined();
    match catch_unwind(AssertUnwindSafe(|| dispose(path, config))) {
        Ok(Ok(disposition)) => status.record(disposition),
        Ok(Err(e)) => {
            error!("{}: {e}", path.display());
            status.record_error();
        }
        Err(panic) => {
            error!("{}: worker panicked: {}", path.display(), panic_message(&*panic));
            status.record_error();
        }
    }
}

/// Decode, classify, and perform the matching action for one file.
fn dispose(path: &Path, config: &Config) -> Result<Disposition, ImagingError> {
    let image = imaging::load(path)?;
    let (width, height) = (image.width(), image.height());
    let disposition = classify::classify(width, height, config);
    match disposition {
        Disposition::Converted => {
            let (w, h) = classify::converted_size(width, height, config);
            let resized = imaging::resize(&image, w, h);
            imaging::write_png(&naming::destination(config, path, w, h), &resized)?;
        }
        Disposition::AlreadyCorrect => {
            let dest = naming::destination(config, path, width, height);
            imaging::copy_verbatim(path, &dest)?;
        }
        Disposition::HalfSuitable => {
            let (w, h) = classify::half_size(width, height, config);
            let resized = imaging::resize(&image, w, h);
            imaging::write_png(&naming::destination(config, path, w, h), &resized)?;
        }
        Disposition::Unsuitable => {
            imaging::copy_verbatim(path, &naming::quarantine(config, path))?;
        }
    }
    Ok(disposition)
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}
