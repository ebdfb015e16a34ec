//! Run configuration and validation.
//!
//! [`Config`] is built once by the CLI, validated, and then shared read-only
//! with every worker. The defaults match the CLI defaults (`revised_images`,
//! `unsuitable_images`, 200 → 140).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config validation error: {0}")]
    Validation(&'static str),
}

/// Immutable options for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory converted and already-correct images are written under.
    pub output_root: PathBuf,
    /// Quarantine root for images that match no size pattern.
    pub unsuitable_root: PathBuf,
    /// Grid size input dimensions are checked against.
    pub in_multiple: u32,
    /// Grid size output dimensions are scaled to.
    pub resize_multiple: u32,
    /// Also accept images aligned to half of `in_multiple`.
    pub half: bool,
    /// Worker pool size override; `None` uses one worker per logical CPU.
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("revised_images"),
            unsuitable_root: PathBuf::from("unsuitable_images"),
            in_multiple: 200,
            resize_multiple: 140,
            half: false,
            threads: None,
        }
    }
}

impl Config {
    /// Check invariants that would otherwise surface as nonsense arithmetic
    /// deep in a worker. Fatal — nothing runs on an invalid config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output root may not be empty"));
        }
        if self.unsuitable_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation("unsuitable root may not be empty"));
        }
        if self.in_multiple < 1 {
            return Err(ConfigError::Validation(
                "in_multiple must be greater than 0",
            ));
        }
        if self.resize_multiple < 1 {
            return Err(ConfigError::Validation(
                "resize_multiple must be greater than 0",
            ));
        }
        if self.half {
            // A half-step must itself be an integer.
            if self.in_multiple % 2 == 1 {
                return Err(ConfigError::Validation(
                    "in_multiple must be even when half is set",
                ));
            }
            if self.resize_multiple % 2 == 1 {
                return Err(ConfigError::Validation(
                    "resize_multiple must be even when half is set",
                ));
            }
        }
        Ok(())
    }

    /// Effective worker count: requested threads capped at available cores,
    /// defaulting to all of them. User can constrain down, not up.
    pub fn effective_threads(&self) -> usize {
        let available = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        match self.threads {
            Some(n) if n >= 1 => n.min(available),
            _ => available,
        }
    }
}
