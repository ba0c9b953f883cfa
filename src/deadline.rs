//! Per-file processing deadline.
//!
//! Each file's read + parse + extract sequence runs under one [`Deadline`]
//! constructed at the top of that file's scope. The token is a plain value:
//! it ceases to exist when the scope exits, on success and on failure
//! alike, so a stale deadline can never leak into the next file's work.
//! Cancellation is cooperative; callers check at each suspension point and
//! the parser arms tree-sitter's own timeout with the remaining budget.

use crate::error::{MineError, Result};
use std::path::Path;
use std::time::{Duration, Instant};

/// Cooperative cancellation token covering one file's processing.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    /// Start a deadline expiring after the given budget.
    pub fn after(budget: Duration) -> Self {
        Deadline {
            expires_at: Instant::now() + budget,
        }
    }

    /// Whether the budget has been used up.
    pub fn expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Budget left, zero once expired.
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }

    /// Fail with [`MineError::DeadlineExceeded`] if the budget is gone.
    pub fn check(&self, file: &Path) -> Result<()> {
        if self.expired() {
            Err(MineError::DeadlineExceeded {
                file: file.to_path_buf(),
            })
        } else {
            Ok(())
        }
    }
}
