// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and queue operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A reorder target index fell outside the category pool.
    ReorderIndexOutOfRange {
        /// The requested target index (0-based).
        index: usize,
        /// The size of the category pool being reordered.
        pool_size: usize,
    },
    /// The caddie being moved is not a member of the category pool.
    CaddieNotInPool {
        /// The caddie's canonical identifier.
        caddie_id: i64,
        /// The category of the pool being reordered.
        category: String,
    },
    /// Category string is not one of the three staffing tiers.
    InvalidCategory(String),
    /// Day-of-week string is not recognized.
    InvalidDayOfWeek(String),
    /// Caddie status string is not recognized.
    InvalidStatus(String),
    /// List order mode string is not recognized.
    InvalidOrderMode(String),
    /// Availability window kind string is not recognized.
    InvalidWindowKind(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReorderIndexOutOfRange { index, pool_size } => {
                write!(
                    f,
                    "Reorder target index {index} is outside the pool (size {pool_size})"
                )
            }
            Self::CaddieNotInPool {
                caddie_id,
                category,
            } => {
                write!(
                    f,
                    "Caddie {caddie_id} is not in the category '{category}' pool"
                )
            }
            Self::InvalidCategory(msg) => write!(f, "Invalid category: {msg}"),
            Self::InvalidDayOfWeek(msg) => write!(f, "Invalid day of week: {msg}"),
            Self::InvalidStatus(msg) => write!(f, "Invalid caddie status: {msg}"),
            Self::InvalidOrderMode(msg) => write!(f, "Invalid order mode: {msg}"),
            Self::InvalidWindowKind(msg) => write!(f, "Invalid window kind: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
