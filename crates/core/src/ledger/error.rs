//! Ledger error types.

use thiserror::Error;

/// Violations of transaction entity invariants.
///
/// The hosting layer rejects these at entity-creation time; the
/// aggregators tolerate offending records as no-ops rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Transaction amount must be strictly positive.
    #[error("Transaction amount must be strictly positive")]
    NonPositiveAmount,

    /// Source and destination accounts must differ.
    #[error("Source and destination accounts must be different")]
    SameAccountTransfer,

    /// Only transfers may omit a category.
    #[error("Only transfers may omit a category")]
    MissingCategory,
}
