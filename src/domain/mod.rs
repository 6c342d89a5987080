// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Validation Rules
//
// Everything in here is pure: values in, verdict out.
// Alerts and field clearing belong to the application layer.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod form;
pub mod selection;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Selection Domain (file-input change)
pub use selection::{
    file_extension, size_in_kb, validate_selection, FileSelection, SelectedFile, SelectionVerdict,
    SubtitleFormat,
};

// Form Domain (submission gate)
pub use form::{check_fields, FormFields};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Reasons a selection or a submission is rejected.
///
/// The `Display` output of each variant is the exact message shown to the
/// user, so hosts can forward `err.to_string()` straight into an alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid filetype: {extension}")]
    InvalidExtension { extension: String },

    #[error("Filesize = {size_kb}kB\nToo large!")]
    TooLarge { size_kb: u64 },

    #[error("No subtitle file is selected.")]
    MissingSubtitleFile,

    #[error("No seconds are entered.")]
    MissingSeconds,
}

impl DomainError {
    /// Whether the rejection invalidates the current file selection.
    ///
    /// Only the file-input checks do; missing fields just block submission.
    pub fn clears_selection(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidExtension { .. } | DomainError::TooLarge { .. }
        )
    }
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
