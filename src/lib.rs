// src/lib.rs
// Subform - Subtitle upload form validation
//
// Architecture:
// - Domain: pure validation rules, verdict in / verdict out
// - Application: form handlers that turn verdicts into host effects
// - Config: the rules themselves (formats, size limit)

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod logger;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    check_fields,
    file_extension,
    size_in_kb,
    validate_selection,
    DomainError,
    DomainResult,
    FileSelection,
    FormFields,
    SelectedFile,
    SelectionVerdict,
    SubtitleFormat,
};

// ============================================================================
// PUBLIC API - Configuration & Errors
// ============================================================================

pub use config::{default_config_path, ValidationRules};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{
    check_upload,
    inspect_path,
    on_selection_changed,
    on_submit,
    ErrorResponse,
    FormHost,
    SubmissionReportDto,
    TerminalHost,
};
