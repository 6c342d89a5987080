// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// - Flat, serializable views of verdicts for JSON output
// - Conversion FROM domain results only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{DomainResult, SelectionVerdict};

// ============================================================================
// SELECTION DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    Empty,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResultDto {
    pub status: SelectionStatus,
    pub format: Option<String>,
    pub size_kb: Option<u64>,
    pub reason: Option<String>,
}

impl SelectionResultDto {
    pub fn from_result(result: &DomainResult<SelectionVerdict>) -> Self {
        match result {
            Ok(SelectionVerdict::Empty) => Self {
                status: SelectionStatus::Empty,
                format: None,
                size_kb: None,
                reason: None,
            },
            Ok(SelectionVerdict::Accepted { format, size_kb }) => Self {
                status: SelectionStatus::Accepted,
                format: Some(format.to_string()),
                size_kb: Some(*size_kb),
                reason: None,
            },
            Err(err) => Self {
                status: SelectionStatus::Rejected,
                format: None,
                size_kb: None,
                reason: Some(err.to_string()),
            },
        }
    }
}

// ============================================================================
// SUBMISSION DTOs
// ============================================================================

/// What a full change-then-submit run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReportDto {
    pub file: String,
    pub selection: SelectionResultDto,
    pub submitted: bool,
    pub alerts: Vec<String>,
}
