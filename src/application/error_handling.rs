// src/application/error_handling.rs
//
// Error responses for the JSON surface
//
// - Maps AppError to a stable, categorized shape
// - Logs the full error before flattening it

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The user's input was rejected
    Validation,

    /// The file could not be inspected
    FileSystem,

    /// Rules file missing, malformed or inconsistent
    Configuration,

    /// Anything else
    Internal,
}

impl ErrorResponse {
    pub fn from_app_error(err: &AppError) -> Self {
        match err {
            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: domain_error.to_string(),
                details: None,
            },

            AppError::Io(io_error) => {
                error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Serialization(serde_error) => {
                error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Configuration,
                    message: "Rules file is not valid JSON".to_string(),
                    details: Some(serde_error.to_string()),
                }
            }

            AppError::Config(message) => Self {
                success: false,
                error_type: ErrorType::Configuration,
                message: "Invalid validation rules".to_string(),
                details: Some(message.clone()),
            },

            AppError::Other(message) => {
                error!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: message.clone(),
                    details: None,
                }
            }
        }
    }

    /// Fallback for errors that never went through AppError
    pub fn internal(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Internal,
            message,
            details: None,
        }
    }
}
