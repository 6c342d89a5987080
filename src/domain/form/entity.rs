use serde::{Deserialize, Serialize};

/// Values of the upload form's required fields at submit time.
/// Kept as raw strings: only emptiness matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    /// `subtitlefile` field value
    pub subtitle_file: String,

    /// `seconds` field value, never parsed
    pub seconds: String,
}

impl FormFields {
    pub fn new(subtitle_file: impl Into<String>, seconds: impl Into<String>) -> Self {
        Self {
            subtitle_file: subtitle_file.into(),
            seconds: seconds.into(),
        }
    }
}
