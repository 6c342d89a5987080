use serde::{Deserialize, Serialize};

/// A file picked in the upload form's file input.
/// Only exists while something is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    /// File name as exposed by the picker
    pub name: String,

    /// File size in bytes
    pub size: u64,
}

/// State of the file input at the moment its change handler runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSelection {
    /// Value reported by the form field (a path or a bare file name)
    pub field_value: String,

    /// The picked file, `None` when the selection is empty
    pub file: Option<SelectedFile>,
}

/// Subtitle formats the upload endpoint understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    Srt,
    Vtt,
}

/// Outcome of a selection that was not rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionVerdict {
    /// Nothing selected, nothing to check
    Empty,

    /// Extension and size are within the rules
    Accepted { format: SubtitleFormat, size_kb: u64 },
}

impl FileSelection {
    pub fn new(field_value: impl Into<String>, file: SelectedFile) -> Self {
        Self {
            field_value: field_value.into(),
            file: Some(file),
        }
    }

    /// An input with no file picked
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.file.is_none()
    }

    /// Drop the current pick, the way resetting the input's value does
    pub fn clear(&mut self) {
        self.field_value.clear();
        self.file = None;
    }
}

impl SubtitleFormat {
    pub const ALL: [SubtitleFormat; 2] = [SubtitleFormat::Srt, SubtitleFormat::Vtt];

    /// Match an already-lowercased extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "srt" => Some(SubtitleFormat::Srt),
            "vtt" => Some(SubtitleFormat::Vtt),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Vtt => "vtt",
        }
    }
}

impl std::fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension_is_exact() {
        assert_eq!(SubtitleFormat::from_extension("srt"), Some(SubtitleFormat::Srt));
        assert_eq!(SubtitleFormat::from_extension("vtt"), Some(SubtitleFormat::Vtt));
        // Callers lowercase first
        assert_eq!(SubtitleFormat::from_extension("SRT"), None);
        assert_eq!(SubtitleFormat::from_extension("ass"), None);
        assert_eq!(SubtitleFormat::from_extension(""), None);
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut selection = FileSelection::new(
            "C:\\fakepath\\movie.srt",
            SelectedFile {
                name: "movie.srt".to_string(),
                size: 1024,
            },
        );
        assert!(!selection.is_empty());

        selection.clear();
        assert!(selection.is_empty());
        assert!(selection.field_value.is_empty());
        assert_eq!(selection, FileSelection::empty());
    }

    #[test]
    fn test_verdict_serializes_with_kind_tag() {
        let verdict = SelectionVerdict::Accepted {
            format: SubtitleFormat::Vtt,
            size_kb: 12,
        };
        let json = serde_json::to_string(&verdict).unwrap();
        assert!(json.contains("\"kind\":\"accepted\""));
        assert!(json.contains("\"format\":\"vtt\""));
    }
}
