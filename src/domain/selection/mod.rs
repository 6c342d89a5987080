pub mod entity;
pub mod invariants;

pub use entity::{FileSelection, SelectedFile, SelectionVerdict, SubtitleFormat};
pub use invariants::{file_extension, size_in_kb, validate_selection};
