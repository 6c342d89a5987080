use super::entity::{FileSelection, SelectionVerdict, SubtitleFormat};
use crate::config::ValidationRules;
use crate::domain::{DomainError, DomainResult};
use log::debug;

/// Checks the picked file against the rules.
///
/// Extension first, size second, stopping at the first failure.
/// An empty selection is not an error: there is nothing to reject.
pub fn validate_selection(
    rules: &ValidationRules,
    selection: &FileSelection,
) -> DomainResult<SelectionVerdict> {
    let Some(file) = selection.file.as_ref() else {
        debug!("No file selected, skipping validation");
        return Ok(SelectionVerdict::Empty);
    };

    let format = validate_extension(rules, &selection.field_value)?;
    let size_kb = validate_size(rules, file.size)?;

    Ok(SelectionVerdict::Accepted { format, size_kb })
}

/// Extension must name one of the accepted formats
fn validate_extension(rules: &ValidationRules, field_value: &str) -> DomainResult<SubtitleFormat> {
    let extension = file_extension(field_value);
    debug!("Derived extension {:?} from {:?}", extension, field_value);

    SubtitleFormat::from_extension(&extension)
        .filter(|format| rules.accepts(*format))
        .ok_or(DomainError::InvalidExtension { extension })
}

/// Rounded size must not exceed the limit (the limit itself passes)
fn validate_size(rules: &ValidationRules, bytes: u64) -> DomainResult<u64> {
    let size_kb = size_in_kb(bytes);
    debug!("File size {} bytes -> {}kB (limit {}kB)", bytes, size_kb, rules.max_size_kb);

    if size_kb > rules.max_size_kb {
        return Err(DomainError::TooLarge { size_kb });
    }
    Ok(size_kb)
}

/// Lowercased text after the last `.`.
///
/// Without a dot the whole value is returned, so `"subtitles"` yields
/// `"subtitles"` and a trailing dot yields `""`.
pub fn file_extension(filename: &str) -> String {
    let ext = match filename.rfind('.') {
        Some(pos) => &filename[pos + 1..],
        None => filename,
    };
    ext.to_lowercase()
}

/// Bytes to kilobytes, rounding halves up
pub fn size_in_kb(bytes: u64) -> u64 {
    bytes / 1024 + u64::from(bytes % 1024 >= 512)
}

/// Selection rules:
///
/// 1. An empty selection is never rejected
/// 2. The extension check runs before the size check
/// 3. Extensions compare case-insensitively
/// 4. The size limit is inclusive: exactly the limit passes
