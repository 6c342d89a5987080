use super::entity::FormFields;
use crate::domain::{DomainError, DomainResult};

/// Validates that every required field has a value.
/// Fields are checked in form order and the first empty one wins.
pub fn check_fields(fields: &FormFields) -> DomainResult<()> {
    validate_subtitle_file(fields)?;
    validate_seconds(fields)?;
    Ok(())
}

/// A subtitle file must be picked
fn validate_subtitle_file(fields: &FormFields) -> DomainResult<()> {
    if fields.subtitle_file.is_empty() {
        return Err(DomainError::MissingSubtitleFile);
    }
    Ok(())
}

/// Seconds must be entered; any text counts
fn validate_seconds(fields: &FormFields) -> DomainResult<()> {
    if fields.seconds.is_empty() {
        return Err(DomainError::MissingSeconds);
    }
    Ok(())
}
