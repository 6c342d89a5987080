// src/application/commands.rs
//
// Form event handlers
//
// WIRING:
// - on_selection_changed -> file input "change"
// - on_submit            -> form "submit", blocks when it returns false

use log::{info, warn};

use crate::application::host::FormHost;
use crate::config::ValidationRules;
use crate::domain::{
    check_fields, validate_selection, DomainResult, FileSelection, FormFields, SelectionVerdict,
};

/// Validate a fresh pick in the file input.
///
/// A rejection alerts the user and clears the input, in that order.
/// Anything else leaves the host untouched.
pub fn on_selection_changed(
    host: &mut dyn FormHost,
    rules: &ValidationRules,
    selection: &FileSelection,
) -> DomainResult<SelectionVerdict> {
    let result = validate_selection(rules, selection);

    match &result {
        Ok(SelectionVerdict::Accepted { format, size_kb }) => {
            info!("Accepted {} ({}, {}kB)", selection.field_value, format, size_kb);
        }
        Ok(SelectionVerdict::Empty) => {}
        Err(err) => {
            warn!("Rejected {}: {}", selection.field_value, err.to_string().replace('\n', " "));
            host.alert(&err.to_string());
            if err.clears_selection() {
                host.clear_selection();
            }
        }
    }

    result
}

/// Gate a submission on the required fields. Returns whether to submit.
pub fn on_submit(host: &mut dyn FormHost, fields: &FormFields) -> bool {
    match check_fields(fields) {
        Ok(()) => {
            info!("Submitting {} with seconds {:?}", fields.subtitle_file, fields.seconds);
            true
        }
        Err(err) => {
            warn!("Submission blocked: {}", err);
            host.alert(&err.to_string());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::host::MockFormHost;
    use crate::domain::SelectedFile;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn pick(name: &str, size: u64) -> FileSelection {
        FileSelection::new(
            name,
            SelectedFile {
                name: name.to_string(),
                size,
            },
        )
    }

    #[test]
    fn test_accepted_selection_has_no_effect() {
        let mut host = MockFormHost::new();
        host.expect_alert().never();
        host.expect_clear_selection().never();

        let result = on_selection_changed(
            &mut host,
            &ValidationRules::default(),
            &pick("episode.vtt", 4096),
        );
        assert!(matches!(result, Ok(SelectionVerdict::Accepted { size_kb: 4, .. })));
    }

    #[test]
    fn test_invalid_extension_alerts_then_clears() {
        let mut host = MockFormHost::new();
        let mut seq = Sequence::new();
        host.expect_alert()
            .with(eq("Invalid filetype: txt"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        host.expect_clear_selection()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let result = on_selection_changed(
            &mut host,
            &ValidationRules::default(),
            &pick("clip.txt", 10),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_too_large_alerts_then_clears() {
        let mut host = MockFormHost::new();
        host.expect_alert()
            .with(eq("Filesize = 300kB\nToo large!"))
            .times(1)
            .return_const(());
        host.expect_clear_selection().times(1).return_const(());

        let result = on_selection_changed(
            &mut host,
            &ValidationRules::default(),
            &pick("movie.srt", 300 * 1024),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_selection_is_silent() {
        let mut host = MockFormHost::new();
        host.expect_alert().never();
        host.expect_clear_selection().never();

        let result = on_selection_changed(
            &mut host,
            &ValidationRules::default(),
            &FileSelection::empty(),
        );
        assert_eq!(result, Ok(SelectionVerdict::Empty));
    }

    #[test]
    fn test_submit_without_file() {
        let mut host = MockFormHost::new();
        host.expect_alert()
            .with(eq("No subtitle file is selected."))
            .times(1)
            .return_const(());
        host.expect_clear_selection().never();

        assert!(!on_submit(&mut host, &FormFields::new("", "30")));
    }

    #[test]
    fn test_submit_without_seconds() {
        let mut host = MockFormHost::new();
        host.expect_alert()
            .with(eq("No seconds are entered."))
            .times(1)
            .return_const(());

        assert!(!on_submit(&mut host, &FormFields::new("movie.srt", "")));
    }

    #[test]
    fn test_submit_complete_form() {
        let mut host = MockFormHost::new();
        host.expect_alert().never();

        assert!(on_submit(&mut host, &FormFields::new("movie.srt", "not a number")));
    }
}
