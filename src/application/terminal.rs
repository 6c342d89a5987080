// src/application/terminal.rs
//
// Terminal host
//
// Stands in for the browser page: a file on disk plays the picked file,
// stderr plays the alert box, and clearing drops the pick so the submit
// check sees an empty `subtitlefile` field.

use std::path::Path;

use crate::application::commands::{on_selection_changed, on_submit};
use crate::application::dto::{SelectionResultDto, SubmissionReportDto};
use crate::application::host::FormHost;
use crate::config::ValidationRules;
use crate::domain::{FileSelection, FormFields, SelectedFile};
use crate::error::{AppError, AppResult};

pub struct TerminalHost {
    selection: FileSelection,
    alerts: Vec<String>,
    echo: bool,
}

impl TerminalHost {
    /// `echo` prints every alert to stderr as it happens
    pub fn new(selection: FileSelection, echo: bool) -> Self {
        Self {
            selection,
            alerts: Vec::new(),
            echo,
        }
    }

    pub fn selection(&self) -> &FileSelection {
        &self.selection
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl FormHost for TerminalHost {
    fn alert(&mut self, message: &str) {
        if self.echo {
            eprintln!("{}", message);
        }
        self.alerts.push(message.to_string());
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

/// Build the selection a file input would report for `path`
pub fn inspect_path(path: &Path) -> AppResult<FileSelection> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(AppError::Other(format!(
            "Not a regular file: {}",
            path.display()
        )));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::Other(format!("Path has no file name: {}", path.display())))?;

    Ok(FileSelection::new(
        path.to_string_lossy(),
        SelectedFile {
            name,
            size: metadata.len(),
        },
    ))
}

/// Pick `path`, then submit with `seconds`, the way a user would
pub fn check_upload(
    rules: &ValidationRules,
    path: &Path,
    seconds: &str,
    echo: bool,
) -> AppResult<SubmissionReportDto> {
    let picked = inspect_path(path)?;
    let mut host = TerminalHost::new(picked.clone(), echo);

    let verdict = on_selection_changed(&mut host, rules, &picked);

    let fields = FormFields::new(host.selection().field_value.clone(), seconds);
    let submitted = on_submit(&mut host, &fields);

    Ok(SubmissionReportDto {
        file: picked.field_value,
        selection: SelectionResultDto::from_result(&verdict),
        submitted,
        alerts: host.alerts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::SelectionStatus;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, size: usize) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&vec![b'x'; size]).unwrap();
        path
    }

    #[test]
    fn test_inspect_path_reads_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "movie.srt", 2048);

        let selection = inspect_path(&path).unwrap();
        let file = selection.file.unwrap();
        assert_eq!(file.name, "movie.srt");
        assert_eq!(file.size, 2048);
        assert!(selection.field_value.ends_with("movie.srt"));
    }

    #[test]
    fn test_inspect_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = inspect_path(&dir.path().join("missing.srt"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_inspect_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = inspect_path(dir.path());
        if let Err(AppError::Other(msg)) = result {
            assert!(msg.contains("Not a regular file"));
        } else {
            panic!("Expected Other error");
        }
    }

    #[test]
    fn test_clear_empties_field() {
        let mut host = TerminalHost::new(
            FileSelection::new(
                "a.txt",
                SelectedFile {
                    name: "a.txt".to_string(),
                    size: 1,
                },
            ),
            false,
        );
        host.alert("Invalid filetype: txt");
        host.clear_selection();

        assert!(host.selection().is_empty());
        assert_eq!(host.alerts().to_vec(), vec!["Invalid filetype: txt".to_string()]);
    }

    #[test]
    fn test_check_upload_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "movie.SRT", 150 * 1024);

        let report = check_upload(&ValidationRules::default(), &path, "30", false).unwrap();
        assert!(report.submitted);
        assert!(report.alerts.is_empty());
        assert_eq!(report.selection.status, SelectionStatus::Accepted);
        assert_eq!(report.selection.size_kb, Some(150));
    }

    #[test]
    fn test_check_upload_rejected_pick_blocks_submit() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "clip.txt", 100);

        let report = check_upload(&ValidationRules::default(), &path, "30", false).unwrap();
        assert!(!report.submitted);
        assert_eq!(report.selection.status, SelectionStatus::Rejected);
        assert_eq!(
            report.alerts,
            vec![
                "Invalid filetype: txt".to_string(),
                "No subtitle file is selected.".to_string(),
            ]
        );
    }

    #[test]
    fn test_check_upload_missing_seconds() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "movie.vtt", 10);

        let report = check_upload(&ValidationRules::default(), &path, "", false).unwrap();
        assert!(!report.submitted);
        assert_eq!(report.alerts, vec!["No seconds are entered.".to_string()]);
    }
}
