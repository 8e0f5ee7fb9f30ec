//! The `clear-inbox` command.

use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{ArchiveOutcome, RecordStore};
use chrono::{DateTime, Local};
use std::path::Path;

/// Archives the inbox into `archive_dir` (default `<home>/archive`) and
/// leaves an empty inbox behind.
///
/// # Errors
///
/// Returns `AppError::Archive` if the archive cannot be written; the inbox is
/// then left as it was.
pub fn clear_inbox(
    config: &Config,
    archive_dir: Option<&Path>,
    now: &DateTime<Local>,
) -> AppResult<ArchiveOutcome> {
    let archive_dir = archive_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.archive_dir());
    RecordStore::new(config.inbox_path()).archive(&archive_dir, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_date;
    use crate::store::Record;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn fixed_now() -> DateTime<Local> {
        let time = parse_date("2024-03-02")
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        Local.from_local_datetime(&time).single().unwrap()
    }

    #[test]
    fn test_clear_inbox_uses_default_archive_dir() {
        let temp_dir = tempdir().unwrap();
        let config = Config::with_home(temp_dir.path());
        let store = RecordStore::new(config.inbox_path());
        let record = Record::new(parse_date("2024-03-01").unwrap(), "code", "https://github.com/a", "", "").unwrap();
        store.append(&record).unwrap();

        let outcome = clear_inbox(&config, None, &fixed_now()).unwrap();

        assert_eq!(
            outcome,
            ArchiveOutcome::Archived(config.archive_dir().join("inbox-20240302-090500.tsv"))
        );
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_clear_inbox_custom_dir_and_missing_inbox() {
        let temp_dir = tempdir().unwrap();
        let config = Config::with_home(temp_dir.path());
        let custom = temp_dir.path().join("elsewhere");

        let outcome = clear_inbox(&config, Some(&custom), &fixed_now()).unwrap();

        assert_eq!(outcome, ArchiveOutcome::Initialized);
        assert!(config.inbox_path().exists());
    }
}
