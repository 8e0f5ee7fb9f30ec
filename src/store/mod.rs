//! The record log and its I/O.
//!
//! Records live in a single tab-separated file, one record per line, in the
//! fixed column order `DATE KIND URL TITLE TAGS`. The file is the only source
//! of truth: every invocation reloads it in full.
//!
//! The log is not locked. Two invocations appending at the same time may
//! interleave; this is an accepted limitation of a single-user tool.

use crate::constants;
use crate::dates::{format_date, parse_date};
use crate::errors::{AppError, AppResult, ArchiveError};
use chrono::{DateTime, Local, NaiveDate};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One curated link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Day the link was captured.
    pub date: NaiveDate,
    /// Classification label.
    pub kind: String,
    /// The captured URL.
    pub url: String,
    /// Optional title, empty when absent.
    pub title: String,
    /// Normalized, space-separated `#tags`.
    pub tags: String,
}

/// Replaces the characters that delimit fields and records.
fn sanitize_field(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}

impl Record {
    /// Builds a record, replacing tabs and newlines in every text field with
    /// spaces so it always serializes to exactly five columns.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the URL is blank.
    pub fn new(
        date: NaiveDate,
        kind: &str,
        url: &str,
        title: &str,
        tags: &str,
    ) -> AppResult<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::InvalidInput("URL must not be empty".to_string()));
        }

        Ok(Record {
            date,
            kind: sanitize_field(kind),
            url: sanitize_field(url),
            title: sanitize_field(title.trim()),
            tags: sanitize_field(tags),
        })
    }

    /// Serializes the record as one tab-joined line, without a newline.
    pub fn to_line(&self) -> String {
        [
            format_date(self.date).as_str(),
            self.kind.as_str(),
            self.url.as_str(),
            self.title.as_str(),
            self.tags.as_str(),
        ]
        .join("\t")
    }

    /// Parses one line of the log.
    ///
    /// Returns `None` for blank lines and for lines whose date column is not a
    /// valid date. Missing trailing columns default to empty, except the kind,
    /// which defaults to `link`.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return None;
        }

        // Columns past the fifth are ignored
        let mut columns = line
            .split(constants::FIELD_SEPARATOR)
            .take(constants::RECORD_FIELD_COUNT);
        let date = parse_date(columns.next()?.trim()).ok()?;
        let kind = columns.next().unwrap_or(constants::MISSING_KIND);
        let url = columns.next().unwrap_or_default();
        let title = columns.next().unwrap_or_default();
        let tags = columns.next().unwrap_or_default();

        Some(Record {
            date,
            kind: kind.to_string(),
            url: url.to_string(),
            title: title.to_string(),
            tags: tags.to_string(),
        })
    }
}

/// What `RecordStore::archive` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    /// There was no log to archive; an empty one was created.
    Initialized,
    /// The log was moved to the contained path and replaced by an empty one.
    Archived(PathBuf),
}

/// The append-only record log at a fixed path.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// A store backed by the file at `path`. Nothing is touched until used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every readable record, in file order.
    ///
    /// A missing file yields no records. Lines with an unparseable date are
    /// skipped and never abort the load. Each skip is reported at `warn` so
    /// records missing from digests and listings can be traced to the line.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the file exists but cannot be read.
    pub fn load(&self) -> AppResult<Vec<Record>> {
        if !self.path.exists() {
            debug!("No inbox at {:?}", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut records = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Record::from_line(line) {
                Some(record) => records.push(record),
                None => warn!("Skipping malformed inbox line {}", index + 1),
            }
        }

        debug!("Loaded {} records from {:?}", records.len(), self.path);
        Ok(records)
    }

    /// Appends one record, creating the file and its parent directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the directory or file cannot be written.
    pub fn append(&self, record: &Record) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", record.to_line())?;

        debug!("Appended record for {}", record.url);
        Ok(())
    }

    /// Creates an empty log if none exists. Returns `true` when created.
    pub fn ensure_exists(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        File::create(&self.path)?;
        Ok(true)
    }

    /// Moves the log into `archive_dir` and leaves an empty log in its place.
    ///
    /// The archive is named `inbox-<YYYYMMDD-HHMMSS>.tsv` from `now`. A rename
    /// is tried first; if it fails (e.g. across devices) the log is copied,
    /// the copy is synced to disk, and only then is the live log truncated. If
    /// the copy fails the live log is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Archive` if the directory cannot be created or the
    /// log can be neither moved nor copied, and `AppError::Io` if the fresh
    /// log cannot be created afterwards.
    pub fn archive(&self, archive_dir: &Path, now: &DateTime<Local>) -> AppResult<ArchiveOutcome> {
        if self.ensure_exists()? {
            info!("No inbox to archive; initialized {:?}", self.path);
            return Ok(ArchiveOutcome::Initialized);
        }

        fs::create_dir_all(archive_dir).map_err(|source| ArchiveError::CreateDir {
            path: archive_dir.to_path_buf(),
            source,
        })?;

        let destination = archive_destination(archive_dir, now);

        match fs::rename(&self.path, &destination) {
            Ok(()) => {
                File::create(&self.path)?;
            }
            Err(e) => {
                debug!("Rename failed ({}), falling back to copy", e);
                copy_durably(&self.path, &destination).map_err(|source| ArchiveError::Copy {
                    destination: destination.clone(),
                    source,
                })?;
                File::create(&self.path)?;
            }
        }

        info!("Archived inbox to {:?}", destination);
        Ok(ArchiveOutcome::Archived(destination))
    }
}

/// Picks `<prefix>-<timestamp>.tsv`, adding `-N` if that name is taken.
fn archive_destination(archive_dir: &Path, now: &DateTime<Local>) -> PathBuf {
    let stem = format!(
        "{}-{}",
        constants::ARCHIVE_PREFIX,
        now.format(constants::ARCHIVE_TIMESTAMP_FORMAT)
    );

    let mut candidate = archive_dir.join(format!("{}.{}", stem, constants::ARCHIVE_EXTENSION));
    let mut suffix = 1;
    while candidate.exists() {
        candidate = archive_dir.join(format!(
            "{}-{}.{}",
            stem,
            suffix,
            constants::ARCHIVE_EXTENSION
        ));
        suffix += 1;
    }
    candidate
}

fn copy_durably(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;
    File::open(to)?.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn fixed_now() -> DateTime<Local> {
        let time = d("2024-01-15").and_hms_opt(14, 30, 5).unwrap();
        Local.from_local_datetime(&time).single().unwrap()
    }

    #[test]
    fn test_record_line_round_trip() {
        let record = Record::new(d("2024-01-15"), "code", "https://github.com/a/b", "A repo", "#rust #cli").unwrap();
        let line = record.to_line();
        assert_eq!(line, "2024-01-15\tcode\thttps://github.com/a/b\tA repo\t#rust #cli");
        assert_eq!(Record::from_line(&line), Some(record));
    }

    #[test]
    fn test_record_new_sanitizes_delimiters() {
        let record = Record::new(d("2024-01-15"), "article", " https://e.com ", "two\tpart\ntitle", "").unwrap();
        assert_eq!(record.url, "https://e.com");
        assert_eq!(record.title, "two part title");
        assert_eq!(record.to_line().split('\t').count(), 5);
    }

    #[test]
    fn test_record_new_rejects_empty_url() {
        let result = Record::new(d("2024-01-15"), "article", "   ", "", "");
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_from_line_defaults_missing_columns() {
        let record = Record::from_line("2024-01-15").unwrap();
        assert_eq!(record.kind, "link");
        assert_eq!(record.url, "");
        assert_eq!(record.title, "");
        assert_eq!(record.tags, "");

        let record = Record::from_line("2024-01-15\tvideo\thttps://youtu.be/x").unwrap();
        assert_eq!(record.kind, "video");
        assert_eq!(record.title, "");
    }

    #[test]
    fn test_from_line_skips_bad_dates_and_blanks() {
        assert_eq!(Record::from_line("not-a-date\tcode\turl\t\t"), None);
        assert_eq!(Record::from_line("2023-02-30\tcode\turl\t\t"), None);
        assert_eq!(Record::from_line("   "), None);
    }

    #[test]
    fn test_from_line_ignores_extra_columns() {
        let record = Record::from_line("2024-01-01\tcode\thttps://e.com\tT\t#a\textra\tmore").unwrap();
        assert_eq!(record.tags, "#a");
        assert_eq!(record.to_line(), "2024-01-01\tcode\thttps://e.com\tT\t#a");
    }

    #[test]
    fn test_from_line_tolerates_crlf() {
        let record = Record::from_line("2024-01-15\tcode\turl\tT\t#a\r").unwrap();
        assert_eq!(record.tags, "#a");
    }

    #[test]
    fn test_load_skips_corrupt_line() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("inbox.tsv");
        fs::write(
            &path,
            "2024-01-15\tcode\thttps://github.com/a\t\t#x\n\
             garbage\tline\n\
             \n\
             2024-01-16\tarticle\thttps://e.com\tTitle\t\n",
        )
        .unwrap();

        let records = RecordStore::new(&path).load().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url, "https://github.com/a");
        assert_eq!(records[1].title, "Title");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = tempdir().unwrap();
        let store = RecordStore::new(temp_dir.path().join("absent.tsv"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_creates_parent_and_preserves_order() {
        let temp_dir = tempdir().unwrap();
        let store = RecordStore::new(temp_dir.path().join("deep").join("inbox.tsv"));

        let first = Record::new(d("2024-01-02"), "code", "https://github.com/a", "", "").unwrap();
        let second = Record::new(d("2024-01-01"), "pdf", "https://e.com/x.pdf", "Paper", "#ml").unwrap();
        store.append(&first).unwrap();
        store.append(&second).unwrap();

        assert_eq!(store.load().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_append_to_unwritable_path_fails() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "").unwrap();
        let store = RecordStore::new(blocker.join("inbox.tsv"));

        let record = Record::new(d("2024-01-02"), "code", "https://github.com/a", "", "").unwrap();
        assert!(matches!(store.append(&record), Err(AppError::Io(_))));
    }

    #[test]
    fn test_archive_missing_store_initializes() {
        let temp_dir = tempdir().unwrap();
        let store = RecordStore::new(temp_dir.path().join("inbox.tsv"));
        let archive_dir = temp_dir.path().join("archive");

        let outcome = store.archive(&archive_dir, &fixed_now()).unwrap();

        assert_eq!(outcome, ArchiveOutcome::Initialized);
        assert!(store.path().exists());
        assert!(!archive_dir.exists());
    }

    #[test]
    fn test_archive_moves_records_and_leaves_empty_store() {
        let temp_dir = tempdir().unwrap();
        let store = RecordStore::new(temp_dir.path().join("inbox.tsv"));
        let record = Record::new(d("2024-01-02"), "code", "https://github.com/a", "", "#x").unwrap();
        store.append(&record).unwrap();
        let archive_dir = temp_dir.path().join("archive");

        let outcome = store.archive(&archive_dir, &fixed_now()).unwrap();

        let expected = archive_dir.join("inbox-20240115-143005.tsv");
        assert_eq!(outcome, ArchiveOutcome::Archived(expected.clone()));
        assert_eq!(fs::read_to_string(&expected).unwrap(), format!("{}\n", record.to_line()));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_archive_same_second_does_not_overwrite() {
        let temp_dir = tempdir().unwrap();
        let store = RecordStore::new(temp_dir.path().join("inbox.tsv"));
        let archive_dir = temp_dir.path().join("archive");
        let record = Record::new(d("2024-01-02"), "code", "https://github.com/a", "", "").unwrap();

        store.append(&record).unwrap();
        store.archive(&archive_dir, &fixed_now()).unwrap();
        store.append(&record).unwrap();
        let outcome = store.archive(&archive_dir, &fixed_now()).unwrap();

        assert_eq!(
            outcome,
            ArchiveOutcome::Archived(archive_dir.join("inbox-20240115-143005-1.tsv"))
        );
        assert!(archive_dir.join("inbox-20240115-143005.tsv").exists());
    }

    #[test]
    fn test_archive_failure_leaves_store_intact() {
        let temp_dir = tempdir().unwrap();
        let store = RecordStore::new(temp_dir.path().join("inbox.tsv"));
        let record = Record::new(d("2024-01-02"), "code", "https://github.com/a", "", "").unwrap();
        store.append(&record).unwrap();

        // A regular file where the archive directory should be
        let archive_dir = temp_dir.path().join("archive");
        fs::write(&archive_dir, "").unwrap();

        let result = store.archive(&archive_dir, &fixed_now());

        assert!(matches!(result, Err(AppError::Archive(_))));
        assert_eq!(store.load().unwrap(), vec![record]);
    }
}
