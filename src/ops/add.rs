//! The `add` command.

use crate::classify::Classifier;
use crate::dates::parse_date;
use crate::errors::AppResult;
use crate::store::{Record, RecordStore};
use crate::tags::{normalize_for_storage, split_tags};
use chrono::NaiveDate;
use tracing::info;

/// Classifies `url`, normalizes its tags and appends it to the inbox.
///
/// `date` overrides `today` when given.
///
/// # Errors
///
/// Returns `AppError::Date` for a malformed `date`, `AppError::InvalidInput`
/// for a blank URL and `AppError::Io` if the inbox cannot be written. Nothing
/// is written when an error is returned.
pub fn add_link(
    store: &RecordStore,
    classifier: &Classifier,
    url: &str,
    tags: &[String],
    title: Option<&str>,
    date: Option<&str>,
    today: NaiveDate,
) -> AppResult<Record> {
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => today,
    };

    let kind = classifier.classify(url.trim());
    // One argument may hold several whitespace-separated tags
    let tokens: Vec<&str> = tags.iter().flat_map(|t| split_tags(t)).collect();
    let tags = normalize_for_storage(&tokens);
    let record = Record::new(date, kind, url, title.unwrap_or_default(), &tags)?;

    store.append(&record)?;
    info!("Added {} link", record.kind);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, DateError};
    use tempfile::tempdir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_classifies_and_normalizes() {
        let temp_dir = tempdir().unwrap();
        let store = RecordStore::new(temp_dir.path().join("inbox.tsv"));
        let classifier = Classifier::with_default_rules();

        let record = add_link(
            &store,
            &classifier,
            "https://github.com/foo/bar",
            &strings(&["rust", "#rust", "cli"]),
            Some("Foo"),
            None,
            today(),
        )
        .unwrap();

        assert_eq!(record.kind, "code");
        assert_eq!(record.tags, "#rust #cli");
        assert_eq!(record.date, today());
        assert_eq!(store.load().unwrap(), vec![record]);
    }

    #[test]
    fn test_add_pdf_with_explicit_date() {
        let temp_dir = tempdir().unwrap();
        let store = RecordStore::new(temp_dir.path().join("inbox.tsv"));
        let classifier = Classifier::with_default_rules();

        let record = add_link(
            &store,
            &classifier,
            "https://example.com/x.pdf",
            &[],
            None,
            Some("2023-12-31"),
            today(),
        )
        .unwrap();

        assert_eq!(record.kind, "pdf");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(record.title, "");
        assert_eq!(record.tags, "");
    }

    #[test]
    fn test_add_splits_tag_arguments_on_whitespace() {
        let temp_dir = tempdir().unwrap();
        let store = RecordStore::new(temp_dir.path().join("inbox.tsv"));

        let record = add_link(
            &store,
            &Classifier::default(),
            "https://example.com",
            &strings(&["rust cli", "a\tb", "#rust"]),
            None,
            None,
            today(),
        )
        .unwrap();

        assert_eq!(record.tags, "#rust #cli #a #b");
        let stored = &store.load().unwrap()[0];
        assert_eq!(
            normalize_for_storage(&split_tags(&stored.tags)),
            stored.tags
        );
    }

    #[test]
    fn test_add_bad_date_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let store = RecordStore::new(temp_dir.path().join("inbox.tsv"));

        let result = add_link(
            &store,
            &Classifier::default(),
            "https://example.com",
            &[],
            None,
            Some("2023-02-30"),
            today(),
        );

        assert!(matches!(
            result,
            Err(AppError::Date(DateError::InvalidDate(_)))
        ));
        assert!(!store.path().exists());
    }

    #[test]
    fn test_add_empty_url_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let store = RecordStore::new(temp_dir.path().join("inbox.tsv"));

        let result = add_link(&store, &Classifier::default(), "  ", &[], None, None, today());

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert!(!store.path().exists());
    }
}
