//! The `list` command.

use crate::dates::parse_date;
use crate::digest::filter_range;
use crate::errors::AppResult;
use crate::store::{Record, RecordStore};
use chrono::NaiveDate;

/// Loads inbox records, optionally bounded by `since`/`until` and truncated
/// to `limit`.
///
/// With either bound the result is filtered inclusively and sorted by date;
/// without bounds records come back in file order.
///
/// # Errors
///
/// Returns `AppError::Date` for a malformed bound and `AppError::Io` if the
/// inbox cannot be read.
pub fn list_records(
    store: &RecordStore,
    limit: Option<usize>,
    since: Option<&str>,
    until: Option<&str>,
) -> AppResult<Vec<Record>> {
    let since = since.map(parse_date).transpose()?;
    let until = until.map(parse_date).transpose()?;

    let records = store.load()?;
    let mut records = if since.is_some() || until.is_some() {
        filter_range(
            &records,
            since.unwrap_or(NaiveDate::MIN),
            until.unwrap_or(NaiveDate::MAX),
        )
    } else {
        records
    };

    if let Some(limit) = limit {
        records.truncate(limit);
    }
    Ok(records)
}
