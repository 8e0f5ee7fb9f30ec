//! The `digest` command.

use crate::config::Config;
use crate::constants;
use crate::dates::{DateRange, RangeSpecifier};
use crate::digest::{self, html, RenderOptions};
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where a rendered digest goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestTarget {
    /// Standard output.
    Stdout,
    /// `digests/<range>.md` (or `.html`) under the home directory.
    Default,
    /// An explicit file.
    Path(PathBuf),
}

impl DigestTarget {
    /// Interprets the `-o` value: `-` is stdout, absent is the default file.
    pub fn from_cli_arg(output: Option<&str>) -> Self {
        match output {
            Some(constants::STDOUT_PATH) => DigestTarget::Stdout,
            Some(path) => DigestTarget::Path(PathBuf::from(path)),
            None => DigestTarget::Default,
        }
    }
}

/// Everything needed to produce one digest.
#[derive(Debug, Clone)]
pub struct DigestRequest {
    /// Which days to include.
    pub range: RangeSpecifier,
    /// Which sections to render.
    pub options: RenderOptions,
    /// Convert the markup to HTML.
    pub html: bool,
    /// Output destination.
    pub target: DigestTarget,
}

/// Reads the header template, treating a missing file as no header.
fn read_header(path: &Path) -> AppResult<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(path)?))
}

/// Loads the inbox and renders the requested digest.
///
/// Returns the resolved range alongside the finished document.
///
/// # Errors
///
/// Returns `AppError::Date` for an inverted range and `AppError::Io` if the
/// inbox or header template cannot be read.
pub fn build_digest(
    config: &Config,
    request: &DigestRequest,
    today: NaiveDate,
) -> AppResult<(DateRange, String)> {
    let range = request.range.resolve(today)?;
    debug!("Digest range {} ({} to {})", range.label, range.start, range.end);

    let records = RecordStore::new(config.inbox_path()).load()?;
    let selected = digest::filter_range(&records, range.start, range.end);
    debug!("{} of {} records in range", selected.len(), records.len());

    let header = if request.options.include_header {
        read_header(&config.header_path())?
    } else {
        None
    };

    let markup = digest::render(&selected, &range.label, header.as_deref(), &request.options);
    let document = if request.html {
        html::to_html(&markup)
    } else {
        markup
    };

    Ok((range, document))
}

/// Renders a digest and writes it to its target.
///
/// Returns the path written, or `None` when the digest went to `out`.
///
/// # Errors
///
/// Returns `AppError::Output` if the digest file or its directory cannot be
/// written, plus any error from [`build_digest`].
pub fn write_digest(
    config: &Config,
    request: &DigestRequest,
    today: NaiveDate,
    out: &mut dyn Write,
) -> AppResult<Option<PathBuf>> {
    let (range, document) = build_digest(config, request, today)?;

    let path = match &request.target {
        DigestTarget::Stdout => {
            out.write_all(document.as_bytes())?;
            return Ok(None);
        }
        DigestTarget::Default => {
            digest::default_digest_path(&config.digests_dir(), &range.label, request.html)
        }
        DigestTarget::Path(path) => path.clone(),
    };

    let to_output_error = |source: std::io::Error| AppError::Output {
        path: path.clone(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_output_error)?;
    }
    fs::write(&path, document).map_err(to_output_error)?;

    info!("Wrote digest for {} to {:?}", range.label, path);
    Ok(Some(path))
}
