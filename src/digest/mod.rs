//! Digest rendering.
//!
//! Records in a date range are rendered to a small markup dialect (headings,
//! bullets, `[text](url)` links and `*emphasis*`). The same markup is written
//! as-is or passed through [`html::to_html`] for a self-contained page.

pub mod html;

use crate::constants;
use crate::store::Record;
use crate::tags::{normalize_for_display, split_tags};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Which sections a digest contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prepend the header template, if one is supplied.
    pub include_header: bool,
    /// Omit the flat section and emit only the grouped one.
    pub tags_only: bool,
    /// Append the grouped section after the flat one.
    pub group_by_tag: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            include_header: true,
            tags_only: false,
            group_by_tag: false,
        }
    }
}

/// Records dated within `start..=end`, sorted by date.
///
/// The sort is stable, so records sharing a date keep their load order.
pub fn filter_range(records: &[Record], start: NaiveDate, end: NaiveDate) -> Vec<Record> {
    let mut selected: Vec<Record> = records
        .iter()
        .filter(|record| record.date >= start && record.date <= end)
        .cloned()
        .collect();
    selected.sort_by_key(|record| record.date);
    selected
}

/// Host portion of a URL: the scheme is dropped and everything from the first
/// `/` on is cut. Falls back to the whole URL if that leaves nothing.
///
/// # Examples
///
/// ```
/// use curate::digest::url_domain;
///
/// assert_eq!(url_domain("https://github.com/foo/bar"), "github.com");
/// assert_eq!(url_domain("example.org/page"), "example.org");
/// assert_eq!(url_domain("example.org/go?to=https://other.net/x"), "example.org");
/// ```
pub fn url_domain(url: &str) -> &str {
    // Only a leading `scheme://` is stripped; `://` later in the URL is data
    let without_scheme = match url.find("://") {
        Some(index) if !url[..index].contains('/') => &url[index + 3..],
        _ => url,
    };
    let host = without_scheme.split('/').next().unwrap_or_default();
    if host.is_empty() {
        url
    } else {
        host
    }
}

/// One bullet line: `- [domain](url) — *kind* — Title — #Tag1 #Tag2`.
///
/// The title and tag segments, with their separators, are left out when
/// empty.
pub fn render_line(record: &Record) -> String {
    let mut line = format!(
        "- [{}]({}){}*{}*",
        url_domain(&record.url),
        record.url,
        constants::SEGMENT_SEPARATOR,
        record.kind
    );

    let title = record.title.trim();
    if !title.is_empty() {
        line.push_str(constants::SEGMENT_SEPARATOR);
        line.push_str(title);
    }

    let tags: Vec<String> = split_tags(&record.tags)
        .into_iter()
        .map(normalize_for_display)
        .collect();
    if !tags.is_empty() {
        line.push_str(constants::SEGMENT_SEPARATOR);
        line.push_str(&tags.join(" "));
    }

    line
}

/// The flat section: a heading naming the range, then one bullet per record.
pub fn render_flat(records: &[Record], range_label: &str) -> String {
    let mut out = format!("# {} {}\n\n", constants::FLAT_SECTION_TITLE, range_label);
    for record in records {
        out.push_str(&render_line(record));
        out.push('\n');
    }
    out.push('\n');
    out
}

/// The grouped section: one heading per tag, sorted by display form.
///
/// A record appears under every tag it carries, in input order. Tags that
/// collapse to the same display form share one heading.
pub fn render_grouped_by_tag(records: &[Record]) -> String {
    let mut by_tag: BTreeMap<String, Vec<&Record>> = BTreeMap::new();
    for record in records {
        for tag in split_tags(&record.tags) {
            let display = normalize_for_display(tag);
            if display.trim_start_matches(constants::TAG_PREFIX).is_empty() {
                continue;
            }
            let members = by_tag.entry(display).or_default();
            if !members.last().is_some_and(|last| std::ptr::eq(*last, record)) {
                members.push(record);
            }
        }
    }

    let mut out = format!("## {}\n\n", constants::GROUPED_SECTION_TITLE);
    if by_tag.is_empty() {
        out.push_str(constants::NO_TAGS_PLACEHOLDER);
        out.push('\n');
        return out;
    }

    for (tag, members) in &by_tag {
        let heading = tag.strip_prefix(constants::TAG_PREFIX).unwrap_or(tag.as_str());
        out.push_str(&format!("### {}\n", heading));
        for record in members {
            out.push_str(&render_line(record));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Renders a complete digest.
///
/// The order is fixed: header (if requested and non-empty), flat section
/// (unless `tags_only`), grouped section (if `tags_only` or `group_by_tag`).
pub fn render(
    records: &[Record],
    range_label: &str,
    header: Option<&str>,
    options: &RenderOptions,
) -> String {
    let mut out = String::new();

    if options.include_header {
        if let Some(header) = header.filter(|h| !h.is_empty()) {
            out.push_str(header);
            if !header.ends_with('\n') {
                out.push('\n');
            }
            out.push('\n');
        }
    }

    if !options.tags_only {
        out.push_str(&render_flat(records, range_label));
    }

    if options.tags_only || options.group_by_tag {
        out.push_str(&render_grouped_by_tag(records));
    }

    out
}

/// File-name-safe form of a range label.
///
/// ` to ` becomes `_to_`; anything else outside `[A-Za-z0-9_-]` becomes `-`.
pub fn safe_base_from_range_label(label: &str) -> String {
    let safe: String = label
        .replace(" to ", "_to_")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    if safe.is_empty() {
        constants::DEFAULT_DIGEST_BASENAME.to_string()
    } else {
        safe
    }
}

/// Default output file for a digest of `range_label` inside `digests_dir`.
pub fn default_digest_path(digests_dir: &Path, range_label: &str, html: bool) -> PathBuf {
    let extension = if html {
        constants::HTML_EXTENSION
    } else {
        constants::MARKUP_EXTENSION
    };
    digests_dir.join(format!(
        "{}.{}",
        safe_base_from_range_label(range_label),
        extension
    ))
}
