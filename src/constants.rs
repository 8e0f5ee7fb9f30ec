//! Constants used throughout the application.
//!
//! This module contains all constants used in the curate application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "curate";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "A plain-text workflow for capturing links and rolling them into weekly digests";

// Logging
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used with `--verbose`.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable selecting the root directory for all state.
pub const ENV_VAR_CURATE_HOME: &str = "CURATE_HOME";
/// Root directory used when `CURATE_HOME` is unset.
pub const DEFAULT_HOME_DIR: &str = ".";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// File System Layout
/// File name of the record log.
pub const INBOX_FILE_NAME: &str = "inbox.tsv";
/// File name of the classification rules.
pub const RULES_FILE_NAME: &str = "rules.tsv";
/// Directory holding the digest header template.
pub const TEMPLATES_DIR_NAME: &str = "templates";
/// File name of the digest header template.
pub const HEADER_FILE_NAME: &str = "header.md";
/// Default output directory for digests.
pub const DIGESTS_DIR_NAME: &str = "digests";
/// Default destination for archived logs.
pub const ARCHIVE_DIR_NAME: &str = "archive";
/// File name prefix for archived logs.
pub const ARCHIVE_PREFIX: &str = "inbox";
/// File extension for archived logs.
pub const ARCHIVE_EXTENSION: &str = "tsv";
/// File extension for markup digests.
pub const MARKUP_EXTENSION: &str = "md";
/// File extension for HTML digests.
pub const HTML_EXTENSION: &str = "html";
/// Output path meaning "write to standard output".
pub const STDOUT_PATH: &str = "-";

// Record Format
/// Field separator in the record log and the rules file.
pub const FIELD_SEPARATOR: char = '\t';
/// Number of fields in a persisted record.
pub const RECORD_FIELD_COUNT: usize = 5;
/// Kind assigned when no classification rule matches.
pub const FALLBACK_KIND: &str = "article";
/// Kind assumed for stored records that lack a kind column.
pub const MISSING_KIND: &str = "link";
/// Prefix marking a tag token.
pub const TAG_PREFIX: char = '#';
/// Prefix marking a comment line in the rules file.
pub const RULE_COMMENT_PREFIX: char = '#';

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Timestamp format used in archive file names.
pub const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";
/// Smallest accepted ISO week number.
pub const MIN_ISO_WEEK: u32 = 1;
/// Largest accepted ISO week number.
pub const MAX_ISO_WEEK: u32 = 53;
/// Days in a week.
pub const DAYS_PER_WEEK: i64 = 7;

// Rendering
/// Separator placed between the segments of a digest bullet.
pub const SEGMENT_SEPARATOR: &str = " — ";
/// Heading prefix of the flat digest section.
pub const FLAT_SECTION_TITLE: &str = "All Items";
/// Heading of the grouped digest section.
pub const GROUPED_SECTION_TITLE: &str = "By Tag";
/// Placeholder emitted when no record in range carries a tag.
pub const NO_TAGS_PLACEHOLDER: &str = "(No tags in range)";
/// Base name used when a range label sanitizes to nothing.
pub const DEFAULT_DIGEST_BASENAME: &str = "digest";
/// Title of generated HTML documents.
pub const HTML_TITLE: &str = "Digest";
