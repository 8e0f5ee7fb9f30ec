/*!
# Curate

Curate is a small link-curation tool. Links are appended to a tab-separated
inbox with a capture date, a kind inferred from the URL, an optional title and
tags. Digests gather the links of an ISO week (or any inclusive date range)
into a markup document, optionally grouped by tag or converted to HTML.

## Core Features

- Append links with automatic URL classification from an editable rules file
- Normalize tags for storage (`#tag`) and display (`#Tag`, acronyms kept)
- Render digests for the current week, a named ISO week, or an explicit range
- Archive the inbox with a timestamped copy and start fresh
- List inbox records with optional bounds and a limit

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Root directory resolution and derived paths
- `errors`: Error handling infrastructure
- `dates`: Calendar dates, ISO weeks and range resolution
- `tags`: Tag normalization
- `classify`: Rule-based URL classification
- `store`: The TSV inbox and its archive
- `digest`: Digest rendering, with markup to HTML conversion in `digest::html`
- `setup`: First-run layout
- `ops`: Command handlers

## Usage Example

```rust,no_run
use curate::{Classifier, Config, RecordStore};
use curate::ops::add_link;

fn main() -> curate::AppResult<()> {
    let config = Config::load()?;
    let store = RecordStore::new(config.inbox_path());
    let classifier = Classifier::load(&config.rules_path())?;

    let today = chrono::Local::now().date_naive();
    let record = add_link(
        &store,
        &classifier,
        "https://github.com/rust-lang/rust",
        &["rust".to_string()],
        None,
        None,
        today,
    )?;
    println!("{}", record.to_line());
    Ok(())
}
```
*/

/// Rule-based URL classification
pub mod classify;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Dates, ISO weeks and date ranges
pub mod dates;
/// Digest rendering
pub mod digest;
/// Error types and utilities for error handling
pub mod errors;
/// Command handlers
pub mod ops;
/// First-run layout
pub mod setup;
/// The link inbox
pub mod store;
/// Tag normalization
pub mod tags;

// Re-export important types for convenience
pub use classify::Classifier;
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use store::{Record, RecordStore};
