//! Command handlers.
//!
//! Each submodule implements one command on top of the core modules. The
//! [`dispatch`] function routes parsed arguments to them and prints the
//! user-facing result.

pub mod add;
pub mod clear;
pub mod digest;
pub mod list;

pub use add::add_link;
pub use clear::clear_inbox;
pub use digest::{build_digest, write_digest, DigestRequest, DigestTarget};
pub use list::list_records;

use crate::classify::Classifier;
use crate::cli::Command;
use crate::config::Config;
use crate::dates::RangeSpecifier;
use crate::digest::RenderOptions;
use crate::errors::AppResult;
use crate::store::{ArchiveOutcome, RecordStore};
use chrono::{DateTime, Local};
use std::io::Write;

/// Runs one parsed command against `config`.
///
/// `now` is read once by the caller and used for every date decision in the
/// invocation. Normal output goes to `out`.
///
/// # Errors
///
/// Propagates the handler's error; nothing is printed to `out` for a failed
/// command.
pub fn dispatch(
    command: Command,
    config: &Config,
    now: &DateTime<Local>,
    out: &mut dyn Write,
) -> AppResult<()> {
    let today = now.date_naive();

    match command {
        Command::Add(args) => {
            let store = RecordStore::new(config.inbox_path());
            let classifier = Classifier::load(&config.rules_path())?;
            let record = add_link(
                &store,
                &classifier,
                &args.url,
                &args.tags,
                args.title.as_deref(),
                args.date.as_deref(),
                today,
            )?;
            writeln!(out, "Added: {}", record.to_line())?;
        }
        Command::Digest(args) => {
            let request = DigestRequest {
                range: RangeSpecifier::from_cli_args(
                    args.week.as_deref(),
                    args.start.as_deref(),
                    args.end.as_deref(),
                )?,
                options: RenderOptions {
                    include_header: !args.no_header,
                    tags_only: args.tags_only,
                    group_by_tag: args.group_tags,
                },
                html: args.html,
                target: DigestTarget::from_cli_arg(args.output.as_deref()),
            };
            if let Some(path) = write_digest(config, &request, today, out)? {
                writeln!(out, "Wrote {}", path.display())?;
            }
        }
        Command::ClearInbox(args) => match clear_inbox(config, args.archive_dir.as_deref(), now)? {
            ArchiveOutcome::Initialized => {
                writeln!(out, "Initialized new inbox.tsv")?;
            }
            ArchiveOutcome::Archived(path) => {
                writeln!(out, "Archived to {} and cleared inbox.tsv", path.display())?;
            }
        },
        Command::List(args) => {
            let store = RecordStore::new(config.inbox_path());
            let records = list_records(
                &store,
                args.limit,
                args.since.as_deref(),
                args.until.as_deref(),
            )?;
            for record in records {
                writeln!(out, "{}", record.to_line())?;
            }
        }
    }

    Ok(())
}
