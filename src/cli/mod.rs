//! Command-line interface definitions.
//!
//! Values that need validation beyond their shape (dates, ISO weeks) are kept
//! as strings here and parsed by the command handlers, so malformed input is
//! reported through the application's own error types.

use crate::constants;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Capture links into a TSV inbox and roll them into digests
#[derive(Parser, Debug)]
#[command(name = constants::APP_NAME, about = constants::APP_DESCRIPTION)]
#[command(version, long_about = None)]
pub struct CliArgs {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,

    /// Print verbose (debug) logging to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(
        long,
        global = true,
        value_parser = [constants::LOG_FORMAT_TEXT, constants::LOG_FORMAT_JSON],
        default_value = constants::LOG_FORMAT_TEXT
    )]
    pub log_format: String,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append a link to the inbox
    Add(AddArgs),
    /// Render a digest of a date range
    Digest(DigestArgs),
    /// Archive the inbox and start a fresh one
    ClearInbox(ClearInboxArgs),
    /// Print inbox records as tab-separated lines
    List(ListArgs),
}

/// Arguments of `curate add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    /// The URL to capture
    pub url: String,

    /// Tags for the link; a leading # is optional
    pub tags: Vec<String>,

    /// Title of the link
    #[arg(long)]
    pub title: Option<String>,

    /// Capture date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments of `curate digest`.
#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Append a section grouping links by tag
    #[arg(short = 'g', long)]
    pub group_tags: bool,

    /// Emit only the tag-grouped section
    #[arg(long)]
    pub tags_only: bool,

    /// Write a self-contained HTML page instead of markdown
    #[arg(long, visible_alias = "pd")]
    pub html: bool,

    /// ISO week to digest (YYYY-Www)
    #[arg(long, conflicts_with_all = ["start", "end"])]
    pub week: Option<String>,

    /// First day of an explicit range (YYYY-MM-DD)
    #[arg(long, requires = "end")]
    pub start: Option<String>,

    /// Last day of an explicit range (YYYY-MM-DD)
    #[arg(long, requires = "start")]
    pub end: Option<String>,

    /// Do not prepend templates/header.md
    #[arg(long)]
    pub no_header: bool,

    /// Output path, or - for stdout; defaults to digests/<range>.md
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,
}

/// Arguments of `curate clear-inbox`.
#[derive(Args, Debug)]
pub struct ClearInboxArgs {
    /// Where to put the archived inbox; defaults to <home>/archive
    #[arg(long)]
    pub archive_dir: Option<PathBuf>,
}

/// Arguments of `curate list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print at most N records
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Only records on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<String>,

    /// Only records on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,
}
