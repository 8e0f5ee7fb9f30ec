/*!
# Curate - A Link Inbox and Digest Tool

Curate captures links into a tab-separated inbox, classifies them by URL, and
renders weekly (or arbitrary range) digests in markup or HTML.

This file contains the main application flow: logging setup, argument
parsing, configuration, first-run layout, and dispatch to the command
handlers.

## Usage

```
curate [OPTIONS] <COMMAND>

Commands:
  add          Append a link to the inbox
  digest       Render a digest of a date range
  clear-inbox  Archive the inbox and start a fresh one
  list         Print inbox records as tab-separated lines
  help         Print this message or the help of the given subcommand(s)

Options:
  -v, --verbose              Print verbose (debug) logging to stderr
      --log-format <FORMAT>  Log output format [default: text] [possible values: text, json]
  -h, --help                 Print help
  -V, --version              Print version
```

## Configuration

- `CURATE_HOME`: root directory for the inbox, rules, templates, digests and
  archives (defaults to the current directory). `~` and `$VARS` are expanded.
- `RUST_LOG`: overrides the log filter.
*/

use chrono::Local;
use clap::Parser;
use curate::cli::CliArgs;
use curate::config::Config;
use curate::constants;
use curate::errors::AppResult;
use curate::{ops, setup};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool, log_format: &str) {
    let default_level = if verbose {
        constants::VERBOSE_LOG_LEVEL
    } else {
        constants::DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    if log_format == constants::LOG_FORMAT_JSON {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(args: CliArgs) -> AppResult<()> {
    // Obtain current date/time once at the beginning
    let now = Local::now();

    info!("Loading configuration");
    let config = Config::load()?;
    debug!("Configuration: {:?}", config);

    setup::ensure_layout(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ops::dispatch(args.command, &config, &now, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose, &args.log_format);
    debug!("CLI arguments: {:?}", args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
