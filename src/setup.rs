//! First-run layout.
//!
//! Every invocation makes sure the root directory and its standard contents
//! exist before a command runs, so a fresh `CURATE_HOME` works immediately.

use crate::classify::ensure_default_rules_file;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

fn create_dir(path: &Path, what: &str) -> AppResult<()> {
    fs::create_dir_all(path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to create {} directory {}: {}", what, path.display(), e),
        ))
    })
}

/// Creates the root, `templates/` and `digests/` directories, an empty inbox
/// and the default rules file, whichever are missing.
///
/// # Errors
///
/// Returns `AppError::Io` if any of them cannot be created.
pub fn ensure_layout(config: &Config) -> AppResult<()> {
    create_dir(config.home(), "home")?;
    create_dir(&config.templates_dir(), "templates")?;
    create_dir(&config.digests_dir(), "digests")?;

    if RecordStore::new(config.inbox_path()).ensure_exists()? {
        info!("Initialized empty inbox");
    }
    if ensure_default_rules_file(&config.rules_path())? {
        info!("Wrote default classification rules");
    }

    debug!("Layout ready");
    Ok(())
}
