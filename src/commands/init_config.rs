use std::fmt;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::{GridConfig, GridError, GridResult};

/// Write the default configuration file
#[derive(Debug, Default, Args)]
pub struct InitConfigCommand {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Result of the init-config command
#[derive(Debug)]
pub struct InitConfigResult {
    /// Where the configuration was written
    pub path: PathBuf,
    /// Whether an existing file was replaced
    pub overwritten: bool,
}

impl fmt::Display for InitConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.overwritten {
            write!(f, "Overwrote {}", self.path.display())
        } else {
            write!(f, "Wrote {}", self.path.display())
        }
    }
}

impl InitConfigCommand {
    /// Save [`GridConfig::default`] to `config_path`. An existing file is only
    /// replaced with `--force`.
    pub fn execute(&self, config_path: &Path) -> GridResult<InitConfigResult> {
        let exists = config_path.exists();
        if exists && !self.force {
            return Err(GridError::Io {
                path: config_path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "config file already exists (use --force to overwrite)",
                ),
            });
        }

        GridConfig::default().save(config_path)?;
        info!(path = %config_path.display(), overwritten = exists, "wrote default config");
        Ok(InitConfigResult {
            path: config_path.to_path_buf(),
            overwritten: exists,
        })
    }
}
