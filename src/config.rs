use std::env;
use std::path::Path;

use zeroize::Zeroizing;

use crate::constants::*;
use crate::error::{DeriveError, Result};

/// Runtime inputs gathered from the environment.
pub struct Config {
    mnemonic: Zeroizing<String>,
}

impl Config {
    /// Loads the dotenv file, then reads `ETH_MNEMONIC`.
    ///
    /// An explicit `env_file` must exist. Without one, `.env` in the working
    /// directory is loaded when present. Variables already set in the process
    /// environment take precedence over the file.
    pub fn from_env(env_file: Option<&Path>) -> Result<Self> {
        load_env_file(env_file)?;
        Self::from_value(env::var(MNEMONIC_ENV).ok())
    }

    /// Builds a config from the raw variable value. Absent and empty values
    /// are both treated as unset.
    pub fn from_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(phrase) if !phrase.is_empty() => Ok(Self { mnemonic: Zeroizing::new(phrase) }),
            _ => Err(DeriveError::MissingMnemonic),
        }
    }

    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }
}

fn load_env_file(env_file: Option<&Path>) -> Result<()> {
    match env_file {
        Some(path) => {
            dotenvy::from_path(path).map_err(|source| DeriveError::EnvFile { path: path.to_path_buf(), source })?;
            tracing::debug!(path = %path.display(), "loaded env file");
        }
        // Only the working directory is consulted; parent directories are not searched.
        None => match dotenvy::from_path(Path::new(DOTENV_FILE)) {
            Ok(()) => tracing::debug!(path = DOTENV_FILE, "loaded env file"),
            Err(err) if err.not_found() => tracing::trace!("no .env file in working directory"),
            Err(err) => tracing::warn!(error = %err, "ignoring unreadable .env file"),
        },
    }
    Ok(())
}
