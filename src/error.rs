use std::path::PathBuf;

use crate::constants::*;

/// Errors raised while loading configuration or deriving the account.
#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
    #[error("{}", MISSING_MNEMONIC_MESSAGE)]
    MissingMnemonic,
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),
    #[error("failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
    #[error("key derivation failed: {0}")]
    Derivation(String),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl DeriveError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DeriveError::MissingMnemonic => EXIT_MISSING_MNEMONIC,
            _ => EXIT_FAILURE,
        }
    }

    /// Line written to stderr before exiting.
    pub fn report(&self) -> String {
        match self {
            DeriveError::MissingMnemonic => self.to_string(),
            other => format!("error: {}", other),
        }
    }
}

impl From<bip32::Error> for DeriveError {
    fn from(err: bip32::Error) -> Self {
        DeriveError::Derivation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeriveError>;
