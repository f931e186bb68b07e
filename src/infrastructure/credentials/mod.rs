//! Credentials management infrastructure
//!
//! The GitHub token lives in a plain file under the user's config
//! directory; its trimmed content is the whole token.

use std::fs;
use std::path::{Path, PathBuf};

use directories::UserDirs;
use thiserror::Error;

/// Token file location relative to the home directory.
pub const TOKEN_FILE: &str = ".config/github-desktop-notifications-token";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Could not determine the home directory")]
    NoHomeDirectory,

    #[error("Failed to read token file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Token file {0} is empty")]
    Empty(PathBuf),
}

/// Absolute path of the token file.
pub fn token_path() -> Result<PathBuf, CredentialError> {
    UserDirs::new()
        .map(|dirs| dirs.home_dir().join(TOKEN_FILE))
        .ok_or(CredentialError::NoHomeDirectory)
}

/// Read the GitHub token from its default location.
pub fn read_token() -> Result<String, CredentialError> {
    read_token_from(&token_path()?)
}

/// Read a token file, trimming surrounding whitespace.
pub fn read_token_from(path: &Path) -> Result<String, CredentialError> {
    let raw = fs::read_to_string(path).map_err(|source| CredentialError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let token = raw.trim();
    if token.is_empty() {
        return Err(CredentialError::Empty(path.to_path_buf()));
    }
    Ok(token.to_string())
}
