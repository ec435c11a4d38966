//! File-backed token store
//!
//! Keeps the access token in a small JSON file so the CLI stays signed in
//! between runs.

use std::{fs, io, path::PathBuf};

use integration_calendar_api::{TokenStore, TokenStoreError};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Serialize, Deserialize)]
struct TokenFile {
    access_token: String,
}

/// Token store writing `{"access_token": "..."}` to a file
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        &self.path
    }

    fn write(&self, token: &SecretString) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(&TokenFile {
            access_token: token.expose_secret().to_owned(),
        })
        .map_err(|e| TokenStoreError::Format(e.to_string()))?;
        fs::write(&self.path, contents)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<SecretString> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Cannot read token file");
                return None;
            },
        };

        match serde_json::from_str::<TokenFile>(&contents) {
            Ok(file) if !file.access_token.is_empty() => {
                debug!(path = %self.path.display(), "Loaded access token");
                Some(SecretString::from(file.access_token))
            },
            Ok(_) => None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring malformed token file");
                None
            },
        }
    }

    fn save(&self, token: Option<&SecretString>) -> Result<(), TokenStoreError> {
        match token {
            Some(token) => self.write(token),
            None => match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            },
        }
    }
}
