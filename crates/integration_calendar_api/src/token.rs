//! Access token persistence
//!
//! The client keeps the bearer token in memory and writes every change
//! through a [`TokenStore`], so a later process can pick the session up.

use std::fmt;

use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors raised while persisting the access token
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("Token store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Token store format error: {0}")]
    Format(String),
}

/// Where the access token lives between runs
pub trait TokenStore: Send + Sync + fmt::Debug {
    /// Read the persisted token, if any
    fn load(&self) -> Option<SecretString>;

    /// Persist `token`; `None` removes it
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, token: Option<&SecretString>) -> Result<(), TokenStoreError>;
}

/// Copy a secret without exposing it outside this call
#[must_use]
pub fn duplicate_secret(secret: &SecretString) -> SecretString {
    SecretString::from(secret.expose_secret().to_owned())
}

/// Process-local token store
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<SecretString>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already stored
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(SecretString::from(token.into()))),
        }
    }
}

impl fmt::Debug for MemoryTokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTokenStore")
            .field("has_token", &self.token.read().is_some())
            .finish()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<SecretString> {
        self.token.read().as_ref().map(duplicate_secret)
    }

    fn save(&self, token: Option<&SecretString>) -> Result<(), TokenStoreError> {
        *self.token.write() = token.map(duplicate_secret);
        Ok(())
    }
}
