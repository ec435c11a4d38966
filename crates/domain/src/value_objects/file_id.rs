//! Uploaded file identifier value object

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Backend-assigned identifier of an uploaded attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(Uuid);

impl FileId {
    /// Create a file ID from an existing UUID
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a file ID from a string
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| DomainError::InvalidId(format!("{s}: {e}")))
    }

    /// Get the underlying UUID
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FileId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_id_roundtrips_through_display() {
        let uuid = Uuid::new_v4();
        let id = FileId::from_uuid(uuid);
        assert_eq!(FileId::parse(&id.to_string()).unwrap(), id);
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!("attachment.pdf".parse::<FileId>().is_err());
    }
}
