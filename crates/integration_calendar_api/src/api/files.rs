use domain::{FileId, MAX_UPLOAD_BYTES, UploadedFile};
use reqwest::{
    Method,
    multipart::{Form, Part},
};
use serde_json::Value;
use tracing::instrument;

use crate::{client::CalendarApiClient, envelope::ApiResponse, error::ApiError};

/// A file to send as the `file` part of a multipart upload
#[derive(Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Whether the backend will refuse this file as too large
    #[must_use]
    pub fn exceeds_limit(&self) -> bool {
        self.bytes.len() as u64 > MAX_UPLOAD_BYTES
    }

    fn into_form(self) -> Result<Form, ApiError> {
        let mut part = Part::bytes(self.bytes).file_name(self.file_name);
        if let Some(mime) = self.mime_type {
            part = part
                .mime_str(&mime)
                .map_err(|e| ApiError::InvalidRequest(format!("invalid mime type '{mime}': {e}")))?;
        }
        Ok(Form::new().part("file", part))
    }
}

/// `/files` endpoints
#[derive(Debug, Clone, Copy)]
pub struct FilesApi<'a> {
    client: &'a CalendarApiClient,
}

impl<'a> FilesApi<'a> {
    pub(crate) const fn new(client: &'a CalendarApiClient) -> Self {
        Self { client }
    }

    /// Upload a file for use as an event attachment
    ///
    /// # Errors
    ///
    /// Returns an error if the mime type is malformed or the request fails.
    #[instrument(skip(self))]
    pub async fn upload(&self, upload: FileUpload) -> Result<ApiResponse<UploadedFile>, ApiError> {
        let form = upload.into_form()?;
        self.client.send_multipart(&["files", "upload"], form).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: FileId) -> Result<ApiResponse<Value>, ApiError> {
        let id = id.to_string();
        self.client.send_empty(Method::DELETE, &["files", &id]).await
    }
}
