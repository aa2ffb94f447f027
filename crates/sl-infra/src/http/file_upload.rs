use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use sl_core::ports::{FileUploadPort, TransportError, UploadFile, UploadedFile};
use tracing::info;

use super::{network_error, status_error, Endpoints};

/// Multipart upload to `upload-file/{list}`, field name `file`.
pub struct HttpFileUploader {
    client: Client,
    endpoints: Endpoints,
}

impl HttpFileUploader {
    pub fn new(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }
}

#[async_trait]
impl FileUploadPort for HttpFileUploader {
    #[tracing::instrument(
        name = "infra.http.upload_file",
        skip(self, file),
        fields(file_name = %file.file_name, size = file.size())
    )]
    async fn upload(&self, file: UploadFile) -> Result<UploadedFile, TransportError> {
        let part = Part::bytes(file.bytes).file_name(file.file_name);
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoints.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        let uploaded: UploadedFile = response
            .json()
            .await
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;

        info!(file_id = %uploaded.file_id, "file uploaded");
        Ok(uploaded)
    }
}
