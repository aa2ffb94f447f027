use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use sl_core::content::DEFAULT_FILE_NAME;
use sl_core::ports::{DownloadError, DownloadPort, DownloadRequest};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use super::{network_error, status_error, Endpoints};

/// Saves activated attachments into a local directory.
///
/// Uploaded files are fetched from the download endpoint; inline `data:`
/// URLs are decoded in place. Either way the file lands under the
/// attachment's display name.
pub struct HttpDownloader {
    client: Client,
    endpoints: Endpoints,
    download_dir: PathBuf,
}

impl HttpDownloader {
    pub fn new(client: Client, endpoints: Endpoints, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            endpoints,
            download_dir: download_dir.into(),
        }
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let response = self.client.get(url).send().await.map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status).into());
        }

        let bytes = response.bytes().await.map_err(network_error)?;
        Ok(bytes.to_vec())
    }

    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, DownloadError> {
        fs::create_dir_all(&self.download_dir)
            .await
            .map_err(|e| save_error(&self.download_dir, e))?;

        let path = self.download_dir.join(safe_file_name(filename));
        fs::write(&path, bytes)
            .await
            .map_err(|e| save_error(&path, e))?;
        Ok(path)
    }
}

#[async_trait]
impl DownloadPort for HttpDownloader {
    #[tracing::instrument(name = "infra.http.download", skip(self, request), fields(filename = %request.filename()))]
    async fn download(&self, request: &DownloadRequest) -> Result<PathBuf, DownloadError> {
        let bytes = match request {
            DownloadRequest::File(file) => self.fetch(&self.endpoints.download_url(file)).await?,
            DownloadRequest::InlineData { data_url, .. } => decode_data_url(data_url)?,
        };

        let path = self.save(request.filename(), &bytes).await?;
        info!(path = %path.display(), size = bytes.len(), "attachment saved");
        Ok(path)
    }
}

/// Decode the payload of a `data:[<media>][;base64],<data>` URL.
fn decode_data_url(data_url: &str) -> Result<Vec<u8>, DownloadError> {
    let (header, data) = data_url
        .split_once(',')
        .ok_or_else(|| DownloadError::InvalidDataUrl("no payload separator".into()))?;

    if header.ends_with(";base64") {
        base64::engine::general_purpose::STANDARD
            .decode(data.trim())
            .map_err(|e| DownloadError::InvalidDataUrl(e.to_string()))
    } else {
        Ok(urlencoding::decode_binary(data.as_bytes()).into_owned())
    }
}

fn save_error(path: &Path, err: std::io::Error) -> DownloadError {
    DownloadError::Save {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Keep only the final path component so a name can't escape the directory.
fn safe_file_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_FILE_NAME)
        .to_string()
}
