use sl_core::{FileReference, ListConfig};
use urlencoding::encode;

/// URLs of the list server, derived once from the session config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
    list_name: String,
}

impl Endpoints {
    pub fn new(server_url: &str, base_url_path: &str, list_name: &str) -> Self {
        let path = base_url_path.trim_matches('/');
        let base = if path.is_empty() {
            format!("{}/", server_url.trim_end_matches('/'))
        } else {
            format!("{}/{path}/", server_url.trim_end_matches('/'))
        };
        Self {
            base,
            list_name: encode(list_name).into_owned(),
        }
    }

    pub fn from_config(config: &ListConfig) -> Self {
        Self::new(&config.server_url, &config.base_url_path, &config.list_name)
    }

    /// `POST {base}items/{list}`
    pub fn items_url(&self) -> String {
        format!("{}items/{}", self.base, self.list_name)
    }

    /// `POST {base}upload-file/{list}`
    pub fn upload_url(&self) -> String {
        format!("{}upload-file/{}", self.base, self.list_name)
    }

    /// `GET {base}download-file/{list}/{fileId}?filename={originalName}`
    pub fn download_url(&self, file: &FileReference) -> String {
        format!(
            "{}download-file/{}/{}?filename={}",
            self.base,
            self.list_name,
            encode(&file.file_id),
            encode(&file.original_name)
        )
    }
}
