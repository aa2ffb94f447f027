//! reqwest-backed adapters for the list server endpoints.

mod action_transport;
mod download;
mod endpoints;
mod file_upload;

pub use action_transport::HttpActionTransport;
pub use download::HttpDownloader;
pub use endpoints::Endpoints;
pub use file_upload::HttpFileUploader;

use reqwest::StatusCode;
use sl_core::ports::TransportError;

fn status_error(status: StatusCode) -> TransportError {
    TransportError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    }
}

fn network_error(err: reqwest::Error) -> TransportError {
    TransportError::Network(err.to_string())
}
