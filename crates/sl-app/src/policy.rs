//! User-facing alert texts.
//!
//! Transports and use cases return explicit errors; which of them interrupt
//! the user is decided here and in the controller, nowhere else.

use sl_core::ports::TransportError;

pub fn persist_failed(err: &TransportError) -> String {
    format!("Error occurred, action might not have been saved, please reload.\n{err}")
}

pub fn file_too_large(max_file_size_mb: f64) -> String {
    format!("File too large. Maximum size: {max_file_size_mb}MB")
}

pub fn upload_failed(err: &dyn std::fmt::Display) -> String {
    format!("File upload failed: {err}")
}
