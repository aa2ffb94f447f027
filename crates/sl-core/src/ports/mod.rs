//! Port interfaces for the application layer
//!
//! Ports define the contract between the list use cases and the
//! infrastructure / platform implementations, so the identity and sync logic
//! stays independent of HTTP, the clipboard and the rendering surface.
//!
//! ## Port Placement Guidelines
//!
//! A port belongs here when it is a capability the list session depends on
//! and an outer crate (`sl-infra`, `sl-platform`) implements it.

mod alert;
mod clipboard;
mod download;
mod markdown;
mod registry;
mod timer;
mod transport;
mod view;

pub use alert::AlertPort;
pub use clipboard::ClipboardPort;
pub use download::{DownloadError, DownloadPort, DownloadRequest};
pub use markdown::MarkdownRendererPort;
pub use registry::{ContentRegistryPort, RegistryError};
pub use timer::TeardownTimerPort;
pub use transport::{ActionTransportPort, FileUploadPort, TransportError, UploadFile, UploadedFile};
pub use view::ItemViewPort;
