pub mod config;
pub mod http;
pub mod registry;
pub mod time;

pub use config::load_config;
pub use http::{Endpoints, HttpActionTransport, HttpDownloader, HttpFileUploader};
pub use registry::InMemoryContentRegistry;
pub use time::TeardownTimer;
