//! Item content model.
//!
//! Raw item strings arrive from three places: typed input, completed uploads
//! and the server bootstrap. They are classified exactly once into an
//! [`ItemContent`] and carried in that form afterwards, so the rest of the
//! system never sniffs `data:` / `file://` prefixes again.

pub mod escape;
pub mod file_ref;
mod item_content;

pub use file_ref::{
    data_url_media_type, is_data_url, is_file_reference, FileReference, DATA_URL_PREFIX,
    DEFAULT_FILE_NAME, DEFAULT_MIME_TYPE, FILE_REF_PREFIX,
};
pub use item_content::ItemContent;
