//! List session use cases.
//!
//! Every use case works on ports only and is synchronous where it touches
//! the registry or the view. Network work is either awaited directly
//! (`execute`) or split so the controller can run it off the session loop.

pub mod add_item;
pub mod bootstrap_list;
pub mod internal;
pub mod persist_item_action;
pub mod toggle_item;
pub mod upload_file;

pub use add_item::{AddItem, AddItemError};
pub use bootstrap_list::BootstrapList;
pub use persist_item_action::{PersistError, PersistItemAction};
pub use toggle_item::{ToggleError, ToggleItem, ToggleOutcome};
pub use upload_file::{UploadError, UploadFileUseCase};
