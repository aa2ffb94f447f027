use std::path::PathBuf;

use crate::ids::ItemId;
use crate::item::ActionCode;
use crate::ports::{DownloadError, TransportError, UploadedFile};

/// Completion of deferred work, delivered back to the list session.
///
/// Network calls and the removal delay run off the session loop; their
/// outcomes come back as events so every registry and list mutation still
/// happens on the session's own thread.
#[derive(Debug)]
pub enum ListEvent {
    PersistFinished {
        id: ItemId,
        action: ActionCode,
        result: Result<(), TransportError>,
    },
    UploadFinished {
        result: Result<UploadedFile, TransportError>,
    },
    DownloadFinished {
        id: ItemId,
        result: Result<PathBuf, DownloadError>,
    },
    TeardownDue {
        id: ItemId,
    },
}
