use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier binding a list element to its registry entry.
///
/// Always derived from content (see [`crate::identity`]), never generated
/// randomly, so there is no `new()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(String);

impl_id!(ItemId);
