use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a list item.
///
/// ```text
/// New ──→ Active ──→ Acknowledged ──→ Removed
///  ↑                                     │
///  └─────────────────────────────────────┘
/// ```
///
/// The cycle is unconditional: every interaction moves one step forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    #[default]
    New,
    Active,
    Acknowledged,
    Removed,
}

impl ItemState {
    pub const ALL: [ItemState; 4] = [
        ItemState::New,
        ItemState::Active,
        ItemState::Acknowledged,
        ItemState::Removed,
    ];

    pub fn ordinal(self) -> u8 {
        match self {
            Self::New => 0,
            Self::Active => 1,
            Self::Acknowledged => 2,
            Self::Removed => 3,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(usize::from(ordinal)).copied()
    }

    /// `(state + 1) mod 4`
    pub fn next(self) -> Self {
        Self::ALL[(usize::from(self.ordinal()) + 1) % Self::ALL.len()]
    }

    /// Code reported to the server when *leaving* this state.
    pub fn action_code(self) -> ActionCode {
        match self {
            Self::New => ActionCode::Create,
            Self::Active => ActionCode::Highlight,
            Self::Acknowledged => ActionCode::Delete,
            Self::Removed => ActionCode::Reset,
        }
    }

    /// Style class carried by the rendered element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::New => "btn-default",
            Self::Active => "btn-warning",
            Self::Acknowledged => "btn-danger",
            Self::Removed => "btn-dark",
        }
    }

    /// State column of a stored list line (`"0"`, `"1"`, `"2"`).
    ///
    /// Anything unrecognised renders as [`ItemState::New`].
    pub fn from_server_state(raw: &str) -> Self {
        match raw.trim() {
            "1" => Self::Active,
            "2" => Self::Acknowledged,
            _ => Self::New,
        }
    }
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::New => "new",
            Self::Active => "active",
            Self::Acknowledged => "acknowledged",
            Self::Removed => "removed",
        };
        f.write_str(label)
    }
}

/// Single-letter action understood by the remote authority.
///
/// The server applies `c` → state 1, `h` → state 2, `d` → delete,
/// `u` → state 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionCode {
    #[serde(rename = "c")]
    Create,
    #[serde(rename = "h")]
    Highlight,
    #[serde(rename = "d")]
    Delete,
    #[serde(rename = "u")]
    Reset,
}

impl ActionCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "c",
            Self::Highlight => "h",
            Self::Delete => "d",
            Self::Reset => "u",
        }
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
