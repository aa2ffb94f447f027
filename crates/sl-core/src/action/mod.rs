//! Wire form of a state transition.

mod record;

pub use record::ActionRecord;
