//! Process bootstrap: logging, configuration and dependency wiring.

pub mod tracing;
pub mod wiring;
