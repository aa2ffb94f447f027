use sl_core::ports::AlertPort;
use std::io::{self, Stderr, Write};
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Prints alerts to a terminal stream, stderr by default.
pub struct TerminalAlert<W: Write + Send = Stderr> {
    out: Mutex<W>,
}

impl TerminalAlert<Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl Default for TerminalAlert<Stderr> {
    fn default() -> Self {
        Self::stderr()
    }
}

impl<W: Write + Send> TerminalAlert<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> AlertPort for TerminalAlert<W> {
    fn alert(&self, message: &str) {
        info!(%message, "alert raised");
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        // A closed terminal leaves nowhere to report to.
        let _ = writeln!(out, "[!] {message}").and_then(|_| out.flush());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_is_written_with_marker() {
        let alert = TerminalAlert::new(Vec::new());
        alert.alert("File too large. Maximum size: 10MB");
        alert.alert("second\nline");

        let written = String::from_utf8(alert.into_inner()).unwrap();
        assert_eq!(
            written,
            "[!] File too large. Maximum size: 10MB\n[!] second\nline\n"
        );
    }
}
