//! Clipboard copy and the transient "copied" toast.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// How long the toast stays up after a copy.
pub const TOAST_DURATION: Duration = Duration::from_millis(1600);

/// Visibility of the "copied" toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyFeedback {
    shown_at: Option<Instant>,
}

impl CopyFeedback {
    /// Show the toast starting at `now`. Copying again restarts the timer.
    pub fn trigger(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.shown_at
            .is_some_and(|at| now.saturating_duration_since(at) < TOAST_DURATION)
    }

    /// Hide the toast once it has expired. Returns whether it is still visible.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_visible(now) {
            self.shown_at = None;
        }
        self.shown_at.is_some()
    }
}

/// OSC 52 escape sequence that asks the terminal to set the clipboard.
pub fn osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Write `text` to the system clipboard through the terminal.
pub fn copy_to_clipboard<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(osc52(text).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.is_visible(start));

        feedback.trigger(start);
        assert!(feedback.tick(start + Duration::from_millis(100)));
        assert!(feedback.is_visible(start + Duration::from_millis(1599)));
        assert!(!feedback.tick(start + TOAST_DURATION));
        assert_eq!(feedback, CopyFeedback::default());
    }

    #[test]
    fn test_retrigger_extends_toast() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.trigger(start);
        feedback.trigger(start + Duration::from_millis(1000));
        assert!(feedback.is_visible(start + Duration::from_millis(2000)));
    }

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_copy_writes_sequence() {
        let mut out = Vec::new();
        copy_to_clipboard(&mut out, "hello@example.com").unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("\x1b]52;c;"));
        assert!(written.ends_with('\x07'));
    }
}
