//! Mouse and focus reporting for the lifetime of the UI.

use std::io::{self, Write};

use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};

/// Keeps mouse capture and focus reporting on until dropped.
///
/// Dropping also runs while a panic unwinds, so the shell never inherits
/// a terminal that still emits mouse and focus escape codes.
pub struct CaptureGuard<W: Write> {
    out: W,
}

impl<W: Write> CaptureGuard<W> {
    pub fn enable(mut out: W) -> io::Result<Self> {
        execute!(out, EnableMouseCapture, EnableFocusChange)?;
        Ok(Self { out })
    }
}

impl<W: Write> Drop for CaptureGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, DisableFocusChange, DisableMouseCapture) {
            tracing::warn!(error = %e, "failed to release mouse capture");
        }
    }
}
