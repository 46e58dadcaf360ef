//! Rendering devices.

use std::io::{self, Write};
use std::mem;

/// Presents a titled block of text to the user.
///
/// Implementations must accept any title and any text, including empty ones.
/// Rendering blocks until the text has been presented; there is no result to
/// consult, so devices deal with their own IO failures.
pub trait Device {
    fn render(&mut self, title: &str, text: &str);
}

impl<D: Device + ?Sized> Device for &mut D {
    fn render(&mut self, title: &str, text: &str) {
        (**self).render(title, text);
    }
}

/// One `render` call captured by a [`RecordingDevice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    pub title: String,
    pub text: String,
}

/// Keeps every render in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingDevice {
    renders: Vec<Render>,
}

impl RecordingDevice {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn renders(&self) -> &[Render] {
        &self.renders
    }

    #[must_use]
    pub fn last(&self) -> Option<&Render> {
        self.renders.last()
    }

    /// Drain the captured renders.
    pub fn take(&mut self) -> Vec<Render> {
        mem::take(&mut self.renders)
    }
}

impl Device for RecordingDevice {
    fn render(&mut self, title: &str, text: &str) {
        self.renders.push(Render {
            title: title.to_string(),
            text: text.to_string(),
        });
    }
}

/// Writes renders as plain text: the title on its own line (when there is
/// one), then the text.
#[derive(Debug)]
pub struct WriterDevice<W> {
    out: W,
}

impl<W: Write> WriterDevice<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_render(&mut self, title: &str, text: &str) -> io::Result<()> {
        if !title.is_empty() {
            writeln!(self.out, "{title}")?;
        }
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}

impl<W: Write> Device for WriterDevice<W> {
    fn render(&mut self, title: &str, text: &str) {
        if let Err(e) = self.write_render(title, text) {
            tracing::warn!(error = %e, "Failed to write render output");
        }
    }
}
