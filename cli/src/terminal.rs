//! Terminal rendering device.

use std::io::{self, Write};

use crossterm::style::Stylize;
use tabula_core::Device;
use unicode_width::UnicodeWidthStr;

const RULE: &str = "─";

/// Renders titled blocks: a bold title, a rule as wide as the title, the text.
pub struct TerminalDevice<W> {
    out: W,
}

impl<W: Write> TerminalDevice<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn write_block(&mut self, title: &str, text: &str) -> io::Result<()> {
        if !title.is_empty() {
            writeln!(self.out, "{}", title.bold())?;
            writeln!(self.out, "{}", RULE.repeat(title.width()))?;
        }
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }
}

impl<W: Write> Device for TerminalDevice<W> {
    fn render(&mut self, title: &str, text: &str) {
        if let Err(e) = self.write_block(title, text) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}
