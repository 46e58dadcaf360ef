//! Accumulating output buffer.

use std::fmt;

use crate::device::Device;

/// Inserted between logical lines.
pub const SEPARATOR: &str = "\n";

/// Text accumulated for one title, flushed to a borrowed [`Device`].
///
/// Appends never fail. The buffer never starts with a separator unless one is
/// explicitly forced with [`Display::add_new_line`]. Both flush paths clear the
/// buffer after rendering, so a single `Display` can be reused across
/// interactions.
pub struct Display<'d> {
    title: String,
    buffer: String,
    device: &'d mut dyn Device,
}

impl<'d> Display<'d> {
    /// A display without a title.
    pub fn new(device: &'d mut dyn Device) -> Self {
        Self::with_title(device, "")
    }

    pub fn with_title(device: &'d mut dyn Device, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            buffer: String::new(),
            device,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Text accumulated since the last flush.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Append `value` with no separator.
    pub fn add(&mut self, value: impl fmt::Display) -> &mut Self {
        use std::fmt::Write;
        // Writing into a String cannot fail.
        let _ = write!(self.buffer, "{value}");
        self
    }

    /// Append `value` on a new line. No separator is added to an empty buffer.
    pub fn add_line(&mut self, value: impl fmt::Display) -> &mut Self {
        self.add_new_line(value, false)
    }

    /// Append `value` on a new line. The separator is added when `force` is set
    /// or when the buffer already holds text.
    pub fn add_new_line(&mut self, value: impl fmt::Display, force: bool) -> &mut Self {
        if force || !self.buffer.is_empty() {
            self.buffer.push_str(SEPARATOR);
        }
        self.add(value)
    }

    /// [`add_line`](Self::add_line) for each item, in order.
    pub fn add_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        for item in items {
            self.add_line(item);
        }
        self
    }

    /// Render the buffer even when it is empty, then clear it.
    pub fn display(&mut self) {
        self.device.render(&self.title, &self.buffer);
        self.clear();
    }

    /// Render and clear only when there is something to show.
    pub fn display_text(&mut self) {
        if !self.buffer.is_empty() {
            self.display();
        }
    }

    pub fn popup(&mut self, value: impl fmt::Display) {
        self.add(value);
        self.display();
    }

    /// Show a collection, one item per line. `None` shows nothing and leaves
    /// the buffer alone; an empty collection still renders.
    pub fn popup_all<I>(&mut self, items: Option<I>)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        if let Some(items) = items {
            self.add_all(items);
            self.display();
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl fmt::Debug for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Display")
            .field("title", &self.title)
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}
