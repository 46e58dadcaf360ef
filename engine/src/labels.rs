/// Command names shown in the menu and in logs.
pub struct Label;

impl Label {
    pub const SHOW: &'static str = "Show";
    pub const INSERT: &'static str = "Insert";
    pub const COPY: &'static str = "Copy";
    pub const CUT: &'static str = "Cut";
    pub const PASTE: &'static str = "Paste";
}

/// Field prompts.
pub struct Message;

impl Message {
    #[must_use]
    pub const fn address() -> &'static str {
        "Cell or range (e.g. A1 or A1:A5)"
    }

    #[must_use]
    pub const fn content() -> &'static str {
        "Content"
    }

    #[must_use]
    pub const fn option() -> &'static str {
        "Choose an option"
    }
}
