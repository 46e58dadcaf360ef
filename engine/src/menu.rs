//! The numbered edit menu.

use tabula_core::{Display, FieldKind, FieldSpec};

use crate::edit::{DoCopy, DoCut, DoInsert, DoPaste, DoShow, EditCommand};
use crate::labels::{Label, Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Show,
    Insert,
    Copy,
    Cut,
    Paste,
}

impl EditAction {
    /// A fresh command for this action.
    #[must_use]
    pub fn command(self) -> Box<EditCommand> {
        match self {
            Self::Show => Box::new(DoShow::new()),
            Self::Insert => Box::new(DoInsert::new()),
            Self::Copy => Box::new(DoCopy::new()),
            Self::Cut => Box::new(DoCut::new()),
            Self::Paste => Box::new(DoPaste::new()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub key: i64,
    pub action: EditAction,
    pub label: &'static str,
    pub description: &'static str,
}

const MENU_ENTRIES: &[MenuEntry] = &[
    MenuEntry {
        key: 1,
        action: EditAction::Show,
        label: Label::SHOW,
        description: "Show cell contents",
    },
    MenuEntry {
        key: 2,
        action: EditAction::Insert,
        label: Label::INSERT,
        description: "Insert text into cells",
    },
    MenuEntry {
        key: 3,
        action: EditAction::Copy,
        label: Label::COPY,
        description: "Copy cells to the cut buffer",
    },
    MenuEntry {
        key: 4,
        action: EditAction::Cut,
        label: Label::CUT,
        description: "Move cells to the cut buffer",
    },
    MenuEntry {
        key: 5,
        action: EditAction::Paste,
        label: Label::PASTE,
        description: "Paste the cut buffer",
    },
];

const EXIT_KEY: i64 = 0;

#[must_use]
pub fn menu_entries() -> &'static [MenuEntry] {
    MENU_ENTRIES
}

/// The field used to read a menu selection.
#[must_use]
pub fn option_field() -> FieldSpec {
    FieldSpec::new("option", FieldKind::Integer, Message::option())
}

/// Render the menu through `out`.
pub fn render_menu(out: &mut Display<'_>) {
    let longest = MENU_ENTRIES
        .iter()
        .map(|entry| entry.label.len())
        .max()
        .unwrap_or(0);
    out.add_all(MENU_ENTRIES.iter().map(|entry| {
        format!(
            "{} - {:<width$}  {}",
            entry.key,
            entry.label,
            entry.description,
            width = longest
        )
    }));
    out.add_line(format!("{EXIT_KEY} - Exit"));
    out.display();
}

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Run(EditAction),
    Unknown(i64),
}

impl MenuChoice {
    #[must_use]
    pub fn from_key(key: i64) -> Self {
        if key == EXIT_KEY {
            return Self::Exit;
        }
        MENU_ENTRIES
            .iter()
            .find(|entry| entry.key == key)
            .map_or(Self::Unknown(key), |entry| Self::Run(entry.action))
    }
}
