//! The interactive menu loop.

use std::io;

use tabula_core::{Device, Display, FieldError, FieldValue, Outcome, PromptError, Prompter, run};
use tabula_sheet::Spreadsheet;
use tracing::{error, info};

use crate::menu::{MenuChoice, option_field, render_menu};

/// Tally of what happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub completed: usize,
    pub rejected: usize,
    pub invalid_input: usize,
    pub unexpected: usize,
}

/// Show the menu, run the chosen command, repeat until the user picks exit or
/// input runs out.
///
/// Unexpected command failures are logged and reported to the user, and the
/// loop carries on. Only a broken input channel ends the session with an error.
pub fn run_session(
    sheet: &mut Spreadsheet,
    prompter: &mut dyn Prompter,
    device: &mut dyn Device,
    menu_title: &str,
) -> io::Result<SessionStats> {
    let mut stats = SessionStats::default();
    let option = option_field();

    loop {
        render_menu(&mut Display::with_title(&mut *device, menu_title));

        let key = match prompter.prompt(&option) {
            Ok(FieldValue::Integer(key)) => key,
            Ok(other) => {
                error!(value = %other, "Menu option collected with the wrong kind");
                continue;
            }
            Err(PromptError::Invalid(FieldError::Missing { .. })) => {
                info!("Input closed; leaving menu");
                break;
            }
            Err(PromptError::Invalid(err)) => {
                Display::new(&mut *device).popup(&err);
                continue;
            }
            Err(PromptError::Io(err)) => return Err(err),
        };

        let action = match MenuChoice::from_key(key) {
            MenuChoice::Exit => break,
            MenuChoice::Run(action) => action,
            MenuChoice::Unknown(key) => {
                Display::new(&mut *device).popup(format!("Unknown option: {key}"));
                continue;
            }
        };

        let command = action.command();
        let mut out = Display::with_title(&mut *device, command.label());
        match run(command.as_ref(), sheet, &mut *prompter, &mut out) {
            Ok(Outcome::Completed) => stats.completed += 1,
            Ok(Outcome::Rejected(_)) => stats.rejected += 1,
            Ok(Outcome::InvalidInput(_)) => stats.invalid_input += 1,
            Err(err) => {
                error!(error = %err, "Unexpected command failure");
                stats.unexpected += 1;
                out.popup(format!("Unexpected error: {err}"));
            }
        }
    }

    info!(?stats, "Session finished");
    Ok(stats)
}
