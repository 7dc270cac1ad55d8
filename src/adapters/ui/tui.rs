//! Implements InputPort. Inquire-based interactive desk.
//!
//! Presentation only: every action goes through the store and the screen is
//! redrawn from its state afterwards. Highlighting is local to this adapter.

use crate::adapters::ui::render::{registration_line, workshop_detail, workshop_line};
use crate::domain::DomainError;
use crate::ports::InputPort;
use crate::usecases::RegistrationStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crossterm::style::Stylize;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Select, Text};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

const SELECT_PLACEHOLDER: &str = "-- Select workshop --";
const DIALOG_OK: &str = "OK";
const DIALOG_CANCEL: &str = "Cancel";

/// Applies the prompt theme globally for all inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("?").with_fg(Color::LightMagenta))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightCyan));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    ListWorkshops,
    ViewDetail,
    ToggleHighlight,
    Register,
    Registrations,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 6] = [
        MenuAction::ListWorkshops,
        MenuAction::ViewDetail,
        MenuAction::ToggleHighlight,
        MenuAction::Register,
        MenuAction::Registrations,
        MenuAction::Quit,
    ];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MenuAction::ListWorkshops => "Workshops",
            MenuAction::ViewDetail => "View detail",
            MenuAction::ToggleHighlight => "Highlight",
            MenuAction::Register => "Register",
            MenuAction::Registrations => "My registrations / Cancel",
            MenuAction::Quit => "Quit",
        };
        f.write_str(s)
    }
}

/// Esc and Ctrl-C end the current prompt without an answer.
fn is_cancelled(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn ui_err(e: InquireError) -> DomainError {
    DomainError::Ui(e.to_string())
}

/// Map a prompt result to `Ok(None)` when the user backed out.
fn answered<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(e) if is_cancelled(&e) => Ok(None),
        Err(e) => Err(ui_err(e)),
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    now_override: Option<DateTime<Utc>>,
}

impl TuiInputPort {
    /// `now_override` pins the clock (demos, replaying a registration period).
    pub fn new(now_override: Option<DateTime<Utc>>) -> Self {
        Self { now_override }
    }

    fn now(&self) -> DateTime<Utc> {
        self.now_override.unwrap_or_else(Utc::now)
    }

    fn print_header(&self, store: &RegistrationStore) {
        println!();
        println!("{}", store.window_message(self.now()).bold());
        if let Some(notice) = store.notice() {
            println!("{}", notice.red());
        }
    }

    fn print_workshops(&self, store: &RegistrationStore, highlighted: &HashSet<String>) {
        let now = self.now();
        if store.workshops().is_empty() {
            println!("(no workshops)");
        }
        for ws in store.workshops() {
            let line = workshop_line(ws, store.workshop_status(ws, now), store.zone());
            if highlighted.contains(&ws.id) {
                println!("{}", line.black().on_yellow());
            } else {
                println!("{}", line);
            }
        }
    }

    fn print_registrations(&self, store: &RegistrationStore) {
        if store.registrations().is_empty() {
            println!("(no registrations)");
        }
        for (i, reg) in store.registrations().iter().enumerate() {
            println!("{}. {}", i + 1, registration_line(reg, store.workshop_title(reg)));
        }
    }

    /// Pick a workshop by title. Returns its id.
    fn pick_workshop(
        &self,
        store: &RegistrationStore,
        prompt: &str,
    ) -> Result<Option<String>, DomainError> {
        let titles: Vec<String> = store.workshops().iter().map(|w| w.title.clone()).collect();
        if titles.is_empty() {
            println!("(no workshops)");
            return Ok(None);
        }
        let picked = answered(Select::new(prompt, titles).raw_prompt())?;
        Ok(picked.and_then(|opt| store.workshops().get(opt.index).map(|w| w.id.clone())))
    }

    fn view_detail(&self, store: &RegistrationStore) -> Result<(), DomainError> {
        if let Some(id) = self.pick_workshop(store, "View detail of")? {
            if let Some(ws) = store.find_workshop(&id) {
                println!("{}", workshop_detail(ws, store.zone()));
            }
        }
        Ok(())
    }

    fn toggle_highlight(
        &self,
        store: &RegistrationStore,
        highlighted: &mut HashSet<String>,
    ) -> Result<(), DomainError> {
        if let Some(id) = self.pick_workshop(store, "Highlight")? {
            if !highlighted.remove(&id) {
                highlighted.insert(id);
            }
            self.print_workshops(store, highlighted);
        }
        Ok(())
    }

    /// Registration form: name + workshop select. The select has an empty placeholder
    /// entry, matching a form submitted without a choice.
    fn register(&self, store: &mut RegistrationStore) -> Result<(), DomainError> {
        let Some(name) = answered(Text::new("Your name:").prompt())? else {
            return Ok(());
        };

        let mut options = vec![SELECT_PLACEHOLDER.to_string()];
        options.extend(store.workshops().iter().map(|w| w.title.clone()));
        let Some(choice) = answered(Select::new("Workshop:", options).raw_prompt())? else {
            return Ok(());
        };
        let workshop_id = match choice.index {
            0 => String::new(),
            i => store
                .workshops()
                .get(i - 1)
                .map(|w| w.id.clone())
                .unwrap_or_default(),
        };

        if store.register(&name, &workshop_id, self.now()).is_ok() {
            self.print_registrations(store);
        }
        Ok(())
    }

    /// List registrations, pick one, then run the confirm dialog.
    fn cancel_flow(&self, store: &mut RegistrationStore) -> Result<(), DomainError> {
        self.print_registrations(store);
        let lines: Vec<String> = store
            .registrations()
            .iter()
            .map(|r| registration_line(r, store.workshop_title(r)))
            .collect();
        if lines.is_empty() {
            return Ok(());
        }
        let Some(choice) = answered(Select::new("Cancel which registration?", lines).raw_prompt())?
        else {
            return Ok(());
        };

        let Ok(pending) = store.cancel(choice.index) else {
            return Ok(());
        };
        debug!(index = pending.index, "confirm dialog opened");

        let dialog = Select::new(&pending.message, vec![DIALOG_OK, DIALOG_CANCEL]).prompt();
        match answered(dialog)? {
            Some(DIALOG_OK) => {
                if let Ok(Some(_)) = store.confirm() {
                    self.print_registrations(store);
                }
            }
            _ => store.dismiss(),
        }
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self, store: &mut RegistrationStore) -> Result<(), DomainError> {
        let mut highlighted: HashSet<String> = HashSet::new();
        self.print_header(store);
        self.print_workshops(store, &highlighted);

        loop {
            let action = answered(Select::new("Menu", MenuAction::ALL.to_vec()).prompt())?;
            match action.unwrap_or(MenuAction::Quit) {
                MenuAction::ListWorkshops => self.print_workshops(store, &highlighted),
                MenuAction::ViewDetail => self.view_detail(store)?,
                MenuAction::ToggleHighlight => self.toggle_highlight(store, &mut highlighted)?,
                MenuAction::Register => self.register(store)?,
                MenuAction::Registrations => self.cancel_flow(store)?,
                MenuAction::Quit => return Ok(()),
            }
            self.print_header(store);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_labels() {
        let labels: Vec<String> = MenuAction::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels.first().map(String::as_str), Some("Workshops"));
        assert_eq!(labels.last().map(String::as_str), Some("Quit"));
    }

    #[test]
    fn test_cancelled_prompt_is_not_an_error() {
        let res: Result<u8, InquireError> = Err(InquireError::OperationCanceled);
        assert_eq!(answered(res).unwrap(), None);

        let res: Result<u8, InquireError> = Err(InquireError::OperationInterrupted);
        assert_eq!(answered(res).unwrap(), None);

        let res: Result<u8, InquireError> = Ok(3);
        assert_eq!(answered(res).unwrap(), Some(3));
    }
}
