//! # Interactive Shell
//!
//! A finite-state machine over blocking line reads:
//!
//! ```text
//!            ┌──────────── 5 (list) / invalid input ───────────┐
//!            ▼                                                 │
//!   ──▶   Menu ──1──▶ CollectAddFields ──────────────▶ Menu    │
//!            │ ──2/4─▶ CollectId(Query|Delete) ──────▶ Menu    │
//!            │ ──3───▶ CollectId(Update) ─▶ CollectUpdateFields ─▶ Menu
//!            │ ──6───▶ Exit                                    │
//!            └─────────────────────────────────────────────────┘
//! ```
//!
//! End of input at any prompt moves straight to `Exit`. The shell validates
//! nothing: input lines are trimmed and handed to the API, and whatever comes
//! back is rendered. Operator errors are printed and the loop continues; I/O
//! failures end the session.

use super::render::Renderer;
use roster::api::{CmdMessage, CmdResult, RosterApi, StudentUpdate};
use roster::error::Result;
use roster::store::DataStore;
use std::io::{BufRead, Write};
use tracing::debug;

pub const MENU_PROMPT: &str = "Select an action (1-6)";
pub const FAREWELL: &str = "Thanks for using the Student Management System. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdAction {
    Query,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Menu,
    CollectAddFields,
    CollectId(IdAction),
    CollectUpdateFields { id: String },
    Exit,
}

/// What to print after a successful single-record command.
#[derive(Debug, Clone, Copy)]
enum Details {
    IfEnabled(&'static str),
    Always(&'static str),
}

pub struct Shell<S: DataStore, R: BufRead, W: Write> {
    api: RosterApi<S>,
    input: R,
    output: W,
    renderer: Renderer,
    show_record_details: bool,
}

impl<S: DataStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: RosterApi<S>, input: R, output: W, renderer: Renderer) -> Self {
        Self {
            api,
            input,
            output,
            renderer,
            show_record_details: true,
        }
    }

    pub fn show_record_details(mut self, show: bool) -> Self {
        self.show_record_details = show;
        self
    }

    pub fn api(&self) -> &RosterApi<S> {
        &self.api
    }

    /// Runs until the operator exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        let menu = self.renderer.menu();
        self.output.write_all(menu.as_bytes())?;

        let mut state = State::Menu;
        while state != State::Exit {
            state = self.step(state)?;
            debug!(?state, "shell transition");
        }
        self.output.flush()?;
        Ok(())
    }

    pub fn step(&mut self, state: State) -> Result<State> {
        match state {
            State::Menu => self.choose_action(),
            State::CollectAddFields => self.collect_add_fields(),
            State::CollectId(action) => self.collect_id(action),
            State::CollectUpdateFields { id } => self.collect_update_fields(&id),
            State::Exit => Ok(State::Exit),
        }
    }

    fn choose_action(&mut self) -> Result<State> {
        let Some(choice) = self.ask(MENU_PROMPT)? else {
            return self.end_of_input();
        };

        let next = match choice.as_str() {
            "1" => State::CollectAddFields,
            "2" => State::CollectId(IdAction::Query),
            "3" => State::CollectId(IdAction::Update),
            "4" => State::CollectId(IdAction::Delete),
            "5" => {
                let outcome = self.api.list_students();
                self.report_list(outcome)?;
                State::Menu
            }
            "6" => {
                self.say(&[CmdMessage::info(FAREWELL)])?;
                State::Exit
            }
            _ => {
                self.say(&[CmdMessage::warning(
                    "Invalid choice, please enter a number from 1 to 6",
                )])?;
                State::Menu
            }
        };
        Ok(next)
    }

    fn collect_add_fields(&mut self) -> Result<State> {
        let mut fields = Vec::with_capacity(4);
        for prompt in ["Student name", "Student ID", "Age", "Major"] {
            match self.ask(prompt)? {
                Some(value) => fields.push(value),
                None => return self.end_of_input(),
            }
        }

        let outcome = self
            .api
            .add_student(&fields[0], &fields[1], &fields[2], &fields[3]);
        self.report(outcome, Details::IfEnabled("Student:"))?;
        Ok(State::Menu)
    }

    fn collect_id(&mut self, action: IdAction) -> Result<State> {
        let Some(id) = self.ask("Student ID")? else {
            return self.end_of_input();
        };

        match action {
            IdAction::Query => {
                let outcome = self.api.query_student(&id);
                self.report(outcome, Details::Always("Student:"))?;
            }
            IdAction::Delete => {
                let outcome = self.api.delete_student(&id);
                self.report_messages(outcome)?;
            }
            IdAction::Update => return Ok(State::CollectUpdateFields { id }),
        }
        Ok(State::Menu)
    }

    fn collect_update_fields(&mut self, id: &str) -> Result<State> {
        let Some(age) = self.ask("New age (press Enter to skip)")? else {
            return self.end_of_input();
        };
        let Some(major) = self.ask("New major (press Enter to skip)")? else {
            return self.end_of_input();
        };

        let update = StudentUpdate::new(Some(age), Some(major));
        let outcome = self.api.update_student(id, &update);
        self.report(outcome, Details::IfEnabled("Updated student:"))?;
        Ok(State::Menu)
    }

    /// Prints a prompt and reads one line. `None` means input has ended.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let prompt = self.renderer.prompt(prompt);
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn end_of_input(&mut self) -> Result<State> {
        debug!("input closed");
        self.output.write_all(b"\n")?;
        self.say(&[CmdMessage::info(FAREWELL)])?;
        Ok(State::Exit)
    }

    fn say(&mut self, messages: &[CmdMessage]) -> Result<()> {
        let text = self.renderer.messages(messages);
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    fn report(&mut self, outcome: Result<CmdResult>, details: Details) -> Result<()> {
        let result = match self.recover(outcome)? {
            Some(result) => result,
            None => return Ok(()),
        };

        self.say(&result.messages)?;
        let heading = match details {
            Details::Always(heading) => Some(heading),
            Details::IfEnabled(heading) if self.show_record_details => Some(heading),
            Details::IfEnabled(_) => None,
        };
        if let (Some(heading), Some(student)) = (heading, result.student()) {
            let text = self.renderer.student(heading, student);
            self.output.write_all(text.as_bytes())?;
        }
        Ok(())
    }

    fn report_messages(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        if let Some(result) = self.recover(outcome)? {
            self.say(&result.messages)?;
        }
        Ok(())
    }

    fn report_list(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        if let Some(result) = self.recover(outcome)? {
            self.say(&result.messages)?;
            let text = self.renderer.student_list(&result.listed_students);
            self.output.write_all(text.as_bytes())?;
        }
        Ok(())
    }

    /// Prints recoverable errors and yields `None`; passes anything else up.
    fn recover(&mut self, outcome: Result<CmdResult>) -> Result<Option<CmdResult>> {
        match outcome {
            Ok(result) => Ok(Some(result)),
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "operation rejected");
                let text = self.renderer.error(&e);
                self.output.write_all(text.as_bytes())?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
