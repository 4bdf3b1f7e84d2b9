//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for roster operations, whatever the UI.
//!
//! It dispatches to the command functions, carries store-wide settings such
//! as the age parsing policy, and returns `Result<CmdResult>`. It does no
//! validation of its own, no I/O and no formatting.
//!
//! `RosterApi<S: DataStore>` is generic over the storage backend so the same
//! facade serves the console and tests alike.

use crate::commands;
use crate::config::AgeParsing;
use crate::error::Result;
use crate::store::DataStore;

/// The main API facade for roster operations.
pub struct RosterApi<S: DataStore> {
    store: S,
    age_parsing: AgeParsing,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            age_parsing: AgeParsing::default(),
        }
    }

    pub fn with_age_parsing(mut self, policy: AgeParsing) -> Self {
        self.age_parsing = policy;
        self
    }

    pub fn add_student(
        &mut self,
        name: &str,
        id: &str,
        age: &str,
        major: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, self.age_parsing, name, id, age, major)
    }

    pub fn query_student(&self, id: &str) -> Result<commands::CmdResult> {
        commands::query::run(&self.store, id)
    }

    pub fn update_student(
        &mut self,
        id: &str,
        update: &commands::StudentUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, self.age_parsing, id, update)
    }

    pub fn delete_student(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn age_parsing(&self) -> AgeParsing {
        self.age_parsing
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, StudentUpdate};
