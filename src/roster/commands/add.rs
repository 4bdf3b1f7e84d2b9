use crate::commands::{CmdMessage, CmdResult};
use crate::config::AgeParsing;
use crate::error::{Result, RosterError};
use crate::model::Student;
use crate::store::DataStore;
use tracing::debug;

use super::helpers::{parse_age, require};

pub fn run<S: DataStore>(
    store: &mut S,
    policy: AgeParsing,
    name: &str,
    id: &str,
    age: &str,
    major: &str,
) -> Result<CmdResult> {
    let name = require("name", name)?;
    let id = require("id", id)?;
    let age = require("age", age)?;
    let major = require("major", major)?;

    if store.contains(id) {
        return Err(RosterError::DuplicateId(id.to_string()));
    }

    let student = Student::new(name, id, parse_age(age, policy)?, major);
    store.save_student(&student)?;
    debug!(id = %student.id, total = store.len(), "student added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student {} added",
        student.name
    )));
    Ok(result.with_affected_students(vec![student]))
}
