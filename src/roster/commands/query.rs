use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::require;

pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let id = require("id", id)?;
    let student = store.get_student(id)?;
    Ok(CmdResult::default().with_affected_students(vec![student]))
}
