use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::debug;

use super::helpers::require;

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let id = require("id", id)?;
    let removed = store.delete_student(id)?;
    debug!(id = %removed.id, remaining = store.len(), "student deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student {} deleted",
        removed.name
    )));
    Ok(result.with_affected_students(vec![removed]))
}
