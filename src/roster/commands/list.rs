use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let students = store.list_students()?;
    let mut result = CmdResult::default();
    if students.is_empty() {
        result.add_message(CmdMessage::info("No student records yet."));
    }
    Ok(result.with_listed_students(students))
}
