use crate::commands::{CmdMessage, CmdResult, StudentUpdate};
use crate::config::AgeParsing;
use crate::error::{Result, RosterError};
use crate::store::DataStore;
use tracing::debug;

use super::helpers::{parse_age, require};

/// Applies the provided fields to a copy of the record and saves it only once
/// every provided field is valid, so a failed update never half-applies.
pub fn run<S: DataStore>(
    store: &mut S,
    policy: AgeParsing,
    id: &str,
    update: &StudentUpdate,
) -> Result<CmdResult> {
    let id = require("id", id)?;
    let mut student = store.get_student(id)?;

    if update.is_empty() {
        return Err(RosterError::NoFieldsProvided);
    }

    if let Some(age) = update.provided_age() {
        student.age = parse_age(age, policy)?;
    }
    if let Some(major) = update.provided_major() {
        student.major = major.to_string();
    }

    store.save_student(&student)?;
    debug!(id = %student.id, age = student.age, major = %student.major, "student updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student {} updated",
        student.name
    )));
    Ok(result.with_affected_students(vec![student]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Student;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    const P: AgeParsing = AgeParsing::Permissive;

    fn alice() -> InMemoryStore {
        StoreFixture::new()
            .with_student("Alice", "S1", 20, "CS")
            .store
    }

    #[test]
    fn updates_age_only() {
        let mut store = alice();
        let result = run(&mut store, P, "S1", &StudentUpdate::default().age("21")).unwrap();

        let expected = Student::new("Alice", "S1", 21, "CS");
        assert_eq!(result.student(), Some(&expected));
        assert_eq!(result.messages[0].content, "Student Alice updated");
        assert_eq!(store.get_student("S1").unwrap(), expected);
    }

    #[test]
    fn updates_major_only() {
        let mut store = alice();
        run(&mut store, P, "S1", &StudentUpdate::default().major("Math")).unwrap();
        assert_eq!(
            store.get_student("S1").unwrap(),
            Student::new("Alice", "S1", 20, "Math")
        );
    }

    #[test]
    fn updates_both_fields() {
        let mut store = alice();
        let update = StudentUpdate::default().age("22").major("Physics");
        run(&mut store, P, "S1", &update).unwrap();
        assert_eq!(
            store.get_student("S1").unwrap(),
            Student::new("Alice", "S1", 22, "Physics")
        );
    }

    #[test]
    fn empty_strings_count_as_not_provided() {
        let mut store = alice();
        let update = StudentUpdate::new(Some(String::new()), Some(String::new()));
        let err = run(&mut store, P, "S1", &update).unwrap_err();

        assert!(matches!(err, RosterError::NoFieldsProvided));
        assert_eq!(
            store.get_student("S1").unwrap(),
            Student::new("Alice", "S1", 20, "CS")
        );
    }

    #[test]
    fn missing_record_reported_before_missing_fields() {
        let mut store = alice();
        let err = run(&mut store, P, "S2", &StudentUpdate::default()).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(id) if id == "S2"));
    }

    #[test]
    fn empty_id_is_validation_error() {
        let mut store = alice();
        let err = run(&mut store, P, "", &StudentUpdate::default().age("30")).unwrap_err();
        assert!(matches!(err, RosterError::Validation("id")));
    }

    #[test]
    fn invalid_age_leaves_record_untouched() {
        let mut store = alice();
        let update = StudentUpdate::default().age("-5").major("Math");
        let err = run(&mut store, P, "S1", &update).unwrap_err();

        assert!(matches!(err, RosterError::InvalidAge(_)));
        assert_eq!(
            store.get_student("S1").unwrap(),
            Student::new("Alice", "S1", 20, "CS")
        );
    }

    #[test]
    fn keeps_list_position() {
        let mut store = StoreFixture::new().with_students(3).store;
        run(&mut store, P, "S2", &StudentUpdate::default().major("Art")).unwrap();
        let ids: Vec<_> = store
            .list_students()
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["S1", "S2", "S3"]);
    }
}
