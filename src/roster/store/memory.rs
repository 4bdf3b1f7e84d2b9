use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::Student;

/// In-memory student storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    students: Vec<Student>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }
}

impl DataStore for InMemoryStore {
    fn save_student(&mut self, student: &Student) -> Result<()> {
        match self.position(&student.id) {
            Some(idx) => self.students[idx] = student.clone(),
            None => self.students.push(student.clone()),
        }
        Ok(())
    }

    fn get_student(&self, id: &str) -> Result<Student> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        Ok(self.students.clone())
    }

    fn delete_student(&mut self, id: &str) -> Result<Student> {
        let idx = self
            .position(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        Ok(self.students.remove(idx))
    }

    fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    fn len(&self) -> usize {
        self.students.len()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` students with ids `S1..=Scount`.
        pub fn with_students(mut self, count: usize) -> Self {
            for i in 1..=count {
                let student = Student::new(
                    format!("Student {}", i),
                    format!("S{}", i),
                    18 + i as u32,
                    "CS",
                );
                self.store.save_student(&student).unwrap();
            }
            self
        }

        pub fn with_student(mut self, name: &str, id: &str, age: u32, major: &str) -> Self {
            let student = Student::new(name, id, age, major);
            self.store.save_student(&student).unwrap();
            self
        }
    }
}
