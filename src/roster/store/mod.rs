//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way commands touch the student
//! collection, so business logic never depends on how records are held.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec` in insertion order with linear search.
//!   Nothing is persisted; the collection lives as long as the process.
//!
//! ## Ordering
//!
//! Listing returns records in the order they were first saved. Saving a record
//! whose id already exists replaces it at its original position.

use crate::error::Result;
use crate::model::Student;

pub mod memory;

/// Abstract interface for student storage.
pub trait DataStore {
    /// Save a student (replace in place by id, or append)
    fn save_student(&mut self, student: &Student) -> Result<()>;

    /// Get a student by id
    fn get_student(&self, id: &str) -> Result<Student>;

    /// List all students in insertion order
    fn list_students(&self) -> Result<Vec<Student>>;

    /// Remove a student, returning the removed record
    fn delete_student(&mut self, id: &str) -> Result<Student>;

    fn contains(&self, id: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
