use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Missing required field: {0}")]
    Validation(&'static str),

    #[error("Student ID {0} already exists")]
    DuplicateId(String),

    #[error("Invalid age: {0:?} (expected a positive whole number)")]
    InvalidAge(String),

    #[error("No student found with ID {0}")]
    NotFound(String),

    #[error("Provide at least one field to update (age or major)")]
    NoFieldsProvided,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl RosterError {
    /// Operator mistakes the shell reports and moves past. Everything else
    /// is an environment failure that ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RosterError::Validation(_)
                | RosterError::DuplicateId(_)
                | RosterError::InvalidAge(_)
                | RosterError::NotFound(_)
                | RosterError::NoFieldsProvided
        )
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
