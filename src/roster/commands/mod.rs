use crate::model::Student;

pub mod add;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod query;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Successful outcome of a command: the records it touched or listed plus
/// messages for the operator.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, read, changed or removed by the command.
    pub affected_students: Vec<Student>,
    pub listed_students: Vec<Student>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_students(mut self, students: Vec<Student>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }

    /// The first affected record, which is the whole payload for the
    /// single-record commands.
    pub fn student(&self) -> Option<&Student> {
        self.affected_students.first()
    }
}

/// Optional field changes for an update. `None` and empty strings both mean
/// "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub age: Option<String>,
    pub major: Option<String>,
}

impl StudentUpdate {
    pub fn new(age: Option<String>, major: Option<String>) -> Self {
        Self { age, major }
    }

    pub fn age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }

    pub fn major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    pub(crate) fn provided_age(&self) -> Option<&str> {
        self.age.as_deref().filter(|s| !s.is_empty())
    }

    pub(crate) fn provided_major(&self) -> Option<&str> {
        self.major.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.provided_age().is_none() && self.provided_major().is_none()
    }
}
