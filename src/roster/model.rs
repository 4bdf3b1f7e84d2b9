use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    /// Unique key within a store; compared with exact string equality.
    pub id: String,
    pub age: u32,
    pub major: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        age: u32,
        major: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            age,
            major: major.into(),
        }
    }
}
