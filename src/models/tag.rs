use super::fields::{Field, FieldValue};
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

pub const MAX_TAG_LEN: usize = 32;

/// Short alphanumeric label attached to a student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Tag(String);

impl FieldValue for Tag {
    const FIELD: Field = Field::Tag;

    fn parse(raw: &str) -> AppResult<Self> {
        let t = raw.trim();
        if t.is_empty() || t.chars().count() > MAX_TAG_LEN {
            return Err(AppError::invalid(
                Self::FIELD,
                t,
                format!("tags are 1 to {MAX_TAG_LEN} characters long"),
            ));
        }
        if !t.chars().all(char::is_alphanumeric) {
            return Err(AppError::invalid(
                Self::FIELD,
                t,
                "tags contain only letters and digits",
            ));
        }
        Ok(Self(t.to_string()))
    }

    fn encode(&self) -> String {
        self.0.clone()
    }
}

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
