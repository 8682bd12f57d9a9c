//! Validated scalar attributes of a student record.
//!
//! Every type parses from trimmed text and re-encodes to its canonical form,
//! so `parse(encode(x)) == x` holds for any value that was built by `parse`.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Column a value belongs to. Used to attribute decoding failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Phone,
    TeleHandle,
    Email,
    MatNum,
    TutGroup,
    LabGroup,
    Faculty,
    Year,
    Remark,
    Attendance,
    LabScores,
    Tag,
}

impl Field {
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::TeleHandle => "tele_handle",
            Field::Email => "email",
            Field::MatNum => "mat_num",
            Field::TutGroup => "tut_group",
            Field::LabGroup => "lab_group",
            Field::Faculty => "faculty",
            Field::Year => "year",
            Field::Remark => "remark",
            Field::Attendance => "attendance",
            Field::LabScores => "lab_scores",
            Field::Tag => "tag",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// A typed attribute with a text grammar.
pub trait FieldValue: Sized {
    const FIELD: Field;

    /// Parses `raw` after trimming it. Empty input is rejected.
    fn parse(raw: &str) -> AppResult<Self>;

    /// Canonical text form, accepted back by `parse`.
    fn encode(&self) -> String;
}

fn non_empty<T: FieldValue>(raw: &str) -> AppResult<&str> {
    let t = raw.trim();
    if t.is_empty() {
        return Err(AppError::invalid(T::FIELD, raw, "must not be empty"));
    }
    Ok(t)
}

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Alphabetic}\p{N}][\p{Alphabetic}\p{N} './\-]*$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3,15}$").unwrap());
static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@[A-Za-z0-9_]+$").unwrap());
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9\-]*[A-Za-z0-9]$",
    )
    .unwrap()
});
static MAT_NUM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[Aa][0-9]{7}[A-Za-z]$").unwrap());
static TUT_GROUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[Tt]([0-9]+)$").unwrap());
static LAB_GROUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[Bb]([0-9]+)$").unwrap());
static FACULTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Alphabetic}[\p{Alphabetic} &\-]*$").unwrap());

/// Declares a string-backed field whose grammar is a single regex.
macro_rules! pattern_field {
    ($ty:ident, $field:expr, $re:ident, $reason:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $ty(String);

        impl FieldValue for $ty {
            const FIELD: Field = $field;

            fn parse(raw: &str) -> AppResult<Self> {
                let t = non_empty::<Self>(raw)?;
                if !$re.is_match(t) {
                    return Err(AppError::invalid(Self::FIELD, t, $reason));
                }
                Ok(Self(t.to_string()))
            }

            fn encode(&self) -> String {
                self.0.clone()
            }
        }

        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pattern_field!(
    Name,
    Field::Name,
    NAME_RE,
    "names start with a letter or digit and contain only letters, digits, spaces and ' . - /"
);
pattern_field!(Phone, Field::Phone, PHONE_RE, "phone numbers are 3 to 15 digits");
pattern_field!(
    TeleHandle,
    Field::TeleHandle,
    HANDLE_RE,
    "handles start with @ followed by letters, digits or underscores"
);
pattern_field!(
    Email,
    Field::Email,
    EMAIL_RE,
    "emails look like local-part@domain with a domain label of at least 2 characters"
);
pattern_field!(
    Faculty,
    Field::Faculty,
    FACULTY_RE,
    "faculties start with a letter and contain only letters, spaces, & and -"
);

/// Matriculation number, stored upper-case (`A0123456X`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MatNum(String);

impl FieldValue for MatNum {
    const FIELD: Field = Field::MatNum;

    fn parse(raw: &str) -> AppResult<Self> {
        let t = non_empty::<Self>(raw)?;
        if !MAT_NUM_RE.is_match(t) {
            return Err(AppError::invalid(
                Self::FIELD,
                t,
                "matriculation numbers are A, 7 digits and a letter",
            ));
        }
        Ok(Self(t.to_ascii_uppercase()))
    }

    fn encode(&self) -> String {
        self.0.clone()
    }
}

impl MatNum {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MatNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn parse_group_number(field: Field, raw: &str, re: &Regex, prefix: char) -> AppResult<u32> {
    let reason = format!("groups are {prefix} followed by a number, e.g. {prefix}07");
    let caps = re
        .captures(raw)
        .ok_or_else(|| AppError::invalid(field, raw, reason.clone()))?;
    caps[1]
        .parse::<u32>()
        .map_err(|_| AppError::invalid(field, raw, reason))
}

/// Tutorial group, canonical form `T07`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TutGroup(u32);

impl FieldValue for TutGroup {
    const FIELD: Field = Field::TutGroup;

    fn parse(raw: &str) -> AppResult<Self> {
        let t = non_empty::<Self>(raw)?;
        parse_group_number(Self::FIELD, t, &TUT_GROUP_RE, 'T').map(Self)
    }

    fn encode(&self) -> String {
        format!("T{:02}", self.0)
    }
}

impl TutGroup {
    pub fn number(&self) -> u32 {
        self.0
    }
}

/// Lab group, canonical form `B03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LabGroup(u32);

impl FieldValue for LabGroup {
    const FIELD: Field = Field::LabGroup;

    fn parse(raw: &str) -> AppResult<Self> {
        let t = non_empty::<Self>(raw)?;
        parse_group_number(Self::FIELD, t, &LAB_GROUP_RE, 'B').map(Self)
    }

    fn encode(&self) -> String {
        format!("B{:02}", self.0)
    }
}

impl LabGroup {
    pub fn number(&self) -> u32 {
        self.0
    }
}

/// Year of study, 1 to 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Year(u8);

impl FieldValue for Year {
    const FIELD: Field = Field::Year;

    fn parse(raw: &str) -> AppResult<Self> {
        let t = non_empty::<Self>(raw)?;
        match t.parse::<u8>() {
            Ok(y) if (1..=6).contains(&y) => Ok(Self(y)),
            _ => Err(AppError::invalid(
                Self::FIELD,
                t,
                "year must be a whole number from 1 to 6",
            )),
        }
    }

    fn encode(&self) -> String {
        self.0.to_string()
    }
}

impl Year {
    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Free-text note. Any content is accepted; surrounding whitespace is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Remark(String);

impl FieldValue for Remark {
    const FIELD: Field = Field::Remark;

    fn parse(raw: &str) -> AppResult<Self> {
        non_empty::<Self>(raw).map(|t| Self(t.to_string()))
    }

    fn encode(&self) -> String {
        self.0.clone()
    }
}

impl Remark {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
