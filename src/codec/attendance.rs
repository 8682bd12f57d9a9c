//! Attendance ⇄ 13-digit string.
//!
//! Decoding never fails: missing or unknown positions read as not attended,
//! so truncated or damaged rows still load.

use crate::models::{AttendanceStatus, AttendanceVector, WEEKS};

/// One digit per week, no separators.
pub fn encode(attendance: &AttendanceVector) -> String {
    attendance.slots().iter().map(AttendanceStatus::digit).collect()
}

/// Reads the first 13 characters of `s`; anything else is ignored.
pub fn decode(s: &str) -> AttendanceVector {
    let mut slots = [AttendanceStatus::NotAttended; WEEKS];
    for (slot, c) in slots.iter_mut().zip(s.chars()) {
        *slot = AttendanceStatus::from_digit(c).unwrap_or_default();
    }
    AttendanceVector::new(slots)
}

/// Builds the digit string from the per-week columns of a table row.
///
/// A column counts only if, once trimmed, it is exactly one valid digit.
pub fn digits_from_columns<'a, I>(columns: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    columns
        .into_iter()
        .take(WEEKS)
        .map(|col| {
            let mut chars = col.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if AttendanceStatus::from_digit(c).is_some() => c,
                _ => '0',
            }
        })
        .collect()
}
