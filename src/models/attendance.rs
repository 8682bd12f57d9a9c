use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Number of teaching weeks tracked per student.
pub const WEEKS: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    #[default]
    NotAttended,
    Attended,
    OnMedicalCertificate,
}

impl AttendanceStatus {
    /// Convert enum → save-file digit
    pub fn digit(&self) -> char {
        match self {
            AttendanceStatus::NotAttended => '0',
            AttendanceStatus::Attended => '1',
            AttendanceStatus::OnMedicalCertificate => '2',
        }
    }

    /// Convert save-file digit → enum
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(AttendanceStatus::NotAttended),
            '1' => Some(AttendanceStatus::Attended),
            '2' => Some(AttendanceStatus::OnMedicalCertificate),
            _ => None,
        }
    }

    /// Short display label, e.g. `W5: ATT`.
    pub fn label(&self, week: usize) -> String {
        let code = match self {
            AttendanceStatus::NotAttended => "NO",
            AttendanceStatus::Attended => "ATT",
            AttendanceStatus::OnMedicalCertificate => "MC",
        };
        format!("W{week}: {code}")
    }
}

/// One status per week. Weeks are 1-based; the length never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct AttendanceVector([AttendanceStatus; WEEKS]);

impl AttendanceVector {
    pub fn new(slots: [AttendanceStatus; WEEKS]) -> Self {
        Self(slots)
    }

    pub fn slots(&self) -> &[AttendanceStatus; WEEKS] {
        &self.0
    }

    /// Status for a 1-based week, `None` outside 1..=13.
    pub fn week(&self, week: usize) -> Option<AttendanceStatus> {
        week.checked_sub(1).and_then(|i| self.0.get(i)).copied()
    }

    /// Returns a copy with one week changed.
    pub fn with_week(&self, week: usize, status: AttendanceStatus) -> AppResult<Self> {
        if !(1..=WEEKS).contains(&week) {
            return Err(AppError::Command(format!(
                "Week must be an integer from 1 to {WEEKS} inclusive (got {week})"
            )));
        }
        let mut slots = self.0;
        slots[week - 1] = status;
        Ok(Self(slots))
    }

    pub fn count(&self, status: AttendanceStatus) -> usize {
        self.0.iter().filter(|s| **s == status).count()
    }

    /// `(week, status)` pairs, weeks starting at 1.
    pub fn iter(&self) -> impl Iterator<Item = (usize, AttendanceStatus)> + '_ {
        self.0.iter().enumerate().map(|(i, s)| (i + 1, *s))
    }
}
