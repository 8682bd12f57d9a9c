pub mod attendance;
pub mod fields;
pub mod lab_score;
pub mod student;
pub mod tag;

pub use attendance::{AttendanceStatus, AttendanceVector, WEEKS};
pub use fields::{
    Email, Faculty, Field, FieldValue, LabGroup, MatNum, Name, Phone, Remark, TeleHandle,
    TutGroup, Year,
};
pub use lab_score::{DEFAULT_MAX_SCORE, DEFAULT_TOTAL_LABS, LabScoreEntry, LabScoreList};
pub use student::{Student, StudentBuilder};
pub use tag::Tag;
