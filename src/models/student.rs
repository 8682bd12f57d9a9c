use super::attendance::AttendanceVector;
use super::fields::{
    Email, Faculty, LabGroup, MatNum, Name, Phone, Remark, TeleHandle, TutGroup, Year,
};
use super::lab_score::LabScoreList;
use super::tag::Tag;
use serde::Serialize;
use std::collections::BTreeSet;

/// One roster entry. Equality is structural over every attribute.
///
/// Values are never edited in place: the `with_*` methods return a new
/// record and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    name: Name,
    phone: Option<Phone>,
    tele_handle: Option<TeleHandle>,
    email: Option<Email>,
    mat_num: MatNum,
    tut_group: Option<TutGroup>,
    lab_group: Option<LabGroup>,
    faculty: Option<Faculty>,
    year: Option<Year>,
    remark: Option<Remark>,
    attendance: AttendanceVector,
    lab_scores: LabScoreList,
    tags: BTreeSet<Tag>,
}

impl Student {
    /// Starts a record with the two mandatory attributes and `total_labs`
    /// unscored labs.
    pub fn builder(name: Name, mat_num: MatNum, total_labs: usize) -> StudentBuilder {
        StudentBuilder::new(name, mat_num, total_labs)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }
    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }
    pub fn tele_handle(&self) -> Option<&TeleHandle> {
        self.tele_handle.as_ref()
    }
    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }
    pub fn mat_num(&self) -> &MatNum {
        &self.mat_num
    }
    pub fn tut_group(&self) -> Option<&TutGroup> {
        self.tut_group.as_ref()
    }
    pub fn lab_group(&self) -> Option<&LabGroup> {
        self.lab_group.as_ref()
    }
    pub fn faculty(&self) -> Option<&Faculty> {
        self.faculty.as_ref()
    }
    pub fn year(&self) -> Option<&Year> {
        self.year.as_ref()
    }
    pub fn remark(&self) -> Option<&Remark> {
        self.remark.as_ref()
    }
    pub fn attendance(&self) -> &AttendanceVector {
        &self.attendance
    }
    pub fn lab_scores(&self) -> &LabScoreList {
        &self.lab_scores
    }
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn with_attendance(&self, attendance: AttendanceVector) -> Self {
        Self {
            attendance,
            ..self.clone()
        }
    }

    pub fn with_lab_scores(&self, lab_scores: LabScoreList) -> Self {
        Self {
            lab_scores,
            ..self.clone()
        }
    }

    pub fn with_remark(&self, remark: Option<Remark>) -> Self {
        Self {
            remark,
            ..self.clone()
        }
    }

    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Self {
        Self {
            tags,
            ..self.clone()
        }
    }
}

/// Assembles a [`Student`]. Unset optional attributes stay absent, the
/// attendance defaults to all weeks not attended and the lab scores to
/// `total_labs` unscored labs.
#[derive(Debug, Clone)]
pub struct StudentBuilder {
    student: Student,
}

impl StudentBuilder {
    pub fn new(name: Name, mat_num: MatNum, total_labs: usize) -> Self {
        Self {
            student: Student {
                name,
                phone: None,
                tele_handle: None,
                email: None,
                mat_num,
                tut_group: None,
                lab_group: None,
                faculty: None,
                year: None,
                remark: None,
                attendance: AttendanceVector::default(),
                lab_scores: LabScoreList::unset(total_labs),
                tags: BTreeSet::new(),
            },
        }
    }

    pub fn phone(mut self, phone: Option<Phone>) -> Self {
        self.student.phone = phone;
        self
    }
    pub fn tele_handle(mut self, tele_handle: Option<TeleHandle>) -> Self {
        self.student.tele_handle = tele_handle;
        self
    }
    pub fn email(mut self, email: Option<Email>) -> Self {
        self.student.email = email;
        self
    }
    pub fn tut_group(mut self, tut_group: Option<TutGroup>) -> Self {
        self.student.tut_group = tut_group;
        self
    }
    pub fn lab_group(mut self, lab_group: Option<LabGroup>) -> Self {
        self.student.lab_group = lab_group;
        self
    }
    pub fn faculty(mut self, faculty: Option<Faculty>) -> Self {
        self.student.faculty = faculty;
        self
    }
    pub fn year(mut self, year: Option<Year>) -> Self {
        self.student.year = year;
        self
    }
    pub fn remark(mut self, remark: Option<Remark>) -> Self {
        self.student.remark = remark;
        self
    }
    pub fn attendance(mut self, attendance: AttendanceVector) -> Self {
        self.student.attendance = attendance;
        self
    }
    pub fn lab_scores(mut self, lab_scores: LabScoreList) -> Self {
        self.student.lab_scores = lab_scores;
        self
    }
    pub fn tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.student.tags = tags;
        self
    }

    pub fn build(self) -> Student {
        self.student
    }
}
