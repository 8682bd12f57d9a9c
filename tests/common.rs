#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rostercodec::codec::{CodecOptions, TableCodec};
use rostercodec::models::{
    AttendanceStatus, AttendanceVector, DEFAULT_TOTAL_LABS, Email, Faculty, FieldValue, LabGroup,
    LabScoreList, MatNum, Name, Phone, Student, Tag, TeleHandle, TutGroup, Year,
};
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rc() -> Command {
    cargo_bin_cmd!("rostercodec")
}

/// Create a unique path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rostercodec.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Empty temp directory used as $HOME so CLI tests never see a real config
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rostercodec_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

pub fn codec() -> TableCodec {
    TableCodec::new(CodecOptions::default())
}

pub fn tags(names: &[&str]) -> BTreeSet<Tag> {
    names
        .iter()
        .map(|n| Tag::parse(n).expect("valid tag"))
        .collect()
}

/// Amy Tan: attended week 5 only, lab 2 scored 10/10, tagged `friend`.
pub fn amy() -> Student {
    let attendance = AttendanceVector::default()
        .with_week(5, AttendanceStatus::Attended)
        .expect("week 5");
    let labs = LabScoreList::unset(4)
        .update_both(2, 10, 10)
        .expect("lab 2");

    Student::builder(
        Name::parse("Amy Tan").unwrap(),
        MatNum::parse("A0123456X").unwrap(),
        DEFAULT_TOTAL_LABS,
    )
    .phone(Some(Phone::parse("91234567").unwrap()))
    .tele_handle(Some(TeleHandle::parse("@amytan").unwrap()))
    .email(Some(Email::parse("amy@example.com").unwrap()))
    .tut_group(Some(TutGroup::parse("T07").unwrap()))
    .lab_group(Some(LabGroup::parse("B03").unwrap()))
    .faculty(Some(Faculty::parse("Computing").unwrap()))
    .year(Some(Year::parse("2").unwrap()))
    .attendance(attendance)
    .lab_scores(labs)
    .tags(tags(&["friend"]))
    .build()
}

/// Minimal record: only the mandatory fields.
pub fn ben() -> Student {
    Student::builder(
        Name::parse("Ben Lim").unwrap(),
        MatNum::parse("A7654321B").unwrap(),
        DEFAULT_TOTAL_LABS,
    )
    .email(Some(Email::parse("ben.lim@u.nus.edu").unwrap()))
    .build()
}

pub fn carol() -> Student {
    Student::builder(
        Name::parse("Carol Ng").unwrap(),
        MatNum::parse("A1111111C").unwrap(),
        DEFAULT_TOTAL_LABS,
    )
    .phone(Some(Phone::parse("88887777").unwrap()))
    .tut_group(Some(TutGroup::parse("t2").unwrap()))
    .tags(tags(&["TA", "repeat"]))
    .build()
}

/// Header plus the three sample students, as written by the table codec.
pub fn sample_table() -> String {
    codec()
        .serialize(&[amy(), ben(), carol()])
        .expect("serialize sample roster")
}

/// Write the three sample students to a fresh roster file.
pub fn write_sample_roster(name: &str) -> PathBuf {
    let path = temp_path(name, "csv");
    fs::write(&path, sample_table()).expect("write sample roster");
    path
}
