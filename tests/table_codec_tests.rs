mod common;
use common::{amy, ben, carol, codec, sample_table, temp_path};

use rostercodec::codec::{CodecOptions, DiagnosticKind, Strictness, TableCodec};
use rostercodec::errors::AppError;
use rostercodec::models::{FieldValue, MatNum, Name, Remark, Student};
use rostercodec::storage::{read_file, write_file};
use std::fs;

#[test]
fn test_serialize_writes_header_then_rows_in_order() {
    let text = sample_table();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("name,phone,tele_handle,email,mat_num,"));
    assert!(lines[0].ends_with("week13,lab_scores,tags"));
    assert!(lines[1].starts_with("Amy Tan,"));
    assert!(lines[2].starts_with("Ben Lim,"));
    assert!(lines[3].starts_with("Carol Ng,"));
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_serialize_empty_roster_is_an_error() {
    assert!(matches!(codec().serialize(&[]), Err(AppError::EmptyRoster)));
}

#[test]
fn test_table_round_trip() {
    let students = vec![amy(), ben(), carol()];
    let text = codec().serialize(&students).unwrap();
    let loaded = codec().deserialize(&text).unwrap();
    assert!(loaded.is_clean());
    assert_eq!(loaded.students, students);
}

#[test]
fn test_bad_email_in_row_two_is_isolated() {
    let text = sample_table().replace("ben.lim@u.nus.edu", "not-an-email");
    let loaded = codec().deserialize(&text).unwrap();

    assert_eq!(loaded.students, vec![amy(), carol()]);
    assert_eq!(loaded.skipped(), 1);

    let d = &loaded.diagnostics[0];
    assert_eq!(d.row, 2);
    assert_eq!(d.line, 3);
    assert_eq!(d.kind, DiagnosticKind::Validation);
    assert!(d.content.contains("not-an-email"));
    assert!(d.reason.contains("email"));
}

#[test]
fn test_row_with_three_columns_is_skipped_without_error() {
    let mut text = codec().serialize(&[amy(), ben()]).unwrap();
    text.push_str("\nEve Ong,91112222,@eve");

    let loaded = codec().deserialize(&text).unwrap();
    assert_eq!(loaded.students.len(), 2);
    assert_eq!(loaded.skipped(), 1);
    assert_eq!(loaded.diagnostics[0].row, 3);
    assert_eq!(loaded.diagnostics[0].kind, DiagnosticKind::Structural);
    assert_eq!(loaded.diagnostics[0].content, "Eve Ong,91112222,@eve");
}

#[test]
fn test_every_bad_row_gets_its_own_diagnostic() {
    let mut text = sample_table();
    text.push_str("\nonly,two");
    text.push_str("\nZed,,,zed@example.com,B0000000Z,,,,,");
    text.push_str("\nYan,,,yan@example.com,A3333333Y,,,,,");

    let loaded = codec().deserialize(&text).unwrap();
    assert_eq!(loaded.students.len(), 4);
    let rows: Vec<usize> = loaded.diagnostics.iter().map(|d| d.row).collect();
    assert_eq!(rows, vec![4, 5]);
    let kinds: Vec<DiagnosticKind> = loaded.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![DiagnosticKind::Structural, DiagnosticKind::Validation]
    );
}

#[test]
fn test_quoted_multiline_remark_does_not_shift_row_numbers() {
    let remark = Remark::parse("first\nsecond").ok();
    let students = vec![amy().with_remark(remark), ben()];
    let text = codec()
        .serialize(&students)
        .unwrap()
        .replace("ben.lim@u.nus.edu", "broken@");

    let loaded = codec().deserialize(&text).unwrap();
    assert_eq!(loaded.students.len(), 1);
    assert_eq!(loaded.diagnostics[0].row, 2);
    assert_eq!(loaded.diagnostics[0].line, 4);
}

#[test]
fn test_empty_text_loads_nothing() {
    let loaded = codec().deserialize("").unwrap();
    assert!(loaded.students.is_empty());
    assert!(loaded.is_clean());
}

#[test]
fn test_header_only_loads_nothing() {
    let header = sample_table().lines().next().unwrap().to_string();
    let loaded = codec().deserialize(&header).unwrap();
    assert!(loaded.students.is_empty());
    assert!(loaded.is_clean());
}

#[test]
fn test_short_header_is_fatal() {
    assert!(matches!(
        codec().deserialize("name,phone\nAmy Tan,91234567"),
        Err(AppError::Structural(_))
    ));
}

#[test]
fn test_header_names_are_not_checked() {
    let text = sample_table();
    let (_, body) = text.split_once('\n').unwrap();
    let renamed = format!("a,b,c,d,e,f,g,h,i,j\n{body}");
    assert_eq!(codec().deserialize(&renamed).unwrap().students.len(), 3);
}

#[test]
fn test_lab_total_is_taken_from_options() {
    let six = TableCodec::new(CodecOptions {
        total_labs: 6,
        strictness: Strictness::Strict,
    });
    // rows written with 4 labs do not fit a 6-lab configuration
    let loaded = six.deserialize(&sample_table()).unwrap();
    assert!(loaded.students.is_empty());
    assert_eq!(loaded.skipped(), 3);
    assert!(
        loaded
            .diagnostics
            .iter()
            .all(|d| d.kind == DiagnosticKind::Structural)
    );
}

#[test]
fn test_write_then_read_file() {
    let path = temp_path("write_then_read", "csv");
    let students = vec![amy(), ben(), carol()];

    write_file(&path, &students, CodecOptions::default()).unwrap();
    let loaded = read_file(&path, CodecOptions::default()).unwrap();

    assert_eq!(loaded.students, students);
    assert!(loaded.is_clean());
    assert!(!path.with_extension("csv.tmp").exists());
}

#[test]
fn test_write_creates_missing_directories() {
    let dir = temp_path("nested_dir", "d");
    fs::remove_dir_all(&dir).ok();
    let path = dir.join("inner").join("roster.csv");

    write_file(&path, &[ben()], CodecOptions::default()).unwrap();
    assert_eq!(
        read_file(&path, CodecOptions::default()).unwrap().students,
        vec![ben()]
    );
}

#[test]
fn test_write_empty_roster_leaves_existing_file_untouched() {
    let path = temp_path("write_empty", "csv");
    fs::write(&path, sample_table()).unwrap();

    let result = write_file(&path, &[], CodecOptions::default());
    assert!(matches!(result, Err(AppError::EmptyRoster)));
    assert_eq!(fs::read_to_string(&path).unwrap(), sample_table());
}

#[test]
fn test_read_missing_file_is_an_io_error() {
    let path = temp_path("does_not_exist", "csv");
    match read_file(&path, CodecOptions::default()) {
        Err(AppError::Io(e)) => assert!(e.to_string().contains("could not read roster file")),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_read_file_reports_skipped_rows() {
    let path = temp_path("read_skips", "csv");
    let text = sample_table().replace("ben.lim@u.nus.edu", "not-an-email");
    fs::write(&path, text).unwrap();

    let loaded = read_file(&path, CodecOptions::default()).unwrap();
    assert_eq!(loaded.students.len(), 2);
    assert_eq!(loaded.diagnostics.len(), 1);
    assert_eq!(loaded.diagnostics[0].row, 2);
}

fn six_labs() -> CodecOptions {
    CodecOptions {
        total_labs: 6,
        strictness: Strictness::Strict,
    }
}

fn dan(total_labs: usize) -> Student {
    Student::builder(
        Name::parse("Dan Koh").unwrap(),
        MatNum::parse("A2222222D").unwrap(),
        total_labs,
    )
    .build()
}

#[test]
fn test_round_trip_with_six_labs() {
    let scored = dan(6).lab_scores().update_both(6, 20, 25).unwrap();
    let students = vec![dan(6).with_lab_scores(scored), dan(6)];

    let six = TableCodec::new(six_labs());
    let loaded = six.deserialize(&six.serialize(&students).unwrap()).unwrap();
    assert!(loaded.is_clean());
    assert_eq!(loaded.students, students);
}

#[test]
fn test_serialize_rejects_lab_list_of_other_size() {
    let six = TableCodec::new(six_labs());
    assert!(matches!(
        six.serialize(&[dan(6), amy()]),
        Err(AppError::Structural(_))
    ));
}

#[test]
fn test_write_with_mismatched_labs_leaves_no_file() {
    let path = temp_path("write_mismatched_labs", "csv");

    let result = write_file(&path, &[dan(4)], six_labs());
    assert!(matches!(result, Err(AppError::Structural(_))));
    assert!(!path.exists());

    write_file(&path, &[dan(6)], six_labs()).unwrap();
    let loaded = read_file(&path, six_labs()).unwrap();
    assert_eq!(loaded.students, vec![dan(6)]);
    assert!(loaded.is_clean());
}
