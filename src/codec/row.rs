//! One student ⇄ one CSV row.
//!
//! Column order is fixed: the ten scalar fields, thirteen attendance digits
//! (one column per week), the lab-score string and the tag list.

use super::field::{decode_optional, decode_required, encode_optional};
use super::{CodecOptions, attendance, lab_score::LabScoreCodec};
use crate::errors::{AppError, AppResult};
use crate::models::{
    Email, Faculty, FieldValue, LabGroup, MatNum, Name, Phone, Remark, Student, Tag, TeleHandle,
    TutGroup, WEEKS, Year,
};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::collections::BTreeSet;

pub const SCALAR_COLUMNS: [&str; 10] = [
    "name",
    "phone",
    "tele_handle",
    "email",
    "mat_num",
    "tut_group",
    "lab_group",
    "faculty",
    "year",
    "remark",
];

/// Rows (and the header) shorter than this are rejected.
pub const MIN_COLUMNS: usize = SCALAR_COLUMNS.len();

pub const ATTENDANCE_START: usize = SCALAR_COLUMNS.len();
pub const LAB_SCORES_COL: usize = ATTENDANCE_START + WEEKS;
pub const TAGS_COL: usize = LAB_SCORES_COL + 1;
pub const TOTAL_COLUMNS: usize = TAGS_COL + 1;

/// Column names in write order.
pub fn header() -> Vec<String> {
    let mut cols: Vec<String> = SCALAR_COLUMNS.iter().map(|c| c.to_string()).collect();
    cols.extend((1..=WEEKS).map(|w| format!("week{w}")));
    cols.push("lab_scores".to_string());
    cols.push("tags".to_string());
    cols
}

/// Writer configured for the roster dialect: quote only when needed, `\n` rows.
pub(crate) fn writer<W: std::io::Write>(out: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out)
}

/// Flushes an in-memory writer and drops the final row terminator.
pub(crate) fn finish(wtr: csv::Writer<Vec<u8>>) -> AppResult<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Other(format!("CSV flush error: {e}")))?;
    let mut text =
        String::from_utf8(bytes).map_err(|e| AppError::Other(format!("CSV output: {e}")))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Reader that keeps short rows so they can be reported instead of aborting.
pub(crate) fn reader(text: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes())
}

#[derive(Debug, Clone, Copy)]
pub struct RowCodec {
    labs: LabScoreCodec,
}

impl RowCodec {
    pub fn new(options: CodecOptions) -> Self {
        Self {
            labs: LabScoreCodec::new(options.total_labs, options.strictness),
        }
    }

    pub fn lab_scores(&self) -> &LabScoreCodec {
        &self.labs
    }

    /// Unquoted column values for one student.
    pub fn columns(&self, s: &Student) -> AppResult<Vec<String>> {
        let mut cols = vec![
            s.name().encode(),
            encode_optional(s.phone()),
            encode_optional(s.tele_handle()),
            encode_optional(s.email()),
            s.mat_num().encode(),
            encode_optional(s.tut_group()),
            encode_optional(s.lab_group()),
            encode_optional(s.faculty()),
            encode_optional(s.year()),
            encode_optional(s.remark()),
        ];
        cols.extend(attendance::encode(s.attendance()).chars().map(String::from));
        cols.push(self.labs.encode(s.lab_scores())?);
        cols.push(encode_tags(s.tags()));
        Ok(cols)
    }

    /// Encodes one student as a single CSV row without a line terminator.
    pub fn encode(&self, s: &Student) -> AppResult<String> {
        let mut wtr = writer(Vec::new());
        wtr.write_record(self.columns(s)?)?;
        finish(wtr)
    }

    /// Decodes exactly one CSV row (quoted fields may contain newlines).
    pub fn decode(&self, line: &str) -> AppResult<Student> {
        let mut rdr = reader(line);
        let mut record = StringRecord::new();
        if !rdr.read_record(&mut record)? {
            return Err(AppError::Structural("empty row".to_string()));
        }
        let mut extra = StringRecord::new();
        if rdr.read_record(&mut extra)? {
            return Err(AppError::Structural(format!(
                "expected a single row, found another starting on line {}",
                extra.position().map(|p| p.line()).unwrap_or(0)
            )));
        }
        self.decode_record(&record)
    }

    pub fn decode_record(&self, record: &StringRecord) -> AppResult<Student> {
        if record.len() < MIN_COLUMNS {
            return Err(AppError::Structural(format!(
                "expected at least {MIN_COLUMNS} columns, found {}",
                record.len()
            )));
        }
        let col = |i: usize| record.get(i).unwrap_or("");

        let digits = attendance::digits_from_columns((ATTENDANCE_START..LAB_SCORES_COL).map(col));
        let lab_scores = match record.get(LAB_SCORES_COL) {
            Some(raw) if !raw.trim().is_empty() => self.labs.decode(raw)?,
            _ => self.labs.empty_list(),
        };

        let student = Student::builder(
            decode_required::<Name>(col(0))?,
            decode_required::<MatNum>(col(4))?,
            self.labs.total(),
        )
        .phone(decode_optional::<Phone>(col(1))?)
        .tele_handle(decode_optional::<TeleHandle>(col(2))?)
        .email(decode_optional::<Email>(col(3))?)
        .tut_group(decode_optional::<TutGroup>(col(5))?)
        .lab_group(decode_optional::<LabGroup>(col(6))?)
        .faculty(decode_optional::<Faculty>(col(7))?)
        .year(decode_optional::<Year>(col(8))?)
        .remark(decode_optional::<Remark>(col(9))?)
        .attendance(attendance::decode(&digits))
        .lab_scores(lab_scores)
        .tags(decode_tags(col(TAGS_COL))?)
        .build();
        Ok(student)
    }
}

fn encode_tags(tags: &BTreeSet<Tag>) -> String {
    tags.iter()
        .map(FieldValue::encode)
        .collect::<Vec<_>>()
        .join(",")
}

/// Comma-separated tag names inside one column; stray quotes are dropped.
fn decode_tags(raw: &str) -> AppResult<BTreeSet<Tag>> {
    raw.replace('"', "")
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(decode_required::<Tag>)
        .collect()
}
