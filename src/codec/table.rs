//! Whole roster ⇄ CSV text.
//!
//! Reading is lenient per row: a row that fails to decode is skipped and
//! reported as a [`Diagnostic`], and the remaining rows still load. Only a
//! missing or too-short header fails the whole table.

use super::row::{self, MIN_COLUMNS, RowCodec};
use super::CodecOptions;
use crate::errors::{AppError, AppResult};
use crate::models::Student;
use csv::StringRecord;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A field did not match its grammar.
    Validation,
    /// Too few columns, or a list whose declared count is wrong.
    Structural,
}

impl From<&AppError> for DiagnosticKind {
    fn from(e: &AppError) -> Self {
        match e {
            AppError::Validation { .. } => DiagnosticKind::Validation,
            _ => DiagnosticKind::Structural,
        }
    }
}

/// A skipped row and why it was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based data row, header excluded.
    pub row: usize,
    /// 1-based file line the row starts on (0 when unknown).
    pub line: u64,
    pub kind: DiagnosticKind,
    pub content: String,
    pub reason: String,
}

impl Diagnostic {
    fn new(row: usize, line: u64, content: String, err: &AppError) -> Self {
        Self {
            row,
            line,
            kind: DiagnosticKind::from(err),
            content,
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} (line {}): {} | {}",
            self.row, self.line, self.reason, self.content
        )
    }
}

/// Result of reading a table: the rows that decoded, plus the ones that did not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedRoster {
    pub students: Vec<Student>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadedRoster {
    pub fn skipped(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TableCodec {
    rows: RowCodec,
}

impl TableCodec {
    pub fn new(options: CodecOptions) -> Self {
        Self {
            rows: RowCodec::new(options),
        }
    }

    pub fn rows(&self) -> &RowCodec {
        &self.rows
    }

    /// Header line followed by one row per student, in the given order.
    ///
    /// The whole text is built before anything is returned, so a caller that
    /// writes it out never commits a partial roster.
    pub fn serialize(&self, students: &[Student]) -> AppResult<String> {
        if students.is_empty() {
            return Err(AppError::EmptyRoster);
        }
        let mut wtr = row::writer(Vec::new());
        wtr.write_record(row::header())?;
        for s in students {
            wtr.write_record(self.rows.columns(s)?)?;
        }
        let text = row::finish(wtr)?;
        log::debug!("serialized {} students", students.len());
        Ok(text)
    }

    pub fn deserialize(&self, text: &str) -> AppResult<LoadedRoster> {
        let mut rdr = row::reader(text);
        let mut records = rdr.records();

        let header = match records.next() {
            None => return Ok(LoadedRoster::default()),
            Some(h) => h?,
        };
        if header.len() < MIN_COLUMNS {
            return Err(AppError::Structural(format!(
                "header has {} columns, expected at least {MIN_COLUMNS}",
                header.len()
            )));
        }

        let mut loaded = LoadedRoster::default();
        // flexible reader over valid UTF-8: a csv error here is fatal
        for (i, result) in records.enumerate() {
            let record = result?;
            let diagnostic = match self.rows.decode_record(&record) {
                Ok(student) => {
                    loaded.students.push(student);
                    continue;
                }
                Err(e) if e.is_row_level() => {
                    let line = record.position().map(|p| p.line()).unwrap_or(0);
                    Diagnostic::new(i + 1, line, row_content(&record), &e)
                }
                Err(e) => return Err(e),
            };
            log::warn!("Skipping invalid row: {diagnostic}");
            loaded.diagnostics.push(diagnostic);
        }

        log::debug!(
            "deserialized {} students, skipped {} rows",
            loaded.students.len(),
            loaded.skipped()
        );
        Ok(loaded)
    }
}

fn row_content(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
