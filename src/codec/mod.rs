//! Text codecs for the roster file, from single fields up to whole tables.

pub mod attendance;
pub mod field;
pub mod lab_score;
pub mod row;
pub mod table;

pub use lab_score::LabScoreCodec;
pub use row::RowCodec;
pub use table::{Diagnostic, DiagnosticKind, LoadedRoster, TableCodec};

use crate::models::DEFAULT_TOTAL_LABS;
use serde::{Deserialize, Serialize};

/// How a damaged lab-score entry is handled on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// One bad entry invalidates the whole list (and so the row).
    #[default]
    Strict,
    /// A bad entry is reset to unscored; the rest of the list survives.
    Lenient,
}

/// Settings threaded into every codec at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    pub total_labs: usize,
    pub strictness: Strictness,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            total_labs: DEFAULT_TOTAL_LABS,
            strictness: Strictness::Strict,
        }
    }
}
