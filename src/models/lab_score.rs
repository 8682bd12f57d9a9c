use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Labs per student when the configuration does not say otherwise.
pub const DEFAULT_TOTAL_LABS: usize = 4;

/// Max score assumed for a lab that has not been scored yet.
pub const DEFAULT_MAX_SCORE: u32 = 25;

/// Score for a single lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum LabScoreEntry {
    #[default]
    Unset,
    Scored { score: u32, max_score: u32 },
}

impl LabScoreEntry {
    /// Builds a scored entry, rejecting `score > max_score`.
    pub fn scored(score: u32, max_score: u32) -> AppResult<Self> {
        if score > max_score {
            return Err(AppError::Command(format!(
                "Lab score {score} cannot exceed the max score {max_score}"
            )));
        }
        Ok(LabScoreEntry::Scored { score, max_score })
    }

    pub fn score(&self) -> Option<u32> {
        match self {
            LabScoreEntry::Unset => None,
            LabScoreEntry::Scored { score, .. } => Some(*score),
        }
    }

    /// Current max, falling back to [`DEFAULT_MAX_SCORE`] while unset.
    pub fn max_score(&self) -> u32 {
        match self {
            LabScoreEntry::Unset => DEFAULT_MAX_SCORE,
            LabScoreEntry::Scored { max_score, .. } => *max_score,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, LabScoreEntry::Scored { .. })
    }
}

/// Scores for every lab, indexed from 1. The length is fixed at construction
/// and every scored entry satisfies `score <= max_score`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LabScoreList(Vec<LabScoreEntry>);

impl LabScoreList {
    /// `total` labs, none scored.
    pub fn unset(total: usize) -> Self {
        Self(vec![LabScoreEntry::Unset; total])
    }

    /// Wraps decoded or hand-built entries, rejecting any `score > max_score`.
    pub fn from_entries(entries: Vec<LabScoreEntry>) -> AppResult<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if let LabScoreEntry::Scored { score, max_score } = *entry
                && score > max_score
            {
                return Err(AppError::Command(format!(
                    "Lab {}: score {score} cannot exceed the max score {max_score}",
                    i + 1
                )));
            }
        }
        Ok(Self(entries))
    }

    pub fn entries(&self) -> &[LabScoreEntry] {
        &self.0
    }

    pub fn total(&self) -> usize {
        self.0.len()
    }

    /// Entry for a 1-based lab number.
    pub fn lab(&self, lab: usize) -> Option<&LabScoreEntry> {
        lab.checked_sub(1).and_then(|i| self.0.get(i))
    }

    fn index_of(&self, lab: usize) -> AppResult<usize> {
        if lab == 0 || lab > self.total() {
            return Err(AppError::Command(format!(
                "Lab number must be between 1 and {} (got {lab})",
                self.total()
            )));
        }
        Ok(lab - 1)
    }

    fn replaced(&self, i: usize, entry: LabScoreEntry) -> Self {
        let mut entries = self.0.clone();
        entries[i] = entry;
        Self(entries)
    }

    /// Sets the score of one lab, keeping its current max.
    pub fn update_score(&self, lab: usize, score: u32) -> AppResult<Self> {
        let i = self.index_of(lab)?;
        let entry = LabScoreEntry::scored(score, self.0[i].max_score())?;
        Ok(self.replaced(i, entry))
    }

    /// Changes the max of a lab that already has a score.
    pub fn update_max_score(&self, lab: usize, max_score: u32) -> AppResult<Self> {
        let i = self.index_of(lab)?;
        let score = self.0[i].score().ok_or_else(|| {
            AppError::Command(format!(
                "Lab {lab} has no score yet; set a score before changing its max"
            ))
        })?;
        if max_score < score {
            return Err(AppError::Command(format!(
                "Max score {max_score} cannot be below the current score {score}"
            )));
        }
        Ok(self.replaced(i, LabScoreEntry::Scored { score, max_score }))
    }

    /// Sets score and max of one lab together.
    pub fn update_both(&self, lab: usize, score: u32, max_score: u32) -> AppResult<Self> {
        let i = self.index_of(lab)?;
        let entry = LabScoreEntry::scored(score, max_score)?;
        Ok(self.replaced(i, entry))
    }
}
