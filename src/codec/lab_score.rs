//! Lab scores ⇄ `"<N>.<entry>|<entry>|..."`.
//!
//! Each entry is `-` for an unscored lab or `<score>/<max>`.

use super::Strictness;
use crate::errors::{AppError, AppResult};
use crate::models::{Field, LabScoreEntry, LabScoreList};

pub const UNSET: &str = "-";
const COUNT_SEP: char = '.';
const ENTRY_SEP: char = '|';
const SCORE_SEP: char = '/';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabScoreCodec {
    total: usize,
    strictness: Strictness,
}

impl LabScoreCodec {
    pub fn new(total: usize, strictness: Strictness) -> Self {
        Self { total, strictness }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// List with every lab unscored, sized to the configured total.
    pub fn empty_list(&self) -> LabScoreList {
        LabScoreList::unset(self.total)
    }

    /// Fails when the list does not hold exactly the configured number of
    /// labs, so nothing is written that [`decode`](Self::decode) would reject.
    pub fn encode(&self, list: &LabScoreList) -> AppResult<String> {
        if list.total() != self.total {
            return Err(AppError::Structural(format!(
                "lab scores hold {} labs, expected {}",
                list.total(),
                self.total
            )));
        }
        let entries: Vec<String> = list.entries().iter().map(encode_entry).collect();
        Ok(format!(
            "{}{COUNT_SEP}{}",
            list.total(),
            entries.join(&ENTRY_SEP.to_string())
        ))
    }

    pub fn decode(&self, s: &str) -> AppResult<LabScoreList> {
        let s = s.trim();
        let (count, body) = s.split_once(COUNT_SEP).ok_or_else(|| {
            AppError::invalid(Field::LabScores, s, "expected '<count>.<entries>'")
        })?;
        let declared: usize = count.trim().parse().map_err(|_| {
            AppError::invalid(Field::LabScores, s, "the lab count is not a number")
        })?;

        let raw_entries: Vec<&str> = body.split(ENTRY_SEP).collect();
        if raw_entries.len() != declared {
            return Err(AppError::Structural(format!(
                "lab scores '{s}' declare {declared} entries but contain {}",
                raw_entries.len()
            )));
        }
        if declared != self.total {
            return Err(AppError::Structural(format!(
                "lab scores '{s}' hold {declared} labs, expected {}",
                self.total
            )));
        }

        let mut entries = Vec::with_capacity(declared);
        for (i, raw) in raw_entries.iter().enumerate() {
            match decode_entry(raw) {
                Ok(entry) => entries.push(entry),
                Err(reason) => match self.strictness {
                    Strictness::Strict => {
                        return Err(AppError::invalid(
                            Field::LabScores,
                            s,
                            format!("lab {}: {reason}", i + 1),
                        ));
                    }
                    Strictness::Lenient => {
                        log::warn!("lab {} entry '{raw}' reset to unscored: {reason}", i + 1);
                        entries.push(LabScoreEntry::Unset);
                    }
                },
            }
        }
        LabScoreList::from_entries(entries)
    }
}

fn encode_entry(entry: &LabScoreEntry) -> String {
    match entry {
        LabScoreEntry::Unset => UNSET.to_string(),
        LabScoreEntry::Scored { score, max_score } => format!("{score}{SCORE_SEP}{max_score}"),
    }
}

fn decode_entry(raw: &str) -> Result<LabScoreEntry, String> {
    let raw = raw.trim();
    if raw == UNSET {
        return Ok(LabScoreEntry::Unset);
    }
    let parts: Vec<&str> = raw.split(SCORE_SEP).collect();
    let [score, max] = parts.as_slice() else {
        return Err(format!("'{raw}' is not '<score>/<max>' or '{UNSET}'"));
    };
    let score: u32 = score
        .trim()
        .parse()
        .map_err(|_| format!("score '{score}' is not a non-negative integer"))?;
    let max: u32 = max
        .trim()
        .parse()
        .map_err(|_| format!("max score '{max}' is not a non-negative integer"))?;
    if score > max {
        return Err(format!("score {score} exceeds max score {max}"));
    }
    Ok(LabScoreEntry::Scored {
        score,
        max_score: max,
    })
}
