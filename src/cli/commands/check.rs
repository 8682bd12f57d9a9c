use crate::cli::parser::Commands;
use crate::codec::Diagnostic;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::{detail, header, success, warning};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct CheckSummary<'a> {
    file: &'a str,
    loaded: usize,
    skipped: usize,
    diagnostics: &'a [Diagnostic],
}

/// Handle the `check` command. Skipped rows are reported, not treated as failure.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { json } = cmd {
        let loaded = storage::read_file(Path::new(&cfg.roster_file), cfg.codec_options())?;

        if *json {
            let summary = CheckSummary {
                file: &cfg.roster_file,
                loaded: loaded.students.len(),
                skipped: loaded.skipped(),
                diagnostics: &loaded.diagnostics,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        header(format!("Roster check: {}", cfg.roster_file));
        success(format!("{} students loaded", loaded.students.len()));

        if loaded.is_clean() {
            return Ok(());
        }
        for d in &loaded.diagnostics {
            warning(format!("row {} (line {}): {}", d.row, d.line, d.reason));
            if !d.content.is_empty() {
                detail(&d.content);
            }
        }
        warning(format!("{} rows skipped", loaded.skipped()));
    }
    Ok(())
}
