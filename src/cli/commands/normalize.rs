use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::{self, ensure_writable};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use std::path::Path;

/// Handle the `normalize` command: load, then save only the rows that decoded.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Normalize { out, force } = cmd {
        let options = cfg.codec_options();
        let loaded = storage::read_file(Path::new(&cfg.roster_file), options)?;

        for d in &loaded.diagnostics {
            warning(format!("dropping {d}"));
        }

        let out_path = expand_tilde(out);
        ensure_writable(&out_path, *force)?;

        info(format!("Writing normalized roster to {}", out_path.display()));
        storage::write_file(&out_path, &loaded.students, options)?;
        success(format!(
            "{} students written, {} rows dropped",
            loaded.students.len(),
            loaded.skipped()
        ));
    }
    Ok(())
}
