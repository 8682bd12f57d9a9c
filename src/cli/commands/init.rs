use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and, outside test mode,
/// writes a default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rostercodec…");
    Config::init_all(cli.test)?;
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🎉 rostercodec initialization completed!");
    Ok(())
}
