use clap::{Parser, Subcommand};

/// Command-line interface definition for rostercodec
/// CLI application to inspect and rewrite student roster files
#[derive(Parser)]
#[command(
    name = "rostercodec",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect, list and normalize CSV student roster files",
    long_about = None
)]
pub struct Cli {
    /// Override roster file path (useful for tests or ad-hoc files)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Reset damaged lab-score entries instead of skipping the whole row
    #[arg(global = true, long = "lenient")]
    pub lenient: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration
    Init,

    /// Show the configuration file
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Load the roster and report rows that could not be read
    Check {
        #[arg(long = "json", help = "Print the load summary as JSON")]
        json: bool,
    },

    /// List the students in the roster
    List {
        #[arg(long = "weeks", help = "Also print the per-week attendance of each student")]
        weeks: bool,
    },

    /// Re-save the roster in canonical form, dropping unreadable rows
    Normalize {
        #[arg(long, value_name = "FILE", help = "Where to write the normalized roster")]
        out: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
