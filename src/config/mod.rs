use crate::codec::{CodecOptions, Strictness};
use crate::errors::{AppError, AppResult};
use crate::models::DEFAULT_TOTAL_LABS;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_roster_file")]
    pub roster_file: String,
    #[serde(default = "default_total_labs")]
    pub total_labs: usize,
    #[serde(default)]
    pub strictness: Strictness,
}

fn default_roster_file() -> String {
    Config::roster_path().to_string_lossy().to_string()
}
fn default_total_labs() -> usize {
    DEFAULT_TOTAL_LABS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_file: default_roster_file(),
            total_labs: default_total_labs(),
            strictness: Strictness::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rostercodec")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rostercodec")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rostercodec.conf")
    }

    /// Return the default roster location
    pub fn roster_path() -> PathBuf {
        Self::config_dir().join("roster.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.total_labs == 0 {
            return Err(AppError::Config(
                "total_labs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Settings handed to the codecs.
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            total_labs: self.total_labs,
            strictness: self.strictness,
        }
    }

    /// Initialize the configuration directory and file
    pub fn init_all(is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Roster:      {}", config.roster_file);

        Ok(())
    }
}
