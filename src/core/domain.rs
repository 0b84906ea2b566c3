use std::path::PathBuf;
use tracing::Level;

pub const DEFAULT_LIBRARY_FILE: &str = "Library.json";
pub const LIBRARY_FILE_ENV: &str = "LIBRARY_FILE";
pub const LOG_LEVEL_ENV: &str = "LIBRARY_LOG";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable {
    fn id(&self) -> String;
}


// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub library_file: PathBuf,
    pub log_level: Level,
}

impl Configuration {
    pub fn new(library_file: &str) -> Self {
        Configuration {
            library_file: PathBuf::from(library_file),
            log_level: Level::WARN,
        }
    }

    // reads LIBRARY_FILE and LIBRARY_LOG, falling back to defaults for anything unset or unparsable
    pub fn from_env() -> Self {
        Configuration::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let library_file = lookup(LIBRARY_FILE_ENV)
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LIBRARY_FILE.to_string());
        let mut config = Configuration::new(library_file.as_str());
        if let Some(level) = lookup(LOG_LEVEL_ENV).and_then(|level| level.parse::<Level>().ok()) {
            config.log_level = level;
        }
        config
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_LIBRARY_FILE)
    }
}
