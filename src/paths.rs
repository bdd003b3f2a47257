use std::path::PathBuf;
use std::sync::OnceLock;

// Base directories come from `dirs`, falling back to the working directory
// when the platform reports none. Resolved once per process.
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

fn app_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| PathBuf::from(".")).join("studyflow")
}

/// Where the log file lives, e.g. ~/.local/share/studyflow
pub fn data_dir() -> &'static PathBuf {
    DATA_DIR.get_or_init(|| app_dir(dirs::data_dir()))
}

/// Where config.toml is looked up, e.g. ~/.config/studyflow
pub fn config_dir() -> &'static PathBuf {
    CONFIG_DIR.get_or_init(|| app_dir(dirs::config_dir()))
}

/// Config file path: <config_dir>/config.toml
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default log file: <data_dir>/studyflow.log
pub fn log_file() -> PathBuf {
    data_dir().join("studyflow.log")
}
