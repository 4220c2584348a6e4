use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the dataset file.
pub const DATA_ENV_VAR: &str = "LA_SEARCH_DATA";

/// Looked up in the working directory when nothing else is given.
pub const DEFAULT_DATA_FILE: &str = "linoleic_acid_data_combined.csv";

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
}

impl AppConfig {
    /// First positional argument, then `LA_SEARCH_DATA`, then the default file.
    pub fn from_env() -> Self {
        Self::resolve(std::env::args_os().nth(1), std::env::var_os(DATA_ENV_VAR))
    }

    pub fn resolve(arg: Option<OsString>, env: Option<OsString>) -> Self {
        let data_path = arg
            .filter(|a| !a.is_empty())
            .or(env.filter(|e| !e.is_empty()))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        Self { data_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_wins_over_env() {
        let cfg = AppConfig::resolve(Some("a.csv".into()), Some("b.csv".into()));
        assert_eq!(cfg.data_path, PathBuf::from("a.csv"));
    }

    #[test]
    fn env_then_default() {
        let cfg = AppConfig::resolve(None, Some("b.csv".into()));
        assert_eq!(cfg.data_path, PathBuf::from("b.csv"));

        let cfg = AppConfig::resolve(Some("".into()), Some("".into()));
        assert_eq!(cfg.data_path, PathBuf::from(DEFAULT_DATA_FILE));
    }
}
