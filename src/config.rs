//! Runtime settings resolved from the command line and environment.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Environment variable naming the library file.
pub const LIBRARY_ENV: &str = "BIBLIOGNOST_LIBRARY";

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "BIBLIOGNOST_LOG";

/// Filter used when none is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite file holding the catalog.
    pub library: PathBuf,
    /// Where log events go. No logging at all when unset.
    pub log_file: Option<PathBuf>,
    /// `EnvFilter` directives, e.g. `bibliognost=debug`.
    pub log_filter: String,
}

impl Config {
    /// Builds the configuration from already-parsed options. The command line
    /// parser fills unset options from the environment before this runs.
    pub fn resolve(
        library: Option<PathBuf>,
        log_file: Option<PathBuf>,
        log_filter: Option<String>,
    ) -> Result<Self> {
        let library = library
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(Error::MissingLibrary)?;
        let log_filter = log_filter
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            library,
            log_file,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_is_required() {
        assert!(matches!(
            Config::resolve(None, None, None),
            Err(Error::MissingLibrary)
        ));
        assert!(matches!(
            Config::resolve(Some(PathBuf::new()), None, None),
            Err(Error::MissingLibrary)
        ));
    }

    #[test]
    fn test_log_filter_defaults_to_warn() {
        let config = Config::resolve(Some("books.db".into()), None, Some("  ".into())).unwrap();
        assert_eq!(config.library, PathBuf::from("books.db"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_explicit_values_are_kept() {
        let config = Config::resolve(
            Some("books.db".into()),
            Some("bib.log".into()),
            Some("bibliognost=debug".into()),
        )
        .unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("bib.log")));
        assert_eq!(config.log_filter, "bibliognost=debug");
    }
}
