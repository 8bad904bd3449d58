use std::fmt;

/// Result type for bibliognost operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building views or touching the library
#[derive(Debug)]
pub enum Error {
    /// A view was given a surface with no rows or no columns
    InvalidViewport { rows: u16, cols: u16 },

    /// A pager was asked to hold zero items per page
    ZeroPageSize,

    /// No library path was configured
    MissingLibrary,

    /// A publication referenced a record that does not exist
    NotFound { kind: &'static str, id: i64 },

    /// Database operation failed
    Database(rusqlite::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidViewport { rows, cols } => write!(
                f,
                "Invalid viewport {}x{}: a list needs at least one row and one column",
                rows, cols
            ),
            Error::ZeroPageSize => write!(f, "Invalid page size 0: a page holds at least one item"),
            Error::MissingLibrary => write!(
                f,
                "No library configured: pass --library or set BIBLIOGNOST_LIBRARY"
            ),
            Error::NotFound { kind, id } => write!(f, "No {} with id {}", kind, id),
            Error::Database(err) => write!(f, "Database error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_viewport_message_names_geometry() {
        let msg = Error::InvalidViewport { rows: 0, cols: 80 }.to_string();
        assert!(msg.contains("0x80"));
        assert!(msg.contains("at least one row"));
    }

    #[test]
    fn test_not_found_message() {
        let err = Error::NotFound {
            kind: "work",
            id: 42,
        };
        assert_eq!(err.to_string(), "No work with id 42");
    }

    #[test]
    fn test_database_error_has_source() {
        let err = Error::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(err.to_string().starts_with("Database error:"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
