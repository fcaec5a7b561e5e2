//! Application error handling with codes, context and recovery suggestions
//!
//! Library crates report their own `thiserror` enums; this module folds them
//! into a single structured error with:
//! - A numeric error code and category
//! - Optional context and recovery suggestion
//! - A process exit code

use nearby_geo::GeoError;
use nearby_hours::HoursError;
use nearby_search::{SearchError, SearchErrorCode};
use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // General errors (1xxx)
    Internal = 1001,

    // IO errors (2xxx)
    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    // Configuration errors (3xxx)
    ConfigNotFound = 3001,
    ConfigParseError = 3002,
    ConfigValidationError = 3003,

    // Validation errors (4xxx)
    InvalidCoordinate = 4001,
    InvalidRadius = 4002,
    InvalidTime = 4003,

    // Data errors (5xxx)
    MissingColumn = 5001,
    CsvParseError = 5002,

    // Collaborator errors (6xxx)
    GeocodeError = 6000,
}

impl ErrorCode {
    /// Get the numeric code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            1 => "General",
            2 => "IO",
            3 => "Configuration",
            4 => "Validation",
            5 => "Data",
            6 => "Geocoding",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {}", ctx)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.code.code() / 1000 {
            3 => exit_codes::CONFIG_ERROR,
            4 => exit_codes::VALIDATION_ERROR,
            5 => exit_codes::DATA_ERROR,
            _ => exit_codes::FAILURE,
        }
    }

    // Convenience constructors

    pub fn file_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::FileNotFound,
            format!("File not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Check that the file exists and you have read permissions")
    }

    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a .nearby.toml file or use --config to specify a path")
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigValidationError, message)
    }

    pub fn invalid_time(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidTime, message)
            .with_suggestion("Use HH:MM, HH:MM:SS or HHMM, for example 14:30")
    }

    pub fn missing_column(column: &str) -> Self {
        Self::new(
            ErrorCode::MissingColumn,
            format!("Required column not found: {}", column),
        )
        .with_suggestion("Check the [dataset] column names in your configuration")
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
    pub const VALIDATION_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DATA_ERROR: i32 = 4;
}

// Implement From for common error types

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {}", err))
            .with_source(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::new(ErrorCode::CsvParseError, format!("CSV error: {}", err)).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorCode::Internal, format!("JSON error: {}", err)).with_source(err)
    }
}

impl From<GeoError> for Error {
    fn from(err: GeoError) -> Self {
        Error::new(ErrorCode::InvalidCoordinate, err.to_string()).with_source(err)
    }
}

impl From<HoursError> for Error {
    fn from(err: HoursError) -> Self {
        Error::invalid_time(err.to_string()).with_source(err)
    }
}

impl From<SearchError> for Error {
    fn from(err: SearchError) -> Self {
        let code = match err.code() {
            SearchErrorCode::InvalidRadius => ErrorCode::InvalidRadius,
            SearchErrorCode::InvalidCenter => ErrorCode::InvalidCoordinate,
            SearchErrorCode::Geocode => ErrorCode::GeocodeError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::InvalidRadius.to_string(), "E4002");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::IoError.category(), "IO");
        assert_eq!(ErrorCode::MissingColumn.category(), "Data");
        assert_eq!(ErrorCode::InvalidTime.category(), "Validation");
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::file_not_found("/data/parking.csv")
            .with_context("While loading the dataset");

        assert_eq!(err.code, ErrorCode::FileNotFound);
        assert!(err.context.is_some());
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_search_error_mapping() {
        let err: Error = SearchError::InvalidRadius(-1.0).into();
        assert_eq!(err.code, ErrorCode::InvalidRadius);
        assert_eq!(err.exit_code(), exit_codes::VALIDATION_ERROR);

        let err: Error = SearchError::InvalidCenter(GeoError::InvalidLatitude(99.0)).into();
        assert_eq!(err.code, ErrorCode::InvalidCoordinate);
    }

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(Error::config_invalid("bad").exit_code(), exit_codes::CONFIG_ERROR);
        assert_eq!(Error::missing_column("위도").exit_code(), exit_codes::DATA_ERROR);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(Error::from(io).exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn test_io_error_kinds() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(Error::from(missing).code, ErrorCode::FileNotFound);

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(Error::from(denied).code, ErrorCode::PermissionDenied);
    }

    #[test]
    fn test_display_includes_context_and_suggestion() {
        let err = Error::missing_column("위도").with_context("Reading parking.csv");
        let text = err.to_string();

        assert!(text.starts_with("[E5001] Required column not found: 위도"));
        assert!(text.contains("Context: Reading parking.csv"));
        assert!(text.contains("Suggestion: Check the [dataset] column names"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(Error::invalid_time("25:00"));
        let err = result.context("parsing --at").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("parsing --at"));
    }
}
