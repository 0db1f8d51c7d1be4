use std::error::Error;

/// Base trait for all application errors
pub trait TeamsortError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type TeamsortResult<T> = Result<T, Box<dyn TeamsortError>>;

impl TeamsortError for teamsort_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            teamsort_config::ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            teamsort_config::ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            teamsort_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            teamsort_config::ConfigError::ConfigParseError { .. }
                | teamsort_config::ConfigError::InvalidConfiguration { .. }
        )
    }
}

/// Log an application error at a level matching its kind.
///
/// User errors are expected outcomes (bad input, missing permission) and are
/// logged as warnings; everything else is an error.
pub fn log_app_error<E: TeamsortError>(error: &E) {
    if error.is_user_error() {
        tracing::warn!(
            event = "core.app.user_error",
            error_code = error.error_code(),
            error = %error
        );
    } else {
        tracing::error!(
            event = "core.app.error_occurred",
            error_code = error.error_code(),
            error = %error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teamsort_result() {
        let _result: TeamsortResult<i32> = Ok(42);
    }

    #[test]
    fn test_config_parse_error() {
        let error = teamsort_config::ConfigError::ConfigParseError {
            message: "invalid TOML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse config file: invalid TOML syntax"
        );
        assert_eq!(error.error_code(), "CONFIG_PARSE_ERROR");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_config_io_error_is_not_user_error() {
        let error = teamsort_config::ConfigError::from(std::io::Error::other("disk gone"));
        assert_eq!(error.error_code(), "CONFIG_IO_ERROR");
        assert!(!error.is_user_error());
    }
}
