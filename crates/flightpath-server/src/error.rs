//! Error types for flightpath-server.

use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No configuration path was supplied.
    #[error("env not set: {0}")]
    PathNotSet(&'static str),

    /// The configuration file could not be read.
    #[error("can't read config file: {0}")]
    Read(#[from] std::io::Error),

    /// The configuration file content is not a valid configuration.
    #[error("can't unmarshal config: {0}")]
    Parse(#[from] Box<figment::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_set_display() {
        let err = ConfigError::PathNotSet("CONFIG_PATH");
        assert_eq!(err.to_string(), "env not set: CONFIG_PATH");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Read(_)));
        assert!(err.to_string().starts_with("can't read config file:"));
    }
}
