use thiserror::Error;

/// immoboard error types
#[derive(Error, Debug)]
pub enum ImmoboardError {
    /// Warehouse unreachable, TLS failure, or authentication rejected
    #[error("connection error: {0}")]
    Connection(String),

    /// Schema mismatch or malformed query result
    #[error("query error: {0}")]
    Query(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// I/O error (e.g. failing to bind the listen address)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for immoboard
pub type Result<T> = std::result::Result<T, ImmoboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImmoboardError::Query("column `price` not found".into());
        assert_eq!(err.to_string(), "query error: column `price` not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: ImmoboardError = io_err.into();
        assert!(err.to_string().contains("io error"));
    }
}
