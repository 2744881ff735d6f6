use std::env;

use crate::types::{ImmoboardError, Result};

/// Default warehouse table holding the listings.
const DEFAULT_LISTINGS_TABLE: &str = "property_data.houses";

/// Default listen address for the web surface.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration, sourced from the environment.
///
/// Connection credentials live entirely inside `DATABASE_URL`; this
/// application never handles them individually.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection URL for the warehouse
    pub database_url: String,
    /// Schema-qualified table holding the Listing rows
    pub listings_table: String,
    /// Listen address for the dashboard server
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| ImmoboardError::Config("DATABASE_URL is not set".into()))?;

        let listings_table =
            env::var("LISTINGS_TABLE").unwrap_or_else(|_| DEFAULT_LISTINGS_TABLE.to_string());
        validate_table_name(&listings_table)?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            database_url,
            listings_table,
            bind_addr,
        })
    }
}

/// Validate a schema-qualified table name before it is interpolated into the
/// SELECT statement. At most one dot; each segment must start with a letter
/// or underscore and contain only ASCII alphanumerics and underscores.
pub fn validate_table_name(name: &str) -> Result<()> {
    let segments: Vec<&str> = name.split('.').collect();
    if segments.is_empty() || segments.len() > 2 {
        return Err(ImmoboardError::Config(format!(
            "invalid table name `{name}`"
        )));
    }

    for segment in segments {
        let mut chars = segment.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_start || !valid_rest {
            return Err(ImmoboardError::Config(format!(
                "invalid table name `{name}`"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== validate_table_name tests ==========

    #[test]
    fn test_bare_table_name_ok() {
        assert!(validate_table_name("houses").is_ok());
    }

    #[test]
    fn test_schema_qualified_name_ok() {
        assert!(validate_table_name("property_data.houses").is_ok());
    }

    #[test]
    fn test_leading_underscore_ok() {
        assert!(validate_table_name("_staging.listings_v2").is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(validate_table_name("").is_err());
    }

    #[test]
    fn test_two_dots_rejected() {
        assert!(validate_table_name("a.b.c").is_err());
    }

    #[test]
    fn test_trailing_dot_rejected() {
        assert!(validate_table_name("property_data.").is_err());
    }

    #[test]
    fn test_leading_digit_rejected() {
        assert!(validate_table_name("1houses").is_err());
    }

    #[test]
    fn test_injection_rejected() {
        assert!(validate_table_name("houses; DROP TABLE houses").is_err());
        assert!(validate_table_name("houses--").is_err());
        assert!(validate_table_name("\"houses\"").is_err());
    }
}
