// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable connection-string source adapter.
//!
//! This module provides an adapter that reads the connection string and
//! entity path from environment variables.

use crate::domain::{ConnectionError, Result};
use crate::ports::ConnectionStringSource;
use std::env;

/// Default variable holding the connection string (after the prefix).
pub const CONNECTION_STRING_VAR: &str = "CONNECTION_STRING";

/// Default variable holding the entity path (after the prefix).
pub const ENTITY_PATH_VAR: &str = "ENTITY_PATH";

/// Maximum length for environment variable values.
const MAX_ENV_VALUE_LEN: usize = 64 * 1024;

/// Connection-string source adapter for environment variables.
///
/// Reads `{prefix}CONNECTION_STRING` and `{prefix}ENTITY_PATH` each time a
/// value is requested, so the adapter holds no state beyond the variable
/// names. Empty or whitespace-only variables are treated as unset.
///
/// # Priority
///
/// Environment variables have a priority of 2: they override configuration
/// files (priority 1).
///
/// # Examples
///
/// ```rust
/// use hubconn::adapters::EnvVarAdapter;
///
/// // Reads CONNECTION_STRING and ENTITY_PATH
/// let adapter = EnvVarAdapter::new();
///
/// // Reads EVENTHUB_CONNECTION_STRING and EVENTHUB_ENTITY_PATH
/// let adapter = EnvVarAdapter::with_prefix("EVENTHUB_");
/// assert_eq!(adapter.connection_string_variable(), "EVENTHUB_CONNECTION_STRING");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarAdapter {
    connection_string_var: String,
    entity_path_var: String,
}

impl EnvVarAdapter {
    /// Creates an adapter reading the unprefixed default variables.
    pub fn new() -> Self {
        Self::with_prefix("")
    }

    /// Creates an adapter whose default variable names carry `prefix`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self::with_variables(
            format!("{}{}", prefix, CONNECTION_STRING_VAR),
            format!("{}{}", prefix, ENTITY_PATH_VAR),
        )
    }

    /// Creates an adapter reading exactly the given variable names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hubconn::adapters::EnvVarAdapter;
    ///
    /// let adapter = EnvVarAdapter::with_variables("IOTHUB_CONNECTION_STRING", "IOTHUB_PATH");
    /// assert_eq!(adapter.entity_path_variable(), "IOTHUB_PATH");
    /// ```
    pub fn with_variables(
        connection_string_var: impl Into<String>,
        entity_path_var: impl Into<String>,
    ) -> Self {
        Self {
            connection_string_var: connection_string_var.into(),
            entity_path_var: entity_path_var.into(),
        }
    }

    /// Name of the variable holding the connection string.
    pub fn connection_string_variable(&self) -> &str {
        &self.connection_string_var
    }

    /// Name of the variable holding the entity path.
    pub fn entity_path_variable(&self) -> &str {
        &self.entity_path_var
    }

    fn read_var(name: &str) -> Result<Option<String>> {
        let value = match env::var(name) {
            Ok(value) => value,
            Err(env::VarError::NotPresent) => return Ok(None),
            Err(e @ env::VarError::NotUnicode(_)) => {
                return Err(ConnectionError::SourceError {
                    source_name: "env".to_string(),
                    message: format!("Variable '{}' is not valid unicode", name),
                    source: Some(Box::new(e)),
                })
            }
        };

        if value.len() > MAX_ENV_VALUE_LEN {
            return Err(ConnectionError::source_error(
                "env",
                format!(
                    "Variable '{}' too long: {} bytes (max {} bytes)",
                    name,
                    value.len(),
                    MAX_ENV_VALUE_LEN
                ),
            ));
        }

        let value = value.trim();
        if value.is_empty() {
            tracing::debug!("Environment variable '{}' is blank, treating as unset", name);
            return Ok(None);
        }
        Ok(Some(value.to_string()))
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionStringSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn connection_string(&self) -> Result<Option<String>> {
        Self::read_var(&self.connection_string_var)
    }

    fn entity_path(&self) -> Result<Option<String>> {
        Self::read_var(&self.entity_path_var)
    }

    fn reload(&mut self) -> Result<()> {
        // Values are read on every call
        Ok(())
    }
}
