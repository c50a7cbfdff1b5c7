// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for connection-string handling.
//!
//! This module defines the errors raised while parsing a connection string,
//! building a typed connection configuration from it, or loading it from a
//! connection-string source. All errors use `thiserror`.

use thiserror::Error;

/// The main error type for connection-string operations.
///
/// Every failure is raised at construction time; no partially built
/// configuration is ever returned. It is marked as `#[non_exhaustive]` to
/// allow for future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use hubconn::domain::errors::ConnectionError;
///
/// let error = ConnectionError::MissingEndpoint;
/// assert!(error.to_string().contains("missing Endpoint"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConnectionError {
    /// A segment had no `=` or an empty key.
    #[error("Connection string malformed: each part of the connection string must have an `=` assignment; found '{segment}'")]
    MalformedConnectionString {
        /// The offending segment, trimmed
        segment: String,
    },

    /// No `Endpoint` resolved to a host.
    #[error("Invalid connection string: missing Endpoint")]
    MissingEndpoint,

    /// No `HostName` resolved to a host.
    #[error("Invalid connection string: missing HostName")]
    MissingHostName,

    /// Neither an explicit path nor `EntityPath` was supplied.
    #[error("Either provide \"path\" or the \"connectionString\": \"{connection_string}\", must contain EntityPath=\"<path-to-the-entity>\".")]
    MissingEntityPath {
        /// The connection string, with its key redacted
        connection_string: String,
    },

    /// The string has an empty `EntityPath` and no non-empty path was given.
    #[error("The \"connectionString\": \"{connection_string}\" must contain EntityPath with a non-empty value, or a non-empty \"path\" must be provided.")]
    EmptyEntityPath {
        /// The connection string, with its key redacted
        connection_string: String,
    },

    /// A credential needed for token authentication is missing.
    #[error("Invalid connection string: missing {key}")]
    MissingCredential {
        /// The name of the missing key
        key: String,
    },

    /// None of the configured sources produced a connection string.
    #[error("No connection string found in any configured source")]
    NoConnectionString,

    /// An error occurred in a connection-string source.
    #[error("Connection string source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading a source.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConnectionError {
    /// Creates a `SourceError` with no underlying cause.
    pub fn source_error(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        ConnectionError::SourceError {
            source_name: source_name.into(),
            message: message.into(),
            source: None,
        }
    }
}

/// A specialized Result type for connection-string operations.
pub type Result<T> = std::result::Result<T, ConnectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_error() {
        let error = ConnectionError::MalformedConnectionString {
            segment: "EntityPath".to_string(),
        };
        assert!(error.to_string().contains("Connection string malformed"));
        assert!(error.to_string().contains("EntityPath"));
    }

    #[test]
    fn test_missing_endpoint_error() {
        assert_eq!(
            ConnectionError::MissingEndpoint.to_string(),
            "Invalid connection string: missing Endpoint"
        );
    }

    #[test]
    fn test_missing_host_name_error() {
        assert!(ConnectionError::MissingHostName
            .to_string()
            .contains("missing HostName"));
    }

    #[test]
    fn test_missing_entity_path_error() {
        let error = ConnectionError::MissingEntityPath {
            connection_string: "Endpoint=sb://a".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Either provide \"path\" or the \"connectionString\""));
        assert!(message.contains("must contain EntityPath"));
        assert!(message.contains("Endpoint=sb://a"));
    }

    #[test]
    fn test_empty_entity_path_error() {
        let error = ConnectionError::EmptyEntityPath {
            connection_string: "Endpoint=sb://a;EntityPath=".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("must contain EntityPath with a non-empty value"));
        assert!(!message.contains("Either provide"));
    }

    #[test]
    fn test_missing_credential_error() {
        let error = ConnectionError::MissingCredential {
            key: "SharedAccessKey".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid connection string: missing SharedAccessKey"
        );
    }

    #[test]
    fn test_source_error() {
        let error = ConnectionError::source_error("env", "Failed to read environment");
        assert_eq!(
            error.to_string(),
            "Connection string source 'env' error: Failed to read environment"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConnectionError::from(io_error);
        assert!(matches!(error, ConnectionError::IoError(_)));
    }
}
