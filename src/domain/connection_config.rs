// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base connection configuration.
//!
//! This module provides `ConnectionConfig`, the typed record every service
//! variant starts from. The event-hub and IoT-hub builders reuse its
//! extraction step and add their own validation on top.

use crate::adapters::SemicolonParser;
use crate::domain::parsed::REDACTED;
use crate::domain::{ConnectionError, ConnectionKey, ParsedConnectionString, Result};
use crate::ports::ConnectionStringParser;
use std::fmt;

/// Connection settings shared by every service variant.
///
/// The `host` is always present. The `entity_path` is optional here; the
/// event-hub variant requires it.
///
/// # Examples
///
/// ```
/// use hubconn::domain::ConnectionConfig;
///
/// let config = ConnectionConfig::create(
///     "Endpoint=sb://ns.servicebus.windows.net/;SharedAccessKeyName=policy;SharedAccessKey=key",
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(config.host(), "ns.servicebus.windows.net");
/// assert_eq!(config.entity_path(), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    endpoint: String,
    host: String,
    shared_access_key_name: String,
    shared_access_key: String,
    entity_path: Option<String>,
    parsed: ParsedConnectionString,
}

impl ConnectionConfig {
    /// Parses `connection_string` and builds a base configuration.
    ///
    /// `path`, when given and non-empty, takes precedence over the string's
    /// `EntityPath`.
    ///
    /// # Errors
    ///
    /// * `MalformedConnectionString` - The string is not a list of pairs
    /// * `MissingEndpoint` - No `Endpoint` key, or it has no host
    pub fn create(connection_string: &str, path: Option<&str>) -> Result<Self> {
        Self::create_with_parser(&SemicolonParser, connection_string, path)
    }

    /// Same as [`ConnectionConfig::create`], using a custom parser.
    pub fn create_with_parser(
        parser: &dyn ConnectionStringParser,
        connection_string: &str,
        path: Option<&str>,
    ) -> Result<Self> {
        let parsed = parser.parse(connection_string)?;
        Self::from_parsed(&parsed, path)
    }

    /// Builds a base configuration from already-parsed pairs.
    pub fn from_parsed(parsed: &ParsedConnectionString, path: Option<&str>) -> Result<Self> {
        let endpoint = parsed
            .get_key(ConnectionKey::Endpoint)
            .ok_or(ConnectionError::MissingEndpoint)?;
        let host = host_from_endpoint(endpoint);
        if host.is_empty() {
            return Err(ConnectionError::MissingEndpoint);
        }

        let entity_path = path
            .filter(|p| !p.is_empty())
            .or_else(|| parsed.get_key(ConnectionKey::EntityPath))
            .map(str::to_string);

        let config = Self::assemble(
            parsed.clone(),
            normalize_endpoint(endpoint),
            host.to_string(),
            entity_path,
        );

        tracing::debug!(
            "Created connection config for host '{}' (entity path: {:?})",
            config.host,
            config.entity_path
        );

        Ok(config)
    }

    /// Builds a configuration from values that are already known to be valid.
    pub(crate) fn assemble(
        parsed: ParsedConnectionString,
        endpoint: String,
        host: String,
        entity_path: Option<String>,
    ) -> Self {
        let credential = |key: ConnectionKey| parsed.get_key(key).unwrap_or_default().to_string();
        Self {
            endpoint,
            host,
            shared_access_key_name: credential(ConnectionKey::SharedAccessKeyName),
            shared_access_key: credential(ConnectionKey::SharedAccessKey),
            entity_path,
            parsed,
        }
    }

    /// Checks that the credentials needed for token authentication are set.
    ///
    /// Construction does not require them, so callers that are about to
    /// authenticate should call this first.
    pub fn validate(&self) -> Result<()> {
        validate_credentials(&self.shared_access_key_name, &self.shared_access_key)
    }

    /// The `Endpoint` value with a trailing `/`, e.g. `sb://ns.servicebus.windows.net/`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The namespace host, without scheme or trailing `/`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The shared access policy name, empty when absent.
    pub fn shared_access_key_name(&self) -> &str {
        &self.shared_access_key_name
    }

    /// The shared access policy key, empty when absent.
    pub fn shared_access_key(&self) -> &str {
        &self.shared_access_key
    }

    /// The resolved entity path, if any.
    pub fn entity_path(&self) -> Option<&str> {
        self.entity_path.as_deref()
    }

    /// The pairs this configuration was built from.
    pub fn parsed(&self) -> &ParsedConnectionString {
        &self.parsed
    }

    /// The connection string, rendered from the parsed pairs.
    pub fn connection_string(&self) -> String {
        self.parsed.to_string()
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("endpoint", &self.endpoint)
            .field("host", &self.host)
            .field("shared_access_key_name", &self.shared_access_key_name)
            .field("shared_access_key", &REDACTED)
            .field("entity_path", &self.entity_path)
            .finish()
    }
}

/// Fails with `MissingCredential` naming the first empty credential.
pub(crate) fn validate_credentials(key_name: &str, key: &str) -> Result<()> {
    for (name, value) in [
        (ConnectionKey::SharedAccessKeyName, key_name),
        (ConnectionKey::SharedAccessKey, key),
    ] {
        if value.is_empty() {
            return Err(ConnectionError::MissingCredential {
                key: name.as_str().to_string(),
            });
        }
    }
    Ok(())
}

fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{}/", endpoint)
    }
}

/// Strips any `scheme://` prefix and everything from the first `/` on.
fn host_from_endpoint(endpoint: &str) -> &str {
    let rest = match endpoint.find("://") {
        Some(idx) => &endpoint[idx + 3..],
        None => endpoint,
    };
    rest.split('/').next().unwrap_or_default().trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONNECTION_STRING: &str = "Endpoint=sb://hostname.servicebus.windows.net/;SharedAccessKeyName=sakName;SharedAccessKey=sak;EntityPath=ep";

    #[test]
    fn test_create_extracts_all_fields() {
        let config = ConnectionConfig::create(CONNECTION_STRING, None).unwrap();

        assert_eq!(config.endpoint(), "sb://hostname.servicebus.windows.net/");
        assert_eq!(config.host(), "hostname.servicebus.windows.net");
        assert_eq!(config.shared_access_key_name(), "sakName");
        assert_eq!(config.shared_access_key(), "sak");
        assert_eq!(config.entity_path(), Some("ep"));
    }

    #[test]
    fn test_explicit_path_overrides_entity_path() {
        let config = ConnectionConfig::create(CONNECTION_STRING, Some("other")).unwrap();
        assert_eq!(config.entity_path(), Some("other"));
    }

    #[test]
    fn test_empty_explicit_path_falls_back_to_entity_path() {
        let config = ConnectionConfig::create(CONNECTION_STRING, Some("")).unwrap();
        assert_eq!(config.entity_path(), Some("ep"));

        let config = ConnectionConfig::create("Endpoint=sb://a/", Some("")).unwrap();
        assert_eq!(config.entity_path(), None);
    }

    #[test]
    fn test_endpoint_gets_trailing_slash() {
        let config = ConnectionConfig::create("Endpoint=sb://a", None).unwrap();
        assert_eq!(config.endpoint(), "sb://a/");
        assert_eq!(config.host(), "a");

        let config = ConnectionConfig::create("Endpoint=sb://a/", None).unwrap();
        assert_eq!(config.endpoint(), "sb://a/");
    }

    #[test]
    fn test_entity_path_is_optional() {
        let config = ConnectionConfig::create("Endpoint=sb://a/", None).unwrap();
        assert_eq!(config.entity_path(), None);
        assert_eq!(config.shared_access_key_name(), "");
    }

    #[test]
    fn test_missing_endpoint() {
        let error = ConnectionConfig::create("SharedAccessKeyName=sakName;EntityPath=ep", None)
            .unwrap_err();
        assert!(matches!(error, ConnectionError::MissingEndpoint));
        assert!(error.to_string().contains("missing Endpoint"));
    }

    #[test]
    fn test_empty_endpoint_is_missing() {
        let error = ConnectionConfig::create("Endpoint=sb:///", None).unwrap_err();
        assert!(matches!(error, ConnectionError::MissingEndpoint));
    }

    #[test]
    fn test_malformed_string_propagates() {
        let error = ConnectionConfig::create("Endpoint=sb://a/;EntityPath;", None).unwrap_err();
        assert!(matches!(
            error,
            ConnectionError::MalformedConnectionString { .. }
        ));
    }

    #[test]
    fn test_host_from_endpoint() {
        assert_eq!(host_from_endpoint("sb://a"), "a");
        assert_eq!(host_from_endpoint("sb://a.b.c/"), "a.b.c");
        assert_eq!(host_from_endpoint("amqps://a.b.c/path"), "a.b.c");
        assert_eq!(host_from_endpoint("a.b.c/"), "a.b.c");
        assert_eq!(host_from_endpoint(""), "");
    }

    #[test]
    fn test_validate() {
        let config = ConnectionConfig::create(CONNECTION_STRING, None).unwrap();
        assert!(config.validate().is_ok());

        let config = ConnectionConfig::create("Endpoint=sb://a/;SharedAccessKey=sak", None).unwrap();
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("missing SharedAccessKeyName"));

        let config =
            ConnectionConfig::create("Endpoint=sb://a/;SharedAccessKeyName=n;SharedAccessKey=", None)
                .unwrap();
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("missing SharedAccessKey"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ConnectionConfig::create(CONNECTION_STRING, None).unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("hostname.servicebus.windows.net"));
        assert!(!debug.contains("\"sak\""));
    }

    #[test]
    fn test_connection_string_rendering() {
        let config = ConnectionConfig::create(" Endpoint = sb://a/ ; EntityPath = ep ;", None).unwrap();
        assert_eq!(config.connection_string(), "Endpoint=sb://a/;EntityPath=ep");
    }
}
