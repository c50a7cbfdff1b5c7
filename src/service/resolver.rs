// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default connection resolver implementation.
//!
//! This module provides the default implementation of the
//! `ConnectionResolution` trait, which queries multiple connection-string
//! sources in priority order.

use crate::domain::{ConnectionError, ConnectionResolution, Result};
use crate::ports::ConnectionStringSource;

/// Resolves connection strings from prioritized sources.
///
/// Sources with higher priority values are queried first, and the first
/// value found wins. The connection string and the entity path are resolved
/// independently, so a path set in the environment can override the
/// `EntityPath` of a connection string read from a file. Blank values count
/// as missing. A source that fails is logged and skipped.
///
/// # Examples
///
/// ```rust
/// use hubconn::prelude::*;
///
/// # fn main() -> Result<()> {
/// std::env::set_var(
///     "RESOLVER_DOC_CONNECTION_STRING",
///     "Endpoint=sb://ns.servicebus.windows.net/;EntityPath=hub",
/// );
///
/// let resolver = ConnectionResolver::builder()
///     .with_env_prefix("RESOLVER_DOC_")
///     .build();
///
/// let config = resolver.event_hub_config()?;
/// assert_eq!(config.sender_address(None), "hub");
/// # Ok(())
/// # }
/// ```
pub struct ConnectionResolver {
    /// List of sources, maintained in priority order (highest first)
    sources: Vec<Box<dyn ConnectionStringSource>>,
}

impl ConnectionResolver {
    /// Creates a new resolver with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Creates a new resolver builder.
    pub fn builder() -> ConnectionResolverBuilder {
        ConnectionResolverBuilder::new()
    }

    /// Creates a resolver with the default sources.
    ///
    /// This includes environment variables with `env_prefix` and
    /// `connection.yaml` from the OS-appropriate configuration directory. If
    /// the YAML file doesn't exist, only environment variables will be used.
    #[allow(unused_variables)]
    pub fn with_defaults(env_prefix: &str, app_name: &str, qualifier: &str) -> Self {
        #[allow(unused_mut)]
        let mut builder = Self::builder();

        #[cfg(feature = "env")]
        {
            builder = builder.with_env_prefix(env_prefix);
        }

        #[cfg(feature = "yaml")]
        {
            use crate::adapters::YamlFileAdapter;
            match YamlFileAdapter::from_default_location(app_name, qualifier) {
                Ok(adapter) => builder = builder.with_source(Box::new(adapter)),
                Err(e) => tracing::debug!("No default connection file: {}", e),
            }
        }

        builder.build()
    }

    /// Adds a source to the resolver.
    ///
    /// Sources are automatically sorted by priority after being added.
    pub fn add_source(&mut self, source: Box<dyn ConnectionStringSource>) {
        self.sources.push(source);
        self.sort_sources();
    }

    /// Names of the configured sources, highest priority first.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Sorts sources by priority (highest first).
    fn sort_sources(&mut self) {
        self.sources.sort_by_key(|b| std::cmp::Reverse(b.priority()));
    }

    /// Queries all sources for a value, respecting priority order.
    fn query_sources<F>(&self, what: &str, get: F) -> Option<String>
    where
        F: Fn(&dyn ConnectionStringSource) -> Result<Option<String>>,
    {
        for source in &self.sources {
            match get(source.as_ref()) {
                Ok(Some(value)) if value.trim().is_empty() => {
                    tracing::debug!("Ignoring blank {} from source '{}'", what, source.name());
                    continue;
                }
                Ok(Some(value)) => {
                    tracing::debug!("Resolved {} from source '{}'", what, source.name());
                    return Some(value);
                }
                Ok(None) => continue,
                Err(e) => {
                    // Log the error but continue to next source
                    tracing::debug!(
                        "Error querying source '{}' for {}: {}",
                        source.name(),
                        what,
                        e
                    );
                    continue;
                }
            }
        }
        None
    }
}

impl Default for ConnectionResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionResolution for ConnectionResolver {
    fn connection_string(&self) -> Result<String> {
        self.query_sources("connection string", |s| s.connection_string())
            .ok_or(ConnectionError::NoConnectionString)
    }

    fn entity_path(&self) -> Option<String> {
        self.query_sources("entity path", |s| s.entity_path())
    }

    fn reload(&mut self) -> Result<()> {
        for source in &mut self.sources {
            if let Err(e) = source.reload() {
                tracing::warn!("Failed to reload source '{}': {}", source.name(), e);
            }
        }
        Ok(())
    }
}

/// Builder for constructing a `ConnectionResolver`.
///
/// # Examples
///
/// ```rust
/// use hubconn::service::ConnectionResolverBuilder;
///
/// let resolver = ConnectionResolverBuilder::new()
///     .with_env_prefix("EVENTHUB_")
///     .build();
/// ```
pub struct ConnectionResolverBuilder {
    sources: Vec<Box<dyn ConnectionStringSource>>,
}

impl ConnectionResolverBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds a source to the builder.
    pub fn with_source(mut self, source: Box<dyn ConnectionStringSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds `CONNECTION_STRING` / `ENTITY_PATH` environment variables as a source.
    #[cfg(feature = "env")]
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::new()))
    }

    /// Adds prefixed environment variables as a source.
    #[cfg(feature = "env")]
    pub fn with_env_prefix(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::with_prefix(prefix)))
    }

    /// Adds a YAML file as a source.
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        use crate::adapters::YamlFileAdapter;
        let adapter = YamlFileAdapter::from_file(path)?;
        Ok(self.with_source(Box::new(adapter)))
    }

    /// Builds the resolver.
    pub fn build(self) -> ConnectionResolver {
        let mut resolver = ConnectionResolver::new();

        for source in self.sources {
            resolver.add_source(source);
        }

        resolver
    }
}

impl Default for ConnectionResolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock source for testing
    struct MockSource {
        name: String,
        priority: u8,
        connection_string: Option<String>,
        entity_path: Option<String>,
        fail: bool,
    }

    impl MockSource {
        fn new(name: &str, priority: u8) -> Self {
            Self {
                name: name.to_string(),
                priority,
                connection_string: None,
                entity_path: None,
                fail: false,
            }
        }

        fn with_connection_string(mut self, value: &str) -> Self {
            self.connection_string = Some(value.to_string());
            self
        }

        fn with_entity_path(mut self, value: &str) -> Self {
            self.entity_path = Some(value.to_string());
            self
        }

        fn failing(mut self) -> Self {
            self.fail = true;
            self
        }
    }

    impl ConnectionStringSource for MockSource {
        fn name(&self) -> &str {
            &self.name
        }

        fn priority(&self) -> u8 {
            self.priority
        }

        fn connection_string(&self) -> Result<Option<String>> {
            if self.fail {
                return Err(ConnectionError::source_error(&self.name, "unavailable"));
            }
            Ok(self.connection_string.clone())
        }

        fn entity_path(&self) -> Result<Option<String>> {
            Ok(self.entity_path.clone())
        }

        fn reload(&mut self) -> Result<()> {
            if self.fail {
                return Err(ConnectionError::source_error(&self.name, "unavailable"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_resolver_new() {
        let resolver = ConnectionResolver::new();
        assert_eq!(resolver.sources.len(), 0);
    }

    #[test]
    fn test_resolver_priority_order() {
        let mut resolver = ConnectionResolver::new();

        // Add sources in reverse priority order
        resolver.add_source(Box::new(MockSource::new("low", 1)));
        resolver.add_source(Box::new(MockSource::new("high", 3)));
        resolver.add_source(Box::new(MockSource::new("medium", 2)));

        assert_eq!(resolver.source_names(), vec!["high", "medium", "low"]);
    }

    #[test]
    fn test_resolver_precedence() {
        let resolver = ConnectionResolver::builder()
            .with_source(Box::new(
                MockSource::new("low", 1).with_connection_string("Endpoint=sb://low/"),
            ))
            .with_source(Box::new(
                MockSource::new("high", 3).with_connection_string("Endpoint=sb://high/"),
            ))
            .build();

        assert_eq!(resolver.connection_string().unwrap(), "Endpoint=sb://high/");
    }

    #[test]
    fn test_resolver_values_resolved_independently() {
        let resolver = ConnectionResolver::builder()
            .with_source(Box::new(
                MockSource::new("file", 1).with_connection_string("Endpoint=sb://a/;EntityPath=file"),
            ))
            .with_source(Box::new(MockSource::new("env", 2).with_entity_path("env-path")))
            .build();

        let config = resolver.event_hub_config().unwrap();
        assert_eq!(config.host(), "a");
        assert_eq!(config.entity_path(), "env-path");
    }

    #[test]
    fn test_resolver_blank_entity_path_falls_through() {
        let resolver = ConnectionResolver::builder()
            .with_source(Box::new(
                MockSource::new("file", 1)
                    .with_connection_string("Endpoint=sb://a.example/;EntityPath=ep"),
            ))
            .with_source(Box::new(MockSource::new("env", 2).with_entity_path("")))
            .build();

        assert!(resolver.entity_path().is_none());
        let config = resolver.event_hub_config().unwrap();
        assert_eq!(config.entity_path(), "ep");
    }

    #[test]
    fn test_resolver_skips_failing_source() {
        let resolver = ConnectionResolver::builder()
            .with_source(Box::new(MockSource::new("broken", 3).failing()))
            .with_source(Box::new(
                MockSource::new("ok", 1).with_connection_string("Endpoint=sb://ok/"),
            ))
            .build();

        assert_eq!(resolver.connection_string().unwrap(), "Endpoint=sb://ok/");
    }

    #[test]
    fn test_resolver_no_connection_string() {
        let resolver = ConnectionResolver::builder()
            .with_source(Box::new(MockSource::new("empty", 1)))
            .build();

        assert!(matches!(
            resolver.connection_string(),
            Err(ConnectionError::NoConnectionString)
        ));
        assert!(resolver.entity_path().is_none());
    }

    #[test]
    fn test_resolver_reload_tolerates_failures() {
        let mut resolver = ConnectionResolver::builder()
            .with_source(Box::new(MockSource::new("broken", 1).failing()))
            .build();

        assert!(resolver.reload().is_ok());
    }

    #[test]
    fn test_resolver_iot_hub_config() {
        let resolver = ConnectionResolver::builder()
            .with_source(Box::new(MockSource::new("mock", 1).with_connection_string(
                "HostName=someiot.azure-devices.net;SharedAccessKeyName=n;SharedAccessKey=k",
            )))
            .build();

        let config = resolver.iot_hub_config().unwrap();
        assert_eq!(config.host(), "someiot");
        assert_eq!(config.entity_path(), "messages/events");
    }

    #[test]
    #[cfg(feature = "env")]
    fn test_builder_with_env_vars() {
        let resolver = ConnectionResolverBuilder::new().with_env_vars().build();
        assert_eq!(resolver.source_names(), vec!["env"]);
    }

    #[test]
    #[cfg(feature = "env")]
    fn test_builder_with_env_prefix() {
        let resolver = ConnectionResolverBuilder::new()
            .with_env_prefix("HUBCONN_RESOLVER_UNSET_")
            .build();
        assert!(matches!(
            resolver.connection_string(),
            Err(ConnectionError::NoConnectionString)
        ));
    }

    #[test]
    fn test_builder_default() {
        let builder = ConnectionResolverBuilder::default();
        assert_eq!(builder.sources.len(), 0);
        assert_eq!(ConnectionResolver::default().sources.len(), 0);
    }
}
