// SPDX-License-Identifier: MIT OR Apache-2.0

//! Device-hub (IoT hub) connection configuration.
//!
//! A device hub exposes an event-hub compatible endpoint. The configuration
//! here can be converted into an `EventHubConnectionConfig` pointing at that
//! endpoint, so the event-hub address helpers apply unchanged.

use crate::adapters::SemicolonParser;
use crate::domain::connection_config::validate_credentials;
use crate::domain::parsed::REDACTED;
use crate::domain::{
    ConnectionConfig, ConnectionError, ConnectionKey, EventHubConnectionConfig,
    ParsedConnectionString, Result,
};
use crate::ports::ConnectionStringParser;
use std::fmt;

/// Entity path used when none is supplied.
pub const DEFAULT_IOT_ENTITY_PATH: &str = "messages/events";

/// Connection settings for a device hub.
///
/// # Examples
///
/// ```
/// use hubconn::domain::IotHubConnectionConfig;
///
/// let config = IotHubConnectionConfig::create(
///     "HostName=someiot.azure-devices.net;SharedAccessKeyName=sakName;SharedAccessKey=sak;DeviceId=device-1234",
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(config.host(), "someiot");
/// assert_eq!(config.entity_path(), "messages/events");
///
/// let event_hub = config.convert_to_event_hub_connection_config();
/// assert_eq!(event_hub.endpoint(), "sb://someiot.azure-devices.net/");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct IotHubConnectionConfig {
    host_name: String,
    host: String,
    device_id: Option<String>,
    shared_access_key_name: String,
    shared_access_key: String,
    entity_path: String,
    parsed: ParsedConnectionString,
}

impl IotHubConnectionConfig {
    /// Parses `connection_string` and builds a device-hub configuration.
    ///
    /// The entity path is `path` when it is non-empty, otherwise
    /// [`DEFAULT_IOT_ENTITY_PATH`].
    ///
    /// # Errors
    ///
    /// * `MalformedConnectionString` - The string is not a list of pairs
    /// * `MissingHostName` - No `HostName` key, or it is empty
    pub fn create(connection_string: &str, path: Option<&str>) -> Result<Self> {
        Self::create_with_parser(&SemicolonParser, connection_string, path)
    }

    /// Same as [`IotHubConnectionConfig::create`], using a custom parser.
    pub fn create_with_parser(
        parser: &dyn ConnectionStringParser,
        connection_string: &str,
        path: Option<&str>,
    ) -> Result<Self> {
        let parsed = parser.parse(connection_string)?;
        Self::from_parsed(&parsed, path)
    }

    /// Builds a device-hub configuration from already-parsed pairs.
    pub fn from_parsed(parsed: &ParsedConnectionString, path: Option<&str>) -> Result<Self> {
        let host_name = parsed
            .get_key(ConnectionKey::HostName)
            .filter(|h| !h.is_empty())
            .ok_or(ConnectionError::MissingHostName)?;
        let host = host_name.split('.').next().unwrap_or(host_name);

        let entity_path = path
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_IOT_ENTITY_PATH);

        let value = |key: ConnectionKey| parsed.get_key(key).unwrap_or_default().to_string();

        let config = Self {
            host_name: host_name.to_string(),
            host: host.to_string(),
            device_id: parsed.get_key(ConnectionKey::DeviceId).map(str::to_string),
            shared_access_key_name: value(ConnectionKey::SharedAccessKeyName),
            shared_access_key: value(ConnectionKey::SharedAccessKey),
            entity_path: entity_path.to_string(),
            parsed: parsed.clone(),
        };

        tracing::debug!(
            "Created device hub config for host '{}' (device: {:?}, entity path: '{}')",
            config.host_name,
            config.device_id,
            config.entity_path
        );

        Ok(config)
    }

    /// Checks that `SharedAccessKeyName` and `SharedAccessKey` are set.
    pub fn validate(&self) -> Result<()> {
        validate_credentials(&self.shared_access_key_name, &self.shared_access_key)
    }

    /// The full device-hub host, e.g. `someiot.azure-devices.net`.
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    /// The hub name: the host up to its first `.`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The device identity, if the string named one.
    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    /// The shared access policy name.
    pub fn shared_access_key_name(&self) -> &str {
        &self.shared_access_key_name
    }

    /// The shared access policy key.
    pub fn shared_access_key(&self) -> &str {
        &self.shared_access_key
    }

    /// The entity path.
    pub fn entity_path(&self) -> &str {
        &self.entity_path
    }

    /// The pairs this configuration was built from.
    pub fn parsed(&self) -> &ParsedConnectionString {
        &self.parsed
    }

    /// The connection string, rendered from the parsed pairs.
    pub fn connection_string(&self) -> String {
        self.parsed.to_string()
    }

    /// Maps this configuration onto the hub's event-hub compatible endpoint.
    ///
    /// The endpoint becomes `sb://{hostName}/`; credentials and entity path
    /// carry over unchanged.
    pub fn convert_to_event_hub_connection_config(&self) -> EventHubConnectionConfig {
        let endpoint = format!("sb://{}/", self.host_name);
        let parsed: ParsedConnectionString = [
            (ConnectionKey::Endpoint, endpoint.as_str()),
            (ConnectionKey::SharedAccessKeyName, self.shared_access_key_name.as_str()),
            (ConnectionKey::SharedAccessKey, self.shared_access_key.as_str()),
            (ConnectionKey::EntityPath, self.entity_path.as_str()),
        ]
        .into_iter()
        .map(|(k, v)| (k.as_str(), v))
        .collect();

        let base = ConnectionConfig::assemble(
            parsed,
            endpoint.clone(),
            self.host_name.clone(),
            Some(self.entity_path.clone()),
        );

        EventHubConnectionConfig::from_resolved(base, self.entity_path.clone())
    }
}

impl From<&IotHubConnectionConfig> for EventHubConnectionConfig {
    fn from(config: &IotHubConnectionConfig) -> Self {
        config.convert_to_event_hub_connection_config()
    }
}

impl fmt::Debug for IotHubConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IotHubConnectionConfig")
            .field("host_name", &self.host_name)
            .field("host", &self.host)
            .field("device_id", &self.device_id)
            .field("shared_access_key_name", &self.shared_access_key_name)
            .field("shared_access_key", &REDACTED)
            .field("entity_path", &self.entity_path)
            .finish()
    }
}
