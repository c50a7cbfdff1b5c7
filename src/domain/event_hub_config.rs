// SPDX-License-Identifier: MIT OR Apache-2.0

//! Event-hub connection configuration and AMQP address derivation.
//!
//! `EventHubConnectionConfig` is a `ConnectionConfig` whose entity path is
//! guaranteed to be set. It derives the link addresses used for management,
//! sending and receiving, and the matching token audiences. All derivation is
//! plain string formatting.
//!
//! For an entity path `ep` on host `ns.servicebus.windows.net`:
//!
//! | Link       | Address                                 |
//! |------------|-----------------------------------------|
//! | management | `ep/$management`                        |
//! | sender     | `ep` or `ep/Partitions/0`               |
//! | receiver   | `ep/ConsumerGroups/$default/Partitions/0` |
//!
//! The audience of each link is `sb://ns.servicebus.windows.net/` followed
//! by its address.

use crate::adapters::SemicolonParser;
use crate::domain::{
    ConnectionConfig, ConnectionError, ConnectionKey, ParsedConnectionString, PartitionId, Result,
};
use crate::ports::ConnectionStringParser;

/// Consumer group used when a receiver does not name one.
pub const DEFAULT_CONSUMER_GROUP: &str = "$default";

/// Connection settings for an event-hub entity.
///
/// # Examples
///
/// ```
/// use hubconn::domain::EventHubConnectionConfig;
///
/// let config = EventHubConnectionConfig::create(
///     "Endpoint=sb://hostname.servicebus.windows.net/;SharedAccessKeyName=sakName;SharedAccessKey=sak;EntityPath=ep",
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(config.sender_address(Some(0.into())), "ep/Partitions/0");
/// assert_eq!(
///     config.receiver_audience(0, Some("cg")),
///     "sb://hostname.servicebus.windows.net/ep/ConsumerGroups/cg/Partitions/0"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventHubConnectionConfig {
    base: ConnectionConfig,
    entity_path: String,
}

impl EventHubConnectionConfig {
    /// Parses `connection_string` and builds an event-hub configuration.
    ///
    /// # Errors
    ///
    /// * `MalformedConnectionString` - The string is not a list of pairs
    /// * `MissingEndpoint` - No `Endpoint` key, or it has no host
    /// * `MissingEntityPath` - No `path` was given and the string has no `EntityPath`
    /// * `EmptyEntityPath` - The string has `EntityPath=` and no non-empty `path` was given
    pub fn create(connection_string: &str, path: Option<&str>) -> Result<Self> {
        Self::create_with_parser(&SemicolonParser, connection_string, path)
    }

    /// Same as [`EventHubConnectionConfig::create`], using a custom parser.
    pub fn create_with_parser(
        parser: &dyn ConnectionStringParser,
        connection_string: &str,
        path: Option<&str>,
    ) -> Result<Self> {
        let parsed = parser.parse(connection_string)?;
        Self::from_parsed(&parsed, path)
    }

    /// Builds an event-hub configuration from already-parsed pairs.
    pub fn from_parsed(parsed: &ParsedConnectionString, path: Option<&str>) -> Result<Self> {
        let base = ConnectionConfig::from_parsed(parsed, path)?;
        Self::from_connection_config(base)
    }

    /// Promotes a base configuration, requiring its entity path.
    pub fn from_connection_config(base: ConnectionConfig) -> Result<Self> {
        let entity_path = match base.entity_path() {
            Some(path) if !path.is_empty() => path.to_string(),
            Some(_) => {
                return Err(ConnectionError::EmptyEntityPath {
                    connection_string: base.parsed().redacted(),
                })
            }
            None => {
                return Err(ConnectionError::MissingEntityPath {
                    connection_string: base.parsed().redacted(),
                })
            }
        };

        Ok(Self { base, entity_path })
    }

    pub(crate) fn from_resolved(base: ConnectionConfig, entity_path: String) -> Self {
        Self { base, entity_path }
    }

    /// The underlying base configuration.
    pub fn as_connection_config(&self) -> &ConnectionConfig {
        &self.base
    }

    /// The raw `Endpoint` value.
    pub fn endpoint(&self) -> &str {
        self.base.endpoint()
    }

    /// The namespace host.
    pub fn host(&self) -> &str {
        self.base.host()
    }

    /// The shared access policy name.
    pub fn shared_access_key_name(&self) -> &str {
        self.base.shared_access_key_name()
    }

    /// The shared access policy key.
    pub fn shared_access_key(&self) -> &str {
        self.base.shared_access_key()
    }

    /// The event-hub name.
    pub fn entity_path(&self) -> &str {
        &self.entity_path
    }

    /// Renders the configuration back into a connection string.
    pub fn connection_string(&self) -> String {
        let mut parsed = self.base.parsed().clone();
        parsed.insert(ConnectionKey::EntityPath.as_str(), self.entity_path.as_str());
        parsed.to_string()
    }

    /// See [`ConnectionConfig::validate`].
    pub fn validate(&self) -> Result<()> {
        self.base.validate()
    }

    /// `{entityPath}/$management`
    pub fn management_address(&self) -> String {
        format!("{}/$management", self.entity_path)
    }

    /// `{entityPath}`, or `{entityPath}/Partitions/{partitionId}` when a
    /// partition is given.
    pub fn sender_address(&self, partition_id: Option<PartitionId>) -> String {
        match partition_id {
            Some(id) => format!("{}/Partitions/{}", self.entity_path, id),
            None => self.entity_path.clone(),
        }
    }

    /// `{entityPath}/ConsumerGroups/{consumerGroup}/Partitions/{partitionId}`
    ///
    /// The consumer group defaults to [`DEFAULT_CONSUMER_GROUP`].
    pub fn receiver_address(
        &self,
        partition_id: impl Into<PartitionId>,
        consumer_group: Option<&str>,
    ) -> String {
        format!(
            "{}/ConsumerGroups/{}/Partitions/{}",
            self.entity_path,
            consumer_group.unwrap_or(DEFAULT_CONSUMER_GROUP),
            partition_id.into()
        )
    }

    /// Audience of the management link.
    pub fn management_audience(&self) -> String {
        self.audience(&self.management_address())
    }

    /// Audience of a sender link.
    pub fn sender_audience(&self, partition_id: Option<PartitionId>) -> String {
        self.audience(&self.sender_address(partition_id))
    }

    /// Audience of a receiver link.
    pub fn receiver_audience(
        &self,
        partition_id: impl Into<PartitionId>,
        consumer_group: Option<&str>,
    ) -> String {
        self.audience(&self.receiver_address(partition_id, consumer_group))
    }

    fn audience(&self, address: &str) -> String {
        format!("sb://{}/{}", self.host(), address)
    }
}

impl TryFrom<ConnectionConfig> for EventHubConnectionConfig {
    type Error = ConnectionError;

    fn try_from(base: ConnectionConfig) -> Result<Self> {
        Self::from_connection_config(base)
    }
}
