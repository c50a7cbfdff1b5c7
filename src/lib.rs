// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connection-string parsing and address derivation for messaging hubs.
//!
//! This crate parses the `Key=Value;Key=Value` connection strings used by
//! event-streaming hubs and device-messaging (IoT) hubs into typed
//! configuration records, and derives the AMQP link addresses and token
//! audiences for event-hub entities, partitions and consumer groups.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Parsed connection strings, the typed configurations
//!   (`ConnectionConfig`, `EventHubConnectionConfig`, `IotHubConnectionConfig`)
//!   and errors
//! - **Ports**: Trait definitions (`ConnectionStringParser`, `ConnectionStringSource`)
//! - **Adapters**: The semicolon parser and the places a connection string
//!   is loaded from (environment variables, YAML files)
//! - **Service**: The resolver that picks a connection string from prioritized sources
//!
//! Parsing and address derivation are pure and do no I/O. Only the source
//! adapters touch the environment or the file system, and they hold no
//! shared mutable state.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML file support (default)
//! - `env`: Enable environment variable support (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use hubconn::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = EventHubConnectionConfig::create(
//!     "Endpoint=sb://hostname.servicebus.windows.net/;SharedAccessKeyName=sakName;SharedAccessKey=sak;EntityPath=ep",
//!     None,
//! )?;
//!
//! assert_eq!(config.management_address(), "ep/$management");
//! assert_eq!(config.receiver_address(0, Some("cg")), "ep/ConsumerGroups/cg/Partitions/0");
//! assert_eq!(
//!     config.sender_audience(Some(PartitionId::from(0))),
//!     "sb://hostname.servicebus.windows.net/ep/Partitions/0"
//! );
//!
//! let iot = IotHubConnectionConfig::create(
//!     "HostName=someiot.azure-devices.net;SharedAccessKeyName=owner;SharedAccessKey=key;DeviceId=device-1234",
//!     None,
//! )?;
//! let compatible = iot.convert_to_event_hub_connection_config();
//! assert_eq!(compatible.endpoint(), "sb://someiot.azure-devices.net/");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{parse_connection_string, SemicolonParser};
    pub use crate::domain::{
        ConnectionConfig, ConnectionError, ConnectionKey, ConnectionResolution,
        EventHubConnectionConfig, IotHubConnectionConfig, ParsedConnectionString, PartitionId,
        Result,
    };
    pub use crate::ports::{ConnectionStringParser, ConnectionStringSource};
    pub use crate::service::{ConnectionResolver, ConnectionResolverBuilder};

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileAdapter, YamlParser};
}
