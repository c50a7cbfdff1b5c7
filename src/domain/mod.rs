// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and the configuration builders.
//!
//! This module holds the parsed connection-string representation, the typed
//! configuration records for each service variant, and the error type. It
//! does no I/O.

pub mod connection_config;
pub mod connection_key;
pub mod errors;
pub mod event_hub_config;
pub mod iot_hub_config;
pub mod parsed;
pub mod partition_id;
pub mod service;

// Re-export commonly used types
pub use connection_config::ConnectionConfig;
pub use connection_key::ConnectionKey;
pub use errors::{ConnectionError, Result};
pub use event_hub_config::{EventHubConnectionConfig, DEFAULT_CONSUMER_GROUP};
pub use iot_hub_config::{IotHubConnectionConfig, DEFAULT_IOT_ENTITY_PATH};
pub use parsed::ParsedConnectionString;
pub use partition_id::PartitionId;
pub use service::ConnectionResolution;
