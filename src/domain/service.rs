// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connection resolution trait definition.
//!
//! This module defines the `ConnectionResolution` trait, the main interface
//! for turning "wherever the connection string lives" into a typed
//! configuration. Implementors only say how to find the connection string
//! and entity path; building the configurations is provided.

use crate::domain::{
    ConnectionConfig, EventHubConnectionConfig, IotHubConnectionConfig, Result,
};

/// Resolves a connection string and builds typed configurations from it.
///
/// # Examples
///
/// ```rust
/// use hubconn::domain::{ConnectionResolution, Result};
///
/// struct Fixed;
///
/// impl ConnectionResolution for Fixed {
///     fn connection_string(&self) -> Result<String> {
///         Ok("Endpoint=sb://ns.servicebus.windows.net/;EntityPath=hub".to_string())
///     }
///
///     fn entity_path(&self) -> Option<String> {
///         None
///     }
///
///     fn reload(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// let config = Fixed.event_hub_config().unwrap();
/// assert_eq!(config.management_address(), "hub/$management");
/// ```
pub trait ConnectionResolution {
    /// Returns the connection string to use.
    ///
    /// # Errors
    ///
    /// `ConnectionError::NoConnectionString` when nothing supplies one.
    fn connection_string(&self) -> Result<String>;

    /// Returns an entity path that overrides the string's `EntityPath`, if any.
    fn entity_path(&self) -> Option<String>;

    /// Re-reads whatever the values come from.
    fn reload(&mut self) -> Result<()>;

    /// Builds a base configuration.
    fn connection_config(&self) -> Result<ConnectionConfig> {
        let connection_string = self.connection_string()?;
        ConnectionConfig::create(&connection_string, self.entity_path().as_deref())
    }

    /// Builds an event-hub configuration.
    fn event_hub_config(&self) -> Result<EventHubConnectionConfig> {
        let connection_string = self.connection_string()?;
        EventHubConnectionConfig::create(&connection_string, self.entity_path().as_deref())
    }

    /// Builds a device-hub configuration.
    fn iot_hub_config(&self) -> Result<IotHubConnectionConfig> {
        let connection_string = self.connection_string()?;
        IotHubConnectionConfig::create(&connection_string, self.entity_path().as_deref())
    }
}
