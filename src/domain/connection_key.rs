// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recognized connection-string keys.
//!
//! This module provides the `ConnectionKey` type, which names the keys the
//! configuration builders look up. Keys are matched case-sensitively.

use std::fmt;
use std::str::FromStr;

/// A key recognized in a connection string.
///
/// # Examples
///
/// ```
/// use hubconn::domain::connection_key::ConnectionKey;
///
/// let key: ConnectionKey = "SharedAccessKeyName".parse().unwrap();
/// assert_eq!(key, ConnectionKey::SharedAccessKeyName);
/// assert_eq!(key.as_str(), "SharedAccessKeyName");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConnectionKey {
    /// Namespace endpoint, e.g. `sb://ns.servicebus.windows.net/`
    Endpoint,
    /// Name of the shared access policy
    SharedAccessKeyName,
    /// Shared access policy key
    SharedAccessKey,
    /// Entity within the namespace
    EntityPath,
    /// Full device-hub host name
    HostName,
    /// Device identity on a device hub
    DeviceId,
}

impl ConnectionKey {
    /// Every recognized key, in canonical order.
    pub const ALL: [ConnectionKey; 6] = [
        ConnectionKey::Endpoint,
        ConnectionKey::HostName,
        ConnectionKey::SharedAccessKeyName,
        ConnectionKey::SharedAccessKey,
        ConnectionKey::EntityPath,
        ConnectionKey::DeviceId,
    ];

    /// Returns the key exactly as it appears in a connection string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionKey::Endpoint => "Endpoint",
            ConnectionKey::SharedAccessKeyName => "SharedAccessKeyName",
            ConnectionKey::SharedAccessKey => "SharedAccessKey",
            ConnectionKey::EntityPath => "EntityPath",
            ConnectionKey::HostName => "HostName",
            ConnectionKey::DeviceId => "DeviceId",
        }
    }

    /// Returns `true` if the value stored under this key is a secret.
    pub fn is_secret(&self) -> bool {
        matches!(self, ConnectionKey::SharedAccessKey)
    }
}

impl FromStr for ConnectionKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ConnectionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unrecognized connection string key: {}", s))
    }
}

impl AsRef<str> for ConnectionKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
