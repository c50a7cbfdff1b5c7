// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsed connection-string representation.
//!
//! This module provides `ParsedConnectionString`, the key/value mapping a
//! connection-string parser produces and the configuration builders consume.

use crate::domain::connection_key::ConnectionKey;
use std::fmt;

/// Placeholder written in place of secret values.
pub(crate) const REDACTED: &str = "***";

/// The key/value pairs of a connection string.
///
/// Pairs keep the order in which they were first seen. Inserting a key that
/// is already present replaces its value in place, so the last value wins.
/// Keys are compared case-sensitively.
///
/// # Examples
///
/// ```
/// use hubconn::domain::{ConnectionKey, ParsedConnectionString};
///
/// let mut parsed = ParsedConnectionString::new();
/// parsed.insert("Endpoint", "sb://ns.servicebus.windows.net/");
/// parsed.insert("EntityPath", "hub");
///
/// assert_eq!(parsed.get_key(ConnectionKey::EntityPath), Some("hub"));
/// assert_eq!(parsed.to_string(), "Endpoint=sb://ns.servicebus.windows.net/;EntityPath=hub");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ParsedConnectionString {
    entries: Vec<(String, String)>,
}

impl ParsedConnectionString {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair, replacing the value of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => {
                tracing::debug!("Connection string key '{}' repeated, last value wins", key);
                entry.1 = value;
            }
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the value stored under a recognized key.
    pub fn get_key(&self, key: ConnectionKey) -> Option<&str> {
        self.get(key.as_str())
    }

    /// Returns `true` if `key` is present, even with an empty value.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no pairs were parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders the pairs with every secret value replaced by `***`.
    pub fn redacted(&self) -> String {
        self.render(true)
    }

    fn render(&self, redact: bool) -> String {
        self.entries
            .iter()
            .map(|(k, v)| {
                let secret = redact && k == ConnectionKey::SharedAccessKey.as_str();
                format!("{}={}", k, if secret { REDACTED } else { v })
            })
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl fmt::Display for ParsedConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

impl fmt::Debug for ParsedConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParsedConnectionString")
            .field(&self.redacted())
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParsedConnectionString {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut parsed = Self::new();
        for (k, v) in iter {
            parsed.insert(k, v);
        }
        parsed
    }
}
