// SPDX-License-Identifier: MIT OR Apache-2.0

//! Partition identifier type.
//!
//! This module provides the `PartitionId` type, which accepts either a numeric
//! or a string partition identifier and formats it without transformation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier of a partition within an event-hub entity.
///
/// Numeric identifiers are converted to their decimal string form, so the
/// numeric `0` and the string `"0"` are the same partition.
///
/// # Examples
///
/// ```
/// use hubconn::domain::partition_id::PartitionId;
///
/// assert_eq!(PartitionId::from(0u32), PartitionId::from("0"));
/// assert_eq!(PartitionId::from(7).as_str(), "7");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionId(String);

impl PartitionId {
    /// Creates a new `PartitionId` from a `String`.
    pub fn new(id: String) -> Self {
        PartitionId(id)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `PartitionId` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for PartitionId {
    fn from(s: String) -> Self {
        PartitionId(s)
    }
}

impl From<&str> for PartitionId {
    fn from(s: &str) -> Self {
        PartitionId(s.to_string())
    }
}

impl From<&String> for PartitionId {
    fn from(s: &String) -> Self {
        PartitionId(s.clone())
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PartitionId {
                fn from(n: $t) -> Self {
                    PartitionId(n.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl AsRef<str> for PartitionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
