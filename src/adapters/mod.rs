// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing parser and source implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: the default semicolon parser, and the sources connection
//! strings are read from.

#[cfg(feature = "env")]
pub mod env_var;
pub mod semicolon;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
pub use semicolon::{parse_connection_string, SemicolonParser};
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileAdapter, YamlParser};
