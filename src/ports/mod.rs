// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) for turning text into
//! parsed connection strings and for obtaining connection strings from the
//! outside world. These traits are implemented by adapters in the adapters layer.

pub mod parser;
pub mod source;

// Re-export commonly used types
pub use parser::ConnectionStringParser;
pub use source::ConnectionStringSource;
