// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the connection resolver.
//!
//! This module contains the concrete implementation of the
//! `ConnectionResolution` trait, which picks the connection string from the
//! configured sources and builds typed configurations from it.

pub mod resolver;

// Re-export commonly used types
pub use resolver::{ConnectionResolver, ConnectionResolverBuilder};
