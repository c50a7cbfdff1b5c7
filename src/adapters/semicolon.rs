// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semicolon-delimited connection-string parser.
//!
//! This module provides the default parser for `Key=Value;Key=Value` strings.

use crate::domain::{ConnectionError, ParsedConnectionString, Result};
use crate::ports::ConnectionStringParser;

/// Parser for semicolon-delimited `key=value` connection strings.
///
/// The input is split on `;`, empty segments are skipped, and each segment
/// is split on its first `=`. Keys and values are trimmed, so whitespace and
/// line breaks around `=` and `;` are ignored. An empty value is kept as an
/// empty string. A segment with no `=`, or with an empty key, is malformed.
///
/// # Examples
///
/// ```rust
/// use hubconn::adapters::SemicolonParser;
/// use hubconn::ports::ConnectionStringParser;
///
/// let parser = SemicolonParser::new();
/// let parsed = parser
///     .parse("Endpoint = sb://ns.servicebus.windows.net/ ;\n EntityPath=hub;")
///     .unwrap();
/// assert_eq!(parsed.get("Endpoint"), Some("sb://ns.servicebus.windows.net/"));
/// assert_eq!(parsed.get("EntityPath"), Some("hub"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemicolonParser;

impl SemicolonParser {
    /// Creates a new semicolon parser.
    pub fn new() -> Self {
        SemicolonParser
    }
}

impl ConnectionStringParser for SemicolonParser {
    fn name(&self) -> &str {
        "semicolon"
    }

    fn parse(&self, content: &str) -> Result<ParsedConnectionString> {
        let mut parsed = ParsedConnectionString::new();

        for segment in content.split(';') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let (key, value) = segment.split_once('=').ok_or_else(|| {
                ConnectionError::MalformedConnectionString {
                    segment: segment.to_string(),
                }
            })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(ConnectionError::MalformedConnectionString {
                    segment: segment.to_string(),
                });
            }

            parsed.insert(key, value.trim());
        }

        tracing::debug!(
            "Parsed connection string into {} key(s) using '{}' parser",
            parsed.len(),
            self.name()
        );

        Ok(parsed)
    }
}

/// Parses a connection string with the default `SemicolonParser`.
///
/// # Examples
///
/// ```rust
/// use hubconn::adapters::parse_connection_string;
///
/// let parsed = parse_connection_string("SharedAccessKey=;DeviceId=device-1234").unwrap();
/// assert_eq!(parsed.get("SharedAccessKey"), Some(""));
/// ```
pub fn parse_connection_string(content: &str) -> Result<ParsedConnectionString> {
    SemicolonParser.parse(content)
}
