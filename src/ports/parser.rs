// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connection-string parser trait definition.
//!
//! This module defines the `ConnectionStringParser` trait, which turns the raw
//! text of a connection string into a `ParsedConnectionString`.

use crate::domain::{ParsedConnectionString, Result};

/// A trait for parsing connection strings.
///
/// Implementations only tokenize and check syntax. Deciding which keys are
/// required is left to the configuration builders.
///
/// # Examples
///
/// ```rust
/// use hubconn::ports::ConnectionStringParser;
/// use hubconn::domain::{ParsedConnectionString, Result};
///
/// struct FixedParser;
///
/// impl ConnectionStringParser for FixedParser {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn parse(&self, _content: &str) -> Result<ParsedConnectionString> {
///         Ok([("Endpoint", "sb://a/")].into_iter().collect())
///     }
/// }
///
/// let parsed = FixedParser.parse("anything").unwrap();
/// assert_eq!(parsed.get("Endpoint"), Some("sb://a/"));
/// ```
pub trait ConnectionStringParser {
    /// Returns a short identifier for this parser, used in log messages.
    fn name(&self) -> &str;

    /// Parses connection-string content into key/value pairs.
    ///
    /// # Returns
    ///
    /// * `Ok(ParsedConnectionString)` - The pairs, keys and values trimmed
    /// * `Err(ConnectionError::MalformedConnectionString)` - A segment was not a pair
    fn parse(&self, content: &str) -> Result<ParsedConnectionString>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConnectionError;

    // Parser that only accepts a single `key=value` pair
    struct SinglePairParser;

    impl ConnectionStringParser for SinglePairParser {
        fn name(&self) -> &str {
            "single-pair"
        }

        fn parse(&self, content: &str) -> Result<ParsedConnectionString> {
            let (k, v) = content.split_once('=').ok_or_else(|| {
                ConnectionError::MalformedConnectionString {
                    segment: content.to_string(),
                }
            })?;
            Ok([(k, v)].into_iter().collect())
        }
    }

    #[test]
    fn test_parser_parse() {
        let parser = SinglePairParser;
        let result = parser.parse("HostName=h").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("HostName"), Some("h"));
    }

    #[test]
    fn test_parser_error() {
        let parser = SinglePairParser;
        assert!(matches!(
            parser.parse("nothing"),
            Err(ConnectionError::MalformedConnectionString { .. })
        ));
    }

    #[test]
    fn test_parser_as_trait_object() {
        let parser: Box<dyn ConnectionStringParser> = Box::new(SinglePairParser);
        assert_eq!(parser.name(), "single-pair");
    }
}
