// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connection-string source trait definition.
//!
//! This module defines the `ConnectionStringSource` trait, the port through
//! which connection strings enter the crate. Environment variables and YAML
//! files are the built-in sources.

use crate::domain::Result;

/// A trait for connection-string sources.
///
/// A source may supply a connection string, an entity path, both, or
/// neither. The entity path is passed to the configuration builders as the
/// explicit `path` argument, so a non-empty value overrides any `EntityPath`
/// inside the connection string.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded contexts.
///
/// # Priority
///
/// Higher priority values take precedence over lower ones:
///
/// - **2**: Environment variables
/// - **1 (lowest)**: Configuration files
///
/// Application-defined sources may use any value.
///
/// # Examples
///
/// ```rust
/// use hubconn::ports::ConnectionStringSource;
/// use hubconn::domain::Result;
///
/// struct FixedSource;
///
/// impl ConnectionStringSource for FixedSource {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn connection_string(&self) -> Result<Option<String>> {
///         Ok(Some("Endpoint=sb://a/;EntityPath=hub".to_string()))
///     }
///
///     fn entity_path(&self) -> Result<Option<String>> {
///         Ok(None)
///     }
///
///     fn reload(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// assert!(FixedSource.connection_string().unwrap().is_some());
/// ```
pub trait ConnectionStringSource: Send + Sync {
    /// Returns the name of this source, used in logs and error messages.
    fn name(&self) -> &str;

    /// Returns the priority of this source. Higher values win.
    fn priority(&self) -> u8;

    /// Returns the connection string held by this source, if any.
    ///
    /// `Ok(None)` means the source simply has no value; `Err` means the
    /// source could not be read.
    fn connection_string(&self) -> Result<Option<String>>;

    /// Returns the entity path held by this source, if any.
    fn entity_path(&self) -> Result<Option<String>>;

    /// Re-reads the underlying source.
    ///
    /// Sources whose values cannot change at runtime return `Ok(())`.
    fn reload(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConnectionError;

    struct TestSource {
        connection_string: Option<String>,
        reloads: usize,
    }

    impl ConnectionStringSource for TestSource {
        fn name(&self) -> &str {
            "test"
        }

        fn priority(&self) -> u8 {
            2
        }

        fn connection_string(&self) -> Result<Option<String>> {
            Ok(self.connection_string.clone())
        }

        fn entity_path(&self) -> Result<Option<String>> {
            Ok(None)
        }

        fn reload(&mut self) -> Result<()> {
            self.reloads += 1;
            Ok(())
        }
    }

    struct BrokenSource;

    impl ConnectionStringSource for BrokenSource {
        fn name(&self) -> &str {
            "broken"
        }

        fn priority(&self) -> u8 {
            1
        }

        fn connection_string(&self) -> Result<Option<String>> {
            Err(ConnectionError::source_error("broken", "unreadable"))
        }

        fn entity_path(&self) -> Result<Option<String>> {
            Ok(None)
        }

        fn reload(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_source_values() {
        let source = TestSource {
            connection_string: Some("Endpoint=sb://a/".to_string()),
            reloads: 0,
        };
        assert_eq!(source.name(), "test");
        assert_eq!(source.priority(), 2);
        assert_eq!(
            source.connection_string().unwrap().as_deref(),
            Some("Endpoint=sb://a/")
        );
        assert!(source.entity_path().unwrap().is_none());
    }

    #[test]
    fn test_source_reload() {
        let mut source = TestSource {
            connection_string: None,
            reloads: 0,
        };
        source.reload().unwrap();
        source.reload().unwrap();
        assert_eq!(source.reloads, 2);
    }

    #[test]
    fn test_source_error() {
        let source: Box<dyn ConnectionStringSource> = Box::new(BrokenSource);
        assert!(source.connection_string().is_err());
    }
}
