// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file connection-string source adapter.
//!
//! This module provides an adapter that reads a connection string from a
//! YAML file, and a parser that reads connection-string pairs written as a
//! YAML mapping.

use crate::domain::{ConnectionError, ParsedConnectionString, Result};
use crate::ports::{ConnectionStringParser, ConnectionStringSource};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML connection files (1MB)
/// Larger files are rejected without being read.
const MAX_YAML_FILE_SIZE: u64 = 1024 * 1024;

/// Parser for connection-string pairs written as a flat YAML mapping.
///
/// Scalar values are converted to strings and `null` becomes an empty
/// value. Nested mappings or sequences are malformed.
///
/// # Examples
///
/// ```rust
/// use hubconn::adapters::YamlParser;
/// use hubconn::ports::ConnectionStringParser;
///
/// let parser = YamlParser::new();
/// let parsed = parser
///     .parse("Endpoint: sb://ns.servicebus.windows.net/\nEntityPath: hub\n")
///     .unwrap();
/// assert_eq!(parsed.get("EntityPath"), Some("hub"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a YAML mapping into connection-string pairs.
    fn from_mapping(mapping: &serde_yaml::Mapping) -> Result<ParsedConnectionString> {
        let mut parsed = ParsedConnectionString::new();

        for (key, value) in mapping {
            let key = scalar_to_string(key)
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .ok_or_else(|| ConnectionError::MalformedConnectionString {
                    segment: format!("{:?}", key),
                })?;
            let value = scalar_to_string(value).ok_or_else(|| {
                ConnectionError::MalformedConnectionString {
                    segment: format!("{}: <nested value>", key),
                }
            })?;
            parsed.insert(key, value.trim());
        }

        Ok(parsed)
    }
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Null => Some(String::new()),
        _ => None,
    }
}

impl ConnectionStringParser for YamlParser {
    fn name(&self) -> &str {
        "yaml"
    }

    fn parse(&self, content: &str) -> Result<ParsedConnectionString> {
        if content.trim().is_empty() {
            return Ok(ParsedConnectionString::new());
        }

        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConnectionError::SourceError {
                source_name: "yaml".to_string(),
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match value {
            serde_yaml::Value::Mapping(mapping) => Self::from_mapping(&mapping),
            serde_yaml::Value::Null => Ok(ParsedConnectionString::new()),
            other => Err(ConnectionError::MalformedConnectionString {
                segment: format!("{:?}", other),
            }),
        }
    }
}

/// On-disk layout of a connection file.
///
/// Either `connection_string` holds the whole string, or `connection`
/// holds its pairs as a mapping. When both are present the string wins.
#[derive(Debug, Default, Deserialize)]
struct ConnectionFile {
    #[serde(default)]
    connection_string: Option<String>,
    #[serde(default)]
    connection: Option<serde_yaml::Mapping>,
    #[serde(default)]
    entity_path: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct FileValues {
    connection_string: Option<String>,
    entity_path: Option<String>,
}

/// Connection-string source adapter for YAML files.
///
/// Accepted layouts:
///
/// ```yaml
/// connection_string: "Endpoint=sb://ns.servicebus.windows.net/;SharedAccessKeyName=policy;SharedAccessKey=key"
/// entity_path: hub
/// ```
///
/// ```yaml
/// connection:
///   HostName: someiot.azure-devices.net
///   SharedAccessKeyName: iothubowner
///   SharedAccessKey: key
/// ```
///
/// # Priority
///
/// YAML files have a priority of 1, which means they are overridden by
/// environment variables (priority 2).
///
/// # Examples
///
/// ```rust,no_run
/// use hubconn::adapters::YamlFileAdapter;
///
/// // Load from a specific file
/// let adapter = YamlFileAdapter::from_file("/path/to/connection.yaml").unwrap();
///
/// // Load from default OS location
/// let adapter = YamlFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    /// Path to the YAML file
    file_path: PathBuf,
    /// Values read from the file
    values: FileValues,
}

impl YamlFileAdapter {
    /// Creates a new YAML file adapter from a specific file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();

        // Stored canonicalized
        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| file_error("Invalid or inaccessible path", &file_path, e))?;

        let values = Self::read(&canonical_path)?;

        Ok(Self {
            file_path: canonical_path,
            values,
        })
    }

    /// Creates a new YAML file adapter from `connection.yaml` in the default
    /// OS-appropriate configuration directory.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "connection.yaml")
    }

    /// Creates a new YAML file adapter with a custom file name in the default location.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ConnectionError::source_error("yaml-file", "Failed to determine project directories")
        })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the path to the connection file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read(path: &Path) -> Result<FileValues> {
        // Size is checked before reading
        let metadata =
            fs::metadata(path).map_err(|e| file_error("Failed to read file metadata", path, e))?;

        if metadata.len() > MAX_YAML_FILE_SIZE {
            return Err(ConnectionError::source_error(
                "yaml-file",
                format!(
                    "Connection file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_YAML_FILE_SIZE
                ),
            ));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| file_error("Failed to read connection file", path, e))?;

        let file = if content.trim().is_empty() {
            ConnectionFile::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| ConnectionError::SourceError {
                source_name: "yaml-file".to_string(),
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?
        };

        let entity_path = non_blank(file.entity_path);
        let connection_string = match (non_blank(file.connection_string), file.connection) {
            (Some(cs), _) => Some(cs),
            (None, Some(mapping)) => Some(YamlParser::from_mapping(&mapping)?.to_string()),
            (None, None) => None,
        };

        tracing::debug!(
            "Loaded connection file '{}' (connection string: {}, entity path: {:?})",
            display_name(path),
            if connection_string.is_some() { "set" } else { "unset" },
            entity_path
        );

        Ok(FileValues {
            connection_string,
            entity_path,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn file_error(message: &str, path: &Path, e: std::io::Error) -> ConnectionError {
    ConnectionError::SourceError {
        source_name: "yaml-file".to_string(),
        message: format!("{}: {}", message, display_name(path)),
        source: Some(Box::new(e)),
    }
}

impl ConnectionStringSource for YamlFileAdapter {
    fn name(&self) -> &str {
        "yaml-file"
    }

    fn priority(&self) -> u8 {
        1
    }

    fn connection_string(&self) -> Result<Option<String>> {
        Ok(self.values.connection_string.clone())
    }

    fn entity_path(&self) -> Result<Option<String>> {
        Ok(self.values.entity_path.clone())
    }

    fn reload(&mut self) -> Result<()> {
        self.values = Self::read(&self.file_path)?;
        Ok(())
    }
}
