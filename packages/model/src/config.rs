//! # Application configuration — `registry.toml`
//!
//! Only the user table is configurable. The users endpoint is a fixed literal
//! in the `api` crate and deliberately absent here.
//!
//! ```toml
//! [table]
//! page_size = 5                   # initial rows per page
//! page_size_options = [5, 10, 25] # choices offered in the pagination bar
//! ```
//!
//! A missing file, section or key is equivalent to the defaults above.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `registry.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub table: TableConfig,
}

/// User table configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

fn default_page_size() -> usize {
    5
}

fn default_page_size_options() -> Vec<usize> {
    vec![5, 10, 25]
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

impl TableConfig {
    /// Sorted, deduplicated page size options, always including `page_size`.
    pub fn options(&self) -> Vec<usize> {
        let mut options: Vec<usize> = self
            .page_size_options
            .iter()
            .copied()
            .chain(std::iter::once(self.page_size))
            .filter(|n| *n > 0)
            .collect();
        options.sort_unstable();
        options.dedup();
        options
    }
}

impl RegistryConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "registry.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = RegistryConfig::from_toml("").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.table.options(), vec![5, 10, 25]);
    }

    #[test]
    fn test_partial_table_section() {
        let config = RegistryConfig::from_toml("[table]\npage_size = 10\n").unwrap();
        assert_eq!(config.table.page_size, 10);
        assert_eq!(config.table.page_size_options, vec![5, 10, 25]);
    }

    #[test]
    fn test_page_size_joins_options() {
        let config = RegistryConfig::from_toml(
            "[table]\npage_size = 8\npage_size_options = [25, 5, 0, 5]\n",
        )
        .unwrap();
        assert_eq!(config.table.options(), vec![5, 8, 25]);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = RegistryConfig::default();
        config.table.page_size = 25;
        let text = config.to_toml().unwrap();
        assert_eq!(RegistryConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_bad_type_is_an_error() {
        assert!(RegistryConfig::from_toml("[table]\npage_size = \"five\"\n").is_err());
    }
}
