pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_COLLECTION_PATH: &str =
    "modules/healthcare/Evero_Healthcare_API.postman_collection.json";

#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "collection-seeder"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Align the Postman collection with the seeded healthcare data")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_COLLECTION_PATH))]
    pub collection: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Show what would change without writing the file"))]
    pub dry_run: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Write non-ASCII characters as UTF-8 instead of \\u escapes"))]
    pub raw_unicode: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION_PATH.to_string(),
            dry_run: false,
            raw_unicode: false,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn collection_path(&self) -> &str {
        &self.collection
    }

    fn escape_non_ascii(&self) -> bool {
        !self.raw_unicode
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("collection", &self.collection)?;
        validate_file_extension("collection", &self.collection, &["json"])
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let config = CliConfig::try_parse_from(["collection-seeder"]).unwrap();
        assert_eq!(config.collection, DEFAULT_COLLECTION_PATH);
        assert!(!config.dry_run);
        assert!(config.escape_non_ascii());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::try_parse_from([
            "collection-seeder",
            "--collection",
            "/tmp/api.json",
            "--dry-run",
            "--raw-unicode",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.collection_path(), "/tmp/api.json");
        assert!(config.dry_run);
        assert!(!config.escape_non_ascii());
        assert!(config.verbose);
    }

    #[test]
    fn test_rejects_non_json_collection() {
        let config = CliConfig {
            collection: "collection.yaml".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
