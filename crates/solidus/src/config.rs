//! Project configuration.
//!
//! `solidus.toml` carries a single `[generate]` table; every key is optional
//! and falls back to the conventional TanStack-style file locations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default route-tree artifact location.
pub const DEFAULT_INPUT: &str = "src/routeTree.gen.ts";
/// Default generated-module location.
pub const DEFAULT_OUTPUT: &str = "src/routePaths.gen.ts";
/// Default name for the emitted accessor class.
pub const DEFAULT_CLASS_NAME: &str = "RoutePaths";
/// Conventional config file name.
pub const CONFIG_FILE: &str = "solidus.toml";

/// Settings for one generation pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Route-tree artifact to scan.
    pub input: PathBuf,
    /// Generated module to (over)write.
    pub output: PathBuf,
    /// Identifier for the emitted aggregate class.
    pub class_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Resolves relative input/output paths against a project root; absolute
    /// paths pass through untouched.
    pub fn resolved_against(mut self, root: &Path) -> Self {
        if self.input.is_relative() {
            self.input = root.join(&self.input);
        }
        if self.output.is_relative() {
            self.output = root.join(&self.output);
        }
        self
    }
}

/// Top-level `solidus.toml` contents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub generate: GeneratorConfig,
}

impl ProjectConfig {
    /// Parses configuration from TOML text.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse solidus.toml")
    }

    /// Loads configuration from a file on disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Loads the config file if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.input, PathBuf::from("src/routeTree.gen.ts"));
        assert_eq!(config.output, PathBuf::from("src/routePaths.gen.ts"));
        assert_eq!(config.class_name, "RoutePaths");
    }

    #[test]
    fn test_partial_file_fills_missing_keys() {
        let config = ProjectConfig::from_str(
            r#"
            [generate]
            class_name = "AppRoutes"
            "#,
        )
        .unwrap();
        assert_eq!(config.generate.class_name, "AppRoutes");
        assert_eq!(config.generate.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.generate.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config = ProjectConfig::from_str("").unwrap();
        assert_eq!(config.generate, GeneratorConfig::default());
    }

    #[test]
    fn test_resolved_against_joins_relative_paths() {
        let config = GeneratorConfig::default().resolved_against(Path::new("/srv/app"));
        assert_eq!(config.input, PathBuf::from("/srv/app/src/routeTree.gen.ts"));
        assert_eq!(config.output, PathBuf::from("/srv/app/src/routePaths.gen.ts"));
    }

    #[test]
    fn test_resolved_against_keeps_absolute_paths() {
        let config = GeneratorConfig {
            input: PathBuf::from("/abs/tree.ts"),
            ..Default::default()
        }
        .resolved_against(Path::new("/srv/app"));
        assert_eq!(config.input, PathBuf::from("/abs/tree.ts"));
        assert_eq!(config.output, PathBuf::from("/srv/app/src/routePaths.gen.ts"));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(ProjectConfig::from_str("[generate\nclass_name = ").is_err());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = ProjectConfig::from_str(
            r#"
            [generate]
            input = "app/tree.ts"
            flavor = "mild"
            "#,
        )
        .unwrap();
        assert_eq!(config.generate.input, PathBuf::from("app/tree.ts"));
    }
}
