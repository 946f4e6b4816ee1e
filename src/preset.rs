//! Preset files: container defaults and named templates from TOML
//!
//! A preset bundles a container configuration with a set of reusable
//! template strings, so applications and the CLI can keep chart layouts in
//! a config file instead of source code.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::GridConfig;

/// Errors that can occur when loading or parsing presets
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Failed to read preset file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse preset TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A loaded preset: optional metadata, container defaults, named templates
#[derive(Debug, Clone)]
pub struct Preset {
    /// Optional name for the preset
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Container defaults, if the preset declares any
    pub container: Option<GridConfig>,
    /// Template strings by name
    templates: HashMap<String, String>,
}

/// TOML structure for deserializing presets
#[derive(Deserialize)]
struct TomlPreset {
    metadata: Option<TomlMetadata>,
    container: Option<GridConfig>,
    #[serde(default)]
    templates: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Built-in preset: a 600x400 container and the two standard chart layouts
const DEFAULT_PRESET: &str = r#"
[container]
width = 600
height = 400
margin = 20

[templates]
# Full chart frame: title band, rotated y-axis title, legend column
lines = """
"title title title title" 60
"y_axis_title y_axis chart legend" auto
". . x_axis ." 40
/ 20 40 auto 100
"""

# Compact frame with the axes on the top/right
bars = """
"title title" 40
"x_axis ." 20
"chart y_axis" auto
/ auto 40
"""
"#;

impl Preset {
    /// Load a preset from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PresetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a preset from a TOML string
    pub fn from_str(content: &str) -> Result<Self, PresetError> {
        let parsed: TomlPreset = toml::from_str(content)?;

        Ok(Preset {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            container: parsed.container,
            templates: parsed.templates,
        })
    }

    /// Look up a template string by name
    pub fn template(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(|s| s.as_str())
    }

    /// Names of the templates this preset defines, sorted
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::from_str(DEFAULT_PRESET).expect("Default preset should be valid TOML")
    }
}
