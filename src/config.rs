//! Generator configuration
//!
//! Every knob defaults to the conventions of the Chromium OpenGL stub
//! library, so an empty config reproduces the standard lookup table.
//!
//! # Example glproc.toml
//!
//! ```toml
//! order = "sorted"
//! deny_duplicates = true
//! ```

use crate::apispec::FunctionOrder;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Prefix for regular GL entry points ("Clear" -> "glClear")
    pub gl_prefix: String,

    /// Prefix for Chromium glue functions ("WindowCreate" -> "crWindowCreate")
    pub glue_prefix: String,

    /// Prefix of the `#ifdef` symbol built from a wrapper tag
    pub guard_prefix: String,

    /// Category whose functions go to the glue block instead of the main table
    pub glue_category: String,

    /// Spec entry that marks packing bounds info, not a real function
    pub marker_name: String,

    /// Glue function that must never be handed out by the resolver
    pub writeback_name: String,

    /// Descriptor order
    pub order: FunctionOrder,

    /// Fail instead of emitting the same table name twice
    pub deny_duplicates: bool,

    /// Print the WGL extension-pointer block inside the resolver
    pub emit_wgl_stubs: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            gl_prefix: "gl".to_string(),
            glue_prefix: "cr".to_string(),
            guard_prefix: "CR_".to_string(),
            glue_category: "Chromium".to_string(),
            marker_name: "BoundsInfoCR".to_string(),
            writeback_name: "Writeback".to_string(),
            order: FunctionOrder::Declared,
            deny_duplicates: false,
            emit_wgl_stubs: false,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate().map_err(anyhow::Error::msg)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("gl_prefix", &self.gl_prefix),
            ("glue_prefix", &self.glue_prefix),
        ] {
            if value.is_empty() {
                return Err(format!("{field} must not be empty"));
            }
            if !is_c_identifier(value) {
                return Err(format!("{field} must be a C identifier, got {value:?}"));
            }
        }

        // May be empty (bare tag), but must still form a valid macro name
        if !self.guard_prefix.is_empty() && !is_c_identifier(&self.guard_prefix) {
            return Err(format!(
                "guard_prefix must be a C identifier, got {:?}",
                self.guard_prefix
            ));
        }

        if self.glue_category.is_empty() {
            return Err("glue_category must not be empty".to_string());
        }

        Ok(())
    }
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
