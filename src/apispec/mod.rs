//! Loader for `APIspec.txt` function specifications
//!
//! The spec is a line-oriented list of function blocks. Each block starts
//! with a `name` line and is followed by attribute lines:
//!
//! ```text
//! name        ActiveTextureARB
//! return      void
//! param       texture     GLenum
//! category    GL_ARB_multitexture
//! chromium    pack
//! ```
//!
//! The loaded [`FunctionSpec`] is a plain value handed to the generator;
//! nothing is cached between loads.

mod parser;
mod record;

pub use record::{FunctionRecord, Param, ParamAttribute, ParamAttributeKind};

use crate::descriptor::{category_wrapper, Descriptor};
use crate::error::SpecError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// File name looked up beneath the spec directory
pub const DEFAULT_SPEC_FILE: &str = "APIspec.txt";

/// Order in which descriptors are handed to the generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionOrder {
    /// Keep the order functions are declared in the spec file
    #[default]
    Declared,
    /// Sort by short function name
    Sorted,
}

/// Parsed API specification
#[derive(Debug, Clone, Default)]
pub struct FunctionSpec {
    records: Vec<FunctionRecord>,
    /// Short name -> index into `records`
    by_name: HashMap<String, usize>,
}

impl FunctionSpec {
    /// Parse spec text
    ///
    /// A function declared twice keeps the position of its first
    /// declaration and the contents of its last one.
    pub fn parse(text: &str) -> Result<Self, SpecError> {
        let mut spec = Self::default();
        for record in parser::parse_records(text)? {
            spec.insert(record);
        }
        Ok(spec)
    }

    /// Load a spec file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SpecError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SpecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loading API spec");
        Self::parse(&text)
    }

    /// Load `file_name` from beneath `dir`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use glproc_gen::apispec::{FunctionSpec, DEFAULT_SPEC_FILE};
    ///
    /// let spec = FunctionSpec::load_dir("src/VBox/GuestHost/OpenGL/glapi_parser", DEFAULT_SPEC_FILE)?;
    /// println!("{} functions", spec.len());
    /// # Ok::<(), glproc_gen::error::SpecError>(())
    /// ```
    pub fn load_dir<P: AsRef<Path>>(dir: P, file_name: &str) -> Result<Self, SpecError> {
        Self::from_file(dir.as_ref().join(file_name))
    }

    fn insert(&mut self, record: FunctionRecord) {
        match self.by_name.get(&record.name) {
            Some(&idx) => {
                tracing::debug!(function = %record.name, "redefinition replaces earlier record");
                self.records[idx] = record;
            }
            None => {
                self.by_name.insert(record.name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Number of distinct functions
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in declaration order, omitted ones included
    pub fn records(&self) -> &[FunctionRecord] {
        &self.records
    }

    pub fn get(&self, short_name: &str) -> Option<&FunctionRecord> {
        self.by_name.get(short_name).map(|&idx| &self.records[idx])
    }

    pub fn category_of(&self, short_name: &str) -> Option<&str> {
        self.get(short_name).map(|r| r.category.as_str())
    }

    pub fn wrapper_tag_of(&self, short_name: &str) -> Option<String> {
        self.category_of(short_name).and_then(category_wrapper)
    }

    /// Descriptors for every exported function (`chromium omit` excluded)
    pub fn list_all_function_descriptors(&self, order: FunctionOrder) -> Vec<Descriptor> {
        let mut descriptors: Vec<Descriptor> = self
            .records
            .iter()
            .filter(|r| !r.is_omitted())
            .map(|r| Descriptor::new(r.name.clone(), r.category.clone()))
            .collect();

        if order == FunctionOrder::Sorted {
            descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        }

        descriptors
    }
}
