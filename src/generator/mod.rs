//! Binding table generator
//!
//! Turns an ordered descriptor list into the C source of the stub library's
//! `crGetProcAddress` resolver:
//!
//! 1. one pass emitting `{ "glX", (CR_PROC) glX }` entries for GL functions,
//!    guarded by `#ifdef CR_<tag>` when the descriptor has a wrapper tag
//! 2. a second pass emitting unguarded `{ "crX", (CR_PROC) crX }` entries for
//!    Chromium glue functions
//! 3. fixed declarations and the resolver body
//!
//! Output is a pure function of the descriptors and the config.

pub mod templates;

use crate::config::GeneratorConfig;
use crate::descriptor::Descriptor;
use crate::error::{GenError, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::Write;

/// Extension category that used to be kept out of the main table
const GL_CHROMIUM_CATEGORY: &str = "GL_chromium";

/// Which block of the array an entry lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Gl,
    Glue,
}

/// One `{ name, address }` pair of the generated array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    /// String literal the resolver compares against
    pub name: String,
    /// C symbol whose address is returned
    pub symbol: String,
    /// Full `#ifdef` macro, if the entry is guarded
    pub guard: Option<String>,
    pub kind: EntryKind,
    /// Short name of the originating descriptor
    pub function: String,
}

/// Why a descriptor produced no entry in a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Glue category, handled by the glue pass
    GlueCategory,
    /// Non-function marker entry
    Marker,
    /// Writeback is never exported
    Writeback,
    /// Not in the glue category
    NotGlue,
}

#[derive(Debug, Clone, Default)]
pub struct BindingTableGenerator {
    config: GeneratorConfig,
}

impl BindingTableGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate().map_err(GenError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Main-table entry for a descriptor, or why there is none
    pub fn main_entry(&self, d: &Descriptor) -> std::result::Result<TableEntry, SkipReason> {
        if d.category == self.config.glue_category {
            return Err(SkipReason::GlueCategory);
        }
        if d.name == self.config.marker_name {
            return Err(SkipReason::Marker);
        }
        if d.category == GL_CHROMIUM_CATEGORY {
            // Kept: the GL_chromium exclusion is switched off
            tracing::trace!(function = %d.name, "GL_chromium entry stays in main table");
        }

        let name = format!("{}{}", self.config.gl_prefix, d.name);
        Ok(TableEntry {
            symbol: name.clone(),
            name,
            guard: d
                .wrapper_tag
                .as_ref()
                .map(|tag| format!("{}{}", self.config.guard_prefix, tag)),
            kind: EntryKind::Gl,
            function: d.name.clone(),
        })
    }

    /// Glue-block entry for a descriptor, or why there is none
    pub fn glue_entry(&self, d: &Descriptor) -> std::result::Result<TableEntry, SkipReason> {
        if d.name == self.config.writeback_name {
            return Err(SkipReason::Writeback);
        }
        if d.name == self.config.marker_name {
            return Err(SkipReason::Marker);
        }
        if d.category != self.config.glue_category {
            return Err(SkipReason::NotGlue);
        }

        let name = format!("{}{}", self.config.glue_prefix, d.name);
        Ok(TableEntry {
            symbol: name.clone(),
            name,
            guard: None,
            kind: EntryKind::Glue,
            function: d.name.clone(),
        })
    }

    /// All table entries: GL pass first, then glue pass
    pub fn entries(&self, descriptors: &[Descriptor]) -> Result<Vec<TableEntry>> {
        let mut entries = Vec::with_capacity(descriptors.len());

        for d in descriptors {
            match self.main_entry(d) {
                Ok(entry) => entries.push(entry),
                Err(reason) => {
                    tracing::trace!(function = %d.name, ?reason, "skipped in main table")
                }
            }
        }
        let gl_count = entries.len();

        for d in descriptors {
            match self.glue_entry(d) {
                Ok(entry) => entries.push(entry),
                Err(SkipReason::NotGlue) => {}
                Err(reason) => {
                    tracing::trace!(function = %d.name, ?reason, "skipped in glue block")
                }
            }
        }

        tracing::debug!(
            descriptors = descriptors.len(),
            gl = gl_count,
            glue = entries.len() - gl_count,
            "built lookup table"
        );

        if self.config.deny_duplicates {
            check_unique(&entries)?;
        }

        Ok(entries)
    }

    /// Render the C source for already-built entries
    pub fn render(&self, entries: &[TableEntry]) -> String {
        let mut out = String::new();
        out.push_str(templates::COPYRIGHT);
        out.push_str(templates::PROLOGUE);

        let mut glue_started = false;
        for entry in entries {
            if entry.kind == EntryKind::Glue && !glue_started {
                out.push_str(templates::GLUE_COMMENT);
                glue_started = true;
            }
            render_entry(&mut out, entry);
        }
        if !glue_started {
            out.push_str(templates::GLUE_COMMENT);
        }

        out.push_str(templates::TABLE_END);
        for (_, declaration) in templates::GLX_EXTENSIONS {
            out.push_str(declaration);
            out.push('\n');
        }

        out.push_str(templates::RESOLVER_HEAD);
        for (name, _) in templates::GLX_EXTENSIONS {
            let _ = writeln!(
                out,
                "    if (!crStrcmp( name, \"{name}\" )) return (CR_PROC) {name};"
            );
        }
        if self.config.emit_wgl_stubs {
            out.push_str(templates::WGL_STUBS);
        }
        out.push_str(templates::RESOLVER_TAIL);
        out
    }

    /// Generate the complete C source
    pub fn generate(&self, descriptors: &[Descriptor]) -> Result<String> {
        let entries = self.entries(descriptors)?;
        Ok(self.render(&entries))
    }

    /// Generate and write in one go; nothing is written if generation fails
    pub fn write_to<W: Write>(&self, out: &mut W, descriptors: &[Descriptor]) -> Result<()> {
        let source = self.generate(descriptors)?;
        out.write_all(source.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

fn render_entry(out: &mut String, entry: &TableEntry) {
    if let Some(guard) = &entry.guard {
        let _ = writeln!(out, "#ifdef {guard}");
    }
    let _ = writeln!(
        out,
        "\t{{ \"{}\", (CR_PROC) {} }},",
        entry.name, entry.symbol
    );
    if entry.guard.is_some() {
        out.push_str("#endif\n");
    }
}

fn check_unique(entries: &[TableEntry]) -> Result<()> {
    let mut seen: HashMap<&str, &TableEntry> = HashMap::new();
    for entry in entries {
        if let Some(first) = seen.insert(entry.name.as_str(), entry) {
            return Err(GenError::DuplicateEntry {
                name: entry.name.clone(),
                first: first.function.clone(),
                second: entry.function.clone(),
            });
        }
    }
    Ok(())
}
