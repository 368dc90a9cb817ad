//! In-process model of the generated `crGetProcAddress`
//!
//! Answers "what would the generated resolver return for this name" without
//! compiling the C output. Guarded entries are treated as compiled in.

use crate::generator::templates::{unresolved_diagnostic, GLX_EXTENSIONS};
use crate::generator::TableEntry;

/// Where a resolved address came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Matched an entry of `functions[]`
    Table,
    /// Matched one of the fixed GLX extension fallbacks
    Extension,
    /// Nothing matched; the resolver returns NULL
    Unresolved,
}

/// Outcome of one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Symbol whose address is returned, `None` for NULL
    pub address: Option<String>,
    pub source: ResolutionSource,
    /// Message passed to `crDebug`, if any
    pub diagnostic: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProcTable {
    /// (name, symbol) in array order
    entries: Vec<(String, String)>,
}

impl ProcTable {
    pub fn new(entries: &[TableEntry]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|e| (e.name.clone(), e.symbol.clone()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve `name` the way the generated C does
    ///
    /// `None` stands for a NULL `name` pointer.
    pub fn resolve(&self, name: Option<&str>) -> Resolution {
        if let Some(query) = name {
            // Linear scan, first match wins
            if let Some((_, symbol)) = self.entries.iter().find(|(n, _)| n == query) {
                return Resolution {
                    address: Some(symbol.clone()),
                    source: ResolutionSource::Table,
                    diagnostic: None,
                };
            }

            if let Some((ext, _)) = GLX_EXTENSIONS.iter().find(|(ext, _)| *ext == query) {
                return Resolution {
                    address: Some(ext.to_string()),
                    source: ResolutionSource::Extension,
                    diagnostic: None,
                };
            }
        }

        let diagnostic = name.map(unresolved_diagnostic);
        if let Some(msg) = &diagnostic {
            tracing::debug!("{}", msg);
        }
        Resolution {
            address: None,
            source: ResolutionSource::Unresolved,
            diagnostic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Descriptor;
    use crate::generator::{BindingTableGenerator, EntryKind};

    fn table() -> ProcTable {
        let descriptors = vec![
            Descriptor::new("Clear", "1.0"),
            Descriptor::new("ActiveTextureARB", "GL_ARB_multitexture"),
            Descriptor::new("WindowCreate", "Chromium"),
        ];
        let entries = BindingTableGenerator::default()
            .entries(&descriptors)
            .unwrap();
        ProcTable::new(&entries)
    }

    #[test]
    fn test_resolves_table_entries() {
        let table = table();
        assert_eq!(table.len(), 3);

        let r = table.resolve(Some("glClear"));
        assert_eq!(r.address.as_deref(), Some("glClear"));
        assert_eq!(r.source, ResolutionSource::Table);
        assert_eq!(r.diagnostic, None);

        let r = table.resolve(Some("crWindowCreate"));
        assert_eq!(r.address.as_deref(), Some("crWindowCreate"));

        // Guarded entries count as compiled in
        let r = table.resolve(Some("glActiveTextureARB"));
        assert_eq!(r.address.as_deref(), Some("glActiveTextureARB"));
    }

    #[test]
    fn test_resolves_glx_extensions_outside_table() {
        let table = table();
        for (name, _) in GLX_EXTENSIONS {
            let r = table.resolve(Some(*name));
            assert_eq!(r.address.as_deref(), Some(*name));
            assert_eq!(r.source, ResolutionSource::Extension);
            assert_eq!(r.diagnostic, None);
        }
    }

    #[test]
    fn test_unknown_name_returns_null_with_one_diagnostic() {
        let r = table().resolve(Some("glNoSuchThing"));
        assert_eq!(r.address, None);
        assert_eq!(r.source, ResolutionSource::Unresolved);
        assert_eq!(
            r.diagnostic.as_deref(),
            Some("Returning NULL for glNoSuchThing")
        );
    }

    #[test]
    fn test_null_name_returns_null_without_diagnostic() {
        let r = table().resolve(None);
        assert_eq!(r.address, None);
        assert_eq!(r.source, ResolutionSource::Unresolved);
        assert_eq!(r.diagnostic, None);
    }

    #[test]
    fn test_empty_name_is_not_null() {
        let r = table().resolve(Some(""));
        assert_eq!(r.address, None);
        assert_eq!(r.diagnostic.as_deref(), Some("Returning NULL for "));
    }

    #[test]
    fn test_matching_is_exact() {
        let table = table();
        assert_eq!(table.resolve(Some("glclear")).address, None);
        assert_eq!(table.resolve(Some("Clear")).address, None);
    }

    #[test]
    fn test_first_match_wins() {
        let entries = vec![
            TableEntry {
                name: "glFoo".to_string(),
                symbol: "first".to_string(),
                guard: None,
                kind: EntryKind::Gl,
                function: "Foo".to_string(),
            },
            TableEntry {
                name: "glFoo".to_string(),
                symbol: "second".to_string(),
                guard: None,
                kind: EntryKind::Gl,
                function: "Foo".to_string(),
            },
        ];
        let table = ProcTable::new(&entries);
        assert_eq!(table.resolve(Some("glFoo")).address.as_deref(), Some("first"));
    }

    #[test]
    fn test_table_entry_shadows_extension_fallback() {
        let entries = vec![TableEntry {
            name: "glXQueryDrawable".to_string(),
            symbol: "crQueryDrawable".to_string(),
            guard: None,
            kind: EntryKind::Glue,
            function: "QueryDrawable".to_string(),
        }];
        let r = ProcTable::new(&entries).resolve(Some("glXQueryDrawable"));
        assert_eq!(r.source, ResolutionSource::Table);
        assert_eq!(r.address.as_deref(), Some("crQueryDrawable"));
    }

    #[test]
    fn test_empty_table() {
        let table = ProcTable::new(&[]);
        assert!(table.is_empty());
        assert_eq!(
            table.resolve(Some("glXCreatePixmap")).source,
            ResolutionSource::Extension
        );
    }
}
