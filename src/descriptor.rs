//! Function descriptors fed to the table generator
//!
//! A descriptor is the slice of a spec record the generator cares about:
//! the short function name, its category and the optional wrapper tag that
//! guards its table entry.

use serde::Serialize;

/// Categories that are always compiled in and never need a guard
const UNGUARDED_CATEGORIES: &[&str] = &["1.0", "1.1", "1.2", "Chromium", "GL_chromium", "VBox"];

/// Core GL versions guarded by an `OPENGL_VERSION_x_y` tag
const VERSIONED_CATEGORIES: &[&str] = &["1.3", "1.4", "1.5", "2.0", "2.1"];

/// One API entry point as seen by the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    /// Short name without any prefix (e.g. "Clear")
    pub name: String,
    /// Category tag (e.g. "1.0", "GL_ARB_multitexture", "Chromium")
    pub category: String,
    /// Preprocessor tag guarding the entry, if any
    pub wrapper_tag: Option<String>,
}

impl Descriptor {
    /// Build a descriptor, deriving the wrapper tag from the category
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        let category = category.into();
        let wrapper_tag = category_wrapper(&category);
        Self {
            name: name.into(),
            category,
            wrapper_tag,
        }
    }

    /// Build a descriptor with an explicit wrapper tag
    pub fn with_wrapper(
        name: impl Into<String>,
        category: impl Into<String>,
        wrapper_tag: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            wrapper_tag,
        }
    }
}

/// Map a category to the preprocessor tag that guards its entries
///
/// - GL 1.0-1.2, Chromium, GL_chromium and VBox need no guard
/// - GL 1.3-2.1 map to `OPENGL_VERSION_1_3` and friends
/// - extensions drop their `GL_` prefix (`GL_ARB_multitexture` -> `ARB_multitexture`)
pub fn category_wrapper(category: &str) -> Option<String> {
    if category.is_empty() || UNGUARDED_CATEGORIES.contains(&category) {
        return None;
    }

    if VERSIONED_CATEGORIES.contains(&category) {
        return Some(format!("OPENGL_VERSION_{}", category.replace('.', "_")));
    }

    Some(category.replace("GL_", ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_categories_are_unguarded() {
        for cat in ["1.0", "1.1", "1.2", "Chromium", "GL_chromium", "VBox"] {
            assert_eq!(category_wrapper(cat), None, "category {cat}");
        }
    }

    #[test]
    fn test_versioned_categories() {
        assert_eq!(
            category_wrapper("1.3").as_deref(),
            Some("OPENGL_VERSION_1_3")
        );
        assert_eq!(
            category_wrapper("2.1").as_deref(),
            Some("OPENGL_VERSION_2_1")
        );
    }

    #[test]
    fn test_extension_categories_drop_gl_prefix() {
        assert_eq!(
            category_wrapper("GL_ARB_multitexture").as_deref(),
            Some("ARB_multitexture")
        );
        assert_eq!(
            category_wrapper("GL_EXT_framebuffer_object").as_deref(),
            Some("EXT_framebuffer_object")
        );
        assert_eq!(category_wrapper("GL_NV_fence").as_deref(), Some("NV_fence"));
    }

    #[test]
    fn test_descriptor_new_derives_wrapper() {
        let d = Descriptor::new("ActiveTextureARB", "GL_ARB_multitexture");
        assert_eq!(d.wrapper_tag.as_deref(), Some("ARB_multitexture"));

        let d = Descriptor::new("Clear", "1.0");
        assert_eq!(d.wrapper_tag, None);
    }

    #[test]
    fn test_descriptor_with_explicit_wrapper() {
        let d = Descriptor::with_wrapper("Foo", "GL", Some("FOO".to_string()));
        assert_eq!(d.category, "GL");
        assert_eq!(d.wrapper_tag.as_deref(), Some("FOO"));
    }
}
