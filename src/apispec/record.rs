use serde::Serialize;

/// A single formal parameter of a spec function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    /// C type, tokens joined with single spaces (e.g. "const GLfloat *")
    pub ty: String,
    /// Vector length from a matching `paramvec` line, 0 otherwise
    pub vec_size: usize,
}

/// Kind of per-parameter attribute line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamAttributeKind {
    Prop,
    Action,
    List,
    Vec,
    Set,
}

impl ParamAttributeKind {
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "paramprop" => Some(Self::Prop),
            "paramaction" => Some(Self::Action),
            "paramlist" => Some(Self::List),
            "paramvec" => Some(Self::Vec),
            "paramset" => Some(Self::Set),
            _ => None,
        }
    }
}

/// `paramprop`/`paramaction`/`paramlist`/`paramvec`/`paramset` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamAttribute {
    pub kind: ParamAttributeKind,
    pub param: String,
    pub values: Vec<String>,
}

/// Everything one `name` block of the spec declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    pub name: String,
    /// Line of the `name` keyword (1-based)
    pub line: usize,
    pub return_type: String,
    pub params: Vec<Param>,
    pub category: String,
    pub chromium: Vec<String>,
    pub props: Vec<String>,
    pub alias: Option<String>,
    pub vector_alias: Option<String>,
    pub chrelopcode: Option<i64>,
    pub param_attributes: Vec<ParamAttribute>,
}

impl FunctionRecord {
    pub(crate) fn new(name: String, line: usize) -> Self {
        Self {
            name,
            line,
            return_type: String::new(),
            params: Vec::new(),
            category: String::new(),
            chromium: Vec::new(),
            props: Vec::new(),
            alias: None,
            vector_alias: None,
            chrelopcode: None,
            param_attributes: Vec::new(),
        }
    }

    /// Check a `chromium` tag (e.g. "omit", "pack", "nopack")
    pub fn has_chromium_tag(&self, tag: &str) -> bool {
        self.chromium.iter().any(|t| t == tag)
    }

    /// Records tagged `chromium omit` are not exported at all
    pub fn is_omitted(&self) -> bool {
        self.has_chromium_tag("omit")
    }

    /// Check a `props` entry (e.g. "get", "setclient")
    pub fn has_prop(&self, prop: &str) -> bool {
        self.props.iter().any(|p| p == prop)
    }
}
