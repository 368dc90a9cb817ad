//! Error types for spec loading and table generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading an `APIspec.txt` file
#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Failed to read spec file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: '{keyword}' appears before any 'name' line")]
    OrphanAttribute { line: usize, keyword: String },

    #[error("line {line}: '{keyword}' requires {expected}")]
    MissingArgument {
        line: usize,
        keyword: String,
        expected: &'static str,
    },

    #[error("line {line}: chrelopcode for {function} is not an integer: {value}")]
    InvalidOpcode {
        line: usize,
        function: String,
        value: String,
    },

    #[error("function {function} (declared at line {line}) has no category")]
    MissingCategory { line: usize, function: String },
}

/// Errors raised while producing the lookup table
#[derive(Error, Debug)]
pub enum GenError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("Duplicate table entry '{name}' (from {first} and {second})")]
    DuplicateEntry {
        name: String,
        first: String,
        second: String,
    },

    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to write generated source: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_error_messages_carry_line_numbers() {
        let err = SpecError::OrphanAttribute {
            line: 3,
            keyword: "param".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 3: 'param' appears before any 'name' line"
        );

        let err = SpecError::MissingCategory {
            line: 10,
            function: "Clear".to_string(),
        };
        assert!(err.to_string().contains("Clear"));
        assert!(err.to_string().contains("line 10"));
    }

    #[test]
    fn test_gen_error_wraps_spec_error_transparently() {
        let spec = SpecError::MissingArgument {
            line: 1,
            keyword: "name".to_string(),
            expected: "a function name",
        };
        let expected = spec.to_string();
        let err: GenError = spec.into();
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_duplicate_entry_message() {
        let err = GenError::DuplicateEntry {
            name: "glClear".to_string(),
            first: "Clear".to_string(),
            second: "Clear".to_string(),
        };
        assert!(err.to_string().contains("glClear"));
    }
}
