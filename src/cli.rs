//! CLI argument parsing for glproc-gen

use crate::apispec::{FunctionOrder, DEFAULT_SPEC_FILE};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// What to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// C source of the lookup table and resolver (default)
    C,
    /// Table entries as JSON for build tooling
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "glproc-gen")]
#[command(version)]
#[command(
    about = "Generate the crGetProcAddress lookup table from an OpenGL API spec",
    long_about = None
)]
pub struct Cli {
    /// Directory containing the API spec file
    #[arg(value_name = "SPEC_DIR")]
    pub spec_dir: PathBuf,

    /// Name of the spec file inside SPEC_DIR
    #[arg(long = "spec-file", value_name = "NAME", default_value = DEFAULT_SPEC_FILE)]
    pub spec_file: String,

    /// TOML generator configuration
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Order of table entries (overrides config)
    #[arg(long = "order", value_enum)]
    pub order: Option<FunctionOrder>,

    /// Fail if a table name would be emitted twice
    #[arg(long = "deny-duplicates")]
    pub deny_duplicates: bool,

    /// Include the WGL extension-pointer block in the resolver
    #[arg(long = "emit-wgl-stubs")]
    pub emit_wgl_stubs: bool,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "c")]
    pub format: OutputFormat,

    /// Print what the generated resolver returns for NAME and exit
    #[arg(long = "resolve", value_name = "NAME")]
    pub resolve: Option<String>,

    /// Enable debug tracing output (to stderr)
    #[arg(long)]
    pub debug: bool,
}
