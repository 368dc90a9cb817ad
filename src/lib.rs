//! glproc-gen - build-time generator for GL proc-address lookup tables
//!
//! This library reads an OpenGL/Chromium `APIspec.txt` file and emits the C
//! source of a static name-to-function-pointer table together with the
//! `crGetProcAddress` resolver that searches it.
//!
//! ```
//! use glproc_gen::{BindingTableGenerator, Descriptor};
//!
//! let descriptors = vec![
//!     Descriptor::new("Clear", "1.0"),
//!     Descriptor::new("WindowCreate", "Chromium"),
//! ];
//! let source = BindingTableGenerator::default().generate(&descriptors)?;
//! assert!(source.contains("{ \"glClear\", (CR_PROC) glClear },"));
//! assert!(source.contains("{ \"crWindowCreate\", (CR_PROC) crWindowCreate },"));
//! # Ok::<(), glproc_gen::error::GenError>(())
//! ```

pub mod apispec;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod resolver;

pub use apispec::{FunctionOrder, FunctionSpec};
pub use config::GeneratorConfig;
pub use descriptor::Descriptor;
pub use generator::{BindingTableGenerator, TableEntry};
pub use resolver::ProcTable;
