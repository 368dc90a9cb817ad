use anyhow::{Context, Result};
use clap::Parser;
use glproc_gen::cli::{Cli, OutputFormat};
use glproc_gen::{BindingTableGenerator, FunctionSpec, GeneratorConfig, ProcTable, TableEntry};
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Merge the optional config file with command-line overrides
fn load_config(args: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(order) = args.order {
        config.order = order;
    }
    if args.deny_duplicates {
        config.deny_duplicates = true;
    }
    if args.emit_wgl_stubs {
        config.emit_wgl_stubs = true;
    }

    Ok(config)
}

/// Print the resolver outcome for one name
fn print_resolution(entries: &[TableEntry], name: &str) {
    let resolution = ProcTable::new(entries).resolve(Some(name));
    match resolution.address {
        Some(symbol) => println!("{} -> {}", name, symbol),
        None => println!("{} -> NULL", name),
    }
}

/// Write the rendered output to the requested destination
fn emit(args: &Cli, text: &str) -> Result<()> {
    match &args.output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    if !args.spec_dir.is_dir() {
        anyhow::bail!(
            "Spec directory not found: {} (expected a directory containing {})",
            args.spec_dir.display(),
            args.spec_file
        );
    }

    let config = load_config(&args)?;
    let spec = FunctionSpec::load_dir(&args.spec_dir, &args.spec_file)
        .with_context(|| format!("Failed to load API spec from {}", args.spec_dir.display()))?;
    let descriptors = spec.list_all_function_descriptors(config.order);

    let generator = BindingTableGenerator::new(config)?;
    let entries = generator.entries(&descriptors)?;

    if let Some(name) = &args.resolve {
        print_resolution(&entries, name);
        return Ok(());
    }

    let text = match args.format {
        OutputFormat::C => generator.render(&entries),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&entries)
                .context("Failed to serialize table entries")?;
            json.push('\n');
            json
        }
    };

    emit(&args, &text)
}
