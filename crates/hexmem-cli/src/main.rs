use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::{Context, IntoDiagnostic};

use hexmem_compiler::{CompileOptions, ParameterBuffer, compile, write_image};
use hexmem_model::{Network, dump_table};

/// hexmem — trained CNN weights to Q8 hex memory images
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Input weight file (flat little-endian float32)
    weights: PathBuf,

    /// Output directory for the .hex artifacts
    #[arg(short, long, default_value = "mem")]
    output: PathBuf,

    /// Fail on values outside the Q8 range instead of wrapping
    #[arg(long)]
    strict: bool,

    /// Validate and compile without writing artifacts
    #[arg(long)]
    dry_run: bool,

    /// Dump the memory layout table to stderr
    #[arg(long)]
    dump_layout: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> miette::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // 1. Build and validate the layout table.
    let table = Network::mnist()
        .layout()
        .into_diagnostic()
        .wrap_err("layout table validation failed")?;

    // 2. Optionally dump the table to stderr.
    if cli.dump_layout {
        eprint!("{}", dump_table(&table));
    }

    // 3. Load the parameter buffer.
    let buffer = ParameterBuffer::load(&cli.weights)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to load {}", cli.weights.display()))?;

    // 4. Compile the memory image.
    let opts = CompileOptions { strict: cli.strict };
    let image = compile(&buffer, &table, &opts)
        .into_diagnostic()
        .wrap_err("memory image compilation failed")?;

    // 5. Print diagnostics.
    for diag in &image.diagnostics {
        eprintln!("{diag}");
    }

    // 6. Dry-run: stop before touching the filesystem.
    if cli.dry_run {
        eprintln!("dry run: {image}, nothing written");
        return Ok(());
    }

    // 7. Write artifacts.
    write_image(&image, &cli.output)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write artifacts to {}", cli.output.display()))?;
    eprintln!("wrote {image} to {}", cli.output.display());

    Ok(())
}
