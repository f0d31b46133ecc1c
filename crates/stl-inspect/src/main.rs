//! stl-inspect - STL mesh information and conversion
//!
//! Usage:
//!   stl-inspect info <FILE> [--json]          Print facet, point and size statistics
//!   stl-inspect convert <INPUT> <OUTPUT>      Re-encode (ASCII <-> binary)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stl_mesh::{CodecConfig, Format, Mesh, StatsConfig};
use tracing::info;

mod report;

use report::InfoReport;

#[derive(Parser)]
#[command(name = "stl-inspect")]
#[command(about = "Inspect and convert STL meshes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log progress at info level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show mesh statistics
    Info {
        /// STL file to read
        file: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Skip the unique point count
        #[arg(long)]
        fast: bool,
        /// Fail when the header facet count disagrees with the file size
        #[arg(long)]
        strict: bool,
    },
    /// Re-encode a mesh
    Convert {
        input: PathBuf,
        output: PathBuf,
        /// Output encoding (default: the opposite of the input's)
        #[arg(short, long, value_name = "ascii|binary")]
        format: Option<Format>,
        /// Carry the input header text into the output
        #[arg(long)]
        keep_header: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info {
            file,
            json,
            fast,
            strict,
        } => cmd_info(&file, json, fast, strict),
        Commands::Convert {
            input,
            output,
            format,
            keep_header,
        } => cmd_convert(&input, &output, format, keep_header),
    }
}

fn cmd_info(path: &Path, json: bool, fast: bool, strict: bool) -> Result<()> {
    let codec = if strict {
        CodecConfig::strict()
    } else {
        CodecConfig::lenient()
    };
    let stats = if fast {
        StatsConfig::fast()
    } else {
        StatsConfig::full()
    };
    let mesh = Mesh::open_with(path, &codec, &stats)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let report = InfoReport::new(path, &mesh);
    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to encode JSON")?;
        println!("{text}");
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

fn cmd_convert(
    input: &Path,
    output: &Path,
    format: Option<Format>,
    keep_header: bool,
) -> Result<()> {
    let mesh =
        Mesh::open(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let target = format.unwrap_or_else(|| mesh.format().opposite());

    let mut codec = CodecConfig::default();
    if keep_header {
        codec = codec.with_preserved_header();
    }
    mesh.write_with(output, Some(target), &codec)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(from = %mesh.format(), to = %target, facets = mesh.facets().len(), "converted");
    println!(
        "{} ({}) -> {} ({}), {} facets",
        input.display(),
        mesh.format(),
        output.display(),
        target,
        mesh.facets().len()
    );
    Ok(())
}
