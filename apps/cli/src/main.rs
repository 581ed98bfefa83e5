mod config;
mod convert;
mod main_lib;
mod query;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use milsym_sidc::SymbolLookup;

use config::Config;
use convert::ConversionSummary;
use main_lib::{build_lookup, init_tracing};

#[derive(Parser)]
#[command(name = "milsym")]
#[command(about = "Convert military symbol identification codes in CSV tables")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fill the Delta field from the legacy field
    C2d { input: PathBuf, output: PathBuf },
    /// Fill the legacy field from the Delta field
    D2c { input: PathBuf, output: PathBuf },
    /// Expand the Delta field into attribute columns
    Attributes { input: PathBuf, output: PathBuf },
    /// Fill the legacy field from symbol names and echelons
    Names { input: PathBuf, output: PathBuf },
    /// Resolve codes or symbol names and print JSON
    Lookup {
        #[arg(required = true)]
        values: Vec<String>,
    },
}

fn open_files(input: &Path, output: &Path) -> anyhow::Result<(BufReader<File>, BufWriter<File>)> {
    let reader = File::open(input).with_context(|| format!("Opening {}", input.display()))?;
    let writer = File::create(output).with_context(|| format!("Creating {}", output.display()))?;
    Ok((BufReader::new(reader), BufWriter::new(writer)))
}

fn report(command: &str, output: &Path, summary: &ConversionSummary) {
    tracing::info!(
        "{}: wrote {} ({} rows, {} resolved, {} unresolved, {} skipped)",
        command,
        output.display(),
        summary.rows,
        summary.resolved,
        summary.unresolved,
        summary.skipped
    );
}

fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    match command {
        Command::C2d { input, output } => {
            let lookup = build_lookup(config)?;
            let (reader, writer) = open_files(&input, &output)?;
            let summary = convert::charlie_to_delta(&lookup, config, reader, writer)?;
            report("c2d", &output, &summary);
        }
        Command::D2c { input, output } => {
            let lookup = build_lookup(config)?;
            let (reader, writer) = open_files(&input, &output)?;
            let summary = convert::delta_to_charlie(&lookup, config, reader, writer)?;
            report("d2c", &output, &summary);
        }
        Command::Attributes { input, output } => {
            let (reader, writer) = open_files(&input, &output)?;
            let summary = convert::expand_attributes(config, reader, writer)?;
            report("attributes", &output, &summary);
        }
        Command::Names { input, output } => {
            let lookup = build_lookup(config)?;
            let affiliation = convert::resolve_affiliation(config, &input);
            let (reader, writer) = open_files(&input, &output)?;
            let summary =
                convert::symbol_names_to_code(&lookup, config, affiliation, reader, writer)?;
            report("names", &output, &summary);
        }
        Command::Lookup { values } => {
            let lookup = build_lookup(config)?;
            print_queries(&lookup, &values)?;
        }
    }
    Ok(())
}

fn print_queries(lookup: &SymbolLookup, values: &[String]) -> anyhow::Result<()> {
    for value in values {
        let result = query::run_query(lookup, value);
        println!("{}", serde_json::to_string(&result)?);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(&config.log_format);

    run(cli.command, &config)
}
