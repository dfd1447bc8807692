//! spdx-markup - inspect SPDX license-list XML files

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use spdx_markup::{License, LicenseCollection, ParseConfig, Strictness, render_tree};

#[derive(Parser)]
#[command(name = "spdx-markup")]
#[command(version, about = "Parse SPDX license-list XML into a document tree", long_about = None)]
#[command(after_help = "EXAMPLES:
    spdx-markup MIT.xml                  Print the text tree of every license
    spdx-markup -l MIT --notes MIT.xml   Print one license, notes included
    spdx-markup -f json MIT.xml          Dump the parsed records as JSON")]
struct Cli {
    /// License XML file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Only show the license with this SPDX identifier
    #[arg(short, long, value_name = "ID")]
    license: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,

    /// Also print notes and the record-level standard header
    #[arg(long)]
    notes: bool,

    /// Keep unknown elements instead of failing
    #[arg(long)]
    lenient: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Tree,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let strictness = if cli.lenient {
        Strictness::Lenient
    } else {
        Strictness::Strict
    };
    let config = ParseConfig::new().with_strictness(strictness);

    let collection =
        LicenseCollection::open_with_config(&cli.input, &config).map_err(|e| e.to_string())?;
    debug!(licenses = collection.len(), "loaded collection");

    let selected: Vec<&License> = match &cli.license {
        Some(id) => vec![
            collection
                .get(id)
                .ok_or_else(|| format!("no license with id {id:?} in {}", cli.input.display()))?,
        ],
        None => collection.licenses.iter().collect(),
    };

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&selected).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        OutputFormat::Tree => {
            for license in selected {
                print_license(license, cli.notes);
            }
        }
    }

    Ok(())
}

fn print_license(license: &License, with_notes: bool) {
    println!("License: {} ({})", license.license_id, license.name);
    println!("OSI approved: {}", license.is_osi_approved);
    if !license.list_version_added.is_empty() {
        println!("Added in list version: {}", license.list_version_added);
    }
    if license.is_deprecated {
        match &license.deprecated_version {
            Some(version) => println!("Deprecated since: {version}"),
            None => println!("Deprecated"),
        }
    }
    if with_notes {
        if let Some(notes) = &license.notes {
            println!("Notes:");
            print!("{}", render_tree(notes));
        }
        if let Some(header) = &license.standard_license_header {
            println!("Standard header:");
            print!("{}", render_tree(header));
        }
    }
    println!("Text:");
    print!("{}", render_tree(&license.text));
    println!();
}
