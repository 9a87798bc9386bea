//! # The Product Catalog Command Line Utility
//!
//! A command-line tool for the product qualification catalog. Supports adding, editing,
//! deleting and listing products, as well as exporting the catalog to a spreadsheet.
//!
//! ## Configuration
//! The tool works without a configuration file. To keep the products somewhere else:
//! ```bash
//! catalog-cli config update --database /data/products.db --export-path /data/products.xlsx
//! ```
//!
//! ## Usage Examples
//!
//! ### Adding a product
//! ```bash
//! catalog-cli add -n Camera -s Video -r 2024-01-01 -t 5 -m 4 -l 5
//! ```
//!
//! ### Editing a product
//! Every field is replaced, the qualification is computed again:
//! ```bash
//! catalog-cli edit -i 1 -n Camera -s Video -r 2024-01-01 -t 8 -m 4 -l 5
//! ```
//!
//! ### Deleting a product
//! ```bash
//! catalog-cli del -i 1
//! ```
//!
//! ### Exporting
//! The extension selects the format, `.xlsx` or `.csv`:
//! ```bash
//! catalog-cli export -o products.csv
//! ```
//!
use clap::Parser;
use cli::{Command, LogLevel, Opts};
use commands::{configuration, products};
use env_logger::Env;
use log::debug;
use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::process::exit;

use catalog::{error::CatalogError, ApplicationRuntime, ApplicationRuntimeBuilder};

mod cli;
mod commands;
mod table_report;

fn main() {
    let opts: Opts = Opts::parse();

    configure_logging(&opts); // Handles the -v option

    let database = opts.database;
    let result = match opts.cmd {
        Command::List => products::list(&get_runtime(database)),
        Command::Add(fields) => products::add(&get_runtime(database), fields),
        Command::Edit(edit) => products::edit(&get_runtime(database), edit),
        Command::Del(del) => products::delete(&get_runtime(database), del),
        Command::Export(export) => products::export(&get_runtime(database), export),
        Command::Config(config) => {
            configuration::execute(config.cmd);
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("ERROR: {err}");
        exit(if err.is_validation_error() { 2 } else { 1 });
    }
}

/// Opens the product database named by the configuration, or by `--database`
fn get_runtime(database: Option<PathBuf>) -> ApplicationRuntime {
    let mut builder = ApplicationRuntimeBuilder::new();
    if let Some(database) = database {
        builder = builder.with_database_path(database);
    }
    match builder.build() {
        Ok(runtime) => runtime,
        Err(err) => {
            match err {
                CatalogError::TomlParse { .. } => {
                    eprintln!(
                        "Configuration file is not valid: '{err}'. Use 'catalog-cli config remove' to start over"
                    );
                }
                _ => {
                    eprintln!("Failed to create runtime: '{err}'");
                }
            }

            exit(1);
        }
    }
}

fn configure_logging(opts: &Opts) {
    let mut tmp_dir = env::temp_dir();
    tmp_dir.push("product-catalog.log");

    if opts.verbosity.is_some() {
        println!("Logging to {}", &tmp_dir.to_string_lossy());
    }

    // If nothing else was specified in RUST_LOG, use 'warn'
    let mut builder = env_logger::Builder::from_env(
        Env::default().default_filter_or(opts.verbosity.map_or("warn", |lvl| match lvl {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        })),
    );
    // Falls back to stderr
    if let Ok(file) = File::create(&tmp_dir) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    debug!("Logging started");
}
