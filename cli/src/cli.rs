use std::fmt::{self, Formatter};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub(crate) enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Parser)]
/// Product catalog utility - list, add, edit, delete and export qualified products
///
/// Release dates must be given in the ISO8601 calendar format, i.e. `2024-06-01`.
///
/// The qualification of a product is computed from the three scores:
/// round((training * 3 + manual * 1 + lab * 2) / 6), ties rounded to even.
#[command(author, version, about)] // Read from Cargo.toml
pub(crate) struct Opts {
    #[command(subcommand)]
    pub cmd: Command,

    #[arg(global = true, short, long)]
    pub verbosity: Option<LogLevel>,

    /// Use this database file instead of the configured one
    #[arg(global = true, long = "db", value_name = "FILE")]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// List all products
    List,
    /// Add a product
    Add(ProductFields),
    /// Replace every field of a product
    Edit(Edit),
    /// Delete a product
    Del(Del),
    /// Export all products to an .xlsx or .csv file
    Export(Export),
    /// Subcommands for configuration
    Config(Config),
}

#[derive(Args, Clone)]
pub(crate) struct ProductFields {
    /// Name of the product
    #[arg(short, long)]
    pub name: String,
    /// Sector the product belongs to
    #[arg(short, long)]
    pub sector: String,
    /// Release date, YYYY-MM-DD
    #[arg(short, long)]
    pub released: String,
    /// Training score
    #[arg(short, long, allow_hyphen_values = true)]
    pub training: String,
    /// Manual/datasheet score
    #[arg(short, long, allow_hyphen_values = true)]
    pub manual: String,
    /// Laboratory score
    #[arg(short, long, allow_hyphen_values = true)]
    pub lab: String,
}

#[derive(Args)]
pub(crate) struct Edit {
    /// Id of the product to edit
    #[arg(short, long, required = true)]
    pub id: i64,
    #[command(flatten)]
    pub fields: ProductFields,
}

#[derive(Args)]
pub(crate) struct Del {
    /// Id of the product to delete
    #[arg(short, long, required = true)]
    pub id: i64,
}

#[derive(Args)]
pub(crate) struct Export {
    /// Target file, the extension selects the format. Defaults to the configured path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct Config {
    #[command(subcommand)]
    pub cmd: ConfigCommand,
}

/// Create, modify or list the configuration file.
#[derive(Subcommand, Clone)]
pub(crate) enum ConfigCommand {
    /// Update the configuration file, creating it if needed
    Update(UpdateConfiguration),
    /// write current configuration to standard output
    List,
    /// Remove the current configuration
    Remove,
}

#[derive(Args, Clone)]
pub(crate) struct UpdateConfiguration {
    /// Path to the Sqlite database holding the products
    #[arg(long)]
    pub database: Option<String>,
    /// Default target of the spreadsheet export
    #[arg(long)]
    pub export_path: Option<String>,
    /// Seconds between each refresh of the interactive product table
    #[arg(long)]
    pub refresh_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Opts::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let opts = Opts::try_parse_from([
            "catalog-cli",
            "add",
            "--name",
            "Camera",
            "--sector",
            "Video",
            "--released",
            "2024-01-01",
            "--training",
            "-3",
            "--manual",
            "4",
            "--lab",
            "5",
        ])
        .unwrap();
        match opts.cmd {
            Command::Add(fields) => {
                assert_eq!(fields.name, "Camera");
                assert_eq!(fields.training, "-3");
                assert_eq!(fields.lab, "5");
            }
            _ => panic!("Expected the add command"),
        }
    }

    #[test]
    fn test_parse_edit_and_del() {
        let opts = Opts::try_parse_from([
            "catalog-cli",
            "-v",
            "debug",
            "edit",
            "-i",
            "7",
            "-n",
            "Camera",
            "-s",
            "Video",
            "-r",
            "2024-01-01",
            "-t",
            "1",
            "-m",
            "2",
            "-l",
            "3",
        ])
        .unwrap();
        assert_eq!(opts.verbosity, Some(LogLevel::Debug));
        assert!(matches!(opts.cmd, Command::Edit(Edit { id: 7, .. })));

        let opts =
            Opts::try_parse_from(["catalog-cli", "del", "--id", "3", "--db", "other.db"]).unwrap();
        assert!(matches!(opts.cmd, Command::Del(Del { id: 3 })));
        assert_eq!(opts.database, Some(PathBuf::from("other.db")));
    }
}
