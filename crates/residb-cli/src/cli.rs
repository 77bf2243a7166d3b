use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The residb developers",
    version,
    about = "residb - inspect, validate and export residue and fragment definition tables for molecular mechanics.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    /// Defaults to `residb.toml` in the platform configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Load group declarations from this directory instead of the built-in database.
    #[arg(short, long, global = true, value_name = "DIR")]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every group of the table with its symbol and components.
    List,
    /// Show the flattened content of one group.
    Show(ShowArgs),
    /// Resolve and validate groups, reporting every issue found.
    Validate(ValidateArgs),
    /// Write the flattened form of one group as a declaration or an atom table.
    Export(ExportArgs),
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Group name (e.g., 'd-thymine') or symbol (e.g., 'DT').
    #[arg(required = true, value_name = "NAME|SYMBOL")]
    pub key: String,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Groups to validate, by name or symbol. Validates the whole table when omitted.
    #[arg(value_name = "NAME|SYMBOL")]
    pub keys: Vec<String>,

    /// Treat warnings as failures.
    #[arg(short, long)]
    pub strict: bool,
}

/// Arguments for the `export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Group name or symbol to export.
    #[arg(required = true, value_name = "NAME|SYMBOL")]
    pub key: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Toml)]
    pub format: ExportFormat,

    /// Write to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Charge set used for the CSV charge column, overriding the config file.
    #[arg(long, value_name = "NAME")]
    pub charge_set: Option<String>,

    /// Atom type set used for the CSV atom type column, overriding the config file.
    #[arg(long, value_name = "NAME")]
    pub atom_type_set: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// A component-free group declaration.
    Toml,
    /// One row per atom: path, element, charge, atom type, PDB names.
    Csv,
}
