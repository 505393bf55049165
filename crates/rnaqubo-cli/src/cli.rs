use crate::config::models::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "rnaqubo - Formulate RNA secondary structure prediction as a QUBO problem for quantum annealers and classical QUBO solvers.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for the pairwise interaction scan.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the QUBO objective for an RNA sequence and export it.
    Formulate(FormulateArgs),
    /// List the candidate quartets of an RNA sequence with their energies.
    Quartets(QuartetsArgs),
}

/// Where the RNA sequence comes from. Exactly one source is required.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SequenceInput {
    /// RNA sequence given literally (e.g., GCGAUAGCGC).
    #[arg(short, long, value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    /// Path to a FASTA file; the first record is used.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

/// Arguments for the `formulate` subcommand.
#[derive(Args, Debug)]
pub struct FormulateArgs {
    // --- Core Arguments ---
    #[command(flatten)]
    pub sequence: SequenceInput,

    /// CSV table of quartet free energies with header `i,j,k,l,energy`.
    /// Quartets without an entry get energy 0.
    #[arg(short, long, value_name = "PATH")]
    pub energies: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Destination of the exported model. Writes to standard output if omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    // --- Model Overrides ---
    /// Override the stacking reward (expected negative).
    #[arg(short = 'r', long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub stacking_reward: Option<f64>,

    /// Override the crossing penalty (expected large and positive).
    #[arg(short = 't', long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub crossing_penalty: Option<f64>,

    /// Override the problem name written into the exported model.
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Override the export format.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S interaction.crossing-penalty=50
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `quartets` subcommand.
#[derive(Args, Debug)]
pub struct QuartetsArgs {
    #[command(flatten)]
    pub sequence: SequenceInput,

    /// CSV table of quartet free energies to show alongside each quartet.
    #[arg(short, long, value_name = "PATH")]
    pub energies: Option<PathBuf>,
}
