use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

use commands::transform::TransformKind;

#[derive(Parser)]
#[command(name = "chainfold-cmd")]
#[command(about = "Command-line utility for chainfold sequence transforms")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random sequence and print it next to its running average,
    /// first difference and running average of the difference
    Demo {
        /// Number of random values to generate
        #[arg(short, long, default_value_t = 50)]
        count: usize,

        /// Exclusive upper bound of the generated values
        #[arg(short, long, default_value_t = 100)]
        max: i64,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Apply a single transform to a list of values
    Transform {
        /// Transform to apply
        #[arg(value_enum)]
        kind: TransformKind,

        /// Comma-separated input values
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<i64>,

        /// Print every output value on its own line
        #[arg(short, long)]
        line_break: bool,
    },

    /// Compute the integer average of a list of values
    Average {
        /// Comma-separated input values
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    match cli.command {
        Commands::Demo { count, max, seed } => commands::demo::run(count, max, seed),
        Commands::Transform {
            kind,
            values,
            line_break,
        } => commands::transform::run(kind, values, line_break),
        Commands::Average { values } => commands::average::run(values),
    }
}
