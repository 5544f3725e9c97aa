//! Clap argument types.

use clap::Parser;

/// Asynchronous programming and collection pattern demos.
#[derive(Parser, Debug)]
#[command(
    name = "asynclab",
    version,
    about = super::BANNER_STYLED,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run every demonstration.
    Run(RunArgs),

    /// Look up a user by id after a simulated delay.
    Lookup {
        /// The user id (the directory holds ids 1-3).
        id: u32,
    },

    /// Add two numbers after a simulated delay.
    Sum {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Fetch JSON from a URL and print it.
    Fetch {
        /// The URL to GET.
        url: String,
    },

    /// Load a user with full lifecycle logging.
    Load {
        /// The user id to load.
        id: u32,
    },

    /// Fetch a product record, validating the id.
    Product {
        /// The product id. Ids below 1 are rejected.
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Group words by length.
    Words {
        /// Words to group. Defaults to the built-in sample.
        words: Vec<String>,
    },

    /// Generate the FizzBuzz sequence up to N.
    Fizzbuzz {
        /// Upper bound of the sequence (inclusive).
        n: u32,
    },

    /// Sum the squares of the given numbers.
    Squares {
        /// Numbers to square and sum. Defaults to the built-in sample.
        #[arg(allow_negative_numbers = true)]
        nums: Vec<f64>,
    },

    /// Print version information.
    Version,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// URL for the remote fetch demonstration. Skipped when absent.
    #[arg(long)]
    pub url: Option<String>,
}
