//! CLI argument definitions for pantree.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "pantree",
    version,
    about = "Resolve and display CPAN distribution dependency trees",
    long_about = "pantree computes the transitive runtime dependency tree of one or more \
                  CPAN distributions from a local metadata directory and renders it as \
                  JSON or as a tree."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve dependency trees and print them as JSON
    Resolve {
        /// Distribution names to resolve
        #[arg(required = true)]
        names: Vec<String>,

        /// Path to the CPAN metadata directory
        #[arg(short, long, default_value = "./data")]
        path: PathBuf,

        /// Indentation unit for nested levels of the JSON output
        #[arg(long, default_value = "\t", conflicts_with = "compact")]
        indent: String,

        /// Render the whole tree on one line
        #[arg(long)]
        compact: bool,
    },

    /// Resolve dependency trees and print them with box-drawing connectors
    Tree {
        /// Distribution names to resolve
        #[arg(required = true)]
        names: Vec<String>,

        /// Path to the CPAN metadata directory
        #[arg(short, long, default_value = "./data")]
        path: PathBuf,

        /// Maximum depth to display
        #[arg(long)]
        depth: Option<u32>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
