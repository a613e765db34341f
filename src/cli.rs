use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate TypeScript models and C# CRUD services from C# data classes
#[derive(Parser)]
#[command(name = "csharp-bootstrapper", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a TypeScript model (interface + Dto + class) per C# class
    Model {
        /// C# source file or directory to convert
        input: PathBuf,
        /// Path to the configuration file
        #[arg(short, long, default_value = "bootstrapper.toml")]
        config: PathBuf,
        /// Print progress information
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate a C# CRUD service and interface pair per C# class
    Service {
        /// C# source file or directory to convert
        input: PathBuf,
        /// Path to the configuration file
        #[arg(short, long, default_value = "bootstrapper.toml")]
        config: PathBuf,
        /// Print progress information
        #[arg(short, long)]
        verbose: bool,
    },
    /// Create a default configuration file
    Init {
        /// Where to write the configuration file
        #[arg(short, long, default_value = "bootstrapper.toml")]
        output: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
