use anyhow::Result;
use std::path::Path;

use csharp_bootstrapper::cli::{Cli, Commands};
use csharp_bootstrapper::config::Config;
use csharp_bootstrapper::pipeline::Pipeline;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Model {
            input,
            config,
            verbose,
        } => {
            run_model(&input, &config, verbose)?;
        }
        Commands::Service {
            input,
            config,
            verbose,
        } => {
            run_service(&input, &config, verbose)?;
        }
        Commands::Init { output, force } => {
            run_init(&output, force)?;
        }
    }

    Ok(())
}

/// Run the model command
fn run_model(input: &Path, config_path: &Path, verbose: bool) -> Result<()> {
    let config = Config::load(config_path)?;

    if verbose {
        println!("Loaded configuration from: {}", config_path.display());
    }

    let pipeline = Pipeline::new(verbose);
    let written = pipeline.run_models(input, &config)?;

    println!("Generated {} TypeScript model file(s)", written.len());
    Ok(())
}

/// Run the service command
fn run_service(input: &Path, config_path: &Path, verbose: bool) -> Result<()> {
    let config = Config::load(config_path)?;

    if verbose {
        println!("Loaded configuration from: {}", config_path.display());
    }

    let pipeline = Pipeline::new(verbose);
    let written = pipeline.run_services(input, &config)?;

    println!("Generated {} service file(s)", written.len());
    Ok(())
}

/// Run the init command
fn run_init(output_path: &Path, force: bool) -> Result<()> {
    Config::init(output_path, force)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  - model_dir: Output directory for TypeScript models");
    println!("  - service_dir: Output directory for C# services");
    println!("  - interface_dir: Output directory for C# service interfaces");
    println!("  - exclude: Directories to skip when converting a directory");

    Ok(())
}
