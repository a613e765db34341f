use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::ParseError;
use crate::generator::model_gen::generate_model;
use crate::generator::service_gen::{generate_service, generate_service_interface};
use crate::generator::{interface_filename, model_filename, service_filename};
use crate::parser::parse_file;
use crate::sources::SourceFinder;

/// Which artifacts a run produces
enum Artifacts {
    /// TypeScript model triple per class
    Models,
    /// C# CRUD service + interface pair per class
    Services,
}

/// Orchestrates read -> parse -> render -> write for one invocation.
///
/// Classes are processed sequentially and independently: a write failure for
/// one class is reported and does not abort the remaining classes.
pub struct Pipeline {
    verbose: bool,
}

impl Pipeline {
    pub fn new(verbose: bool) -> Self {
        Pipeline { verbose }
    }

    /// Generate TypeScript models for every class found in `input`
    /// (a `.cs` file or a directory of them). Returns the written paths.
    pub fn run_models(&self, input: &Path, config: &Config) -> Result<Vec<PathBuf>> {
        self.run(input, config, Artifacts::Models)
    }

    /// Generate a CRUD service and interface pair for every class in `input`.
    pub fn run_services(&self, input: &Path, config: &Config) -> Result<Vec<PathBuf>> {
        self.run(input, config, Artifacts::Services)
    }

    fn run(&self, input: &Path, config: &Config, artifacts: Artifacts) -> Result<Vec<PathBuf>> {
        let files = self.collect_sources(input, config)?;
        let explicit_file = input.is_file();
        let mut written = Vec::new();

        for file in files {
            let content = match fs::read_to_string(&file) {
                Ok(content) => content,
                Err(err) if explicit_file => {
                    return Err(anyhow::Error::new(err)
                        .context(format!("Failed to read source file: {}", file.display())));
                }
                Err(err) => {
                    // one unreadable file must not abort the rest of the scan
                    eprintln!("Error reading {}: {}", file.display(), err);
                    continue;
                }
            };

            let result = parse_file(&content);

            for error in &result.errors {
                eprintln!("Warning: {}: {}", file.display(), error);
            }

            if result.classes.is_empty() {
                if explicit_file {
                    return Err(anyhow::Error::new(ParseError::NoClassFound)
                        .context(format!("{}", file.display())));
                }
                if self.verbose {
                    println!("Skipping {} (no classes)", file.display());
                }
                continue;
            }

            for class in &result.classes {
                let outputs: Vec<(PathBuf, String)> = match artifacts {
                    Artifacts::Models => vec![(
                        config.output.model_dir.join(model_filename(class)),
                        generate_model(class),
                    )],
                    Artifacts::Services => vec![
                        (
                            config.output.service_dir.join(service_filename(class)),
                            generate_service(class, &result.namespace),
                        ),
                        (
                            config.output.interface_dir.join(interface_filename(class)),
                            generate_service_interface(class, &result.namespace),
                        ),
                    ],
                };

                for (path, rendered) in outputs {
                    match fs::write(&path, rendered) {
                        Ok(()) => {
                            if self.verbose {
                                println!("Generated {}", path.display());
                            }
                            written.push(path);
                        }
                        Err(err) => {
                            // keep going: one failed write must not abort the
                            // remaining classes
                            eprintln!("Error writing {}: {}", path.display(), err);
                        }
                    }
                }
            }
        }

        Ok(written)
    }

    fn collect_sources(&self, input: &Path, config: &Config) -> Result<Vec<PathBuf>> {
        if input.is_dir() {
            let finder = SourceFinder::new(input.to_path_buf(), config.input.exclude.clone());
            let files = finder.find()?;
            if self.verbose {
                println!("Found {} C# file(s) in {}", files.len(), input.display());
            }
            Ok(files)
        } else if input.exists() {
            Ok(vec![input.to_path_buf()])
        } else {
            anyhow::bail!("Input does not exist: {}", input.display());
        }
    }
}
