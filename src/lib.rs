//! # csharp-bootstrapper
//!
//! A CLI tool and library for generating TypeScript models and C# CRUD
//! services from C# data classes.
//!
//! This crate scans C# source text for class declarations and generates:
//! - **TypeScript model triples**: an `I<Name>` interface, a `<Name>Dto`
//!   class, and a `<Name>` class whose constructor copies Dto fields.
//! - **C# CRUD service pairs**: a `<Name>Service` implementation and an
//!   `I<Name>Service` interface with matching signatures.
//!
//! Parsing is done with a brace-depth tokenizer rather than naive text
//! splitting, so braces inside strings, comments and property initializers
//! do not break extraction.
//!
//! ## Features
//!
//! - **Auto-property extraction**: name, type, nullability and access
//!   modifier, in declaration order.
//! - **Namespace aware**: block and file-scoped namespaces, services are
//!   generated in the declared namespace.
//! - **Type mapping**: C# built-ins, arrays, `List<T>` and `Dictionary<K, V>`
//!   map to TypeScript equivalents; unknown types pass through.
//! - **Deterministic output**: renderers are pure, regeneration is
//!   byte-identical.
//!
//! ## Usage
//!
//! Although primarily used as a CLI tool, you can also use it as a library:
//!
//! ```rust,no_run
//! use std::path::Path;
//! use csharp_bootstrapper::config::Config;
//! use csharp_bootstrapper::pipeline::Pipeline;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default_config();
//!     let pipeline = Pipeline::new(false);
//!     pipeline.run_models(Path::new("Models/User.cs"), &config)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod known_types;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod scanner;
pub mod sources;
pub mod utils;
