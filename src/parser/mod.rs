pub mod class_extractor;
pub mod namespace_extractor;
pub mod property_extractor;

pub use class_extractor::extract_classes;
pub use namespace_extractor::extract_namespace;
pub use property_extractor::extract_properties;

use crate::models::{ParseResult, ParsedClass};
use crate::scanner::Scanner;

/// Parse one C# source file into its namespace and classes.
///
/// Each class is extracted and populated independently; an unbalanced-brace
/// failure on one class keeps the classes already found.
pub fn parse_file(content: &str) -> ParseResult {
    let scanner = Scanner::new(content);
    let namespace = extract_namespace(&scanner);
    let (regions, errors) = extract_classes(&scanner);

    let classes = regions
        .into_iter()
        .map(|region| ParsedClass {
            properties: extract_properties(&content[region.body.clone()]),
            name: region.name,
            base_type: region.base_type,
        })
        .collect();

    ParseResult {
        namespace,
        classes,
        errors,
    }
}
