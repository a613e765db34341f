use crate::error::ParseError;

use super::ParsedClass;

/// Result of parsing one C# source file
#[derive(Debug)]
pub struct ParseResult {
    /// Enclosing namespace, empty string for the global namespace
    pub namespace: String,
    /// Classes found in the file, in source order
    pub classes: Vec<ParsedClass>,
    /// Non-fatal extraction errors (classes already found are kept)
    pub errors: Vec<ParseError>,
}
