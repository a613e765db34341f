mod class;
mod parse_result;

pub use class::{AccessModifier, ParsedClass, Property};
pub use parse_result::ParseResult;
