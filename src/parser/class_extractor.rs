use std::ops::Range;

use crate::error::ParseError;
use crate::scanner::{is_ident_byte, read_identifier, skip_whitespace, Scanner};

/// A class declaration located in the source text
#[derive(Debug)]
pub struct ClassRegion {
    /// Class name
    pub name: String,
    /// First inheritance token after `:`, if any
    pub base_type: Option<String>,
    /// Byte range of the body, between the braces (exclusive)
    pub body: Range<usize>,
}

/// Find every top-level class declaration in the scanned source.
///
/// Scanning resumes after each class body, so nested classes are not
/// extracted as independent top-level classes. On `UnbalancedBraces` the
/// classes already found are kept and the error is returned alongside them.
pub fn extract_classes(scanner: &Scanner) -> (Vec<ClassRegion>, Vec<ParseError>) {
    let text = scanner.text();
    let bytes = text.as_bytes();
    let mut regions = Vec::new();
    let mut errors = Vec::new();
    let mut pos = 0;

    while let Some(keyword) = scanner.find_keyword(pos, "class") {
        let after_keyword = keyword + "class".len();
        let name_start = skip_whitespace(bytes, after_keyword);
        let name_end = read_identifier(bytes, name_start);

        if name_end == name_start {
            // `class` with no identifier after it, e.g. a `where T : class`
            // generic constraint
            pos = after_keyword;
            continue;
        }
        let name = text[name_start..name_end].to_string();

        let Some(open) = scanner.find_code_byte(name_end, b'{') else {
            // declaration without a body, nothing to extract
            pos = name_end;
            continue;
        };

        let base_type = extract_base_type(scanner, name_end, open);

        match scanner.matching_brace(open) {
            Ok(close) => {
                regions.push(ClassRegion {
                    name,
                    base_type,
                    body: open + 1..close,
                });
                pos = close + 1;
            }
            Err(err) => {
                // the unclosed region runs to end of input
                errors.push(err);
                break;
            }
        }
    }

    (regions, errors)
}

/// First inheritance token after a `:` between the class name and the opening
/// brace. Subsequent interface names are ignored, and a `where` constraint
/// clause means the colon is not an inheritance marker.
fn extract_base_type(scanner: &Scanner, from: usize, open: usize) -> Option<String> {
    let colon = scanner.find_code_byte(from, b':')?;
    if colon >= open {
        return None;
    }
    if let Some(where_kw) = scanner.find_keyword(from, "where") {
        if where_kw < colon {
            return None;
        }
    }

    let text = scanner.text();
    let bytes = text.as_bytes();
    let start = skip_whitespace(bytes, colon + 1);
    let mut end = start;
    while end < open && (is_ident_byte(bytes[end]) || bytes[end] == b'.') {
        end += 1;
    }

    (end > start).then(|| text[start..end].to_string())
}
