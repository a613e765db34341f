use crate::scanner::{is_ident_byte, skip_whitespace, Scanner};

/// First namespace identifier in the file, or an empty string for the global
/// namespace. Block (`namespace X { ... }`) and file-scoped (`namespace X;`)
/// forms read the same way: the dotted identifier ends at `{` or `;`.
pub fn extract_namespace(scanner: &Scanner) -> String {
    let Some(keyword) = scanner.find_keyword(0, "namespace") else {
        return String::new();
    };

    let text = scanner.text();
    let bytes = text.as_bytes();
    let start = skip_whitespace(bytes, keyword + "namespace".len());
    let mut end = start;
    while end < bytes.len() && (is_ident_byte(bytes[end]) || bytes[end] == b'.') {
        end += 1;
    }

    text[start..end].to_string()
}
