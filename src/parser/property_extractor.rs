use crate::models::{AccessModifier, Property};
use crate::scanner::{skip_whitespace, Scanner};

/// Modifier tokens that may precede the type in a member declaration
const MODIFIER_TOKENS: &[&str] = &[
    "public", "internal", "protected", "private", "static", "readonly", "virtual", "override",
    "abstract", "sealed", "new", "required", "const",
];

/// Tokens allowed inside an auto-property accessor block
const ACCESSOR_TOKENS: &[&str] = &[
    "get", "set", "init", "public", "internal", "protected", "private",
];

/// Extract auto-properties from a brace-balanced class body, in source order.
///
/// Recognizes `<modifiers>? <type> <Name> { get; set; }` with an optional
/// trailing initializer. Methods, constructors, fields, constants and other
/// member shapes are silently skipped; partial extraction is expected for
/// non-trivial classes.
pub fn extract_properties(body: &str) -> Vec<Property> {
    let scanner = Scanner::new(body);
    let bytes = body.as_bytes();
    let mut properties = Vec::new();
    let mut stmt_start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        if !scanner.is_code(i) {
            i += 1;
            continue;
        }
        match bytes[i] {
            b';' => {
                i += 1;
                stmt_start = i;
            }
            b'{' => {
                // every depth-0 block is either an accessor block or a member
                // body to jump over
                let Ok(close) = scanner.matching_brace(i) else {
                    break;
                };
                if is_accessor_block(&scanner, i + 1, close) {
                    if let Some(property) = parse_declaration(&body[stmt_start..i]) {
                        properties.push(property);
                    }
                }
                i = skip_initializer(&scanner, close + 1);
                stmt_start = i;
            }
            _ => i += 1,
        }
    }

    properties
}

/// Whether the block interior consists only of accessor tokens
/// (`get; set;`, `get; private set;`, `get; init;` and the like).
fn is_accessor_block(scanner: &Scanner, start: usize, end: usize) -> bool {
    let bytes = scanner.text().as_bytes();
    let mut interior = String::new();
    for idx in start..end {
        if scanner.is_code(idx) {
            interior.push(bytes[idx] as char);
        }
    }

    let tokens: Vec<&str> = interior
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|t| !t.is_empty())
        .collect();

    tokens
        .iter()
        .any(|t| matches!(*t, "get" | "set" | "init"))
        && tokens.iter().all(|t| ACCESSOR_TOKENS.contains(t))
}

/// Skip an `= <expression>;` initializer following an accessor block, if
/// present; returns the offset just past the terminating `;` (or `from`
/// unchanged when there is no initializer).
fn skip_initializer(scanner: &Scanner, from: usize) -> usize {
    let bytes = scanner.text().as_bytes();

    let mut peek = from;
    loop {
        peek = skip_whitespace(bytes, peek);
        if peek >= bytes.len() {
            return from;
        }
        if !scanner.is_code(peek) {
            peek += 1;
            continue;
        }
        break;
    }
    if bytes[peek] != b'=' {
        return from;
    }

    let mut i = peek + 1;
    while i < bytes.len() {
        if !scanner.is_code(i) {
            i += 1;
            continue;
        }
        match bytes[i] {
            b'{' => match scanner.matching_brace(i) {
                Ok(close) => i = close + 1,
                Err(_) => return bytes.len(),
            },
            b';' => return i + 1,
            _ => i += 1,
        }
    }
    i
}

/// Parse the declaration text preceding an accessor block into a Property.
fn parse_declaration(raw: &str) -> Option<Property> {
    let decl = strip_attributes(raw);
    let tokens: Vec<&str> = decl.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }

    let name = *tokens.last()?;
    if !is_identifier(name) || name == "this" {
        return None;
    }

    let mut access = AccessModifier::Public;
    let mut idx = 0;
    while idx < tokens.len() - 1 && MODIFIER_TOKENS.contains(&tokens[idx]) {
        // constants and statics are not instance data
        if tokens[idx] == "static" || tokens[idx] == "const" {
            return None;
        }
        if let Some(modifier) = AccessModifier::from_token(tokens[idx]) {
            access = modifier;
        }
        idx += 1;
    }

    let type_tokens = &tokens[idx..tokens.len() - 1];
    if type_tokens.is_empty() {
        return None;
    }
    let mut type_name = type_tokens.join(" ");
    let is_nullable = type_name.ends_with('?');
    if is_nullable {
        type_name.pop();
    }

    let starts_like_type = type_name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !starts_like_type {
        return None;
    }

    Some(Property {
        name: name.to_string(),
        type_name,
        is_nullable,
        access,
    })
}

/// Drop leading `[Attribute(...)]` groups from a declaration.
fn strip_attributes(decl: &str) -> &str {
    let mut rest = decl.trim_start();
    while rest.starts_with('[') {
        let mut depth = 0usize;
        let mut cut = None;
        for (i, c) in rest.char_indices() {
            match c {
                '[' => depth += 1,
                ']' => {
                    depth -= 1;
                    if depth == 0 {
                        cut = Some(i + 1);
                        break;
                    }
                }
                _ => {}
            }
        }
        match cut {
            Some(c) => rest = rest[c..].trim_start(),
            None => break,
        }
    }
    rest
}

fn is_identifier(token: &str) -> bool {
    let bytes = token.as_bytes();
    !bytes.is_empty()
        && !bytes[0].is_ascii_digit()
        && bytes.iter().all(|&b| crate::scanner::is_ident_byte(b))
}
