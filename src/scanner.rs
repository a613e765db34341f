use crate::error::ParseError;

/// Tokenizing scanner over one C# source text.
///
/// Classifies every byte as code vs. string/comment in a single pass, then
/// answers brace-matching and keyword queries against the code-classified
/// bytes only. This is what keeps a `{` inside a string literal, a comment or
/// a property initializer from breaking body extraction.
pub struct Scanner<'a> {
    text: &'a str,
    code: Vec<bool>,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Scanner {
            code: classify(text),
            text,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Whether the byte at `idx` is code (not inside a string or comment).
    pub fn is_code(&self, idx: usize) -> bool {
        self.code.get(idx).copied().unwrap_or(false)
    }

    /// Offset of the closing brace matching the opening brace at `open`.
    ///
    /// `open` must point at a code-classified `{`. Braces inside strings and
    /// comments do not affect the depth count.
    pub fn matching_brace(&self, open: usize) -> Result<usize, ParseError> {
        debug_assert_eq!(self.text.as_bytes().get(open), Some(&b'{'));

        let bytes = self.text.as_bytes();
        let mut depth = 1usize;

        for i in open + 1..bytes.len() {
            if !self.code[i] {
                continue;
            }
            match bytes[i] {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(i);
                    }
                }
                _ => {}
            }
        }

        Err(ParseError::UnbalancedBraces(open))
    }

    /// Next code-classified occurrence of `target` at or after `from`.
    pub fn find_code_byte(&self, from: usize, target: u8) -> Option<usize> {
        let bytes = self.text.as_bytes();
        (from..bytes.len()).find(|&i| self.code[i] && bytes[i] == target)
    }

    /// Next word-bounded occurrence of `word` outside strings/comments,
    /// at or after `from`.
    pub fn find_keyword(&self, from: usize, word: &str) -> Option<usize> {
        if from >= self.text.len() {
            return None;
        }
        let bytes = self.text.as_bytes();

        for (offset, _) in self.text[from..].match_indices(word) {
            let start = from + offset;
            let end = start + word.len();

            if !(start..end).all(|i| self.code[i]) {
                continue;
            }
            // `@` guards verbatim identifiers like `@class`
            if start > 0 && (is_ident_byte(bytes[start - 1]) || bytes[start - 1] == b'@') {
                continue;
            }
            if end < bytes.len() && is_ident_byte(bytes[end]) {
                continue;
            }
            return Some(start);
        }

        None
    }
}

/// Whether a byte can be part of an identifier.
pub fn is_ident_byte(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// First non-whitespace offset at or after `from`.
pub fn skip_whitespace(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// End offset of the identifier starting at `from` (equal to `from` when no
/// identifier starts there).
pub fn read_identifier(bytes: &[u8], from: usize) -> usize {
    if from >= bytes.len() || bytes[from].is_ascii_digit() || !is_ident_byte(bytes[from]) {
        return from;
    }
    let mut i = from;
    while i < bytes.len() && is_ident_byte(bytes[i]) {
        i += 1;
    }
    i
}

/// One-pass classification of every byte: `true` = code, `false` = inside a
/// comment, string literal or char literal (delimiters included).
fn classify(text: &str) -> Vec<bool> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut code = vec![true; len];
    let mut i = 0;

    while i < len {
        match bytes[i] {
            b'/' if i + 1 < len && bytes[i + 1] == b'/' => {
                while i < len && bytes[i] != b'\n' {
                    code[i] = false;
                    i += 1;
                }
            }
            b'/' if i + 1 < len && bytes[i + 1] == b'*' => {
                code[i] = false;
                code[i + 1] = false;
                i += 2;
                while i < len {
                    if bytes[i] == b'*' && i + 1 < len && bytes[i + 1] == b'/' {
                        code[i] = false;
                        code[i + 1] = false;
                        i += 2;
                        break;
                    }
                    code[i] = false;
                    i += 1;
                }
            }
            b'@' | b'$' if is_string_prefix(bytes, i) => {
                let quote = prefix_end(bytes, i);
                let verbatim = bytes[i..quote].contains(&b'@');
                for slot in code.iter_mut().take(quote + 1).skip(i) {
                    *slot = false;
                }
                i = if verbatim {
                    skip_verbatim_string(bytes, quote + 1, &mut code)
                } else {
                    skip_string(bytes, quote + 1, &mut code)
                };
            }
            b'"' => {
                code[i] = false;
                i = skip_string(bytes, i + 1, &mut code);
            }
            b'\'' => {
                code[i] = false;
                i = skip_char_literal(bytes, i + 1, &mut code);
            }
            _ => i += 1,
        }
    }

    code
}

/// Whether the `@`/`$` run starting at `i` introduces a string literal.
fn is_string_prefix(bytes: &[u8], i: usize) -> bool {
    bytes.get(prefix_end(bytes, i)) == Some(&b'"')
}

/// Offset of the first byte after the `@`/`$` prefix run at `i`.
fn prefix_end(bytes: &[u8], i: usize) -> usize {
    let mut j = i;
    while j < bytes.len() && (bytes[j] == b'@' || bytes[j] == b'$') {
        j += 1;
    }
    j
}

/// Consume a regular string body (backslash escapes) starting after the
/// opening quote; returns the offset just past the closing quote.
fn skip_string(bytes: &[u8], mut i: usize, code: &mut [bool]) -> usize {
    while i < bytes.len() {
        code[i] = false;
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() => {
                code[i + 1] = false;
                i += 2;
            }
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    i
}

/// Consume a verbatim string body (`""` is an escaped quote).
fn skip_verbatim_string(bytes: &[u8], mut i: usize, code: &mut [bool]) -> usize {
    while i < bytes.len() {
        code[i] = false;
        if bytes[i] == b'"' {
            if i + 1 < bytes.len() && bytes[i + 1] == b'"' {
                code[i + 1] = false;
                i += 2;
            } else {
                return i + 1;
            }
        } else {
            i += 1;
        }
    }
    i
}

/// Consume a char literal body starting after the opening quote.
fn skip_char_literal(bytes: &[u8], mut i: usize, code: &mut [bool]) -> usize {
    while i < bytes.len() {
        code[i] = false;
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() => {
                code[i + 1] = false;
                i += 2;
            }
            b'\'' => return i + 1,
            _ => i += 1,
        }
    }
    i
}
