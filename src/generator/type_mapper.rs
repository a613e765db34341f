use crate::known_types;

/// Collection wrappers that map to TypeScript arrays
const SEQUENCE_WRAPPERS: &[&str] = &[
    "List",
    "IList",
    "IEnumerable",
    "ICollection",
    "IReadOnlyList",
    "IReadOnlyCollection",
    "HashSet",
];

/// Dictionary wrappers that map to TypeScript `Record`
const MAP_WRAPPERS: &[&str] = &["Dictionary", "IDictionary", "IReadOnlyDictionary"];

/// Convert a C# type token to its TypeScript equivalent.
///
/// This is a closed table, not a parser: arrays and one level of
/// `List<T>`/`Dictionary<K, V>` are unwrapped, built-ins are looked up, and
/// anything unrecognized passes through unchanged on the assumption that it
/// names another user-defined class.
pub fn csharp_to_typescript(type_name: &str) -> String {
    let name = type_name.trim();
    let name = name.strip_suffix('?').unwrap_or(name);

    if let Some(inner) = name.strip_suffix("[]") {
        return array_of(&csharp_to_typescript(inner));
    }

    for wrapper in SEQUENCE_WRAPPERS {
        if let Some(inner) = strip_generic(name, wrapper) {
            return array_of(&csharp_to_typescript(inner));
        }
    }

    for wrapper in MAP_WRAPPERS {
        if let Some(inner) = strip_generic(name, wrapper) {
            if let Some(record) = record_of(inner) {
                return record;
            }
        }
    }

    if let Some(inner) = strip_generic(name, "Nullable") {
        return csharp_to_typescript(inner);
    }

    known_types::builtin_to_typescript(name)
        .map(str::to_string)
        .unwrap_or_else(|| name.to_string())
}

fn array_of(inner: &str) -> String {
    // union element types need parentheses
    if inner.contains('|') {
        format!("({})[]", inner)
    } else {
        format!("{}[]", inner)
    }
}

/// Strip `Wrapper<` ... `>` and return the generic argument text.
fn strip_generic<'a>(name: &'a str, wrapper: &str) -> Option<&'a str> {
    name.strip_prefix(wrapper)?
        .strip_prefix('<')?
        .strip_suffix('>')
}

/// Build `Record<K, V>` from a dictionary's generic argument text. Keys that
/// would not be valid TypeScript record keys are coerced to `string`, which
/// is how they serialize over JSON anyway.
fn record_of(args: &str) -> Option<String> {
    let mut depth = 0usize;
    for (i, c) in args.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let key = csharp_to_typescript(&args[..i]);
                let value = csharp_to_typescript(&args[i + 1..]);
                let key = if key == "string" || key == "number" {
                    key
                } else {
                    "string".to_string()
                };
                return Some(format!("Record<{}, {}>", key, value));
            }
            _ => {}
        }
    }
    None
}
