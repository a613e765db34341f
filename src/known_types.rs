//! Known types module - centralized table of C# built-in types and their
//! TypeScript mappings

/// C# types that map to TypeScript `string`
pub const STRING_TYPES: &[&str] = &["string", "String", "char"];

/// Integer types
pub const INTEGER_TYPES: &[&str] = &[
    "int", "long", "short", "byte", "sbyte", "uint", "ulong", "ushort", "nint", "nuint",
];

/// Floating point and decimal types
pub const FLOAT_TYPES: &[&str] = &["float", "double", "decimal"];

/// Boolean type
pub const BOOL_TYPE: &str = "bool";

/// Date/time and identifier types that serialize to strings over JSON
pub const EXTERNAL_STRING_TYPES: &[&str] = &[
    "DateTime",
    "DateTimeOffset",
    "DateOnly",
    "TimeOnly",
    "TimeSpan",
    "Guid",
    "Uri",
];

/// Types with no useful static shape on the TypeScript side
pub const ANY_TYPES: &[&str] = &["object", "dynamic"];

/// Get the TypeScript type for a C# built-in type token
pub fn builtin_to_typescript(name: &str) -> Option<&'static str> {
    if STRING_TYPES.contains(&name) {
        return Some("string");
    }
    if INTEGER_TYPES.contains(&name) || FLOAT_TYPES.contains(&name) {
        return Some("number");
    }
    if name == BOOL_TYPE {
        return Some("boolean");
    }
    if EXTERNAL_STRING_TYPES.contains(&name) {
        return Some("string");
    }
    if ANY_TYPES.contains(&name) {
        return Some("unknown");
    }
    None
}
