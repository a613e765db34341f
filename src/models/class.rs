/// Represents one extracted C# class
#[derive(Debug, Clone)]
pub struct ParsedClass {
    /// Class name, never empty
    pub name: String,
    /// First inheritance token after `:`, if any
    pub base_type: Option<String>,
    /// Auto-properties in declaration order
    pub properties: Vec<Property>,
}

/// Represents one auto-property declaration
#[derive(Debug, Clone)]
pub struct Property {
    /// Property name
    pub name: String,
    /// Declared C# type, without the trailing `?`
    pub type_name: String,
    /// Whether the declared type carried a `?` nullability marker
    pub is_nullable: bool,
    /// Access modifier, `public` when omitted in the source
    pub access: AccessModifier,
}

/// C# member access modifiers recognized on property declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessModifier {
    Public,
    Internal,
    Protected,
    Private,
}

impl AccessModifier {
    /// Parse a single modifier token; `None` for anything else.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "public" => Some(AccessModifier::Public),
            "internal" => Some(AccessModifier::Internal),
            "protected" => Some(AccessModifier::Protected),
            "private" => Some(AccessModifier::Private),
            _ => None,
        }
    }
}
