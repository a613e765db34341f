use crate::models::{ParsedClass, Property};
use crate::utils::to_lower_camel;

use super::type_mapper::csharp_to_typescript;

/// Render the TypeScript model triple for one class: an `I<Name>` interface,
/// a `<Name>Dto` class implementing it, and a `<Name>` class extending the
/// Dto whose constructor copies each known field explicitly.
///
/// Pure function of the parsed class; rendering the same class twice yields
/// byte-identical output. An empty property list still renders closed bodies.
pub fn generate_model(class: &ParsedClass) -> String {
    let name = &class.name;
    let mut out = String::new();

    out.push_str(&format!("export interface I{} {{\n", name));
    for property in &class.properties {
        out.push_str(&property_line(property));
    }
    out.push_str("}\n\n");

    out.push_str(&format!("export class {}Dto implements I{} {{\n", name, name));
    for property in &class.properties {
        out.push_str(&property_line(property));
    }
    out.push_str("}\n\n");

    out.push_str(&format!("export class {} extends {}Dto {{\n", name, name));
    out.push_str(&format!("  constructor(dto?: {}Dto) {{\n", name));
    out.push_str("    super();\n\n");
    out.push_str("    if (dto) {\n");
    for property in &class.properties {
        let field = to_lower_camel(&property.name);
        out.push_str(&format!("      this.{} = dto.{};\n", field, field));
    }
    out.push_str("    }\n  }\n}\n");

    out
}

fn property_line(property: &Property) -> String {
    let marker = if property.is_nullable { "?" } else { "" };
    format!(
        "  {}{}: {};\n",
        to_lower_camel(&property.name),
        marker,
        csharp_to_typescript(&property.type_name)
    )
}
