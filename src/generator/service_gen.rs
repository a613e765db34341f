use crate::models::ParsedClass;
use crate::utils::{pluralize, to_lower_camel};

/// Reserved C# words that can collide with a lower-camel parameter name
/// derived from a class name (`Event` -> `event`, `Object` -> `object`).
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Lower-camel parameter name for a class, `@`-escaped when it lands on a
/// C# keyword.
fn parameter_name(class_name: &str) -> String {
    let lowered = to_lower_camel(class_name);
    if CSHARP_KEYWORDS.contains(&lowered.as_str()) {
        format!("@{}", lowered)
    } else {
        lowered
    }
}

/// One CRUD method signature, shared by the service and its interface so the
/// two renderers cannot drift apart.
struct MethodSig {
    return_type: String,
    name: String,
    params: String,
}

impl MethodSig {
    fn signature(&self) -> String {
        format!("{} {}({})", self.return_type, self.name, self.params)
    }
}

/// CRUD method set derived from the class name.
fn crud_methods(class: &ParsedClass) -> Vec<MethodSig> {
    let name = &class.name;
    let arg = parameter_name(name);

    vec![
        MethodSig {
            return_type: name.clone(),
            name: format!("Get{}", name),
            params: "int id".to_string(),
        },
        MethodSig {
            return_type: format!("List<{}>", name),
            name: format!("GetAll{}", pluralize(name)),
            params: String::new(),
        },
        MethodSig {
            return_type: name.clone(),
            name: format!("Create{}", name),
            params: format!("{} {}", name, arg),
        },
        MethodSig {
            return_type: name.clone(),
            name: format!("Update{}", name),
            params: format!("{} {}", name, arg),
        },
        MethodSig {
            return_type: "void".to_string(),
            name: format!("Delete{}", name),
            params: "int id".to_string(),
        },
    ]
}

/// Render the CRUD service implementation for one class, inside the declared
/// namespace when there is one.
pub fn generate_service(class: &ParsedClass, namespace: &str) -> String {
    let methods: Vec<String> = crud_methods(class)
        .iter()
        .map(|m| {
            format!(
                "    public {}\n    {{\n        throw new NotImplementedException();\n    }}",
                m.signature()
            )
        })
        .collect();

    let decl = format!(
        "public class {0}Service : I{0}Service\n{{\n{1}\n}}",
        class.name,
        methods.join("\n\n"),
    );

    wrap_in_namespace(namespace, &decl)
}

/// Render the CRUD service interface for one class. Every signature here has
/// a matching implementation in [`generate_service`] by construction.
pub fn generate_service_interface(class: &ParsedClass, namespace: &str) -> String {
    let methods: Vec<String> = crud_methods(class)
        .iter()
        .map(|m| format!("    {};", m.signature()))
        .collect();

    let decl = format!(
        "public interface I{}Service\n{{\n{}\n}}",
        class.name,
        methods.join("\n"),
    );

    wrap_in_namespace(namespace, &decl)
}

fn wrap_in_namespace(namespace: &str, decl: &str) -> String {
    let mut out = String::from("using System;\nusing System.Collections.Generic;\n\n");

    if namespace.is_empty() {
        out.push_str(decl);
        out.push('\n');
        return out;
    }

    out.push_str(&format!("namespace {}\n{{\n", namespace));
    for line in decl.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("}\n");
    out
}
