pub mod model_gen;
pub mod service_gen;
pub mod type_mapper;

use crate::models::ParsedClass;
use crate::utils::to_lower_camel;

/// Output filename for the TypeScript model (`user.ts` for `User`)
pub fn model_filename(class: &ParsedClass) -> String {
    format!("{}.ts", to_lower_camel(&class.name))
}

/// Output filename for the CRUD service implementation
pub fn service_filename(class: &ParsedClass) -> String {
    format!("{}Service.cs", class.name)
}

/// Output filename for the CRUD service interface
pub fn interface_filename(class: &ParsedClass) -> String {
    format!("I{}Service.cs", class.name)
}
