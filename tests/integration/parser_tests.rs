//! Integration tests for parsing C# source files

use std::path::PathBuf;

use csharp_bootstrapper::generator::model_gen::generate_model;
use csharp_bootstrapper::models::AccessModifier;
use csharp_bootstrapper::parser::parse_file;

/// Get path to test fixtures
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Read fixture file content
fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

#[test]
fn test_parse_simple_model_fixture() {
    let content = read_fixture("simple_model.cs");
    let result = parse_file(&content);

    assert!(result.errors.is_empty());
    assert_eq!(result.namespace, "Shop.Models");
    assert_eq!(result.classes.len(), 1);

    let product = &result.classes[0];
    assert_eq!(product.name, "Product");
    assert_eq!(product.base_type, None);

    let names: Vec<&str> = product.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Id", "Name", "Price", "DiscontinuedAt"]);

    let discontinued = &product.properties[3];
    assert_eq!(discontinued.type_name, "DateTime");
    assert!(discontinued.is_nullable);
    assert_eq!(discontinued.access, AccessModifier::Public);
}

#[test]
fn test_parse_complex_model_fixture() {
    let content = read_fixture("complex_model.cs");
    let result = parse_file(&content);

    assert!(result.errors.is_empty());
    assert_eq!(result.namespace, "Shop.Models");
    assert_eq!(result.classes.len(), 2);

    let order = &result.classes[0];
    assert_eq!(order.name, "Order");
    assert_eq!(order.base_type.as_deref(), Some("EntityBase"));

    // the `_cached` field and the `Total()` method are not properties
    let names: Vec<&str> = order.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Id", "LineIds", "Note", "Counts"]);

    assert_eq!(order.properties[1].type_name, "List<int>");
    assert_eq!(order.properties[3].type_name, "Dictionary<string, int>");

    let line = &result.classes[1];
    assert_eq!(line.name, "OrderLine");
    assert_eq!(line.properties.len(), 2);
    assert_eq!(line.properties[1].name, "UnitPrice");
    assert!(line.properties[1].is_nullable);
}

#[test]
fn test_parse_no_class_fixture() {
    let content = read_fixture("no_class.cs");
    let result = parse_file(&content);

    assert!(result.classes.is_empty());
    assert!(result.errors.is_empty());
    assert_eq!(result.namespace, "Shop.Models");
}

#[test]
fn test_parse_then_generate_model() {
    let content = read_fixture("simple_model.cs");
    let result = parse_file(&content);
    let output = generate_model(&result.classes[0]);

    assert!(output.contains("export interface IProduct {"));
    assert!(output.contains("  id: number;"));
    assert!(output.contains("  name: string;"));
    assert!(output.contains("  price: number;"));
    assert!(output.contains("  discontinuedAt?: string;"));
    assert!(output.contains("export class ProductDto implements IProduct {"));
    assert!(output.contains("export class Product extends ProductDto {"));
    assert!(output.contains("this.discontinuedAt = dto.discontinuedAt;"));
}

#[test]
fn test_parse_is_deterministic() {
    let content = read_fixture("complex_model.cs");
    let first = parse_file(&content);
    let second = parse_file(&content);

    assert_eq!(first.classes.len(), second.classes.len());
    let render_first: Vec<String> = first.classes.iter().map(generate_model).collect();
    let render_second: Vec<String> = second.classes.iter().map(generate_model).collect();
    assert_eq!(render_first, render_second);
}
