//! Integration tests for the full pipeline

use std::fs;
use std::path::Path;
use tempfile::tempdir;

use csharp_bootstrapper::config::{Config, InputConfig, OutputConfig};
use csharp_bootstrapper::error::ParseError;
use csharp_bootstrapper::pipeline::Pipeline;

/// Create a test config with temp directories
fn create_test_config(root: &Path) -> Config {
    let config = Config {
        input: InputConfig {
            exclude: vec!["bin".to_string(), "obj".to_string()],
        },
        output: OutputConfig {
            model_dir: root.join("models"),
            service_dir: root.join("services"),
            interface_dir: root.join("interfaces"),
        },
    };
    for dir in [
        &config.output.model_dir,
        &config.output.service_dir,
        &config.output.interface_dir,
    ] {
        fs::create_dir_all(dir).unwrap();
    }
    config
}

#[test]
fn test_model_pipeline_single_class() {
    let temp = tempdir().unwrap();
    let config = create_test_config(temp.path());

    let code = r#"
using System;

namespace Shop.Models
{
    public class User
    {
        public int Id { get; set; }
        public string Name { get; set; }
        public DateTime? LastSeen { get; set; }
    }
}
"#;
    let source = temp.path().join("User.cs");
    fs::write(&source, code).unwrap();

    let written = Pipeline::new(false).run_models(&source, &config).unwrap();

    assert_eq!(written.len(), 1);
    let model_path = config.output.model_dir.join("user.ts");
    assert!(model_path.exists());

    let content = fs::read_to_string(&model_path).unwrap();
    assert!(content.contains("export interface IUser {"));
    assert!(content.contains("id: number;"));
    assert!(content.contains("name: string;"));
    assert!(content.contains("lastSeen?: string;"));
    assert!(content.contains("export class UserDto implements IUser {"));
    assert!(content.contains("constructor(dto?: UserDto) {"));
}

#[test]
fn test_model_pipeline_multi_class_file() {
    let temp = tempdir().unwrap();
    let config = create_test_config(temp.path());

    let code = r#"
namespace Shop.Models
{
    public class Order
    {
        public int Id { get; set; }
    }

    public class OrderLine
    {
        public int Quantity { get; set; }
    }
}
"#;
    let source = temp.path().join("Order.cs");
    fs::write(&source, code).unwrap();

    let written = Pipeline::new(false).run_models(&source, &config).unwrap();

    assert_eq!(written.len(), 2);
    assert!(config.output.model_dir.join("order.ts").exists());
    assert!(config.output.model_dir.join("orderLine.ts").exists());

    // each model only carries its own properties
    let order = fs::read_to_string(config.output.model_dir.join("order.ts")).unwrap();
    let line = fs::read_to_string(config.output.model_dir.join("orderLine.ts")).unwrap();
    assert!(order.contains("id: number;"));
    assert!(!order.contains("quantity"));
    assert!(line.contains("quantity: number;"));
    assert!(!line.contains("id: number;"));
}

#[test]
fn test_service_pipeline_writes_pair() {
    let temp = tempdir().unwrap();
    let config = create_test_config(temp.path());

    let code = r#"
namespace Shop.Models
{
    public class Order
    {
        public int Id { get; set; }
    }
}
"#;
    let source = temp.path().join("Order.cs");
    fs::write(&source, code).unwrap();

    let written = Pipeline::new(false).run_services(&source, &config).unwrap();

    assert_eq!(written.len(), 2);
    let service_path = config.output.service_dir.join("OrderService.cs");
    let interface_path = config.output.interface_dir.join("IOrderService.cs");
    assert!(service_path.exists());
    assert!(interface_path.exists());

    let service = fs::read_to_string(&service_path).unwrap();
    assert!(service.contains("namespace Shop.Models"));
    assert!(service.contains("public class OrderService : IOrderService"));
    assert!(service.contains("public Order GetOrder(int id)"));

    let interface = fs::read_to_string(&interface_path).unwrap();
    assert!(interface.contains("public interface IOrderService"));
    assert!(interface.contains("Order GetOrder(int id);"));
    assert!(interface.contains("List<Order> GetAllOrders();"));
}

#[test]
fn test_no_class_file_errors() {
    let temp = tempdir().unwrap();
    let config = create_test_config(temp.path());

    let source = temp.path().join("Color.cs");
    fs::write(&source, "public enum Color { Red }").unwrap();

    let err = Pipeline::new(false)
        .run_models(&source, &config)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ParseError>(),
        Some(ParseError::NoClassFound)
    ));
}

#[test]
fn test_directory_input_skips_excluded_and_classless() {
    let temp = tempdir().unwrap();
    let config = create_test_config(temp.path());

    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("User.cs"),
        "namespace App { public class User { public int Id { get; set; } } }",
    )
    .unwrap();
    fs::write(src.join("Color.cs"), "public enum Color { Red }").unwrap();

    let obj = src.join("obj");
    fs::create_dir_all(&obj).unwrap();
    fs::write(
        obj.join("Generated.cs"),
        "namespace App { public class Hidden { } }",
    )
    .unwrap();

    let written = Pipeline::new(false).run_models(&src, &config).unwrap();

    assert_eq!(written.len(), 1);
    assert!(config.output.model_dir.join("user.ts").exists());
    assert!(!config.output.model_dir.join("hidden.ts").exists());
}

#[test]
fn test_directory_input_survives_unreadable_file() {
    let temp = tempdir().unwrap();
    let config = create_test_config(temp.path());

    let src = temp.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(
        src.join("User.cs"),
        "namespace App { public class User { public int Id { get; set; } } }",
    )
    .unwrap();
    // invalid UTF-8 makes read_to_string fail for this file only
    fs::write(src.join("Binary.cs"), [0xFF, 0xFE, 0x00, 0x7B]).unwrap();
    fs::write(
        src.join("Inner.cs"),
        "namespace App { public class Inner { public int X { get; set; } } }",
    )
    .unwrap();

    let written = Pipeline::new(false).run_models(&src, &config).unwrap();

    // the readable files are still processed
    assert!(config.output.model_dir.join("user.ts").exists());
    assert!(config.output.model_dir.join("inner.ts").exists());
    assert_eq!(written.len(), 2);
}

#[test]
fn test_unreadable_single_file_is_an_error() {
    let temp = tempdir().unwrap();
    let config = create_test_config(temp.path());

    let source = temp.path().join("Binary.cs");
    fs::write(&source, [0xFF, 0xFE, 0x00, 0x7B]).unwrap();

    let result = Pipeline::new(false).run_models(&source, &config);
    assert!(result.is_err());
}

#[test]
fn test_regeneration_is_byte_identical() {
    let temp = tempdir().unwrap();
    let config = create_test_config(temp.path());

    let source = temp.path().join("User.cs");
    fs::write(
        &source,
        "namespace App { public class User { public int Id { get; set; } } }",
    )
    .unwrap();

    let pipeline = Pipeline::new(false);
    pipeline.run_models(&source, &config).unwrap();
    let first = fs::read_to_string(config.output.model_dir.join("user.ts")).unwrap();

    pipeline.run_models(&source, &config).unwrap();
    let second = fs::read_to_string(config.output.model_dir.join("user.ts")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unbalanced_file_keeps_earlier_classes() {
    let temp = tempdir().unwrap();
    let config = create_test_config(temp.path());

    let source = temp.path().join("Broken.cs");
    fs::write(
        &source,
        "namespace App { public class Good { public int Id { get; set; } } public class Broken { public int X { get; set; }",
    )
    .unwrap();

    let written = Pipeline::new(false).run_models(&source, &config).unwrap();

    assert_eq!(written.len(), 1);
    assert!(config.output.model_dir.join("good.ts").exists());
}
