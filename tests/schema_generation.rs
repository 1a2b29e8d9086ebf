//! Tests for schema generation functionality
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::process::Command;

#[test]
fn test_schema_generation_describes_both_tools() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "generate-schema", "--features", "schema-gen"])
        .output()
        .expect("Failed to run schema generation");

    assert!(output.status.success(), "Schema generation failed: {output:?}");

    let content =
        fs::read_to_string("generator_schema.json").expect("Failed to read generator_schema.json");
    let schema: Vec<serde_json::Value> =
        serde_json::from_str(&content).expect("Invalid JSON in generator_schema.json");

    let names: Vec<&str> = schema
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["generate_gateway_integration", "generate_gateway_document"]);

    for tool in &schema {
        assert!(tool["description"].is_string(), "Tool description should be a string");
        assert_eq!(tool["inputSchema"]["type"], "object");
        assert_eq!(tool["outputSchema"]["type"], "object");
    }

    let input_schema = &schema[0]["inputSchema"];
    let properties = input_schema["properties"].as_object().unwrap();
    for field in ["id", "gatewayResourceId", "lambdaName", "params", "queryStringParams"] {
        assert!(properties.contains_key(field), "Missing input field: {field}");
    }

    let required = input_schema["required"].as_array().unwrap();
    assert!(required.contains(&serde_json::json!("lambdaName")));
    assert!(!required.contains(&serde_json::json!("params")));

    let _ = fs::remove_file("generator_schema.json");
}
