//! Schema generator for the gateway integration tools.
//!
//! This binary writes `generator_schema.json` describing the input and
//! output of every tool the Lambda exposes, so callers can build requests
//! without reading the Rust types.

use gateway_integration_generator::handler::{GENERATE_DOCUMENT_TOOL, GENERATE_INTEGRATION_TOOL};
use gateway_integration_generator::models::{
    DocumentRequest, GatewayIntegrationRequest, IntegrationDescriptor, TerraformDocument,
};
use schemars::{JsonSchema, schema_for};
use serde_json::{Value, json};
use std::fs;

const SCHEMA_FILE: &str = "generator_schema.json";

// Represents a tool with its metadata and schemas
struct Tool {
    name: String,
    description: String,
    input_schema: Value,
    output_schema: Value,
}

fn main() {
    let tools = vec![
        Tool {
            name: GENERATE_INTEGRATION_TOOL.into(),
            description: "Generate a single aws_api_gateway_integration resource proxying a GET method to a Lambda function. Returns the resource name (`<gateway key>-<id>`) and the Terraform JSON body, including request parameter mappings for path and query string parameters.".into(),
            input_schema: generate_tool_schema::<GatewayIntegrationRequest>(),
            output_schema: generate_tool_schema::<IntegrationDescriptor>(),
        },
        Tool {
            name: GENERATE_DOCUMENT_TOOL.into(),
            description: "Generate a Terraform JSON document containing one aws_api_gateway_integration resource per requested integration, in request order.".into(),
            input_schema: generate_tool_schema::<DocumentRequest>(),
            output_schema: generate_tool_schema::<TerraformDocument>(),
        },
    ];

    write_schema(&tools);
    println!("✅ Generated {SCHEMA_FILE} with {} tool(s)", tools.len());
}

// Generates a flattened schema for the given type
fn generate_tool_schema<T: JsonSchema>() -> Value {
    let mut schema = serde_json::to_value(schema_for!(T)).unwrap_or_else(|e| {
        eprintln!("Failed to serialize schema: {e}");
        std::process::exit(1);
    });

    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");

        // Remove format fields from top-level properties
        if let Some(properties) = obj.get_mut("properties").and_then(|p| p.as_object_mut()) {
            for prop_value in properties.values_mut() {
                if let Some(prop_obj) = prop_value.as_object_mut() {
                    prop_obj.remove("format");
                }
            }
        }
    }

    schema
}

// Writes the tools schema to generator_schema.json
fn write_schema(tools: &[Tool]) {
    let schemas: Vec<Value> = tools
        .iter()
        .map(|tool| {
            json!({
                "name": tool.name,
                "description": tool.description,
                "inputSchema": tool.input_schema,
                "outputSchema": tool.output_schema
            })
        })
        .collect();

    let json = serde_json::to_string_pretty(&schemas).unwrap_or_else(|e| {
        eprintln!("Failed to serialize schema: {e}");
        std::process::exit(1);
    });

    fs::write(SCHEMA_FILE, json).unwrap_or_else(|e| {
        eprintln!("Failed to write {SCHEMA_FILE}: {e}");
        std::process::exit(1);
    });
}
