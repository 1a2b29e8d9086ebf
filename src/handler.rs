use lambda_runtime::tracing::{debug, error, info, warn};
use lambda_runtime::{Context, Diagnostic, LambdaEvent};
use serde_json::Value;

use crate::config::GeneratorConfig;
use crate::models::{AppError, DocumentRequest, GatewayIntegrationRequest};
use crate::resources::{duplicate_parameters, generate_checked, generate_document};

/// Tool generating a single integration descriptor
pub const GENERATE_INTEGRATION_TOOL: &str = "generate_gateway_integration";
/// Tool generating a Terraform document from a batch of integrations
pub const GENERATE_DOCUMENT_TOOL: &str = "generate_gateway_document";

/// Extracts the tool name from the Lambda client context or the event payload.
///
/// Checked in order: `client_context.custom["generatorToolName"]`, an MCP
/// `tools/call` request, a top-level `tool` field.
#[must_use]
pub fn extract_tool_name(event_payload: &Value, context: &Context) -> String {
    if let Some(tool_name) = context
        .client_context
        .as_ref()
        .and_then(|cc| cc.custom.get("generatorToolName"))
        .map(String::as_str)
    {
        debug!("Found tool name in context: {}", tool_name);
        return strip_gateway_prefix(tool_name);
    }

    if let Some(method) = event_payload.get("method").and_then(Value::as_str)
        && method == "tools/call"
        && let Some(name) = event_payload
            .get("params")
            .and_then(|params| params.get("name"))
            .and_then(Value::as_str)
    {
        debug!("Found tool name in MCP payload: {}", name);
        return strip_gateway_prefix(name);
    }

    if let Some(name) = event_payload.get("tool").and_then(Value::as_str) {
        return strip_gateway_prefix(name);
    }

    debug!("Tool name not found, using unknown");
    "unknown".to_string()
}

// Format: `gateway-target-id___tool_name` → `tool_name`
fn strip_gateway_prefix(name: &str) -> String {
    name.split_once("___").map_or_else(
        || name.to_string(),
        |(_, actual_name)| actual_name.to_string(),
    )
}

fn app_error_diagnostic(error: &AppError) -> Diagnostic {
    let error_type = match error {
        AppError::ValidationError(_) => "ValidationError",
        AppError::SerializationError(_) => "SerializationError",
        AppError::ConfigError(_) | AppError::GenericError(_) => "GeneratorError",
    };
    Diagnostic {
        error_type: error_type.to_string(),
        error_message: error.to_string(),
    }
}

fn parse_arguments<T: serde::de::DeserializeOwned>(tool_args: Value) -> Result<T, Diagnostic> {
    serde_json::from_value(tool_args).map_err(|e| {
        error!(error = %e, "Failed to parse request");
        Diagnostic {
            error_type: "InvalidInput".to_string(),
            error_message: format!("Failed to parse request: {e}"),
        }
    })
}

fn to_response<T: serde::Serialize>(response: &T) -> Result<Value, Diagnostic> {
    serde_json::to_value(response).map_err(|e| {
        error!(error = %e, "Failed to serialize response");
        Diagnostic {
            error_type: "SerializationError".to_string(),
            error_message: format!("Failed to serialize response: {e}"),
        }
    })
}

fn generate_integration_tool(
    config: &GeneratorConfig,
    tool_args: Value,
) -> Result<Value, Diagnostic> {
    let request: GatewayIntegrationRequest = parse_arguments(tool_args)?;
    for key in duplicate_parameters(&request) {
        warn!(
            integration = %request.id,
            parameter = %key,
            "Parameter mapped more than once, keeping the last mapping"
        );
    }

    let descriptor = generate_checked(config, &request).map_err(|e| {
        error!(error = %e, "Integration generation failed");
        app_error_diagnostic(&e)
    })?;
    to_response(&descriptor)
}

fn generate_document_tool(
    config: &GeneratorConfig,
    tool_args: Value,
) -> Result<Value, Diagnostic> {
    let request: DocumentRequest = parse_arguments(tool_args)?;
    let document = generate_document(config, &request.integrations).map_err(|e| {
        error!(error = %e, "Document generation failed");
        app_error_diagnostic(&e)
    })?;
    to_response(&document)
}

/// Routes a tool request to the matching generator.
///
/// # Errors
///
/// Returns a `Diagnostic` error if the tool is unknown, its arguments cannot be
/// parsed, strict validation rejects them, or the output cannot be serialized.
pub fn route_tool(
    config: &GeneratorConfig,
    tool_name: &str,
    event_payload: Value,
) -> Result<Value, Diagnostic> {
    debug!(tool_name = %tool_name, "Routing tool");

    // MCP requests nest the arguments, direct invocations pass them as the payload
    let tool_args = event_payload
        .get("params")
        .and_then(|params| params.get("arguments"))
        .cloned()
        .unwrap_or(event_payload);

    match tool_name {
        GENERATE_INTEGRATION_TOOL => generate_integration_tool(config, tool_args),
        GENERATE_DOCUMENT_TOOL => generate_document_tool(config, tool_args),
        _ => {
            error!(tool_name = %tool_name, "Unknown tool requested");
            Err(Diagnostic {
                error_type: "UnknownTool".to_string(),
                error_message: format!("Unknown tool: {tool_name}"),
            })
        }
    }
}

/// Lambda event handler. Unwraps API Gateway proxy bodies and routes to the
/// requested generator.
///
/// # Errors
///
/// Returns a `Diagnostic` error with one of the following types:
///
/// - `InvalidInput`: the tool arguments do not match the generator request
/// - `ValidationError`: strict validation rejected the request
/// - `SerializationError`: the generated output could not be serialized
/// - `GeneratorError`: any other generator failure
/// - `UnknownTool`: the requested tool name was not recognized
// `service_fn` needs a future; generation itself never awaits
#[allow(clippy::unused_async)]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    config: &GeneratorConfig,
) -> Result<Value, Diagnostic> {
    let (event_payload, context) = event.into_parts();

    let payload = if let Some(body_str) = event_payload.get("body").and_then(Value::as_str) {
        serde_json::from_str(body_str).unwrap_or(event_payload)
    } else {
        event_payload
    };

    let tool_name = extract_tool_name(&payload, &context);
    info!(tool_name = %tool_name, "Invoking generator");

    route_tool(config, &tool_name, payload)
}
