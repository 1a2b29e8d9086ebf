use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named parameter of the API Gateway resource the integration attaches to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Param {
    #[schemars(description = "Parameter name as declared on the API Gateway method")]
    pub name: String,
}

impl Param {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Input of the integration generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GatewayIntegrationRequest {
    #[schemars(description = "Identifier of the integration, unique within the generated document")]
    pub id: String,
    #[schemars(description = "Name of the aws_api_gateway_resource the integration attaches to")]
    pub gateway_resource_id: String,
    #[schemars(description = "Short name of the target Lambda function, without the global prefix")]
    pub lambda_name: String,
    #[serde(default, alias = "pathParams")]
    #[schemars(description = "Path parameters forwarded to the Lambda")]
    pub params: Vec<Param>,
    #[serde(default, alias = "queryParams")]
    #[schemars(description = "Query string parameters forwarded to the Lambda")]
    pub query_string_params: Vec<Param>,
}

/// Batch input for generating a whole document
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DocumentRequest {
    #[schemars(description = "Integrations to generate, in output order")]
    pub integrations: Vec<GatewayIntegrationRequest>,
}

/// `aws_api_gateway_integration` resource as written to Terraform JSON.
///
/// Field names and literal values are consumed verbatim by Terraform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GatewayIntegration {
    pub rest_api_id: String,
    pub resource_id: String,
    pub http_method: String,
    pub integration_http_method: String,
    #[serde(rename = "type")]
    pub integration_type: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_parameters: Option<IndexMap<String, String>>,
}

/// A generated integration together with the key it is stored under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationDescriptor {
    #[schemars(description = "Resource name, `<gateway key>-<id>`")]
    pub unique_id: String,
    pub resource: GatewayIntegration,
}
