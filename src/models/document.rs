use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::AppError;
use super::gateway_integration::{GatewayIntegration, IntegrationDescriptor};

/// Terraform resource type of generated integrations
pub const INTEGRATION_RESOURCE_TYPE: &str = "aws_api_gateway_integration";

/// Terraform JSON document (`*.tf.json`) holding generated resources.
///
/// Serializes as `{"resource": {"<type>": {"<name>": {...}}}}` with blocks in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TerraformDocument {
    pub resource: IndexMap<String, IndexMap<String, GatewayIntegration>>,
}

impl TerraformDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the integration under its unique id.
    ///
    /// Returns the record that was previously stored under the same id, if any.
    /// The replaced entry keeps its position in the document.
    pub fn insert_integration(
        &mut self,
        descriptor: IntegrationDescriptor,
    ) -> Option<GatewayIntegration> {
        self.resource
            .entry(INTEGRATION_RESOURCE_TYPE.to_string())
            .or_default()
            .insert(descriptor.unique_id, descriptor.resource)
    }

    /// Looks up a generated integration by its unique id
    #[must_use]
    pub fn integration(&self, unique_id: &str) -> Option<&GatewayIntegration> {
        self.resource
            .get(INTEGRATION_RESOURCE_TYPE)
            .and_then(|integrations| integrations.get(unique_id))
    }

    /// Number of integrations in the document
    #[must_use]
    pub fn integration_count(&self) -> usize {
        self.resource
            .get(INTEGRATION_RESOURCE_TYPE)
            .map_or(0, IndexMap::len)
    }

    /// Renders the document as pretty-printed Terraform JSON.
    ///
    /// # Errors
    ///
    /// Returns `AppError::SerializationError` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self).map_err(AppError::from)
    }
}
