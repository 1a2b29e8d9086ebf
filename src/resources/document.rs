use lambda_runtime::tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::models::document::TerraformDocument;
use crate::models::error::AppError;
use crate::models::gateway_integration::GatewayIntegrationRequest;

use super::gateway_integration::{duplicate_parameters, generate_checked};

/// Generates every requested integration and merges them into one document.
///
/// Integrations are stored in request order. A later request with an already
/// used unique id replaces the earlier resource; both this and repeated
/// parameter names are logged as warnings.
///
/// # Errors
///
/// Returns `AppError::ValidationError` if strict mode is on and any request is invalid.
pub fn generate_document(
    config: &GeneratorConfig,
    requests: &[GatewayIntegrationRequest],
) -> Result<TerraformDocument, AppError> {
    let mut document = TerraformDocument::new();

    for request in requests {
        for key in duplicate_parameters(request) {
            warn!(
                integration = %request.id,
                parameter = %key,
                "Parameter mapped more than once, keeping the last mapping"
            );
        }

        let descriptor = generate_checked(config, request)?;
        let unique_id = descriptor.unique_id.clone();
        if document.insert_integration(descriptor).is_some() {
            warn!(unique_id = %unique_id, "Duplicate integration id, replacing earlier resource");
        }
    }

    debug!(
        integrations = document.integration_count(),
        "Generated gateway integration document"
    );
    Ok(document)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request(id: &str, lambda_name: &str) -> GatewayIntegrationRequest {
        GatewayIntegrationRequest {
            id: id.to_string(),
            gateway_resource_id: format!("{id}_res"),
            lambda_name: lambda_name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_document_keeps_request_order() {
        let document = generate_document(
            &GeneratorConfig::new("api", "svc"),
            &[request("b", "second"), request("a", "first")],
        )
        .unwrap();

        let ids: Vec<&str> = document.resource["aws_api_gateway_integration"]
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(ids, ["api-b", "api-a"]);
    }

    #[test]
    fn test_generate_document_duplicate_id_replaces() {
        let document = generate_document(
            &GeneratorConfig::new("api", "svc"),
            &[request("a", "first"), request("a", "second")],
        )
        .unwrap();

        assert_eq!(document.integration_count(), 1);
        assert!(
            document
                .integration("api-a")
                .unwrap()
                .uri
                .contains("svc-second.arn}")
        );
    }

    #[test]
    fn test_generate_document_strict_stops_on_invalid_request() {
        let config = GeneratorConfig::new("api", "svc").with_strict(true);
        let result = generate_document(&config, &[request("a", "first"), request("b", "")]);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_generate_document_empty() {
        let document = generate_document(&GeneratorConfig::new("api", "svc"), &[]).unwrap();
        assert_eq!(document.integration_count(), 0);
        assert_eq!(
            serde_json::to_string(&document).unwrap(),
            r#"{"resource":{}}"#
        );
    }
}
