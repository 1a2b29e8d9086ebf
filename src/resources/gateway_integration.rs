use indexmap::IndexMap;

use crate::config::GeneratorConfig;
use crate::models::error::AppError;
use crate::models::gateway_integration::{
    GatewayIntegration, GatewayIntegrationRequest, IntegrationDescriptor, Param,
};

/// Method of the API Gateway endpoint
const HTTP_METHOD: &str = "GET";
/// Lambda proxy integrations are always invoked with POST
const INTEGRATION_HTTP_METHOD: &str = "POST";
const INTEGRATION_TYPE: &str = "AWS_PROXY";

const PATH_LOCATION: &str = "path";
const QUERY_STRING_LOCATION: &str = "querystring";

/// Generates the `aws_api_gateway_integration` resource for a Lambda proxy endpoint.
///
/// The result is keyed as `<gateway key>-<id>`. Request parameters are mapped
/// path first, then query string; the mapping is omitted entirely when the
/// request declares no parameters.
///
/// Input is not validated: empty names produce syntactically odd references
/// rather than errors. Use [`generate_checked`] to opt into validation.
///
/// # Examples
///
/// ```
/// use gateway_integration_generator::config::GeneratorConfig;
/// use gateway_integration_generator::models::GatewayIntegrationRequest;
/// use gateway_integration_generator::resources::generate_gateway_integration;
///
/// let config = GeneratorConfig::new("api", "svc");
/// let request = GatewayIntegrationRequest {
///     id: "list-users".into(),
///     gateway_resource_id: "users_res".into(),
///     lambda_name: "listUsers".into(),
///     ..Default::default()
/// };
///
/// let descriptor = generate_gateway_integration(&config, &request);
/// assert_eq!(descriptor.unique_id, "api-list-users");
/// assert!(descriptor.resource.request_parameters.is_none());
/// ```
#[must_use]
pub fn generate_gateway_integration(
    config: &GeneratorConfig,
    request: &GatewayIntegrationRequest,
) -> IntegrationDescriptor {
    IntegrationDescriptor {
        unique_id: format!("{}-{}", config.gateway_key(), request.id),
        resource: generate_resource(config, request),
    }
}

fn generate_resource(
    config: &GeneratorConfig,
    request: &GatewayIntegrationRequest,
) -> GatewayIntegration {
    let mapping = request_parameters(&request.params, &request.query_string_params);

    GatewayIntegration {
        rest_api_id: format!("${{aws_api_gateway_rest_api.{}.id}}", config.gateway_key()),
        resource_id: format!(
            "${{aws_api_gateway_resource.{}.id}}",
            request.gateway_resource_id
        ),
        http_method: HTTP_METHOD.to_string(),
        integration_http_method: INTEGRATION_HTTP_METHOD.to_string(),
        integration_type: INTEGRATION_TYPE.to_string(),
        uri: format!(
            "arn:aws:apigateway:${{local.aws_region}}:lambda:path/2015-03-31/functions/${{aws_lambda_function.{}-{}.arn}}/invocations",
            config.lambda_prefix(),
            request.lambda_name
        ),
        request_parameters: (!mapping.is_empty()).then_some(mapping),
    }
}

/// Builds the integration-side to method-side parameter mapping.
///
/// A repeated key overwrites the earlier value and keeps its first position.
fn request_parameters(
    path_params: &[Param],
    query_params: &[Param],
) -> IndexMap<String, String> {
    let located = path_params
        .iter()
        .map(|param| (PATH_LOCATION, param))
        .chain(
            query_params
                .iter()
                .map(|param| (QUERY_STRING_LOCATION, param)),
        );

    located.fold(IndexMap::new(), |mut mapping, (location, param)| {
        mapping.insert(
            format!("integration.request.{location}.{}", param.name),
            format!("method.request.{location}.{}", param.name),
        );
        mapping
    })
}

/// Rejects requests whose identifiers or parameter names are blank.
///
/// # Errors
///
/// Returns `AppError::ValidationError` naming the first offending field.
pub fn validate_request(request: &GatewayIntegrationRequest) -> Result<(), AppError> {
    let required = [
        ("id", &request.id),
        ("gatewayResourceId", &request.gateway_resource_id),
        ("lambdaName", &request.lambda_name),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(AppError::ValidationError(format!("`{field}` must not be empty")));
    }

    let lists = [
        ("params", &request.params),
        ("queryStringParams", &request.query_string_params),
    ];
    for (field, params) in lists {
        if let Some(index) = params.iter().position(|param| param.name.trim().is_empty()) {
            return Err(AppError::ValidationError(format!(
                "`{field}[{index}].name` must not be empty in integration `{}`",
                request.id
            )));
        }
    }

    Ok(())
}

/// Generates the integration, validating the request first when the
/// configuration is strict.
///
/// # Errors
///
/// Returns `AppError::ValidationError` if strict mode is on and the request is invalid.
pub fn generate_checked(
    config: &GeneratorConfig,
    request: &GatewayIntegrationRequest,
) -> Result<IntegrationDescriptor, AppError> {
    if config.is_strict() {
        validate_request(request)?;
    }
    Ok(generate_gateway_integration(config, request))
}

/// Integration parameter keys that the request maps more than once.
///
/// Only the last mapping for such a key survives in the generated resource.
#[must_use]
pub fn duplicate_parameters(request: &GatewayIntegrationRequest) -> Vec<String> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    let located = request
        .params
        .iter()
        .map(|param| (PATH_LOCATION, param))
        .chain(
            request
                .query_string_params
                .iter()
                .map(|param| (QUERY_STRING_LOCATION, param)),
        );
    for (location, param) in located {
        *counts
            .entry(format!("integration.request.{location}.{}", param.name))
            .or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, _)| key)
        .collect()
}
