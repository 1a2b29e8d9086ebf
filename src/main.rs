use gateway_integration_generator::config::GeneratorConfig;
use gateway_integration_generator::handler::function_handler;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Use Lambda runtime's built-in tracing subscriber for CloudWatch Logs
    lambda_runtime::tracing::init_default_subscriber();

    let config = GeneratorConfig::from_env()?;
    let config = &config;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(event, config).await
    }))
    .await
}
