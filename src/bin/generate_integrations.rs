//! Writes a Terraform JSON document of API Gateway integrations.
//!
//! Usage: `generate-integrations [input.json] [output.tf.json]`
//!
//! The input is either a JSON array of integration requests or an object with
//! an `integrations` array. `GATEWAY_KEY` and `LAMBDA_PREFIX` must be set.

use anyhow::{Context, Result};
use gateway_integration_generator::config::GeneratorConfig;
use gateway_integration_generator::models::{DocumentRequest, GatewayIntegrationRequest};
use gateway_integration_generator::resources::generate_document;
use lambda_runtime::tracing::info;
use serde::Deserialize;
use std::fs;

const DEFAULT_INPUT: &str = "integrations.json";
const DEFAULT_OUTPUT: &str = "gateway_integrations.tf.json";

#[derive(Deserialize)]
#[serde(untagged)]
enum Input {
    List(Vec<GatewayIntegrationRequest>),
    Document(DocumentRequest),
}

impl From<Input> for Vec<GatewayIntegrationRequest> {
    fn from(input: Input) -> Self {
        match input {
            Input::List(integrations) | Input::Document(DocumentRequest { integrations }) => {
                integrations
            }
        }
    }
}

fn main() -> Result<()> {
    lambda_runtime::tracing::init_default_subscriber();

    let mut args = std::env::args().skip(1);
    let input_path = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output_path = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let config = GeneratorConfig::from_env()?;

    let content = fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read {input_path}"))?;
    let input: Input = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse integration requests in {input_path}"))?;
    let requests: Vec<GatewayIntegrationRequest> = input.into();

    let document = generate_document(&config, &requests)?;
    fs::write(&output_path, document.to_json_pretty()?)
        .with_context(|| format!("Failed to write {output_path}"))?;

    info!(
        integrations = document.integration_count(),
        output = %output_path,
        "Wrote gateway integrations"
    );
    Ok(())
}
