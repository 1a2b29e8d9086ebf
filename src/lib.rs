//! Generates Terraform JSON for API Gateway to Lambda proxy integrations.

pub mod config;
pub mod handler;
pub mod models;
pub mod resources;
