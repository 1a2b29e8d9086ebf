pub mod document;
pub mod error;
pub mod gateway_integration;

pub use document::{INTEGRATION_RESOURCE_TYPE, TerraformDocument};
pub use error::AppError;
pub use gateway_integration::*;
