pub mod document;
pub mod gateway_integration;

pub use document::generate_document;
pub use gateway_integration::{
    duplicate_parameters, generate_checked, generate_gateway_integration, validate_request,
};
