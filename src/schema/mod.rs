//! Schema system - parameter declaration and validation

pub mod params;
pub mod validator;

pub use params::{params_schema, ui_schema};
pub use validator::{FieldsValidator, SchemaViolation, ValidationError};
