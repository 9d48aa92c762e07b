//! Local validation of constructor fields against the parameter schema
//!
//! The hosting platform validates form input before calling construct, but
//! a bypassed or buggy host could hand over values that break the template
//! syntax. Fields are therefore re-checked at the plugin boundary.

use jsonschema::{validator_for, ValidationError as JsonSchemaError, Validator as JsonValidator};
use miette::Diagnostic;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::schema::params_schema;

/// Validation error aggregating every violation found in the fields
#[derive(Debug, Error, Diagnostic)]
#[error("Field validation failed: {summary}")]
#[diagnostic(code(stc::schema::validation_error))]
pub struct ValidationError {
    summary: String,

    #[related]
    violations: Vec<SchemaViolation>,
}

/// A single schema violation
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct SchemaViolation {
    message: String,

    #[help]
    help: Option<String>,
}

impl SchemaViolation {
    pub fn new(message: String, help: Option<String>) -> Self {
        Self { message, help }
    }
}

impl ValidationError {
    pub fn new(violations: Vec<SchemaViolation>) -> Self {
        let count = violations.len();
        let summary = if count == 1 {
            "1 error".to_string()
        } else {
            format!("{} errors", count)
        };
        Self {
            summary,
            violations,
        }
    }

    /// Get the number of violations
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}

/// Fields validator with a compiled parameter schema
pub struct FieldsValidator {
    compiled: JsonValidator,
}

#[derive(Debug, Error, Diagnostic)]
#[error("Parameter schema failed to compile: {0}")]
#[diagnostic(code(stc::schema::compile_error))]
pub struct SchemaCompileError(String);

impl FieldsValidator {
    /// Compile the parameter schema into a validator
    pub fn new() -> Result<Self, SchemaCompileError> {
        let compiled =
            validator_for(params_schema()).map_err(|e| SchemaCompileError(e.to_string()))?;
        Ok(Self { compiled })
    }

    /// Validate constructor fields, collecting all violations
    pub fn validate(&self, fields: &JsonValue) -> Result<(), ValidationError> {
        let violations: Vec<SchemaViolation> = self
            .compiled
            .iter_errors(fields)
            .map(|e| error_to_violation(&e))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }
}

/// Convert a JSON Schema validation error to our violation format
fn error_to_violation(error: &JsonSchemaError) -> SchemaViolation {
    let message = format_schema_error(error);
    let help = generate_help_message(error);
    SchemaViolation::new(message, help)
}

/// Format a JSON Schema error into a user-friendly message
fn format_schema_error(error: &JsonSchemaError) -> String {
    let path = if error.instance_path.as_str().is_empty() {
        "document root".to_string()
    } else {
        format!("'{}'", error.instance_path)
    };

    match &error.kind {
        jsonschema::error::ValidationErrorKind::Required { property } => {
            let prop_str = property
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_else(|| property.to_string());
            format!("Missing required field: {} at {}", prop_str, path)
        }
        jsonschema::error::ValidationErrorKind::Type { kind } => {
            format!("Wrong type at {}: expected {:?}", path, kind)
        }
        jsonschema::error::ValidationErrorKind::Pattern { pattern } => {
            format!("Value at {} doesn't match pattern: {}", path, pattern)
        }
        jsonschema::error::ValidationErrorKind::MinLength { limit } => {
            format!("Value at {} is too short: minimum {} characters", path, limit)
        }
        jsonschema::error::ValidationErrorKind::MaxLength { limit } => {
            format!("Value at {} is too long: maximum {} characters", path, limit)
        }
        jsonschema::error::ValidationErrorKind::Minimum { limit } => {
            format!("Value at {} is too small: minimum {}", path, limit)
        }
        jsonschema::error::ValidationErrorKind::Maximum { limit } => {
            format!("Value at {} is too large: maximum {}", path, limit)
        }
        jsonschema::error::ValidationErrorKind::AdditionalProperties { unexpected } => {
            format!("Unknown field(s) at {}: {}", path, unexpected.join(", "))
        }
        _ => {
            format!("Validation error at {}: {}", path, error)
        }
    }
}

/// Generate a help message with suggestions for fixing the error
fn generate_help_message(error: &JsonSchemaError) -> Option<String> {
    match &error.kind {
        jsonschema::error::ValidationErrorKind::Required { property } => {
            let prop_str = property
                .as_str()
                .map(|s| s.to_string())
                .unwrap_or_else(|| property.to_string());
            Some(format!("Add the '{}' field to your fields file", prop_str))
        }
        jsonschema::error::ValidationErrorKind::Pattern { pattern } => {
            if pattern.contains("[A-Z]") {
                Some("Ticker format: 3-7 uppercase letters, digits 0-5 allowed after the first character, e.g. ABC or TOK42".to_string())
            } else {
                None
            }
        }
        jsonschema::error::ValidationErrorKind::Type { kind } => {
            Some(format!("Expected value of type: {:?}", kind))
        }
        jsonschema::error::ValidationErrorKind::Minimum { .. }
        | jsonschema::error::ValidationErrorKind::Maximum { .. } => {
            Some("Decimals must be an integer between 0 and 8".to_string())
        }
        jsonschema::error::ValidationErrorKind::AdditionalProperties { unexpected } => {
            if unexpected.len() == 1 {
                Some(format!("Remove the '{}' field or check spelling", unexpected[0]))
            } else {
                Some("Remove unknown fields or check spelling".to_string())
            }
        }
        _ => None,
    }
}
