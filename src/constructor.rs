//! Host boundary - the constructor operations the platform drives
//!
//! The hosting platform calls, in sequence, the version query, the schema
//! query, the construct operation, and the post-construct metadata query.
//! Every operation is a pure, stateless, single-shot call.

use miette::Diagnostic;
use serde::Serialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::metadata::{function_metadata, FunctionMetadata};
use crate::render::{render, RenderResult, TokenConfig};
use crate::schema::validator::SchemaCompileError;
use crate::schema::{params_schema, ui_schema, FieldsValidator, ValidationError};

/// Protocol revision of the constructor API this plugin speaks
pub const CONSTRUCTOR_API_VERSION: u32 = 2;

/// Target chain for the generated contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Blockchain {
    Eos,
}

/// Static capability descriptor returned by the version query
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub blockchain: Blockchain,
    pub version: u32,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            blockchain: Blockchain::Eos,
            version: CONSTRUCTOR_API_VERSION,
        }
    }
}

/// Reply payload for the schema query
#[derive(Debug, Clone, Serialize)]
pub struct ParamsInfo {
    pub schema: &'static JsonValue,
    pub ui_schema: &'static JsonValue,
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConstructorError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Schema(#[from] SchemaCompileError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidFields(#[from] ValidationError),

    #[error("Constructor fields have the wrong shape: {0}")]
    #[diagnostic(code(stc::constructor::fields_shape))]
    FieldsShape(#[from] serde_json::Error),
}

/// Boundary contract with the hosting platform.
///
/// The platform owns all I/O; implementors only compute reply payloads.
pub trait ConstructorInstance {
    /// Static capability descriptor
    fn get_version(&self) -> VersionInfo;

    /// Parameter schema plus presentation hints; the platform renders a
    /// form from this and validates input before calling construct
    fn get_params(&self) -> ParamsInfo;

    /// Produce the contract source for the given fields
    fn construct(&self, fields: &JsonValue) -> Result<RenderResult, ConstructorError>;

    /// UI metadata for the deployed contract's callable functions.
    /// `fields` and `abi` are part of the platform call signature but do
    /// not influence the fixed reply.
    fn post_construct(&self, fields: &JsonValue, abi: &JsonValue) -> FunctionMetadata;
}

/// The EOS simple-token constructor
#[derive(Debug, Default)]
pub struct SimpleToken;

impl ConstructorInstance for SimpleToken {
    fn get_version(&self) -> VersionInfo {
        VersionInfo::current()
    }

    fn get_params(&self) -> ParamsInfo {
        ParamsInfo {
            schema: params_schema(),
            ui_schema: ui_schema(),
        }
    }

    fn construct(&self, fields: &JsonValue) -> Result<RenderResult, ConstructorError> {
        // The host validates form input before calling in, but a bypassed
        // validator must not be able to inject template-breaking values.
        FieldsValidator::new()?.validate(fields)?;

        let config: TokenConfig = serde_json::from_value(fields.clone())?;
        Ok(render(&config))
    }

    fn post_construct(&self, _fields: &JsonValue, _abi: &JsonValue) -> FunctionMetadata {
        function_metadata()
    }
}

/// Wire envelope the platform expects around every reply
#[derive(Debug, Serialize)]
pub struct HostReply<T: Serialize> {
    result: &'static str,

    #[serde(flatten)]
    payload: T,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    error: String,
}

impl<T: Serialize> HostReply<T> {
    pub fn success(payload: T) -> Self {
        Self {
            result: "success",
            payload,
        }
    }
}

impl HostReply<ErrorBody> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            result: "error",
            payload: ErrorBody {
                error: message.into(),
            },
        }
    }
}
