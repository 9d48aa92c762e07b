//! Parameter schema declaration
//!
//! The hosting platform queries this schema, renders an input form from it,
//! and validates user input against it before calling construct.

use serde_json::{json, Value};
use std::sync::OnceLock;

/// JSON schema for the constructor's configuration fields.
///
/// Note: the standard `minimum`/`maximum` keywords bound `decimals`; a
/// schema validator ignores non-standard spellings, which would leave the
/// range unenforced.
pub fn params_schema() -> &'static Value {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        json!({
            "type": "object",
            "required": ["ticker", "decimals"],
            "additionalProperties": false,

            "properties": {
                "ticker": {
                    "title": "Token ticker",
                    "description": "Only uppercase symbols (with length 3-7)",
                    "type": "string",
                    "minLength": 3,
                    "maxLength": 7,
                    "pattern": "^[A-Z][A-Z0-5]+$"
                },

                "decimals": {
                    "title": "Decimals",
                    "description": "Token decimals (0..8)",
                    "type": "integer",
                    "minimum": 0,
                    "maximum": 8
                }
            }
        })
    })
}

/// Presentation-layer hints for the form renderer. Empty: the default
/// widgets are adequate for a string and an integer field.
pub fn ui_schema() -> &'static Value {
    static UI: OnceLock<Value> = OnceLock::new();
    UI.get_or_init(|| json!({}))
}
