//! Contract source rendering by template substitution
//!
//! The template is an opaque EOS/C++ payload carrying two placeholder
//! tokens. Rendering is unconditional literal replacement: the fields are
//! schema-checked at the plugin boundary, not here, so the same config
//! always yields byte-identical source.

use serde::{Deserialize, Serialize};

/// Contract source template embedded at compile time
pub const CONTRACT_TEMPLATE: &str = include_str!("../templates/simpletoken.cpp");

/// Name the platform compiles the generated contract under
pub const CONTRACT_NAME: &str = "simpletoken";

const DECIMALS_PLACEHOLDER: &str = "%decimals%";
const TICKER_PLACEHOLDER: &str = "%ticker%";

/// Validated constructor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Token ticker, 3-7 uppercase symbols
    pub ticker: String,
    /// Number of fractional digits used to display token quantities, 0..8
    pub decimals: u8,
}

/// Rendered contract source, ownership passes to the caller
#[derive(Debug, Clone, Serialize)]
pub struct RenderResult {
    /// Generated contract source text
    pub source: String,
    /// Fixed contract name
    pub contract_name: String,
}

/// Render the contract source for the given configuration.
///
/// Replaces every occurrence of the two placeholders with the literal
/// string forms of `decimals` and `ticker`. No escaping.
pub fn render(config: &TokenConfig) -> RenderResult {
    let source = CONTRACT_TEMPLATE
        .replace(DECIMALS_PLACEHOLDER, &config.decimals.to_string())
        .replace(TICKER_PLACEHOLDER, &config.ticker);

    RenderResult {
        source,
        contract_name: CONTRACT_NAME.to_string(),
    }
}
