//! Static function metadata for the platform's UI layer
//!
//! Describes how the UI should expose the contract's callable actions.
//! Fixed at build time, independent of the constructor configuration and
//! of the compiled ABI the platform hands back after deployment.

use serde::Serialize;
use std::collections::BTreeMap;

/// Human-readable description of a single callable contract function
#[derive(Debug, Clone, Serialize)]
pub struct FunctionSpec {
    pub title: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,

    /// Ordered parameter labels, in the contract function's argument order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputSpec>,
}

/// Label for one function parameter
#[derive(Debug, Clone, Serialize)]
pub struct InputSpec {
    pub title: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// Reply payload for the post-construct metadata query
#[derive(Debug, Clone, Serialize)]
pub struct FunctionMetadata {
    pub function_specs: BTreeMap<&'static str, FunctionSpec>,
    /// Reads surfaced by default in the platform's summary view
    pub dashboard_functions: Vec<&'static str>,
}

/// Build the fixed four-entry function metadata.
pub fn function_metadata() -> FunctionMetadata {
    let mut function_specs = BTreeMap::new();

    function_specs.insert(
        "transfer",
        FunctionSpec {
            title: "Transfer",
            description: Some("Transfer tokens"),
            inputs: vec![
                InputSpec {
                    title: "From",
                    description: Some("Account to transfer tokens from"),
                },
                InputSpec {
                    title: "To",
                    description: Some("Account to transfer tokens"),
                },
                InputSpec {
                    title: "Quantity",
                    description: Some("Tokens quantity in format '123.456 TICKER'"),
                },
            ],
        },
    );

    function_specs.insert(
        "issue",
        FunctionSpec {
            title: "Issue",
            description: Some("Issue new tokens"),
            inputs: vec![
                InputSpec {
                    title: "To",
                    description: Some("Account to issue tokens for"),
                },
                InputSpec {
                    title: "Quantity",
                    description: Some("Tokens quantity in format '123.456 TICKER'"),
                },
            ],
        },
    );

    function_specs.insert(
        "totalSupply",
        FunctionSpec {
            title: "Total supply",
            description: None,
            inputs: Vec::new(),
        },
    );

    function_specs.insert(
        "account",
        FunctionSpec {
            title: "Get balance",
            description: None,
            inputs: vec![InputSpec {
                title: "Account name",
                description: None,
            }],
        },
    );

    FunctionMetadata {
        function_specs,
        dashboard_functions: vec!["totalSupply"],
    }
}
