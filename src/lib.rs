//! STC: SimpleToken Constructor
//!
//! Constructor plugin for an EOS simple token. Declares the parameter
//! schema the hosting platform renders a form from, produces the contract
//! source by template substitution, and describes the contract's callable
//! functions for the platform's UI layer.

pub mod cli;
pub mod constructor;
pub mod metadata;
pub mod render;
pub mod schema;
