//! Command bodies for the stc CLI
//!
//! Each command maps onto one host-facing constructor operation and prints
//! the same reply envelope the hosting platform would receive.

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fs;

use crate::cli::args::{ConstructArgs, SchemaArgs};
use crate::constructor::{ConstructorInstance, HostReply, SimpleToken};

pub fn version() -> Result<()> {
    print_reply(HostReply::success(SimpleToken.get_version()))
}

pub fn schema(args: SchemaArgs) -> Result<()> {
    let params = SimpleToken.get_params();
    if args.ui {
        print_json(params.ui_schema)
    } else {
        print_reply(HostReply::success(params))
    }
}

pub fn construct(args: ConstructArgs) -> Result<()> {
    let text = fs::read_to_string(&args.fields)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read fields file {}", args.fields.display()))?;
    let fields: JsonValue = serde_json::from_str(&text)
        .into_diagnostic()
        .wrap_err_with(|| format!("{} is not valid JSON", args.fields.display()))?;

    let result = SimpleToken.construct(&fields)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &result.source)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} Generated contract '{}' at {}",
                style("✓").green(),
                result.contract_name,
                path.display()
            );
        }
        None => print!("{}", result.source),
    }

    Ok(())
}

pub fn functions() -> Result<()> {
    let meta = SimpleToken.post_construct(&JsonValue::Null, &JsonValue::Null);
    print_reply(HostReply::success(meta))
}

fn print_reply<T: Serialize>(reply: HostReply<T>) -> Result<()> {
    print_json(&reply)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{text}");
    Ok(())
}
