//! Snippet commands: descriptors, SFSchema and STColumn[] literals.

use ngsmith_core::prelude::*;
use ngsmith_core::{form_schema, parse_settings, table_columns};

use crate::config::Settings;

/// Print the parsed field descriptors as pretty JSON.
pub fn parse(setting: &str) -> Result<()> {
    let fields = parse_settings(setting);
    println!("{}", serde_json::to_string_pretty(&fields)?);
    Ok(())
}

/// Print the SFSchema literal for a settings line.
pub fn schema(setting: &str) -> Result<()> {
    let fields = parse_settings(setting);
    println!("{}", form_schema(&fields));
    Ok(())
}

/// Print the STColumn[] literal for a settings line.
pub fn columns(setting: &str, settings: &Settings) -> Result<()> {
    let fields = parse_settings(setting);
    println!("{}", table_columns(&fields, &settings.table.to_options()));
    Ok(())
}
