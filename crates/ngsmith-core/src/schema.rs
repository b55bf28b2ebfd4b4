//! Snippet builders: delon `SFSchema` / `STColumn[]` data literals.
//!
//! Consumes parsed [`FieldDescriptor`]s and emits the TypeScript literal the
//! generated component embeds: JSON with the property keys unquoted and
//! string values double-quoted.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{json, Map, Value};

use crate::settings::{FieldDescriptor, OptionValue};

/// Matches a double-quoted object key together with its colon.
static QUOTED_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)":"#).expect("invalid QUOTED_KEY_REGEX"));

/// Layout of the table snippet's pinned columns.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Title of the trailing operations column.
    pub actions_title: String,
    /// Width of the trailing operations column.
    pub actions_width: u32,
    /// Width of the left-pinned first column.
    pub first_column_width: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            actions_title: "Actions".to_string(),
            actions_width: 200,
            first_column_width: 100,
        }
    }
}

/// Build the `SFSchema` object literal for a form component.
///
/// Each field becomes a property keyed by `key`; `enum` appears only when
/// the field has options and `ui.widget` only when a widget hint was
/// supplied.
pub fn form_schema(fields: &[FieldDescriptor]) -> String {
    let mut properties = Map::new();
    for field in fields {
        let mut property = Map::new();
        property.insert("title".to_string(), Value::String(field.title.clone()));
        if let Some(options) = &field.options {
            let entries: Vec<Value> = options
                .iter()
                .map(|option| json!({ "label": option.label, "value": option_value(&option.value) }))
                .collect();
            property.insert("enum".to_string(), Value::Array(entries));
        }
        if !field.widget.is_empty() {
            property.insert("ui".to_string(), json!({ "widget": field.widget }));
        }
        properties.insert(field.key.clone(), Value::Object(property));
    }

    strip_key_quotes(&json!({ "properties": properties }).to_string())
}

/// Build the `STColumn[]` array literal for a table component.
///
/// One `{ title, index }` entry per field; the first column is pinned left
/// and a trailing operations column is always appended.
pub fn table_columns(fields: &[FieldDescriptor], options: &TableOptions) -> String {
    let mut columns = Vec::with_capacity(fields.len() + 1);
    for (index, field) in fields.iter().enumerate() {
        let mut column = Map::new();
        column.insert("title".to_string(), Value::String(field.title.clone()));
        column.insert("index".to_string(), Value::String(field.key.clone()));
        if index == 0 {
            // The first column stays visible while the table scrolls.
            column.insert("fixed".to_string(), Value::String("left".to_string()));
            column.insert("width".to_string(), json!(options.first_column_width));
        }
        columns.push(Value::Object(column));
    }
    columns.push(json!({
        "fixed": "right",
        "width": options.actions_width,
        "title": options.actions_title,
        "buttons": []
    }));

    strip_key_quotes(&Value::Array(columns).to_string())
}

/// Strip the double quotes from object keys: `"title":` → `title:`.
pub fn strip_key_quotes(json: &str) -> String {
    QUOTED_KEY_REGEX.replace_all(json, "$1:").to_string()
}

fn option_value(value: &OptionValue) -> Value {
    match value {
        OptionValue::Index(index) => json!(index),
        OptionValue::Text(text) => json!(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::parse_settings;

    #[test]
    fn test_form_schema_basic_fields() {
        let fields = parse_settings("Name,name;Age,age,number");
        assert_eq!(
            form_schema(&fields),
            r#"{properties:{name:{title:"Name"},age:{title:"Age",ui:{widget:"number"}}}}"#
        );
    }

    #[test]
    fn test_form_schema_with_options() {
        let fields = parse_settings("Status,status,select,Active|Inactive,0");
        assert_eq!(
            form_schema(&fields),
            r#"{properties:{status:{title:"Status",enum:[{label:"Active",value:0},{label:"Inactive",value:"0"}],ui:{widget:"select"}}}}"#
        );
    }

    #[test]
    fn test_form_schema_empty_input() {
        // An empty key is not a strippable identifier and stays quoted.
        let fields = parse_settings("");
        assert_eq!(form_schema(&fields), r#"{properties:{"":{title:""}}}"#);
    }

    #[test]
    fn test_table_columns_pins_first_and_appends_actions() {
        let fields = parse_settings("Name,name;Age,age");
        assert_eq!(
            table_columns(&fields, &TableOptions::default()),
            r#"[{title:"Name",index:"name",fixed:"left",width:100},{title:"Age",index:"age"},{fixed:"right",width:200,title:"Actions",buttons:[]}]"#
        );
    }

    #[test]
    fn test_table_columns_respects_options() {
        let fields = parse_settings("Name,name");
        let options = TableOptions {
            actions_title: "Ops".to_string(),
            actions_width: 160,
            first_column_width: 80,
        };
        let literal = table_columns(&fields, &options);
        assert!(literal.contains("width:80"));
        assert!(literal.contains(r#"title:"Ops""#));
        assert!(literal.contains("width:160"));
    }

    #[test]
    fn test_strip_key_quotes_leaves_string_values_quoted() {
        assert_eq!(
            strip_key_quotes(r#"{"title":"Name","width":100}"#),
            r#"{title:"Name",width:100}"#
        );
    }
}
