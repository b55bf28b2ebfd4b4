//! Settings DSL parser.
//!
//! Converts the one-line field description typed by the user into an ordered
//! sequence of [`FieldDescriptor`]s. The grammar is a compact three-level
//! delimiter scheme:
//!
//! ```text
//! input    := field (';' field)*
//! field    := title [',' key [',' widget [',' options]]]
//! options  := option ('|' option)*
//! option   := label [',' value]
//! ```
//!
//! Full-width punctuation (`，`, `；`, `｜`) is accepted wherever its ASCII
//! counterpart is — the line is typed freehand, often under an IME.
//!
//! The parser is total: malformed input degrades to empty-string attributes,
//! never an error.

use serde::{Deserialize, Serialize};

/// Separates whole field definitions.
const FIELD_SEPARATORS: &[char] = &[';', '；'];

/// Separates the segments inside one field definition.
const SEGMENT_SEPARATORS: &[char] = &[',', '，'];

/// Separates enumerated option entries.
const OPTION_SEPARATORS: &[char] = &['|', '｜'];

/// One parsed form/table field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Display label.
    pub title: String,

    /// Identifier / data-binding key.
    pub key: String,

    /// UI control hint; empty when the user supplied none.
    pub widget: String,

    /// Enumerated choices. `None` unless an options segment was given;
    /// when `Some`, never empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
}

/// A single enumerated choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: OptionValue,
}

/// The value bound to an option entry.
///
/// When the user gives only a label, the value defaults to the entry's
/// zero-based position in the options sequence; an explicit value is kept
/// verbatim as text. Serialized untagged, so a defaulted value renders as a
/// number and an explicit one as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Index(usize),
    Text(String),
}

/// Parse one raw settings line into ordered field descriptors.
///
/// Total over all inputs: blank or missing segments come back as empty
/// strings, and field order matches input order.
pub fn parse_settings(raw: &str) -> Vec<FieldDescriptor> {
    raw.split(FIELD_SEPARATORS).map(parse_field).collect()
}

fn parse_field(chunk: &str) -> FieldDescriptor {
    let segments: Vec<&str> = chunk.split(SEGMENT_SEPARATORS).collect();

    // Option entries may themselves contain segment separators, so the tail
    // past the widget is rejoined before the option split.
    let options_source = if segments.len() > 3 {
        segments[3..].join(",")
    } else {
        String::new()
    };

    FieldDescriptor {
        title: segment(&segments, 0),
        key: segment(&segments, 1),
        widget: segment(&segments, 2),
        options: parse_options(&options_source),
    }
}

fn segment(segments: &[&str], index: usize) -> String {
    segments
        .get(index)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn parse_options(source: &str) -> Option<Vec<FieldOption>> {
    if source.trim().is_empty() {
        return None;
    }
    let options = source
        .split(OPTION_SEPARATORS)
        .enumerate()
        .map(|(index, entry)| parse_option(index, entry))
        .collect();
    Some(options)
}

fn parse_option(index: usize, entry: &str) -> FieldOption {
    let mut parts = entry.split(SEGMENT_SEPARATORS);
    let label = parts.next().unwrap_or("").trim().to_string();
    match parts.next() {
        Some(value) => FieldOption {
            label,
            value: OptionValue::Text(value.trim().to_string()),
        },
        None => FieldOption {
            label,
            value: OptionValue::Index(index),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field_without_separators() {
        let fields = parse_settings("  Name ");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].title, "Name");
        assert_eq!(fields[0].key, "");
        assert_eq!(fields[0].widget, "");
        assert!(fields[0].options.is_none());
    }

    #[test]
    fn test_two_fields_with_widget() {
        let fields = parse_settings("Name,name;Age,age,number");
        assert_eq!(fields.len(), 2);

        assert_eq!(fields[0].title, "Name");
        assert_eq!(fields[0].key, "name");
        assert_eq!(fields[0].widget, "");
        assert!(fields[0].options.is_none());

        assert_eq!(fields[1].title, "Age");
        assert_eq!(fields[1].key, "age");
        assert_eq!(fields[1].widget, "number");
        assert!(fields[1].options.is_none());
    }

    #[test]
    fn test_option_value_defaults_to_index_only_when_omitted() {
        let fields = parse_settings("Status,status,select,Active|Inactive,0");
        assert_eq!(fields.len(), 1);

        let options = fields[0].options.as_ref().unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Active");
        assert_eq!(options[0].value, OptionValue::Index(0));
        assert_eq!(options[1].label, "Inactive");
        assert_eq!(options[1].value, OptionValue::Text("0".to_string()));
    }

    #[test]
    fn test_options_source_rejoins_extra_segments() {
        // Segments past the widget belong to the options source even when
        // they contain further commas.
        let fields = parse_settings("Level,level,select,Low,1|High,2");
        let options = fields[0].options.as_ref().unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Low");
        assert_eq!(options[0].value, OptionValue::Text("1".to_string()));
        assert_eq!(options[1].label, "High");
        assert_eq!(options[1].value, OptionValue::Text("2".to_string()));
    }

    #[test]
    fn test_full_width_punctuation_is_equivalent() {
        let ascii = parse_settings("A,a;B,b");
        let full_width = parse_settings("A，a；B，b");
        assert_eq!(ascii, full_width);

        let piped = parse_settings("S,s,select,X|Y");
        let full_piped = parse_settings("S，s，select，X｜Y");
        assert_eq!(piped, full_piped);
    }

    #[test]
    fn test_blank_segments_degrade_to_empty_strings() {
        let fields = parse_settings("Name,,;");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].title, "Name");
        assert_eq!(fields[0].key, "");
        assert_eq!(fields[0].widget, "");
        assert_eq!(fields[1].title, "");
        assert_eq!(fields[1].key, "");
    }

    #[test]
    fn test_empty_input_yields_one_empty_descriptor() {
        let fields = parse_settings("");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].title, "");
        assert_eq!(fields[0].key, "");
        assert!(fields[0].options.is_none());
    }

    #[test]
    fn test_segments_are_trimmed() {
        let fields = parse_settings(" Name , name , text , A | B ");
        assert_eq!(fields[0].title, "Name");
        assert_eq!(fields[0].key, "name");
        assert_eq!(fields[0].widget, "text");

        let options = fields[0].options.as_ref().unwrap();
        assert_eq!(options[0].label, "A");
        assert_eq!(options[1].label, "B");
    }

    #[test]
    fn test_options_never_present_but_empty() {
        // A widget with nothing after it must not produce Some(vec![]).
        let fields = parse_settings("Name,name,text");
        assert!(fields[0].options.is_none());

        let fields = parse_settings("Name,name,text, ");
        assert!(fields[0].options.is_none());
    }

    #[test]
    fn test_descriptor_serializes_untagged_option_values() {
        let fields = parse_settings("Status,status,select,Active|Inactive,0");
        let json = serde_json::to_value(&fields).unwrap();
        let options = &json[0]["options"];
        assert_eq!(options[0]["value"], 0);
        assert_eq!(options[1]["value"], "0");
    }
}
