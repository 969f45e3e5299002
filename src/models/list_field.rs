use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A list-valued movie attribute (genre, keywords, cast) as the backend sends it.
///
/// Depending on how the record was stored, the backend returns either a real
/// JSON array or a string holding a serialized list, often written with
/// single quotes (`"['Action', 'Drama']"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ListField {
    Text(String),
    List(Vec<String>),
}

/// Outcome of interpreting a [`ListField`] as a list
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// A structured list, or text that parsed to one
    Parsed(Vec<String>),
    /// Text that parsed, but not to a list
    NotAList,
    /// Text that could not be parsed at all
    Malformed,
}

impl ListField {
    /// Interprets the field as a list of labels.
    ///
    /// Text is parsed as JSON after normalizing single quotes to double quotes.
    pub fn resolve(&self) -> Resolved {
        match self {
            ListField::List(items) => Resolved::Parsed(items.clone()),
            ListField::Text(text) => {
                let normalized = text.replace('\'', "\"");
                match serde_json::from_str::<Value>(&normalized) {
                    Ok(Value::Array(items)) => {
                        Resolved::Parsed(items.iter().map(label_from_value).collect())
                    }
                    Ok(_) => Resolved::NotAList,
                    Err(_) => Resolved::Malformed,
                }
            }
        }
    }

    /// Raw text as received, used when a malformed field is shown verbatim
    pub fn raw(&self) -> String {
        match self {
            ListField::Text(text) => text.clone(),
            ListField::List(items) => items.join(","),
        }
    }

    /// Whether the field carries nothing worth looking at
    pub fn is_blank(&self) -> bool {
        match self {
            ListField::Text(text) => text.is_empty(),
            ListField::List(_) => false,
        }
    }
}

fn label_from_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl<'de> Deserialize<'de> for ListField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => ListField::List(items.iter().map(label_from_value).collect()),
            Value::String(text) => ListField::Text(text),
            other => ListField::Text(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_list_resolves_directly() {
        let field = ListField::List(vec!["Action".to_string(), "Drama".to_string()]);
        assert_eq!(
            field.resolve(),
            Resolved::Parsed(vec!["Action".to_string(), "Drama".to_string()])
        );
    }

    #[test]
    fn test_single_quoted_text_resolves() {
        let field = ListField::Text("['Action', 'Science Fiction']".to_string());
        assert_eq!(
            field.resolve(),
            Resolved::Parsed(vec!["Action".to_string(), "Science Fiction".to_string()])
        );
    }

    #[test]
    fn test_plain_text_is_malformed() {
        let field = ListField::Text("Action".to_string());
        assert_eq!(field.resolve(), Resolved::Malformed);
    }

    #[test]
    fn test_scalar_json_text_is_not_a_list() {
        let field = ListField::Text("42".to_string());
        assert_eq!(field.resolve(), Resolved::NotAList);
    }

    #[test]
    fn test_deserialize_mixed_array() {
        let field: ListField = serde_json::from_str(r#"["Drama", 7, null]"#).unwrap();
        assert_eq!(
            field,
            ListField::List(vec!["Drama".to_string(), "7".to_string(), String::new()])
        );
    }

    #[test]
    fn test_null_entry_in_serialized_text_is_empty() {
        let field = ListField::Text("['Action', null]".to_string());
        assert_eq!(
            field.resolve(),
            Resolved::Parsed(vec!["Action".to_string(), String::new()])
        );
    }

    #[test]
    fn test_deserialize_number_as_text() {
        let field: ListField = serde_json::from_str("12").unwrap();
        assert_eq!(field, ListField::Text("12".to_string()));
    }
}
