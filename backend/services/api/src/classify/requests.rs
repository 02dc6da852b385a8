use copo_classifier::{MapSource, OrderedMap, RuleSource};
use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /api/classify`. Fields stay loosely typed and are coerced
/// on use, so odd shapes degrade to empty tables instead of rejections.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub rules: Option<Value>,
    #[serde(default)]
    pub map: Option<Value>,
    #[serde(default)]
    pub save: Option<Value>,
}

enum Table {
    Text(String),
    Parsed(OrderedMap<Vec<String>>),
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => true,
    }
}

fn item_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// A table entry as a list: arrays keep their items, a lone scalar becomes one item.
fn item_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(item_text).collect(),
        other => item_text(other).into_iter().collect(),
    }
}

/// Strings are table text and objects are parsed tables. An array is read as
/// one line per item; any other scalar is parsed as its text.
fn coerce_table(value: Option<&Value>) -> Table {
    match value {
        None | Some(Value::Null) => Table::Text(String::new()),
        Some(Value::String(s)) => Table::Text(s.clone()),
        Some(Value::Object(entries)) => Table::Parsed(
            entries
                .iter()
                .map(|(co, items)| (co.as_str(), item_list(items)))
                .collect(),
        ),
        Some(Value::Array(lines)) => Table::Text(
            lines
                .iter()
                .filter_map(item_text)
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        Some(other) => Table::Text(other.to_string()),
    }
}

impl ClassifyRequest {
    /// The question as text, or `None` when it is missing or falsy
    /// (`null`, `""`, `false`, `0`). Non-string values become their JSON text.
    pub fn question_text(&self) -> Option<String> {
        let question = self.question.as_ref().filter(|v| is_truthy(v))?;
        item_text(question)
    }

    pub fn rule_source(&self) -> RuleSource {
        match coerce_table(self.rules.as_ref()) {
            Table::Text(text) => RuleSource::Text(text),
            Table::Parsed(rules) => RuleSource::Parsed(rules),
        }
    }

    pub fn map_source(&self) -> MapSource {
        match coerce_table(self.map.as_ref()) {
            Table::Text(text) => MapSource::Text(text),
            Table::Parsed(map) => MapSource::Parsed(map),
        }
    }

    pub fn wants_save(&self) -> bool {
        self.save.as_ref().is_some_and(is_truthy)
    }
}
