use serde::{Deserialize, Serialize};

use crate::ordered::OrderedMap;

/// CO identifier → keywords and phrases, in rule order.
pub type RuleSet = OrderedMap<Vec<String>>;

/// CO identifier → PO identifiers.
pub type OutcomeMap = OrderedMap<Vec<String>>;

const SEPARATOR: char = ':';

/// Rules as supplied by a caller: raw `CO: kw, kw` text or an already-parsed set.
///
/// Over JSON a string is treated as text and an object as a parsed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSource {
    Text(String),
    Parsed(RuleSet),
}

/// CO → PO mapping as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MapSource {
    Text(String),
    Parsed(OutcomeMap),
}

impl RuleSource {
    /// Parsed sets are used as given; keywords are not re-lowercased.
    pub fn into_rules(self) -> RuleSet {
        match self {
            Self::Text(text) => parse_rules(&text),
            Self::Parsed(rules) => rules,
        }
    }
}

impl MapSource {
    pub fn into_map(self) -> OutcomeMap {
        match self {
            Self::Text(text) => parse_map(&text),
            Self::Parsed(map) => map,
        }
    }
}

impl Default for RuleSource {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl Default for MapSource {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Parse keyword rules, one `CO: keyword, phrase with spaces, ...` per line.
///
/// Lines without `:` are skipped. Keywords are lowercased. A repeated CO
/// replaces the earlier line's keywords.
pub fn parse_rules(text: &str) -> RuleSet {
    parse_lines(text, |item| item.to_lowercase())
}

/// Parse a CO → PO table, one `CO: PO1, PO2` per line. Identifiers keep their case.
pub fn parse_map(text: &str) -> OutcomeMap {
    parse_lines(text, str::to_string)
}

fn parse_lines(text: &str, normalize: impl Fn(&str) -> String) -> OrderedMap<Vec<String>> {
    let mut out = OrderedMap::new();
    for line in text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        let Some((key, rest)) = line.split_once(SEPARATOR) else {
            tracing::trace!(line, "skipping line without separator");
            continue;
        };
        let items = rest
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(&normalize)
            .collect();
        out.insert(key.trim(), items);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_rules_and_lowercases_keywords() {
        let rules = parse_rules("CO1: Loop, Variable\nCO2: Linked List, STACK");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.get("CO1").unwrap(), &strings(&["loop", "variable"]));
        assert_eq!(
            rules.get("CO2").unwrap(),
            &strings(&["linked list", "stack"])
        );
    }

    #[test]
    fn map_keeps_identifier_case() {
        let map = parse_map("CO1:PO1,po2\nCO5: PO8 ");
        assert_eq!(map.get("CO1").unwrap(), &strings(&["PO1", "po2"]));
        assert_eq!(map.get("CO5").unwrap(), &strings(&["PO8"]));
    }

    #[test]
    fn skips_lines_without_separator() {
        let rules = parse_rules("not a rule\nCO1: loop\n   \n# comment");
        let keys: Vec<&str> = rules.keys().collect();
        assert_eq!(keys, vec!["CO1"]);
    }

    #[test]
    fn empty_input_is_empty_mapping() {
        assert!(parse_rules("").is_empty());
        assert!(parse_map("\n\n  \n").is_empty());
    }

    #[test]
    fn key_is_text_before_first_separator() {
        let rules = parse_rules("CO1: time: complexity, big o");
        assert_eq!(
            rules.get("CO1").unwrap(),
            &strings(&["time: complexity", "big o"])
        );
    }

    #[test]
    fn drops_empty_items_and_allows_empty_list() {
        let rules = parse_rules("CO1: , loop,, ,array,\nCO2:");
        assert_eq!(rules.get("CO1").unwrap(), &strings(&["loop", "array"]));
        assert!(rules.get("CO2").unwrap().is_empty());
    }

    #[test]
    fn later_duplicate_key_wins_in_original_position() {
        let rules = parse_rules("CO1: loop\nCO2: stack\nCO1: array, function");
        let keys: Vec<&str> = rules.keys().collect();
        assert_eq!(keys, vec!["CO1", "CO2"]);
        assert_eq!(rules.get("CO1").unwrap(), &strings(&["array", "function"]));
    }

    #[test]
    fn handles_crlf_line_endings() {
        let map = parse_map("CO1:PO1\r\nCO2:PO2\r\n");
        assert_eq!(map.get("CO1").unwrap(), &strings(&["PO1"]));
        assert_eq!(map.get("CO2").unwrap(), &strings(&["PO2"]));
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "CO1: loop, variable\nbad line\nCO3: design, api";
        assert_eq!(parse_rules(text), parse_rules(text));
        assert_eq!(parse_map(text), parse_map(text));
    }

    #[test]
    fn rule_source_deserializes_text_or_object() {
        let text: RuleSource = serde_json::from_str(r#""CO1: loop""#).unwrap();
        assert_eq!(text, RuleSource::Text("CO1: loop".to_string()));

        let parsed: RuleSource = serde_json::from_str(r#"{"CO1":["Loop"]}"#).unwrap();
        let rules = parsed.into_rules();
        assert_eq!(rules.get("CO1").unwrap(), &strings(&["Loop"]));
    }

    #[test]
    fn map_source_text_is_parsed() {
        let source = MapSource::Text("CO4: PO6, PO7".to_string());
        let map = source.into_map();
        assert_eq!(map.get("CO4").unwrap(), &strings(&["PO6", "PO7"]));
    }
}
