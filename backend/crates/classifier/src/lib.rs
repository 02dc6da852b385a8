pub mod engine;
pub mod ordered;
pub mod rules;
pub mod scorers;
pub mod tokenizer;
pub mod trace;

pub use engine::{
    classify, classify_from_parsed, classify_from_text, ClassificationResult, Selection,
};
pub use ordered::OrderedMap;
pub use rules::{parse_map, parse_rules, MapSource, OutcomeMap, RuleSet, RuleSource};
pub use tokenizer::tokenize;
pub use trace::{KeywordHit, MatchKind};
