use serde::{Deserialize, Serialize};

use crate::ordered::OrderedMap;
use crate::rules::{parse_map, parse_rules, MapSource, OutcomeMap, RuleSet, RuleSource};
use crate::scorers::scorer_for;
use crate::tokenizer::PreparedQuestion;
use crate::trace::{CoScore, KeywordHit};

/// Best score before any CO has been compared.
pub const NO_SCORE: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub question: String,
    pub tokens: Vec<String>,
    pub scores: OrderedMap<u32>,
    #[serde(rename = "matchedKeywords")]
    pub matched_keywords: OrderedMap<Vec<KeywordHit>>,
    #[serde(rename = "bestCO")]
    pub best_co: Option<String>,
    #[serde(rename = "bestScore")]
    pub best_score: i64,
    pub pos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub co: Option<String>,
    pub score: i64,
}

/// Score every CO in rule order. Each keyword counts at most once.
pub fn score_rules(question: &PreparedQuestion, rules: &RuleSet) -> Vec<CoScore> {
    rules
        .iter()
        .map(|(co, keywords)| {
            let matched: Vec<KeywordHit> = keywords
                .iter()
                .filter_map(|kw| {
                    let scorer = scorer_for(kw);
                    scorer
                        .matches(kw, question)
                        .then(|| KeywordHit::new(kw.as_str(), scorer.kind()))
                })
                .collect();
            CoScore {
                co: co.to_string(),
                score: matched.len() as u32,
                matched,
            }
        })
        .collect()
}

/// Pick the CO with the strictly highest score; the first one seen wins ties.
///
/// A best score of zero or less means no CO is selected, though the score
/// itself is still reported.
pub fn select_best(scores: &[CoScore]) -> Selection {
    let mut best_co: Option<&str> = None;
    let mut best_score = NO_SCORE;
    for entry in scores {
        let score = i64::from(entry.score);
        if score > best_score {
            best_score = score;
            best_co = Some(entry.co.as_str());
        }
    }
    if best_score <= 0 {
        best_co = None;
    }
    Selection {
        co: best_co.map(str::to_string),
        score: best_score,
    }
}

pub fn classify_from_parsed(
    question: &str,
    rules: &RuleSet,
    outcomes: &OutcomeMap,
) -> ClassificationResult {
    let prepared = PreparedQuestion::new(question);
    let co_scores = score_rules(&prepared, rules);
    let selection = select_best(&co_scores);

    let pos = selection
        .co
        .as_deref()
        .and_then(|co| outcomes.get(co))
        .cloned()
        .unwrap_or_default();

    tracing::debug!(
        best_co = selection.co.as_deref().unwrap_or("none"),
        best_score = selection.score,
        tokens = prepared.tokens.len(),
        rules = rules.len(),
        "classified question"
    );

    let mut scores = OrderedMap::new();
    let mut matched_keywords = OrderedMap::new();
    for entry in co_scores {
        scores.insert(entry.co.clone(), entry.score);
        matched_keywords.insert(entry.co, entry.matched);
    }

    ClassificationResult {
        question: question.to_string(),
        tokens: prepared.tokens,
        scores,
        matched_keywords,
        best_co: selection.co,
        best_score: selection.score,
        pos,
    }
}

pub fn classify_from_text(question: &str, rules_text: &str, map_text: &str) -> ClassificationResult {
    classify_from_parsed(question, &parse_rules(rules_text), &parse_map(map_text))
}

pub fn classify(question: &str, rules: RuleSource, outcomes: MapSource) -> ClassificationResult {
    classify_from_parsed(question, &rules.into_rules(), &outcomes.into_map())
}
