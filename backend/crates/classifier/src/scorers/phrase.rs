use crate::tokenizer::PreparedQuestion;
use crate::trace::MatchKind;

use super::KeywordScorer;

/// Substring containment in the lowercased raw question. Not word-boundary
/// aware: `unit test` matches `unit testing`.
pub struct PhraseScorer;

impl KeywordScorer for PhraseScorer {
    fn kind(&self) -> MatchKind {
        MatchKind::Phrase
    }

    fn matches(&self, keyword: &str, question: &PreparedQuestion) -> bool {
        question.contains_phrase(keyword)
    }
}
