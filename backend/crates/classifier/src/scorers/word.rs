use crate::tokenizer::PreparedQuestion;
use crate::trace::MatchKind;

use super::KeywordScorer;

/// Exact token equality; `test` does not match `testing`.
pub struct WordScorer;

impl KeywordScorer for WordScorer {
    fn kind(&self) -> MatchKind {
        MatchKind::Word
    }

    fn matches(&self, keyword: &str, question: &PreparedQuestion) -> bool {
        question.has_token(keyword)
    }
}
