pub mod phrase;
pub mod word;

use crate::tokenizer::PreparedQuestion;
use crate::trace::MatchKind;

use phrase::PhraseScorer;
use word::WordScorer;

pub trait KeywordScorer {
    fn kind(&self) -> MatchKind;
    fn matches(&self, keyword: &str, question: &PreparedQuestion) -> bool;
}

/// Keywords containing a space are phrases; everything else is a single word.
pub fn scorer_for(keyword: &str) -> &'static dyn KeywordScorer {
    if keyword.contains(' ') {
        &PhraseScorer
    } else {
        &WordScorer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_phrase_scorer_for_spaced_keywords() {
        assert_eq!(scorer_for("linked list").kind(), MatchKind::Phrase);
        assert_eq!(scorer_for(" tree").kind(), MatchKind::Phrase);
    }

    #[test]
    fn picks_word_scorer_otherwise() {
        assert_eq!(scorer_for("stack").kind(), MatchKind::Word);
        assert_eq!(scorer_for("o(n)").kind(), MatchKind::Word);
        assert_eq!(scorer_for("tab\tseparated").kind(), MatchKind::Word);
    }
}
