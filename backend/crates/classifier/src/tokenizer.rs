use std::collections::HashSet;

/// Split text into lowercase `[a-z0-9]` word tokens.
///
/// Every other non-whitespace character becomes a word boundary, so
/// `"top-down"` yields `["top", "down"]`. Duplicates and order are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// A question prepared for keyword matching.
#[derive(Debug, Clone)]
pub struct PreparedQuestion {
    /// Raw question lowercased, punctuation intact. Phrases match against this.
    pub lowered: String,
    pub tokens: Vec<String>,
    token_set: HashSet<String>,
}

impl PreparedQuestion {
    pub fn new(question: &str) -> Self {
        let tokens = tokenize(question);
        let token_set = tokens.iter().cloned().collect();
        Self {
            lowered: question.to_lowercase(),
            tokens,
            token_set,
        }
    }

    pub fn has_token(&self, word: &str) -> bool {
        self.token_set.contains(word)
    }

    pub fn contains_phrase(&self, phrase: &str) -> bool {
        self.lowered.contains(phrase)
    }

    pub fn unique_token_count(&self) -> usize {
        self.token_set.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_whitespace() {
        assert_eq!(
            tokenize("Explain Gradient  descent\tand\nweights"),
            vec!["explain", "gradient", "descent", "and", "weights"]
        );
    }

    #[test]
    fn punctuation_becomes_boundary() {
        assert_eq!(
            tokenize("What's a top-down, O(n) sort?"),
            vec!["what", "s", "a", "top", "down", "o", "n", "sort"]
        );
    }

    #[test]
    fn punctuation_runs_collapse() {
        assert_eq!(tokenize("loop!!!...array"), vec!["loop", "array"]);
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(tokenize("CO4 uses 3 layers"), vec!["co4", "uses", "3", "layers"]);
    }

    #[test]
    fn non_ascii_letters_are_stripped() {
        assert_eq!(tokenize("naïve café"), vec!["na", "ve", "caf"]);
    }

    #[test]
    fn empty_and_symbol_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ?!  -- ").is_empty());
    }

    #[test]
    fn duplicates_kept_in_order() {
        assert_eq!(tokenize("sort then sort"), vec!["sort", "then", "sort"]);
    }

    #[test]
    fn prepared_question_dedupes_token_set() {
        let q = PreparedQuestion::new("Sort, then SORT again");
        assert_eq!(q.tokens.len(), 4);
        assert_eq!(q.unique_token_count(), 3);
        assert!(q.has_token("sort"));
        assert!(!q.has_token("SORT"));
    }

    #[test]
    fn phrase_lookup_uses_raw_lowercased_text() {
        let q = PreparedQuestion::new("Write a Unit-Test for the linked list.");
        assert!(q.contains_phrase("linked list"));
        assert!(!q.contains_phrase("unit test"));
        assert!(q.contains_phrase("unit-test"));
    }
}
