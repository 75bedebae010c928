//! Candidate eligibility
//!
//! A scored candidate is dropped from the ranking when it
//! - contains either anchor as a case-insensitive substring (variants and
//!   compounds such as `tropically` for `tropical`, but also `canoeist` for
//!   `canoe`), or
//! - contains the phrase joiner, i.e. it is a multi-token phrase key.
//!
//! Case is folded one character at a time (simple case folding), so a word
//! keeps its length in characters: `İstanbul` folds to `istanbul`, `ſ`
//! matches `s` and `ß` stays `ß`.

use crate::types::PHRASE_JOINER;

#[derive(Clone, Debug)]
pub struct ExclusionFilter {
    word1: String,
    word2: String,
    phrase_joiner: char,
}

impl ExclusionFilter {
    pub fn new(word1: &str, word2: &str) -> Self {
        Self::with_joiner(word1, word2, PHRASE_JOINER)
    }

    pub fn with_joiner(word1: &str, word2: &str, phrase_joiner: char) -> Self {
        Self {
            word1: fold_case(word1),
            word2: fold_case(word2),
            phrase_joiner,
        }
    }

    /// True when `word` may appear in the ranking
    pub fn is_eligible(&self, word: &str) -> bool {
        if word.contains(self.phrase_joiner) {
            return false;
        }
        let folded = fold_case(word);
        !folded.contains(&self.word1) && !folded.contains(&self.word2)
    }
}

fn fold_char(c: char) -> char {
    // 多字符映射（如 ß -> SS）保留原字符
    let mut upper = c.to_uppercase();
    let c = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    c.to_lowercase().next().unwrap_or(c)
}

/// Per-character case fold used for anchor matching
pub fn fold_case(word: &str) -> String {
    word.chars().map(fold_char).collect()
}

/// One-shot form of [`ExclusionFilter::is_eligible`] using the default joiner
pub fn is_eligible(word: &str, word1: &str, word2: &str) -> bool {
    ExclusionFilter::new(word1, word2).is_eligible(word)
}
