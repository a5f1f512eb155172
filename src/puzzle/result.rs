use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::Serialize;

use crate::error::PuzzleError;
use crate::level::Features;
use crate::puzzle::symbol::{Symbol, SymbolExpression};
use crate::text::table::SequenceTable;

/// Verification outcome for one candidate answer.
///
/// `exact` means the candidate was the generated answer; `possible` means it
/// decodes to a different real word that still completes the pangram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub exact: bool,
    pub possible: bool,
    pub possible_real: Option<Symbol>,
}

impl Verdict {
    fn exact() -> Self {
        Self {
            exact: true,
            possible: false,
            possible_real: None,
        }
    }

    fn miss() -> Self {
        Self {
            exact: false,
            possible: false,
            possible_real: None,
        }
    }
}

/// Immutable output of one puzzle build.
#[derive(Clone, Debug, Serialize)]
pub struct PuzzleResult {
    pub level: u32,
    pub features: Features,
    pub symbol_expression: SymbolExpression,
    pub token_map: BTreeMap<String, Symbol>,
    pub real_map: BTreeMap<String, Symbol>,
    pub chosen_words: Vec<String>,
    pub chosen_sentence: String,
    /// Grouped symbols of the chosen sentence, in sentence order.
    pub words_seqs: Vec<Symbol>,
    /// Token symbol for each grouped position.
    pub tokenized_words: Vec<Symbol>,
    /// Real sentence with the removed position blanked.
    pub partial_words: Vec<String>,
    /// Encoded token text per position, removed position blanked (possibly
    /// with a retained second-element hint).
    pub partial_tokenized_words: Vec<String>,
    pub tokenized_sentence: String,
    pub partial_tokenized_sentence: String,
    pub removal_index: usize,
    /// Token text the solver is expected to answer with.
    pub correct_answer: String,
    /// Real word (or pair) that was removed.
    pub real_answer: String,
    /// (token text, real text) listing for display.
    pub mapping_pairs: Vec<(String, String)>,
    pub instructions: Vec<String>,
}

impl PuzzleResult {
    /// Verify a candidate token answer.
    ///
    /// An empty candidate is a caller defect and fails hard; every other
    /// unrecognized or non-fitting candidate resolves to a soft miss.
    pub fn answer(&self, candidate: &str) -> Result<Verdict, PuzzleError> {
        if candidate == self.correct_answer {
            return Ok(Verdict::exact());
        }
        if candidate.is_empty() {
            return Err(PuzzleError::EmptyAnswer);
        }

        let Some(decoded) = self.real_map.get(candidate) else {
            return Ok(Verdict::miss());
        };
        // Inverse-map symmetry check: a decodable token whose real side lost
        // its own mapping is treated as unrecognized.
        if !self.token_map.contains_key(decoded.text()) {
            return Ok(Verdict::miss());
        }
        if starts_capitalized(&self.real_answer) != starts_capitalized(decoded.text()) {
            return Ok(Verdict::miss());
        }
        if !self.completes_pangram(decoded.text()) {
            return Ok(Verdict::miss());
        }

        Ok(Verdict {
            exact: false,
            possible: true,
            possible_real: Some(decoded.clone()),
        })
    }

    /// Splice the decoded word into the blanked sentence and test whether
    /// the whole thing still covers the full alphabet.
    fn completes_pangram(&self, decoded: &str) -> bool {
        let mut completed = self.partial_words.clone();
        completed[self.removal_index] = decoded.to_string();
        let letters: HashSet<char> = completed
            .concat()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        letters.len() == 26
    }

    /// Display view: headers are the chosen-sentence symbols, rows the
    /// partial and tokenized forms.
    pub fn sequence_table(&self) -> SequenceTable {
        SequenceTable::new(
            self.words_seqs.iter().map(|s| s.text().to_string()).collect(),
            vec![
                self.partial_words.clone(),
                self.partial_tokenized_words.clone(),
            ],
        )
    }
}

fn starts_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::assembler::BLANK_MARKER;

    /// Hand-built result around "the quick brown fox jumps over the lazy dog"
    /// with "dog" removed. The full sentence is a pangram.
    fn fixture() -> PuzzleResult {
        let words = [
            "the", "quick", "brown", "fox", "jumps", "over", "the", "lazy", "dog",
        ];
        let mut token_map = BTreeMap::new();
        let mut real_map = BTreeMap::new();
        // Identity-ish mapping plus distractor entries used by the tests
        for word in words {
            let token = format!("t{word}");
            token_map.insert(word.to_string(), Symbol::single(token.clone()));
            real_map.insert(token, Symbol::single(word));
        }
        token_map.insert("Dog".to_string(), Symbol::single("tDogX"));
        real_map.insert("tDogX".to_string(), Symbol::single("Dog"));
        token_map.insert("dot".to_string(), Symbol::single("tdot"));
        real_map.insert("tdot".to_string(), Symbol::single("dot"));
        // A token whose real side is missing from the token map
        real_map.insert("orphan".to_string(), Symbol::single("ghost"));

        let words_seqs: Vec<Symbol> = words.iter().map(|w| Symbol::single(*w)).collect();
        let tokenized_words: Vec<Symbol> =
            words.iter().map(|w| Symbol::single(format!("t{w}"))).collect();
        let mut partial_words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        let removal_index = 8;
        partial_words[removal_index] = BLANK_MARKER.to_string();

        PuzzleResult {
            level: 0,
            features: Features::default(),
            symbol_expression: SymbolExpression::None,
            token_map,
            real_map,
            chosen_words: words.iter().map(|w| w.to_string()).collect(),
            chosen_sentence: words.join(" "),
            words_seqs,
            partial_tokenized_words: vec![],
            tokenized_words,
            partial_words,
            tokenized_sentence: String::new(),
            partial_tokenized_sentence: String::new(),
            removal_index,
            correct_answer: "tdog".to_string(),
            real_answer: "dog".to_string(),
            mapping_pairs: vec![],
            instructions: vec![],
        }
    }

    #[test]
    fn exact_answer_wins_immediately() {
        let result = fixture();
        let verdict = result.answer("tdog").unwrap();
        assert!(verdict.exact);
        assert!(!verdict.possible);
    }

    #[test]
    fn empty_answer_is_a_hard_error() {
        let result = fixture();
        assert!(matches!(
            result.answer("").unwrap_err(),
            PuzzleError::EmptyAnswer
        ));
    }

    #[test]
    fn unknown_token_is_a_soft_miss() {
        let result = fixture();
        let verdict = result.answer("nonsense").unwrap();
        assert_eq!(verdict, Verdict::miss());
    }

    #[test]
    fn orphaned_token_fails_the_symmetry_check() {
        let result = fixture();
        assert_eq!(result.answer("orphan").unwrap(), Verdict::miss());
    }

    #[test]
    fn capitalization_mismatch_is_rejected() {
        let result = fixture();
        // "tDogX" decodes to "Dog"; the removed word was lowercase
        assert_eq!(result.answer("tDogX").unwrap(), Verdict::miss());
    }

    #[test]
    fn broken_pangram_completion_is_rejected() {
        let result = fixture();
        // "dot" decodes fine but leaves no "g" in the sentence
        assert_eq!(result.answer("tdot").unwrap(), Verdict::miss());
    }

    #[test]
    fn alternate_completion_is_possible() {
        let mut result = fixture();
        // Second token that also decodes to a pangram-completing word
        result
            .token_map
            .insert("dogs".to_string(), Symbol::single("tdogs"));
        result
            .real_map
            .insert("tdogs".to_string(), Symbol::single("dogs"));
        let verdict = result.answer("tdogs").unwrap();
        assert!(!verdict.exact);
        assert!(verdict.possible);
        assert_eq!(verdict.possible_real.unwrap().text(), "dogs");
    }

    #[test]
    fn sequence_table_uses_chosen_symbols_as_headers() {
        let result = fixture();
        let table = result.sequence_table();
        assert_eq!(table.headers().len(), 9);
        assert_eq!(table.headers()[3], "fox");
    }
}
