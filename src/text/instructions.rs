use std::collections::BTreeMap;

use crate::error::PuzzleError;
use crate::puzzle::symbol::Symbol;

/// Static instruction bundle shown with every puzzle. Kept free of
/// punctuation so the lines stay encodable word by word.
pub const DEFAULT_INSTRUCTIONS: &[&str] = &[
    "decode every token with the mapping table",
    "one word of the sentence is hidden",
    "reply with the token that fills the blank",
];

pub fn plain() -> Vec<String> {
    DEFAULT_INSTRUCTIONS.iter().map(|s| s.to_string()).collect()
}

/// Re-encode each instruction line by splitting on whitespace and replacing
/// every word with its token. A word without a mapping is a defect, not a
/// soft failure.
pub fn encode(
    lines: &[&str],
    token_map: &BTreeMap<String, Symbol>,
) -> Result<Vec<String>, PuzzleError> {
    lines
        .iter()
        .map(|line| {
            line.split_whitespace()
                .map(|word| {
                    token_map
                        .get(word)
                        .map(|token| token.text().to_string())
                        .ok_or_else(|| PuzzleError::UnmappedInstructionWord(word.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(|words| words.join(" "))
        })
        .collect()
}
