use serde::Serialize;

use crate::error::PuzzleError;

const CHAOS_WORDS: u32 = 1 << 0;
const EXTRA_SENTENCES: u32 = 1 << 1;
const MULTI_TOKEN: u32 = 1 << 2;
const MULTI_INPUT: u32 = 1 << 3;
const MISSING_WORDS: u32 = 1 << 4;
const PAIR_WORD_SECOND: u32 = 1 << 5;
const INDIRECT_ENCODING: u32 = 1 << 6;
const PARTIAL_REASONING: u32 = 1 << 7;
const NO_SENTENCE_SPACES: u32 = 1 << 8;
const MAPPING_ORDER: u32 = 1 << 9;
const ENCODE_INSTRUCTIONS: u32 = 1 << 10;

pub const MAX_LEVEL: u32 = (1 << 11) - 1;

/// The level bitmask decoded once into named booleans. All algorithm code
/// branches on these fields; nothing downstream reads the raw mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Features {
    /// Add case-flipped variants of known words to the distractor pool.
    pub chaos_words: bool,
    /// Include the words of the non-chosen pangrams as an `active` bucket.
    pub extra_sentences: bool,
    /// Tokens may pair two flat-pool words.
    pub multi_token: bool,
    /// Input symbols may group two adjacent words.
    pub multi_input: bool,
    /// Synthesize extra missing-word candidates per scanned symbol.
    pub missing_words: bool,
    /// Place the symbol's own word second (not first) in synthesized pairs.
    pub pair_word_second: bool,
    /// Encode token text through a drawn `SymbolExpression`.
    pub indirect_encoding: bool,
    /// May keep the second element of a blanked pair as a hint.
    pub partial_reasoning: bool,
    /// Join sentence words without separators.
    pub no_sentence_spaces: bool,
    /// Order the mapping listing by real word instead of token text.
    pub mapping_order: bool,
    /// Re-encode the instruction bundle through the token map.
    pub encode_instructions: bool,
}

impl Features {
    pub fn decode(level: u32) -> Result<Self, PuzzleError> {
        if level > MAX_LEVEL {
            return Err(PuzzleError::InvalidLevel(level, MAX_LEVEL));
        }
        Ok(Self {
            chaos_words: level & CHAOS_WORDS != 0,
            extra_sentences: level & EXTRA_SENTENCES != 0,
            multi_token: level & MULTI_TOKEN != 0,
            multi_input: level & MULTI_INPUT != 0,
            missing_words: level & MISSING_WORDS != 0,
            pair_word_second: level & PAIR_WORD_SECOND != 0,
            indirect_encoding: level & INDIRECT_ENCODING != 0,
            partial_reasoning: level & PARTIAL_REASONING != 0,
            no_sentence_spaces: level & NO_SENTENCE_SPACES != 0,
            mapping_order: level & MAPPING_ORDER != 0,
            encode_instructions: level & ENCODE_INSTRUCTIONS != 0,
        })
    }
}
