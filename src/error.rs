use thiserror::Error;

/// Construction-time validation failures and internal invariant defects.
///
/// Soft verification outcomes ("token not recognized", "sentence broken")
/// are expressed through `Verdict`, never through this type.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("level {0} is out of range (maximum {1})")]
    InvalidLevel(u32, u32),

    #[error("seed {0} is out of range (maximum {1})")]
    InvalidSeed(u32, u32),

    #[error("pangram list is empty")]
    NoPangrams,

    #[error("pangram contains punctuation or digits: {0:?}")]
    PunctuatedPangram(String),

    #[error("shortest sentence has {0} words, need at least {1}")]
    SentenceTooShort(usize, usize),

    #[error("answer candidate is empty")]
    EmptyAnswer,

    #[error("bucket read past the end of the word pool")]
    BucketExhausted,

    #[error("bucket read of {0} words exceeds the 2-word limit")]
    OversizedRead(usize),

    #[error("no token assigned for symbol {0:?}")]
    MissingToken(String),

    #[error("token pool has {available} entries for {needed} symbols")]
    TokenPoolExhausted { needed: usize, available: usize },

    #[error("instruction word {0:?} has no token mapping")]
    UnmappedInstructionWord(String),

    #[error("symbol must hold 1 or 2 non-blank words, got {0:?}")]
    MalformedSymbol(Vec<String>),
}
