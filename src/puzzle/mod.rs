pub mod assembler;
pub mod assigner;
pub mod buckets;
pub mod context;
pub mod result;
pub mod scanner;
pub mod symbol;

pub use assembler::Puzzle;
pub use result::{PuzzleResult, Verdict};
