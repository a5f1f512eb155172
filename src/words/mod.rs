pub mod dictionary;
pub mod distractors;
