use tracing::debug;

use crate::error::PuzzleError;
use crate::level::Features;
use crate::puzzle::assigner;
use crate::puzzle::context::ContextBuilder;
use crate::puzzle::result::PuzzleResult;
use crate::puzzle::scanner::CandidateScanner;
use crate::puzzle::symbol::{Symbol, SymbolExpression};
use crate::rng::{PuzzleRng, RandomSource};
use crate::text::instructions;

/// Marker substituted for the removed word in partial sentences.
pub const BLANK_MARKER: &str = "_____";

/// Builder for one puzzle. The same builder can produce many puzzles; the
/// default-pangram split is cached across builds.
pub struct Puzzle {
    seed: u32,
    level: u32,
    input_words: Vec<String>,
    pangrams: Option<Vec<String>>,
    context_builder: ContextBuilder,
}

impl Puzzle {
    pub fn new(seed: u32, level: u32) -> Self {
        Self {
            seed,
            level,
            input_words: Vec::new(),
            pangrams: None,
            context_builder: ContextBuilder::new(),
        }
    }

    /// Supplementary distractor words (e.g. from the dictionary).
    pub fn input_words(mut self, words: Vec<String>) -> Self {
        self.input_words = words;
        self
    }

    /// Explicit pangram list. Without this the built-in defaults are used;
    /// an explicitly empty list fails the build.
    pub fn pangrams(mut self, pangrams: Vec<String>) -> Self {
        self.pangrams = Some(pangrams);
        self
    }

    pub fn build(&self) -> Result<PuzzleResult, PuzzleError> {
        let mut rng = PuzzleRng::from_seed(self.seed)?;
        self.build_with(&mut rng)
    }

    /// Build against a caller-supplied random source. The order and count of
    /// draws here is the determinism contract; do not reorder stages.
    pub fn build_with<R: RandomSource>(&self, rng: &mut R) -> Result<PuzzleResult, PuzzleError> {
        let features = Features::decode(self.level)?;

        let context = self.context_builder.build(
            rng,
            &features,
            &self.input_words,
            self.pangrams.as_deref(),
        )?;
        debug!(
            chosen_words = context.chosen.len(),
            distractors = context.other_words.len(),
            min_count = context.min_count,
            "assembled puzzle context"
        );

        let flat = context.total_words();
        let scan = CandidateScanner::new(&context, &features, rng).scan()?;
        debug!(
            symbols = scan.total_symbols.len(),
            positions = scan.words_seqs.len(),
            "scanned candidate symbols"
        );

        let assignment = assigner::assign(rng, &features, scan.total_symbols, &flat)?;

        let tokenized_words: Vec<Symbol> = scan
            .words_seqs
            .iter()
            .map(|seq| {
                assignment
                    .token_map
                    .get(seq.text())
                    .cloned()
                    .ok_or_else(|| PuzzleError::MissingToken(seq.text().to_string()))
            })
            .collect::<Result<_, _>>()?;

        let removal_index = pick_removal_index(rng, tokenized_words.len(), context.min_count);
        let correct_answer = tokenized_words[removal_index].text().to_string();
        let real_answer = scan.words_seqs[removal_index].text().to_string();

        let expression = SymbolExpression::pick(rng, features.indirect_encoding);
        debug!(removal_index, ?expression, "selected removal and encoding");

        let mut partial_words: Vec<String> = scan
            .words_seqs
            .iter()
            .map(|seq| seq.text().to_string())
            .collect();
        partial_words[removal_index] = BLANK_MARKER.to_string();

        let encoded_words: Vec<String> = tokenized_words
            .iter()
            .map(|token| expression.encode(token.parts()))
            .collect();

        let mut partial_tokenized_words = encoded_words.clone();
        let removed = &tokenized_words[removal_index];
        partial_tokenized_words[removal_index] =
            if features.partial_reasoning && removed.len() == 2 && rng.coin() {
                // Keep the second element's encoded form as a hint.
                format!("{BLANK_MARKER} {}", expression.encode_word(&removed.parts()[1]))
            } else {
                BLANK_MARKER.to_string()
            };

        let separator = sentence_separator(&features, &expression);
        let tokenized_sentence = encoded_words.join(separator);
        let partial_tokenized_sentence = partial_tokenized_words.join(separator);

        let instructions = if features.multi_token == features.multi_input
            && features.encode_instructions
        {
            instructions::encode(instructions::DEFAULT_INSTRUCTIONS, &assignment.token_map)?
        } else {
            instructions::plain()
        };

        let mut mapping_pairs: Vec<(String, String)> = assignment
            .real_map
            .iter()
            .map(|(token, real)| (token.clone(), real.text().to_string()))
            .collect();
        if features.mapping_order {
            mapping_pairs.sort_by(|a, b| a.1.cmp(&b.1));
        }

        Ok(PuzzleResult {
            level: self.level,
            features,
            symbol_expression: expression,
            token_map: assignment.token_map,
            real_map: assignment.real_map,
            chosen_sentence: context.chosen.join(" "),
            chosen_words: context.chosen,
            words_seqs: scan.words_seqs,
            tokenized_words,
            partial_words,
            partial_tokenized_words,
            tokenized_sentence,
            partial_tokenized_sentence,
            removal_index,
            correct_answer,
            real_answer,
            mapping_pairs,
            instructions,
        })
    }
}

/// Removal-index policy: draw uniformly over sentence positions, then, when
/// the draw lands beyond the shortest sentence's range, a 2-of-3 coin may
/// resample within that range. Keeps the blanked position comparable across
/// sentences of different lengths; the asymmetry is intentional and must not
/// be "simplified".
fn pick_removal_index<R: RandomSource>(rng: &mut R, positions: usize, min_count: usize) -> usize {
    let total_position = rng.draw(positions - 1);
    let min_index = min_count - 1;
    if total_position > min_index && rng.draw(2) > 0 {
        rng.draw(min_index)
    } else {
        total_position
    }
}

/// Words join with a single space, or nothing when the no-spaces feature is
/// set. Binary expressions use internal spaces and must stay word-delimited,
/// so they force the space back on.
fn sentence_separator(features: &Features, expression: &SymbolExpression) -> &'static str {
    if features.no_sentence_spaces && !expression.is_binary() {
        ""
    } else {
        " "
    }
}
