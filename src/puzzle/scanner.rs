use std::collections::HashSet;

use crate::error::PuzzleError;
use crate::level::Features;
use crate::puzzle::buckets::BucketReader;
use crate::puzzle::context::{BucketKind, PuzzleContext};
use crate::puzzle::symbol::Symbol;
use crate::rng::RandomSource;

#[derive(Debug)]
pub struct ScanOutput {
    /// Every emitted candidate symbol, in scan order.
    pub total_symbols: Vec<Symbol>,
    /// One symbol per grouped position of the chosen sentence, in sentence
    /// order. Used later to reconstruct the partial and real sentences.
    pub words_seqs: Vec<Symbol>,
}

type CandidateFn<'a, R> =
    fn(&mut CandidateScanner<'a, R>, &Symbol, Option<&str>) -> Result<Vec<Symbol>, PuzzleError>;

/// Walks the bucket reader position by position, grouping words into symbols
/// and emitting candidate symbols for the token domain.
///
/// The candidate strategy is bound once at construction from the
/// missing-words feature; the scan loop itself never branches on it.
pub struct CandidateScanner<'a, R: RandomSource> {
    reader: BucketReader,
    rng: &'a mut R,
    features: Features,
    candidates_for: CandidateFn<'a, R>,
}

impl<'a, R: RandomSource> CandidateScanner<'a, R> {
    pub fn new(context: &PuzzleContext, features: &Features, rng: &'a mut R) -> Self {
        let candidates_for: CandidateFn<'a, R> = if features.missing_words {
            Self::missing_word_candidates
        } else {
            Self::plain_candidates
        };
        Self {
            reader: BucketReader::new(context),
            rng,
            features: *features,
            candidates_for,
        }
    }

    pub fn scan(mut self) -> Result<ScanOutput, PuzzleError> {
        let mut total_symbols = Vec::new();
        let mut words_seqs = Vec::new();
        // Scoped to this scan; deduplication state never leaks across builds.
        let mut used: HashSet<String> = HashSet::new();

        while self.reader.has_current() {
            let take = if self.features.multi_input
                && self.rng.coin()
                && self.reader.peek(1).is_some()
            {
                2
            } else {
                1
            };

            let words = self.reader.read(take)?;
            let symbol = Symbol::new(words)?;
            let peeked = self.reader.peek(take).map(str::to_string);
            let in_chosen = self.reader.is_bucket(BucketKind::Chosen);
            let dedup = in_chosen || self.reader.is_bucket(BucketKind::Active);

            let candidates_for = self.candidates_for;
            let candidates = candidates_for(&mut self, &symbol, peeked.as_deref())?;
            for (rank, candidate) in candidates.into_iter().enumerate() {
                if !dedup {
                    // The `other` bucket is never deduplicated.
                    total_symbols.push(candidate);
                } else if rank == 0 {
                    // The primary candidate is exempt from the used-check.
                    used.insert(candidate.text().to_string());
                    total_symbols.push(candidate);
                } else if used.insert(candidate.text().to_string()) {
                    total_symbols.push(candidate);
                }
            }

            if in_chosen {
                words_seqs.push(symbol);
            }
            self.reader.next(take);
        }

        Ok(ScanOutput {
            total_symbols,
            words_seqs,
        })
    }

    fn plain_candidates(
        _scanner: &mut Self,
        symbol: &Symbol,
        _peeked: Option<&str>,
    ) -> Result<Vec<Symbol>, PuzzleError> {
        Ok(vec![symbol.clone()])
    }

    /// Missing-words strategy: a two-word symbol splits into its constituent
    /// words; a one-word symbol gains two synthesized pairs, each combining
    /// the word with a distinct distractor from the flat pool.
    fn missing_word_candidates(
        scanner: &mut Self,
        symbol: &Symbol,
        peeked: Option<&str>,
    ) -> Result<Vec<Symbol>, PuzzleError> {
        if symbol.len() == 2 {
            return Ok(vec![
                symbol.clone(),
                Symbol::single(symbol.parts()[0].clone()),
                Symbol::single(symbol.parts()[1].clone()),
            ]);
        }

        let max = scanner.reader.flat_len() - 1;
        let mut exclude: Vec<String> = peeked.map(str::to_string).into_iter().collect();

        let first = {
            let refs: Vec<&str> = exclude.iter().map(String::as_str).collect();
            scanner
                .reader
                .rand_not(scanner.rng.draw(max), &refs)
                .to_string()
        };
        exclude.push(first.clone());
        let second = {
            let refs: Vec<&str> = exclude.iter().map(String::as_str).collect();
            scanner
                .reader
                .rand_not(scanner.rng.draw(max), &refs)
                .to_string()
        };

        let word = symbol.parts()[0].clone();
        let pair = |distractor: String| {
            if scanner.features.pair_word_second {
                Symbol::pair(distractor, word.clone())
            } else {
                Symbol::pair(word.clone(), distractor)
            }
        };

        Ok(vec![symbol.clone(), pair(first), pair(second)])
    }
}
