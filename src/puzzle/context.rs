use std::cell::OnceCell;

use crate::error::PuzzleError;
use crate::level::Features;
use crate::rng::RandomSource;
use crate::words::distractors;

/// Shortest sentence allowed in a puzzle context.
pub const MIN_SENTENCE_WORDS: usize = 3;

/// Built-in pangrams used when the caller supplies none.
pub const DEFAULT_PANGRAMS: &[&str] = &[
    "the quick brown fox jumps over the lazy dog",
    "pack my box with five dozen liquor jugs",
    "how vexingly quick daft zebras jump",
    "sphinx of black quartz judge my vow",
    "the five boxing wizards jump quickly",
    "jackdaws love my big sphinx of quartz",
    "waltz bad nymph for quick jigs vex",
    "glib jocks quiz nymph to vex dwarf",
    "quick zephyrs blow vexing daft jim",
    "mr jock tv quiz phd bags few lynx",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BucketKind {
    Other,
    Active,
    Chosen,
}

/// Word pools for a single puzzle build, consumed in the fixed order
/// `other -> active -> chosen`.
#[derive(Clone, Debug)]
pub struct PuzzleContext {
    /// Words of the active (chosen) sentence, in sentence order.
    pub chosen: Vec<String>,
    /// Words of the other candidate sentences; present only when the
    /// extra-sentences feature is on.
    pub active: Option<Vec<String>>,
    /// Supplementary distractor pool.
    pub other_words: Vec<String>,
    /// Length of the shortest candidate sentence.
    pub min_count: usize,
}

impl PuzzleContext {
    /// Ordered buckets in consumption order. Empty pools are kept here;
    /// the bucket reader drops them at construction.
    pub fn buckets(&self) -> Vec<(BucketKind, Vec<String>)> {
        let mut buckets = vec![(BucketKind::Other, self.other_words.clone())];
        if let Some(active) = &self.active {
            buckets.push((BucketKind::Active, active.clone()));
        }
        buckets.push((BucketKind::Chosen, self.chosen.clone()));
        buckets
    }

    /// Flat pool used for exclusion-aware sampling, in bucket order.
    pub fn total_words(&self) -> Vec<String> {
        self.buckets()
            .into_iter()
            .flat_map(|(_, words)| words)
            .collect()
    }
}

/// Assembles puzzle contexts. Owns the lazily-split cache of the default
/// pangram list so repeated builds don't re-split it.
pub struct ContextBuilder {
    default_split: OnceCell<Vec<Vec<String>>>,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self {
            default_split: OnceCell::new(),
        }
    }

    pub fn default_sentences(&self) -> &[Vec<String>] {
        self.default_split.get_or_init(|| {
            DEFAULT_PANGRAMS
                .iter()
                .map(|s| split_words(s))
                .collect()
        })
    }

    /// Build the context for one puzzle. Consumes exactly one draw (the
    /// active-sentence pick) from the random source.
    pub fn build<R: RandomSource>(
        &self,
        rng: &mut R,
        features: &Features,
        input_words: &[String],
        pangrams: Option<&[String]>,
    ) -> Result<PuzzleContext, PuzzleError> {
        let sentences: Vec<Vec<String>> = match pangrams {
            Some(list) => {
                if list.is_empty() {
                    return Err(PuzzleError::NoPangrams);
                }
                for sentence in list {
                    validate_pangram(sentence)?;
                }
                list.iter().map(|s| split_words(s)).collect()
            }
            None => self.default_sentences().to_vec(),
        };

        let min_count = sentences.iter().map(Vec::len).min().unwrap_or(0);
        if min_count < MIN_SENTENCE_WORDS {
            return Err(PuzzleError::SentenceTooShort(min_count, MIN_SENTENCE_WORDS));
        }

        let index = rng.draw(sentences.len() - 1);
        let chosen = sentences[index].clone();

        let active = features.extra_sentences.then(|| {
            sentences
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .flat_map(|(_, words)| words.iter().cloned())
                .collect::<Vec<String>>()
        });

        let other_words = distractors::build(
            input_words,
            active.as_deref(),
            &chosen,
            features.chaos_words,
        );

        Ok(PuzzleContext {
            chosen,
            active,
            other_words,
            min_count,
        })
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn split_words(sentence: &str) -> Vec<String> {
    sentence.split_whitespace().map(str::to_string).collect()
}

/// Pangrams are whitespace-delimited letters only; any punctuation or digit
/// is a fatal validation error.
fn validate_pangram(sentence: &str) -> Result<(), PuzzleError> {
    if sentence.split_whitespace().next().is_none() {
        return Err(PuzzleError::PunctuatedPangram(sentence.to_string()));
    }
    if sentence.chars().any(|c| !c.is_alphabetic() && !c.is_whitespace()) {
        return Err(PuzzleError::PunctuatedPangram(sentence.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::CounterRng;

    fn sentences(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn chosen_sentence_comes_from_the_draw() {
        let builder = ContextBuilder::new();
        let features = Features::default();
        let mut rng = CounterRng::new(1, 1);
        let pangrams = sentences(&["one two three", "four five six"]);
        let context = builder
            .build(&mut rng, &features, &[], Some(&pangrams))
            .unwrap();
        // draw(1) with counter 1 picks index 1
        assert_eq!(context.chosen, vec!["four", "five", "six"]);
        assert_eq!(context.min_count, 3);
        assert!(context.active.is_none());
    }

    #[test]
    fn active_bucket_holds_other_sentences_when_enabled() {
        let builder = ContextBuilder::new();
        let mut features = Features::default();
        features.extra_sentences = true;
        let mut rng = CounterRng::new(0, 1);
        let pangrams = sentences(&["one two three", "four five six"]);
        let context = builder
            .build(&mut rng, &features, &[], Some(&pangrams))
            .unwrap();
        assert_eq!(context.chosen, vec!["one", "two", "three"]);
        assert_eq!(
            context.active.as_deref(),
            Some(&["four".to_string(), "five".to_string(), "six".to_string()][..])
        );
    }

    #[test]
    fn total_words_follow_bucket_order() {
        let context = PuzzleContext {
            chosen: vec!["c".into()],
            active: Some(vec!["b".into()]),
            other_words: vec!["a".into()],
            min_count: 3,
        };
        assert_eq!(context.total_words(), vec!["a", "b", "c"]);
    }

    #[test]
    fn short_sentence_fails_construction() {
        let builder = ContextBuilder::new();
        let mut rng = CounterRng::new(0, 1);
        let pangrams = sentences(&["one two three", "too short"]);
        let err = builder
            .build(&mut rng, &Features::default(), &[], Some(&pangrams))
            .unwrap_err();
        assert!(matches!(err, PuzzleError::SentenceTooShort(2, _)));
    }

    #[test]
    fn punctuation_fails_construction() {
        let builder = ContextBuilder::new();
        let mut rng = CounterRng::new(0, 1);
        let pangrams = sentences(&["hello, there world"]);
        assert!(matches!(
            builder
                .build(&mut rng, &Features::default(), &[], Some(&pangrams))
                .unwrap_err(),
            PuzzleError::PunctuatedPangram(_)
        ));
    }

    #[test]
    fn empty_pangram_list_fails_construction() {
        let builder = ContextBuilder::new();
        let mut rng = CounterRng::new(0, 1);
        assert!(matches!(
            builder
                .build(&mut rng, &Features::default(), &[], Some(&[]))
                .unwrap_err(),
            PuzzleError::NoPangrams
        ));
    }

    #[test]
    fn default_split_is_cached() {
        let builder = ContextBuilder::new();
        let first = builder.default_sentences().as_ptr();
        let second = builder.default_sentences().as_ptr();
        assert_eq!(first, second);
        assert_eq!(builder.default_sentences().len(), DEFAULT_PANGRAMS.len());
    }

    #[test]
    fn default_pangrams_pass_their_own_validation() {
        for sentence in DEFAULT_PANGRAMS {
            validate_pangram(sentence).unwrap();
            assert!(split_words(sentence).len() >= MIN_SENTENCE_WORDS);
        }
    }
}
