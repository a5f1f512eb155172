use std::collections::BTreeSet;

/// Builds the supplementary distractor pool for a puzzle context.
///
/// The pool enlarges the token/mapping domain without touching the real
/// sentence. Output order is sorted so identical inputs always produce the
/// same bucket contents.
pub fn build(
    input_words: &[String],
    sentence_words: Option<&[String]>,
    chosen: &[String],
    chaos: bool,
) -> Vec<String> {
    let mut pool: BTreeSet<String> = BTreeSet::new();

    for word in input_words {
        if !word.trim().is_empty() {
            pool.insert(word.clone());
        }
    }

    if chaos {
        let known = input_words
            .iter()
            .chain(sentence_words.unwrap_or(&[]).iter())
            .chain(chosen.iter());
        for word in known {
            if let Some(flipped) = flip_case(word) {
                pool.insert(flipped);
            }
        }
    }

    // Words already present in the sentence buckets would break the
    // bijection, so they never enter the distractor pool.
    for word in chosen.iter().chain(sentence_words.unwrap_or(&[]).iter()) {
        pool.remove(word);
    }

    pool.into_iter().collect()
}

/// Case-flipped chaos variant: toggle the case of the first letter.
/// Returns `None` when flipping would not change the word.
fn flip_case(word: &str) -> Option<String> {
    let mut chars = word.chars();
    let first = chars.next()?;
    let flipped = if first.is_lowercase() {
        first.to_uppercase().to_string()
    } else if first.is_uppercase() {
        first.to_lowercase().to_string()
    } else {
        return None;
    };
    let variant = format!("{flipped}{}", chars.as_str());
    (variant != word).then_some(variant)
}
