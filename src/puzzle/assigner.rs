use std::collections::BTreeMap;

use crate::error::PuzzleError;
use crate::level::Features;
use crate::puzzle::symbol::Symbol;
use crate::rng::RandomSource;

/// The two inverse maps of a puzzle: word symbol -> token symbol and token
/// symbol -> word symbol, keyed by canonical symbol text.
#[derive(Debug)]
pub struct TokenAssignment {
    pub token_map: BTreeMap<String, Symbol>,
    pub real_map: BTreeMap<String, Symbol>,
}

/// Shuffle the scanned symbol pool, derive a parallel token pool, and pair
/// them up reverse-indexed with first-occurrence-wins semantics.
///
/// When the multi-token and multi-input flags agree the token pool is a
/// fresh permutation of the symbol pool itself; otherwise tokens are drawn
/// from the flat word pool, optionally paired into two-word tokens.
pub fn assign<R: RandomSource>(
    rng: &mut R,
    features: &Features,
    mut symbols: Vec<Symbol>,
    flat: &[String],
) -> Result<TokenAssignment, PuzzleError> {
    rng.shuffle(&mut symbols);

    let tokens: Vec<Symbol> = if features.multi_token == features.multi_input {
        let mut tokens = symbols.clone();
        rng.shuffle(&mut tokens);
        tokens
    } else {
        let count = if features.multi_token {
            flat.len()
        } else {
            symbols.len()
        };
        let mut tokens = Vec::with_capacity(count);
        for _ in 0..count {
            let base = flat[rng.draw(flat.len() - 1)].clone();
            if features.multi_token && rng.coin() {
                let mate = flat[rng.draw(flat.len() - 1)].clone();
                tokens.push(Symbol::pair(base, mate));
            } else {
                tokens.push(Symbol::single(base));
            }
        }
        tokens
    };

    if tokens.len() < symbols.len() {
        return Err(PuzzleError::TokenPoolExhausted {
            needed: symbols.len(),
            available: tokens.len(),
        });
    }

    let mut token_map: BTreeMap<String, Symbol> = BTreeMap::new();
    let mut real_map: BTreeMap<String, Symbol> = BTreeMap::new();
    for (i, symbol) in symbols.iter().enumerate() {
        let token = &tokens[tokens.len() - 1 - i];
        // First occurrence wins; duplicate symbol strings collapse onto one
        // assignment and their trailing tokens stay orphaned.
        if !token_map.contains_key(symbol.text()) {
            token_map.insert(symbol.text().to_string(), token.clone());
            real_map.insert(token.text().to_string(), symbol.clone());
        }
    }

    Ok(TokenAssignment { token_map, real_map })
}
