use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::rng::RandomSource;

/// A grouped unit of 1 or 2 words treated as one identity.
///
/// `text` is the words joined by a single space and is the canonical key
/// used by the token and real maps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    text: String,
    parts: Vec<String>,
}

impl Symbol {
    pub fn new(parts: Vec<String>) -> Result<Self, PuzzleError> {
        if parts.is_empty() || parts.len() > 2 || parts.iter().any(|w| w.trim().is_empty()) {
            return Err(PuzzleError::MalformedSymbol(parts));
        }
        Ok(Self {
            text: parts.join(" "),
            parts,
        })
    }

    pub fn single(word: impl Into<String>) -> Self {
        let word = word.into();
        Self {
            text: word.clone(),
            parts: vec![word],
        }
    }

    pub fn pair(first: impl Into<String>, second: impl Into<String>) -> Self {
        let parts = vec![first.into(), second.into()];
        Self {
            text: parts.join(" "),
            parts,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Character-level transform applied to token text only, never to real words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SymbolExpression {
    None,
    Rot { shift: u8 },
    Binary,
    BinaryRot { shift: u8 },
}

impl SymbolExpression {
    /// Draw an expression. Identity when indirect encoding is off; otherwise
    /// one draw for the variant and, for the rotating variants, one more for
    /// the shift in `[1, 24]`.
    pub fn pick<R: RandomSource>(rng: &mut R, indirect: bool) -> Self {
        if !indirect {
            return Self::None;
        }
        match rng.draw(2) {
            0 => Self::Rot {
                shift: rng.draw(23) as u8 + 1,
            },
            1 => Self::Binary,
            _ => Self::BinaryRot {
                shift: rng.draw(23) as u8 + 1,
            },
        }
    }

    /// Encode each element independently and join with single spaces.
    pub fn encode(&self, parts: &[String]) -> String {
        parts
            .iter()
            .map(|w| self.encode_word(w))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn encode_word(&self, word: &str) -> String {
        match *self {
            Self::None => word.to_string(),
            Self::Rot { shift } => rotate(word, shift),
            Self::Binary => to_binary(word),
            Self::BinaryRot { shift } => to_binary(&rotate(word, shift)),
        }
    }

    /// Binary text carries internal spaces, so sentence joining must keep
    /// word delimiters for these variants.
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary | Self::BinaryRot { .. })
    }
}

fn rotate(word: &str, shift: u8) -> String {
    word.chars()
        .map(|c| match c {
            'a'..='z' => (b'a' + (c as u8 - b'a' + shift) % 26) as char,
            'A'..='Z' => (b'A' + (c as u8 - b'A' + shift) % 26) as char,
            other => other,
        })
        .collect()
}

fn to_binary(word: &str) -> String {
    word.bytes()
        .map(|b| format!("{b:08b}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::CounterRng;

    #[test]
    fn symbol_text_joins_with_single_space() {
        let symbol = Symbol::pair("black", "quartz");
        assert_eq!(symbol.text(), "black quartz");
        assert_eq!(symbol.len(), 2);
    }

    #[test]
    fn blank_and_oversized_symbols_are_rejected() {
        assert!(Symbol::new(vec![]).is_err());
        assert!(Symbol::new(vec!["  ".to_string()]).is_err());
        assert!(
            Symbol::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]).is_err()
        );
        assert!(Symbol::new(vec!["fox".to_string()]).is_ok());
    }

    #[test]
    fn pick_is_identity_without_indirect_encoding() {
        let mut rng = CounterRng::new(0, 1);
        assert_eq!(SymbolExpression::pick(&mut rng, false), SymbolExpression::None);
        // No draws consumed
        assert_eq!(rng.draw(9), 0);
    }

    #[test]
    fn pick_draws_variant_then_shift() {
        let mut rng = CounterRng::new(0, 1);
        // variant draw: 0 % 3 = 0 -> Rot; shift draw: 1 % 24 = 1 -> shift 2
        assert_eq!(
            SymbolExpression::pick(&mut rng, true),
            SymbolExpression::Rot { shift: 2 }
        );
    }

    #[test]
    fn rot_wraps_alphabet() {
        let expr = SymbolExpression::Rot { shift: 2 };
        assert_eq!(expr.encode_word("abz"), "cdb");
        assert_eq!(expr.encode_word("Zoo"), "Bqq");
    }

    #[test]
    fn binary_encodes_eight_bits_per_character() {
        let expr = SymbolExpression::Binary;
        assert_eq!(expr.encode_word("ab"), "01100001 01100010");
    }

    #[test]
    fn binaryrot_rotates_before_binary() {
        let rot = SymbolExpression::Rot { shift: 1 };
        let both = SymbolExpression::BinaryRot { shift: 1 };
        let binary = SymbolExpression::Binary;
        assert_eq!(both.encode_word("cat"), binary.encode_word(&rot.encode_word("cat")));
    }

    #[test]
    fn encode_maps_elements_independently() {
        let expr = SymbolExpression::Rot { shift: 1 };
        assert_eq!(expr.encode(&["ab".to_string(), "yz".to_string()]), "bc za");
    }
}
