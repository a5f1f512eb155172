const WORDS_EN: &str = include_str!("../../assets/words.txt");

/// Embedded English word list used to pad the distractor pool.
///
/// This is the external word source of the engine; the core never loads it
/// itself. Callers take what they need and pass the words in as
/// `input_words`.
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn load() -> Self {
        let words = WORDS_EN
            .lines()
            .map(str::trim)
            .filter(|w| w.len() >= 3 && w.chars().all(|c| c.is_ascii_lowercase()))
            .map(str::to_string)
            .collect();

        Self { words }
    }

    pub fn all_words(&self) -> &[String] {
        &self.words
    }

    /// First `count` words, for building a reproducible distractor set.
    pub fn take(&self, count: usize) -> Vec<String> {
        self.words.iter().take(count).cloned().collect()
    }
}
