use std::collections::HashSet;

/// A set of lower case words used to flag [unknown words](crate::Game::unknown_words).
///
/// The game never reads files. The caller loads the text and injects the list with
/// [Game::with_word_list](crate::Game::with_word_list).
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Parses newline delimited words. Every line is trimmed and lower cased, and blank
    /// lines are skipped.
    pub fn parse(text: &str) -> WordList {
        WordList {
            words: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }

    /// Whether `word` is in the list, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// The number of distinct words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
