use crate::results::HangmanError;
use std::collections::HashSet;
use std::io::BufRead;
use std::sync::Arc;

/// Contains all the words available to a hangman game.
///
/// Words are lowercased on ingestion and duplicates collapse, so the
/// dictionary behaves as a set. It is immutable once constructed and cheap to
/// clone, since the words themselves are shared.
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: Vec<Arc<str>>,
    max_word_length: usize,
}

impl Dictionary {
    /// Constructs a `Dictionary` by reading words from the given reader, one
    /// word per line. Blank lines are skipped.
    ///
    /// Fails with [`HangmanError::EmptyDictionary`] if no words are found.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, HangmanError> {
        let mut words = Vec::new();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_lowercase());
            }
        }
        Dictionary::from_words(words)
    }

    /// Constructs a `Dictionary` from the given words. Empty entries are
    /// skipped.
    ///
    /// Fails with [`HangmanError::EmptyDictionary`] if no words remain.
    pub fn from_iterator<I, S>(words: I) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Dictionary::from_words(
            words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        )
    }

    fn from_words(all_words: Vec<String>) -> Result<Self, HangmanError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(all_words.len());
        let mut words: Vec<Arc<str>> = Vec::with_capacity(all_words.len());
        let mut max_word_length = 0;
        for word in &all_words {
            if seen.insert(word.as_str()) {
                let word_length = word.chars().count();
                if max_word_length < word_length {
                    max_word_length = word_length;
                }
                words.push(Arc::from(word.as_str()));
            }
        }
        if words.is_empty() {
            return Err(HangmanError::EmptyDictionary);
        }
        Ok(Dictionary {
            words,
            max_word_length,
        })
    }

    /// Returns the number of words with exactly `length` characters.
    pub fn num_words_with_length(&self, length: usize) -> usize {
        self.words
            .iter()
            .filter(|word| word.chars().count() == length)
            .count()
    }

    /// Retrieves the words with exactly `length` characters.
    pub fn words_with_length(&self, length: usize) -> Vec<Arc<str>> {
        self.words
            .iter()
            .filter(|word| word.chars().count() == length)
            .map(Arc::clone)
            .collect()
    }

    /// Retrieves the full list of words.
    pub fn all_words(&self) -> Vec<Arc<str>> {
        self.words.iter().map(Arc::clone).collect()
    }

    /// Returns the number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: construction rejects an empty dictionary.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the length of the longest word in the dictionary.
    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Cursor;

    #[test]
    fn dictionary_from_reader_lowercases_and_skips_blanks() -> Result<(), HangmanError> {
        let mut cursor = Cursor::new(String::from("Cat\n\ndog\n  \nBIRD"));

        let dictionary = Dictionary::from_reader(&mut cursor)?;

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.num_words_with_length(3), 2);
        assert_eq!(dictionary.num_words_with_length(4), 1);
        assert_eq!(dictionary.max_word_length(), 4);
        Ok(())
    }

    #[test]
    fn dictionary_collapses_duplicates() -> Result<(), HangmanError> {
        let dictionary = Dictionary::from_iterator(["cat", "CAT", "dog", "cat"])?;

        assert_eq!(dictionary.len(), 2);
        Ok(())
    }

    #[test]
    fn dictionary_words_with_length_filters() -> Result<(), HangmanError> {
        let dictionary = Dictionary::from_iterator(["echo", "cat", "delta", "dog"])?;

        let mut words = dictionary.words_with_length(3);
        words.sort_unstable();

        let words: Vec<&str> = words.iter().map(|word| word.as_ref()).collect();
        assert_eq!(words, vec!["cat", "dog"]);
        assert!(dictionary.words_with_length(7).is_empty());
        Ok(())
    }

    #[test]
    fn dictionary_empty_reader_fails() {
        let mut cursor = Cursor::new(String::from("\n\n"));

        let result = Dictionary::from_reader(&mut cursor);

        assert_matches!(result, Err(HangmanError::EmptyDictionary));
    }

    #[test]
    fn dictionary_empty_iterator_fails() {
        let result = Dictionary::from_iterator(Vec::<String>::new());

        assert_matches!(result, Err(HangmanError::EmptyDictionary));
    }
}
