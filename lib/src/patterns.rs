use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The character used for unrevealed slots in a pattern's textual form.
pub const UNKNOWN_SLOT: char = '-';

/// A fixed-length sequence of revealed letters and unknown slots.
///
/// Patterns are immutable values: revealing a letter produces a fresh
/// pattern, so the pattern a round currently shows and the candidate patterns
/// produced while partitioning never alias. The derived ordering is
/// lexicographic over the slots, with an unknown slot sorting before any
/// revealed letter; it matches the ordering of the textual form and exists to
/// make tie-breaks and the diagnostic family map deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    slots: Vec<Option<char>>,
}

impl Pattern {
    /// Creates an all-unknown pattern of the given length.
    pub fn hidden(length: usize) -> Pattern {
        Pattern {
            slots: vec![None; length],
        }
    }

    /// Builds a pattern from its textual form, reading [`UNKNOWN_SLOT`] as an
    /// unknown slot and any other character as a revealed letter.
    ///
    /// ```
    /// use rs_evil_hangman::Pattern;
    ///
    /// let pattern = Pattern::from_text("-a-");
    /// assert_eq!(pattern.num_unknown(), 2);
    /// assert_eq!(pattern.to_string(), "-a-");
    /// ```
    pub fn from_text(text: &str) -> Pattern {
        Pattern {
            slots: text
                .chars()
                .map(|c| if c == UNKNOWN_SLOT { None } else { Some(c) })
                .collect(),
        }
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the pattern has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of still-unknown slots.
    pub fn num_unknown(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Returns `true` once every slot is revealed.
    pub fn is_fully_revealed(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// Returns the letter revealed at `index`, if any.
    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Returns the pattern produced when every occurrence of `letter` in
    /// `word` is revealed on top of this pattern. All other slots, including
    /// letters revealed by earlier guesses, carry over unchanged, so a word
    /// without the letter reproduces this pattern exactly.
    pub fn reveal(&self, word: &str, letter: char) -> Pattern {
        debug_assert_eq!(word.chars().count(), self.slots.len());
        Pattern {
            slots: self
                .slots
                .iter()
                .zip(word.chars())
                .map(|(slot, c)| if c == letter { Some(letter) } else { *slot })
                .collect(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.unwrap_or(UNKNOWN_SLOT))?;
        }
        Ok(())
    }
}

/// Groups `candidates` into families by the pattern each word would produce
/// if `letter` were guessed against `pattern`.
///
/// The result is a total, disjoint partition of `candidates`: every word
/// appears in exactly one family and no family is empty. All the words that
/// do not contain the letter share the family keyed by the unchanged input
/// pattern. The order of words within a family is unspecified.
pub fn partition_words(
    pattern: &Pattern,
    letter: char,
    candidates: &[Arc<str>],
) -> HashMap<Pattern, Vec<Arc<str>>> {
    candidates
        .par_iter()
        .fold(
            HashMap::new,
            |mut families: HashMap<Pattern, Vec<Arc<str>>>, word| {
                families
                    .entry(pattern.reveal(word, letter))
                    .or_default()
                    .push(Arc::clone(word));
                families
            },
        )
        .reduce(HashMap::new, |mut merged, families| {
            for (key, mut words) in families {
                merged.entry(key).or_default().append(&mut words);
            }
            merged
        })
}


#[cfg(all(feature = "unstable", test))]
mod benches {

    extern crate test;

    use super::*;
    use test::Bencher;

    fn synthetic_words(count: usize, length: usize) -> Vec<Arc<str>> {
        (0..count)
            .map(|i| {
                let word: String = (0..length)
                    .map(|j| char::from(b'a' + ((i * 31 + j * 7) % 26) as u8))
                    .collect();
                Arc::from(word.as_str())
            })
            .collect()
    }

    #[bench]
    fn bench_partition_large_candidate_set(b: &mut Bencher) {
        let candidates = synthetic_words(5000, 7);
        let pattern = Pattern::hidden(7);

        b.iter(|| partition_words(&pattern, 'e', &candidates));
    }
}
