use crate::data::Dictionary;
use crate::patterns::{partition_words, Pattern};
use crate::results::{GuessOutcome, HangmanError};
use crate::selection::{select_pattern, Difficulty};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Per-round state. Recreated by [`HangmanGame::prep_for_round`] and mutated
/// only by [`HangmanGame::make_guess`].
#[derive(Clone, Debug)]
struct RoundState {
    pattern: Pattern,
    guesses_left: u32,
    /// Letters in the order they were guessed.
    guessed: Vec<char>,
    live_words: Vec<Arc<str>>,
    difficulty: Difficulty,
    /// Guesses made so far this round, consumed by the difficulty policy.
    guess_count: u32,
}

/// Runs rounds of adversarial ("evil") hangman over a fixed dictionary.
///
/// The game never commits to a secret word. Every dictionary word of the
/// round's length starts out live, and each guess partitions the live words
/// into families by the pattern they would produce; whichever family the
/// difficulty policy favors becomes the new reality. The guesser loses a
/// guess only when the chosen family reveals nothing. A concrete word is
/// picked, at random from the survivors, only when
/// [`resolve_secret_word`](HangmanGame::resolve_secret_word) is called.
///
/// ```
/// use rs_evil_hangman::{Dictionary, Difficulty, HangmanGame};
///
/// let dictionary = Dictionary::from_iterator(["cat", "car", "can", "dog"]).unwrap();
/// let mut game = HangmanGame::new(dictionary);
/// game.prep_for_round(3, 6, Difficulty::Hard).unwrap();
///
/// let outcome = game.make_guess('a').unwrap();
/// assert_eq!(outcome.pattern.to_string(), "-a-");
/// assert!(outcome.revealed);
/// assert_eq!(game.num_live_words(), Some(3));
/// ```
#[derive(Clone, Debug)]
pub struct HangmanGame {
    dictionary: Dictionary,
    round: Option<RoundState>,
}

impl HangmanGame {
    /// Constructs a game over the given dictionary. The dictionary is shared
    /// by every round; call [`prep_for_round`](HangmanGame::prep_for_round)
    /// to start playing.
    pub fn new(dictionary: Dictionary) -> HangmanGame {
        HangmanGame {
            dictionary,
            round: None,
        }
    }

    /// The dictionary this game draws from.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Returns the number of dictionary words with exactly `length`
    /// characters. A round of that length is only playable if this is
    /// non-zero.
    pub fn num_words_with_length(&self, length: usize) -> usize {
        self.dictionary.num_words_with_length(length)
    }

    /// Starts a fresh round: an all-unknown pattern of `word_length` slots,
    /// `num_guesses` wrong guesses allowed, and every dictionary word of that
    /// length live. Any previous round is discarded.
    ///
    /// Fails, leaving any previous round untouched, if `word_length` or
    /// `num_guesses` is zero or if the dictionary has no words of the
    /// requested length.
    pub fn prep_for_round(
        &mut self,
        word_length: usize,
        num_guesses: u32,
        difficulty: Difficulty,
    ) -> Result<(), HangmanError> {
        if word_length == 0 || num_guesses < 1 {
            return Err(HangmanError::InvalidRoundParameters);
        }
        let live_words = self.dictionary.words_with_length(word_length);
        if live_words.is_empty() {
            return Err(HangmanError::NoWordsWithLength(word_length));
        }
        self.round = Some(RoundState {
            pattern: Pattern::hidden(word_length),
            guesses_left: num_guesses,
            guessed: Vec::new(),
            live_words,
            difficulty,
            guess_count: 0,
        });
        Ok(())
    }

    /// Processes one letter guess.
    ///
    /// The live words are partitioned into families by the pattern each
    /// would produce, and the difficulty policy picks the family the round
    /// continues with. If the chosen pattern equals the current one the
    /// guess was a miss and costs one wrong guess; otherwise the new pattern
    /// is installed. Either way the chosen family becomes the live set.
    ///
    /// Fails with [`HangmanError::AlreadyGuessed`] if the letter was guessed
    /// before this round, and with [`HangmanError::NoActiveRound`] if no
    /// round is active. Both failures leave the round untouched.
    pub fn make_guess(&mut self, letter: char) -> Result<GuessOutcome, HangmanError> {
        let round = self.round.as_mut().ok_or(HangmanError::NoActiveRound)?;
        if round.guessed.contains(&letter) {
            return Err(HangmanError::AlreadyGuessed(letter));
        }

        let mut families = partition_words(&round.pattern, letter, &round.live_words);
        let guess_count = round.guess_count + 1;
        let chosen = match select_pattern(&families, round.difficulty, guess_count) {
            Some(pattern) => pattern.clone(),
            // Partitioning a non-empty live set always yields a family.
            None => return Err(HangmanError::NoLiveWords),
        };
        let family_sizes: BTreeMap<Pattern, usize> = families
            .iter()
            .map(|(pattern, words)| (pattern.clone(), words.len()))
            .collect();

        // Everything fallible is done; commit the round update.
        round.guessed.push(letter);
        round.guess_count = guess_count;
        let revealed = chosen != round.pattern;
        if revealed {
            round.pattern = chosen;
        } else {
            round.guesses_left = round.guesses_left.saturating_sub(1);
        }
        round.live_words = families.remove(&round.pattern).unwrap_or_default();

        Ok(GuessOutcome {
            pattern: round.pattern.clone(),
            revealed,
            guesses_left: round.guesses_left,
            family_sizes,
        })
    }

    /// The current pattern, or `None` before the first round.
    pub fn pattern(&self) -> Option<&Pattern> {
        self.round.as_ref().map(|round| &round.pattern)
    }

    /// The current pattern's textual form, with [`UNKNOWN_SLOT`] for
    /// unrevealed slots.
    ///
    /// [`UNKNOWN_SLOT`]: crate::UNKNOWN_SLOT
    pub fn pattern_string(&self) -> Option<String> {
        self.pattern().map(Pattern::to_string)
    }

    /// The number of wrong guesses the player has left this round.
    pub fn guesses_left(&self) -> Option<u32> {
        self.round.as_ref().map(|round| round.guesses_left)
    }

    /// The letters guessed so far this round, sorted for display.
    pub fn guessed_letters(&self) -> Option<Vec<char>> {
        self.round.as_ref().map(|round| {
            let mut letters = round.guessed.clone();
            letters.sort_unstable();
            letters
        })
    }

    /// Returns `true` if `letter` has been guessed this round.
    pub fn already_guessed(&self, letter: char) -> bool {
        self.round
            .as_ref()
            .map_or(false, |round| round.guessed.contains(&letter))
    }

    /// The number of words still consistent with every guess made so far.
    pub fn num_live_words(&self) -> Option<usize> {
        self.round.as_ref().map(|round| round.live_words.len())
    }

    /// Picks the secret word this round ended up with, uniformly at random
    /// from the live candidates. The choice is for display only and has no
    /// effect on gameplay; by the time a round ends, every live word is
    /// consistent with all the answers given.
    pub fn resolve_secret_word<R: Rng>(&self, rng: &mut R) -> Result<Arc<str>, HangmanError> {
        let round = self.round.as_ref().ok_or(HangmanError::NoActiveRound)?;
        round
            .live_words
            .choose(rng)
            .map(Arc::clone)
            .ok_or(HangmanError::NoLiveWords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn three_letter_game() -> HangmanGame {
        let dictionary = Dictionary::from_iterator(["cat", "car", "can", "dog"])
            .expect("dictionary should not be empty");
        HangmanGame::new(dictionary)
    }

    #[test]
    fn prep_for_round_resets_previous_round() {
        let mut game = three_letter_game();
        game.prep_for_round(3, 6, Difficulty::Hard).unwrap();
        game.make_guess('a').unwrap();
        game.make_guess('t').unwrap();

        game.prep_for_round(3, 4, Difficulty::Easy).unwrap();

        assert_eq!(game.pattern_string().as_deref(), Some("---"));
        assert_eq!(game.guesses_left(), Some(4));
        assert_eq!(game.guessed_letters(), Some(vec![]));
        assert_eq!(game.num_live_words(), Some(4));
    }

    #[test]
    fn failed_prep_leaves_round_untouched() {
        let mut game = three_letter_game();
        game.prep_for_round(3, 6, Difficulty::Hard).unwrap();
        game.make_guess('a').unwrap();

        assert_matches!(
            game.prep_for_round(0, 6, Difficulty::Hard),
            Err(HangmanError::InvalidRoundParameters)
        );
        assert_matches!(
            game.prep_for_round(3, 0, Difficulty::Hard),
            Err(HangmanError::InvalidRoundParameters)
        );
        assert_matches!(
            game.prep_for_round(9, 6, Difficulty::Hard),
            Err(HangmanError::NoWordsWithLength(9))
        );

        assert_eq!(game.pattern_string().as_deref(), Some("-a-"));
        assert_eq!(game.guessed_letters(), Some(vec!['a']));
    }

    #[test]
    fn guesses_left_saturates_at_zero() {
        let dictionary = Dictionary::from_iterator(["dog"]).unwrap();
        let mut game = HangmanGame::new(dictionary);
        game.prep_for_round(3, 1, Difficulty::Hard).unwrap();

        game.make_guess('x').unwrap();
        assert_eq!(game.guesses_left(), Some(0));

        let outcome = game.make_guess('y').unwrap();
        assert_eq!(outcome.guesses_left, 0);
    }
}
