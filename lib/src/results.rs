use crate::patterns::Pattern;
use std::collections::BTreeMap;
use std::fmt;
use std::io;

/// Indicates that an operation on the hangman engine could not be performed.
#[derive(Debug)]
pub enum HangmanError {
    /// The dictionary contained no words.
    EmptyDictionary,
    /// A round was requested with a zero word length or a zero guess budget.
    InvalidRoundParameters,
    /// The dictionary has no words of the requested length.
    NoWordsWithLength(usize),
    /// A round operation was attempted before any round was prepared.
    NoActiveRound,
    /// The given letter was already guessed this round.
    AlreadyGuessed(char),
    /// The secret word was requested while no live candidates remain.
    NoLiveWords,
    /// Reading the dictionary failed.
    Io(io::Error),
}

impl fmt::Display for HangmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HangmanError::EmptyDictionary => write!(f, "the dictionary contains no words"),
            HangmanError::InvalidRoundParameters => {
                write!(f, "word length and guess budget must both be at least 1")
            }
            HangmanError::NoWordsWithLength(length) => {
                write!(f, "the dictionary has no words of length {}", length)
            }
            HangmanError::NoActiveRound => write!(f, "no round has been prepared"),
            HangmanError::AlreadyGuessed(letter) => {
                write!(f, "the letter '{}' was already guessed this round", letter)
            }
            HangmanError::NoLiveWords => write!(f, "no live candidate words remain"),
            HangmanError::Io(error) => write!(f, "failed to read the dictionary: {}", error),
        }
    }
}

impl std::error::Error for HangmanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HangmanError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for HangmanError {
    fn from(error: io::Error) -> HangmanError {
        HangmanError::Io(error)
    }
}

/// The result of a single letter guess.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessOutcome {
    /// The pattern in effect after the guess.
    pub pattern: Pattern,
    /// Whether the guess revealed at least one new letter. `false` means the
    /// guess was a miss and cost one wrong guess.
    pub revealed: bool,
    /// The number of wrong guesses remaining after this guess.
    pub guesses_left: u32,
    /// Every pattern the guess could have produced, mapped to the number of
    /// candidate words in its family. Diagnostic only; the selection has
    /// already happened.
    pub family_sizes: BTreeMap<Pattern, usize>,
}
