use crate::patterns::Pattern;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

const MEDIUM_PERIOD: u32 = 4;
const EASY_PERIOD: u32 = 2;

/// How forgiving a round is.
///
/// [`Difficulty::Hard`] always keeps the largest word family alive.
/// [`Difficulty::Medium`] and [`Difficulty::Easy`] periodically keep the
/// runner-up family instead, every fourth and every second guess
/// respectively, which gives the guesser a fighting chance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    fn uses_second_largest(self, guess_count: u32) -> bool {
        match self {
            Difficulty::Hard => false,
            Difficulty::Medium => guess_count % MEDIUM_PERIOD == 0,
            Difficulty::Easy => guess_count % EASY_PERIOD == 0,
        }
    }
}

/// Resolves a tie in family size between two distinct patterns.
///
/// The pattern with more unknown slots wins, since it tells the guesser
/// less. On equal unknown counts, the lexicographically smaller textual form
/// wins, with the unknown-slot character compared like any other.
///
/// ```
/// use rs_evil_hangman::{preferred, Pattern};
///
/// let more_hidden = Pattern::from_text("--s");
/// let more_revealed = Pattern::from_text("-es");
/// assert_eq!(preferred(&more_hidden, &more_revealed), &more_hidden);
/// ```
pub fn preferred<'a>(a: &'a Pattern, b: &'a Pattern) -> &'a Pattern {
    match preference(a, b) {
        Ordering::Less => b,
        _ => a,
    }
}

/// The total order behind [`preferred`]: `Greater` means the first pattern is
/// the one to keep. Strict for distinct patterns, so the winner of a scan
/// does not depend on visitation order.
fn preference(a: &Pattern, b: &Pattern) -> Ordering {
    a.num_unknown()
        .cmp(&b.num_unknown())
        .then_with(|| b.cmp(a))
}

/// Picks the family the round continues with and returns its pattern.
///
/// The largest family wins, with ties resolved by [`preferred`]. On guesses
/// where the difficulty says to ease off (`guess_count` counts guesses made
/// so far, including this one), the runner-up is kept instead: the best
/// family excluding the exact largest pattern, by size and then
/// [`preferred`]. A family tied with the overall maximum size is still an
/// eligible runner-up. With a single family there is no runner-up and the
/// largest stands.
///
/// Returns `None` only for an empty family map.
pub fn select_pattern(
    families: &HashMap<Pattern, Vec<Arc<str>>>,
    difficulty: Difficulty,
    guess_count: u32,
) -> Option<&Pattern> {
    let largest = best_pattern(
        families
            .iter()
            .map(|(pattern, words)| (pattern, words.len())),
    )?;
    if difficulty.uses_second_largest(guess_count) {
        let runner_up = best_pattern(
            families
                .iter()
                .filter(|&(pattern, _)| pattern != largest)
                .map(|(pattern, words)| (pattern, words.len())),
        );
        if let Some(second) = runner_up {
            return Some(second);
        }
    }
    Some(largest)
}

fn best_pattern<'a, I>(families: I) -> Option<&'a Pattern>
where
    I: Iterator<Item = (&'a Pattern, usize)>,
{
    families
        .max_by(|&(a, size_a), &(b, size_b)| size_a.cmp(&size_b).then_with(|| preference(a, b)))
        .map(|(pattern, _)| pattern)
}
