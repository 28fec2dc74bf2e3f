//! Turn scoring with premium-square multipliers
//!
//! Letter bonuses scale a single tile, word bonuses multiply the whole word
//! and compound when a word covers several of them. A bonus cell counts for
//! whichever word is being scored over it, every time it is scored; bonuses
//! are not consumed by the first play that lands on them.

use super::board::{letter_value, premium_at};
use super::scanner::DiscoveredWord;

/// Score a single word against the premium layout.
pub fn score_word(word: &DiscoveredWord) -> u32 {
    let mut letter_sum = 0;
    let mut word_multiplier = 1;

    for &(letter, pos) in word.cells() {
        let premium = premium_at(pos);
        letter_sum += letter_value(letter) * premium.letter_multiplier();
        word_multiplier *= premium.word_multiplier();
    }

    letter_sum * word_multiplier
}

/// Total score for a turn: the sum over every word the caller passes in.
/// A tile that completes both a horizontal and a vertical word earns both.
pub fn score(words: &[DiscoveredWord]) -> u32 {
    words.iter().map(score_word).sum()
}
