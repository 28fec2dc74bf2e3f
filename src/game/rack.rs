#![allow(dead_code)]
//! Letter rack dealing and refill
//!
//! A fresh rack is the shuffled letters of a randomly chosen seven-letter
//! dictionary word that has not been dealt before in this session, so every
//! starting hand can spell at least one full word. Refills are built from a
//! dictionary word containing at least one currently available letter.

use super::dictionary::DictionaryIndex;
use rand::prelude::*;
use std::collections::HashSet;

/// Number of letters a full rack holds.
pub const RACK_SIZE: usize = 7;

/// Letters dealt when no suitable dictionary word remains.
const FALLBACK_DEAL: usize = 5;

/// The human player's hand of letters.
#[derive(Debug, Clone)]
pub struct Rack {
    letters: Vec<char>,
    dealt_words: HashSet<String>,
}

impl Rack {
    /// Deal a fresh rack from the dictionary.
    pub fn deal<R: Rng + ?Sized>(dictionary: &DictionaryIndex, rng: &mut R) -> Self {
        let mut rack = Self {
            letters: Vec::new(),
            dealt_words: HashSet::new(),
        };
        rack.redeal(dictionary, rng);
        rack
    }

    /// Replace the rack with a fresh deal, as at game start.
    pub fn redeal<R: Rng + ?Sized>(&mut self, dictionary: &DictionaryIndex, rng: &mut R) {
        let candidates: Vec<&str> = dictionary
            .words_of_length(RACK_SIZE)
            .filter(|word| !self.dealt_words.contains(*word))
            .collect();
        self.letters = match candidates.choose(rng) {
            Some(&word) => {
                self.dealt_words.insert(word.to_string());
                let mut letters: Vec<char> = word.chars().collect();
                letters.shuffle(rng);
                letters
            }
            None => (0..FALLBACK_DEAL).map(|_| random_letter(rng)).collect(),
        };
    }

    /// Rebuild the rack after a committed turn. Picks a dictionary word with
    /// at least one letter from `available`, keeps its first seven letters
    /// shuffled, and pads with random letters up to a full rack.
    pub fn refill<R: Rng + ?Sized>(
        &mut self,
        dictionary: &DictionaryIndex,
        available: &HashSet<char>,
        rng: &mut R,
    ) {
        let candidates = dictionary.words_containing_any(available);
        self.letters = match candidates.choose(rng) {
            Some(&word) => {
                let mut letters: Vec<char> = word.chars().take(RACK_SIZE).collect();
                letters.shuffle(rng);
                while letters.len() < RACK_SIZE {
                    letters.push(random_letter(rng));
                }
                letters
            }
            None => (0..RACK_SIZE).map(|_| random_letter(rng)).collect(),
        };
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_uppercase())
    }

    /// Remove one occurrence of `letter`; false if the rack has none.
    pub fn take(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        match self.letters.iter().position(|&c| c == letter) {
            Some(i) => {
                self.letters.remove(i);
                true
            }
            None => false,
        }
    }

    /// Return a letter to the rack.
    pub fn put_back(&mut self, letter: char) {
        self.letters.push(letter.to_ascii_uppercase());
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.letters.shuffle(rng);
    }

    pub fn as_string(&self) -> String {
        self.letters.iter().collect()
    }
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    (b'A' + rng.random_range(0..26u8)) as char
}
