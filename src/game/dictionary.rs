#![allow(dead_code)]
//! Dictionary loading and lookup
//!
//! One word per line, case-insensitive; everything is normalized to uppercase
//! when the list is loaded and queries are normalized the same way. The index
//! lives for the whole game session and is shared read-only by submission
//! checking, rack dealing, and the opponent search.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

/// Bundled fallback word list, used when no path is given on the command line.
static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Errors raised while building the index.
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list file could not be read
    Io(std::io::Error),
    /// The source contained no usable words
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::Io(e) => write!(f, "could not read word list: {}", e),
            DictionaryError::Empty => write!(f, "word list contains no usable words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl From<std::io::Error> for DictionaryError {
    fn from(e: std::io::Error) -> Self {
        DictionaryError::Io(e)
    }
}

/// Immutable set of legal words, with secondary indexes for rack dealing and
/// opponent candidate filtering.
pub struct DictionaryIndex {
    words: Vec<String>,
    word_set: HashSet<String>,
    by_length: HashMap<usize, Vec<usize>>,
}

impl DictionaryIndex {
    /// Load a newline-delimited word list from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_lines(data.lines())
    }

    /// Build the index from the word list bundled into the binary.
    pub fn bundled() -> Result<Self, DictionaryError> {
        Self::from_lines(WORDS_DATA.lines())
    }

    /// Build the index from individual lines. Lines that are empty or carry
    /// non-alphabetic characters are dropped; duplicates keep their first
    /// occurrence so iteration order tracks the source.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut words = Vec::new();
        let mut word_set = HashSet::new();
        for line in lines {
            let word = line.trim();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            let word = word.to_ascii_uppercase();
            if word_set.insert(word.clone()) {
                words.push(word);
            }
        }
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let mut by_length: HashMap<usize, Vec<usize>> = HashMap::new();
        for (i, word) in words.iter().enumerate() {
            by_length.entry(word.len()).or_default().push(i);
        }

        Ok(Self {
            words,
            word_set,
            by_length,
        })
    }

    /// Membership test, case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(&word.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, in source order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words of exactly `n` letters, in source order.
    pub fn words_of_length(&self, n: usize) -> impl Iterator<Item = &str> {
        self.by_length
            .get(&n)
            .into_iter()
            .flatten()
            .map(|&i| self.words[i].as_str())
    }

    /// Words containing at least one of the given letters, in source order.
    pub fn words_containing_any(&self, letters: &HashSet<char>) -> Vec<&str> {
        self.words
            .iter()
            .filter(|word| word.chars().any(|c| letters.contains(&c)))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DictionaryIndex {
        DictionaryIndex::from_lines(["hi", "him", "cat", "dog", "letters", "  ox  ", "hi"])
            .unwrap()
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let dict = sample();
        assert!(dict.contains("HI"));
        assert!(dict.contains("hi"));
        assert!(dict.contains("Cat"));
        assert!(!dict.contains("zebra"));
    }

    #[test]
    fn test_duplicates_and_blanks_dropped() {
        let dict = sample();
        assert_eq!(dict.len(), 6);
        let listed: Vec<&str> = dict.words().collect();
        assert_eq!(listed, ["HI", "HIM", "CAT", "DOG", "LETTERS", "OX"]);
    }

    #[test]
    fn test_non_alphabetic_lines_dropped() {
        let dict = DictionaryIndex::from_lines(["it's", "don-t", "plain", "x9"]).unwrap();
        assert_eq!(dict.len(), 1);
        assert!(dict.contains("plain"));
    }

    #[test]
    fn test_empty_source_is_an_error() {
        assert!(matches!(
            DictionaryIndex::from_lines([]),
            Err(DictionaryError::Empty)
        ));
        assert!(matches!(
            DictionaryIndex::from_lines(["", "  ", "a1"]),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            DictionaryIndex::load("/nonexistent/word/list.txt"),
            Err(DictionaryError::Io(_))
        ));
    }

    #[test]
    fn test_words_of_length() {
        let dict = sample();
        let threes: Vec<&str> = dict.words_of_length(3).collect();
        assert_eq!(threes, ["HIM", "CAT", "DOG"]);
        assert_eq!(dict.words_of_length(10).count(), 0);
    }

    #[test]
    fn test_words_containing_any() {
        let dict = sample();
        let letters: HashSet<char> = ['X', 'M'].into_iter().collect();
        let hits = dict.words_containing_any(&letters);
        assert_eq!(hits, ["HIM", "OX"]);
    }

    #[test]
    fn test_bundled_list_is_usable() {
        let dict = DictionaryIndex::bundled().unwrap();
        assert!(dict.len() > 100);
        assert!(dict.contains("hi"));
        assert!(dict.contains("word"));
    }
}
