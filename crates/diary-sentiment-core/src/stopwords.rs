//! Common-word filtering for the word cloud.
//!
//! The list is a CSV of `word,rank` rows. A copy of the 100 most common
//! English words is bundled; a replacement can be loaded from disk.

use crate::error::ResourceError;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const BUNDLED_COMMON_WORDS: &str = include_str!("../resources/common_words.csv");

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StopWord {
    pub word: String,
    pub rank: u32,
}

/// Fixed list of high-frequency words excluded from word counts.
///
/// Matching is exact-string; the bundled list is lowercase to line up with
/// the tokenizer's output.
#[derive(Debug, Clone)]
pub struct StopWordList {
    ranked: Vec<StopWord>,
    words: HashSet<String>,
}

impl StopWordList {
    pub fn bundled() -> Result<Self, ResourceError> {
        Self::from_reader("bundled common words", BUNDLED_COMMON_WORDS.as_bytes())
    }

    pub fn from_path(path: &Path) -> Result<Self, ResourceError> {
        let file = std::fs::File::open(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(&path.display().to_string(), file)
    }

    /// Parse `word,rank` rows (with header) and order them by rank
    pub fn from_reader<R: Read>(resource: &str, reader: R) -> Result<Self, ResourceError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let mut ranked = Vec::new();

        for result in csv_reader.deserialize::<StopWord>() {
            let row = result.map_err(|e| ResourceError::Parse {
                resource: resource.to_string(),
                line: e.position().map(|p| p.line()).unwrap_or(0),
                message: e.to_string(),
            })?;
            ranked.push(row);
        }

        if ranked.is_empty() {
            return Err(ResourceError::Empty { resource: resource.to_string() });
        }

        Ok(Self::from_words(ranked))
    }

    pub fn from_words(mut ranked: Vec<StopWord>) -> Self {
        ranked.sort_by_key(|w| w.rank);
        let words = ranked.iter().map(|w| w.word.clone()).collect();
        debug!(count = ranked.len(), "Loaded stop-word list");
        Self { ranked, words }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Drop every occurrence of every stop word, keeping the order of the rest
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| !self.is_stop_word(t)).collect()
    }

    /// Entries ordered by rank
    pub fn ranked(&self) -> &[StopWord] {
        &self.ranked
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_bundled_list() {
        let list = StopWordList::bundled().unwrap();
        assert_eq!(list.len(), 100);
        assert_eq!(list.ranked()[0], StopWord { word: "the".to_string(), rank: 1 });
        assert!(list.is_stop_word("this"));
        assert!(list.is_stop_word("was"));
        assert!(list.is_stop_word("and"));
        assert!(!list.is_stop_word("movie"));
        assert!(!list.is_stop_word("The"));
    }

    #[test]
    fn test_filter_removes_every_occurrence() {
        let list = StopWordList::bundled().unwrap();
        let filtered = list.filter(tokens(&["the", "movie", "the", "and", "score", "and", "the"]));
        assert_eq!(filtered, tokens(&["movie", "score"]));
    }

    #[test]
    fn test_from_reader_orders_by_rank() {
        let csv = "word,rank\nsecond,2\nfirst,1\n";
        let list = StopWordList::from_reader("inline", csv.as_bytes()).unwrap();
        let words: Vec<&str> = list.ranked().iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["first", "second"]);
    }

    #[test]
    fn test_from_reader_rejects_bad_rank() {
        let csv = "word,rank\nfine,1\nbroken,abc\n";
        match StopWordList::from_reader("inline", csv.as_bytes()) {
            Err(ResourceError::Parse { resource, line, .. }) => {
                assert_eq!(resource, "inline");
                assert_eq!(line, 3);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_reader_rejects_empty_list() {
        let result = StopWordList::from_reader("inline", "word,rank\n".as_bytes());
        assert!(matches!(result, Err(ResourceError::Empty { .. })));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "word,rank").unwrap();
        writeln!(file, "film,1").unwrap();
        let list = StopWordList::from_path(file.path()).unwrap();
        assert!(list.is_stop_word("film"));

        let missing = StopWordList::from_path(Path::new("/no/such/stopwords.csv"));
        assert!(matches!(missing, Err(ResourceError::Io { .. })));
    }
}
