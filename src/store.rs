//! Deduplicated word accumulator shared by every generation step

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, WordlistForgeError};

/// Set of generated words
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    words: HashSet<String>,
}

impl Wordlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Insert a word, returns true if it was not present yet
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Insert every word, returns how many were new
    pub fn extend_counting<I>(&mut self, words: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let before = self.words.len();
        self.words.extend(words.into_iter().map(Into::into));
        self.words.len() - before
    }

    /// Iterate in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.words.iter()
    }

    /// Copy of the current contents, for transforms that must not see their own output
    pub fn snapshot(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    /// Keep only words whose character count is in `min_len..=max_len`.
    /// Returns the number of words removed.
    pub fn filter_by_length(&mut self, min_len: usize, max_len: usize) -> usize {
        let before = self.words.len();
        self.words.retain(|w| {
            let len = w.chars().count();
            min_len <= len && len <= max_len
        });
        before - self.words.len()
    }

    /// Truncate to `max_words` entries, keeping the lexicographically
    /// smallest. Returns the number of words removed.
    pub fn limit_count(&mut self, max_words: usize) -> usize {
        if self.words.len() <= max_words {
            return 0;
        }
        let before = self.words.len();
        let mut sorted: Vec<String> = self.words.drain().collect();
        sorted.sort_unstable();
        sorted.truncate(max_words);
        self.words = sorted.into_iter().collect();
        before - self.words.len()
    }

    /// Sorted copy of every word
    pub fn export(&self) -> Vec<String> {
        let mut words = self.snapshot();
        words.sort_unstable();
        words
    }

    /// Add each non-empty trimmed line of a file. Invalid UTF-8 sequences
    /// are dropped. Returns the number of new words.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let bytes = std::fs::read(path).map_err(|e| {
            WordlistForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;
        let content: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
        Ok(self.extend_counting(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        ))
    }
}

impl FromIterator<String> for Wordlist {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Wordlist {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_set_semantics() {
        let mut store = Wordlist::new();
        assert!(store.insert("alex"));
        assert!(!store.insert("alex"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.extend_counting(["alex", "bob", "bob"]), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_filter_by_length_is_exact() {
        let mut store: Wordlist = ["abc", "abcd", "abcdefghijkl", "abcdefghijklm"]
            .into_iter()
            .collect();
        let removed = store.filter_by_length(4, 12);
        assert_eq!(removed, 2);
        assert!(store.iter().all(|w| (4..=12).contains(&w.chars().count())));
        assert!(store.contains("abcd"));
        assert!(store.contains("abcdefghijkl"));
    }

    #[test]
    fn test_filter_counts_chars_not_bytes() {
        let mut store: Wordlist = ["ñañá"].into_iter().collect();
        assert_eq!(store.filter_by_length(4, 4), 0);
    }

    #[test]
    fn test_limit_count() {
        let mut store: Wordlist = ["d", "b", "a", "c"].into_iter().collect();
        assert_eq!(store.limit_count(10), 0);
        assert_eq!(store.len(), 4);
        assert_eq!(store.limit_count(2), 2);
        assert_eq!(store.export(), vec!["a", "b"]);
    }

    #[test]
    fn test_export_sorted() {
        let store: Wordlist = ["b", "B", "a"].into_iter().collect();
        assert_eq!(store.export(), vec!["B", "a", "b"]);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  alpha ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "beta").unwrap();
        writeln!(file, "alpha").unwrap();

        let mut store = Wordlist::new();
        store.insert("beta");
        assert_eq!(store.load_file(file.path()).unwrap(), 1);
        assert!(store.contains("alpha"));
    }

    #[test]
    fn test_load_file_drops_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"pass\xffword\n\xfe\n").unwrap();

        let mut store = Wordlist::new();
        assert_eq!(store.load_file(file.path()).unwrap(), 1);
        assert_eq!(store.export(), vec!["password"]);
    }

    #[test]
    fn test_load_missing_file() {
        let mut store = Wordlist::new();
        let err = store
            .load_file(Path::new("/definitely/not/here.txt"))
            .unwrap_err();
        assert!(matches!(err, WordlistForgeError::Io { path: Some(_), .. }));
        assert!(store.is_empty());
    }
}
