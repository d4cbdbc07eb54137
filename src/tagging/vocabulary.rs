//! Ordered keyword vocabulary.
use std::collections::HashSet;
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::transformers::Normalizer;

/// Trade goods looked for when no word list is provided.
pub const DEFAULT_GOODS: [&str; 8] = [
    "furs", "tobacco", "rice", "indigo", "sugar", "rum", "molasses", "negroes",
];

/// Ordered, deduplicated set of normalized terms.
///
/// Terms go through the paragraph [Normalizer] (plus whitespace collapsing),
/// so that they can be matched against normalized text.
/// Order of insertion is kept, and is the order of matched terms in tagging results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    seen: HashSet<String>,
}

impl Vocabulary {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self::default();
        vocabulary.extend(terms);
        vocabulary
    }

    /// Vocabulary of [DEFAULT_GOODS].
    pub fn goods() -> Self {
        Self::new(DEFAULT_GOODS)
    }

    /// Read a word list, one term per line.
    ///
    /// Errors if the file can't be read or contains no term.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        let vocabulary = Self::new(content.lines());
        if vocabulary.is_empty() {
            return Err(Error::Custom(format!("no term in word list {:?}", path)));
        }

        info!("loaded {} terms from {:?}", vocabulary.len(), path);
        Ok(vocabulary)
    }

    /// Add terms, ignoring empty and already present ones.
    pub fn extend<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            self.push(term.as_ref());
        }
    }

    /// Add a term. Returns `false` if it is empty or already present.
    pub fn push(&mut self, term: &str) -> bool {
        let term = normalize_term(term);
        if term.is_empty() || self.seen.contains(&term) {
            return false;
        }

        self.seen.insert(term.clone());
        self.terms.push(term);
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.seen.contains(term)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Normalize a term like a paragraph, and collapse whitespace.
pub fn normalize_term(term: &str) -> String {
    Normalizer
        .normalize(term)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes() {
        assert_eq!(normalize_term("  New   York "), "new york");
        assert_eq!(normalize_term("St. Kitts"), "st kitts");
        assert_eq!(normalize_term("Rum"), "rum");
    }

    #[test]
    fn normalizes_typography() {
        assert_eq!(normalize_term("Cote d’Ivoire"), "cote divoire");
        assert_eq!(normalize_term("ﬁsh"), "fish");
        assert_eq!(normalize_term("Hoſpital"), "hospital");
        // decomposed accent
        assert_eq!(normalize_term("Cura\u{301}c\u{327}ao"), "cur\u{e1}\u{e7}ao");
        assert_eq!(normalize_term("St. Kitts — Nevis"), "st kitts nevis");
    }

    #[test]
    fn keeps_order_and_dedups() {
        let v = Vocabulary::new(["Sugar", "india", "sugar", "", "  ", "New York"]);
        assert_eq!(v.terms(), &["sugar", "india", "new york"]);
        assert!(v.contains("india"));
        assert!(!v.contains("Sugar"));
    }

    #[test]
    fn goods() {
        let v = Vocabulary::goods();
        assert_eq!(v.len(), 8);
        assert_eq!(v.terms()[0], "furs");
        assert_eq!(v.terms()[7], "negroes");
    }

    #[test]
    fn from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "cotton\nSugar\n\ncotton\n").unwrap();
        let v = Vocabulary::from_path(&path).unwrap();
        assert_eq!(v.terms(), &["cotton", "sugar"]);

        let empty = dir.path().join("empty.txt");
        std::fs::write(&empty, "\n\n").unwrap();
        assert!(Vocabulary::from_path(&empty).is_err());
        assert!(Vocabulary::from_path(&dir.path().join("missing.txt")).is_err());
    }
}
