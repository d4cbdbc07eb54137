//! Found-words map and tagged records.
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::Article;

/// Paragraph index -> vocabulary terms matched in that paragraph.
///
/// Paragraphs without matches never get an entry.
/// Serializes as a JSON object keyed by the paragraph index as a string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoundWords(BTreeMap<usize, Vec<String>>);

impl FoundWords {
    /// Record matches for a paragraph. Empty match lists are ignored.
    pub fn insert(&mut self, paragraph: usize, words: Vec<String>) {
        if !words.is_empty() {
            self.0.insert(paragraph, words);
        }
    }

    pub fn get(&self, paragraph: usize) -> Option<&Vec<String>> {
        self.0.get(&paragraph)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&usize, &Vec<String>)> {
        self.0.iter()
    }

    /// Distinct terms found across all paragraphs.
    pub fn terms(&self) -> BTreeSet<&str> {
        self.0
            .values()
            .flat_map(|words| words.iter().map(String::as_str))
            .collect()
    }
}

/// A line of the tagging output: the article without its text, plus its [FoundWords].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedArticle {
    #[serde(flatten)]
    article: Article,
    found_words: FoundWords,
}

impl TaggedArticle {
    /// Strips the article's text fields.
    pub fn new(article: Article, found_words: FoundWords) -> Self {
        Self {
            article: article.without_text(),
            found_words,
        }
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn found_words(&self) -> &FoundWords {
        &self.found_words
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_matches_are_not_inserted() {
        let mut fw = FoundWords::default();
        fw.insert(0, vec![]);
        assert!(fw.is_empty());

        fw.insert(3, vec!["sugar".to_string()]);
        assert_eq!(fw.len(), 1);
        assert_eq!(fw.get(3), Some(&vec!["sugar".to_string()]));
    }

    #[test]
    fn serialize_tagged() {
        let mut fw = FoundWords::default();
        fw.insert(2, vec!["rum".to_string(), "jamaica".to_string()]);
        fw.insert(0, vec!["sugar".to_string()]);

        let article = Article::new("i", "a", "some text".to_string());
        let tagged = TaggedArticle::new(article, fw);

        let value = serde_json::to_value(&tagged).unwrap();
        assert_eq!(
            value,
            json!({
                "issueID": "i",
                "articleID": "a",
                "found_words": {"0": ["sugar"], "2": ["rum", "jamaica"]},
            })
        );

        let back: TaggedArticle = serde_json::from_value(value).unwrap();
        assert_eq!(back, tagged);
    }

    #[test]
    fn distinct_terms() {
        let mut fw = FoundWords::default();
        fw.insert(0, vec!["sugar".to_string(), "rum".to_string()]);
        fw.insert(1, vec!["sugar".to_string()]);
        let terms: Vec<&str> = fw.terms().into_iter().collect();
        assert_eq!(terms, vec!["rum", "sugar"]);
    }
}
