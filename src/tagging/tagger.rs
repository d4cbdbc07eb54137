//! Paragraph keyword tagging.
use std::collections::HashSet;

use log::debug;

use crate::error::Error;
use crate::pipelines::types::FoundWords;

use super::keywords::{collapse, KeywordProcessor};
use super::Vocabulary;

/// Finds vocabulary terms in normalized paragraphs.
///
/// Built once and shared by reference between workers.
#[derive(Debug, Clone)]
pub struct Tagger {
    vocabulary: Vocabulary,
    keywords: KeywordProcessor,
    // token looked up for each vocabulary term, in vocabulary order
    tokens: Vec<String>,
}

impl Tagger {
    pub fn new(vocabulary: Vocabulary) -> Result<Self, Error> {
        let keywords = KeywordProcessor::new(vocabulary.iter())?;
        let tokens = vocabulary.iter().map(collapse).collect();
        debug!("tagger built with {} terms", vocabulary.len());

        Ok(Self {
            vocabulary,
            keywords,
            tokens,
        })
    }

    /// Matched terms of a single paragraph, in vocabulary order.
    pub fn tag_paragraph(&self, paragraph: &str) -> Vec<String> {
        let text = self.keywords.replace(paragraph);
        let tokens: HashSet<&str> = text.split_whitespace().collect();

        self.vocabulary
            .iter()
            .zip(self.tokens.iter())
            .filter(|(_, token)| tokens.contains(token.as_str()))
            .map(|(term, _)| term.to_string())
            .collect()
    }

    /// Tag each paragraph. Paragraphs without match have no entry.
    pub fn tag<S: AsRef<str>>(&self, paragraphs: &[S]) -> FoundWords {
        let mut found_words = FoundWords::default();
        for (idx, paragraph) in paragraphs.iter().enumerate() {
            found_words.insert(idx, self.tag_paragraph(paragraph.as_ref()));
        }

        found_words
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}
