/*! Multi-word keyword collapsing

Multi-word terms (`new york`) can't be found by a whitespace tokenization.
Each of them is registered under a collapsed token (`newyork`), and every verbatim,
word-bounded occurrence in a text is replaced by that token before tokenizing.

Matching is done with a single alternation, longest terms first, so that
`new york city` wins over `new york` when both are registered.
!*/
use std::borrow::Cow;

use log::debug;
use regex::{Captures, Regex, RegexBuilder};

use crate::error::Error;

/// Compiled size limit, gazetteers can hold thousands of names.
const SIZE_LIMIT: usize = 1 << 27;

#[derive(Debug, Clone, Default)]
pub struct KeywordProcessor {
    pattern: Option<Regex>,
}

impl KeywordProcessor {
    /// Register the multi-word terms among `terms`.
    /// Single-word terms are ignored.
    pub fn new<'a>(terms: impl Iterator<Item = &'a str>) -> Result<Self, Error> {
        let mut multi: Vec<Vec<&str>> = terms
            .map(|term| term.split_whitespace().collect::<Vec<_>>())
            .filter(|words| words.len() > 1)
            .collect();

        if multi.is_empty() {
            return Ok(Self::default());
        }

        multi.sort_by(|a, b| {
            let len = |words: &Vec<&str>| words.iter().map(|w| w.len()).sum::<usize>();
            len(b).cmp(&len(a))
        });

        let alternatives: Vec<String> = multi
            .iter()
            .map(|words| {
                words
                    .iter()
                    .map(|word| regex::escape(word))
                    .collect::<Vec<_>>()
                    .join(r"\s+")
            })
            .collect();

        debug!("registering {} multi-word keywords", alternatives.len());
        let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternatives.join("|")))
            .size_limit(SIZE_LIMIT)
            .dfa_size_limit(SIZE_LIMIT)
            .build()?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Replace registered terms by their collapsed token.
    pub fn replace<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(text, |caps: &Captures| collapse(&caps[0])),
            None => Cow::Borrowed(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }
}

/// Token of a term: the term without its whitespace.
pub fn collapse(term: &str) -> String {
    term.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_term() {
        assert_eq!(collapse("new york"), "newyork");
        assert_eq!(collapse("sugar"), "sugar");
        assert_eq!(collapse("st  kitts\nisland"), "stkittsisland");
    }

    #[test]
    fn replaces() {
        let kp = KeywordProcessor::new(["new york", "sugar"].into_iter()).unwrap();
        assert_eq!(
            kp.replace("we sailed to new york last week"),
            "we sailed to newyork last week"
        );
    }

    #[test]
    fn word_bounded() {
        let kp = KeywordProcessor::new(["new york"].into_iter()).unwrap();
        assert_eq!(kp.replace("anew yorkshire"), "anew yorkshire");
    }

    #[test]
    fn longest_first() {
        let kp = KeywordProcessor::new(["new york", "new york city"].into_iter()).unwrap();
        assert_eq!(kp.replace("to new york city and new york"), "to newyorkcity and newyork");
    }

    #[test]
    fn no_multi_word() {
        let kp = KeywordProcessor::new(["sugar", "rum"].into_iter()).unwrap();
        assert!(kp.is_empty());
        assert!(matches!(kp.replace("sugar rum"), Cow::Borrowed(_)));
    }

    #[test]
    fn escapes() {
        let kp = KeywordProcessor::new(["st (kitts) island"].into_iter()).unwrap();
        assert_eq!(kp.replace("off st (kitts) island"), "off st(kitts)island");
    }
}
