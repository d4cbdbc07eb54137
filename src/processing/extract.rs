/*! Country paragraph extraction

Selects, in tagged articles, the paragraphs that mention places of a given country.

A paragraph is selected when it mentions more than `paragraph_threshold` places of the country.
An article is kept when it mentions at least `threshold` places of the country overall,
and has at least one selected paragraph.
Kept articles are read back from the cleaned articles folder, and written with their selected paragraphs only.
!*/
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info, warn};
use rayon::prelude::*;
use serde_json::Value;

use crate::error::Error;
use crate::io::writer::write_json;
use crate::pipelines::types::{is_plain_file_name, Article, FoundWords, TaggedArticle};
use crate::tagging::Gazetteer;

pub const DEFAULT_THRESHOLD: usize = 5;
pub const DEFAULT_PARAGRAPH_THRESHOLD: usize = 3;

pub struct CountryExtractor<'a> {
    gazetteer: &'a Gazetteer,
    threshold: usize,
    paragraph_threshold: usize,
}

impl<'a> CountryExtractor<'a> {
    pub fn new(gazetteer: &'a Gazetteer) -> Self {
        Self {
            gazetteer,
            threshold: DEFAULT_THRESHOLD,
            paragraph_threshold: DEFAULT_PARAGRAPH_THRESHOLD,
        }
    }

    pub fn with_thresholds(mut self, threshold: usize, paragraph_threshold: usize) -> Self {
        self.threshold = threshold;
        self.paragraph_threshold = paragraph_threshold;
        self
    }

    /// Indices of the selected paragraphs, if the article is kept.
    pub fn select(&self, found_words: &FoundWords, places: &HashSet<String>) -> Option<Vec<usize>> {
        let mut total = 0;
        let mut selected = Vec::new();

        for (idx, words) in found_words.iter() {
            let count = words.iter().filter(|w| places.contains(w.as_str())).count();
            total += count;
            if count > self.paragraph_threshold {
                selected.push(*idx);
            }
        }

        if total >= self.threshold && !selected.is_empty() {
            Some(selected)
        } else {
            None
        }
    }

    /// Extract the paragraphs of `country` from `tagged` articles into `dst`.
    ///
    /// Cleaned articles are read from `articles`. Returns the number of written files.
    pub fn extract(
        &self,
        country: &str,
        tagged: &[TaggedArticle],
        articles: &Path,
        dst: &Path,
    ) -> Result<usize, Error> {
        let places: HashSet<String> = self.gazetteer.country_places(country).into_iter().collect();
        info!("Found {} places in {}", places.len(), country);

        std::fs::create_dir_all(dst)?;

        let written: usize = tagged
            .par_iter()
            .filter_map(|t| self.select(t.found_words(), &places).map(|sel| (t, sel)))
            .map(|(t, selected)| match self.write_selection(t, &selected, country, articles, dst) {
                Ok(()) => 1,
                Err(e) => {
                    warn!("skipping article {:?}: {}", t.article().article_id(), e);
                    0
                }
            })
            .sum();

        info!("{}: {} files written", country, written);
        Ok(written)
    }

    fn write_selection(
        &self,
        tagged: &TaggedArticle,
        selected: &[usize],
        country: &str,
        articles: &Path,
        dst: &Path,
    ) -> Result<(), Error> {
        let file_name = match tagged.article().file_name() {
            Some(file_name) if is_plain_file_name(file_name) => file_name.to_string(),
            Some(file_name) => return Err(Error::InvalidIdentity(file_name.to_string())),
            None => tagged.article().id()?.file_name()?,
        };

        let source: Article =
            serde_json::from_reader(BufReader::new(File::open(articles.join(&file_name))?))?;
        let texts = source
            .texts()
            .ok_or_else(|| Error::MissingText(file_name.clone()))?;

        let kept: Vec<String> = selected
            .iter()
            .filter_map(|idx| {
                let text = texts.get(*idx);
                if text.is_none() {
                    warn!("{}: no paragraph {}", file_name, idx);
                }
                text.cloned()
            })
            .collect();

        debug!("{}: keeping {} paragraphs", file_name, kept.len());
        let mut filtered = source.with_texts(kept);
        filtered.insert("country".to_string(), Value::String(country.to_string()));
        write_json(&dst.join(&file_name), &filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(paragraphs: Vec<(usize, Vec<&str>)>) -> FoundWords {
        let mut fw = FoundWords::default();
        for (idx, words) in paragraphs {
            fw.insert(idx, words.iter().map(|w| w.to_string()).collect());
        }
        fw
    }

    fn places() -> HashSet<String> {
        ["bengal", "madras", "bombay", "calcutta", "india"]
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn select() {
        let g = Gazetteer::default();
        let e = CountryExtractor::new(&g).with_thresholds(2, 1);

        let fw = found(vec![(0, vec!["sugar", "bengal"]), (2, vec!["madras", "bombay", "rum"])]);
        assert_eq!(e.select(&fw, &places()), Some(vec![2]));

        // enough mentions but scattered over paragraphs
        let fw = found(vec![(0, vec!["bengal"]), (1, vec!["madras"])]);
        assert_eq!(e.select(&fw, &places()), None);
    }

    #[test]
    fn default_thresholds() {
        let g = Gazetteer::default();
        let e = CountryExtractor::new(&g);

        let fw = found(vec![
            (0, vec!["bengal", "madras", "bombay", "calcutta"]),
            (1, vec!["india"]),
        ]);
        assert_eq!(e.select(&fw, &places()), Some(vec![0]));

        let fw = found(vec![(0, vec!["bengal", "madras", "bombay", "calcutta"])]);
        assert_eq!(e.select(&fw, &places()), None);
    }
}
