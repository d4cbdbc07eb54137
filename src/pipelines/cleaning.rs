//! Cleaning pipeline
//!
//! Source files are processed in batches on a worker pool.
//! Each article's raw text is regrouped into paragraphs, which are then normalized (and optionally spell-corrected).
//! Articles with at least one paragraph left are written in their own file,
//! `<dst>/<issueID>_<articleID>.json`, with their paragraphs in `texts`
//! and, when a metadata lookup is provided, `meta_<column>` fields.
//! Articles whose identity can't be used as a file name, or that can't be written, are skipped.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info, warn};
use rayon::prelude::*;
use serde_json::Value;

use crate::error::Error;
use crate::io::reader::{list_files, read_articles};
use crate::io::writer::write_json;
use crate::pipelines::batch::{self, DEFAULT_BATCHES};
use crate::pipelines::metadata::MetadataLookup;
use crate::pipelines::pipeline::Pipeline;
use crate::pipelines::types::Article;
use crate::transformers::{Cleaner, SpellingCorrector};

/// What a run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    pub files: usize,
    pub malformed_files: usize,
    pub articles: usize,
    pub skipped_articles: usize,
    pub written: usize,
}

impl CleanReport {
    fn add_file(&mut self, other: CleanReport) {
        self.articles += other.articles;
        self.skipped_articles += other.skipped_articles;
        self.written += other.written;
    }
}

pub struct CleanPipeline {
    src: PathBuf,
    dst: PathBuf,
    cleaner: Cleaner,
    metadata: Option<Arc<MetadataLookup>>,
    nb_batches: usize,
    nb_threads: Option<usize>,
}

impl CleanPipeline {
    pub fn new(src: PathBuf, dst: PathBuf, corrector: Option<SpellingCorrector>) -> Self {
        Self {
            src,
            dst,
            cleaner: Cleaner::with_spelling(corrector),
            metadata: None,
            nb_batches: DEFAULT_BATCHES,
            nb_threads: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Arc<MetadataLookup>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_batches(mut self, nb_batches: usize) -> Self {
        self.nb_batches = nb_batches;
        self
    }

    pub fn with_threads(mut self, nb_threads: Option<usize>) -> Self {
        self.nb_threads = nb_threads;
        self
    }

    /// Build the cleaned version of an article.
    ///
    /// Returns `Ok(None)` when no paragraph is kept,
    /// and errors when the article lacks identity or text.
    pub fn clean_article(&self, article: &Article) -> Result<Option<Article>, Error> {
        let id = article.id()?;
        let text = article
            .text()
            .ok_or_else(|| Error::MissingText(id.to_string()))?;

        let paragraphs = self.cleaner.clean_text(text);
        if paragraphs.is_empty() {
            debug!("{}: no paragraph kept", id);
            return Ok(None);
        }

        let mut cleaned = article.clone();
        if let Some(metadata) = &self.metadata {
            if !metadata.enrich(&mut cleaned) {
                debug!("{}: no metadata", id);
            }
        }

        let mut cleaned = cleaned.with_texts(paragraphs);
        cleaned.insert("file_name".to_string(), Value::String(id.file_name()?));
        Ok(Some(cleaned))
    }

    fn process_file(&self, path: &Path) -> Result<CleanReport, Error> {
        let articles = read_articles(path)?;
        let mut report = CleanReport {
            articles: articles.len(),
            ..Default::default()
        };

        for article in &articles {
            match self.clean_article(article) {
                Ok(Some(cleaned)) => match self.write_cleaned(&cleaned) {
                    Ok(()) => report.written += 1,
                    Err(e) => {
                        warn!("{:?}: could not write article: {}", path, e);
                        report.skipped_articles += 1;
                    }
                },
                Ok(None) => (),
                Err(e) => {
                    warn!("{:?}: skipping article: {}", path, e);
                    report.skipped_articles += 1;
                }
            }
        }

        Ok(report)
    }

    fn write_cleaned(&self, cleaned: &Article) -> Result<(), Error> {
        let file_name = cleaned.id()?.file_name()?;
        write_json(&self.dst.join(file_name), cleaned)
    }
}

impl Pipeline<CleanReport> for CleanPipeline {
    fn run(&self) -> Result<CleanReport, Error> {
        let files = list_files(&self.src, "*.json")?;
        info!("number of source files: {}", files.len());

        if !self.dst.exists() {
            warn!("Destination does not exist. Creating {:?}", self.dst);
            std::fs::create_dir_all(&self.dst)?;
        }

        let pool = batch::thread_pool(self.nb_threads)?;
        let mut report = CleanReport {
            files: files.len(),
            ..Default::default()
        };

        let batches = batch::batches(&files, self.nb_batches);
        let nb_batches = batches.len();
        for (idx, batch) in batches.into_iter().enumerate() {
            info!(
                "processing batch {}/{} with {} files",
                idx + 1,
                nb_batches,
                batch.len()
            );

            let results: Vec<Result<CleanReport, Error>> =
                pool.install(|| batch.par_iter().map(|path| self.process_file(path)).collect());

            let written = report.written;
            for (path, result) in batch.iter().zip(results) {
                match result {
                    Ok(file_report) => report.add_file(file_report),
                    Err(e) => {
                        warn!("skipping malformed file {:?}: {}", path, e);
                        report.malformed_files += 1;
                    }
                }
            }
            info!(
                "batch {} produced {} cleaned articles",
                idx + 1,
                report.written - written
            );
        }

        info!("{:?}", report);
        Ok(report)
    }
}
