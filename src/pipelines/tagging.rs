//! Keyword tagging pipeline
//!
//! Source files are processed in batches on a worker pool:
//!
//! 1. each file is read (malformed files are skipped and logged),
//! 1. each article's text is regrouped into paragraphs (or its `texts` are taken as is),
//! 1. paragraphs are normalized, and optionally spell-corrected,
//! 1. paragraphs are tagged against the vocabulary,
//! 1. articles with at least one match are appended to a JSONL file.
//!
//! The output file is flushed after each batch, so that an interrupted run keeps the batches already processed.
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::error::Error;
use crate::io::reader::{list_files, read_articles};
use crate::io::writer::{JsonlWriter, WriterTrait};
use crate::pipelines::batch::{self, DEFAULT_BATCHES};
use crate::pipelines::pipeline::Pipeline;
use crate::pipelines::types::{Article, TaggedArticle};
use crate::tagging::Tagger;
use crate::transformers::{Cleaner, SpellingCorrector};

/// What a run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TagReport {
    pub files: usize,
    pub malformed_files: usize,
    pub articles: usize,
    pub skipped_articles: usize,
    pub written: usize,
}

/// Result of a single source file.
#[derive(Debug, Default)]
struct FileTags {
    articles: usize,
    skipped: usize,
    tagged: Vec<TaggedArticle>,
}

pub struct TagPipeline {
    src: PathBuf,
    dst: PathBuf,
    tagger: Tagger,
    cleaner: Cleaner,
    nb_batches: usize,
    nb_threads: Option<usize>,
}

impl TagPipeline {
    /// Tag the `*.json` files of `src` into the `dst` JSONL file.
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        tagger: Tagger,
        corrector: Option<SpellingCorrector>,
    ) -> Self {
        if corrector.is_none() {
            debug!("no spelling dictionary, paragraphs won't be corrected");
        }

        Self {
            src,
            dst,
            tagger,
            cleaner: Cleaner::with_spelling(corrector),
            nb_batches: DEFAULT_BATCHES,
            nb_threads: None,
        }
    }

    pub fn with_batches(mut self, nb_batches: usize) -> Self {
        self.nb_batches = nb_batches;
        self
    }

    pub fn with_threads(mut self, nb_threads: Option<usize>) -> Self {
        self.nb_threads = nb_threads;
        self
    }

    /// Tag a single article.
    ///
    /// Returns `Ok(None)` when nothing matched,
    /// and errors when the article lacks identity or text.
    pub fn tag_article(&self, article: Article) -> Result<Option<TaggedArticle>, Error> {
        let id = article.id()?;
        let paragraphs = self
            .cleaner
            .paragraphs(&id.to_string(), article.text(), article.texts())?;

        let found_words = self.tagger.tag(&paragraphs);
        if found_words.is_empty() {
            debug!("{}: no match in {} paragraphs", id, paragraphs.len());
            return Ok(None);
        }

        debug!("{}: matches in {} paragraphs", id, found_words.len());
        Ok(Some(TaggedArticle::new(article, found_words)))
    }

    fn process_file(&self, path: &Path) -> Result<FileTags, Error> {
        let articles = read_articles(path)?;
        let mut result = FileTags {
            articles: articles.len(),
            ..Default::default()
        };

        for article in articles {
            match self.tag_article(article) {
                Ok(Some(tagged)) => result.tagged.push(tagged),
                Ok(None) => (),
                Err(e) => {
                    warn!("{:?}: skipping article: {}", path, e);
                    result.skipped += 1;
                }
            }
        }

        Ok(result)
    }
}

impl Pipeline<TagReport> for TagPipeline {
    fn run(&self) -> Result<TagReport, Error> {
        let files = list_files(&self.src, "*.json")?;
        info!("number of source files: {}", files.len());

        let pool = batch::thread_pool(self.nb_threads)?;
        let mut writer: JsonlWriter<TaggedArticle> = JsonlWriter::new(&self.dst)?;
        let mut report = TagReport {
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

            let results: Vec<Result<FileTags, Error>> =
                pool.install(|| batch.par_iter().map(|path| self.process_file(path)).collect());

            let mut tagged = Vec::new();
            for (path, result) in batch.iter().zip(results) {
                match result {
                    Ok(file_tags) => {
                        report.articles += file_tags.articles;
                        report.skipped_articles += file_tags.skipped;
                        tagged.extend(file_tags.tagged);
                    }
                    Err(e) => {
                        warn!("skipping malformed file {:?}: {}", path, e);
                        report.malformed_files += 1;
                    }
                }
            }

            writer.write(&tagged)?;
            report.written += tagged.len();
            info!("batch {} produced {} tagged articles", idx + 1, tagged.len());
        }

        info!("{:?}", report);
        Ok(report)
    }
}
