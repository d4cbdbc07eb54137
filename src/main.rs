//! # Newsprint
//!
//! Cleaning and keyword tagging of OCR'd colonial newspaper archives.
//!
//! ## Getting started
//!
//! ```sh
//! newsprint 0.1.0
//! cleaning and keyword tagging of newspaper archives.
//!
//! USAGE:
//!     newsprint <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     clean              Regroup and normalize article texts into cleaned article files
//!     cooccurrence       Count co-occurring terms per five-year interval
//!     extract-country    Extract paragraphs mentioning places of given countries
//!     filter-ads         Extract advertisements from the archive
//!     help               Prints this message or the help of the given subcommand(s)
//!     tag                Tag articles with goods and place names
//! ```
//!
//! Logging is controlled by `RUST_LOG` (ex. `RUST_LOG=info newsprint tag ...`).
use std::path::Path;
use std::sync::Arc;

use structopt::StructOpt;

use newsprint::error::Error;
use newsprint::filtering::PlaceFilter;
use newsprint::io::reader::read_tagged;
use newsprint::pipelines::{CleanPipeline, MetadataLookup, Pipeline, TagPipeline};
use newsprint::processing::{self, Cooccurrences, CountryExtractor};
use newsprint::tagging::{Gazetteer, Tagger, Vocabulary};
use newsprint::transformers::SpellingCorrector;

#[macro_use]
extern crate log;

mod cli;

fn load_corrector(path: Option<&Path>) -> Result<Option<SpellingCorrector>, Error> {
    path.map(SpellingCorrector::from_path).transpose()
}

fn load_words(path: Option<&Path>) -> Result<Vocabulary, Error> {
    match path {
        Some(path) => Vocabulary::from_path(path),
        None => Ok(Vocabulary::goods()),
    }
}

fn load_gazetteer(path: &Path, opts: &cli::PlaceOptions) -> Result<Gazetteer, Error> {
    let period = if opts.any_period {
        None
    } else {
        Some((opts.from_year, opts.to_year))
    };
    Gazetteer::with_filter(PlaceFilter::new(opts.min_place_length, period)).load(path)
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Newsprint::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Newsprint::Clean(c) => {
            let corrector = load_corrector(c.dictionary.as_deref())?;
            let mut p = CleanPipeline::new(c.src, c.dst, corrector)
                .with_batches(c.batches)
                .with_threads(c.threads);
            if let Some(metadata) = &c.metadata {
                p = p.with_metadata(Arc::new(MetadataLookup::from_path(metadata)?));
            }
            p.run()?;
        }

        cli::Newsprint::Tag(t) => {
            let mut vocabulary = load_words(t.words.as_deref())?;
            if let Some(gazetteer) = &t.gazetteer {
                vocabulary.extend(load_gazetteer(gazetteer, &t.places)?.names());
            }
            info!("vocabulary of {} terms", vocabulary.len());

            let tagger = Tagger::new(vocabulary)?;
            let corrector = load_corrector(t.dictionary.as_deref())?;
            let p = TagPipeline::new(t.src, t.dst, tagger, corrector)
                .with_batches(t.batches)
                .with_threads(t.threads);
            p.run()?;
        }

        cli::Newsprint::FilterAds(f) => {
            processing::filter_ads(&f.src, &f.dst)?;
        }

        cli::Newsprint::ExtractCountry(e) => {
            let gazetteer = load_gazetteer(&e.gazetteer, &e.places)?;
            let tagged = read_tagged(&e.tagged)?;
            let extractor = CountryExtractor::new(&gazetteer)
                .with_thresholds(e.threshold, e.paragraph_threshold);

            for country in &e.countries {
                let dst = e.dst.join(format!("articles_{}", country.replace(' ', "_")));
                extractor.extract(country, &tagged, &e.articles, &dst)?;
            }
        }

        cli::Newsprint::Cooccurrence(c) => {
            let goods = load_words(c.words.as_deref())?;
            let tagged = read_tagged(&c.tagged)?;
            Cooccurrences::count(&tagged, &goods).write(&c.dst)?;
        }
    };
    Ok(())
}
