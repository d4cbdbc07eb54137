//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "newsprint",
    about = "cleaning and keyword tagging of newspaper archives."
)]
/// Holds every command that is callable by the `newsprint` command.
pub enum Newsprint {
    #[structopt(about = "Regroup and normalize article texts into cleaned article files")]
    Clean(Clean),
    #[structopt(about = "Tag articles with goods and place names")]
    Tag(Tag),
    #[structopt(about = "Extract advertisements from the archive")]
    FilterAds(FilterAds),
    #[structopt(about = "Extract paragraphs mentioning places of given countries")]
    ExtractCountry(ExtractCountry),
    #[structopt(about = "Count co-occurring terms per five-year interval")]
    Cooccurrence(Cooccurrence),
}

#[derive(Debug, StructOpt)]
/// Clean command and parameters.
///
/// ```sh
/// newsprint-clean 0.1.0
/// Regroup and normalize article texts into cleaned article files
///
/// USAGE:
///     newsprint clean [OPTIONS] <src> <dst>
///
/// OPTIONS:
///     -b, --batches <batches>          number of batches [default: 100]
///     -d, --dictionary <dictionary>    spelling frequency dictionary
///     -m, --metadata <metadata>        newspaper metadata CSV
///     -t, --threads <threads>          number of worker threads. Default is one per core.
///
/// ARGS:
///     <src>    source articles folder
///     <dst>    cleaned articles folder
/// ```
pub struct Clean {
    #[structopt(parse(from_os_str), help = "source articles folder")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "cleaned articles folder")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "m",
        long = "metadata",
        help = "newspaper metadata CSV"
    )]
    pub metadata: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "dictionary",
        help = "spelling frequency dictionary"
    )]
    pub dictionary: Option<PathBuf>,
    #[structopt(
        short = "b",
        long = "batches",
        help = "number of batches",
        default_value = "100"
    )]
    pub batches: usize,
    #[structopt(
        short = "t",
        long = "threads",
        help = "number of worker threads. Default is one per core."
    )]
    pub threads: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Tag command and parameters.
pub struct Tag {
    #[structopt(parse(from_os_str), help = "source articles folder")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination JSONL file")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "g",
        long = "gazetteer",
        help = "gazetteer (geojson or csv)"
    )]
    pub gazetteer: Option<PathBuf>,
    #[structopt(flatten)]
    pub places: PlaceOptions,
    #[structopt(
        parse(from_os_str),
        short = "w",
        long = "words",
        help = "word list, one term per line. Default is a list of trade goods."
    )]
    pub words: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "dictionary",
        help = "spelling frequency dictionary"
    )]
    pub dictionary: Option<PathBuf>,
    #[structopt(
        short = "b",
        long = "batches",
        help = "number of batches",
        default_value = "100"
    )]
    pub batches: usize,
    #[structopt(
        short = "t",
        long = "threads",
        help = "number of worker threads. Default is one per core."
    )]
    pub threads: Option<usize>,
}

#[derive(Debug, StructOpt)]
pub struct FilterAds {
    #[structopt(parse(from_os_str), help = "source articles folder")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination JSON file")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct ExtractCountry {
    #[structopt(parse(from_os_str), help = "gazetteer (geojson or csv)")]
    pub gazetteer: PathBuf,
    #[structopt(parse(from_os_str), help = "tagged articles JSONL file")]
    pub tagged: PathBuf,
    #[structopt(parse(from_os_str), help = "cleaned articles folder")]
    pub articles: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "destination folder. One articles_<country> folder is created per country."
    )]
    pub dst: PathBuf,
    #[structopt(required = true, help = "countries of interest")]
    pub countries: Vec<String>,
    #[structopt(
        long = "threshold",
        help = "minimum number of place mentions in an article",
        default_value = "5"
    )]
    pub threshold: usize,
    #[structopt(
        long = "paragraph-threshold",
        help = "a paragraph is kept if it has more place mentions than this",
        default_value = "3"
    )]
    pub paragraph_threshold: usize,
    #[structopt(flatten)]
    pub places: PlaceOptions,
}

#[derive(Debug, StructOpt)]
/// Gazetteer place filtering.
pub struct PlaceOptions {
    #[structopt(
        long = "min-place-length",
        help = "places with shorter names are ignored",
        default_value = "4"
    )]
    pub min_place_length: usize,
    #[structopt(
        long = "from-year",
        help = "ignore dated places not attested since this year",
        default_value = "1600"
    )]
    pub from_year: i32,
    #[structopt(
        long = "to-year",
        help = "ignore dated places not attested until this year",
        default_value = "1800"
    )]
    pub to_year: i32,
    #[structopt(long = "any-period", help = "keep places regardless of their dates")]
    pub any_period: bool,
}

#[derive(Debug, StructOpt)]
pub struct Cooccurrence {
    #[structopt(parse(from_os_str), help = "tagged articles JSONL file")]
    pub tagged: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "w",
        long = "words",
        help = "goods list, one term per line. Default is a list of trade goods."
    )]
    pub words: Option<PathBuf>,
}
