//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
#[allow(dead_code)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Regex(regex::Error),
    ThreadPool(rayon::ThreadPoolBuildError),
    /// Record lacks `issueID` and/or `articleID`.
    MissingIdentity,
    /// Record has neither `text` nor `texts`.
    MissingText(String),
    /// Record identity can't be used as a file name.
    InvalidIdentity(String),
    /// Spelling dictionary could not be loaded.
    Dictionary(String),
    UnsupportedFormat(PathBuf),
    Custom(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Glob(e) => write!(f, "glob error: {}", e),
            Error::GlobPattern(e) => write!(f, "glob pattern error: {}", e),
            Error::Regex(e) => write!(f, "regex error: {}", e),
            Error::ThreadPool(e) => write!(f, "thread pool error: {}", e),
            Error::MissingIdentity => write!(f, "record has no (issueID, articleID) identity"),
            Error::MissingText(id) => write!(f, "record {} has no text", id),
            Error::InvalidIdentity(id) => write!(f, "{:?} is not a valid file name", id),
            Error::Dictionary(e) => write!(f, "dictionary error: {}", e),
            Error::UnsupportedFormat(p) => write!(f, "unsupported file format: {:?}", p),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Error {
        Error::Regex(e)
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(e: rayon::ThreadPoolBuildError) -> Error {
        Error::ThreadPool(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
