/*! Keyword and place tagging.

Vocabularies (trade goods, demographic terms, gazetteer place names) are looked for in normalized paragraphs,
and matches are recorded per paragraph index.
!*/
mod gazetteer;
mod keywords;
mod tagger;
mod vocabulary;

pub use gazetteer::{Gazetteer, Place, Span};
pub use keywords::{collapse, KeywordProcessor};
pub use tagger::Tagger;
pub use vocabulary::{normalize_term, Vocabulary, DEFAULT_GOODS};
