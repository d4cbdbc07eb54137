/*! Downstream processing

Stages that work on the raw archive (advertisement extraction)
or on the output of the tagging pipeline (country extraction, co-occurrence counting).
!*/
pub mod ads;
pub mod cooccurrence;
pub mod extract;

pub use ads::filter_ads;
pub use cooccurrence::{Cooccurrences, PairKind};
pub use extract::CountryExtractor;
