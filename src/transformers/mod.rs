/*! Text transformers.

Transforms OCR text into clean, normalized paragraphs.

!*/

mod cleaner;
pub mod encoding;
mod normalize;
mod regroup;
mod spelling;
mod transform;

pub use cleaner::Cleaner;
pub use normalize::{remove_punctuation, Normalizer};
pub use regroup::Regroup;
pub use spelling::SpellingCorrector;
pub use transform::Transform;
