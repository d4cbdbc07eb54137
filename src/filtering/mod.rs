/*! Filtering utilities

Filters operate on paragraph, record or gazetteer place level, and implement [filter::Filter]:
they are pure, and return `true` for items that should be kept.
! */
mod filter;
mod paragraph;
mod place;
mod record;

pub use filter::Filter;
pub use paragraph::ParagraphFilter;
pub use place::PlaceFilter;
pub use record::ArticleTypeFilter;
