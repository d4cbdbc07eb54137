/*! Archive reading utilities

Source files hold either one article record or an array of records.
!*/
mod articles;

pub use articles::{list_files, read_articles, read_tagged};
