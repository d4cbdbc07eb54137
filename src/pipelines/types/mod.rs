mod article;
mod found_words;

pub use article::{is_plain_file_name, Article, ArticleId};
pub use found_words::{FoundWords, TaggedArticle};
