//! Record-level filtering.
use crate::pipelines::types::Article;

use super::Filter;

/// Keeps articles whose `articleType` belongs to a set of accepted types.
///
/// Defaults to advertisement types.
pub struct ArticleTypeFilter {
    kinds: Vec<String>,
}

impl ArticleTypeFilter {
    pub fn new(kinds: Vec<String>) -> Self {
        Self { kinds }
    }

    pub fn kinds(&self) -> &[String] {
        &self.kinds
    }
}

impl Default for ArticleTypeFilter {
    fn default() -> Self {
        Self::new(
            ["Classified ads", "Advertisement", "Advertisements and Notices"]
                .iter()
                .map(|kind| kind.to_string())
                .collect(),
        )
    }
}

impl Filter<&Article> for ArticleTypeFilter {
    fn detect(&self, article: &Article) -> bool {
        match article.article_type() {
            Some(kind) => self.kinds.iter().any(|k| k == kind),
            None => false,
        }
    }
}
