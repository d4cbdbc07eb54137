/*! Advertisement extraction

Collects every advertisement record of an archive into a single JSON array.
!*/
use std::path::Path;

use log::{info, warn};
use rayon::prelude::*;

use crate::error::Error;
use crate::filtering::{ArticleTypeFilter, Filter};
use crate::io::reader::{list_files, read_articles};
use crate::io::writer::write_json;
use crate::pipelines::types::Article;

/// Keep records of `src` that pass `filter`, and write them as a JSON array at `dst`.
///
/// Returns the number of kept records.
pub fn filter_records(src: &Path, dst: &Path, filter: &ArticleTypeFilter) -> Result<usize, Error> {
    let files = list_files(src, "*.json")?;
    info!("number of source files: {}", files.len());

    let results: Vec<Vec<Article>> = files
        .par_iter()
        .map(|path| match read_articles(path) {
            Ok(articles) => articles
                .into_iter()
                .filter(|article| filter.detect(article))
                .collect(),
            Err(e) => {
                warn!("skipping malformed file {:?}: {}", path, e);
                Vec::new()
            }
        })
        .collect();

    let records: Vec<Article> = results.into_iter().flatten().collect();
    info!("number of kept records: {}", records.len());

    write_json(dst, &records)?;
    Ok(records.len())
}

/// Keep advertisements (see [ArticleTypeFilter::default]).
pub fn filter_ads(src: &Path, dst: &Path) -> Result<usize, Error> {
    filter_records(src, dst, &ArticleTypeFilter::default())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn keeps_ads_only() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();

        let records = json!([
            {"issueID": "i", "articleID": "a1", "articleType": "Advertisement", "text": "x"},
            {"issueID": "i", "articleID": "a2", "articleType": "News", "text": "x"},
            {"issueID": "i", "articleID": "a3", "articleType": "Classified ads", "text": "x"},
        ]);
        std::fs::write(src.path().join("a.json"), records.to_string()).unwrap();
        std::fs::write(
            src.path().join("b.json"),
            json!({"issueID": "j", "articleID": "b1", "articleType": "Advertisements and Notices"})
                .to_string(),
        )
        .unwrap();
        std::fs::write(src.path().join("c.json"), "[{").unwrap();

        let out = dst.path().join("ads.json");
        assert_eq!(filter_ads(src.path(), &out).unwrap(), 3);

        let ads: Vec<Article> =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        let ids: Vec<_> = ads.iter().map(|a| a.article_id().unwrap()).collect();
        assert_eq!(ids, vec!["a1", "a3", "b1"]);
    }
}
