/*! Metadata lookup

Newspaper metadata CSV, indexed by its `article_id` column.
Every column of a matching row is added to cleaned articles as a `meta_<column>` field.

The lookup is loaded once and shared read-only between workers (wrap it in an [std::sync::Arc]).
!*/
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use serde_json::Value;

use crate::error::Error;
use crate::pipelines::types::Article;

const KEY_COLUMN: &str = "article_id";

#[derive(Debug, Default, Clone)]
pub struct MetadataLookup {
    rows: HashMap<String, Vec<(String, String)>>,
}

impl MetadataLookup {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let lookup = Self::from_reader(File::open(path)?)?;
        info!("metadata lookup created with {} entries", lookup.len());
        Ok(lookup)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers()?.clone();
        let key_idx = headers
            .iter()
            .position(|h| h == KEY_COLUMN)
            .ok_or_else(|| Error::Custom(format!("metadata has no {} column", KEY_COLUMN)))?;

        let mut rows = HashMap::new();
        for record in reader.records() {
            let record = record?;
            let key = match record.get(key_idx) {
                Some(key) if !key.is_empty() => key.to_string(),
                _ => continue,
            };

            let row = headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect();
            rows.insert(key, row);
        }

        Ok(Self { rows })
    }

    pub fn get(&self, article_id: &str) -> Option<&[(String, String)]> {
        self.rows.get(article_id).map(Vec::as_slice)
    }

    /// Add `meta_<column>` fields to the article if its `articleID` is known.
    /// Returns whether the article was enriched.
    pub fn enrich(&self, article: &mut Article) -> bool {
        let row = match article.article_id().and_then(|id| self.get(id)) {
            Some(row) => row,
            None => return false,
        };

        for (column, value) in row {
            article.insert(format!("meta_{}", column), Value::String(value.clone()));
        }
        true
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "article_id,title,issue_date_start,issue_no\na1,The Gazette,1765-03-21,0012\n,No Key,1765-03-21,1\n";

    #[test]
    fn lookup() {
        let lookup = MetadataLookup::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(lookup.len(), 1);
        let row = lookup.get("a1").unwrap();
        assert_eq!(row[1], ("title".to_string(), "The Gazette".to_string()));
        assert_eq!(row[3].1, "0012");
    }

    #[test]
    fn enrich() {
        let lookup = MetadataLookup::from_reader(CSV.as_bytes()).unwrap();

        let mut article = Article::new("i", "a1", String::new());
        assert!(lookup.enrich(&mut article));
        assert_eq!(article.date_start(), Some("1765-03-21"));
        assert_eq!(
            article.get("meta_title"),
            Some(&Value::String("The Gazette".to_string()))
        );

        let mut unknown = Article::new("i", "a2", String::new());
        assert!(!lookup.enrich(&mut unknown));
    }

    #[test]
    fn no_key_column() {
        assert!(MetadataLookup::from_reader("id,title\na,b\n".as_bytes()).is_err());
    }
}
