//! Article records.
//!
//! An [Article] is one entry of a newspaper issue: an article, an advertisement or a notice.
//! Only the fields the pipelines need are typed, everything else is carried over untouched
//! in the record's extra fields.
use std::fmt;

use chrono::{Datelike, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;

/// Stable identity of an article: the `(issueID, articleID)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId {
    issue_id: String,
    article_id: String,
}

impl ArticleId {
    pub fn new(issue_id: String, article_id: String) -> Self {
        Self {
            issue_id,
            article_id,
        }
    }

    pub fn issue_id(&self) -> &str {
        &self.issue_id
    }

    pub fn article_id(&self) -> &str {
        &self.article_id
    }

    /// Name of the cleaned article file, `<issueID>_<articleID>.json`.
    ///
    /// Errors if the identity contains a path separator.
    pub fn file_name(&self) -> Result<String, Error> {
        let file_name = format!("{}.json", self);
        if is_plain_file_name(&file_name) {
            Ok(file_name)
        } else {
            Err(Error::InvalidIdentity(file_name))
        }
    }
}

/// Whether `name` names a file directly inside a folder.
pub fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(&['/', '\\', '\0'][..])
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.issue_id, self.article_id)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "issueID", default, skip_serializing_if = "Option::is_none")]
    issue_id: Option<String>,
    #[serde(rename = "articleID", default, skip_serializing_if = "Option::is_none")]
    article_id: Option<String>,
    #[serde(rename = "articleType", default, skip_serializing_if = "Option::is_none")]
    article_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta_issue_date_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta_issue_date_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    texts: Option<Vec<String>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Article {
    /// Raw article with an identity and a single text.
    pub fn new(issue_id: &str, article_id: &str, text: String) -> Self {
        Self {
            issue_id: Some(issue_id.to_string()),
            article_id: Some(article_id.to_string()),
            text: Some(text),
            ..Default::default()
        }
    }

    /// Get the article identity.
    ///
    /// Errors with [Error::MissingIdentity] if either part is absent.
    pub fn id(&self) -> Result<ArticleId, Error> {
        match (&self.issue_id, &self.article_id) {
            (Some(issue), Some(article)) => Ok(ArticleId::new(issue.clone(), article.clone())),
            _ => Err(Error::MissingIdentity),
        }
    }

    pub fn article_id(&self) -> Option<&str> {
        self.article_id.as_deref()
    }

    pub fn article_type(&self) -> Option<&str> {
        self.article_type.as_deref()
    }

    pub fn set_article_type(&mut self, article_type: Option<String>) {
        self.article_type = article_type;
    }

    pub fn date_start(&self) -> Option<&str> {
        self.meta_issue_date_start.as_deref()
    }

    pub fn date_end(&self) -> Option<&str> {
        self.meta_issue_date_end.as_deref()
    }

    pub fn set_dates(&mut self, start: Option<String>, end: Option<String>) {
        self.meta_issue_date_start = start;
        self.meta_issue_date_end = end;
    }

    /// Year of the issue start date.
    ///
    /// Accepts full ISO dates (`1765-03-21`) and partial ones (`1765-00`).
    pub fn year(&self) -> Option<i32> {
        let date = self.meta_issue_date_start.as_deref()?;
        if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            return Some(d.year());
        }

        date.split('-')
            .next()
            .filter(|year| year.len() == 4)
            .and_then(|year| year.parse().ok())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn texts(&self) -> Option<&[String]> {
        self.texts.as_deref()
    }

    /// Name of the cleaned article file this record comes from, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.extra.get("file_name").and_then(Value::as_str)
    }

    /// Get an untyped field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Add or replace a field.
    ///
    /// Typed fields are set when `value` is a string (or null), so that a key is never serialized twice.
    pub fn insert(&mut self, key: String, value: Value) {
        let typed = match key.as_str() {
            "issueID" => &mut self.issue_id,
            "articleID" => &mut self.article_id,
            "articleType" => &mut self.article_type,
            "meta_issue_date_start" => &mut self.meta_issue_date_start,
            "meta_issue_date_end" => &mut self.meta_issue_date_end,
            "text" => &mut self.text,
            _ => {
                self.extra.insert(key, value);
                return;
            }
        };

        match value {
            Value::String(s) => *typed = Some(s),
            Value::Null => *typed = None,
            other => warn!("ignoring non-string value {} for {}", other, key),
        }
    }

    /// Same record with `text` removed and `texts` set.
    pub fn with_texts(mut self, texts: Vec<String>) -> Self {
        self.text = None;
        self.texts = Some(texts);
        self
    }

    /// Same record with both `text` and `texts` removed.
    pub fn without_text(mut self) -> Self {
        self.text = None;
        self.texts = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserialize_keeps_extra_fields() {
        let raw = json!({
            "issueID": "NICNF0328-C00000-N0000013",
            "articleID": "NICNF0328-C00000-N0000013-00020-001",
            "articleType": "Advertisement",
            "meta_issue_date_start": "1765-03-21",
            "text": "foo",
            "title": "The Gazette",
        });

        let article: Article = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(article.article_type(), Some("Advertisement"));
        assert_eq!(article.get("title"), Some(&json!("The Gazette")));

        let back = serde_json::to_value(&article).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn missing_identity() {
        let article: Article = serde_json::from_value(json!({"issueID": "1", "text": "x"})).unwrap();
        assert!(matches!(article.id(), Err(Error::MissingIdentity)));
    }

    #[test]
    fn file_name_from_identity() {
        let article = Article::new("i1", "a1", String::new());
        assert_eq!(article.id().unwrap().file_name().unwrap(), "i1_a1.json");
    }

    #[test]
    fn file_name_stays_in_folder() {
        let identities = [
            ("..", "/etc/passwd"),
            ("../i1", "a1"),
            ("i1", "a\\1"),
            ("i\01", "a1"),
        ];
        for (issue, id) in identities {
            assert!(matches!(
                Article::new(issue, id, String::new()).id().unwrap().file_name(),
                Err(Error::InvalidIdentity(_))
            ));
        }
        assert!(is_plain_file_name("i1_a1.json"));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name(""));
    }

    #[test]
    fn year_full_and_partial() {
        let mut article = Article::default();
        article.set_dates(Some("1765-03-21".to_string()), None);
        assert_eq!(article.year(), Some(1765));

        article.set_dates(Some("1701-00".to_string()), None);
        assert_eq!(article.year(), Some(1701));

        article.set_dates(Some("unknown".to_string()), None);
        assert_eq!(article.year(), None);

        article.set_dates(None, None);
        assert_eq!(article.year(), None);
    }

    #[test]
    fn without_text_drops_both_fields() {
        let article = Article::new("i", "a", "text".to_string()).with_texts(vec!["p".to_string()]);
        assert_eq!(article.text(), None);
        assert_eq!(article.texts(), Some(&["p".to_string()][..]));

        let article = article.without_text();
        let value = serde_json::to_value(&article).unwrap();
        assert!(value.get("text").is_none());
        assert!(value.get("texts").is_none());
    }

    #[test]
    fn insert_sets_typed_fields() {
        let mut article = Article::new("i", "a", "text".to_string());
        article.insert("meta_issue_date_start".to_string(), json!("1765-03-21"));
        article.insert("meta_title".to_string(), json!("The Gazette"));

        assert_eq!(article.date_start(), Some("1765-03-21"));
        assert_eq!(article.get("meta_issue_date_start"), None);

        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["meta_issue_date_start"], json!("1765-03-21"));
        assert_eq!(value["meta_title"], json!("The Gazette"));
    }
}
