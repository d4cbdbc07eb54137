//! Article and tagged article files reading.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

use crate::error::Error;
use crate::pipelines::types::{Article, TaggedArticle};

#[derive(Deserialize)]
#[serde(untagged)]
enum Records {
    Many(Vec<Article>),
    One(Box<Article>),
}

/// Read the articles of a single source file (one object or an array of objects).
pub fn read_articles(path: &Path) -> Result<Vec<Article>, Error> {
    let reader = BufReader::new(File::open(path)?);
    let records: Records = serde_json::from_reader(reader)?;

    Ok(match records {
        Records::Many(articles) => articles,
        Records::One(article) => vec![*article],
    })
}

/// List files of `src` matching `pattern` (ex. `*.json`), sorted.
///
/// Errors if `src` is not a directory.
pub fn list_files(src: &Path, pattern: &str) -> Result<Vec<PathBuf>, Error> {
    if !src.is_dir() {
        return Err(Error::Custom(format!("{:?} is not a directory", src)));
    }

    let pattern = src.join(pattern);
    let mut files = glob::glob(&pattern.to_string_lossy())?.collect::<Result<Vec<_>, _>>()?;
    files.sort();
    Ok(files)
}

/// Read a tagged JSONL file.
///
/// Lines that can't be parsed are skipped and logged.
pub fn read_tagged(path: &Path) -> Result<Vec<TaggedArticle>, Error> {
    let reader = BufReader::new(File::open(path)?);
    let mut tagged = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str(&line) {
            Ok(article) => tagged.push(article),
            Err(e) => warn!("{:?}:{}: skipping malformed line: {}", path, idx + 1, e),
        }
    }

    Ok(tagged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_and_many() {
        let dir = tempfile::tempdir().unwrap();
        let one = dir.path().join("one.json");
        let many = dir.path().join("many.json");
        std::fs::write(&one, r#"{"issueID": "i1", "articleID": "a1", "text": "foo"}"#).unwrap();
        std::fs::write(
            &many,
            r#"[{"issueID": "i1", "articleID": "a1"}, {"issueID": "i1", "articleID": "a2"}]"#,
        )
        .unwrap();

        let articles = read_articles(&one).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].text(), Some("foo"));
        assert_eq!(read_articles(&many).unwrap().len(), 2);
    }

    #[test]
    fn malformed() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{"issueID": "i1", "#).unwrap();
        assert!(read_articles(&bad).is_err());
        assert!(read_articles(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn lists_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.json", "a.json", "c.txt"] {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }

        let files = list_files(dir.path(), "*.json").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
        assert!(list_files(&dir.path().join("nope"), "*.json").is_err());
    }

    #[test]
    fn tagged_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tagged.jsonl");
        std::fs::write(
            &path,
            "{\"issueID\":\"i\",\"articleID\":\"a\",\"found_words\":{\"0\":[\"sugar\"]}}\nnot json\n\n",
        )
        .unwrap();

        let tagged = read_tagged(&path).unwrap();
        assert_eq!(tagged.len(), 1);
        assert_eq!(
            tagged[0].found_words().get(0),
            Some(&vec!["sugar".to_string()])
        );
    }
}
