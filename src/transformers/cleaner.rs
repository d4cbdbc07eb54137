//! Transform chaining.
use crate::error::Error;

use super::{Normalizer, Regroup, SpellingCorrector, Transform};

/// Cleaner enables transform chaining, adding multiple transforms and
/// applying them in order on each paragraph.
#[derive(Default)]
pub struct Cleaner {
    regroup: Regroup,
    transforms: Vec<Box<dyn Transform + Sync + Send>>,
}

impl Cleaner {
    pub fn add(&mut self, transform: Box<dyn Transform + Sync + Send>) -> &mut Cleaner {
        self.transforms.push(transform);
        self
    }

    /// Normalization, followed by spelling correction if a corrector is provided.
    pub fn with_spelling(corrector: Option<SpellingCorrector>) -> Self {
        let mut cleaner = Self::default();
        cleaner.add(Box::new(Normalizer));
        if let Some(corrector) = corrector {
            cleaner.add(Box::new(corrector));
        }
        cleaner
    }

    /// Clean paragraphs that are already split.
    pub fn clean_paragraphs<'a>(&self, paragraphs: impl Iterator<Item = &'a str>) -> Vec<String> {
        paragraphs
            .map(|paragraph| self.transform_own(paragraph.to_string()))
            .collect()
    }

    /// Regroup raw text into paragraphs, then clean them.
    pub fn clean_text(&self, text: &str) -> Vec<String> {
        self.regroup
            .regroup(text)
            .into_iter()
            .map(|paragraph| self.transform_own(paragraph))
            .collect()
    }

    /// Get paragraphs from either `texts` (already split) or `text` (raw).
    ///
    /// `texts` has precedence. Errors with [Error::MissingText] if there is neither.
    pub fn paragraphs(
        &self,
        id: &str,
        text: Option<&str>,
        texts: Option<&[String]>,
    ) -> Result<Vec<String>, Error> {
        match (texts, text) {
            (Some(texts), _) => Ok(self.clean_paragraphs(texts.iter().map(String::as_str))),
            (None, Some(text)) => Ok(self.clean_text(text)),
            (None, None) => Err(Error::MissingText(id.to_string())),
        }
    }
}

impl Transform for Cleaner {
    fn transform_own(&self, text: String) -> String {
        self.transforms
            .iter()
            .fold(text, |text, transform| transform.transform_own(text))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::transformers::Transform;

    use super::Cleaner;

    struct Upper;
    impl Transform for Upper {
        fn transform_own(&self, text: String) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn empty_chain_is_identity() {
        let c = Cleaner::default();
        assert_eq!(c.transform_own("Foo, Bar".to_string()), "Foo, Bar");
    }

    #[test]
    fn chain_order() {
        let mut c = Cleaner::with_spelling(None);
        c.add(Box::new(Upper));
        assert_eq!(c.transform_own("Foo, Bar".to_string()), "FOO BAR");
    }

    #[test]
    fn texts_have_precedence() {
        let c = Cleaner::with_spelling(None);
        let texts = vec!["Sugar, Rum.".to_string()];
        let p = c.paragraphs("id", Some("ignored"), Some(&texts)).unwrap();
        assert_eq!(p, vec!["sugar rum".to_string()]);
    }

    #[test]
    fn raw_text_regrouped() {
        let c = Cleaner::with_spelling(None);
        let text = "THE NEWS\n\nArrived from Jamaica,\nthe Ship Mary with Sugar\nand Rum for the\nMerchants of Bristol.\n\nx";
        let p = c.paragraphs("id", Some(text), None).unwrap();
        assert_eq!(
            p,
            vec!["the news arrived from jamaica the ship mary with sugar and rum for the merchants of bristol".to_string()]
        );
    }

    #[test]
    fn no_text() {
        let c = Cleaner::with_spelling(None);
        assert!(matches!(
            c.paragraphs("id", None, None),
            Err(Error::MissingText(_))
        ));
    }
}
