/*! Spelling correction

Best-effort compound spelling correction using a [SymSpell](https://github.com/wolfgarbe/SymSpell) frequency dictionary
(for example `frequency_dictionary_en_82_765.txt`, formatted as `term count` per line).

The whole text is replaced by the best compound suggestion.
Texts without suggestion are left untouched.
!*/
use std::path::Path;

use log::{debug, info};
use symspell::{SymSpell, UnicodeStringStrategy};

use crate::error::Error;

use super::Transform;

pub struct SpellingCorrector {
    symspell: SymSpell<UnicodeStringStrategy>,
    max_edit_distance: i64,
}

impl SpellingCorrector {
    /// Load a frequency dictionary.
    ///
    /// Errors if the file can't be read or has no valid entry.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        let corrector = Self::from_lines(content.lines())?;
        info!("loaded spelling dictionary {:?}", path);
        Ok(corrector)
    }

    /// Build from `term count` lines.
    pub fn from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Result<Self, Error> {
        let mut symspell: SymSpell<UnicodeStringStrategy> = SymSpell::default();
        let mut nb_entries = 0;
        for line in lines.filter(|line| is_entry(line)) {
            symspell.load_dictionary_line(line, 0, 1, " ");
            nb_entries += 1;
        }

        if nb_entries == 0 {
            return Err(Error::Dictionary("no valid dictionary entry".to_string()));
        }

        debug!("{} dictionary entries", nb_entries);
        Ok(Self {
            symspell,
            max_edit_distance: 2,
        })
    }

    /// Best compound correction, if any.
    pub fn correct(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        self.symspell
            .lookup_compound(text, self.max_edit_distance)
            .into_iter()
            .next()
            .map(|suggestion| suggestion.term)
            .filter(|term| !term.is_empty())
    }
}

/// `term count` line, single-space separated.
fn is_entry(line: &str) -> bool {
    let mut parts = line.split(' ');
    match (parts.next(), parts.next()) {
        (Some(term), Some(count)) => !term.is_empty() && count.parse::<i64>().is_ok(),
        _ => false,
    }
}

impl Transform for SpellingCorrector {
    fn transform_own(&self, text: String) -> String {
        self.correct(&text).unwrap_or(text)
    }
}

#[cfg(test)]
mod tests {
    use crate::transformers::Transform;

    use super::SpellingCorrector;

    fn corrector() -> SpellingCorrector {
        let dictionary = "the 23135851162\nsugar 8436584\ntobacco 4209612\nisland 12503925\nof 13151942776";
        SpellingCorrector::from_lines(dictionary.lines()).unwrap()
    }

    #[test]
    fn corrects_word() {
        let c = corrector();
        assert_eq!(c.transform_own("sugr".to_string()), "sugar");
    }

    #[test]
    fn empty_untouched() {
        let c = corrector();
        assert_eq!(c.correct(""), None);
        assert_eq!(c.transform_own(String::new()), "");
    }

    #[test]
    fn empty_dictionary() {
        assert!(SpellingCorrector::from_lines("".lines()).is_err());
        assert!(SpellingCorrector::from_lines("not_a_count_line".lines()).is_err());
    }

    #[test]
    fn missing_dictionary() {
        let path = std::path::Path::new("this_dictionary_does_not_exist.txt");
        assert!(SpellingCorrector::from_path(path).is_err());
    }
}
