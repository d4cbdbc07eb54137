/*! Paragraph normalization

Turns an OCR paragraph into a single lowercase line without punctuation:

1. encoding artifacts are repaired (see [super::encoding]),
1. words hyphenated over a line wrap are joined back (`Me-\nthods` -> `Methods`),
1. ASCII punctuation is removed,
1. newlines are collapsed into a single space,
1. isolated dashes are removed,
1. text is lowercased and trimmed.

Lowercasing can turn a run that couldn't be repaired into a repairable one (`Á¡¡` -> `á¡¡` -> `ᡡ`),
so these steps are repeated until the text stops changing. Normalization is idempotent.
!*/
use lazy_static::lazy_static;
use regex::Regex;

use super::encoding;
use super::Transform;

lazy_static! {
    static ref HYPHENATED_WORDS: Regex = Regex::new(r"(\w)-\s*\n\s*(\w)").unwrap();
    static ref NEWLINES: Regex = Regex::new(r"[\r\n]+").unwrap();
    static ref ISOLATED_DASHES: Regex =
        Regex::new(r"(?m)(?:\s+[-‐‑‒–—―]+(?:\s+[-‐‑‒–—―]+)*\s+|^\s*[-‐‑‒–—―]+(?:\s*[-‐‑‒–—―]+)*\s*)")
            .unwrap();
}

/// Upper bound on normalization passes. Each pass that changes non-ASCII text repairs at least one run.
const MAX_PASSES: usize = 8;

#[derive(Debug, Default, Clone, Copy)]
pub struct Normalizer;

impl Normalizer {
    pub fn normalize(&self, text: &str) -> String {
        let mut normalized = self.pass(text);
        for _ in 1..MAX_PASSES {
            // ASCII output is stable
            if normalized.is_ascii() {
                break;
            }

            let next = self.pass(&normalized);
            if next == normalized {
                break;
            }
            normalized = next;
        }

        normalized
    }

    fn pass(&self, text: &str) -> String {
        let text = encoding::fix_text(text);
        let text = HYPHENATED_WORDS.replace_all(&text, "${1}${2}");
        let text = remove_punctuation(&text);
        let text = NEWLINES.replace_all(&text, " ");
        let text = ISOLATED_DASHES.replace_all(&text, " ");

        text.to_lowercase().trim().to_string()
    }
}

impl Transform for Normalizer {
    fn transform_own(&self, text: String) -> String {
        self.normalize(&text)
    }
}

/// Remove every ASCII punctuation character.
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}
