//! Regroups OCR paragraphs.
//!
//! Newspaper OCR splits articles on blank lines, but a lot of those blocks are
//! single-line fragments (titles, drop capitals, hyphenated line starts) that belong
//! to the next multi-line block.
//!
//! Fragments are buffered and prepended to the next multi-line block:
//! ```text
//! H E Convention is still busy
//!
//! in settling the Militia; and
//! prosecuting the other Me-
//! thods laid down for the se-
//! curing the Peace of the
//! ```
//!
//! becomes
//!
//! ```text
//! H E Convention is still busy in settling the Militia; and
//! prosecuting the other Me-
//! thods laid down for the se-
//! curing the Peace of the
//! ```
//!
//! Merged paragraphs are then filtered with a [ParagraphFilter].
use crate::filtering::{Filter, ParagraphFilter};

#[derive(Default)]
pub struct Regroup {
    filter: ParagraphFilter,
}

impl Regroup {
    /// Split on blank lines and merge fragments into the following multi-line paragraph.
    ///
    /// Trailing fragments are merged together.
    pub fn merge(&self, text: &str) -> Vec<String> {
        let mut merged = Vec::new();
        let mut buffer: Vec<&str> = Vec::new();

        for paragraph in text.split("\n\n").map(str::trim) {
            if !paragraph.contains('\n') {
                buffer.push(paragraph);
                continue;
            }

            if buffer.is_empty() {
                merged.push(paragraph.to_string());
            } else {
                buffer.push(paragraph);
                merged.push(buffer.join(" "));
                buffer.clear();
            }
        }

        if !buffer.is_empty() {
            merged.push(buffer.join(" "));
        }

        merged
    }

    /// Merge then filter paragraphs.
    pub fn regroup(&self, text: &str) -> Vec<String> {
        self.merge(text)
            .into_iter()
            .filter(|paragraph| self.filter.detect(paragraph))
            .collect()
    }
}
