//! Paragraph-level filtering.
use super::Filter;

/// Keeps paragraphs that have both enough line breaks and enough content.
///
/// A paragraph is kept if it has more than [ParagraphFilter::min_breaks] internal newlines
/// *and* more than [ParagraphFilter::min_chars] non-newline codepoints.
///
/// Defaults are 2 newlines and 15 codepoints: this removes running headers,
/// page numbers and short OCR noise.
/// Note that a paragraph with one or two line breaks is always discarded.
pub struct ParagraphFilter {
    min_breaks: usize,
    min_chars: usize,
}

impl ParagraphFilter {
    pub fn new(min_breaks: usize, min_chars: usize) -> Self {
        Self {
            min_breaks,
            min_chars,
        }
    }

    pub fn min_breaks(&self) -> usize {
        self.min_breaks
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}

impl Default for ParagraphFilter {
    fn default() -> Self {
        Self {
            min_breaks: 2,
            min_chars: 15,
        }
    }
}

impl Filter<&str> for ParagraphFilter {
    fn detect(&self, paragraph: &str) -> bool {
        let (breaks, chars) = paragraph
            .chars()
            .fold((0, 0), |(breaks, chars), c| match c {
                '\n' => (breaks + 1, chars),
                _ => (breaks, chars + 1),
            });

        breaks > self.min_breaks && chars > self.min_chars
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, ParagraphFilter};

    #[test]
    fn defaults() {
        let f = ParagraphFilter::default();
        assert_eq!(f.min_breaks(), 2);
        assert_eq!(f.min_chars(), 15);
    }

    #[test]
    fn keeps_long_paragraph() {
        let f = ParagraphFilter::default();
        assert!(f.detect("The Convention is busy\nin settling the Militia\nand prosecuting\nthe other methods"));
    }

    #[test]
    fn discards_few_breaks() {
        let f = ParagraphFilter::default();
        assert!(!f.detect("a rather long first line of text\nand a second one"));
        assert!(!f.detect("a rather long first line\nand a second one\nand a third one"));
        assert!(!f.detect("no line break at all but quite a lot of text"));
    }

    #[test]
    fn discards_short_content() {
        let f = ParagraphFilter::default();
        // 3 breaks, 8 codepoints
        assert!(!f.detect("a b c\nd\ne\nf"));
        // exactly 15 codepoints is not enough
        assert!(!f.detect("abcde\nfghij\nklm\nno"));
        assert!(f.detect("abcde\nfghij\nklm\nnop"));
    }

    #[test]
    fn counts_codepoints() {
        let f = ParagraphFilter::new(0, 3);
        assert!(f.detect("éèàç"));
        assert!(!f.detect("éèà"));
    }
}
