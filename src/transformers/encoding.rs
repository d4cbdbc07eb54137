/*! Encoding artifacts repair

Archive text has usually been through a few encodings before landing in our JSON files.
The most common artifact is UTF-8 text that has been decoded as Windows-1252 (or Latin-1),
turning `’` into `â€™` or `£` into `Â£`.

Repair is done on each whitespace-separated run: the run is encoded back to Windows-1252 bytes,
and replaced by the UTF-8 decoding of those bytes if it is valid.
Runs that can't be round-tripped are left as is, so legitimate accented text is kept.

Unicode composition, ligatures, long s and curly quotes are also normalized.
!*/
use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref RUN: Regex = Regex::new(r"\S+").unwrap();
}

/// Windows-1252 characters in the 0x80-0x9F range.
/// Other codepoints below 0x100 map to themselves.
const CP1252_HIGH: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

/// Character replacements applied after mojibake repair.
const REPLACEMENTS: [(char, &str); 18] = [
    ('ſ', "s"),
    ('ﬁ', "fi"),
    ('ﬂ', "fl"),
    ('ﬀ', "ff"),
    ('ﬃ', "ffi"),
    ('ﬄ', "ffl"),
    ('ﬅ', "st"),
    ('ﬆ', "st"),
    ('‘', "'"),
    ('’', "'"),
    ('‚', "'"),
    ('‛', "'"),
    ('“', "\""),
    ('”', "\""),
    ('„', "\""),
    ('‟', "\""),
    ('\u{00a0}', " "),
    ('\u{feff}', ""),
];

fn cp1252_byte(c: char) -> Option<u8> {
    let code = c as u32;
    if code < 0x80 || (0xA0..0x100).contains(&code) {
        return Some(code as u8);
    }

    CP1252_HIGH
        .iter()
        .find(|(high, _)| *high == c)
        .map(|(_, byte)| *byte)
        // undefined Windows-1252 positions are decoded as C1 controls by Latin-1
        .or_else(|| if code < 0xA0 { Some(code as u8) } else { None })
}

/// Attempt to repair a single run of mojibake.
fn repair_run(run: &str) -> Option<String> {
    if run.is_ascii() {
        return None;
    }

    let bytes: Option<Vec<u8>> = run.chars().map(cp1252_byte).collect();
    let repaired = String::from_utf8(bytes?).ok()?;

    if repaired != run {
        Some(repaired)
    } else {
        None
    }
}

/// Repair mojibake runs.
pub fn fix_mojibake(text: &str) -> Cow<str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    RUN.replace_all(text, |caps: &Captures| {
        let run = &caps[0];
        repair_run(run).unwrap_or_else(|| run.to_string())
    })
}

/// Repair encoding artifacts, compose characters and replace typographic variants.
pub fn fix_text(text: &str) -> String {
    let text = fix_mojibake(text);
    let text: String = text.nfc().collect();

    if !text.chars().any(|c| REPLACEMENTS.iter().any(|(r, _)| *r == c)) {
        return text;
    }

    let mut fixed = String::with_capacity(text.len());
    for c in text.chars() {
        match REPLACEMENTS.iter().find(|(r, _)| *r == c) {
            Some((_, replacement)) => fixed.push_str(replacement),
            None => fixed.push(c),
        }
    }

    fixed
}
