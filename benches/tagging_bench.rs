use criterion::{black_box, criterion_group, criterion_main, Criterion};
use newsprint::{
    tagging::{Tagger, Vocabulary},
    transformers::{Cleaner, Normalizer},
};

const TEXT: &str = "KINGSTON, March 21.\n\nArrived from Port Royal\nthe Sloop Betsey, with\nSugar and Rum, bound\nfor Spanish Town and Montego Bay.\n\nWe hear from Kingston\nthat the Price of Mu-\nscovado Sugar is much fallen\nsince the last Fleet from New-\nYork.";

fn vocabulary() -> Vocabulary {
    let mut vocabulary = Vocabulary::goods();
    vocabulary.extend([
        "kingston",
        "port royal",
        "spanish town",
        "montego bay",
        "new york",
        "boston",
        "charleston",
        "bristol",
    ]);
    vocabulary
}

pub fn normalize(c: &mut Criterion) {
    let n = Normalizer;
    c.bench_function("normalize", |b| b.iter(|| n.normalize(black_box(TEXT))));
}

pub fn clean(c: &mut Criterion) {
    let cleaner = Cleaner::with_spelling(None);
    c.bench_function("clean_text", |b| {
        b.iter(|| cleaner.clean_text(black_box(TEXT)))
    });
}

pub fn tag(c: &mut Criterion) {
    let paragraphs = Cleaner::with_spelling(None).clean_text(TEXT);
    let tagger = Tagger::new(vocabulary()).unwrap();
    c.bench_function("tag", |b| b.iter(|| tagger.tag(black_box(&paragraphs))));
}

criterion_group!(benches, normalize, clean, tag);
criterion_main!(benches);
