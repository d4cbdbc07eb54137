/*! Co-occurrence counting

Counts, for each five-year interval between 1600 and 1809, the pairs of distinct terms found together in an article.

Pairs are split by kind, depending on whether their terms are goods (trade goods) or other terms (places):
`goodgood`, `goodloc` and `locloc`.
Counts are keyed by interval (`<start>_<end>`) then by pair (`<a>|<b>`, terms sorted).
!*/
use std::collections::BTreeMap;
use std::path::Path;

use itertools::Itertools;
use log::{debug, info};

use crate::error::Error;
use crate::io::writer::write_json;
use crate::pipelines::types::TaggedArticle;
use crate::tagging::Vocabulary;

const FIRST_YEAR: i32 = 1600;
const LAST_YEAR: i32 = 1810;
const INTERVAL: usize = 5;

pub type Counts = BTreeMap<String, BTreeMap<String, usize>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairKind {
    GoodGood,
    GoodLoc,
    LocLoc,
}

impl PairKind {
    fn new(goods: &Vocabulary, a: &str, b: &str) -> Self {
        match (goods.contains(a), goods.contains(b)) {
            (true, true) => PairKind::GoodGood,
            (false, false) => PairKind::LocLoc,
            _ => PairKind::GoodLoc,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PairKind::GoodGood => "goodgood",
            PairKind::GoodLoc => "goodloc",
            PairKind::LocLoc => "locloc",
        }
    }
}

/// `[start, start + 4]` intervals.
pub fn intervals() -> impl Iterator<Item = (i32, i32)> {
    (FIRST_YEAR..LAST_YEAR)
        .step_by(INTERVAL)
        .map(|start| (start, start + INTERVAL as i32 - 1))
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Cooccurrences {
    goodgood: Counts,
    goodloc: Counts,
    locloc: Counts,
}

impl Cooccurrences {
    /// Count pairs in tagged articles. Articles without a date are ignored.
    pub fn count(tagged: &[TaggedArticle], goods: &Vocabulary) -> Self {
        let dated: Vec<(i32, &TaggedArticle)> = tagged
            .iter()
            .filter_map(|t| t.article().year().map(|year| (year, t)))
            .collect();
        debug!("{}/{} articles have a date", dated.len(), tagged.len());

        let mut counts = Self::default();
        for (start, end) in intervals() {
            let entries: Vec<&TaggedArticle> = dated
                .iter()
                .filter(|(year, _)| (start..=end).contains(year))
                .map(|(_, t)| *t)
                .collect();

            if entries.is_empty() {
                continue;
            }

            info!("[{}, {}]: found {} articles", start, end, entries.len());
            let tag = format!("{}_{}", start, end);
            for kind in [PairKind::GoodGood, PairKind::GoodLoc, PairKind::LocLoc] {
                counts.get_mut(kind).insert(tag.clone(), BTreeMap::new());
            }

            for entry in entries {
                // sorted, distinct
                let terms = entry.found_words().terms();
                for (a, b) in terms.iter().tuple_combinations() {
                    let kind = PairKind::new(goods, a, b);
                    let interval_counts = counts.get_mut(kind).entry(tag.clone()).or_default();
                    *interval_counts.entry(format!("{}|{}", a, b)).or_insert(0) += 1;
                }
            }
        }

        counts
    }

    pub fn get(&self, kind: PairKind) -> &Counts {
        match kind {
            PairKind::GoodGood => &self.goodgood,
            PairKind::GoodLoc => &self.goodloc,
            PairKind::LocLoc => &self.locloc,
        }
    }

    fn get_mut(&mut self, kind: PairKind) -> &mut Counts {
        match kind {
            PairKind::GoodGood => &mut self.goodgood,
            PairKind::GoodLoc => &mut self.goodloc,
            PairKind::LocLoc => &mut self.locloc,
        }
    }

    /// Write `<kind>_counts.json` files into `dst`.
    pub fn write(&self, dst: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(dst)?;
        for kind in [PairKind::GoodGood, PairKind::GoodLoc, PairKind::LocLoc] {
            let path = dst.join(format!("{}_counts.json", kind.name()));
            write_json(&path, self.get(kind))?;
            info!("{} counts saved to {:?}", kind.name(), path);
        }

        Ok(())
    }
}
