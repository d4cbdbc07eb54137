//! Gazetteer place filtering.
use crate::tagging::Place;

use super::Filter;

/// Keeps places with a long enough name, attested in a period of interest.
///
/// Short names (`Ae`, `Bou`) match too many common tokens once lowercased.
/// Places without a date, or with a date that can't be read, are kept.
///
/// Defaults to names of at least 4 characters, attested between 1600 and 1800.
#[derive(Debug, Clone)]
pub struct PlaceFilter {
    min_chars: usize,
    period: Option<(i32, i32)>,
}

impl PlaceFilter {
    pub fn new(min_chars: usize, period: Option<(i32, i32)>) -> Self {
        Self { min_chars, period }
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    pub fn period(&self) -> Option<(i32, i32)> {
        self.period
    }
}

impl Default for PlaceFilter {
    fn default() -> Self {
        Self {
            min_chars: 4,
            period: Some((1600, 1800)),
        }
    }
}

impl Filter<&Place> for PlaceFilter {
    fn detect(&self, place: &Place) -> bool {
        if place.name().chars().count() < self.min_chars {
            return false;
        }

        match (self.period, place.spans()) {
            (Some((from, to)), Some(spans)) => spans.iter().any(|span| span.overlaps(from, to)),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::filtering::Filter;
    use crate::tagging::{Place, Span};

    use super::PlaceFilter;

    fn place(name: &str, spans: Option<Vec<Span>>) -> Place {
        Place::new(name, None, (0.0, 0.0)).with_spans(spans)
    }

    #[test]
    fn short_names() {
        let f = PlaceFilter::default();
        assert!(!f.detect(&place("Ae", None)));
        assert!(!f.detect(&place("Bou", None)));
        assert!(!f.detect(&place("Goa.", None)));
        assert!(f.detect(&place("Lima", None)));
    }

    #[test]
    fn period() {
        let f = PlaceFilter::default();
        assert!(f.detect(&place("Kingston", Some(vec![Span::new(Some(1692), None)]))));
        assert!(f.detect(&place("Kingston", Some(vec![Span::new(Some(1500), Some(1900))]))));
        assert!(!f.detect(&place("Kingston", Some(vec![Span::new(Some(1850), Some(1900))]))));
        assert!(f.detect(&place(
            "Kingston",
            Some(vec![Span::new(Some(1850), None), Span::new(None, Some(1700))])
        )));
        // dated, but no usable year
        assert!(!f.detect(&place("Kingston", Some(vec![Span::new(None, None)]))));
    }

    #[test]
    fn any_period() {
        let f = PlaceFilter::new(1, None);
        assert_eq!(f.min_chars(), 1);
        assert!(f.detect(&place("Ae", Some(vec![Span::new(Some(1900), Some(1950))]))));
    }
}
