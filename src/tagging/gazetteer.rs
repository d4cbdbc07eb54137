/*! Gazetteer

Place name to coordinates table, read once from a GeoJSON `FeatureCollection` or a CSV file.

- GeoJSON: the place name is the `name` (or `title`) property, the country the optional `country` property.
  Point, MultiPoint and GeometryCollection geometries are supported, the first point being used.
- CSV: `name`, optional `country`, and `x`/`y` (or `lon`/`lat`) columns.

Names are normalized like vocabulary terms, and the first occurrence of a name wins.

Places are filtered on load with a [PlaceFilter] (by default, names of at least 4 characters
attested between 1600 and 1800). GeoJSON features are dated by their Linked Places `when` object:
`timespans` (`{"start": {"in": 1692}, "end": {"in": 1750}}`), `start`/`end`, `date` or `year`.
Features without `when`, or with an unknown layout, are undated.
!*/
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::filtering::{Filter, PlaceFilter};

use super::normalize_term;

/// Years a place is attested, both bounds being optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: Option<i32>,
    end: Option<i32>,
}

impl Span {
    pub fn new(start: Option<i32>, end: Option<i32>) -> Self {
        Self { start, end }
    }

    /// Whether the span overlaps `[from, to]`.
    /// A span with a single bound overlaps if that year is in `[from, to]`, a span without bounds never does.
    pub fn overlaps(&self, from: i32, to: i32) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start.max(from) <= end.min(to),
            (Some(year), None) | (None, Some(year)) => (from..=to).contains(&year),
            (None, None) => false,
        }
    }
}

/// Year of a `when` value: a number, a `YYYY[-MM[-DD]]` string or an `{"in": ..}` object.
fn year(value: Option<&Value>) -> Option<i32> {
    match value? {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.split('-').next().and_then(|y| y.trim().parse().ok()),
        Value::Object(o) => year(o.get("in")),
        _ => None,
    }
}

/// Spans of a Linked Places `when` object. `None` means undated.
fn spans(when: Option<&Value>) -> Option<Vec<Span>> {
    let when = when?.as_object().filter(|w| !w.is_empty())?;

    if let Some(timespans) = when
        .get("timespans")
        .and_then(Value::as_array)
        .filter(|t| !t.is_empty())
    {
        return Some(
            timespans
                .iter()
                .map(|t| Span::new(year(t.get("start")), year(t.get("end"))))
                .collect(),
        );
    }

    if when.contains_key("start") && when.contains_key("end") {
        return Some(vec![Span::new(year(when.get("start")), year(when.get("end")))]);
    }

    ["date", "year"]
        .iter()
        .find_map(|key| when.get(*key))
        .map(|date| {
            let attested = year(Some(date));
            vec![Span::new(attested, attested)]
        })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    name: String,
    country: Option<String>,
    coordinates: (f64, f64),
    spans: Option<Vec<Span>>,
}

impl Place {
    pub fn new(name: &str, country: Option<&str>, coordinates: (f64, f64)) -> Self {
        Self {
            name: normalize_term(name),
            country: country
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from),
            coordinates,
            spans: None,
        }
    }

    /// Set the attestation spans, `None` meaning undated.
    pub fn with_spans(mut self, spans: Option<Vec<Span>>) -> Self {
        self.spans = spans;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn coordinates(&self) -> (f64, f64) {
        self.coordinates
    }

    pub fn spans(&self) -> Option<&[Span]> {
        self.spans.as_deref()
    }
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    geometry: Option<Geometry>,
    #[serde(default)]
    when: Option<Value>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: Vec<f64> },
    MultiPoint { coordinates: Vec<Vec<f64>> },
    GeometryCollection { geometries: Vec<Geometry> },
    #[serde(other)]
    Other,
}

impl Geometry {
    fn first_point(&self) -> Option<(f64, f64)> {
        fn point(coords: &[f64]) -> Option<(f64, f64)> {
            match coords {
                [x, y, ..] => Some((*x, *y)),
                _ => None,
            }
        }

        match self {
            Geometry::Point { coordinates } => point(coordinates),
            Geometry::MultiPoint { coordinates } => {
                coordinates.iter().find_map(|c| point(c.as_slice()))
            }
            Geometry::GeometryCollection { geometries } => {
                geometries.iter().find_map(Geometry::first_point)
            }
            Geometry::Other => None,
        }
    }
}

#[derive(Deserialize)]
struct CsvPlace {
    #[serde(alias = "title")]
    name: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(alias = "lon", alias = "longitude")]
    x: f64,
    #[serde(alias = "lat", alias = "latitude")]
    y: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    places: Vec<Place>,
    index: HashMap<String, usize>,
    filter: PlaceFilter,
}

impl Gazetteer {
    /// Empty gazetteer, keeping the places that pass `filter`.
    pub fn with_filter(filter: PlaceFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    /// Load a gazetteer with the default [PlaceFilter].
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::default().load(path)
    }

    /// Load places from a file, format being inferred from the extension
    /// (`geojson`/`json` or `csv`).
    pub fn load(self, path: &Path) -> Result<Self, Error> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        let gazetteer = match extension.as_deref() {
            Some("geojson") | Some("json") => {
                self.read_geojson(BufReader::new(File::open(path)?))?
            }
            Some("csv") => self.read_csv(File::open(path)?)?,
            _ => return Err(Error::UnsupportedFormat(path.to_path_buf())),
        };

        info!("loaded {} places from {:?}", gazetteer.len(), path);
        Ok(gazetteer)
    }

    pub fn from_geojson<R: Read>(reader: R) -> Result<Self, Error> {
        Self::default().read_geojson(reader)
    }

    pub fn from_csv<R: Read>(reader: R) -> Result<Self, Error> {
        Self::default().read_csv(reader)
    }

    pub fn read_geojson<R: Read>(self, reader: R) -> Result<Self, Error> {
        let collection: FeatureCollection = serde_json::from_reader(reader)?;
        let mut gazetteer = self;

        for feature in collection.features {
            let properties = feature.properties.unwrap_or_default();
            let name = ["name", "title"]
                .iter()
                .find_map(|key| properties.get(*key).and_then(Value::as_str));
            let point = feature.geometry.as_ref().and_then(Geometry::first_point);

            match (name, point) {
                (Some(name), Some(point)) => {
                    let country = properties.get("country").and_then(Value::as_str);
                    let place =
                        Place::new(name, country, point).with_spans(spans(feature.when.as_ref()));
                    gazetteer.push(place);
                }
                (name, _) => debug!("skipping feature {:?}: no name or point", name),
            }
        }

        Ok(gazetteer)
    }

    pub fn read_csv<R: Read>(self, reader: R) -> Result<Self, Error> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut gazetteer = self;

        for record in reader.deserialize() {
            let record: CsvPlace = record?;
            gazetteer.push(Place::new(
                &record.name,
                record.country.as_deref(),
                (record.x, record.y),
            ));
        }

        Ok(gazetteer)
    }

    /// Add a place. Returns `false` if the name is empty, filtered out or already present.
    pub fn push(&mut self, place: Place) -> bool {
        if place.name.is_empty() {
            return false;
        }
        if !self.filter.detect(&place) {
            debug!("filtering out place {}", place.name);
            return false;
        }
        if self.index.contains_key(&place.name) {
            warn!("duplicate place {}, keeping first", place.name);
            return false;
        }

        self.index.insert(place.name.clone(), self.places.len());
        self.places.push(place);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Place> {
        self.index.get(name).map(|idx| &self.places[*idx])
    }

    pub fn coordinates(&self, name: &str) -> Option<(f64, f64)> {
        self.get(name).map(Place::coordinates)
    }

    /// Place names, in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.places.iter().map(Place::name)
    }

    /// Names of the places of a country (case insensitive), plus the normalized country name.
    pub fn country_places(&self, country: &str) -> Vec<String> {
        let country = normalize_term(country);
        let mut names: Vec<String> = self
            .places
            .iter()
            .filter(|place| {
                place
                    .country()
                    .map_or(false, |c| normalize_term(c) == country)
            })
            .map(|place| place.name.clone())
            .collect();

        if !names.contains(&country) {
            names.push(country);
        }

        names
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
