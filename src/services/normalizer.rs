// src/services/normalizer.rs
// DOCUMENTATION: Places payload normalization
// PURPOSE: Reduce heterogeneous search payloads to a list of CanonicalPlace

use crate::models::{CanonicalPlace, Coordinates, ADDRESS_NOT_AVAILABLE, UNKNOWN_NAME};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Organic search results kept after the title filter
const ORGANIC_RESULT_LIMIT: usize = 10;

/// Result collection a payload was normalized from
/// DOCUMENTATION: Also used as the optional provider hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    /// Maps-style local results: structured address, coordinates, rating
    Local,
    /// Web search results: title and snippet only
    Organic,
    /// Places results, shaped like local results
    Places,
}

impl ResultSource {
    /// Payload key holding this collection
    pub fn collection_key(self) -> &'static str {
        match self {
            ResultSource::Local => "local_results",
            ResultSource::Organic => "organic_results",
            ResultSource::Places => "places_results",
        }
    }
}

/// Predicate and mapper for one result collection
struct Strategy {
    source: ResultSource,
    select: fn(&Value) -> Option<&[Value]>,
    map: fn(&[Value]) -> Vec<CanonicalPlace>,
}

/// Strategies in precedence order; the first one that selects wins
static STRATEGIES: [Strategy; 3] = [
    Strategy {
        source: ResultSource::Local,
        select: local_results,
        map: map_structured,
    },
    Strategy {
        source: ResultSource::Organic,
        select: organic_results,
        map: map_organic,
    },
    Strategy {
        source: ResultSource::Places,
        select: places_results,
        map: map_structured,
    },
];

fn local_results(payload: &Value) -> Option<&[Value]> {
    populated(payload, ResultSource::Local)
}

fn organic_results(payload: &Value) -> Option<&[Value]> {
    populated(payload, ResultSource::Organic)
}

fn places_results(payload: &Value) -> Option<&[Value]> {
    populated(payload, ResultSource::Places)
}

/// A collection qualifies when it is a non-empty array
fn populated(payload: &Value, source: ResultSource) -> Option<&[Value]> {
    payload
        .get(source.collection_key())?
        .as_array()
        .filter(|entries| !entries.is_empty())
        .map(Vec::as_slice)
}

fn select(payload: &Value) -> Option<(&'static Strategy, &[Value])> {
    STRATEGIES
        .iter()
        .find_map(|strategy| (strategy.select)(payload).map(|entries| (strategy, entries)))
}

/// Which collection `normalize` would read from this payload
pub fn detect_source(payload: &Value) -> Option<ResultSource> {
    select(payload).map(|(strategy, _)| strategy.source)
}

/// Normalize a raw places payload
/// DOCUMENTATION: Collections are tried local → organic → places and only the
/// first populated one is used. A payload without any yields an empty list.
/// The hint is advisory: it never changes which collection is read.
pub fn normalize(payload: &Value, hint: Option<ResultSource>) -> Vec<CanonicalPlace> {
    let Some((strategy, entries)) = select(payload) else {
        log::debug!("Payload has no recognizable result collection");
        return Vec::new();
    };

    if let Some(hint) = hint.filter(|hint| *hint != strategy.source) {
        log::debug!(
            "Payload hinted as {:?} but resolved to {:?}",
            hint,
            strategy.source
        );
    }

    (strategy.map)(entries)
}

/// Field-level view over one result entry
/// DOCUMENTATION: Non-object entries read as an empty record. Null values and
/// empty strings count as absent.
struct Record<'a>(Option<&'a Map<String, Value>>);

impl<'a> Record<'a> {
    fn of(entry: &'a Value) -> Self {
        Record(entry.as_object())
    }

    fn field(&self, key: &str) -> Option<&'a Value> {
        self.0?.get(key).filter(|value| !value.is_null())
    }

    fn text(&self, key: &str) -> Option<&'a str> {
        self.field(key)?.as_str().filter(|text| !text.is_empty())
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.field(key)?.as_f64()
    }

    fn count(&self, key: &str) -> Option<u64> {
        self.field(key)?.as_u64()
    }

    /// String array joined with ", "
    fn joined(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = self
            .field(key)?
            .as_array()?
            .iter()
            .filter_map(Value::as_str)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    fn coordinates(&self, key: &str) -> Option<Coordinates> {
        let geo = self.field(key)?;
        Some(Coordinates::new(
            geo.get("latitude")?.as_f64()?,
            geo.get("longitude")?.as_f64()?,
        ))
    }
}

/// Differences between structured (local/places) and organic entries
#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryShape {
    Structured,
    Organic,
}

fn name_of(record: &Record) -> String {
    record
        .text("title")
        .or_else(|| record.text("name"))
        .unwrap_or(UNKNOWN_NAME)
        .to_string()
}

fn address_of(record: &Record, shape: EntryShape) -> String {
    record
        .text("address")
        .map(str::to_string)
        .or_else(|| record.joined("address_lines"))
        .or_else(|| match shape {
            EntryShape::Organic => record.text("snippet").map(str::to_string),
            EntryShape::Structured => None,
        })
        .unwrap_or_else(|| ADDRESS_NOT_AVAILABLE.to_string())
}

fn to_place(record: &Record, shape: EntryShape) -> CanonicalPlace {
    let coordinates = match shape {
        EntryShape::Structured => record.coordinates("gps_coordinates"),
        EntryShape::Organic => None,
    };

    CanonicalPlace {
        name: name_of(record),
        address: address_of(record, shape),
        rating: record.number("rating"),
        reviews: record.count("reviews"),
        coordinates,
        photos: record
            .text("thumbnail")
            .map(|url| vec![url.to_string()])
            .unwrap_or_default(),
    }
}

fn map_structured(entries: &[Value]) -> Vec<CanonicalPlace> {
    entries
        .iter()
        .map(|entry| to_place(&Record::of(entry), EntryShape::Structured))
        .collect()
}

fn map_organic(entries: &[Value]) -> Vec<CanonicalPlace> {
    entries
        .iter()
        .map(Record::of)
        .filter(|record| record.text("title").is_some())
        .take(ORGANIC_RESULT_LIMIT)
        .map(|record| to_place(&record, EntryShape::Organic))
        .collect()
}
