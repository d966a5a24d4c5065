use crate::{
    shared::{Coordinate, Identifiable},
    source::{self, DirectoryConfig},
};
use serde_json::Value;
use std::{io::Read, sync::Arc, time::Instant};
use tracing::{debug, warn};

/// A dock location from the station directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    /// Identifier shared by the directory and the trip log.
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub coordinate: Coordinate,
}

impl Identifiable for Station {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Station {
    pub fn new(id: impl Into<Arc<str>>, name: impl Into<Arc<str>>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinate,
        }
    }
}

pub fn parse_directory<R: Read>(
    reader: R,
    config: &DirectoryConfig,
) -> Result<Vec<Station>, source::Error> {
    let document: Value = serde_json::from_reader(reader)?;
    stations_from_document(&document, config)
}

pub fn parse_directory_slice(
    bytes: &[u8],
    config: &DirectoryConfig,
) -> Result<Vec<Station>, source::Error> {
    let document: Value = serde_json::from_slice(bytes)?;
    stations_from_document(&document, config)
}

/// Duplicate ids are passed through untouched.
pub fn stations_from_document(
    document: &Value,
    config: &DirectoryConfig,
) -> Result<Vec<Station>, source::Error> {
    debug!("Loading stations...");
    let now = Instant::now();
    let missing = || source::Error::MissingField(config.stations_path.join("."));
    let entries = config
        .stations_path
        .iter()
        .try_fold(document, |value, key| value.get(key.as_str()))
        .and_then(Value::as_array)
        .ok_or_else(missing)?;

    let stations: Vec<Station> = entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            let station = station_from_entry(entry, config);
            if station.is_none() {
                warn!("Skipping station entry {i}: missing id or coordinate");
            }
            station
        })
        .collect();

    debug!(
        "Loading {} stations took {:?}",
        stations.len(),
        now.elapsed()
    );
    Ok(stations)
}

fn station_from_entry(entry: &Value, config: &DirectoryConfig) -> Option<Station> {
    let id = id_from_value(entry.get(config.id_field.as_str())?)?;
    let name = entry
        .get(config.name_field.as_str())
        .and_then(Value::as_str)
        .unwrap_or_default();
    let longitude = number_from_value(entry.get(config.longitude_field.as_str())?)?;
    let latitude = number_from_value(entry.get(config.latitude_field.as_str())?)?;
    Some(Station::new(
        id,
        name,
        Coordinate::new(longitude, latitude),
    ))
}

/// Station ids come as strings or bare numbers depending on the feed.
fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => {
            let id = id.trim();
            (!id.is_empty()).then(|| id.to_string())
        }
        // A whole float such as `42.0` names the same station as `42`.
        Value::Number(id) => match id.as_f64() {
            Some(float) if id.is_f64() && float.fract() == 0.0 => Some(format!("{float:.0}")),
            _ => Some(id.to_string()),
        },
        _ => None,
    }
}

fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(number) => number.trim().parse().ok(),
        _ => None,
    };
    number.filter(|number| number.is_finite())
}

#[test]
fn id_from_value_test() {
    assert_eq!(id_from_value(&Value::from("A32000")).as_deref(), Some("A32000"));
    assert_eq!(id_from_value(&Value::from(42)).as_deref(), Some("42"));
    assert_eq!(id_from_value(&Value::from(42.0)).as_deref(), Some("42"));
    assert_eq!(id_from_value(&Value::from(-7.0)).as_deref(), Some("-7"));
    assert_eq!(id_from_value(&Value::from(4.5)).as_deref(), Some("4.5"));
    assert_eq!(id_from_value(&Value::from("  ")), None);
    assert_eq!(id_from_value(&Value::Null), None);
}

#[test]
fn number_from_value_test() {
    assert_eq!(number_from_value(&Value::from("-71.5")), Some(-71.5));
    assert_eq!(number_from_value(&Value::from(42.25)), Some(42.25));
    assert_eq!(number_from_value(&Value::from("north")), None);
    assert_eq!(number_from_value(&Value::Bool(true)), None);
}
