use crate::shared::Coordinate;
use geojson::{FeatureCollection, GeoJson, Geometry, Value};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("GeoJson error: {0}")]
    GeoJson(#[from] geojson::Error),
    #[error("Layer {0} is not a feature collection")]
    NotAFeatureCollection(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LinePaint {
    pub line_color: String,
    pub line_width: f64,
    pub line_opacity: f64,
}

impl Default for LinePaint {
    fn default() -> Self {
        Self {
            line_color: "#32D400".into(),
            line_width: 5.0,
            line_opacity: 0.6,
        }
    }
}

/// A static line overlay, such as a bike lane network. The feature data is
/// kept exactly as loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayer {
    pub id: String,
    pub paint: LinePaint,
    pub data: FeatureCollection,
}

impl LineLayer {
    pub fn new(id: impl Into<String>, data: FeatureCollection) -> Self {
        Self {
            id: id.into(),
            paint: LinePaint::default(),
            data,
        }
    }

    pub fn parse(id: impl Into<String>, text: &str) -> Result<Self, self::Error> {
        let id = id.into();
        match text.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(data) => Ok(Self::new(id, data)),
            _ => Err(self::Error::NotAFeatureCollection(id)),
        }
    }

    pub fn load<P: AsRef<Path>>(id: impl Into<String>, path: P) -> Result<Self, self::Error> {
        let text = fs::read_to_string(path)?;
        Self::parse(id, &text)
    }

    /// Every line string in the layer. Other geometry types are ignored.
    pub fn lines(&self) -> Vec<Vec<Coordinate>> {
        let mut lines = Vec::new();
        self.data
            .features
            .iter()
            .filter_map(|feature| feature.geometry.as_ref())
            .for_each(|geometry| collect_lines(geometry, &mut lines));
        lines
    }
}

fn collect_lines(geometry: &Geometry, lines: &mut Vec<Vec<Coordinate>>) {
    match &geometry.value {
        Value::LineString(line) => lines.push(to_coordinates(line)),
        Value::MultiLineString(multi) => lines.extend(multi.iter().map(|line| to_coordinates(line))),
        Value::GeometryCollection(geometries) => geometries
            .iter()
            .for_each(|geometry| collect_lines(geometry, lines)),
        _ => (),
    }
}

fn to_coordinates(line: &[Vec<f64>]) -> Vec<Coordinate> {
    line.iter()
        .filter_map(|position| Coordinate::from_position(position))
        .collect()
}
