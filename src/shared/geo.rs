use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Highest latitude representable in Web Mercator.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.longitude, self.latitude))
    }
}

impl Coordinate {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Reads a GeoJSON position, ignoring any altitude component.
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [longitude, latitude, ..] if longitude.is_finite() && latitude.is_finite() => {
                Some(Self::new(*longitude, *latitude))
            }
            _ => None,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }

    pub fn clamped(&self) -> Self {
        Self {
            longitude: self.longitude,
            latitude: self.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE),
        }
    }

    /// Longitude wrapped into `[-180, 180)` and latitude clamped to the
    /// Web Mercator limit.
    pub fn wrapped(&self) -> Self {
        Self {
            longitude: (self.longitude + 180.0).rem_euclid(360.0) - 180.0,
            latitude: self.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE),
        }
    }
}

/// A position in viewport pixels, origin at the top left corner.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[test]
fn position_test() {
    let coord = Coordinate::from_position(&[-71.09415, 42.36027, 12.0]).unwrap();
    assert_eq!(coord, Coordinate::new(-71.09415, 42.36027));
    assert!(Coordinate::from_position(&[1.0]).is_none());
    assert!(Coordinate::from_position(&[f64::NAN, 1.0]).is_none());
}

#[test]
fn clamp_test() {
    let coord = Coordinate::new(10.0, 90.0).clamped();
    assert_eq!(coord.latitude, MAX_LATITUDE);
    assert_eq!(coord.longitude, 10.0);
}

#[test]
fn wrap_test() {
    let coord = Coordinate::new(-71.0 + 360.0, 42.3).wrapped();
    assert!((coord.longitude + 71.0).abs() < 1e-9);
    assert_eq!(coord.latitude, 42.3);
    assert_eq!(Coordinate::new(180.0, 0.0).wrapped().longitude, -180.0);
    assert_eq!(Coordinate::new(-540.0, 0.0).wrapped().longitude, -180.0);
    assert!(!Coordinate::new(f64::NAN, 1.0).is_finite());
}
