use crate::traffic::StationTraffic;
use rayon::prelude::*;

pub const DEFAULT_MAX_RADIUS: f64 = 25.0;

/// Square root scale from total traffic to marker radius, so that marker
/// area grows linearly with traffic.
///
/// The domain is `[0, max_traffic]` and the range `[0, max_radius]`.
/// Traffic above the domain is clamped. An all-zero domain maps every
/// input to a zero radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    max_traffic: u64,
    max_radius: f64,
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self::new(0, DEFAULT_MAX_RADIUS)
    }
}

impl RadiusScale {
    pub fn new(max_traffic: u64, max_radius: f64) -> Self {
        let max_radius = if max_radius.is_finite() {
            max_radius.max(0.0)
        } else {
            0.0
        };
        Self {
            max_traffic,
            max_radius,
        }
    }

    /// Takes the domain from the busiest station.
    pub fn fit(stations: &[StationTraffic], max_radius: f64) -> Self {
        let max_traffic = stations
            .par_iter()
            .map(StationTraffic::total_traffic)
            .max()
            .unwrap_or(0);
        Self::new(max_traffic, max_radius)
    }

    pub fn domain(&self) -> (u64, u64) {
        (0, self.max_traffic)
    }

    pub fn range(&self) -> (f64, f64) {
        (0.0, self.max_radius)
    }

    pub fn radius(&self, traffic: u64) -> f64 {
        if self.max_traffic == 0 {
            return 0.0;
        }
        let traffic = traffic.min(self.max_traffic) as f64;
        (traffic / self.max_traffic as f64).sqrt() * self.max_radius
    }
}

#[test]
fn invalid_radius_test() {
    assert_eq!(RadiusScale::new(10, -4.0).range(), (0.0, 0.0));
    assert_eq!(RadiusScale::new(10, f64::NAN).range(), (0.0, 0.0));
}
