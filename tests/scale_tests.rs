use bikeflow::{
    shared::Coordinate,
    source::Station,
    traffic::{DEFAULT_MAX_RADIUS, RadiusScale, StationTraffic},
};

fn station(id: &str, arrivals: u64, departures: u64) -> StationTraffic {
    StationTraffic::new(
        Station::new(id, id, Coordinate::new(0.0, 0.0)),
        arrivals,
        departures,
    )
}

#[test]
fn zero_traffic_is_zero_radius() {
    let scale = RadiusScale::fit(&[station("A", 10, 30)], DEFAULT_MAX_RADIUS);
    assert_eq!(scale.radius(0), 0.0);
}

#[test]
fn max_traffic_is_max_radius() {
    let stations = [station("A", 10, 30), station("B", 2, 2), station("C", 0, 0)];
    let scale = RadiusScale::fit(&stations, DEFAULT_MAX_RADIUS);
    assert_eq!(scale.domain(), (0, 40));
    assert_eq!(scale.radius(40), 25.0);
}

#[test]
fn area_is_linear_in_traffic() {
    let scale = RadiusScale::new(100, 20.0);
    assert!((scale.radius(25) - 10.0).abs() < 1e-9);
    let quarter = scale.radius(25).powi(2);
    let full = scale.radius(100).powi(2);
    assert!((full / quarter - 4.0).abs() < 1e-9);
}

#[test]
fn monotonic() {
    let scale = RadiusScale::new(1000, DEFAULT_MAX_RADIUS);
    let mut previous = 0.0;
    for traffic in 0..=1000 {
        let radius = scale.radius(traffic);
        assert!(radius >= previous);
        previous = radius;
    }
}

#[test]
fn all_zero_traffic() {
    let stations = [station("A", 0, 0), station("B", 0, 0)];
    let scale = RadiusScale::fit(&stations, DEFAULT_MAX_RADIUS);
    assert_eq!(scale.domain(), (0, 0));
    for traffic in [0, 1, 100, u64::MAX] {
        let radius = scale.radius(traffic);
        assert_eq!(radius, 0.0);
    }
}

#[test]
fn no_stations() {
    let scale = RadiusScale::fit(&[], DEFAULT_MAX_RADIUS);
    assert_eq!(scale.radius(5), 0.0);
}

#[test]
fn beyond_domain_is_clamped() {
    let scale = RadiusScale::new(16, 8.0);
    assert_eq!(scale.radius(64), 8.0);
}
