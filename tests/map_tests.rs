use bikeflow::{
    map::{
        LineLayer, MapOptions, MarkerLayer, MarkerStyle, SvgMap, Viewport, ViewportContext,
        ViewportEvent, bounds, project, unproject,
    },
    shared::{Coordinate, ScreenPoint},
    source::Station,
    traffic::StationTraffic,
};
use std::sync::{Arc, Mutex};

const BOSTON: Coordinate = Coordinate::new(-71.09415, 42.36027);

fn stations() -> Vec<StationTraffic> {
    vec![
        StationTraffic::new(Station::new("A", "Fan Pier", Coordinate::new(-71.0446, 42.3534)), 5, 11),
        StationTraffic::new(Station::new("B", "Kendall", Coordinate::new(-71.0865, 42.3625)), 3, 1),
        StationTraffic::new(Station::new("C", "Idle", Coordinate::new(-71.1, 42.37)), 0, 0),
    ]
}

#[test]
fn center_projects_to_middle() {
    let context = ViewportContext::new(BOSTON, 12.0, 800.0, 600.0);
    let point = project(&BOSTON, &context);
    assert!((point.x - 400.0).abs() < 1e-6);
    assert!((point.y - 300.0).abs() < 1e-6);
}

#[test]
fn east_is_right_and_north_is_up() {
    let context = ViewportContext::new(BOSTON, 12.0, 800.0, 600.0);
    let east = project(&Coordinate::new(BOSTON.longitude + 0.01, BOSTON.latitude), &context);
    let north = project(&Coordinate::new(BOSTON.longitude, BOSTON.latitude + 0.01), &context);
    assert!(east.x > 400.0);
    assert!(north.y < 300.0);
}

#[test]
fn projection_follows_viewport() {
    let station = Coordinate::new(-71.0446, 42.3534);
    let first = ViewportContext::new(BOSTON, 12.0, 800.0, 600.0);
    let panned = ViewportContext::new(Coordinate::new(-71.05, 42.35), 12.0, 800.0, 600.0);
    let zoomed = ViewportContext::new(BOSTON, 14.0, 800.0, 600.0);
    let a = project(&station, &first);
    assert_ne!(a, project(&station, &panned));
    assert_ne!(a, project(&station, &zoomed));
    assert_eq!(a, project(&station, &first));
}

#[test]
fn zoom_doubles_distances() {
    let station = Coordinate::new(-71.0446, 42.3534);
    let near = project(&station, &ViewportContext::new(BOSTON, 12.0, 0.0, 0.0));
    let far = project(&station, &ViewportContext::new(BOSTON, 13.0, 0.0, 0.0));
    assert!((far.x - 2.0 * near.x).abs() < 1e-6);
    assert!((far.y - 2.0 * near.y).abs() < 1e-6);
}

#[test]
fn unproject_inverts_project() {
    let context = ViewportContext::new(BOSTON, 13.5, 1024.0, 768.0);
    let coordinate = unproject(&ScreenPoint::new(100.0, 650.0), &context);
    let point = project(&coordinate, &context);
    assert!((point.x - 100.0).abs() < 1e-6);
    assert!((point.y - 650.0).abs() < 1e-6);

    let (south_west, north_east) = bounds(&context);
    assert!(south_west.longitude < BOSTON.longitude && BOSTON.longitude < north_east.longitude);
    assert!(south_west.latitude < BOSTON.latitude && BOSTON.latitude < north_east.latitude);
}

#[test]
fn viewport_events_update_context() {
    let mut viewport = Viewport::new(MapOptions::default());
    assert_eq!(viewport.context().revision, 0);
    assert_eq!(viewport.context().zoom, 12.0);

    viewport.apply(ViewportEvent::Zoom { zoom: 30.0 });
    assert_eq!(viewport.context().zoom, 18.0);
    viewport.apply(ViewportEvent::Zoom { zoom: 1.0 });
    assert_eq!(viewport.context().zoom, 5.0);
    let context = viewport.apply(ViewportEvent::Zoom { zoom: f64::NAN });
    assert_eq!(context.zoom, 5.0);
    assert_eq!(context.revision, 3);

    let center = Coordinate::new(-71.05, 42.35);
    viewport.apply(ViewportEvent::Move { center });
    assert_eq!(viewport.context().center, center);

    viewport.apply(ViewportEvent::Resize {
        width: 640.0,
        height: 480.0,
    });
    let context = viewport.apply(ViewportEvent::MoveEnd);
    assert_eq!((context.width, context.height), (640.0, 480.0));
    assert_eq!(context.revision, 6);
}

#[test]
fn move_wraps_longitude() {
    let mut viewport = Viewport::new(MapOptions::default());
    let station = Coordinate::new(-71.0, 42.3);
    let context = viewport.apply(ViewportEvent::Move {
        center: Coordinate::new(-71.0 + 360.0, 42.3),
    });
    assert!((context.center.longitude + 71.0).abs() < 1e-9);

    let point = project(&station, &context);
    assert!((point.x - context.width / 2.0).abs() < 1e-6);
    assert!((point.y - context.height / 2.0).abs() < 1e-6);

    let (south_west, north_east) = bounds(&context);
    assert!(south_west.longitude < -71.0 && -71.0 < north_east.longitude);
}

#[test]
fn non_finite_move_is_ignored() {
    let mut viewport = Viewport::new(MapOptions::default());
    let before = *viewport.context();
    for center in [
        Coordinate::new(f64::NAN, 42.0),
        Coordinate::new(-71.0, f64::INFINITY),
    ] {
        viewport.apply(ViewportEvent::Move { center });
    }
    let context = viewport.context();
    assert_eq!(context.center, before.center);
    assert_eq!(context.revision, 2);
    assert!(project(&BOSTON, context).x.is_finite());
}

#[test]
fn handlers_see_every_event() {
    let seen: Arc<Mutex<Vec<(&'static str, u64)>>> = Arc::default();
    let mut viewport = Viewport::new(MapOptions::default());
    let log = seen.clone();
    viewport.on_viewport_change(move |context, event| {
        log.lock().unwrap().push((event.kind(), context.revision));
    });

    viewport.apply(ViewportEvent::Move { center: BOSTON });
    viewport.apply(ViewportEvent::Zoom { zoom: 13.0 });
    viewport.apply(ViewportEvent::Resize {
        width: 10.0,
        height: 10.0,
    });
    viewport.apply(ViewportEvent::MoveEnd);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![("move", 1), ("zoom", 2), ("resize", 3), ("move-end", 4)]
    );
}

#[test]
fn subscribed_layer_follows_viewport() {
    let layer = Arc::new(Mutex::new(MarkerLayer::fit(stations(), 25.0)));
    let mut viewport = Viewport::new(MapOptions::default());
    layer.lock().unwrap().reposition(viewport.context());
    let before = layer.lock().unwrap().positions().to_vec();

    let subscribed = layer.clone();
    viewport.on_viewport_change(move |context, _| {
        subscribed.lock().unwrap().reposition(context);
    });
    viewport.apply(ViewportEvent::Zoom { zoom: 15.0 });

    let layer = layer.lock().unwrap();
    assert_eq!(layer.revision(), Some(1));
    assert_ne!(layer.positions()[0].x, before[0].x);
    assert_eq!(layer.positions()[0].radius, before[0].radius);
}

#[test]
fn stale_context_is_ignored() {
    let mut layer = MarkerLayer::fit(stations(), 25.0);
    let mut newer = ViewportContext::new(BOSTON, 14.0, 800.0, 600.0);
    newer.revision = 3;
    let mut older = ViewportContext::new(BOSTON, 12.0, 800.0, 600.0);
    older.revision = 2;

    assert!(layer.reposition(&newer));
    let positions = layer.positions().to_vec();
    assert!(!layer.reposition(&older));
    assert_eq!(layer.positions(), positions.as_slice());
    assert_eq!(layer.revision(), Some(3));
}

#[test]
fn markers_carry_radius() {
    let layer = MarkerLayer::fit(stations(), 25.0);
    let context = ViewportContext::new(BOSTON, 12.0, 800.0, 600.0);
    let markers = layer.markers(&context);
    assert_eq!(markers.len(), 3);
    assert_eq!(&*markers[0].id, "A");
    assert_eq!(markers[0].radius, 25.0);
    assert!((markers[1].radius - 12.5).abs() < 1e-9);
    assert_eq!(markers[2].radius, 0.0);
    assert!(markers.iter().all(|marker| marker.is_visible(&context)));
}

#[test]
fn line_layer_and_svg() {
    let geojson = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"name":"Mass Ave"},"geometry":{"type":"LineString","coordinates":[[-71.1,42.36],[-71.09,42.361]]}},
        {"type":"Feature","properties":{},"geometry":{"type":"MultiLineString","coordinates":[[[-71.08,42.35],[-71.07,42.35]],[[-71.06,42.34],[-71.05,42.34]]]}},
        {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[-71.0,42.0]}}
    ]}"#;
    let lanes = LineLayer::parse("bike-lanes", geojson).unwrap();
    assert_eq!(lanes.lines().len(), 3);
    assert_eq!(lanes.paint.line_color, "#32D400");

    let layer = MarkerLayer::fit(stations(), 25.0);
    let context = ViewportContext::new(BOSTON, 12.0, 800.0, 600.0);
    let svg = SvgMap {
        context: &context,
        layers: &[lanes],
        markers: &layer,
        style: &MarkerStyle::default(),
    }
    .to_string();
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<polyline").count(), 3);
    assert_eq!(svg.matches("<circle").count(), 3);
    assert!(svg.contains("Fan Pier: 16 trips (11 departures, 5 arrivals)"));
}

#[test]
fn off_screen_markers_are_culled() {
    let context = ViewportContext::new(BOSTON, 12.0, 800.0, 600.0);
    // Centre 10 px left of the viewport, radius 25 px reaching into it.
    let edge = unproject(&ScreenPoint::new(-10.0, 300.0), &context);
    let stations = vec![
        StationTraffic::new(Station::new("E", "Edge", edge), 8, 8),
        StationTraffic::new(Station::new("F", "Far away", Coordinate::new(-70.0, 42.36)), 2, 2),
        StationTraffic::new(Station::new("K", "Kendall", Coordinate::new(-71.0865, 42.3625)), 1, 0),
    ];
    let layer = MarkerLayer::fit(stations, 25.0);

    let markers = layer.markers(&context);
    assert_eq!(markers.len(), 3);
    assert!((markers[0].x + 10.0).abs() < 1e-6);
    assert_eq!(markers[0].radius, 25.0);
    assert!(markers[0].is_visible(&context));
    assert!(!markers[1].is_visible(&context));
    assert!(markers[2].is_visible(&context));

    let svg = SvgMap {
        context: &context,
        layers: &[],
        markers: &layer,
        style: &MarkerStyle::default(),
    }
    .to_string();
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains("Edge: 16 trips"));
    assert!(svg.contains("Kendall: 1 trips"));
    assert!(!svg.contains("Far away"));
}

#[test]
fn line_layer_rejects_single_geometry() {
    let geojson = r#"{"type":"LineString","coordinates":[[0.0,0.0],[1.0,1.0]]}"#;
    assert!(LineLayer::parse("lanes", geojson).is_err());
}
