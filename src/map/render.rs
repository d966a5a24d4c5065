use crate::{
    map::{LineLayer, ViewportContext, project},
    shared::{Identifiable, ScreenPoint},
    traffic::{RadiusScale, StationTraffic},
};
use serde::Serialize;
use std::{
    fmt::{self, Display},
    sync::Arc,
};

/// What the renderer needs to draw one station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: Arc<str>,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Marker {
    /// Whether any part of the circle falls inside the viewport.
    pub fn is_visible(&self, context: &ViewportContext) -> bool {
        self.x + self.radius >= 0.0
            && self.y + self.radius >= 0.0
            && self.x - self.radius <= context.width
            && self.y - self.radius <= context.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            fill: "steelblue".into(),
            stroke: "white".into(),
            stroke_width: 1.0,
            opacity: 0.8,
        }
    }
}

/// Annotated stations with their radius scale, plus the marker positions
/// from the most recent viewport seen.
#[derive(Debug, Clone, Default)]
pub struct MarkerLayer {
    stations: Arc<[StationTraffic]>,
    scale: RadiusScale,
    positions: Vec<Marker>,
    revision: Option<u64>,
}

impl MarkerLayer {
    pub fn new(stations: Vec<StationTraffic>, scale: RadiusScale) -> Self {
        Self {
            stations: stations.into(),
            scale,
            positions: Vec::new(),
            revision: None,
        }
    }

    /// Fits the radius scale to the stations' traffic.
    pub fn fit(stations: Vec<StationTraffic>, max_radius: f64) -> Self {
        let scale = RadiusScale::fit(&stations, max_radius);
        Self::new(stations, scale)
    }

    pub fn stations(&self) -> &[StationTraffic] {
        &self.stations
    }

    pub fn radius(&self, station: &StationTraffic) -> f64 {
        self.scale.radius(station.total_traffic())
    }

    /// Markers for `context`, in station order. Does not touch the stored
    /// positions.
    pub fn markers(&self, context: &ViewportContext) -> Vec<Marker> {
        self.stations
            .iter()
            .map(|station| {
                let ScreenPoint { x, y } = project(station.coordinate(), context);
                Marker {
                    id: station.station_id().clone(),
                    x,
                    y,
                    radius: self.radius(station),
                }
            })
            .collect()
    }

    /// Reprojects every station. A context older than the last one applied
    /// is ignored and `false` is returned.
    pub fn reposition(&mut self, context: &ViewportContext) -> bool {
        if self
            .revision
            .is_some_and(|revision| context.revision < revision)
        {
            return false;
        }
        self.positions = self.markers(context);
        self.revision = Some(context.revision);
        true
    }

    pub fn positions(&self) -> &[Marker] {
        &self.positions
    }

    pub fn revision(&self) -> Option<u64> {
        self.revision
    }
}

/// SVG document of the line overlays with the station markers on top.
pub struct SvgMap<'a> {
    pub context: &'a ViewportContext,
    pub layers: &'a [LineLayer],
    pub markers: &'a MarkerLayer,
    pub style: &'a MarkerStyle,
}

impl Display for SvgMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let context = self.context;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            context.width, context.height, context.width, context.height
        )?;

        for layer in self.layers {
            writeln!(
                f,
                r#"<g id="{}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}">"#,
                escape(&layer.id),
                escape(&layer.paint.line_color),
                layer.paint.line_width,
                layer.paint.line_opacity
            )?;
            for line in layer.lines().iter().filter(|line| line.len() > 1) {
                write!(f, r#"<polyline points=""#)?;
                for (i, coordinate) in line.iter().enumerate() {
                    let point = project(coordinate, context);
                    let separator = if i == 0 { "" } else { " " };
                    write!(f, "{separator}{:.2},{:.2}", point.x, point.y)?;
                }
                writeln!(f, r#""/>"#)?;
            }
            writeln!(f, "</g>")?;
        }

        writeln!(
            f,
            r#"<g id="stations" fill="{}" stroke="{}" stroke-width="{}" opacity="{}">"#,
            escape(&self.style.fill),
            escape(&self.style.stroke),
            self.style.stroke_width,
            self.style.opacity
        )?;
        let markers = self.markers.markers(context);
        for (marker, station) in markers.iter().zip(self.markers.stations()) {
            if !marker.is_visible(context) {
                continue;
            }
            writeln!(
                f,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}"><title>{}: {} trips ({} departures, {} arrivals)</title></circle>"#,
                marker.x,
                marker.y,
                marker.radius,
                escape(station.name()),
                station.total_traffic(),
                station.departures(),
                station.arrivals()
            )?;
        }
        writeln!(f, "</g>")?;
        write!(f, "</svg>")
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[test]
fn escape_test() {
    assert_eq!(escape(r#"Mass Ave & "Main" <St>"#), "Mass Ave &amp; &quot;Main&quot; &lt;St&gt;");
}
