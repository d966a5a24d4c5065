use bikeflow::{map::bounds, prelude::*};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ViewportDto {
    pub context: ViewportContext,
    pub south_west: Coordinate,
    pub north_east: Coordinate,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl ViewportDto {
    pub fn from(viewport: &Viewport) -> Self {
        let context = *viewport.context();
        let (south_west, north_east) = bounds(&context);
        let (min_zoom, max_zoom) = viewport.zoom_limits();
        Self {
            context,
            south_west,
            north_east,
            min_zoom,
            max_zoom,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkersDto {
    pub revision: Option<u64>,
    pub markers: Vec<Marker>,
}
