use crate::{
    map::ViewportContext,
    shared::{Coordinate, ScreenPoint},
};
use std::f64::consts::PI;

/// Pixel size of the whole world at zoom 0.
pub const TILE_SIZE: f64 = 512.0;

pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * 2f64.powf(zoom)
}

/// Web Mercator position in world pixels at `zoom`, origin at the
/// north-west corner of the world.
pub fn to_world(coordinate: &Coordinate, zoom: f64) -> ScreenPoint {
    let size = world_size(zoom);
    let coordinate = coordinate.clamped();
    let x = (180.0 + coordinate.longitude) / 360.0 * size;
    let y = (180.0 - (180.0 / PI) * (PI / 4.0 + coordinate.latitude.to_radians() / 2.0).tan().ln())
        / 360.0
        * size;
    ScreenPoint::new(x, y)
}

/// Projects a coordinate into the pixel space of the given viewport.
/// Pure in both arguments.
pub fn project(coordinate: &Coordinate, context: &ViewportContext) -> ScreenPoint {
    let center = to_world(&context.center, context.zoom);
    let point = to_world(coordinate, context.zoom);
    ScreenPoint::new(
        point.x - center.x + context.width / 2.0,
        point.y - center.y + context.height / 2.0,
    )
}

/// Inverse of [`project`].
pub fn unproject(point: &ScreenPoint, context: &ViewportContext) -> Coordinate {
    let size = world_size(context.zoom);
    let center = to_world(&context.center, context.zoom);
    let x = point.x - context.width / 2.0 + center.x;
    let y = point.y - context.height / 2.0 + center.y;
    let longitude = x / size * 360.0 - 180.0;
    let y = 180.0 - y / size * 360.0;
    let latitude = 360.0 / PI * (y * PI / 180.0).exp().atan() - 90.0;
    Coordinate::new(longitude, latitude)
}

/// South-west and north-east corners of the visible area.
pub fn bounds(context: &ViewportContext) -> (Coordinate, Coordinate) {
    let south_west = unproject(&ScreenPoint::new(0.0, context.height), context);
    let north_east = unproject(&ScreenPoint::new(context.width, 0.0), context);
    (south_west, north_east)
}

#[test]
fn world_origin_test() {
    let origin = to_world(&Coordinate::new(0.0, 0.0), 0.0);
    assert!((origin.x - 256.0).abs() < 1e-9);
    assert!((origin.y - 256.0).abs() < 1e-9);
}
