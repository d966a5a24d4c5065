pub mod map;
pub mod shared;
pub mod source;
pub mod traffic;

pub mod prelude {
    pub use crate::map::{
        LineLayer, LinePaint, MapOptions, Marker, MarkerLayer, MarkerStyle, SvgMap, Viewport,
        ViewportContext, ViewportEvent, project,
    };
    pub use crate::shared::{Coordinate, Identifiable, ScreenPoint};
    pub use crate::source::{
        DirectoryConfig, Station, TrafficTable, TripLogConfig, TripRecord, aggregate_trips,
        parse_directory, parse_directory_slice,
    };
    pub use crate::traffic::{
        DEFAULT_MAX_RADIUS, RadiusScale, StationTraffic, annotate, orphan_ids,
    };
}
