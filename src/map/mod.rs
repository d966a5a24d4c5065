pub mod layer;
pub mod projection;
mod render;
mod viewport;

pub use layer::{LineLayer, LinePaint};
pub use projection::{bounds, project, unproject};
pub use render::*;
pub use viewport::*;
