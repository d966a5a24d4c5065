mod layers;
mod markers;
mod stations;
mod viewport;

pub use layers::*;
pub use markers::*;
pub use stations::*;
pub use viewport::*;
