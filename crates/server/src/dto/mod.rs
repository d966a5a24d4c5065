mod layer;
mod station;
mod viewport;

pub use layer::*;
pub use station::*;
pub use viewport::*;
