mod annotate;
pub mod scale;

pub use annotate::*;
pub use scale::*;
