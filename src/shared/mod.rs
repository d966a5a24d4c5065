pub mod geo;

pub use geo::*;

pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}
