use std::io;
use thiserror::Error;

mod config;
pub mod directory;
pub mod trips;

pub use config::*;
pub use directory::*;
pub use trips::*;

/// Every variant means the source could not be turned into usable data.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Json document has no array at {0}")]
    MissingField(String),
    #[error("Csv file is missing column {0}")]
    MissingColumn(String),
}
