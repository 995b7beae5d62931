use std::io;

use glide::math::Point;
use glide::path::{Path, PathError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("Cannot open file {file}: {source}")]
    Open { file: String, source: io::Error },
    #[error("Invalid value {value:?} for {name}")]
    InvalidValue { name: &'static str, value: String },
    #[error("Missing value for {0}")]
    MissingValue(&'static str),
    #[error("No command given, see --help")]
    MissingCommand,
}

pub struct FlattenCmd {
    pub path: Path,
    pub gap: f64,
    pub count: bool,
}

pub struct SampleCmd {
    pub path: Path,
    pub offset: f64,
}

pub struct NearestCmd {
    pub path: Path,
    pub target: Point,
    pub start: Option<f64>,
    pub end: Option<f64>,
}
