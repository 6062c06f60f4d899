use std::fmt;

use thiserror::Error;

/// Any failure the library can report for a bbox document.
#[derive(Debug, Error)]
pub enum GeoParquetError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("bbox is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bbox is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Well-formed YAML whose bound fields are not arrays of strings.
    #[error("bbox YAML has the wrong shape: {0}")]
    YamlShape(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot write bbox as JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("cannot write bbox as YAML: {0}")]
    Yaml(#[source] serde_yaml::Error),
    #[error("extension field `{0}` collides with a bound field name")]
    ReservedKey(String),
}

/// Every bound that failed the lint pass, in the order they were found.
#[derive(Debug, Error)]
#[error("bbox has {} invalid bound(s)", .violations.len())]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl ValidationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

/// One lint finding. `path` points into the document, e.g. `$.xmin[2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
