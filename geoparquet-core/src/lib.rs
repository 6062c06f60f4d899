#![forbid(unsafe_code)]

pub mod error;
pub mod parser;
pub mod types;
pub mod validate;

pub use crate::error::{GeoParquetError, ParseError, RenderError, ValidationError, Violation};
pub use crate::parser::{parse_bbox_str, render_bbox, DocumentFormat, ParsedBbox};
pub use crate::types::{Axis, Bbox, BoundValue, Extensions};
pub use crate::validate::{validate_bbox, Validate};
