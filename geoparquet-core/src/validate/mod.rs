mod rules;
mod validator;

use crate::error::ValidationError;
use crate::types::Bbox;
use validator::BoundsLinter;

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for Bbox {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_bbox(self)
    }
}

/// Lints a bbox: numeric bound literals, paired min/max arrays of equal
/// length, and `min <= max` at every index. All findings are collected.
pub fn validate_bbox(bbox: &Bbox) -> Result<(), ValidationError> {
    let mut linter = BoundsLinter::default();
    linter.lint(bbox);
    linter.into_result()
}
