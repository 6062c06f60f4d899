use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ValidationError, Violation};
use crate::types::{Bbox, BoundValue, Extensions};

use super::rules;

/// Plain decimal literal; rejects `NaN`, `inf` and hex forms that `f64::from_str` accepts.
pub(crate) static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("valid")
});

/// Collects findings across every axis instead of stopping at the first bad bound.
#[derive(Default)]
pub struct BoundsLinter {
    findings: Vec<Violation>,
}

impl BoundsLinter {
    pub fn lint(&mut self, bbox: &Bbox) {
        rules::bbox::lint_bbox(self, bbox);
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.findings.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.findings))
        }
    }

    pub(crate) fn report(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.findings.push(Violation::new(path, message));
    }

    pub(crate) fn lint_extensions(&mut self, ext: &Extensions) {
        for key in ext.keys() {
            if key.trim().is_empty() {
                self.report("$", "extension field names must not be blank");
            } else if Bbox::FIELD_NAMES.contains(&key.as_str()) {
                self.report(
                    format!("$.{key}"),
                    "extension field shadows a bound field of the same name",
                );
            }
        }
    }

    /// Parses each bound, reporting the ones that are not finite decimals.
    /// Rejected entries come back as `None` so indices stay aligned.
    pub(crate) fn parse_bounds(&mut self, path: &str, values: &[BoundValue]) -> Vec<Option<f64>> {
        values
            .iter()
            .enumerate()
            .map(|(idx, raw)| {
                let text = raw.trim();
                let parsed = DECIMAL_RE
                    .is_match(text)
                    .then(|| text.parse::<f64>().ok())
                    .flatten()
                    .filter(|n| n.is_finite());
                if parsed.is_none() {
                    self.report(
                        format!("{path}[{idx}]"),
                        format!("bound {raw:?} is not a finite decimal number"),
                    );
                }
                parsed
            })
            .collect()
    }
}
