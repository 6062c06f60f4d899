use crate::types::{BoundValue, Extensions};

/// Bounding-box fragment of a GeoParquet column's metadata.
///
/// Position `i` of every array is expected to describe the same extent,
/// but the record itself never checks that; see [`crate::validate_bbox`].
/// A field that is `None` is omitted on output, while `Some(vec![])` is
/// written as an empty array.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bbox {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xmax: Option<Vec<BoundValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xmin: Option<Vec<BoundValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ymax: Option<Vec<BoundValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ymin: Option<Vec<BoundValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zmin: Option<Vec<BoundValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zmax: Option<Vec<BoundValue>>,

    #[serde(flatten, default)]
    pub additional_properties: Extensions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Field names of the `(min, max)` pair for this axis.
    pub fn field_names(self) -> (&'static str, &'static str) {
        match self {
            Axis::X => ("xmin", "xmax"),
            Axis::Y => ("ymin", "ymax"),
            Axis::Z => ("zmin", "zmax"),
        }
    }
}

impl Bbox {
    /// Keys read into the declared fields; any other key lands in `additional_properties`.
    pub const FIELD_NAMES: [&'static str; 6] = ["xmax", "xmin", "ymax", "ymin", "zmin", "zmax"];

    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the `(min, max)` bounds of `axis`, each `None` when unset.
    pub fn axis(&self, axis: Axis) -> (Option<&[BoundValue]>, Option<&[BoundValue]>) {
        let (min, max) = match axis {
            Axis::X => (&self.xmin, &self.xmax),
            Axis::Y => (&self.ymin, &self.ymax),
            Axis::Z => (&self.zmin, &self.zmax),
        };
        (min.as_deref(), max.as_deref())
    }

    /// True when no declared field is set and no extension entry is present.
    pub fn is_empty(&self) -> bool {
        Axis::ALL.iter().all(|&a| self.axis(a) == (None, None))
            && self.additional_properties.is_empty()
    }
}
