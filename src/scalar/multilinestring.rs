use serde::{Deserialize, Serialize};

use crate::datatypes::{Dimension, GeometryType};
use crate::scalar::{Geometry, LineString};

/// A collection of line strings, each encoded as a complete, self-describing geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString {
    /// Every element must be a [Geometry::LineString] to be encodable.
    pub lines: Vec<Geometry>,
    /// Optional spatial reference identifier
    pub srid: Option<u32>,
}

impl MultiLineString {
    pub fn new(lines: Vec<LineString>) -> Self {
        Self::from_geometries(lines.into_iter().map(Geometry::LineString).collect())
    }

    /// Construct from arbitrary geometries without checking their kind.
    pub fn from_geometries(lines: Vec<Geometry>) -> Self {
        Self { lines, srid: None }
    }

    /// Attach a spatial reference identifier.
    pub fn with_srid(mut self, srid: u32) -> Self {
        self.srid = Some(srid);
        self
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiLineString
    }

    pub fn dim(&self) -> Dimension {
        self.lines.first().map(Geometry::dim).unwrap_or_default()
    }

    pub fn has_z(&self) -> bool {
        self.dim().has_z()
    }

    pub fn has_m(&self) -> bool {
        self.dim().has_m()
    }

    pub fn srid(&self) -> Option<u32> {
        self.srid
    }

    pub fn has_srid(&self) -> bool {
        self.srid.is_some()
    }
}
