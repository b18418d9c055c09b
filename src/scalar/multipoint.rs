use serde::{Deserialize, Serialize};

use crate::datatypes::{Dimension, GeometryType};
use crate::scalar::{Geometry, Point};

/// A collection of points, each encoded as a complete, self-describing geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint {
    /// Every element must be a [Geometry::Point] to be encodable.
    pub points: Vec<Geometry>,
    /// Optional spatial reference identifier
    pub srid: Option<u32>,
}

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self::from_geometries(points.into_iter().map(Geometry::Point).collect())
    }

    /// Construct from arbitrary geometries without checking their kind.
    pub fn from_geometries(points: Vec<Geometry>) -> Self {
        Self { points, srid: None }
    }

    /// Attach a spatial reference identifier.
    pub fn with_srid(mut self, srid: u32) -> Self {
        self.srid = Some(srid);
        self
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPoint
    }

    pub fn dim(&self) -> Dimension {
        self.points.first().map(Geometry::dim).unwrap_or_default()
    }

    pub fn has_z(&self) -> bool {
        self.dim().has_z()
    }

    pub fn has_m(&self) -> bool {
        self.dim().has_m()
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn srid(&self) -> Option<u32> {
        self.srid
    }

    pub fn has_srid(&self) -> bool {
        self.srid.is_some()
    }
}
