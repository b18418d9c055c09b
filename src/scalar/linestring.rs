use serde::{Deserialize, Serialize};

use crate::datatypes::{Dimension, GeometryType};
use crate::scalar::{Geometry, Point};

/// An ordered sequence of points.
///
/// Points are flat children: on the wire they share this line's header, so any SRID set on
/// an individual point is not encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    /// The vertices of this line. Every element must be a [Geometry::Point] to be encodable.
    pub points: Vec<Geometry>,
    /// Optional spatial reference identifier
    pub srid: Option<u32>,
}

impl LineString {
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
        GeometryType::LineString
    }

    /// The dimension of the first point; an empty line is [Dimension::XY].
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
