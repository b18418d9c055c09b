use serde::{Deserialize, Serialize};

use crate::datatypes::{Dimension, GeometryType};
use crate::scalar::{Geometry, Polygon};

/// A collection of polygons, each encoded as a complete, self-describing geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon {
    /// Every element must be a [Geometry::Polygon] to be encodable.
    pub polygons: Vec<Geometry>,
    /// Optional spatial reference identifier
    pub srid: Option<u32>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self::from_geometries(polygons.into_iter().map(Geometry::Polygon).collect())
    }

    /// Construct from arbitrary geometries without checking their kind.
    pub fn from_geometries(polygons: Vec<Geometry>) -> Self {
        Self { polygons, srid: None }
    }

    /// Attach a spatial reference identifier.
    pub fn with_srid(mut self, srid: u32) -> Self {
        self.srid = Some(srid);
        self
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPolygon
    }

    pub fn dim(&self) -> Dimension {
        self.polygons.first().map(Geometry::dim).unwrap_or_default()
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
