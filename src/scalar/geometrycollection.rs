use serde::{Deserialize, Serialize};

use crate::datatypes::{Dimension, GeometryType};
use crate::scalar::Geometry;

/// A heterogeneous collection of geometries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    pub geometries: Vec<Geometry>,
    /// Optional spatial reference identifier
    pub srid: Option<u32>,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self {
            geometries,
            srid: None,
        }
    }

    /// Attach a spatial reference identifier.
    pub fn with_srid(mut self, srid: u32) -> Self {
        self.srid = Some(srid);
        self
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::GeometryCollection
    }

    pub fn dim(&self) -> Dimension {
        self.geometries.first().map(Geometry::dim).unwrap_or_default()
    }

    pub fn has_z(&self) -> bool {
        self.dim().has_z()
    }

    pub fn has_m(&self) -> bool {
        self.dim().has_m()
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn srid(&self) -> Option<u32> {
        self.srid
    }

    pub fn has_srid(&self) -> bool {
        self.srid.is_some()
    }
}
