use serde::{Deserialize, Serialize};

use crate::datatypes::{Dimension, GeometryType};
use crate::scalar::{Geometry, LineString};

/// A polygon made of rings; the first ring is the exterior.
///
/// Rings are flat children sharing the polygon's header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Every element must be a [Geometry::LineString] to be encodable.
    pub rings: Vec<Geometry>,
    /// Optional spatial reference identifier
    pub srid: Option<u32>,
}

impl Polygon {
    pub fn new(rings: Vec<LineString>) -> Self {
        Self::from_geometries(rings.into_iter().map(Geometry::LineString).collect())
    }

    /// Construct from arbitrary geometries without checking their kind.
    pub fn from_geometries(rings: Vec<Geometry>) -> Self {
        Self { rings, srid: None }
    }

    /// Attach a spatial reference identifier.
    pub fn with_srid(mut self, srid: u32) -> Self {
        self.srid = Some(srid);
        self
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }

    /// The dimension of the exterior ring.
    pub fn dim(&self) -> Dimension {
        self.rings.first().map(Geometry::dim).unwrap_or_default()
    }

    pub fn has_z(&self) -> bool {
        self.dim().has_z()
    }

    pub fn has_m(&self) -> bool {
        self.dim().has_m()
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    pub fn exterior(&self) -> Option<&Geometry> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[Geometry] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn srid(&self) -> Option<u32> {
        self.srid
    }

    pub fn has_srid(&self) -> bool {
        self.srid.is_some()
    }
}
