use serde::{Deserialize, Serialize};

use crate::datatypes::{Dimension, GeometryType};

/// A single position with optional Z and M values.
///
/// The dimension of a point is implied by which of `z` and `m` are present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Optional Z coordinate
    pub z: Option<f64>,
    /// Optional measure
    pub m: Option<f64>,
    /// Optional spatial reference identifier
    pub srid: Option<u32>,
}

impl Point {
    /// Construct a 2D point.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
            srid: None,
        }
    }

    /// Construct a point with a Z value.
    pub fn new_z(x: f64, y: f64, z: f64) -> Self {
        Self {
            z: Some(z),
            ..Self::new(x, y)
        }
    }

    /// Construct a point with a measure.
    pub fn new_m(x: f64, y: f64, m: f64) -> Self {
        Self {
            m: Some(m),
            ..Self::new(x, y)
        }
    }

    /// Construct a point with both a Z value and a measure.
    pub fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            z: Some(z),
            m: Some(m),
            ..Self::new(x, y)
        }
    }

    /// Attach a spatial reference identifier.
    pub fn with_srid(mut self, srid: u32) -> Self {
        self.srid = Some(srid);
        self
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    pub fn dim(&self) -> Dimension {
        Dimension::from_flags(self.z.is_some(), self.m.is_some())
    }

    pub fn has_z(&self) -> bool {
        self.z.is_some()
    }

    pub fn has_m(&self) -> bool {
        self.m.is_some()
    }

    pub fn srid(&self) -> Option<u32> {
        self.srid
    }

    pub fn has_srid(&self) -> bool {
        self.srid.is_some()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dimension_follows_fields() {
        assert_eq!(Point::new(0., 1.).dim(), Dimension::XY);
        assert_eq!(Point::new_z(0., 1., 2.).dim(), Dimension::XYZ);
        assert_eq!(Point::new_m(0., 1., 2.).dim(), Dimension::XYM);
        assert_eq!(Point::new_zm(0., 1., 2., 3.).dim(), Dimension::XYZM);
    }

    #[test]
    fn srid() {
        let point = Point::new(1., 2.);
        assert!(!point.has_srid());

        let point = point.with_srid(4326);
        assert_eq!(point.srid(), Some(4326));
    }
}
