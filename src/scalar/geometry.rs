use enum_as_inner::EnumAsInner;
use serde::{Deserialize, Serialize};

use crate::datatypes::{Dimension, GeometryType};
use crate::scalar::{
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

/// Any of the seven supported geometry kinds.
#[derive(Debug, Clone, PartialEq, EnumAsInner, Serialize, Deserialize)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The kind of this geometry, which also fixes its wire type code.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(g) => g.geometry_type(),
            Geometry::LineString(g) => g.geometry_type(),
            Geometry::Polygon(g) => g.geometry_type(),
            Geometry::MultiPoint(g) => g.geometry_type(),
            Geometry::MultiLineString(g) => g.geometry_type(),
            Geometry::MultiPolygon(g) => g.geometry_type(),
            Geometry::GeometryCollection(g) => g.geometry_type(),
        }
    }

    /// The coordinate dimension.
    ///
    /// Composites report the dimension of their first element only. Siblings with a
    /// different dimension are not detected.
    pub fn dim(&self) -> Dimension {
        match self {
            Geometry::Point(g) => g.dim(),
            Geometry::LineString(g) => g.dim(),
            Geometry::Polygon(g) => g.dim(),
            Geometry::MultiPoint(g) => g.dim(),
            Geometry::MultiLineString(g) => g.dim(),
            Geometry::MultiPolygon(g) => g.dim(),
            Geometry::GeometryCollection(g) => g.dim(),
        }
    }

    pub fn has_z(&self) -> bool {
        self.dim().has_z()
    }

    pub fn has_m(&self) -> bool {
        self.dim().has_m()
    }

    pub fn srid(&self) -> Option<u32> {
        match self {
            Geometry::Point(g) => g.srid,
            Geometry::LineString(g) => g.srid,
            Geometry::Polygon(g) => g.srid,
            Geometry::MultiPoint(g) => g.srid,
            Geometry::MultiLineString(g) => g.srid,
            Geometry::MultiPolygon(g) => g.srid,
            Geometry::GeometryCollection(g) => g.srid,
        }
    }

    pub fn has_srid(&self) -> bool {
        self.srid().is_some()
    }

    /// Replace the spatial reference identifier of this geometry, leaving children untouched.
    pub fn set_srid(&mut self, srid: Option<u32>) {
        match self {
            Geometry::Point(g) => g.srid = srid,
            Geometry::LineString(g) => g.srid = srid,
            Geometry::Polygon(g) => g.srid = srid,
            Geometry::MultiPoint(g) => g.srid = srid,
            Geometry::MultiLineString(g) => g.srid = srid,
            Geometry::MultiPolygon(g) => g.srid = srid,
            Geometry::GeometryCollection(g) => g.srid = srid,
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Geometry::GeometryCollection(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{linestring, multipoint, point, polygon};

    #[test]
    fn dimension_comes_from_first_child() {
        let line = LineString::new(vec![point::p_zm(), Point::new(0., 0.)]);
        assert_eq!(line.dim(), Dimension::XYZM);

        let line = LineString::new(vec![Point::new(0., 0.), point::p_zm()]);
        assert_eq!(line.dim(), Dimension::XY);

        let poly = Geometry::Polygon(Polygon::new(vec![linestring::ls_z()]));
        assert!(poly.has_z());
        assert!(!poly.has_m());
    }

    #[test]
    fn composite_accessors() {
        let line = linestring::ls_z().with_srid(4326);
        assert!(line.has_z());
        assert!(!line.has_m());
        assert!(line.has_srid());

        let multi_point = MultiPoint::new(vec![point::p_zm()]);
        assert!(multi_point.has_z());
        assert!(multi_point.has_m());
        assert!(!multi_point.has_srid());

        let collection = GeometryCollection::new(vec![]).with_srid(0);
        assert!(!collection.has_z());
        assert!(collection.has_srid());
    }

    #[test]
    fn empty_composites_are_2d() {
        assert_eq!(MultiPoint::new(vec![]).dim(), Dimension::XY);
        assert_eq!(GeometryCollection::new(vec![]).dim(), Dimension::XY);
    }

    #[test]
    fn type_and_srid() {
        let mut geom = Geometry::from(multipoint::mp0());
        assert_eq!(geom.geometry_type(), GeometryType::MultiPoint);
        assert!(!geom.has_srid());

        geom.set_srid(Some(3857));
        assert_eq!(geom.srid(), Some(3857));

        let poly = Geometry::from(polygon::p0().with_srid(4326));
        assert_eq!(poly.srid(), Some(4326));
        assert!(poly.is_polygon());
        assert_eq!(poly.into_polygon().unwrap().num_rings(), 2);
    }

    #[test]
    fn json_round_trip() {
        let geom = Geometry::from(polygon::p0().with_srid(4326));
        let json = serde_json::to_string(&geom).unwrap();
        let back: Geometry = serde_json::from_str(&json).unwrap();
        assert_eq!(geom, back);
    }
}
