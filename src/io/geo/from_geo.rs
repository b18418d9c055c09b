use crate::error::{EwkbError, EwkbResult};
use crate::scalar::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

pub fn point_from_geo(point: &geo::Point) -> Point {
    Point::new(point.x(), point.y())
}

pub fn line_string_from_geo(line_string: &geo::LineString) -> LineString {
    LineString::new(line_string.coords().map(|c| Point::new(c.x, c.y)).collect())
}

/// The exterior ring comes first, followed by the interiors in order.
pub fn polygon_from_geo(polygon: &geo::Polygon) -> Polygon {
    let rings = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(line_string_from_geo)
        .collect();
    Polygon::new(rings)
}

pub fn multi_point_from_geo(multi_point: &geo::MultiPoint) -> MultiPoint {
    MultiPoint::new(multi_point.iter().map(point_from_geo).collect())
}

pub fn multi_line_string_from_geo(multi_line_string: &geo::MultiLineString) -> MultiLineString {
    MultiLineString::new(multi_line_string.iter().map(line_string_from_geo).collect())
}

pub fn multi_polygon_from_geo(multi_polygon: &geo::MultiPolygon) -> MultiPolygon {
    MultiPolygon::new(multi_polygon.iter().map(polygon_from_geo).collect())
}

/// Convert a [`geo::Geometry`] into a [Geometry] carrying the given SRID.
///
/// `Line`, `Rect` and `Triangle` have no EWKB counterpart among the supported kinds and fail
/// with [EwkbError::UnsupportedClass]. The SRID is set on the outermost geometry only.
pub fn geometry_from_geo(geometry: &geo::Geometry, srid: Option<u32>) -> EwkbResult<Geometry> {
    let mut geom = match geometry {
        geo::Geometry::Point(g) => Geometry::Point(point_from_geo(g)),
        geo::Geometry::LineString(g) => Geometry::LineString(line_string_from_geo(g)),
        geo::Geometry::Polygon(g) => Geometry::Polygon(polygon_from_geo(g)),
        geo::Geometry::MultiPoint(g) => Geometry::MultiPoint(multi_point_from_geo(g)),
        geo::Geometry::MultiLineString(g) => {
            Geometry::MultiLineString(multi_line_string_from_geo(g))
        }
        geo::Geometry::MultiPolygon(g) => Geometry::MultiPolygon(multi_polygon_from_geo(g)),
        geo::Geometry::GeometryCollection(g) => {
            let geometries = g
                .iter()
                .map(|child| geometry_from_geo(child, None))
                .collect::<EwkbResult<Vec<_>>>()?;
            Geometry::GeometryCollection(GeometryCollection::new(geometries))
        }
        geo::Geometry::Line(_) => return Err(EwkbError::UnsupportedClass("Line".to_string())),
        geo::Geometry::Rect(_) => return Err(EwkbError::UnsupportedClass("Rect".to_string())),
        geo::Geometry::Triangle(_) => {
            return Err(EwkbError::UnsupportedClass("Triangle".to_string()))
        }
    };
    geom.set_srid(srid);
    Ok(geom)
}

impl TryFrom<&geo::Geometry> for Geometry {
    type Error = EwkbError;

    fn try_from(value: &geo::Geometry) -> EwkbResult<Self> {
        geometry_from_geo(value, None)
    }
}
