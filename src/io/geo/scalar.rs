use crate::datatypes::GeometryType;
use crate::error::{EwkbError, EwkbResult};
use crate::scalar::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

fn mismatch(expected: GeometryType, found: &Geometry) -> EwkbError {
    EwkbError::TypeMismatch {
        expected,
        found: found.geometry_type(),
    }
}

fn expect_point(geom: &Geometry) -> EwkbResult<&Point> {
    geom.as_point()
        .ok_or_else(|| mismatch(GeometryType::Point, geom))
}

fn expect_line_string(geom: &Geometry) -> EwkbResult<&LineString> {
    geom.as_line_string()
        .ok_or_else(|| mismatch(GeometryType::LineString, geom))
}

fn expect_polygon(geom: &Geometry) -> EwkbResult<&Polygon> {
    geom.as_polygon()
        .ok_or_else(|| mismatch(GeometryType::Polygon, geom))
}

/// Convert a [Point] to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo(point: &Point) -> geo::Coord {
    geo::Coord {
        x: point.x,
        y: point.y,
    }
}

/// Convert a [Point] to a [`geo::Point`].
///
/// Only the first two dimensions will be kept.
pub fn point_to_geo(point: &Point) -> geo::Point {
    geo::Point(coord_to_geo(point))
}

/// Convert a [LineString] to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(line_string: &LineString) -> EwkbResult<geo::LineString> {
    let coords = line_string
        .points
        .iter()
        .map(|point| expect_point(point).map(coord_to_geo))
        .collect::<EwkbResult<Vec<_>>>()?;
    Ok(geo::LineString::new(coords))
}

/// Convert a [Polygon] to a [`geo::Polygon`].
///
/// The first ring becomes the exterior. [`geo::Polygon::new`] closes any open ring.
pub fn polygon_to_geo(polygon: &Polygon) -> EwkbResult<geo::Polygon> {
    let mut rings = polygon
        .rings
        .iter()
        .map(|ring| expect_line_string(ring).and_then(line_string_to_geo))
        .collect::<EwkbResult<Vec<_>>>()?;
    if rings.is_empty() {
        return Ok(geo::Polygon::new(geo::LineString::new(vec![]), vec![]));
    }
    let exterior = rings.remove(0);
    Ok(geo::Polygon::new(exterior, rings))
}

pub fn multi_point_to_geo(multi_point: &MultiPoint) -> EwkbResult<geo::MultiPoint> {
    let points = multi_point
        .points
        .iter()
        .map(|point| expect_point(point).map(point_to_geo))
        .collect::<EwkbResult<Vec<_>>>()?;
    Ok(geo::MultiPoint::new(points))
}

pub fn multi_line_string_to_geo(
    multi_line_string: &MultiLineString,
) -> EwkbResult<geo::MultiLineString> {
    let lines = multi_line_string
        .lines
        .iter()
        .map(|line| expect_line_string(line).and_then(line_string_to_geo))
        .collect::<EwkbResult<Vec<_>>>()?;
    Ok(geo::MultiLineString::new(lines))
}

pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> EwkbResult<geo::MultiPolygon> {
    let polygons = multi_polygon
        .polygons
        .iter()
        .map(|polygon| expect_polygon(polygon).and_then(polygon_to_geo))
        .collect::<EwkbResult<Vec<_>>>()?;
    Ok(geo::MultiPolygon::new(polygons))
}

pub fn geometry_collection_to_geo(
    geometry_collection: &GeometryCollection,
) -> EwkbResult<geo::GeometryCollection> {
    let geometries = geometry_collection
        .geometries
        .iter()
        .map(geometry_to_geo)
        .collect::<EwkbResult<Vec<_>>>()?;
    Ok(geo::GeometryCollection::new_from(geometries))
}

/// Convert a [Geometry] to a [`geo::Geometry`].
///
/// Only x and y survive; Z, M and SRID are dropped. A child of the wrong kind fails with
/// [EwkbError::TypeMismatch].
pub fn geometry_to_geo(geometry: &Geometry) -> EwkbResult<geo::Geometry> {
    let geom = match geometry {
        Geometry::Point(geom) => geo::Geometry::Point(point_to_geo(geom)),
        Geometry::LineString(geom) => geo::Geometry::LineString(line_string_to_geo(geom)?),
        Geometry::Polygon(geom) => geo::Geometry::Polygon(polygon_to_geo(geom)?),
        Geometry::MultiPoint(geom) => geo::Geometry::MultiPoint(multi_point_to_geo(geom)?),
        Geometry::MultiLineString(geom) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(geom)?)
        }
        Geometry::MultiPolygon(geom) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(geom)?),
        Geometry::GeometryCollection(geom) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(geom)?)
        }
    };
    Ok(geom)
}

impl TryFrom<&Geometry> for geo::Geometry {
    type Error = EwkbError;

    fn try_from(value: &Geometry) -> EwkbResult<Self> {
        geometry_to_geo(value)
    }
}
