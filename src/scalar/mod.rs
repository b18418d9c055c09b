//! Owned geometry values: one struct per kind plus the [Geometry] sum type over all of them.
//!
//! Composites own their children outright. Points inside a [LineString] and rings inside a
//! [Polygon] are flat children that share the parent's header on the wire, while members of
//! the multi geometries and [GeometryCollection] are encoded as complete geometries.

pub use geometry::Geometry;
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;
