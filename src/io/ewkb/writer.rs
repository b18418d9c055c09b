use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use log::trace;

use crate::datatypes::GeometryType;
use crate::error::{EwkbError, EwkbResult};
use crate::io::ewkb::common::{Endianness, Nesting, TypeWord, MAX_NESTING_DEPTH};
use crate::scalar::{Geometry, Point};

/// The byte length of a complete EWKB geometry, header included
pub fn geometry_ewkb_size(geom: &Geometry) -> usize {
    let header = 1 + 4;
    let srid = if geom.has_srid() { 4 } else { 0 };
    header + srid + body_size(geom)
}

fn body_size(geom: &Geometry) -> usize {
    match body_of(geom) {
        Body::Coords(point) => point.dim().size() * 8,
        Body::Children(children, nesting) => {
            4 + children
                .iter()
                .map(|child| match nesting {
                    Nesting::Flat(_) => body_size(child),
                    Nesting::Tagged(_) => geometry_ewkb_size(child),
                })
                .sum::<usize>()
        }
    }
}

/// What follows the header of a geometry.
enum Body<'a> {
    Coords(&'a Point),
    Children(&'a [Geometry], Nesting),
}

fn body_of(geom: &Geometry) -> Body<'_> {
    match geom {
        Geometry::Point(g) => Body::Coords(g),
        Geometry::LineString(g) => Body::Children(&g.points, Nesting::Flat(GeometryType::Point)),
        Geometry::Polygon(g) => Body::Children(&g.rings, Nesting::Flat(GeometryType::LineString)),
        Geometry::MultiPoint(g) => {
            Body::Children(&g.points, Nesting::Tagged(Some(GeometryType::Point)))
        }
        Geometry::MultiLineString(g) => {
            Body::Children(&g.lines, Nesting::Tagged(Some(GeometryType::LineString)))
        }
        Geometry::MultiPolygon(g) => {
            Body::Children(&g.polygons, Nesting::Tagged(Some(GeometryType::Polygon)))
        }
        Geometry::GeometryCollection(g) => Body::Children(&g.geometries, Nesting::Tagged(None)),
    }
}

/// Encodes geometries as little-endian EWKB into any [Write] sink.
///
/// Chains of tagged children deeper than [MAX_NESTING_DEPTH] fail with
/// [EwkbError::NestingTooDeep], mirroring what the reader accepts.
pub struct EwkbWriter<W: Write> {
    writer: W,
    depth: usize,
}

impl<W: Write> EwkbWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, depth: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write one complete geometry: header followed by body.
    pub fn write_geometry(&mut self, geom: &Geometry) -> EwkbResult<()> {
        let type_word = TypeWord {
            geometry_type: geom.geometry_type(),
            dim: geom.dim(),
            has_srid: geom.has_srid(),
        };
        trace!(
            "EWKB header: {} {} srid={:?}",
            type_word.geometry_type,
            type_word.dim,
            geom.srid()
        );

        // Byte order
        self.writer.write_u8(Endianness::LittleEndian.into())?;
        self.writer.write_u32::<LittleEndian>(type_word.encode())?;
        if let Some(srid) = geom.srid() {
            self.writer.write_u32::<LittleEndian>(srid)?;
        }

        self.write_body(geom)
    }

    /// Write the body of a geometry, never its header or SRID.
    fn write_body(&mut self, geom: &Geometry) -> EwkbResult<()> {
        match body_of(geom) {
            Body::Coords(point) => self.write_point(point),
            Body::Children(children, nesting) => self.write_children(children, nesting),
        }
    }

    /// A point writes exactly the coordinates it holds, regardless of its siblings.
    fn write_point(&mut self, point: &Point) -> EwkbResult<()> {
        self.writer.write_f64::<LittleEndian>(point.x)?;
        self.writer.write_f64::<LittleEndian>(point.y)?;
        if let Some(z) = point.z {
            self.writer.write_f64::<LittleEndian>(z)?;
        }
        if let Some(m) = point.m {
            self.writer.write_f64::<LittleEndian>(m)?;
        }
        Ok(())
    }

    fn write_children(&mut self, children: &[Geometry], nesting: Nesting) -> EwkbResult<()> {
        self.writer
            .write_u32::<LittleEndian>(u32::try_from(children.len())?)?;
        for child in children {
            nesting.check(child.geometry_type())?;
            match nesting {
                Nesting::Flat(_) => self.write_body(child)?,
                Nesting::Tagged(_) => self.write_nested(child)?,
            }
        }
        Ok(())
    }

    fn write_nested(&mut self, child: &Geometry) -> EwkbResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(EwkbError::NestingTooDeep(MAX_NESTING_DEPTH));
        }
        self.depth += 1;
        let result = self.write_geometry(child);
        self.depth -= 1;
        result
    }
}
