use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use log::trace;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{EwkbError, EwkbResult};
use crate::io::ewkb::common::{Endianness, Nesting, TypeWord, MAX_NESTING_DEPTH};
use crate::scalar::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

/// The smallest encoded child, used to bound preallocation: the ring count of a flat
/// ring. A flat 2D point body takes 16 bytes and a tagged child at least 5.
const MIN_CHILD_BYTES: usize = 4;

/// Byte order and dimension declared by the nearest header, shared with flat children.
#[derive(Debug, Clone, Copy)]
struct Context {
    byte_order: Endianness,
    dim: Dimension,
}

/// Decodes EWKB geometries from a byte buffer, advancing a cursor as it goes.
///
/// Every tagged geometry reads its own byte order selector, so a buffer may mix big- and
/// little-endian children. Chains of tagged children deeper than [MAX_NESTING_DEPTH] fail
/// with [EwkbError::NestingTooDeep].
pub struct EwkbReader<'a> {
    reader: Cursor<&'a [u8]>,
    depth: usize,
}

impl<'a> EwkbReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            reader: Cursor::new(buf),
            depth: 0,
        }
    }

    /// The number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.reader.position()
    }

    fn remaining(&self) -> usize {
        let len = self.reader.get_ref().len();
        len.saturating_sub(self.reader.position() as usize)
    }

    /// Read one complete geometry: header followed by body.
    pub fn read_geometry(&mut self) -> EwkbResult<Geometry> {
        let byte_order = Endianness::try_from(self.reader.read_u8()?)?;
        let type_word = TypeWord::decode(self.read_u32(byte_order)?)?;
        let srid = if type_word.has_srid {
            Some(self.read_u32(byte_order)?)
        } else {
            None
        };
        trace!(
            "EWKB header: {} {} srid={:?} ({:?})",
            type_word.geometry_type,
            type_word.dim,
            srid,
            byte_order
        );

        let ctx = Context {
            byte_order,
            dim: type_word.dim,
        };
        let mut geometry = self.read_body(type_word.geometry_type, ctx)?;
        geometry.set_srid(srid);
        Ok(geometry)
    }

    /// Read the body of a geometry of the given kind. The result never carries an SRID.
    fn read_body(&mut self, geometry_type: GeometryType, ctx: Context) -> EwkbResult<Geometry> {
        let geometry = match geometry_type {
            GeometryType::Point => Geometry::Point(self.read_point(ctx)?),
            GeometryType::LineString => Geometry::LineString(LineString::from_geometries(
                self.read_children(ctx, Nesting::Flat(GeometryType::Point))?,
            )),
            GeometryType::Polygon => Geometry::Polygon(Polygon::from_geometries(
                self.read_children(ctx, Nesting::Flat(GeometryType::LineString))?,
            )),
            GeometryType::MultiPoint => Geometry::MultiPoint(MultiPoint::from_geometries(
                self.read_children(ctx, Nesting::Tagged(Some(GeometryType::Point)))?,
            )),
            GeometryType::MultiLineString => {
                Geometry::MultiLineString(MultiLineString::from_geometries(
                    self.read_children(ctx, Nesting::Tagged(Some(GeometryType::LineString)))?,
                ))
            }
            GeometryType::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::from_geometries(
                self.read_children(ctx, Nesting::Tagged(Some(GeometryType::Polygon)))?,
            )),
            GeometryType::GeometryCollection => Geometry::GeometryCollection(
                GeometryCollection::new(self.read_children(ctx, Nesting::Tagged(None))?),
            ),
        };
        Ok(geometry)
    }

    /// Coordinates are stored x, y, then z, then m.
    fn read_point(&mut self, ctx: Context) -> EwkbResult<Point> {
        let x = self.read_f64(ctx.byte_order)?;
        let y = self.read_f64(ctx.byte_order)?;
        let z = if ctx.dim.has_z() {
            Some(self.read_f64(ctx.byte_order)?)
        } else {
            None
        };
        let m = if ctx.dim.has_m() {
            Some(self.read_f64(ctx.byte_order)?)
        } else {
            None
        };
        Ok(Point {
            x,
            y,
            z,
            m,
            srid: None,
        })
    }

    /// Read a 32-bit count followed by that many children.
    fn read_children(&mut self, ctx: Context, nesting: Nesting) -> EwkbResult<Vec<Geometry>> {
        let count = usize::try_from(self.read_u32(ctx.byte_order)?)?;
        let mut children = Vec::with_capacity(count.min(self.remaining() / MIN_CHILD_BYTES));
        for _ in 0..count {
            let child = match nesting {
                Nesting::Flat(geometry_type) => self.read_body(geometry_type, ctx)?,
                Nesting::Tagged(_) => {
                    let child = self.read_nested()?;
                    nesting.check(child.geometry_type())?;
                    child
                }
            };
            children.push(child);
        }
        Ok(children)
    }

    /// Read a tagged child one level below the current geometry.
    fn read_nested(&mut self) -> EwkbResult<Geometry> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(EwkbError::NestingTooDeep(MAX_NESTING_DEPTH));
        }
        self.depth += 1;
        let child = self.read_geometry();
        self.depth -= 1;
        child
    }

    fn read_u32(&mut self, byte_order: Endianness) -> EwkbResult<u32> {
        let value = match byte_order {
            Endianness::BigEndian => self.reader.read_u32::<BigEndian>()?,
            Endianness::LittleEndian => self.reader.read_u32::<LittleEndian>()?,
        };
        Ok(value)
    }

    fn read_f64(&mut self, byte_order: Endianness) -> EwkbResult<f64> {
        let value = match byte_order {
            Endianness::BigEndian => self.reader.read_f64::<BigEndian>()?,
            Endianness::LittleEndian => self.reader.read_f64::<LittleEndian>()?,
        };
        Ok(value)
    }
}
