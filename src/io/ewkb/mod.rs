//! Reading and writing PostGIS-flavored Extended Well-Known Binary (EWKB).
//!
//! EWKB extends WKB with three flags in the high bits of the type word: Z (bit 31), M (bit 30)
//! and an SRID following the type word (bit 29). Geometries are always written little-endian;
//! either byte order is accepted on read.

mod api;
pub(crate) mod common;
mod reader;
mod writer;

pub use api::{decode, encode, read_ewkb, write_ewkb};
pub use common::{
    Endianness, TypeWord, MAX_NESTING_DEPTH, M_FLAG, SRID_FLAG, TYPE_MASK, Z_FLAG,
};
pub use reader::EwkbReader;
pub use writer::{geometry_ewkb_size, EwkbWriter};
