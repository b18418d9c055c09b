//! A reader and writer for the hex-encoded Extended Well-Known Binary (EWKB) geometries
//! exchanged by PostGIS.
//!
//! Hex text is decoded to bytes and parsed into an owned [Geometry] tree; the reverse path
//! encodes a [Geometry] as little-endian EWKB and renders it as lowercase hex.
//!
//! ```
//! use postgis_ewkb::{decode, encode, Geometry, LineString, Point};
//!
//! let line = Geometry::LineString(
//!     LineString::new(vec![Point::new(1., 2.), Point::new(4., 5.)]).with_srid(4326),
//! );
//! let text = encode(&line).unwrap();
//! assert_eq!(decode(Some(&text)).unwrap().unwrap().srid(), Some(4326));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use datatypes::{Dimension, GeometryType};
pub use error::{EwkbError, EwkbResult};
pub use io::ewkb::{decode, encode, read_ewkb, write_ewkb};
pub use scalar::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

pub mod datatypes;
pub mod error;
pub mod io;
pub mod scalar;
#[cfg(test)]
pub(crate) mod test;
