//! Readers and writers for geometry encodings, plus interoperability with the `geo` crate.

pub mod ewkb;
#[cfg(feature = "geo")]
pub mod geo;
