use crate::error::EwkbResult;
use crate::io::ewkb::reader::EwkbReader;
use crate::io::ewkb::writer::{geometry_ewkb_size, EwkbWriter};
use crate::scalar::Geometry;

/// Parse a single EWKB geometry from the start of a buffer.
///
/// Any bytes after the geometry are ignored.
pub fn read_ewkb(buf: &[u8]) -> EwkbResult<Geometry> {
    EwkbReader::new(buf).read_geometry()
}

/// Encode a geometry as little-endian EWKB.
pub fn write_ewkb(geom: &Geometry) -> EwkbResult<Vec<u8>> {
    let mut writer = EwkbWriter::new(Vec::with_capacity(geometry_ewkb_size(geom)));
    writer.write_geometry(geom)?;
    Ok(writer.into_inner())
}

/// Decode hex-encoded EWKB text, the form in which PostGIS exchanges geometry values.
///
/// A missing or empty string is a null geometry and yields `Ok(None)`. Upper- and
/// lower-case hex digits are both accepted.
///
/// ```
/// use postgis_ewkb::{decode, Point, Geometry};
///
/// let geom = decode(Some("0101000000000000000000f03f0000000000000040")).unwrap();
/// assert_eq!(geom, Some(Geometry::Point(Point::new(1., 2.))));
/// assert_eq!(decode(Some("")).unwrap(), None);
/// ```
pub fn decode<S: AsRef<str>>(text: Option<S>) -> EwkbResult<Option<Geometry>> {
    let Some(text) = text else {
        return Ok(None);
    };
    let text = text.as_ref();
    if text.is_empty() {
        return Ok(None);
    }
    let buf = hex::decode(text)?;
    Ok(Some(read_ewkb(&buf)?))
}

/// Encode a geometry as lowercase hex EWKB text.
pub fn encode(geom: &Geometry) -> EwkbResult<String> {
    Ok(hex::encode(write_ewkb(geom)?))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::EwkbError;
    use crate::scalar::{LineString, MultiPoint, Point};
    use crate::test::{
        geometrycollection, linestring, multilinestring, multipoint, multipolygon, point,
        polygon,
    };

    const POINT_HEX: &str = "0101000000000000000000f03f0000000000000040";

    fn round_trip(geom: Geometry) {
        let text = encode(&geom).unwrap();
        assert_eq!(decode(Some(&text)).unwrap(), Some(geom));
    }

    #[test]
    fn point_hex() {
        let geom = decode(Some(POINT_HEX)).unwrap().unwrap();
        assert_eq!(geom, Geometry::Point(Point::new(1., 2.)));
        assert_eq!(encode(&geom).unwrap(), POINT_HEX);
    }

    #[test]
    fn uppercase_hex_is_accepted() {
        let geom = decode(Some(POINT_HEX.to_uppercase())).unwrap();
        assert_eq!(geom, Some(Geometry::Point(Point::new(1., 2.))));
    }

    #[test]
    fn null_input() {
        assert_eq!(decode(None::<&str>).unwrap(), None);
        assert_eq!(decode(Some("")).unwrap(), None);
    }

    #[test]
    fn malformed_text() {
        assert!(matches!(
            decode(Some("010")),
            Err(EwkbError::MalformedText(hex::FromHexError::OddLength))
        ));
        assert!(matches!(
            decode(Some("0x01")),
            Err(EwkbError::MalformedText(_))
        ));
    }

    #[test]
    fn srid_hex() {
        let geom = Geometry::Point(point::p1().with_srid(4326));
        assert_eq!(
            encode(&geom).unwrap(),
            "0101000020e6100000000000000000f03f0000000000000040"
        );
    }

    #[test]
    fn round_trips() {
        round_trip(Geometry::Point(point::p0()));
        round_trip(Geometry::Point(point::p_z().with_srid(2193)));
        round_trip(Geometry::Point(point::p_zm()));
        round_trip(Geometry::Point(Point::new_m(1., 2., 9.)));
        round_trip(Geometry::LineString(linestring::ls1().with_srid(4326)));
        round_trip(Geometry::LineString(linestring::ls_z()));
        round_trip(Geometry::Polygon(polygon::p0().with_srid(3857)));
        round_trip(Geometry::MultiPoint(multipoint::mp0()));
        round_trip(Geometry::MultiLineString(multilinestring::ml0().with_srid(4326)));
        round_trip(Geometry::MultiPolygon(multipolygon::mp0()));
        round_trip(Geometry::GeometryCollection(
            geometrycollection::gc0().with_srid(4326),
        ));
    }

    #[test]
    fn round_trip_empty() {
        round_trip(Geometry::LineString(LineString::new(vec![])));
        round_trip(Geometry::MultiPoint(MultiPoint::new(vec![]).with_srid(0)));
    }

    #[test]
    fn round_trip_tagged_child_srid() {
        let multi_point = MultiPoint::new(vec![point::p0().with_srid(4326), point::p1()]);
        round_trip(Geometry::MultiPoint(multi_point));
    }

    #[test]
    fn flat_child_srid_is_lost() {
        let line = LineString::new(vec![point::p0().with_srid(4326), point::p2()]);
        let text = encode(&Geometry::LineString(line)).unwrap();
        let decoded = decode(Some(text)).unwrap().unwrap();
        let line = decoded.into_line_string().unwrap();
        assert_eq!(line.points[0].srid(), None);
        assert_eq!(line.points[1], Geometry::Point(point::p2()));
    }

    #[test]
    fn mixed_dimension_siblings_decode_with_the_first() {
        // The header says XY, so the trailing z of the second point is never read
        let line = LineString::new(vec![point::p0(), point::p_z()]);
        let buf = write_ewkb(&Geometry::LineString(line)).unwrap();
        assert_eq!(buf.len(), 5 + 4 + 2 * 8 + 3 * 8);

        let decoded = read_ewkb(&buf).unwrap();
        assert_eq!(
            decoded,
            Geometry::LineString(LineString::new(vec![point::p0(), Point::new(4., 5.)]))
        );
        assert!(!decoded.has_z());
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let text = format!("{POINT_HEX}ffff");
        assert_eq!(
            decode(Some(text)).unwrap(),
            Some(Geometry::Point(Point::new(1., 2.)))
        );
    }
}
