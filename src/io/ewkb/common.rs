use num_enum::TryFromPrimitive;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{EwkbError, EwkbResult};

/// Type word bit set when coordinates carry Z.
pub const Z_FLAG: u32 = 0x8000_0000;
/// Type word bit set when coordinates carry M.
pub const M_FLAG: u32 = 0x4000_0000;
/// Type word bit set when an SRID follows the type word.
pub const SRID_FLAG: u32 = 0x2000_0000;
/// Mask selecting the base type code from the type word.
pub const TYPE_MASK: u32 = 0x1fff_ffff;

/// The deepest chain of tagged children the reader and writer will follow.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = EwkbError;

    fn try_from(value: u8) -> EwkbResult<Self> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(EwkbError::MalformedHeader(other)),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

/// The 32-bit word combining the base type code with the Z, M and SRID presence flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeWord {
    pub geometry_type: GeometryType,
    pub dim: Dimension,
    pub has_srid: bool,
}

impl TypeWord {
    /// Split a raw type word into its parts.
    ///
    /// Fails with [EwkbError::UnsupportedType] when the base code is not 1 through 7.
    pub fn decode(word: u32) -> EwkbResult<Self> {
        let base = word & TYPE_MASK;
        let geometry_type = GeometryType::try_from_primitive(base)
            .map_err(|err| EwkbError::UnsupportedType(err.number))?;
        Ok(Self {
            geometry_type,
            dim: Dimension::from_flags(word & Z_FLAG != 0, word & M_FLAG != 0),
            has_srid: word & SRID_FLAG != 0,
        })
    }

    pub fn encode(&self) -> u32 {
        let mut word = self.geometry_type.code();
        if self.dim.has_z() {
            word |= Z_FLAG;
        }
        if self.dim.has_m() {
            word |= M_FLAG;
        }
        if self.has_srid {
            word |= SRID_FLAG;
        }
        word
    }
}

/// How a container lays out its children on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Nesting {
    /// Body fields only. The child shares the parent's byte order and dimension and can
    /// never carry its own SRID.
    Flat(GeometryType),
    /// A complete geometry with its own header. `Some` restricts the child to one kind.
    Tagged(Option<GeometryType>),
}

impl Nesting {
    /// Check that a child of kind `found` may appear under this nesting.
    pub(crate) fn check(&self, found: GeometryType) -> EwkbResult<()> {
        let expected = match self {
            Nesting::Flat(expected) | Nesting::Tagged(Some(expected)) => *expected,
            Nesting::Tagged(None) => return Ok(()),
        };
        if expected == found {
            Ok(())
        } else {
            Err(EwkbError::TypeMismatch { expected, found })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn type_word_flags() {
        let word = TypeWord::decode(0xe000_0001).unwrap();
        assert_eq!(word.geometry_type, GeometryType::Point);
        assert_eq!(word.dim, Dimension::XYZM);
        assert!(word.has_srid);
        assert_eq!(word.encode(), 0xe000_0001);

        let word = TypeWord::decode(0x4000_0002).unwrap();
        assert_eq!(word.dim, Dimension::XYM);
        assert!(!word.has_srid);
    }

    #[test]
    fn unsupported_type_carries_code() {
        assert!(matches!(
            TypeWord::decode(9),
            Err(EwkbError::UnsupportedType(9))
        ));
        // ISO-style Z codes are not understood
        assert!(matches!(
            TypeWord::decode(1001),
            Err(EwkbError::UnsupportedType(1001))
        ));
    }

    #[test]
    fn byte_order() {
        assert_eq!(Endianness::try_from(0).unwrap(), Endianness::BigEndian);
        assert_eq!(Endianness::try_from(1).unwrap(), Endianness::LittleEndian);
        assert!(matches!(
            Endianness::try_from(7),
            Err(EwkbError::MalformedHeader(7))
        ));
        assert_eq!(u8::from(Endianness::LittleEndian), 1);
    }

    #[test]
    fn nesting_check() {
        assert!(Nesting::Tagged(None)
            .check(GeometryType::Polygon)
            .is_ok());
        assert!(Nesting::Flat(GeometryType::Point)
            .check(GeometryType::Point)
            .is_ok());
        assert!(matches!(
            Nesting::Tagged(Some(GeometryType::Point)).check(GeometryType::LineString),
            Err(EwkbError::TypeMismatch {
                expected: GeometryType::Point,
                found: GeometryType::LineString
            })
        ));
    }
}
