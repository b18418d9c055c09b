use crate::scalar::MultiLineString;
use crate::test::linestring::{ls0, ls1};

pub(crate) fn ml0() -> MultiLineString {
    MultiLineString::new(vec![ls0(), ls1()])
}
