use crate::scalar::MultiPolygon;
use crate::test::polygon::{p0, p1};

pub(crate) fn mp0() -> MultiPolygon {
    MultiPolygon::new(vec![p0(), p1()])
}
