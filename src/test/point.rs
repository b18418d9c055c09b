use crate::scalar::Point;

pub(crate) fn p0() -> Point {
    Point::new(0., 1.)
}

pub(crate) fn p1() -> Point {
    Point::new(1., 2.)
}

pub(crate) fn p2() -> Point {
    Point::new(2., 3.)
}

pub(crate) fn p_z() -> Point {
    Point::new_z(4., 5., 6.)
}

pub(crate) fn p_zm() -> Point {
    Point::new_zm(1., 2., 3., 4.)
}
