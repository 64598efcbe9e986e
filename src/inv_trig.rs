// src/inv_trig.rs
// Inverse circular functions. Above DIM 2 they are the hyperbolic inverses
// rotated by the unit u = pure(x) / |pure(x)|, the element that plays the
// role of i in the plane of x:
//
//   asin(x) = -u asinh(u x),   atan(x) = -u atanh(u x)
//
// u commutes with x, so the rotation is the same on either side.

use crate::algebra::Algebra;
use crate::dispatch::{complex, polar, Kernel};
use crate::inv_hyperbolic::{asinh, atanh};
use num_traits::{Float, FloatConst, Zero};

/// `pure(x) / |pure(x)|`, or `None` when `x` is real.
fn plane_unit<A: Algebra>(x: A) -> Option<A> {
    let (_, p, rho) = polar::split(x);
    if rho.is_zero() {
        return None;
    }
    Some(p.map(&|c| c / rho))
}

pub fn asin<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().asin()),
        Kernel::Complex => complex::asin(x),
        Kernel::Quaternion | Kernel::Generic => match plane_unit(x) {
            Some(u) => -(u * asinh(u * x)),
            None => complex::asin(x),
        },
    }
}

pub fn acos<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().acos()),
        Kernel::Complex => complex::acos(x),
        Kernel::Quaternion | Kernel::Generic => match plane_unit(x) {
            Some(_) => A::from_real(A::Real::FRAC_PI_2()) - asin(x),
            None => complex::acos(x),
        },
    }
}

pub fn atan<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().atan()),
        Kernel::Complex => complex::atan(x),
        Kernel::Quaternion | Kernel::Generic => match plane_unit(x) {
            Some(u) => -(u * atanh(u * x)),
            None => A::from_real(x.real().atan()),
        },
    }
}

pub fn acot<A: Algebra>(x: A) -> A {
    atan(x.rec())
}

pub fn asec<A: Algebra>(x: A) -> A {
    acos(x.rec())
}

pub fn acsc<A: Algebra>(x: A) -> A {
    asin(x.rec())
}
