// src/hyperbolic.rs
// Hyperbolic functions, the same layout as src/trig.rs.

use crate::algebra::Algebra;
use crate::dispatch::{complex, polar, quaternion, Kernel};
use num_traits::Float;

pub fn cosh<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().cosh()),
        Kernel::Complex => complex::cosh(x),
        Kernel::Quaternion => quaternion::cosh(x),
        Kernel::Generic => polar::cosh(x),
    }
}

pub fn sinh<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().sinh()),
        Kernel::Complex => complex::sinh(x),
        Kernel::Quaternion => quaternion::sinh(x),
        Kernel::Generic => polar::sinh(x),
    }
}

/// `(sinh(x), cosh(x))`.
pub fn sinhcosh<A: Algebra>(x: A) -> (A, A) {
    (sinh(x), cosh(x))
}

pub fn tanh<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().tanh()),
        Kernel::Complex => complex::tanh(x),
        Kernel::Quaternion | Kernel::Generic => polar::tanh(x),
    }
}

pub fn coth<A: Algebra>(x: A) -> A {
    tanh(x).rec()
}

pub fn sech<A: Algebra>(x: A) -> A {
    cosh(x).rec()
}

pub fn csch<A: Algebra>(x: A) -> A {
    sinh(x).rec()
}
