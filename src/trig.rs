// src/trig.rs
// Circular functions. Above DIM 2, tan uses the half-angle quotient of the
// polar kernel; the reciprocal family inverts sin, cos and tan, which all
// live in the complex plane of x, so left and right division agree.

use crate::algebra::Algebra;
use crate::dispatch::{complex, polar, quaternion, Kernel};
use crate::scalar::Scalar;
use num_traits::Float;

pub fn cos<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().cos()),
        Kernel::Complex => complex::cos(x),
        Kernel::Quaternion => quaternion::cos(x),
        Kernel::Generic => polar::cos(x),
    }
}

pub fn sin<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().sin()),
        Kernel::Complex => complex::sin(x),
        Kernel::Quaternion => quaternion::sin(x),
        Kernel::Generic => polar::sin(x),
    }
}

/// `(sin(x), cos(x))`.
pub fn sincos<A: Algebra>(x: A) -> (A, A) {
    match A::KERNEL {
        Kernel::Real => {
            let (s, c) = x.real().sin_cos();
            (A::from_real(s), A::from_real(c))
        }
        _ => (sin(x), cos(x)),
    }
}

pub fn tan<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().tan()),
        Kernel::Complex => complex::tan(x),
        Kernel::Quaternion | Kernel::Generic => polar::tan(x),
    }
}

pub fn cot<A: Algebra>(x: A) -> A {
    tan(x).rec()
}

pub fn sec<A: Algebra>(x: A) -> A {
    cos(x).rec()
}

pub fn csc<A: Algebra>(x: A) -> A {
    sin(x).rec()
}

/// `sin(x) / x`, equal to one at the origin.
pub fn sinc<A: Algebra>(x: A) -> A {
    if let Kernel::Real = A::KERNEL {
        return A::from_real(x.real().sinc());
    }
    let n2 = x.norm_sqr();
    if n2 < A::Real::epsilon().sqrt() {
        // 1 - x^2/6 + x^4/120, exact to rounding below the switch
        let x2 = x * x;
        return A::one() - x2.scale(A::Real::lit(6.0).recip())
            + (x2 * x2).scale(A::Real::lit(120.0).recip());
    }
    sin(x) * x.rec()
}
