// src/inv_hyperbolic.rs
// Inverse hyperbolic functions. DIM 2 uses the closed forms in
// dispatch/complex.rs. Above that they are logarithms of algebraic
// expressions in x, all of which live in the complex plane of x. A real
// argument has no plane of its own and takes the complex result along the
// first imaginary unit, as log does for the negative reals.

use crate::algebra::Algebra;
use crate::dispatch::{complex, Kernel};
use crate::exp_log::{log, sqrt};
use crate::scalar::Scalar;
use num_traits::{Float, FloatConst};

pub fn asinh<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().asinh()),
        Kernel::Complex => complex::asinh(x),
        Kernel::Quaternion | Kernel::Generic => {
            if x.pure().is_zero() {
                return complex::asinh(x);
            }
            // odd; x + sqrt(x^2 + 1) cancels in the left half space
            if x.real().is_sign_negative() {
                -asinh_right(-x)
            } else {
                asinh_right(x)
            }
        }
    }
}

fn asinh_right<A: Algebra>(x: A) -> A {
    if x.norm() > A::Real::max_value().sqrt() {
        // x^2 overflows; asinh(x) = log(2x) to working precision
        let l = log(x);
        return l.with_real(l.real() + A::Real::LN_2());
    }
    log(x + sqrt(x * x + A::one()))
}

pub fn acosh<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().acosh()),
        Kernel::Complex => complex::acosh(x),
        Kernel::Quaternion | Kernel::Generic => {
            if x.pure().is_zero() {
                return complex::acosh(x);
            }
            let one = A::one();
            log(x + sqrt(x + one) * sqrt(x - one))
        }
    }
}

pub fn atanh<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().atanh()),
        Kernel::Complex => complex::atanh(x),
        Kernel::Quaternion | Kernel::Generic => {
            if x.pure().is_zero() {
                return complex::atanh(x);
            }
            let one = A::one();
            (log(one + x) - log(one - x)).scale(A::Real::lit(0.5))
        }
    }
}

pub fn acoth<A: Algebra>(x: A) -> A {
    atanh(x.rec())
}

pub fn asech<A: Algebra>(x: A) -> A {
    acosh(x.rec())
}

pub fn acsch<A: Algebra>(x: A) -> A {
    asinh(x.rec())
}
