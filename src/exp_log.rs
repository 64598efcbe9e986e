// src/exp_log.rs
// Exponentials, logarithms and powers. Each entry point matches on the
// kernel of its argument's algebra; see src/dispatch/mod.rs.

use crate::algebra::Algebra;
use crate::dispatch::{complex, polar, quaternion, Kernel};
use crate::scalar::Scalar;
use num_traits::{Float, FloatConst, Zero};

pub fn exp<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().exp()),
        Kernel::Complex => complex::exp(x),
        Kernel::Quaternion => quaternion::exp(x),
        Kernel::Generic => polar::exp(x),
    }
}

/// `exp(x) - 1`, accurate for small `x`.
pub fn expm1<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().exp_m1()),
        Kernel::Complex => complex::expm1(x),
        Kernel::Quaternion | Kernel::Generic => {
            let (r, p, rho) = polar::split(x);
            if rho.is_zero() {
                return A::from_real(r.exp_m1());
            }
            // e^r cos(rho) - 1 == expm1(r) cos(rho) + (cos(rho) - 1)
            let half = (rho / A::Real::lit(2.0)).sin();
            let cosm1 = -A::Real::lit(2.0) * half * half;
            let re = r.exp_m1() * rho.cos() + cosm1;
            p.scale(r.exp() * rho.sinc()).with_real(re)
        }
    }
}

pub fn exp2<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().exp2()),
        _ => exp(x.scale(A::Real::LN_2())),
    }
}

pub fn exp10<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(A::Real::lit(10.0).powf(x.real())),
        _ => exp(x.scale(A::Real::LN_10())),
    }
}

/// Principal logarithm. Real arguments below zero give NaN at DIM 1; above
/// DIM 1 they give `ln|x| + pi e1`.
pub fn log<A: Algebra>(x: A) -> A {
    if x.is_zero() {
        tracing::trace!(dim = A::DIM, "logarithm of zero");
    }
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().ln()),
        Kernel::Complex => complex::log(x),
        Kernel::Quaternion => quaternion::log(x),
        Kernel::Generic => polar::log(x),
    }
}

pub fn log2<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().log2()),
        _ => log(x).scale(A::Real::LOG2_E()),
    }
}

pub fn log10<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().log10()),
        _ => log(x).scale(A::Real::LOG10_E()),
    }
}

/// `exp(y * log(x))`. The product is taken in that order, which matters
/// once the algebra stops commuting.
pub fn pow<A: Algebra>(x: A, y: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().powf(y.real())),
        _ => exp(y * log(x)),
    }
}

/// `x` raised to a real power. `powf(x, 0) == 1` for every `x`.
pub fn powf<A: Algebra>(x: A, e: A::Real) -> A {
    if e.is_zero() {
        return A::one();
    }
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().powf(e)),
        _ => exp(log(x).scale(e)),
    }
}

/// `x` raised to an integer power by repeated squaring. Powers of a single
/// element associate in every Cayley-Dickson algebra, so the grouping used
/// here does not change the result.
pub fn powi<A: Algebra>(x: A, n: i32) -> A {
    let mut base = if n < 0 { x.rec() } else { x };
    let mut k = n.unsigned_abs();
    let mut acc = A::one();
    while k > 0 {
        if k & 1 == 1 {
            acc = acc * base;
        }
        base = base * base;
        k >>= 1;
    }
    acc
}

/// Principal square root.
pub fn sqrt<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().sqrt()),
        Kernel::Complex => complex::sqrt(x),
        Kernel::Quaternion | Kernel::Generic => polar::sqrt(x),
    }
}
