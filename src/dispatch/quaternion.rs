// src/dispatch/quaternion.rs
// Closed forms for DIM 4 on flat [w, x, y, z] arrays. A quaternion
// w + v with |v| = rho behaves like the complex number w + i rho along the
// unit direction v / rho, so each function is its complex counterpart with
// the imaginary output spread back over v.
//
// The formulas are the ones in polar.rs. What changes is the data path:
// polar.rs walks the nested halves once for pure() and again for the
// scaled norm, while here the four components are read into one array and
// |v| is a single hypot chain, with no overflow pre-scaling pass.

use super::{from_quaternion_parts, quaternion_parts};
use crate::algebra::Algebra;
use crate::scalar::Scalar;
use num_traits::{Float, FloatConst, Zero};

#[inline(always)]
fn vector_norm<T: Scalar>(q: &[T; 4]) -> T {
    q[1].hypot(q[2]).hypot(q[3])
}

/// `[re, k * x, k * y, k * z]`.
#[inline(always)]
fn spread<T: Scalar>(q: &[T; 4], re: T, k: T) -> [T; 4] {
    [re, k * q[1], k * q[2], k * q[3]]
}

pub fn exp<A: Algebra>(x: A) -> A {
    let q = quaternion_parts(&x);
    let e = q[0].exp();
    let rho = vector_norm(&q);
    if rho.is_zero() {
        return A::from_real(e);
    }
    from_quaternion_parts(spread(&q, e * rho.cos(), e * rho.sinc()))
}

pub fn log<A: Algebra>(x: A) -> A {
    let q = quaternion_parts(&x);
    let rho = vector_norm(&q);
    let ln = q[0].hypot(rho).ln();
    if rho.is_zero() {
        let mut out = [ln, A::Real::zero(), A::Real::zero(), A::Real::zero()];
        if q[0] < A::Real::zero() {
            out[1] = A::Real::PI();
        }
        return from_quaternion_parts(out);
    }
    from_quaternion_parts(spread(&q, ln, rho.atan2(q[0]) / rho))
}

pub fn cos<A: Algebra>(x: A) -> A {
    let q = quaternion_parts(&x);
    let rho = vector_norm(&q);
    let (s, c) = q[0].sin_cos();
    if rho.is_zero() {
        return A::from_real(c);
    }
    from_quaternion_parts(spread(&q, c * rho.cosh(), -s * rho.sinhc()))
}

pub fn sin<A: Algebra>(x: A) -> A {
    let q = quaternion_parts(&x);
    let rho = vector_norm(&q);
    let (s, c) = q[0].sin_cos();
    if rho.is_zero() {
        return A::from_real(s);
    }
    from_quaternion_parts(spread(&q, s * rho.cosh(), c * rho.sinhc()))
}

pub fn cosh<A: Algebra>(x: A) -> A {
    let q = quaternion_parts(&x);
    let rho = vector_norm(&q);
    if rho.is_zero() {
        return A::from_real(q[0].cosh());
    }
    from_quaternion_parts(spread(&q, q[0].cosh() * rho.cos(), q[0].sinh() * rho.sinc()))
}

pub fn sinh<A: Algebra>(x: A) -> A {
    let q = quaternion_parts(&x);
    let rho = vector_norm(&q);
    if rho.is_zero() {
        return A::from_real(q[0].sinh());
    }
    from_quaternion_parts(spread(&q, q[0].sinh() * rho.cos(), q[0].cosh() * rho.sinc()))
}
