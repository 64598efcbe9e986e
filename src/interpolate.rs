// src/interpolate.rs
// Interpolation on the unit sphere. The great-circle form only uses the
// vector-space structure, so it holds at every dimension. Up to the
// octonions it coincides with the algebraic z0 (conj(z0) z1)^t; past them
// that product no longer lands on z1 at t = 1.

use crate::algebra::Algebra;
use crate::predicates::is_unitary;
use crate::scalar::Scalar;
use num_traits::{Float, One, Zero};

/// Euclidean inner product of the component vectors.
pub fn dot<A: Algebra>(x: A, y: A) -> A::Real {
    x.zip_with(y, &|a, b| a * b).fold(A::Real::zero(), &|acc, c| acc + c)
}

/// Spherical linear interpolation from `z0` at `t = 0` to `z1` at `t = 1`
/// along the shorter great circle. `t` outside `[0, 1]` extrapolates.
///
/// Both ends are expected to be unitary; other inputs are interpolated as
/// given.
pub fn slerp<A: Algebra>(z0: A, z1: A, t: A::Real) -> A {
    if !(is_unitary(z0) && is_unitary(z1)) {
        tracing::debug!(dim = A::DIM, "slerp between non-unitary elements");
    }
    let mut cos = dot(z0, z1);
    let z1 = if cos < A::Real::zero() {
        cos = -cos;
        -z1
    } else {
        z1
    };
    let theta = cos.min(A::Real::one()).acos();
    // sin(s theta) / sin(theta) = s sinc(s theta) / sinc(theta); theta <= pi/2
    let s = theta.sinc();
    let u = A::Real::one() - t;
    z0.scale(u * (u * theta).sinc() / s) + z1.scale(t * (t * theta).sinc() / s)
}
