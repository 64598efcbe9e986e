// src/dispatch/mod.rs
// Formula selection by dimension. Every elementary function matches on
// `A::KERNEL`, an associated constant, so the branch is resolved when the
// function is monomorphised and costs nothing at run time.
//
//   DIM 1  -> the scalar library (f32/f64 methods)
//   DIM 2  -> closed-form complex identities          (complex.rs)
//   DIM 4  -> closed-form quaternion identities       (quaternion.rs)
//   others -> real/vector polar decomposition         (polar.rs)
//
// The polar kernel is valid at every dimension above one, which is what the
// kernel-agreement tests lean on.

pub mod complex;
pub mod polar;
pub mod quaternion;

use crate::algebra::Algebra;
use num_traits::Zero;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kernel {
    Real,
    Complex,
    Quaternion,
    Generic,
}

impl Kernel {
    pub const fn for_dimension(dim: usize) -> Self {
        match dim {
            1 => Kernel::Real,
            2 => Kernel::Complex,
            4 => Kernel::Quaternion,
            _ => Kernel::Generic,
        }
    }
}

// ----------------------------------------------------------------------------
// Moving between an algebra element and the fixed-size views the closed
// forms work on. Components beyond the view are ignored on the way in and
// zero on the way out.
// ----------------------------------------------------------------------------
#[inline(always)]
pub(crate) fn complex_parts<A: Algebra>(z: &A) -> (A::Real, A::Real) {
    (z.real(), z.get(1).copied().unwrap_or_else(A::Real::zero))
}

#[inline(always)]
pub(crate) fn from_complex_parts<A: Algebra>(re: A::Real, im: A::Real) -> A {
    A::from_fn(|i| match i {
        0 => re,
        1 => im,
        _ => A::Real::zero(),
    })
}

#[inline(always)]
pub(crate) fn quaternion_parts<A: Algebra>(q: &A) -> [A::Real; 4] {
    std::array::from_fn(|i| q.get(i).copied().unwrap_or_else(A::Real::zero))
}

#[inline(always)]
pub(crate) fn from_quaternion_parts<A: Algebra>(c: [A::Real; 4]) -> A {
    A::from_fn(|i| c.get(i).copied().unwrap_or_else(A::Real::zero))
}
