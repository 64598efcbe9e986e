// src/algebra.rs
// The dimension-generic element interface shared by every level of the
// doubling tower. f32/f64 are the base case (DIM = 1); CayleyDickson<A>
// (src/cayley.rs) is the recursive case (DIM = 2 * A::DIM).

use crate::dispatch::Kernel;
use crate::scalar::Scalar;
use num_traits::{Float, One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An element of a Cayley-Dickson algebra of dimension `DIM` over `Real`.
///
/// Components are addressed in canonical order: index 0 is the grand-real
/// part, indices `0..DIM/2` live in the real-like half and `DIM/2..DIM` in
/// the imaginary-like half, recursively.
pub trait Algebra:
    Copy
    + Debug
    + Default
    + PartialEq
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    type Real: Scalar;

    /// Number of real components; always a power of two.
    const DIM: usize;

    /// Which formula family the elementary functions use at this dimension.
    const KERNEL: Kernel = Kernel::for_dimension(Self::DIM);

    /// Promotes a real to the algebra: all imaginary components zero.
    fn from_real(r: Self::Real) -> Self;

    /// Component 0.
    fn real(&self) -> Self::Real;

    /// Copy of `self` with component 0 replaced.
    fn with_real(self, r: Self::Real) -> Self;

    /// `conj(a, b) = (conj(a), -b)`; reals are self-conjugate.
    fn conj(self) -> Self;

    /// Multiplication by a real, component-wise.
    fn scale(self, k: Self::Real) -> Self;

    /// Multiplicative inverse `conj(x) / |x|^2`.
    fn rec(self) -> Self;

    fn get(&self, i: usize) -> Option<&Self::Real>;

    fn get_mut(&mut self, i: usize) -> Option<&mut Self::Real>;

    /// Applies `f` to every component.
    fn map<F: Fn(Self::Real) -> Self::Real>(self, f: &F) -> Self;

    /// Combines matching components of `self` and `other`.
    fn zip_with<F: Fn(Self::Real, Self::Real) -> Self::Real>(self, other: Self, f: &F) -> Self;

    /// Left fold over the components in canonical order.
    fn fold<B, F: Fn(B, Self::Real) -> B>(&self, init: B, f: &F) -> B;

    /// Builds an element whose component `i` is `f(offset + i)`.
    fn from_fn_at<F: FnMut(usize) -> Self::Real>(offset: usize, f: &mut F) -> Self;

    fn from_fn<F: FnMut(usize) -> Self::Real>(mut f: F) -> Self {
        Self::from_fn_at(0, &mut f)
    }

    /// Sum of squares of all components.
    fn norm_sqr(&self) -> Self::Real {
        self.fold(Self::Real::zero(), &|acc, x| acc + x * x)
    }

    /// Euclidean norm, scaled so that it neither overflows nor underflows
    /// where `norm_sqr` would.
    fn norm(&self) -> Self::Real {
        if self.any(&|x| x.is_infinite()) {
            return Self::Real::infinity();
        }
        if self.any(&|x| x.is_nan()) {
            return Self::Real::nan();
        }
        let m = self.fold(Self::Real::zero(), &|acc, x| acc.max(x.abs()));
        if m.is_zero() {
            return m;
        }
        let s = self.fold(Self::Real::zero(), &|acc, x| {
            let y = x / m;
            acc + y * y
        });
        m * s.sqrt()
    }

    /// `self` with its real component zeroed: the vector part.
    fn pure(self) -> Self {
        self.with_real(Self::Real::zero())
    }

    fn any<F: Fn(Self::Real) -> bool>(&self, f: &F) -> bool {
        self.fold(false, &|acc, x| acc || f(x))
    }

    fn all<F: Fn(Self::Real) -> bool>(&self, f: &F) -> bool {
        self.fold(true, &|acc, x| acc && f(x))
    }

    /// The `DIM` components in canonical order.
    fn components(&self) -> Vec<Self::Real> {
        self.fold(Vec::with_capacity(Self::DIM), &|mut acc, x| {
            acc.push(x);
            acc
        })
    }
}

// ----------------------------------------------------------------------------
// Base case: the reals
// ----------------------------------------------------------------------------
macro_rules! real_algebra {
    ($($t:ty),*) => {$(
        impl Algebra for $t {
            type Real = $t;
            const DIM: usize = 1;

            #[inline(always)]
            fn from_real(r: $t) -> Self { r }

            #[inline(always)]
            fn real(&self) -> $t { *self }

            #[inline(always)]
            fn with_real(self, r: $t) -> Self { r }

            #[inline(always)]
            fn conj(self) -> Self { self }

            #[inline(always)]
            fn scale(self, k: $t) -> Self { self * k }

            #[inline(always)]
            fn rec(self) -> Self { 1.0 / self }

            #[inline(always)]
            fn get(&self, i: usize) -> Option<&$t> {
                (i == 0).then_some(self)
            }

            #[inline(always)]
            fn get_mut(&mut self, i: usize) -> Option<&mut $t> {
                if i == 0 { Some(self) } else { None }
            }

            #[inline(always)]
            fn map<F: Fn($t) -> $t>(self, f: &F) -> Self { f(self) }

            #[inline(always)]
            fn zip_with<F: Fn($t, $t) -> $t>(self, other: Self, f: &F) -> Self {
                f(self, other)
            }

            #[inline(always)]
            fn fold<B, F: Fn(B, $t) -> B>(&self, init: B, f: &F) -> B { f(init, *self) }

            #[inline(always)]
            fn from_fn_at<F: FnMut(usize) -> $t>(offset: usize, f: &mut F) -> Self { f(offset) }
        }
    )*};
}

real_algebra!(f32, f64);
