// src/cayley.rs
// The Cayley-Dickson doubling step: an element of dimension 2N is a pair of
// elements of dimension N. Nesting the pair over f32/f64 gives the complex
// numbers, quaternions, octonions, sedenions and every larger power of two.
// Complex and quaternion multiplication is associative, quaternions are not
// commutative, octonions are not associative, sedenions are not even
// alternative.

use crate::algebra::Algebra;
use crate::error::{DimensionError, Result};
use num_traits::{Float, One, Zero};
use std::fmt;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CayleyDickson<A> {
    pub low: A,  // Real-like half: components 0 .. DIM/2
    pub high: A, // Imaginary-like half: components DIM/2 .. DIM
}

pub type Complex<T> = CayleyDickson<T>;
pub type Quaternion<T> = CayleyDickson<Complex<T>>;
pub type Octonion<T> = CayleyDickson<Quaternion<T>>;
pub type Sedenion<T> = CayleyDickson<Octonion<T>>;
pub type Pathion<T> = CayleyDickson<Sedenion<T>>;

impl<A: Algebra> CayleyDickson<A> {
    /// Pairs two half-dimension elements.
    pub const fn new(low: A, high: A) -> Self {
        CayleyDickson { low, high }
    }

    /// Embeds `x` as the real-like half, padding the imaginary-like half with zero.
    /// Injective, norm preserving and multiplicative.
    pub fn embed(x: A) -> Self {
        CayleyDickson::new(x, A::zero())
    }

    /// Returns the real-like half.
    ///
    /// This truncates: whatever the imaginary-like half held is discarded.
    /// Use [`CayleyDickson::try_project`] when the round trip must be lossless.
    pub fn project(self) -> A {
        self.low
    }

    /// Returns the real-like half only when the imaginary-like half is exactly zero.
    pub fn try_project(self) -> Option<A> {
        if self.high.is_zero() {
            Some(self.low)
        } else {
            tracing::trace!(dim = Self::DIM, "projection would discard a non-zero half");
            None
        }
    }

    /// Builds an element from exactly `DIM` components in canonical order.
    pub fn from_slice(components: &[A::Real]) -> Result<Self> {
        if components.len() != Self::DIM {
            let err = DimensionError::for_count(Self::DIM, components.len());
            tracing::debug!(%err, "rejected component slice");
            return Err(err);
        }
        Ok(Self::from_fn(|i| components[i]))
    }

    /// Builds an element from its leading components; missing trailing components are zero.
    pub fn from_leading(components: &[A::Real]) -> Result<Self> {
        if components.len() > Self::DIM {
            let err = DimensionError::Mismatch {
                expected: Self::DIM,
                found: components.len(),
            };
            tracing::debug!(%err, "too many leading components");
            return Err(err);
        }
        Ok(Self::from_fn(|i| {
            components.get(i).copied().unwrap_or_else(A::Real::zero)
        }))
    }

    /// Iterates the components in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = A::Real> + '_ {
        (0..Self::DIM).filter_map(move |i| self.get(i).copied())
    }

    /// Component 1 (the `i` coefficient).
    pub fn ipart(&self) -> A::Real {
        self[1]
    }

    /// Component 2 (the `j` coefficient), zero below the quaternions.
    pub fn jpart(&self) -> A::Real {
        self.get(2).copied().unwrap_or_else(A::Real::zero)
    }

    /// Component 3 (the `k` coefficient), zero below the quaternions.
    pub fn kpart(&self) -> A::Real {
        self.get(3).copied().unwrap_or_else(A::Real::zero)
    }
}

// ----------------------------------------------------------------------------
// Recursive case of the algebra interface
// ----------------------------------------------------------------------------
impl<A: Algebra> Algebra for CayleyDickson<A> {
    type Real = A::Real;
    const DIM: usize = 2 * A::DIM;

    #[inline(always)]
    fn from_real(r: A::Real) -> Self {
        CayleyDickson::new(A::from_real(r), A::zero())
    }

    #[inline(always)]
    fn real(&self) -> A::Real {
        self.low.real()
    }

    #[inline(always)]
    fn with_real(self, r: A::Real) -> Self {
        CayleyDickson::new(self.low.with_real(r), self.high)
    }

    // (a, b)* = (a*, -b)
    #[inline(always)]
    fn conj(self) -> Self {
        CayleyDickson::new(self.low.conj(), -self.high)
    }

    #[inline(always)]
    fn scale(self, k: A::Real) -> Self {
        CayleyDickson::new(self.low.scale(k), self.high.scale(k))
    }

    fn rec(self) -> Self {
        if !self.any(&|x| x.is_nan()) && self.any(&|x| x.is_infinite()) {
            return Self::zero();
        }
        // scale by the largest component so norm_sqr cannot overflow
        let m = self.fold(A::Real::zero(), &|acc: A::Real, x: A::Real| acc.max(x.abs()));
        if m.is_zero() {
            tracing::trace!(dim = Self::DIM, "inverse of a zero-norm element");
        }
        let y = self.map(&|x| x / m);
        let n = y.norm_sqr();
        y.conj().map(&|x| x / n / m)
    }

    fn get(&self, i: usize) -> Option<&A::Real> {
        if i < A::DIM {
            self.low.get(i)
        } else {
            self.high.get(i - A::DIM)
        }
    }

    fn get_mut(&mut self, i: usize) -> Option<&mut A::Real> {
        if i < A::DIM {
            self.low.get_mut(i)
        } else {
            self.high.get_mut(i - A::DIM)
        }
    }

    #[inline(always)]
    fn map<F: Fn(A::Real) -> A::Real>(self, f: &F) -> Self {
        CayleyDickson::new(self.low.map(f), self.high.map(f))
    }

    #[inline(always)]
    fn zip_with<F: Fn(A::Real, A::Real) -> A::Real>(self, other: Self, f: &F) -> Self {
        CayleyDickson::new(
            self.low.zip_with(other.low, f),
            self.high.zip_with(other.high, f),
        )
    }

    #[inline(always)]
    fn fold<B, F: Fn(B, A::Real) -> B>(&self, init: B, f: &F) -> B {
        let acc = self.low.fold(init, f);
        self.high.fold(acc, f)
    }

    fn from_fn_at<F: FnMut(usize) -> A::Real>(offset: usize, f: &mut F) -> Self {
        let low = A::from_fn_at(offset, f);
        let high = A::from_fn_at(offset + A::DIM, f);
        CayleyDickson::new(low, high)
    }
}

impl<A: Algebra> Zero for CayleyDickson<A> {
    fn zero() -> Self {
        CayleyDickson::new(A::zero(), A::zero())
    }

    fn is_zero(&self) -> bool {
        self.low.is_zero() && self.high.is_zero()
    }
}

impl<A: Algebra> One for CayleyDickson<A> {
    fn one() -> Self {
        CayleyDickson::new(A::one(), A::zero())
    }
}

// ----------------------------------------------------------------------------
// Arithmetic Implementation (Cayley-Dickson doubling)
// ----------------------------------------------------------------------------
impl<A: Algebra> Add for CayleyDickson<A> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        CayleyDickson::new(self.low + other.low, self.high + other.high)
    }
}

impl<A: Algebra> Sub for CayleyDickson<A> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        CayleyDickson::new(self.low - other.low, self.high - other.high)
    }
}

impl<A: Algebra> Neg for CayleyDickson<A> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        CayleyDickson::new(-self.low, -self.high)
    }
}

// (a, b)(c, d) = (ac - d*b, da + bc*)
// The factor order is load-bearing from the quaternions on.
impl<A: Algebra> Mul for CayleyDickson<A> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        let (a, b) = (self.low, self.high);
        let (c, d) = (other.low, other.high);
        CayleyDickson::new(a * c - d.conj() * b, d * a + b * c.conj())
    }
}

/// Right division: `x / y == x * rec(y)`.
impl<A: Algebra> Div for CayleyDickson<A> {
    type Output = Self;
    #[inline(always)]
    fn div(self, other: Self) -> Self {
        self * other.rec()
    }
}

impl<A: Algebra> Sum for CayleyDickson<A> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

// Mixed element/real arithmetic. The real operand is promoted per the
// scalar embedding, so only component 0 is touched by + and -.
macro_rules! scalar_ops {
    ($($t:ty),*) => {$(
        impl<A: Algebra<Real = $t>> From<$t> for CayleyDickson<A> {
            fn from(r: $t) -> Self {
                <Self as Algebra>::from_real(r)
            }
        }

        impl<A: Algebra<Real = $t>> Add<$t> for CayleyDickson<A> {
            type Output = Self;
            fn add(self, r: $t) -> Self {
                self.with_real(self.real() + r)
            }
        }

        impl<A: Algebra<Real = $t>> Sub<$t> for CayleyDickson<A> {
            type Output = Self;
            fn sub(self, r: $t) -> Self {
                self.with_real(self.real() - r)
            }
        }

        impl<A: Algebra<Real = $t>> Mul<$t> for CayleyDickson<A> {
            type Output = Self;
            fn mul(self, r: $t) -> Self {
                self.scale(r)
            }
        }

        impl<A: Algebra<Real = $t>> Div<$t> for CayleyDickson<A> {
            type Output = Self;
            fn div(self, r: $t) -> Self {
                self.map(&|x| x / r)
            }
        }

        impl<A: Algebra<Real = $t>> Add<CayleyDickson<A>> for $t {
            type Output = CayleyDickson<A>;
            fn add(self, z: CayleyDickson<A>) -> CayleyDickson<A> {
                z + self
            }
        }

        impl<A: Algebra<Real = $t>> Sub<CayleyDickson<A>> for $t {
            type Output = CayleyDickson<A>;
            fn sub(self, z: CayleyDickson<A>) -> CayleyDickson<A> {
                -z + self
            }
        }

        impl<A: Algebra<Real = $t>> Mul<CayleyDickson<A>> for $t {
            type Output = CayleyDickson<A>;
            fn mul(self, z: CayleyDickson<A>) -> CayleyDickson<A> {
                z.scale(self)
            }
        }

        impl<A: Algebra<Real = $t>> Div<CayleyDickson<A>> for $t {
            type Output = CayleyDickson<A>;
            fn div(self, z: CayleyDickson<A>) -> CayleyDickson<A> {
                z.rec().scale(self)
            }
        }
    )*};
}

scalar_ops!(f32, f64);

impl<A: Algebra, R> AddAssign<R> for CayleyDickson<A>
where
    CayleyDickson<A>: Add<R, Output = CayleyDickson<A>>,
{
    fn add_assign(&mut self, rhs: R) {
        *self = *self + rhs;
    }
}

impl<A: Algebra, R> SubAssign<R> for CayleyDickson<A>
where
    CayleyDickson<A>: Sub<R, Output = CayleyDickson<A>>,
{
    fn sub_assign(&mut self, rhs: R) {
        *self = *self - rhs;
    }
}

impl<A: Algebra, R> MulAssign<R> for CayleyDickson<A>
where
    CayleyDickson<A>: Mul<R, Output = CayleyDickson<A>>,
{
    fn mul_assign(&mut self, rhs: R) {
        *self = *self * rhs;
    }
}

impl<A: Algebra, R> DivAssign<R> for CayleyDickson<A>
where
    CayleyDickson<A>: Div<R, Output = CayleyDickson<A>>,
{
    fn div_assign(&mut self, rhs: R) {
        *self = *self / rhs;
    }
}

// ----------------------------------------------------------------------------
// Component access
// ----------------------------------------------------------------------------
impl<A: Algebra> Index<usize> for CayleyDickson<A> {
    type Output = A::Real;

    fn index(&self, i: usize) -> &A::Real {
        match self.get(i) {
            Some(x) => x,
            None => panic!("component {} out of range for dimension {}", i, Self::DIM),
        }
    }
}

impl<A: Algebra> IndexMut<usize> for CayleyDickson<A> {
    fn index_mut(&mut self, i: usize) -> &mut A::Real {
        match self.get_mut(i) {
            Some(x) => x,
            None => panic!("component {} out of range for dimension {}", i, Self::DIM),
        }
    }
}

impl<'a, A: Algebra> TryFrom<&'a [A::Real]> for CayleyDickson<A> {
    type Error = DimensionError;

    fn try_from(components: &'a [A::Real]) -> Result<Self> {
        CayleyDickson::from_slice(components)
    }
}

// a + bi + cj + dk up to the quaternions, a + b·e1 + c·e2 + ... beyond.
impl<A: Algebra> fmt::Display for CayleyDickson<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let named = ["", "i", "j", "k"];
        for (n, c) in self.iter().enumerate() {
            if n == 0 {
                write!(f, "{}", c)?;
                continue;
            }
            let sign = if c.is_sign_negative() { '-' } else { '+' };
            if Self::DIM <= 4 {
                write!(f, " {} {}{}", sign, c.abs(), named[n])?;
            } else {
                write!(f, " {} {}·e{}", sign, c.abs(), n)?;
            }
        }
        Ok(())
    }
}
