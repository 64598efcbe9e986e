// src/scalar.rs
// The real field every Cayley-Dickson level is built over (f32 or f64).
// Besides the num-traits float surface it carries the few real helpers the
// elementary functions need: pi-scaled sine/cosine that are exact at
// integers and half-integers, and the cardinal sines used by the polar forms.

use crate::algebra::Algebra;
use num_traits::{Float, FloatConst};
use std::fmt::Display;

// --- CONFIGURATION ---
// sinc/sinhc switch to their Taylor head when x^2 drops below sqrt(eps);
// the dropped x^4/120 term is then below eps/120.
const TAYLOR_SWITCH_POWER: f64 = 0.5;

/// A real floating point scalar usable as the base of the doubling tower.
/// Every scalar is itself the one-dimensional algebra.
pub trait Scalar: Float + FloatConst + Display + Algebra<Real = Self> {
    /// Converts a small literal constant into `Self`.
    #[inline(always)]
    fn lit(v: f64) -> Self {
        <Self as num_traits::NumCast>::from(v).unwrap_or_else(Self::nan)
    }

    /// `sin(x) / x`, with the removable singularity filled in.
    fn sinc(self) -> Self {
        if self.is_infinite() {
            return Self::zero();
        }
        let x2 = self * self;
        if x2 < Self::epsilon().powf(Self::lit(TAYLOR_SWITCH_POWER)) {
            Self::one() - x2 / Self::lit(6.0)
        } else {
            self.sin() / self
        }
    }

    /// `sinh(x) / x`, with the removable singularity filled in.
    fn sinhc(self) -> Self {
        if self.is_infinite() {
            return Self::infinity();
        }
        let x2 = self * self;
        if x2 < Self::epsilon().powf(Self::lit(TAYLOR_SWITCH_POWER)) {
            Self::one() + x2 / Self::lit(6.0)
        } else {
            self.sinh() / self
        }
    }

    /// `sin(pi * x)`, exactly zero at integers and exactly one in magnitude at half-integers.
    fn sinpi(self) -> Self {
        if !self.is_finite() {
            return Self::nan();
        }
        let one = Self::one();
        let half = Self::lit(0.5);
        // sin(pi x) is odd with period 2
        let mut r = (self % Self::lit(2.0)).abs();
        let mut negative = self < Self::zero();
        if r >= one {
            r = r - one;
            negative = !negative;
        }
        // r in [0, 1): sin(pi r) == sin(pi (1 - r))
        if r > half {
            r = one - r;
        }
        let v = if r == Self::zero() {
            Self::zero()
        } else if r == half {
            one
        } else {
            (Self::PI() * r).sin()
        };
        if negative {
            -v
        } else {
            v
        }
    }

    /// `cos(pi * x)`, exactly zero at half-integers and exactly one in magnitude at integers.
    fn cospi(self) -> Self {
        if !self.is_finite() {
            return Self::nan();
        }
        let one = Self::one();
        let half = Self::lit(0.5);
        let quarter = Self::lit(0.25);
        // cos(pi x) is even with period 2, and cos(pi (2 - r)) == cos(pi r)
        let mut r = (self % Self::lit(2.0)).abs();
        if r > one {
            r = Self::lit(2.0) - r;
        }
        if r == half {
            Self::zero()
        } else if r <= quarter {
            (Self::PI() * r).cos()
        } else if r < Self::lit(0.75) {
            (Self::PI() * (half - r)).sin()
        } else {
            -(Self::PI() * (one - r)).cos()
        }
    }

    /// `(sinpi(x), cospi(x))`.
    #[inline(always)]
    fn sinpicospi(self) -> (Self, Self) {
        (self.sinpi(), self.cospi())
    }
}

impl Scalar for f32 {}
impl Scalar for f64 {}
