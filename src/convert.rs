// src/convert.rs
// Moving values between representations: changing the scalar type,
// promoting into a larger algebra, and going to and from plain arrays and
// tuples. None of this carries algebraic meaning beyond component order.

use crate::algebra::Algebra;
use crate::cayley::{CayleyDickson, Complex, Octonion, Pathion, Quaternion, Sedenion};
use crate::error::{DimensionError, Result};
use crate::scalar::Scalar;
use num_traits::{Float, NumCast, Zero};

/// Re-expresses `x` in the algebra `B`.
///
/// Components are cast to `B::Real` one by one (a component the target type
/// cannot represent becomes NaN). When `B` is larger than `A` the extra
/// components are zero, which is the embedding of `A` into `B`. A smaller
/// target is rejected: use `project` to truncate on purpose.
pub fn convert<A: Algebra, B: Algebra>(x: A) -> Result<B> {
    if B::DIM < A::DIM {
        let err = DimensionError::Mismatch {
            expected: B::DIM,
            found: A::DIM,
        };
        tracing::debug!(%err, "conversion would drop components");
        return Err(err);
    }
    Ok(B::from_fn(|i| match x.get(i) {
        Some(c) => <B::Real as NumCast>::from(*c).unwrap_or_else(<B::Real as Float>::nan),
        None => B::Real::zero(),
    }))
}

impl<A: Algebra> CayleyDickson<A> {
    /// Method form of [`convert`].
    pub fn convert<B: Algebra>(self) -> Result<B> {
        convert(self)
    }

    /// Copies the components into an array of exactly `DIM` entries.
    pub fn to_array<const N: usize>(&self) -> Result<[A::Real; N]> {
        if N != Self::DIM {
            return Err(DimensionError::for_count(Self::DIM, N));
        }
        Ok(std::array::from_fn(|i| self[i]))
    }
}

macro_rules! array_conversions {
    ($($n:literal => $alias:ident),*) => {$(
        impl<T: Scalar> From<[T; $n]> for $alias<T> {
            fn from(c: [T; $n]) -> Self {
                Self::from_fn(|i| c[i])
            }
        }
    )*};
}

array_conversions!(2 => Complex, 4 => Quaternion, 8 => Octonion, 16 => Sedenion, 32 => Pathion);

impl<T: Scalar> From<(T, T)> for Complex<T> {
    fn from((r, i): (T, T)) -> Self {
        CayleyDickson::new(r, i)
    }
}

impl<T: Scalar> From<(T, T, T, T)> for Quaternion<T> {
    fn from((r, i, j, k): (T, T, T, T)) -> Self {
        CayleyDickson::new(Complex::new(r, i), Complex::new(j, k))
    }
}
