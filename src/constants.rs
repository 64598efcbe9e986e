// src/constants.rs
// Special elements. `cinf` is the algebra-wide infinity: an infinite
// imaginary part beside an undefined real part, the value a pole produces
// once the direction of approach is lost.

use crate::algebra::Algebra;
use crate::cayley::{Complex, Quaternion};
use crate::scalar::Scalar;
use num_traits::{Float, One, Zero};

/// `(NaN, +inf, 0, ...)`. There is no such element among the reals, where
/// this is plain NaN.
pub fn cinf<A: Algebra>() -> A {
    A::from_fn(|i| match i {
        0 => A::Real::nan(),
        1 => A::Real::infinity(),
        _ => A::Real::zero(),
    })
}

/// Every component NaN.
pub fn fnan<A: Algebra>() -> A {
    A::from_fn(|_| A::Real::nan())
}

/// The `n`-th basis element, `None` when the algebra has no component `n`.
pub fn unit<A: Algebra>(n: usize) -> Option<A> {
    if n >= A::DIM {
        return None;
    }
    Some(A::from_fn(|i| {
        if i == n {
            A::Real::one()
        } else {
            A::Real::zero()
        }
    }))
}

pub fn i<T: Scalar>() -> Complex<T> {
    Complex::new(T::zero(), T::one())
}

/// `-i`.
pub fn mi<T: Scalar>() -> Complex<T> {
    Complex::new(T::zero(), -T::one())
}

pub fn j<T: Scalar>() -> Quaternion<T> {
    Quaternion::new(Complex::zero(), Complex::new(T::one(), T::zero()))
}

pub fn k<T: Scalar>() -> Quaternion<T> {
    Quaternion::new(Complex::zero(), Complex::new(T::zero(), T::one()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cayley::{Octonion, Sedenion};
    use crate::predicates::is_cinf;

    #[test]
    fn units_multiply_like_hamilton() {
        let (qi, qj, qk) = (Quaternion::embed(i::<f64>()), j::<f64>(), k::<f64>());
        assert_eq!(qi * qj, qk);
        assert_eq!(qj * qk, qi);
        assert_eq!(qk * qi, qj);
        assert_eq!(qi * qj * qk, -Quaternion::<f64>::one());
        assert_eq!(i::<f64>() * mi::<f64>(), Complex::<f64>::one());
    }

    #[test]
    fn basis_elements() {
        let e5: Octonion<f64> = unit(5).unwrap();
        assert_eq!(e5[5], 1.0);
        assert_eq!(e5.norm(), 1.0);
        assert_eq!(e5 * e5, -Octonion::<f64>::one());
        assert!(unit::<Quaternion<f64>>(4).is_none());
        assert_eq!(unit::<f32>(0), Some(1.0));
    }

    #[test]
    fn special_values() {
        let c: Sedenion<f64> = cinf();
        assert!(c[0].is_nan());
        assert_eq!(c[1], f64::INFINITY);
        assert!(is_cinf(c));
        assert!(cinf::<f64>().is_nan());
        assert!(fnan::<Octonion<f32>>().all(&|x| x.is_nan()));
    }
}
