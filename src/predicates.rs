// src/predicates.rs
// Classification of elements. All predicates read components only; none of
// them allocate or multiply.

use crate::algebra::Algebra;
use crate::scalar::Scalar;
use num_traits::{Float, One, Zero};

// --- CONFIGURATION ---
// |x|^2 may sit this many epsilons away from one and still count as unitary.
const UNITARY_TOLERANCE_EPS: f64 = 16.0;

/// Every imaginary component is zero.
pub fn is_real<A: Algebra>(x: A) -> bool {
    x.pure().is_zero()
}

/// The real component is zero.
pub fn is_pure<A: Algebra>(x: A) -> bool {
    x.real().is_zero()
}

pub fn is_zero<A: Algebra>(x: A) -> bool {
    x.is_zero()
}

/// Some component is NaN.
pub fn is_nan<A: Algebra>(x: A) -> bool {
    x.any(&|c| c.is_nan())
}

/// Every component is finite.
pub fn is_finite<A: Algebra>(x: A) -> bool {
    x.all(&|c| c.is_finite())
}

/// Some component is infinite.
pub fn is_infinite<A: Algebra>(x: A) -> bool {
    x.any(&|c| c.is_infinite())
}

/// An infinite component together with a NaN component, the shape of
/// [`cinf`](crate::constants::cinf). Never true for reals.
pub fn is_cinf<A: Algebra>(x: A) -> bool {
    A::DIM > 1 && is_infinite(x) && is_nan(x)
}

/// `|x| == 1` up to a few rounding steps.
pub fn is_unitary<A: Algebra>(x: A) -> bool {
    let tol = A::Real::epsilon() * A::Real::lit(UNITARY_TOLERANCE_EPS);
    (x.norm_sqr() - A::Real::one()).abs() <= tol
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cayley::{Complex, Octonion, Quaternion};
    use crate::constants::{cinf, fnan};

    #[test]
    fn real_and_pure() {
        assert!(is_real(Quaternion::<f64>::from_real(3.0f64)));
        assert!(!is_real(Quaternion::from([3.0f64, 0.0, 0.0, 1e-300])));
        assert!(is_pure(Complex::new(0.0f64, 2.0)));
        assert!(is_pure(Octonion::<f64>::zero()) && is_real(Octonion::<f64>::zero()));
        assert!(is_real(-4.0f32));
    }

    #[test]
    fn non_finite_classes() {
        let z = Complex::new(f64::INFINITY, 0.0);
        assert!(is_infinite(z) && !is_finite(z) && !is_nan(z) && !is_cinf(z));
        assert!(is_cinf(cinf::<Complex<f64>>()));
        assert!(!is_cinf(fnan::<Complex<f64>>()));
        assert!(!is_cinf(f64::NAN));
        assert!(is_finite(Octonion::<f64>::from_real(1e308f64)));
    }

    #[test]
    fn unitary_elements() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert!(is_unitary(Quaternion::from([h, 0.0, h, 0.0])));
        assert!(is_unitary(-1.0f64));
        assert!(!is_unitary(Complex::new(1.0f64, 1.0)));
        assert!(is_zero(Quaternion::<f32>::zero()));
    }
}
