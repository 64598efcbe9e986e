// src/structure.rs
// Structural operations: conjugation, inversion, the polar pieces of an
// element and the two defect measures. The commutator vanishes up to the
// complex numbers and the associator up to the quaternions; past that they
// measure how far a product depends on operand order and grouping.

use crate::algebra::Algebra;
use crate::dispatch::{complex_parts, polar, Kernel};
use num_traits::{Float, Zero};

#[inline(always)]
pub fn conj<A: Algebra>(x: A) -> A {
    x.conj()
}

#[inline(always)]
pub fn rec<A: Algebra>(x: A) -> A {
    x.rec()
}

#[inline(always)]
pub fn real<A: Algebra>(x: A) -> A::Real {
    x.real()
}

#[inline(always)]
pub fn pure<A: Algebra>(x: A) -> A {
    x.pure()
}

/// `x * y - y * x`.
pub fn commutator<A: Algebra>(x: A, y: A) -> A {
    x * y - y * x
}

/// `(x * y) * z - x * (y * z)`.
pub fn associator<A: Algebra>(x: A, y: A, z: A) -> A {
    (x * y) * z - x * (y * z)
}

/// Euclidean norm `|x|`.
pub fn abs<A: Algebra>(x: A) -> A::Real {
    x.norm()
}

/// `|x|^2`.
pub fn sqr_abs<A: Algebra>(x: A) -> A::Real {
    x.norm_sqr()
}

/// Argument of `x`. For complex numbers this is the signed
/// `atan2(im, re)` in `(-pi, pi]`; above DIM 2 the pure part has no sign and
/// the angle to the positive real axis lies in `[0, pi]`.
pub fn arg<A: Algebra>(x: A) -> A::Real {
    match A::KERNEL {
        Kernel::Complex => {
            let (a, b) = complex_parts(&x);
            b.atan2(a)
        }
        _ => {
            let (r, _, rho) = polar::split(x);
            rho.atan2(r)
        }
    }
}

/// `x / |x|`; the zero element is its own sign.
pub fn sign<A: Algebra>(x: A) -> A {
    let n = x.norm();
    if n.is_zero() {
        return x;
    }
    x.map(&|c| c / n)
}

/// `|x - y|`.
pub fn dist<A: Algebra>(x: A, y: A) -> A::Real {
    (x - y).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cayley::{Complex, Octonion, Quaternion, Sedenion};

    fn o(c: [f64; 8]) -> Octonion<f64> {
        Octonion::from(c)
    }

    #[test]
    fn conjugation_is_an_involution_and_reverses_products() {
        let x = Quaternion::from([1.0f64, 2.0, 3.0, 4.0]);
        let y = Quaternion::from([-0.5f64, 1.0, 0.0, 2.0]);
        assert_eq!(conj(conj(x)), x);
        assert_eq!(conj(x * y), conj(y) * conj(x));
    }

    #[test]
    fn commutator_detects_non_commutativity() {
        let z = Complex::new(1.0f64, 2.0);
        let w = Complex::new(-3.0f64, 0.5);
        assert!(commutator(z, w).is_zero());
        let i = Quaternion::from([0.0f64, 1.0, 0.0, 0.0]);
        let j = Quaternion::from([0.0f64, 0.0, 1.0, 0.0]);
        assert_eq!(commutator(i, j), Quaternion::from([0.0, 0.0, 0.0, 2.0]));
    }

    #[test]
    fn associator_vanishes_on_quaternions_only() {
        let a = Quaternion::from([1.0f64, 2.0, 0.0, -1.0]);
        let b = Quaternion::from([0.0f64, 1.0, 3.0, 0.5]);
        let c = Quaternion::from([2.0f64, 0.0, -1.0, 1.0]);
        assert!(associator(a, b, c).norm() < 1e-12);
        let e1 = o([0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let e2 = o([0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let e4 = o([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
        assert!(associator(e1, e2, e4).norm() > 1.0);
    }

    #[test]
    fn octonions_are_alternative() {
        let x = o([0.3, -1.0, 0.5, 2.0, 0.0, 1.5, -0.25, 0.75]);
        let y = o([1.0, 0.2, -0.4, 0.0, 0.9, -1.1, 0.3, 0.6]);
        assert!(associator(x, x, y).norm() < 1e-12);
        assert!(associator(x, y, y).norm() < 1e-12);
    }

    #[test]
    fn norms_sign_and_distance() {
        let x = Quaternion::from([3.0f64, 0.0, 4.0, 0.0]);
        assert_eq!(abs(x), 5.0);
        assert_eq!(sqr_abs(x), 25.0);
        assert_eq!(sign(x), Quaternion::from([0.6, 0.0, 0.8, 0.0]));
        assert_eq!(sign(Sedenion::<f64>::zero()), Sedenion::<f64>::zero());
        assert_eq!(dist(x, Quaternion::from([3.0, 0.0, 0.0, 3.0])), 5.0);
    }

    #[test]
    fn argument_of_the_axes() {
        use std::f64::consts::{FRAC_PI_2, PI};
        assert_eq!(arg(Complex::new(2.0f64, 0.0)), 0.0);
        assert_eq!(arg(Complex::new(-2.0f64, 0.0)), PI);
        assert_eq!(arg(Quaternion::from([0.0f64, 0.0, 0.0, -1.0])), FRAC_PI_2);
        assert_eq!(arg(-1.0f64), PI);
    }

    #[test]
    fn complex_argument_is_signed() {
        use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
        assert_eq!(arg(Complex::new(1.0f64, -1.0)), -FRAC_PI_4);
        assert_eq!(arg(Complex::new(0.0f64, -3.0)), -FRAC_PI_2);
        assert_eq!(arg(Quaternion::from([1.0f64, 0.0, -1.0, 0.0])), FRAC_PI_4);
    }
}
