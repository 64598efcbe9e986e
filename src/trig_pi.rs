// src/trig_pi.rs
// Circular functions of pi * x. The real part goes through the lattice-exact
// Scalar::sinpi/cospi, so cospi(n + 1/2) and sinpi(n) are exactly zero
// rather than a rounding residue of pi.

use crate::algebra::Algebra;
use crate::dispatch::{complex, polar, Kernel};
use crate::scalar::Scalar;

pub fn cospi<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().cospi()),
        Kernel::Complex => complex::cospi(x),
        Kernel::Quaternion | Kernel::Generic => polar::cospi(x),
    }
}

pub fn sinpi<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => A::from_real(x.real().sinpi()),
        Kernel::Complex => complex::sinpi(x),
        Kernel::Quaternion | Kernel::Generic => polar::sinpi(x),
    }
}

/// `(sinpi(x), cospi(x))`.
pub fn sinpicospi<A: Algebra>(x: A) -> (A, A) {
    (sinpi(x), cospi(x))
}

pub fn tanpi<A: Algebra>(x: A) -> A {
    match A::KERNEL {
        Kernel::Real => {
            let (s, c) = x.real().sinpicospi();
            A::from_real(s / c)
        }
        Kernel::Complex => complex::tanpi(x),
        Kernel::Quaternion | Kernel::Generic => polar::tanpi(x),
    }
}

pub fn cotpi<A: Algebra>(x: A) -> A {
    tanpi(x).rec()
}

pub fn secpi<A: Algebra>(x: A) -> A {
    cospi(x).rec()
}

pub fn cscpi<A: Algebra>(x: A) -> A {
    sinpi(x).rec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cayley::{Complex, Octonion, Quaternion};
    use crate::trig::{cos, sin};

    #[test]
    fn exact_at_half_integers() {
        assert_eq!(cospi(0.5f64), 0.0);
        assert_eq!(sinpi(2.0f64), 0.0);
        assert_eq!(cospi(Quaternion::<f64>::from_real(1.5f64)).norm(), 0.0);
        assert_eq!(sinpi(Octonion::<f64>::from_real(-3.0f64)).norm(), 0.0);
    }

    #[test]
    fn matches_scaled_circular_functions() {
        let pi = std::f64::consts::PI;
        let q = Quaternion::from([0.3f64, 0.2, -0.1, 0.25]);
        assert!((cospi(q) - cos(q * pi)).norm() < 1e-12);
        assert!((sinpi(q) - sin(q * pi)).norm() < 1e-12);
        let z = Complex::new(-0.7f64, 0.45);
        assert!((cospi(z) - cos(z * pi)).norm() < 1e-12);
        assert!((sinpi(z) - sin(z * pi)).norm() < 1e-12);
    }

    #[test]
    fn tangent_and_reciprocals() {
        assert!(tanpi(0.5f64).is_infinite());
        assert_eq!(cotpi(0.5f64), 0.0);
        assert!((tanpi(0.25f64) - 1.0).abs() < 1e-15);
        assert!(cscpi(1.0f64).is_infinite());
        assert_eq!(secpi(2.0f64), 1.0);
        let z = Complex::new(0.5f64, 0.0);
        assert_eq!(cotpi(z), Complex::new(0.0, 0.0));
        let q = Quaternion::from([0.1f64, 0.2, 0.3, 0.0]);
        let (s, c) = sinpicospi(q);
        assert!((tanpi(q) * c - s).norm() < 1e-12);
    }
}
