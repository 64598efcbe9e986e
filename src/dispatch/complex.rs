// src/dispatch/complex.rs
// Closed forms for DIM 2, written against (re, im) pairs. The special cases
// for non-finite parts follow the C99 Annex G conventions for csinh/ccosh/
// ctanh: an infinite real part with an undefined imaginary part keeps the
// infinity and reports NaN beside it rather than collapsing both to NaN.
// cos/sin/tan are the hyperbolic forms rotated by i.

use super::{complex_parts, from_complex_parts};
use crate::algebra::Algebra;
use crate::scalar::Scalar;
use num_traits::{Float, FloatConst, Zero};

pub fn exp<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let (re, im) = exp_parts(a, b);
    from_complex_parts(re, im)
}

fn exp_parts<T: Scalar>(a: T, b: T) -> (T, T) {
    let rho = a.exp();
    if b.is_zero() || a == T::neg_infinity() {
        return (rho, T::zero());
    }
    if a == T::infinity() && !b.is_finite() {
        return (a, T::nan());
    }
    let (s, c) = b.sin_cos();
    (rho * c, rho * s)
}

/// `exp(z) - 1` without the cancellation near zero.
pub fn expm1<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    if b.is_zero() {
        return from_complex_parts(a.exp_m1(), A::Real::zero());
    }
    let (s, c) = b.sin_cos();
    let half = (b / A::Real::lit(2.0)).sin();
    // cos(b) - 1 == -2 sin^2(b/2)
    let cosm1 = -A::Real::lit(2.0) * half * half;
    from_complex_parts(a.exp_m1() * c + cosm1, a.exp() * s)
}

/// Principal logarithm: `ln|z| + i arg(z)` with `arg` in `(-pi, pi]`.
pub fn log<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    from_complex_parts(a.hypot(b).ln(), b.atan2(a))
}

/// Principal square root, upper half plane on the negative real axis.
pub fn sqrt<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    if a.is_zero() && b.is_zero() {
        return from_complex_parts(A::Real::zero(), b);
    }
    if b.is_infinite() {
        return from_complex_parts(A::Real::infinity(), b);
    }
    let two = A::Real::lit(2.0);
    let t = ((a.abs() + a.hypot(b)) / two).sqrt();
    if a >= A::Real::zero() {
        from_complex_parts(t, b / (two * t))
    } else {
        from_complex_parts(b.abs() / (two * t), t.copysign(b))
    }
}

pub fn cosh<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let (re, im) = cosh_parts(a, b);
    from_complex_parts(re, im)
}

fn cosh_parts<T: Scalar>(a: T, b: T) -> (T, T) {
    if a.is_infinite() && !b.is_finite() {
        return (T::infinity(), T::nan());
    }
    let (s, c) = b.sin_cos();
    let re = c * a.cosh();
    let im = if b.is_zero() || a.is_zero() {
        T::zero()
    } else {
        s * a.sinh()
    };
    (re, im)
}

pub fn sinh<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let (re, im) = sinh_parts(a, b);
    from_complex_parts(re, im)
}

fn sinh_parts<T: Scalar>(a: T, b: T) -> (T, T) {
    if a.is_nan() {
        return (T::nan(), T::nan());
    }
    let (s, c) = b.sin_cos();
    let mut re = c * a.sinh();
    let mut im = s * a.cosh();
    if a.is_infinite() && !b.is_finite() {
        re = a;
        im = T::nan();
    }
    if b.is_zero() {
        im = T::zero();
    }
    if a.is_zero() {
        re = T::zero();
    }
    (re, im)
}

pub fn tanh<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let (re, im) = tanh_parts(a, b);
    from_complex_parts(re, im)
}

fn tanh_parts<T: Scalar>(a: T, b: T) -> (T, T) {
    let (a2, b2) = (a + a, b + b);
    let ch = a2.cosh();
    // |tanh| has saturated to one in the real direction
    if ch.is_infinite() {
        return (a.signum(), T::zero());
    }
    let (s, c) = b2.sin_cos();
    let den = c + ch;
    let re = if a.is_zero() { T::zero() } else { a2.sinh() / den };
    let im = if b.is_zero() { T::zero() } else { s / den };
    (re, im)
}

/// `cos(a + ib) = cosh(-b + ia)`.
pub fn cos<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let (re, im) = cosh_parts(-b, a);
    from_complex_parts(re, im)
}

/// `sin(z) = -i sinh(iz)`.
pub fn sin<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let (re, im) = sinh_parts(-b, a);
    from_complex_parts(im, -re)
}

/// `tan(z) = -i tanh(iz)`.
pub fn tan<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let (re, im) = tanh_parts(-b, a);
    from_complex_parts(im, -re)
}

pub fn cospi<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let pb = b * A::Real::PI();
    if pb.is_infinite() && !a.is_finite() {
        return from_complex_parts(A::Real::infinity(), A::Real::nan());
    }
    let (s, c) = a.sinpicospi();
    let im = if a.is_zero() || b.is_zero() {
        A::Real::zero()
    } else {
        -s * pb.sinh()
    };
    from_complex_parts(c * pb.cosh(), im)
}

pub fn sinpi<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let pb = b * A::Real::PI();
    let (s, c) = a.sinpicospi();
    let re = if a.is_zero() { A::Real::zero() } else { s * pb.cosh() };
    let im = if b.is_zero() { A::Real::zero() } else { c * pb.sinh() };
    from_complex_parts(re, im)
}

/// `tan(pi z) = (sinpi(2a) + i sinh(2 pi b)) / (cospi(2a) + cosh(2 pi b))`.
pub fn tanpi<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    if b.is_zero() {
        // the half-angle form has 0/0 at the poles; the ratio gives the signed infinity
        let (s, c) = a.sinpicospi();
        return from_complex_parts(s / c, A::Real::zero());
    }
    let pb2 = (b + b) * A::Real::PI();
    let ch = pb2.cosh();
    if ch.is_infinite() {
        return from_complex_parts(A::Real::zero(), b.signum());
    }
    let (s, c) = (a + a).sinpicospi();
    let den = c + ch;
    let re = if a.is_zero() { A::Real::zero() } else { s / den };
    from_complex_parts(re, pb2.sinh() / den)
}

// ----------------------------------------------------------------------------
// Inverse functions. asin/acos follow Hull, Fairgrieve and Tang, "Implementing
// the complex arcsine and arccosine functions using exception handling" (ACM
// TOMS 23(3), 1997): a safe zone where the direct formulas cannot overflow
// or cancel, and asymptotic forms outside it. Both work on the first
// quadrant and restore signs afterwards. asinh and atan are rotations of
// asin and atanh.
// ----------------------------------------------------------------------------

/// `(asin re, acos re, im magnitude)` for finite `x, y >= 0`.
fn arcsine_parts<T: Scalar>(x: T, y: T) -> (T, T, T) {
    let one = T::one();
    let half = T::lit(0.5);
    let eps = T::epsilon();
    let s_min = T::min_positive_value().sqrt() * T::lit(4.0);
    let s_max = T::max_value().sqrt() / T::lit(8.0);
    let xp1 = x + one;
    let xm1 = x - one;
    let inside = x <= one;

    if x >= s_min && x <= s_max && y >= s_min && y <= s_max {
        let yy = y * y;
        let tr = xp1.hypot(y);
        let ts = xm1.hypot(y);
        let a = (tr + ts) * half;
        let b = x / a;
        let apx = a + x;
        let (asin_re, acos_re) = if b <= T::lit(0.6417) {
            (b.asin(), b.acos())
        } else {
            let d = if inside {
                (half * apx * (yy / (tr + xp1) + (ts - xm1))).sqrt()
            } else {
                y * (half * (apx / (tr + xp1) + apx / (ts + xm1))).sqrt()
            };
            ((x / d).atan(), (d / x).atan())
        };
        let tmp = yy / (tr + xp1);
        let am1 = if inside {
            (tmp + yy / (ts - xm1)) * half
        } else {
            (tmp + ts + xm1) * half
        };
        let im = if a <= T::lit(1.5) {
            (am1 + (am1 * (a + one)).sqrt()).ln_1p()
        } else {
            (a + (a * a - one).sqrt()).ln()
        };
        return (asin_re, acos_re, im);
    }

    let quarter_turn = T::FRAC_PI_2();
    if y <= eps * xm1.abs() {
        if inside {
            return (x.asin(), x.acos(), y / (xp1 * -xm1).sqrt());
        }
        let im = if T::max_value() / xp1 > xm1 {
            (xm1 + (xp1 * xm1).sqrt()).ln_1p()
        } else {
            T::LN_2() + x.ln()
        };
        return (quarter_turn, T::zero(), im);
    }
    if y <= s_min {
        let sy = y.sqrt();
        return (quarter_turn - sy, sy, sy);
    }
    if eps * y - one >= x {
        return (x / y, quarter_turn, T::LN_2() + y.ln());
    }
    if x > one {
        let q = x / y;
        return (q.atan(), (y / x).atan(), T::LN_2() + y.ln() + half * (q * q).ln_1p());
    }
    let aa = (one + y * y).sqrt();
    (x / aa, quarter_turn, half * (T::lit(2.0) * y * (y + aa)).ln_1p())
}

fn asin_parts<T: Scalar>(a: T, b: T) -> (T, T) {
    let (x, y) = (a.abs(), b.abs());
    if b.is_zero() && x <= T::one() {
        return (a.asin(), b);
    }
    if a.is_nan() || b.is_nan() {
        return if x.is_infinite() {
            (T::nan(), T::infinity())
        } else if y.is_infinite() {
            (T::nan(), b)
        } else if a.is_zero() {
            (a, T::nan())
        } else {
            (T::nan(), T::nan())
        };
    }
    let (r, i) = if x.is_infinite() || y.is_infinite() {
        let r = match (x.is_infinite(), y.is_infinite()) {
            (true, true) => T::FRAC_PI_4(),
            (true, false) => T::FRAC_PI_2(),
            _ => T::zero(),
        };
        (r, T::infinity())
    } else {
        let (r, _, i) = arcsine_parts(x, y);
        (r, i)
    };
    (r.copysign(a), i.copysign(b))
}

fn acos_parts<T: Scalar>(a: T, b: T) -> (T, T) {
    let (x, y) = (a.abs(), b.abs());
    if b.is_zero() && x <= T::one() {
        return (a.acos(), -b);
    }
    if a.is_nan() || b.is_nan() {
        return if y.is_infinite() {
            (T::nan(), -b)
        } else if x.is_infinite() {
            (T::nan(), T::infinity())
        } else if a.is_zero() {
            (T::FRAC_PI_2(), T::nan())
        } else {
            (T::nan(), T::nan())
        };
    }
    let (r, i) = if x.is_infinite() || y.is_infinite() {
        let r = match (x.is_infinite(), y.is_infinite()) {
            (true, true) => T::FRAC_PI_4(),
            (true, false) => T::zero(),
            _ => T::FRAC_PI_2(),
        };
        (r, T::infinity())
    } else {
        let (_, r, i) = arcsine_parts(x, y);
        (r, i)
    };
    let r = if a.is_sign_negative() { T::PI() - r } else { r };
    let i = if b.is_sign_positive() { -i } else { i };
    (r, i)
}

fn atanh_parts<T: Scalar>(a: T, b: T) -> (T, T) {
    let one = T::one();
    let two = T::lit(2.0);
    let (x, y) = (a.abs(), b.abs());
    if b.is_zero() && x < one {
        return (a.atanh(), b);
    }
    if a.is_nan() || b.is_nan() {
        return if a.is_nan() && y.is_infinite() {
            (T::zero(), T::FRAC_PI_2().copysign(b))
        } else if b.is_nan() && (x.is_infinite() || a.is_zero()) {
            (T::zero().copysign(a), T::nan())
        } else {
            (T::nan(), T::nan())
        };
    }
    if x.is_infinite() || y.is_infinite() {
        return (T::zero().copysign(a), T::FRAC_PI_2().copysign(b));
    }

    let crossover = T::lit(0.3);
    let s_min = T::min_positive_value().sqrt() * two;
    let s_max = T::max_value().sqrt() / two;
    let xx = x * x;
    let yy = y * y;
    let sqrabs = xx + yy;

    let (r, i) = if x >= s_min && x <= s_max && y >= s_min && y <= s_max {
        let alpha = two * x / (one + sqrabs);
        let r = if alpha < crossover {
            alpha.ln_1p() - (-alpha).ln_1p()
        } else {
            (two * x + sqrabs).ln_1p() - ((x - one) * (x - one) + yy).ln()
        };
        (r, (two * y).atan2(one - sqrabs))
    } else {
        let div = if x < s_min { one + xx + yy } else { one };
        let mut alpha = two * x / div;
        if y > s_max {
            if x > one {
                alpha = (two * x / y) / (y + xx / y);
            }
        } else if x > s_max {
            alpha = if y > one { two / (x + y * y / x) } else { two / x };
        }
        let mut r = if alpha < crossover {
            alpha.ln_1p() - (-alpha).ln_1p()
        } else {
            (one + two * x + xx).ln() - ((x - one) * (x - one)).ln()
        };
        if x == one && y < s_min {
            r = -(two * (y.ln() - T::LN_2()));
        }
        let i = if y > s_max || x > s_max {
            T::PI()
        } else if x < s_min {
            if y < s_min {
                (two * y).atan2(one)
            } else {
                (two * y).atan2(one - yy)
            }
        } else {
            (two * y).atan2(one - xx)
        };
        (r, i)
    };
    let r = r * T::lit(0.25);
    let i = i * T::lit(0.5);
    (r.copysign(a), i.copysign(b))
}

pub fn asin<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let (re, im) = asin_parts(a, b);
    from_complex_parts(re, im)
}

pub fn acos<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let (re, im) = acos_parts(a, b);
    from_complex_parts(re, im)
}

/// `asinh(z) = -i asin(iz)`.
pub fn asinh<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let (re, im) = asin_parts(-b, a);
    from_complex_parts(im, -re)
}

/// `acosh(z) = +-i acos(z)`, the sign chosen to keep the real part non-negative.
pub fn acosh<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let (re, im) = acos_parts(a, b);
    if im.is_sign_negative() {
        from_complex_parts(-im, re)
    } else {
        from_complex_parts(im, -re)
    }
}

pub fn atanh<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let (re, im) = atanh_parts(a, b);
    from_complex_parts(re, im)
}

/// `atan(z) = -i atanh(iz)`.
pub fn atan<A: Algebra>(z: A) -> A {
    let (a, b) = complex_parts(&z);
    let (re, im) = atanh_parts(-b, a);
    from_complex_parts(im, -re)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cayley::Complex;

    fn close(z: Complex<f64>, re: f64, im: f64) -> bool {
        (z.low - re).abs() < 1e-12 && (z.high - im).abs() < 1e-12
    }

    #[test]
    fn exp_of_origin_is_one() {
        assert_eq!(exp(Complex::new(0.0f64, 0.0)), Complex::new(1.0, 0.0));
    }

    #[test]
    fn exp_non_finite_real_parts() {
        let z = exp(Complex::new(f64::NEG_INFINITY, 3.0));
        assert_eq!(z, Complex::new(0.0, 0.0));
        let z = exp(Complex::new(f64::INFINITY, f64::INFINITY));
        assert_eq!(z.low, f64::INFINITY);
        assert!(z.high.is_nan());
    }

    #[test]
    fn euler_identity() {
        let z = exp(Complex::new(0.0f64, std::f64::consts::PI));
        assert!(close(z, -1.0, 0.0));
    }

    #[test]
    fn log_is_principal() {
        let z = log(Complex::new(-1.0f64, 0.0));
        assert!(close(z, 0.0, std::f64::consts::PI));
        let z = log(Complex::new(0.0f64, 1.0));
        assert!(close(z, 0.0, std::f64::consts::FRAC_PI_2));
    }

    #[test]
    fn sqrt_branches() {
        assert!(close(sqrt(Complex::new(-4.0f64, 0.0)), 0.0, 2.0));
        assert!(close(sqrt(Complex::new(0.0f64, 2.0)), 1.0, 1.0));
        assert!(close(sqrt(Complex::new(3.0f64, -4.0)), 2.0, -1.0));
    }

    #[test]
    fn trig_matches_exponential_definition() {
        let z = Complex::new(0.7f64, -0.4);
        let iz = Complex::new(0.4, 0.7);
        let e = exp(iz);
        let f = exp(-iz);
        let c = (e + f) * 0.5f64;
        assert!(close(cos(z), c.low, c.high));
        let s = sin(z);
        let expected = (e - f) * Complex::new(0.0f64, -0.5);
        assert!(close(s, expected.low, expected.high));
    }

    #[test]
    fn tanh_saturates() {
        assert_eq!(tanh(Complex::new(800.0f64, 1.0)), Complex::new(1.0, 0.0));
        assert_eq!(tanh(Complex::new(-800.0f64, 1.0)), Complex::new(-1.0, 0.0));
    }

    #[test]
    fn pi_scaled_forms_are_exact_on_the_real_lattice() {
        assert_eq!(cospi(Complex::new(0.5f64, 0.0)), Complex::new(0.0, 0.0));
        assert_eq!(sinpi(Complex::new(1.0f64, 0.0)), Complex::new(0.0, 0.0));
        assert_eq!(tanpi(Complex::new(0.25f64, 0.0)).high, 0.0);
        assert!(tanpi(Complex::new(0.5f64, 0.0)).low.is_infinite());
        assert_eq!(tanpi(Complex::new(0.0f64, 400.0)), Complex::new(0.0, 1.0));
    }

    #[test]
    fn arcsine_outside_the_safe_zone() {
        let z = asin(Complex::new(1e-200f64, 1e-200));
        assert_eq!(z, Complex::new(1e-200, 1e-200));
        let z = acos(Complex::new(1e-200f64, 1e-200));
        assert_eq!(z.low, std::f64::consts::FRAC_PI_2);
        assert_eq!(z.high, -1e-200);
        let z = asin(Complex::new(-3.0f64, 1e300));
        assert!(z.low < 0.0 && z.low.abs() < 1e-299);
        assert!(z.high > 690.0 && z.high.is_finite());
    }

    #[test]
    fn inverse_hyperbolics_are_rotations() {
        let z = Complex::new(0.7f64, -0.2);
        let iz = Complex::new(0.2, 0.7);
        let w = asin(iz);
        assert!(close(asinh(z), w.high, -w.low));
        let a = acosh(z);
        assert!(a.low >= 0.0);
        let c = cosh(a);
        assert!(close(c, z.low, z.high));
        let t = tanh(atanh(z));
        assert!(close(t, z.low, z.high));
    }

    #[test]
    fn expm1_keeps_small_arguments() {
        let z = expm1(Complex::new(1e-10f64, 1e-10));
        assert!((z.low - 1e-10).abs() < 1e-18);
        assert!((z.high - 1e-10).abs() < 1e-18);
    }
}
