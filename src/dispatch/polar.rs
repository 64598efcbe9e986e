// src/dispatch/polar.rs
// The dimension-free kernel. Any element splits as x = r + p with r real and
// p pure; p * p = -|p|^2, so the subalgebra generated by x is a copy of the
// complex plane with p / |p| playing the role of i. Power series in x
// therefore reduce to a real part and a multiple of p:
//
//   f(r + p) = Re f(r + i rho) + (Im f(r + i rho) / rho) p,   rho = |p|
//
// The division by rho is folded into sinc/sinhc so the formulas stay finite
// at rho = 0. Nothing here assumes associativity.

use crate::algebra::Algebra;
use crate::scalar::Scalar;
use num_traits::{Float, FloatConst, Zero};

/// Real part, pure part and the norm of the pure part.
#[inline(always)]
pub(crate) fn split<A: Algebra>(x: A) -> (A::Real, A, A::Real) {
    let p = x.pure();
    (x.real(), p, p.norm())
}

/// `re + k * p`.
#[inline(always)]
fn assemble<A: Algebra>(re: A::Real, p: A, k: A::Real) -> A {
    p.scale(k).with_real(re)
}

pub fn exp<A: Algebra>(x: A) -> A {
    let (r, p, rho) = split(x);
    let e = r.exp();
    if rho.is_zero() {
        return A::from_real(e);
    }
    assemble(e * rho.cos(), p, e * rho.sinc())
}

pub fn log<A: Algebra>(x: A) -> A {
    let (r, p, rho) = split(x);
    let ln = x.norm().ln();
    if rho.is_zero() {
        let mut out = A::from_real(ln);
        // no direction to rotate in: the negative reals take pi along the first unit
        if r < A::Real::zero() {
            if let Some(c) = out.get_mut(1) {
                *c = A::Real::PI();
            }
        }
        return out;
    }
    assemble(ln, p, rho.atan2(r) / rho)
}

/// `|x|^(1/2)` rotated through half the angle of `x`.
pub fn sqrt<A: Algebra>(x: A) -> A {
    let (r, p, rho) = split(x);
    let m = x.norm();
    if m.is_zero() {
        return x;
    }
    let root = m.sqrt();
    if rho.is_zero() {
        if r < A::Real::zero() {
            let mut out = A::zero();
            if let Some(c) = out.get_mut(1) {
                *c = root;
            }
            return out;
        }
        return A::from_real(root);
    }
    let half = rho.atan2(r) / A::Real::lit(2.0);
    let (s, c) = half.sin_cos();
    assemble(root * c, p, root * s / rho)
}

pub fn cos<A: Algebra>(x: A) -> A {
    let (r, p, rho) = split(x);
    let (s, c) = r.sin_cos();
    if rho.is_zero() {
        return A::from_real(c);
    }
    assemble(c * rho.cosh(), p, -s * rho.sinhc())
}

pub fn sin<A: Algebra>(x: A) -> A {
    let (r, p, rho) = split(x);
    let (s, c) = r.sin_cos();
    if rho.is_zero() {
        return A::from_real(s);
    }
    assemble(s * rho.cosh(), p, c * rho.sinhc())
}

pub fn cosh<A: Algebra>(x: A) -> A {
    let (r, p, rho) = split(x);
    if rho.is_zero() {
        return A::from_real(r.cosh());
    }
    assemble(r.cosh() * rho.cos(), p, r.sinh() * rho.sinc())
}

pub fn sinh<A: Algebra>(x: A) -> A {
    let (r, p, rho) = split(x);
    if rho.is_zero() {
        return A::from_real(r.sinh());
    }
    assemble(r.sinh() * rho.cos(), p, r.cosh() * rho.sinc())
}

/// `tanh(r + rho u) = (sinh 2r + u sin 2rho) / (cosh 2r + cos 2rho)`, which
/// stays finite where the sinh/cosh quotient would overflow.
pub fn tanh<A: Algebra>(x: A) -> A {
    let (r, p, rho) = split(x);
    if rho.is_zero() {
        return A::from_real(r.tanh());
    }
    let two = A::Real::lit(2.0);
    let ch = (two * r).cosh();
    if ch.is_infinite() {
        return A::from_real(r.signum());
    }
    let den = ch + (two * rho).cos();
    assemble((two * r).sinh() / den, p, two * (two * rho).sinc() / den)
}

/// `tan(r + rho u) = (sin 2r + u sinh 2rho) / (cos 2r + cosh 2rho)`.
pub fn tan<A: Algebra>(x: A) -> A {
    let (r, p, rho) = split(x);
    if rho.is_zero() {
        return A::from_real(r.tan());
    }
    let two = A::Real::lit(2.0);
    let ch = (two * rho).cosh();
    if ch.is_infinite() {
        return assemble(A::Real::zero(), p, rho.recip());
    }
    let den = (two * r).cos() + ch;
    assemble((two * r).sin() / den, p, two * (two * rho).sinhc() / den)
}

pub fn cospi<A: Algebra>(x: A) -> A {
    let (r, p, rho) = split(x);
    let (s, c) = r.sinpicospi();
    if rho.is_zero() {
        return A::from_real(c);
    }
    let pi = A::Real::PI();
    let t = pi * rho;
    assemble(c * t.cosh(), p, -pi * s * t.sinhc())
}

pub fn sinpi<A: Algebra>(x: A) -> A {
    let (r, p, rho) = split(x);
    let (s, c) = r.sinpicospi();
    if rho.is_zero() {
        return A::from_real(s);
    }
    let pi = A::Real::PI();
    let t = pi * rho;
    assemble(s * t.cosh(), p, pi * c * t.sinhc())
}

pub fn tanpi<A: Algebra>(x: A) -> A {
    let (r, p, rho) = split(x);
    if rho.is_zero() {
        let (s, c) = r.sinpicospi();
        return A::from_real(s / c);
    }
    let two = A::Real::lit(2.0);
    let t = two * A::Real::PI() * rho;
    let ch = t.cosh();
    if ch.is_infinite() {
        return assemble(A::Real::zero(), p, rho.recip());
    }
    let (s, c) = (two * r).sinpicospi();
    let den = c + ch;
    assemble(s / den, p, two * A::Real::PI() * t.sinhc() / den)
}
