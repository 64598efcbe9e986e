// src/lib.rs
//! Cayley-Dickson algebras over `f32`/`f64` and the elementary functions
//! extended to them.
//!
//! `CayleyDickson<A>` doubles any algebra `A`; nesting it over a real gives
//! the complex numbers, quaternions, octonions, sedenions and beyond. Every
//! function here is generic over [`Algebra`] and works at any dimension,
//! picking closed forms at dimensions 1, 2 and 4 and the real/vector polar
//! decomposition elsewhere.
//!
//! ```
//! use cayley_dickson::{exp, log, Algebra, Quaternion};
//!
//! let q = Quaternion::from([0.5f64, 0.1, -0.2, 0.3]);
//! let back = exp(log(q));
//! assert!((back - q).norm() < 1e-12);
//! ```

pub mod algebra;
pub mod bracket;
pub mod cayley;
pub mod constants;
pub mod convert;
pub mod dispatch;
pub mod error;
pub mod exp_log;
pub mod hyperbolic;
pub mod interpolate;
pub mod inv_hyperbolic;
pub mod inv_trig;
pub mod predicates;
pub mod random;
pub mod scalar;
pub mod structure;
pub mod trig;
pub mod trig_pi;

pub use algebra::Algebra;
pub use bracket::{bracketing_spread, Bracketing};
pub use cayley::{CayleyDickson, Complex, Octonion, Pathion, Quaternion, Sedenion};
pub use constants::{cinf, fnan, unit};
pub use convert::convert;
pub use dispatch::Kernel;
pub use error::{DimensionError, Result};
pub use exp_log::{exp, exp10, exp2, expm1, log, log10, log2, pow, powf, powi, sqrt};
pub use hyperbolic::{cosh, coth, csch, sech, sinh, sinhcosh, tanh};
pub use interpolate::{dot, slerp};
pub use inv_hyperbolic::{acosh, acoth, acsch, asech, asinh, atanh};
pub use inv_trig::{acos, acot, acsc, asec, asin, atan};
pub use predicates::{
    is_cinf, is_finite, is_infinite, is_nan, is_pure, is_real, is_unitary, is_zero,
};
pub use scalar::Scalar;
pub use structure::{abs, arg, associator, commutator, conj, dist, pure, real, rec, sign, sqr_abs};
pub use trig::{cos, cot, csc, sec, sin, sincos, sinc, tan};
pub use trig_pi::{cospi, cotpi, cscpi, secpi, sinpi, sinpicospi, tanpi};
