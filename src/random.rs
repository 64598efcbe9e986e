// src/random.rs
// Random elements for tests, benches and sampling experiments.

use crate::algebra::Algebra;
use num_traits::Zero;
use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Every component drawn independently from N(0, 1).
pub fn standard_normal<A, R>(rng: &mut R) -> A
where
    A: Algebra,
    R: Rng + ?Sized,
    StandardNormal: Distribution<A::Real>,
{
    A::from_fn(|_| StandardNormal.sample(rng))
}

/// Uniform on the unit sphere of the algebra: a normal sample scaled to
/// norm one (the normal distribution is rotation invariant).
pub fn unit_sphere<A, R>(rng: &mut R) -> A
where
    A: Algebra,
    R: Rng + ?Sized,
    StandardNormal: Distribution<A::Real>,
{
    loop {
        let x: A = standard_normal(rng);
        let n = x.norm();
        if !n.is_zero() {
            return x.map(&|c| c / n);
        }
    }
}

/// Every component uniform in `[low, high)`.
pub fn uniform<A, R>(rng: &mut R, low: A::Real, high: A::Real) -> A
where
    A: Algebra,
    R: Rng + ?Sized,
    A::Real: SampleUniform,
{
    A::from_fn(|_| rng.gen_range(low..high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cayley::{Octonion, Quaternion, Sedenion};
    use crate::predicates::is_unitary;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn unit_samples_are_unitary() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let q: Quaternion<f64> = unit_sphere(&mut rng);
            assert!(is_unitary(q));
            let s: Sedenion<f32> = unit_sphere(&mut rng);
            assert!((s.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let o: Octonion<f64> = uniform(&mut rng, -2.0, 3.0);
            assert!(o.all(&|c| (-2.0..3.0).contains(&c)));
        }
    }

    #[test]
    fn normal_samples_are_seeded() {
        let a: Octonion<f64> = standard_normal(&mut StdRng::seed_from_u64(9));
        let b: Octonion<f64> = standard_normal(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!(a.norm() > 0.0);
    }
}
