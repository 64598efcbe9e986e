// src/bracket.rs
// Parenthesizations of an n-fold product x0 x1 ... x(n-1). In an
// associative algebra every bracketing evaluates to the same element; from
// the octonions on they differ, and the spread between them is a direct
// measure of non-associativity over a whole sequence rather than a triple.

use crate::algebra::Algebra;
use itertools::Itertools;
use num_traits::Zero;
use rand::Rng;
use std::fmt;

/// A binary tree whose leaves are the operand indices `0..n` in order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bracketing {
    Leaf(usize),                              // Index into the operand sequence
    Node(Box<Bracketing>, Box<Bracketing>), // (Left * Right)
}

impl Bracketing {
    /// `((x0 x1) x2) ...`. Fewer than one operand is treated as one.
    pub fn left_nested(n: usize) -> Self {
        (1..n.max(1)).fold(Bracketing::Leaf(0), |acc, i| {
            Bracketing::Node(Box::new(acc), Box::new(Bracketing::Leaf(i)))
        })
    }

    /// `x0 (x1 (x2 ...))`.
    pub fn right_nested(n: usize) -> Self {
        let last = n.max(1) - 1;
        (0..last).rev().fold(Bracketing::Leaf(last), |acc, i| {
            Bracketing::Node(Box::new(Bracketing::Leaf(i)), Box::new(acc))
        })
    }

    /// A random bracketing of `n` operands, built by splitting the index
    /// range at a uniform pivot, recursively.
    pub fn random(n: usize, rng: &mut impl Rng) -> Self {
        Self::random_in(0, n.max(1), rng)
    }

    fn random_in(start: usize, end: usize, rng: &mut impl Rng) -> Self {
        if end - start == 1 {
            return Bracketing::Leaf(start);
        }
        let split = rng.gen_range(start + 1..end);
        Bracketing::Node(
            Box::new(Self::random_in(start, split, rng)),
            Box::new(Self::random_in(split, end, rng)),
        )
    }

    /// Every bracketing of `n` operands; there are Catalan(n - 1) of them.
    pub fn all(n: usize) -> Vec<Self> {
        Self::all_in(0, n.max(1))
    }

    fn all_in(start: usize, end: usize) -> Vec<Self> {
        if end - start == 1 {
            return vec![Bracketing::Leaf(start)];
        }
        (start + 1..end)
            .flat_map(|split| {
                let rights = Self::all_in(split, end);
                Self::all_in(start, split)
                    .into_iter()
                    .cartesian_product(rights)
                    .map(|(l, r)| Bracketing::Node(Box::new(l), Box::new(r)))
            })
            .collect()
    }

    pub fn operands(&self) -> usize {
        match self {
            Bracketing::Leaf(_) => 1,
            Bracketing::Node(l, r) => l.operands() + r.operands(),
        }
    }

    /// Folds `inputs` with `op` in the order this tree prescribes.
    ///
    /// # Panics
    /// If a leaf index is out of range for `inputs`.
    pub fn evaluate<T, F>(&self, inputs: &[T], op: &F) -> T
    where
        T: Clone,
        F: Fn(T, T) -> T,
    {
        match self {
            Bracketing::Leaf(idx) => inputs[*idx].clone(),
            Bracketing::Node(left, right) => {
                let l_val = left.evaluate(inputs, op);
                let r_val = right.evaluate(inputs, op);
                op(l_val, r_val)
            }
        }
    }

    /// The algebra product of `xs` under this bracketing.
    pub fn product<A: Algebra>(&self, xs: &[A]) -> A {
        self.evaluate(xs, &|a: A, b: A| a * b)
    }
}

impl fmt::Display for Bracketing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bracketing::Leaf(i) => write!(f, "x{}", i),
            Bracketing::Node(l, r) => write!(f, "({} {})", l, r),
        }
    }
}

/// Largest distance between the products of `xs` over all bracketings.
/// Zero below three operands. The number of bracketings grows as the
/// Catalan numbers, so this is meant for short sequences.
pub fn bracketing_spread<A: Algebra>(xs: &[A]) -> A::Real {
    if xs.len() < 3 {
        return A::Real::zero();
    }
    let products: Vec<A> = Bracketing::all(xs.len())
        .iter()
        .map(|b| b.product(xs))
        .collect();
    tracing::trace!(operands = xs.len(), bracketings = products.len(), "bracketing spread");
    products
        .iter()
        .tuple_combinations()
        .map(|(a, b)| (*a - *b).norm())
        .fold(A::Real::zero(), |acc, d| if d > acc { d } else { acc })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cayley::{Octonion, Quaternion};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn nested_shapes() {
        assert_eq!(Bracketing::left_nested(3).to_string(), "((x0 x1) x2)");
        assert_eq!(Bracketing::right_nested(3).to_string(), "(x0 (x1 x2))");
        assert_eq!(Bracketing::left_nested(1), Bracketing::Leaf(0));
        assert_eq!(Bracketing::right_nested(0), Bracketing::Leaf(0));
        assert_eq!(Bracketing::left_nested(5).operands(), 5);
    }

    #[test]
    fn enumeration_is_catalan() {
        let counts: Vec<usize> = (1..=6).map(|n| Bracketing::all(n).len()).collect();
        assert_eq!(counts, vec![1, 1, 2, 5, 14, 42]);
        let four = Bracketing::all(4);
        assert_eq!(four.iter().unique().count(), four.len());
        assert!(four.contains(&Bracketing::left_nested(4)));
        assert!(four.contains(&Bracketing::right_nested(4)));
    }

    #[test]
    fn random_bracketings_cover_every_operand() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..10 {
            let b = Bracketing::random(n, &mut rng);
            assert_eq!(b.operands(), n);
            let leaves = b.evaluate(&(0..n).map(|i| vec![i]).collect::<Vec<_>>(), &|mut a: Vec<usize>, b: Vec<usize>| {
                a.extend(b);
                a
            });
            assert_eq!(leaves, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn evaluation_order_matters_for_non_associative_ops() {
        let xs = [8.0, 4.0, 2.0];
        let div = |a: f64, b: f64| a / b;
        assert_eq!(Bracketing::left_nested(3).evaluate(&xs, &div), 1.0);
        assert_eq!(Bracketing::right_nested(3).evaluate(&xs, &div), 4.0);
    }

    #[test]
    fn spread_separates_quaternions_from_octonions() {
        let qs = [
            Quaternion::from([1.0f64, 0.5, -0.2, 0.3]),
            Quaternion::from([0.0f64, 1.0, 2.0, -1.0]),
            Quaternion::from([0.7f64, 0.0, 0.1, 0.9]),
            Quaternion::from([-0.3f64, 0.4, 0.0, 1.2]),
        ];
        assert!(bracketing_spread(&qs) < 1e-12);

        let e = |n: usize| {
            let mut c = [0.0f64; 8];
            c[n] = 1.0;
            Octonion::from(c)
        };
        assert_eq!(bracketing_spread(&[e(1), e(2), e(4)]), 2.0);
        assert_eq!(bracketing_spread::<Octonion<f64>>(&[]), 0.0);
    }
}
