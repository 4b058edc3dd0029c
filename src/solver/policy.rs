//! Guess selection policies
//!
//! Defines the `SelectionPolicy` trait and concrete implementations.

use super::pool::CandidatePool;
use crate::core::Sequence;
use rand::Rng;
use rand::seq::IndexedRandom;

/// A policy for picking the next guess from the remaining candidates
pub trait SelectionPolicy {
    /// Select a guess from `pool`
    ///
    /// Returns `None` only if the pool is empty.
    fn select<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a CandidatePool,
        rng: &mut R,
    ) -> Option<&'a Sequence>;
}

/// Enum wrapper for all policy types
///
/// Allows runtime selection of policy while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyType {
    /// Uniform random choice (the naive strategy)
    #[default]
    Random,
    /// First remaining candidate in pool order
    First,
}

impl SelectionPolicy for PolicyType {
    fn select<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a CandidatePool,
        rng: &mut R,
    ) -> Option<&'a Sequence> {
        match self {
            Self::Random => RandomPolicy.select(pool, rng),
            Self::First => FirstPolicy.select(pool, rng),
        }
    }
}

impl PolicyType {
    /// Names accepted by [`PolicyType::from_name`]
    pub const NAMES: &'static [&'static str] = &["random", "first"];

    /// Create policy from name string
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "random" | "naive" => Some(Self::Random),
            "first" => Some(Self::First),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::First => "first",
        }
    }
}

/// Random policy
///
/// Picks uniformly among the remaining candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPolicy;

impl SelectionPolicy for RandomPolicy {
    fn select<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a CandidatePool,
        rng: &mut R,
    ) -> Option<&'a Sequence> {
        pool.as_slice().choose(rng)
    }
}

/// First-candidate policy
///
/// Deterministic baseline: ignores the RNG and takes the earliest member.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPolicy;

impl SelectionPolicy for FirstPolicy {
    fn select<'a, R: Rng + ?Sized>(
        &self,
        pool: &'a CandidatePool,
        _rng: &mut R,
    ) -> Option<&'a Sequence> {
        pool.as_slice().first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::enumerate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_policy_selects_member() {
        let pool = enumerate(3).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let guess = RandomPolicy.select(&pool, &mut rng).unwrap();
            assert!(pool.contains(guess));
        }
    }

    #[test]
    fn random_policy_covers_pool() {
        let pool = enumerate(2).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut hits = rustc_hash::FxHashSet::default();
        for _ in 0..2000 {
            hits.insert(*RandomPolicy.select(&pool, &mut rng).unwrap());
        }
        // 90 candidates, 2000 draws: every one should show up
        assert_eq!(hits.len(), pool.len());
    }

    #[test]
    fn random_policy_single_candidate() {
        let mut pool = enumerate(1).unwrap();
        pool.retain(|s| s.digit_at(0) == 7);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            RandomPolicy.select(&pool, &mut rng).map(ToString::to_string),
            Some("7".to_string())
        );
    }

    #[test]
    fn first_policy_is_deterministic() {
        let pool = enumerate(4).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let first = FirstPolicy.select(&pool, &mut rng).unwrap();
        assert_eq!(first.to_string(), "0123");
    }

    #[test]
    fn policy_type_from_name() {
        assert_eq!(PolicyType::from_name("random"), Some(PolicyType::Random));
        assert_eq!(PolicyType::from_name("naive"), Some(PolicyType::Random));
        assert_eq!(PolicyType::from_name("first"), Some(PolicyType::First));
        assert_eq!(PolicyType::from_name("entropy"), None);
        assert_eq!(PolicyType::default(), PolicyType::Random);

        for name in PolicyType::NAMES {
            let policy = PolicyType::from_name(name).unwrap();
            assert_eq!(policy.name(), *name);
        }
    }

    #[test]
    fn policy_type_dispatches() {
        let pool = enumerate(3).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let guess = PolicyType::First.select(&pool, &mut rng).unwrap();
        assert_eq!(guess.to_string(), "012");
        assert!(PolicyType::Random.select(&pool, &mut rng).is_some());
    }
}
