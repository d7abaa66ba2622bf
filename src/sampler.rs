//! Rejection sampling of distinct grid points.
//!
//! Candidates are drawn uniformly from `[0, bound] x [0, bound]` and kept only
//! if they have not been seen before. Requests larger than the grid are
//! rejected up front instead of spinning forever.

use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::{
    error::{Error, Result},
    point::Point,
};

/// Inclusive coordinate bound used when none is given.
pub const DEFAULT_BOUND: u32 = 500;

/// Number of distinct points on the `[0, bound]` grid.
///
/// Clamped to `u64::MAX` for `bound == u32::MAX`, where the exact value is `2^64`.
pub fn capacity(bound: u32) -> u64 {
    let side = u64::from(bound) + 1;
    side.checked_mul(side).unwrap_or(u64::MAX)
}

/// Samples `n` distinct points using the thread-local generator.
pub fn generate(n: usize, bound: u32) -> Result<Vec<Point>> {
    generate_with(&mut rand::thread_rng(), n, bound)
}

/// Samples `n` distinct points from a generator seeded with `seed`.
///
/// The same `(n, bound, seed)` always yields the same sequence.
pub fn generate_seeded(n: usize, bound: u32, seed: u64) -> Result<Vec<Point>> {
    generate_with(&mut StdRng::seed_from_u64(seed), n, bound)
}

/// Samples `n` distinct points from `rng`.
///
/// Fails with [`Error::Capacity`] when the grid holds fewer than `n` points
/// and with [`Error::Allocation`] when room for `n` points cannot be reserved.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, n: usize, bound: u32) -> Result<Vec<Point>> {
    let available = capacity(bound);
    let requested = u64::try_from(n).unwrap_or(u64::MAX);
    if requested > available {
        return Err(Error::Capacity {
            requested,
            available,
        });
    }

    let allocation = || Error::Allocation { requested };
    let mut seen = HashSet::new();
    seen.try_reserve(n).map_err(|_| allocation())?;
    let mut points = Vec::new();
    points.try_reserve_exact(n).map_err(|_| allocation())?;
    let mut rejected = 0u64;

    while points.len() < n {
        let candidate = Point::new(rng.gen_range(0..=bound), rng.gen_range(0..=bound));

        if seen.insert(candidate) {
            points.push(candidate);
        } else {
            rejected += 1;
        }
    }

    debug!(n, bound, rejected, "sampled unique points");

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(points: &[Point], n: usize, bound: u32) {
        assert_eq!(points.len(), n);
        assert!(points.iter().all(|p| p.within(bound)));

        let distinct: HashSet<_> = points.iter().collect();
        assert_eq!(distinct.len(), n);
    }

    #[test]
    fn capacity_of_small_grids() {
        assert_eq!(capacity(0), 1);
        assert_eq!(capacity(5), 36);
        assert_eq!(capacity(DEFAULT_BOUND), 251_001);
    }

    #[test]
    fn capacity_does_not_overflow() {
        assert_eq!(capacity(u32::MAX), u64::MAX);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn unallocatable_request_is_an_error() {
        assert!(matches!(
            generate_seeded(1 << 62, u32::MAX, 1),
            Err(Error::Allocation { .. })
        ));
    }

    #[test]
    fn zero_points_is_empty() {
        assert!(generate(0, 0).unwrap().is_empty());
        assert!(generate(0, DEFAULT_BOUND).unwrap().is_empty());
    }

    #[test]
    fn single_cell_grid() {
        assert_eq!(generate(1, 0).unwrap(), vec![Point::new(0, 0)]);

        match generate(2, 0) {
            Err(Error::Capacity {
                requested: 2,
                available: 1,
            }) => {}
            other => panic!("expected capacity error, got {other:?}"),
        }
    }

    #[test]
    fn small_grid_repeatedly() {
        for seed in 0..200 {
            let points = generate_seeded(3, 5, seed).unwrap();
            assert_valid(&points, 3, 5);
        }
    }

    #[test]
    fn fills_whole_grid() {
        let points = generate_seeded(36, 5, 7).unwrap();
        assert_valid(&points, 36, 5);
    }

    #[test]
    fn rejects_one_past_capacity() {
        assert!(matches!(
            generate_seeded(37, 5, 7),
            Err(Error::Capacity { .. })
        ));
    }

    #[test]
    fn seeded_is_deterministic() {
        let a = generate_seeded(100, DEFAULT_BOUND, 42).unwrap();
        let b = generate_seeded(100, DEFAULT_BOUND, 42).unwrap();
        assert_eq!(a, b);
        assert_valid(&a, 100, DEFAULT_BOUND);
    }

    #[test]
    fn thread_rng_default_bound() {
        let points = generate(1000, DEFAULT_BOUND).unwrap();
        assert_valid(&points, 1000, DEFAULT_BOUND);
    }
}
