use std::fmt::Debug;

use num::PrimInt;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::element::Pair;
use crate::error::{Error, Result};

/// Seed used by `Ifs::random`, so two generations over the same universe and
/// range are identical.
pub const DEFAULT_SEED: u64 = 1;

/// Draws the random pairs for a fully populated set.
pub(crate) struct PairSampler<D> {
    rng: StdRng,
    range: D,
    len: usize,
}

impl<D: PrimInt + Debug> PairSampler<D> {
    pub(crate) fn new(range: D, seed: u64) -> Result<Self> {
        let two = D::one() + D::one();

        if range < two {
            return Err(Error::invalid_range(&range, "a range of at least 2"));
        }

        // A range too large for usize can't be sampled from
        let len = range
            .to_usize()
            .ok_or_else(|| Error::invalid_range(&range, "a range that fits in usize"))?;

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            range,
            len,
        })
    }

    /// Samples two distinct values from `[0, range)` and turns them into
    /// `(lo, range - hi)`, which always satisfies `mu + nu <= range`.
    pub(crate) fn sample(&mut self) -> Pair<D> {
        let draw = index::sample(&mut self.rng, self.len, 2);
        let (a, b) = (draw.index(0), draw.index(1));
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };

        // Both draws are below `range`, which itself fits in D
        let lo: D = num::cast(lo).unwrap_or_else(D::zero);
        let hi: D = num::cast(hi).unwrap_or_else(D::zero);

        Pair::new(lo, self.range - hi)
    }
}

#[test]
fn test_sampler_rejects_small_ranges() {
    assert!(matches!(PairSampler::new(0u32, DEFAULT_SEED), Err(Error::InvalidRange { .. })));
    assert!(matches!(PairSampler::new(1u32, DEFAULT_SEED), Err(Error::InvalidRange { .. })));
    assert!(matches!(PairSampler::new(-5i64, DEFAULT_SEED), Err(Error::InvalidRange { .. })));
    assert!(PairSampler::new(2u32, DEFAULT_SEED).is_ok());
}

#[test]
fn test_sampler_pairs() {
    let mut sampler = PairSampler::new(30u32, DEFAULT_SEED).unwrap();

    for _ in 0..500 {
        let pair = sampler.sample();

        assert!(pair.is_valid(30));
        // lo < hi, so the pair never covers the whole range
        assert!(pair.mu + pair.nu < 30);
    }
}

#[test]
fn test_sampler_range_two() {
    let mut sampler = PairSampler::new(2u8, 7).unwrap();

    // The only draw is {0, 1}
    for _ in 0..10 {
        assert_eq!(sampler.sample(), Pair::new(0, 1));
    }
}
