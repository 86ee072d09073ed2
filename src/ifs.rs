use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use num::{Num, PrimInt};
use tracing::{debug, trace};

use crate::element::Pair;
use crate::error::{Error, Result};
use crate::random::{PairSampler, DEFAULT_SEED};
use crate::split::ElementsSplit;
use crate::universe::UniversalSet;

/// An intuitionistic fuzzy set over a borrowed universe.
///
/// Only elements that were written are stored. Every other member of the
/// universe implicitly holds the standard zero `(0, range)`, so a fresh set
/// costs nothing regardless of the universe's size.
#[derive(Clone, Debug, PartialEq)]
pub struct Ifs<'u, I, D = u32> {
    universe: &'u UniversalSet<I>,
    range: D,
    selector: BTreeMap<I, Pair<D>>,
}

impl<'u, I, D> Ifs<'u, I, D>
where
    I: Copy + Ord + Debug,
    D: Num + Copy + PartialOrd + Debug,
{
    /// Creates a set where every element is the standard zero.
    pub fn new(universe: &'u UniversalSet<I>, range: D) -> Result<Self> {
        // Negated so that an incomparable range (NaN) is rejected too
        if !(range > D::zero()) {
            return Err(Error::invalid_range(&range, "a positive range"));
        }

        Ok(Self {
            universe,
            range,
            selector: BTreeMap::new(),
        })
    }

    /// An independent copy sharing the same universe. Same as `clone`.
    pub fn copy_of(other: &Self) -> Self {
        other.clone()
    }

    pub fn range(&self) -> D {
        self.range
    }

    pub fn universe(&self) -> &'u UniversalSet<I> {
        self.universe
    }

    pub fn indices(&self) -> &'u BTreeSet<I> {
        self.universe.indices()
    }

    /// Size of the universe, not the number of stored elements.
    pub fn length(&self) -> usize {
        self.universe.length()
    }

    /// Indexed read. Members of the universe without a stored pair read as
    /// the standard zero.
    pub fn get_pair(&self, index: I) -> Result<Pair<D>> {
        self.check_index(index)?;

        Ok(self.get_or(index, Pair::standard_zero(self.range)))
    }

    /// Indexed write. The pair must be valid for this set's range.
    pub fn set_pair(&mut self, index: I, pair: impl Into<Pair<D>>) -> Result<()> {
        let pair = pair.into();

        self.check_index(index)?;

        if !pair.is_valid(self.range) {
            debug!(?index, ?pair, range = ?self.range, "rejected invalid pair");

            return Err(Error::invalid_pair(&pair.mu, &pair.nu, &self.range));
        }

        trace!(?index, ?pair, "set pair");

        self.selector.insert(index, pair);

        Ok(())
    }

    /// The stored pair for `index`, if any. Does not check universe
    /// membership and does not fall back to the standard zero.
    pub fn get(&self, index: I) -> Option<Pair<D>> {
        self.selector.get(&index).copied()
    }

    /// Like [`Ifs::get`], returning `default` when nothing is stored.
    pub fn get_or(&self, index: I, default: Pair<D>) -> Pair<D> {
        self.get(index).unwrap_or(default)
    }

    /// Hesitation degree of a universe member.
    pub fn hesitation(&self, index: I) -> Result<D> {
        Ok(self.get_pair(index)?.hesitation(self.range))
    }

    /// Stored elements in ascending index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (I, Pair<D>)> + '_ {
        self.selector.iter().map(|(index, pair)| (*index, *pair))
    }

    /// Stored indices whose pair is not the standard zero.
    pub fn support_indices(&self) -> BTreeSet<I> {
        self.iter()
            .filter(|(_, pair)| !pair.is_standard_zero(self.range))
            .map(|(index, _)| index)
            .collect()
    }

    /// Splits the stored elements, not the whole universe, into parallel
    /// sequences. An empty set yields empty sequences.
    pub fn elements_split(&self) -> ElementsSplit<I, D> {
        ElementsSplit::new(self.iter(), self.range)
    }

    fn check_index(&self, index: I) -> Result<()> {
        if self.universe.contains(&index) {
            Ok(())
        } else {
            Err(Error::invalid_index(&index))
        }
    }
}

impl<'u, I, D> Ifs<'u, I, D>
where
    I: Copy + Ord + Debug,
    D: PrimInt + Debug,
{
    /// Fully populated set with reproducible pseudorandom pairs.
    ///
    /// For each index two distinct values are drawn from `[0, range)` and the
    /// element becomes `(min, range - max)`. Requires `range >= 2`.
    pub fn random(universe: &'u UniversalSet<I>, range: D) -> Result<Self> {
        Self::random_with_seed(universe, range, DEFAULT_SEED)
    }

    pub fn random_with_seed(universe: &'u UniversalSet<I>, range: D, seed: u64) -> Result<Self> {
        let mut sampler = PairSampler::new(range, seed)?;
        let mut ifs = Self::new(universe, range)?;

        debug!(len = universe.length(), ?range, seed, "generating random set");

        for index in universe.indices() {
            ifs.selector.insert(*index, sampler.sample());
        }

        Ok(ifs)
    }
}

#[test]
fn test_new_rejects_bad_ranges() {
    let universe = UniversalSet::new(0..3);

    assert!(matches!(Ifs::new(&universe, 0u32), Err(Error::InvalidRange { .. })));
    assert!(matches!(Ifs::new(&universe, -1i32), Err(Error::InvalidRange { .. })));
    assert!(matches!(Ifs::new(&universe, f64::NAN), Err(Error::InvalidRange { .. })));
    assert!(Ifs::new(&universe, 1u32).is_ok());
    assert!(Ifs::new(&universe, 0.5f64).is_ok());
}

#[test]
fn test_random_rejects_small_ranges() {
    let universe = UniversalSet::new(0..3);

    assert!(matches!(Ifs::random(&universe, 1u32), Err(Error::InvalidRange { .. })));
    assert!(matches!(Ifs::random(&universe, 0u32), Err(Error::InvalidRange { .. })));
    assert!(Ifs::random(&universe, 2u32).is_ok());
}

#[test]
fn test_get_pair() {
    let universe = UniversalSet::new(0..3);
    let mut ifs = Ifs::new(&universe, 10u32).unwrap();

    ifs.set_pair(1, (3, 4)).unwrap();

    assert_eq!(ifs.get_pair(0), Ok(Pair::new(0, 10)));
    assert_eq!(ifs.get_pair(1), Ok(Pair::new(3, 4)));
    assert_eq!(ifs.get_pair(99), Err(Error::invalid_index(&99)));
    assert_eq!(ifs.hesitation(1), Ok(3));
    assert_eq!(ifs.hesitation(2), Ok(0));
}

#[test]
fn test_set_pair_validation() {
    let universe = UniversalSet::new(0..3);
    let mut ifs = Ifs::new(&universe, 10i32).unwrap();

    assert_eq!(ifs.set_pair(3, (1, 1)), Err(Error::invalid_index(&3)));
    assert_eq!(ifs.set_pair(0, (6, 5)), Err(Error::invalid_pair(&6, &5, &10)));
    assert_eq!(ifs.set_pair(0, (-1, 5)), Err(Error::invalid_pair(&-1, &5, &10)));
    assert_eq!(ifs.get(0), None);

    ifs.set_pair(0, (6, 4)).unwrap();

    assert_eq!(ifs.get(0), Some(Pair::new(6, 4)));
}

#[test]
fn test_get_does_not_fall_back() {
    let universe = UniversalSet::new(0..3);
    let mut ifs = Ifs::new(&universe, 10u32).unwrap();
    let default = Pair::new(1, 1);

    ifs.set_pair(2, (5, 5)).unwrap();

    assert_eq!(ifs.get(0), None);
    assert_eq!(ifs.get_or(0, default), default);
    assert_eq!(ifs.get_or(2, default), Pair::new(5, 5));
    // Not a member, but no error either
    assert_eq!(ifs.get_or(99, default), default);
}

#[test]
fn test_support_and_split() {
    let universe = UniversalSet::new(0..5);
    let mut ifs = Ifs::new(&universe, 10u32).unwrap();

    assert!(ifs.support_indices().is_empty());
    assert!(ifs.elements_split().is_empty());

    ifs.set_pair(3, (2, 2)).unwrap();
    ifs.set_pair(1, (3, 4)).unwrap();
    // Explicitly reset: stored but outside the support
    ifs.set_pair(4, Pair::standard_zero(10)).unwrap();

    assert_eq!(ifs.support_indices(), BTreeSet::from([1, 3]));

    let split = ifs.elements_split();

    assert_eq!(split.indices, vec![1, 3, 4]);
    assert_eq!(split.mus, vec![3, 2, 0]);
    assert_eq!(split.nus, vec![4, 2, 10]);
    assert_eq!(split.pis, vec![3, 6, 0]);
    assert_eq!(ifs.length(), 5);
}

#[test]
fn test_copy_is_independent() {
    let universe = UniversalSet::new(0..4);
    let mut original = Ifs::random(&universe, 30u32).unwrap();
    let mut copy = Ifs::copy_of(&original);

    assert_eq!(copy, original);

    let before = (original.get(0), original.get(1));

    copy.set_pair(0, (0, 30)).unwrap();
    original.set_pair(1, (30, 0)).unwrap();

    // Random pairs never cover the whole range
    assert_ne!(before.0, Some(Pair::new(0, 30)));
    assert_ne!(before.1, Some(Pair::new(30, 0)));
    assert_eq!(original.get(0), before.0);
    assert_eq!(copy.get(1), before.1);
    assert_eq!(copy.get(0), Some(Pair::new(0, 30)));
    assert!(std::ptr::eq(copy.universe(), original.universe()));
}

#[test]
fn test_random_is_deterministic() {
    let universe = UniversalSet::from_range(0..200);
    let first = Ifs::random(&universe, 30u32).unwrap();
    let second = Ifs::random(&universe, 30u32).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.iter().len(), 200);
    assert!(first.iter().all(|(_, pair)| pair.is_valid(30)));
}
