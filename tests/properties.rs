//! Property tests for generation, access and the derived views.

use ifs_core::{Error, Ifs, Pair, UniversalSet};
use proptest::prelude::*;

/// Universes of up to 64 small indices, possibly sparse.
fn universe() -> impl Strategy<Value = UniversalSet<u16>> {
    prop::collection::btree_set(0u16..512, 0..64).prop_map(UniversalSet::new)
}

/// Writes that may or may not be valid for a range of 20.
fn writes() -> impl Strategy<Value = Vec<(u16, u32, u32)>> {
    prop::collection::vec((0u16..512, 0u32..=20, 0u32..=20), 0..32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn random_pairs_are_valid(universe in universe(), range in 2u32..500) {
        let ifs = Ifs::random(&universe, range).unwrap();

        prop_assert_eq!(ifs.iter().len(), universe.length());

        for index in universe.indices() {
            let pair = ifs.get_pair(*index).unwrap();

            prop_assert!(pair.mu + pair.nu <= range);
        }
    }

    #[test]
    fn random_is_deterministic(universe in universe(), range in 2u32..500) {
        let first = Ifs::random(&universe, range).unwrap();
        let second = Ifs::random(&universe, range).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn copies_are_independent(universe in universe(), mu in 0u32..=10, seed in any::<u64>()) {
        let original = Ifs::random_with_seed(&universe, 10u32, seed).unwrap();
        let mut copy = Ifs::copy_of(&original);
        let snapshot = original.clone();

        for index in universe.indices() {
            copy.set_pair(*index, (mu, 10 - mu)).unwrap();
        }

        prop_assert_eq!(&original, &snapshot);
    }

    #[test]
    fn writes_respect_universe_and_range(universe in universe(), writes in writes()) {
        let mut ifs = Ifs::new(&universe, 20u32).unwrap();

        for (index, mu, nu) in writes {
            let result = ifs.set_pair(index, (mu, nu));

            if !universe.contains(&index) {
                prop_assert!(matches!(result, Err(Error::InvalidIndex { .. })), "index outside the universe was accepted");
                prop_assert!(matches!(ifs.get_pair(index), Err(Error::InvalidIndex { .. })), "index outside the universe was read");
            } else if mu + nu > 20 {
                prop_assert!(matches!(result, Err(Error::InvalidPair { .. })), "invalid pair was accepted");
            } else {
                prop_assert!(result.is_ok());
                prop_assert_eq!(ifs.get_pair(index).unwrap(), Pair::new(mu, nu));
            }
        }

        for index in universe.indices() {
            if ifs.get(*index).is_none() {
                prop_assert_eq!(ifs.get_pair(*index).unwrap(), Pair::standard_zero(20));
            }
        }
    }

    #[test]
    fn support_and_split_agree(universe in universe(), writes in writes()) {
        let mut ifs = Ifs::new(&universe, 20u32).unwrap();

        for (index, mu, nu) in writes {
            // Invalid writes are rejected and don't matter here
            let _ = ifs.set_pair(index, (mu, nu));
        }

        let support = ifs.support_indices();

        prop_assert!(support.is_subset(universe.indices()));

        for (index, pair) in ifs.iter() {
            prop_assert_eq!(support.contains(&index), pair != Pair::standard_zero(20));
        }

        let split = ifs.elements_split();
        let len = split.len();

        prop_assert_eq!(split.mus.len(), len);
        prop_assert_eq!(split.nus.len(), len);
        prop_assert_eq!(split.pis.len(), len);
        prop_assert!(split.indices.windows(2).all(|w| w[0] < w[1]));

        for k in 0..len {
            prop_assert_eq!(split.pis[k], 20 - split.mus[k] - split.nus[k]);
        }
    }
}
