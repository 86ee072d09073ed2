use std::collections::BTreeSet;

use ifs_core::{ElementsSplit, Error, Ifs, Pair, UniversalSet, DEFAULT_SEED};

#[test]
fn test_single_write() {
    let universe = UniversalSet::new([0, 1, 2]);
    let mut ifs = Ifs::new(&universe, 10u32).unwrap();

    ifs.set_pair(1, (3, 4)).unwrap();

    assert_eq!(ifs.get_pair(0), Ok(Pair::new(0, 10)));
    assert_eq!(ifs.get_pair(1), Ok(Pair::new(3, 4)));
    assert_eq!(ifs.support_indices(), BTreeSet::from([1]));
    assert_eq!(
        ifs.elements_split(),
        ElementsSplit {
            indices: vec![1],
            mus: vec![3],
            nus: vec![4],
            pis: vec![3],
        }
    );
}

#[test]
fn test_out_of_universe() {
    let universe = UniversalSet::new([0, 1, 2]);
    let mut ifs = Ifs::new(&universe, 10u32).unwrap();

    let err = ifs.get_pair(99).unwrap_err();

    assert_eq!(err, Error::InvalidIndex { index: "99".into() });
    assert_eq!(err.to_string(), "99 is not a valid index");
    assert!(matches!(ifs.set_pair(99, (1, 1)), Err(Error::InvalidIndex { .. })));
    assert!(matches!(ifs.hesitation(99), Err(Error::InvalidIndex { .. })));
}

#[test]
fn test_random_covers_universe() {
    let universe = UniversalSet::from_range(0..200);
    let ifs = Ifs::random(&universe, 30u32).unwrap();
    let split = ifs.elements_split();

    assert_eq!(ifs.length(), 200);
    assert_eq!(split.indices, universe.indices().iter().copied().collect::<Vec<_>>());
    assert_eq!(ifs.support_indices().len(), 200);
}

#[test]
fn test_seeds() {
    let universe = UniversalSet::from_range(0..50);
    let default = Ifs::random(&universe, 30u32).unwrap();
    let seeded = Ifs::random_with_seed(&universe, 30u32, DEFAULT_SEED).unwrap();
    let other = Ifs::random_with_seed(&universe, 30u32, DEFAULT_SEED + 1).unwrap();

    assert_eq!(default, seeded);
    // 50 elements drawn from 435 possible pairs each
    assert_ne!(default, other);
}

#[test]
fn test_float_degrees() {
    let universe = UniversalSet::new(['a', 'b', 'c']);
    let mut ifs = Ifs::new(&universe, 1.0f64).unwrap();

    ifs.set_pair('b', (0.25, 0.5)).unwrap();

    assert_eq!(ifs.get_pair('a'), Ok(Pair::standard_zero(1.)));
    assert_eq!(ifs.hesitation('b'), Ok(0.25));
    assert!(matches!(ifs.set_pair('c', (0.75, 0.5)), Err(Error::InvalidPair { .. })));
    assert!(matches!(ifs.set_pair('c', (f64::NAN, 0.)), Err(Error::InvalidPair { .. })));
    assert_eq!(ifs.support_indices(), BTreeSet::from(['b']));
}
