use std::collections::BTreeSet;
use std::ops::Range;

/// The fixed, finite domain of element indices a set is defined over.
///
/// A universe has no mutators: once built, its indices never change, so any
/// number of sets may borrow it for as long as they live.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UniversalSet<I>(BTreeSet<I>);

impl<I: Copy + Ord> UniversalSet<I> {
    pub fn new(indices: impl IntoIterator<Item = I>) -> Self {
        Self(indices.into_iter().collect())
    }

    /// Valid element identifiers, in ascending order
    pub fn indices(&self) -> &BTreeSet<I> {
        &self.0
    }

    pub fn contains(&self, index: &I) -> bool {
        self.0.contains(index)
    }

    pub fn length(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl UniversalSet<usize> {
    /// Universe of the consecutive indices `range.start..range.end`.
    pub fn from_range(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

impl<I: Copy + Ord> FromIterator<I> for UniversalSet<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[test]
fn test_universe() {
    let universe = UniversalSet::new([2, 0, 1, 2]);

    assert_eq!(universe.length(), 3);
    assert!(universe.contains(&0));
    assert!(!universe.contains(&3));
    assert_eq!(universe.indices().iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);

    let from_range = UniversalSet::from_range(0..200);

    assert_eq!(from_range.length(), 200);
    assert!(from_range.contains(&199));
    assert!(!from_range.contains(&200));
    assert!(UniversalSet::<u8>::default().is_empty());
}
