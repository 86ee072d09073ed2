use num::Num;

use crate::element::Pair;

/// Stored elements of a set broken into parallel sequences, ordered by index.
///
/// The k-th entry of every sequence belongs to the same element, and
/// `pis[k] == range - mus[k] - nus[k]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementsSplit<I, D> {
    pub indices: Vec<I>,
    pub mus: Vec<D>,
    pub nus: Vec<D>,
    pub pis: Vec<D>,
}

impl<I, D: Num + Copy + PartialOrd> ElementsSplit<I, D> {
    /// `elements` must already be in ascending index order.
    pub(crate) fn new(elements: impl ExactSizeIterator<Item = (I, Pair<D>)>, range: D) -> Self {
        let len = elements.len();
        let mut split = Self {
            indices: Vec::with_capacity(len),
            mus: Vec::with_capacity(len),
            nus: Vec::with_capacity(len),
            pis: Vec::with_capacity(len),
        };

        for (index, pair) in elements {
            split.indices.push(index);
            split.mus.push(pair.mu);
            split.nus.push(pair.nu);
            split.pis.push(pair.hesitation(range));
        }

        split
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The four sequences as a tuple, in the order indices, mus, nus, pis.
    pub fn into_parts(self) -> (Vec<I>, Vec<D>, Vec<D>, Vec<D>) {
        (self.indices, self.mus, self.nus, self.pis)
    }
}

#[test]
fn test_split() {
    let elements = vec![(1, Pair::new(3u32, 4)), (4, Pair::new(0, 10)), (7, Pair::new(10, 0))];
    let split = ElementsSplit::new(elements.into_iter(), 10);

    assert_eq!(split.len(), 3);
    assert_eq!(
        split.into_parts(),
        (vec![1, 4, 7], vec![3, 0, 10], vec![4, 10, 0], vec![3, 0, 0])
    );
}

#[test]
fn test_empty_split() {
    let split = ElementsSplit::<usize, u32>::new(std::iter::empty(), 10);

    assert!(split.is_empty());
    assert_eq!(split, ElementsSplit::default());
}
