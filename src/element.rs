use num::Num;

/// Membership and non-membership degrees of a single element.
///
/// A pair only has meaning relative to a range `R`: it is valid when both
/// degrees are non-negative and `mu + nu <= R`, and what is left over is the
/// hesitation `R - mu - nu`.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Pair<D> {
    pub mu: D,
    pub nu: D,
}

impl<D: Num + Copy + PartialOrd> Pair<D> {
    pub fn new(mu: D, nu: D) -> Self {
        Self { mu, nu }
    }

    /// `(0, range)`: no membership at all. Elements without a stored pair have
    /// this value.
    pub fn standard_zero(range: D) -> Self {
        Self::new(D::zero(), range)
    }

    /// `(range, 0)`: full membership.
    pub fn standard_one(range: D) -> Self {
        Self::new(range, D::zero())
    }

    pub fn is_standard_zero(&self, range: D) -> bool {
        *self == Self::standard_zero(range)
    }

    /// NaN degrees are never valid.
    pub fn is_valid(&self, range: D) -> bool {
        let zero = D::zero();

        // Subtract rather than add so integer degrees can't overflow
        self.mu >= zero && self.nu >= zero && self.mu <= range && self.nu <= range - self.mu
    }

    /// The hesitation degree `range - mu - nu`.
    ///
    /// Only meaningful for a pair that is valid for `range`; with unsigned
    /// degrees an invalid pair would underflow.
    pub fn hesitation(&self, range: D) -> D {
        range - self.mu - self.nu
    }

    pub fn has_zero_hesitation(&self, range: D) -> bool {
        self.hesitation(range) == D::zero()
    }
}

impl<D> From<(D, D)> for Pair<D> {
    fn from((mu, nu): (D, D)) -> Self {
        Pair { mu, nu }
    }
}

impl<D> From<Pair<D>> for (D, D) {
    fn from(pair: Pair<D>) -> Self {
        (pair.mu, pair.nu)
    }
}

#[test]
fn test_standard_pairs() {
    assert_eq!(Pair::standard_zero(10u32), Pair::new(0, 10));
    assert_eq!(Pair::standard_one(10u32), Pair::new(10, 0));
    assert!(Pair::new(0u32, 10).is_standard_zero(10));
    assert!(!Pair::new(0u32, 9).is_standard_zero(10));
    assert!(Pair::standard_one(10u32).has_zero_hesitation(10));
    assert!(!Pair::new(3u32, 4).has_zero_hesitation(10));
}

#[test]
fn test_validity() {
    assert!(Pair::new(3u32, 4).is_valid(10));
    assert!(Pair::new(6u32, 4).is_valid(10));
    assert!(!Pair::new(6u32, 5).is_valid(10));
    assert!(!Pair::new(-1i32, 5).is_valid(10));
    assert!(!Pair::new(0.5f64, f64::NAN).is_valid(1.));
    assert!(Pair::new(0.25f64, 0.5).is_valid(1.));
}

#[test]
fn test_hesitation_and_tuples() {
    let pair: Pair<u32> = (3, 4).into();

    assert_eq!(pair.hesitation(10), 3);
    assert_eq!(<(u32, u32)>::from(pair), (3, 4));
    assert_eq!(Pair::new(0.25f64, 0.5).hesitation(1.), 0.25);
}
