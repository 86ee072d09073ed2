use std::fmt::Debug;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the set's validated operations.
///
/// Offending values are kept as their `Debug` rendering so the error does not
/// carry the index or degree type parameters.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The index is not a member of the universe the set is defined over.
    #[error("{index} is not a valid index")]
    InvalidIndex { index: String },

    /// The range does not satisfy the operation's precondition.
    #[error("range {range} is invalid, expected {expected}")]
    InvalidRange { range: String, expected: &'static str },

    /// The pair breaks `mu >= 0`, `nu >= 0` or `mu + nu <= range`.
    #[error("pair ({mu}, {nu}) is not valid for range {range}")]
    InvalidPair { mu: String, nu: String, range: String },
}

impl Error {
    pub(crate) fn invalid_index<I: Debug>(index: &I) -> Self {
        Error::InvalidIndex {
            index: format!("{index:?}"),
        }
    }

    pub(crate) fn invalid_range<D: Debug>(range: &D, expected: &'static str) -> Self {
        Error::InvalidRange {
            range: format!("{range:?}"),
            expected,
        }
    }

    pub(crate) fn invalid_pair<D: Debug>(mu: &D, nu: &D, range: &D) -> Self {
        Error::InvalidPair {
            mu: format!("{mu:?}"),
            nu: format!("{nu:?}"),
            range: format!("{range:?}"),
        }
    }
}

#[test]
fn test_messages() {
    assert_eq!(Error::invalid_index(&99).to_string(), "99 is not a valid index");
    assert_eq!(
        Error::invalid_range(&1u32, "a range of at least 2").to_string(),
        "range 1 is invalid, expected a range of at least 2"
    );
    assert_eq!(
        Error::invalid_pair(&6, &5, &10).to_string(),
        "pair (6, 5) is not valid for range 10"
    );
}
