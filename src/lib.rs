//! Intuitionistic fuzzy sets over a finite, indexed universe.
//!
//! Every element of the universe carries a membership degree `mu` and a
//! non-membership degree `nu`, both non-negative with `mu + nu <= range`. The
//! remainder `range - mu - nu` is the element's hesitation.
//!
//! ```
//! use ifs_core::{Ifs, Pair, UniversalSet};
//!
//! let universe = UniversalSet::new(0..3);
//! let mut ifs = Ifs::new(&universe, 10u32)?;
//!
//! ifs.set_pair(1, (3, 4))?;
//!
//! assert_eq!(ifs.get_pair(0)?, Pair::new(0, 10));
//! assert_eq!(ifs.elements_split().into_parts(), (vec![1], vec![3], vec![4], vec![3]));
//! # Ok::<(), ifs_core::Error>(())
//! ```

mod element;
mod error;
mod ifs;
mod random;
mod split;
mod universe;

pub use element::Pair;
pub use error::{Error, Result};
pub use ifs::Ifs;
pub use random::DEFAULT_SEED;
pub use split::ElementsSplit;
pub use universe::UniversalSet;
