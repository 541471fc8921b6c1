//! A module containing [`HashKeyedSet`] and associated types.
//!
//! Some of these types provide owned and borrowed iteration over a set's elements while others
//! are lazy views over the result of set operations on two HashKeyedSets. The free functions
//! ([`union`], [`intersect`], [`difference`], ...) build new sets from borrowed operands.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating an element
//! in a way that changes its key would break the set.

mod error;
mod hash_keyed_set;
mod iter;
mod ops;

pub use error::*;
pub use hash_keyed_set::*;
pub use iter::*;
pub use ops::*;

/// A [`HashKeyedSet`] hashing its keys with the fast, non-DoS-resistant hasher from
/// `rustc-hash`.
#[cfg(feature = "fx")]
pub type FxHashKeyedSet<T> = HashKeyedSet<T, rustc_hash::FxBuildHasher>;
