//! A set whose members are identified by a key derived from each element, rather than by the
//! element itself.
//!
//! # Purpose
//! Plenty of domain types can name their own identity (an id field, a path, a handle) without
//! being [`Eq`] or [`Hash`](std::hash::Hash) as a whole. [`HashKeyedSet`] lets those types be
//! collected with full set semantics: two elements are the same member if and only if their
//! [`Keyed::key`]s are equal, whatever else they contain.
//!
//! # Method
//! Internally the set is a map from key to element, so adding an element whose key is already
//! present replaces the stored element. Every algebraic operation (union, intersection,
//! difference, symmetric difference, subset tests and equality) is expressed over the key space.
//!
//! Elements may be stored by value or through a shared form (`&T`, [`Rc`](std::rc::Rc),
//! [`Arc`](std::sync::Arc), [`Box`]) as [`Keyed`] is implemented for all of them. The set never
//! assumes that it is the only owner of what an element points to.
//!
//! # Ordering
//! There is none. Iteration, [`HashKeyedSet::to_list`] and every lazy view visit elements in an
//! unspecified order that may differ between calls.
//!
//! # Error Handling
//! Every operation is total, apart from [`HashKeyedSet::try_add`], which refuses to overwrite
//! and hands the element back inside an [`Occupied`] error.
//!
//! # Features
//! - `fx` (default): adds [`FxHashKeyedSet`], a set using the `rustc-hash` hasher.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod keyed;
pub mod set;

pub(crate) mod util;

#[doc(inline)]
pub use keyed::Keyed;
#[doc(inline)]
pub use set::{HashKeyedSet, Occupied};
#[cfg(feature = "fx")]
#[doc(inline)]
pub use set::FxHashKeyedSet;
