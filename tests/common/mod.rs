//! Shared strategies and configuration for the property tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use keyed_set::{HashKeyedSet, Keyed};
use proptest::prelude::*;

pub fn set_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 200,
        ..ProptestConfig::default()
    }
}

/// An element whose `payload` is invisible to the set. Small id ranges make key collisions between
/// generated sets likely.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged {
    pub id: u8,
    pub payload: u16,
}

impl Keyed for Tagged {
    type Key = u8;

    fn key(&self) -> u8 {
        self.id
    }
}

pub fn tagged() -> impl Strategy<Value = Tagged> {
    (0u8..24, any::<u16>()).prop_map(|(id, payload)| Tagged { id, payload })
}

pub fn tagged_vec() -> impl Strategy<Value = Vec<Tagged>> {
    prop::collection::vec(tagged(), 0..32)
}

pub fn tagged_set() -> impl Strategy<Value = HashKeyedSet<Tagged>> {
    tagged_vec().prop_map(HashKeyedSet::<Tagged>::from_elements)
}

/// The key set of `set`, ordered so that it can be compared positionally.
pub fn key_set<T: Keyed<Key = u8>, B>(set: &HashKeyedSet<T, B>) -> BTreeSet<u8> {
    set.keys().copied().collect()
}
