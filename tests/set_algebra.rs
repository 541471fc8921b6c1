//! Property-based tests for HashKeyedSet
//!
//! These check the laws the set algebra must satisfy whatever the contents:
//! - Membership follows add and remove
//! - Adding is idempotent
//! - Union is commutative over keys
//! - Intersection and difference partition the left operand
//! - Subset is reflexive, and the empty set sits below everything
//! - Equality holds with a clone and breaks when the clone gains a key

mod common;

use std::collections::BTreeSet;

use common::*;
use keyed_set::HashKeyedSet;
use keyed_set::set::{difference, equal, intersect, is_disjoint, is_subset, is_superset, union};
use proptest::prelude::*;

proptest! {
    #![proptest_config(set_config())]

    #[test]
    fn membership_follows_add_and_remove(mut set in tagged_set(), elem in tagged()) {
        set.add(elem.clone());
        prop_assert!(set.has(&elem));

        set.remove(&elem);
        prop_assert!(!set.has(&elem));
    }

    #[test]
    fn add_is_idempotent(mut set in tagged_set(), elem in tagged()) {
        set.add(elem.clone());
        let once = set.size();
        set.add(elem);
        prop_assert_eq!(set.size(), once);
    }

    #[test]
    fn from_elements_keeps_last_occurrence(elems in tagged_vec()) {
        let set = HashKeyedSet::from_elements(elems.clone());

        let keys = elems.iter().map(|e| e.id).collect::<BTreeSet<_>>();
        prop_assert_eq!(key_set(&set), keys);

        for elem in &set {
            let last = elems.iter().rev().find(|e| e.id == elem.id);
            prop_assert_eq!(Some(elem), last);
        }
    }

    #[test]
    fn union_is_commutative_over_keys(a in tagged_set(), b in tagged_set()) {
        let ab = union(&a, &b);
        let ba = union(&b, &a);
        prop_assert_eq!(key_set(&ab), key_set(&ba));
        prop_assert!(equal(&ab, &ba));

        let expected = key_set(&a).union(&key_set(&b)).copied().collect::<BTreeSet<_>>();
        prop_assert_eq!(key_set(&ab), expected);
    }

    #[test]
    fn union_prefers_right_operand(a in tagged_set(), b in tagged_set()) {
        let ab = union(&a, &b);
        for elem in &b {
            prop_assert_eq!(ab.get(&elem.id), Some(elem));
        }
    }

    #[test]
    fn intersection_and_difference_partition(a in tagged_set(), b in tagged_set()) {
        let common = intersect(&a, &b);
        let only_a = difference(&a, &b);

        prop_assert!(is_disjoint(&common, &only_a));
        prop_assert!(equal(&union(&common, &only_a), &a));
        prop_assert_eq!(common.size() + only_a.size(), a.size());

        for elem in &common {
            prop_assert_eq!(a.get(&elem.id), Some(elem), "intersect should keep the left element");
        }
    }

    #[test]
    fn in_place_ops_match_free_functions(a in tagged_set(), b in tagged_set()) {
        let mut u = a.clone();
        u.union_in_place(&b);
        prop_assert!(equal(&u, &union(&a, &b)));

        let mut i = a.clone();
        i.intersect_in_place(&b);
        prop_assert!(equal(&i, &intersect(&a, &b)));

        let mut d = a.clone();
        d.difference_in_place(&b);
        prop_assert!(equal(&d, &difference(&a, &b)));
    }

    #[test]
    fn subset_extremes(set in tagged_set()) {
        let empty = HashKeyedSet::<Tagged>::new();

        prop_assert!(is_subset(&set, &set));
        prop_assert!(is_subset(&empty, &set));
        prop_assert_eq!(is_subset(&set, &empty), set.is_empty());
        prop_assert!(is_superset(&set, &empty));
    }

    #[test]
    fn subset_agrees_with_keys(a in tagged_set(), b in tagged_set()) {
        let expected = key_set(&a).is_subset(&key_set(&b));
        prop_assert_eq!(is_subset(&a, &b), expected);
        prop_assert_eq!(is_superset(&b, &a), expected);
        prop_assert_eq!(is_disjoint(&a, &b), key_set(&a).is_disjoint(&key_set(&b)));
    }

    #[test]
    fn equality_with_clone(set in tagged_set(), extra in tagged()) {
        let mut copy = set.clone();
        prop_assert!(equal(&set, &copy));

        if !set.has(&extra) {
            copy.add(extra);
            prop_assert!(!equal(&set, &copy));
        }
    }

    #[test]
    fn to_list_matches_contents(set in tagged_set()) {
        let list = set.to_list();
        prop_assert_eq!(list.len(), set.size());
        prop_assert_eq!(list.iter().map(|e| e.id).collect::<BTreeSet<_>>(), key_set(&set));
    }
}
