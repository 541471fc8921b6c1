use std::hash::BuildHasher;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::HashKeyedSet;
use crate::Keyed;

/// Returns a new set holding every element of `s1` and `s2`. Where both hold an element for the
/// same key, the result keeps `s2`'s.
pub fn union<T, B>(s1: &HashKeyedSet<T, B>, s2: &HashKeyedSet<T, B>) -> HashKeyedSet<T, B>
where
    T: Keyed + Clone,
    B: BuildHasher + Clone,
{
    let mut result = s1.clone();
    result.union_in_place(s2);
    result
}

/// Returns a new set holding the elements of `s1` whose keys are also in `s2`. The elements are
/// taken from `s1`.
pub fn intersect<T, B>(s1: &HashKeyedSet<T, B>, s2: &HashKeyedSet<T, B>) -> HashKeyedSet<T, B>
where
    T: Keyed + Clone,
    B: BuildHasher + Clone,
{
    let mut result = HashKeyedSet::with_hasher(s1.hasher().clone());
    result.extend(s1.intersection(s2).cloned());
    result
}

/// Returns a new set holding the elements of `s1` whose keys are not in `s2`.
pub fn difference<T, B>(s1: &HashKeyedSet<T, B>, s2: &HashKeyedSet<T, B>) -> HashKeyedSet<T, B>
where
    T: Keyed + Clone,
    B: BuildHasher + Clone,
{
    let mut result = HashKeyedSet::with_hasher(s1.hasher().clone());
    result.extend(s1.difference(s2).cloned());
    result
}

/// Returns a new set holding the elements whose keys are in exactly one of `s1` and `s2`.
pub fn symmetric_difference<T, B>(
    s1: &HashKeyedSet<T, B>,
    s2: &HashKeyedSet<T, B>,
) -> HashKeyedSet<T, B>
where
    T: Keyed + Clone,
    B: BuildHasher + Clone,
{
    let mut result = s1.clone();
    result.symmetric_difference_in_place(s2);
    result
}

/// See [`HashKeyedSet::is_subset`].
pub fn is_subset<T: Keyed, B: BuildHasher>(
    s1: &HashKeyedSet<T, B>,
    s2: &HashKeyedSet<T, B>,
) -> bool {
    s1.is_subset(s2)
}

/// See [`HashKeyedSet::is_superset`].
pub fn is_superset<T: Keyed, B: BuildHasher>(
    s1: &HashKeyedSet<T, B>,
    s2: &HashKeyedSet<T, B>,
) -> bool {
    s1.is_superset(s2)
}

/// See [`HashKeyedSet::is_disjoint`].
pub fn is_disjoint<T: Keyed, B: BuildHasher>(
    s1: &HashKeyedSet<T, B>,
    s2: &HashKeyedSet<T, B>,
) -> bool {
    s1.is_disjoint(s2)
}

/// See [`HashKeyedSet::equal`].
pub fn equal<T: Keyed, B: BuildHasher>(
    s1: &HashKeyedSet<T, B>,
    s2: &HashKeyedSet<T, B>,
) -> bool {
    s1.equal(s2)
}

impl<T: Keyed + Clone, B: BuildHasher + Clone> BitOr for &HashKeyedSet<T, B> {
    type Output = HashKeyedSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        union(self, rhs)
    }
}

impl<T: Keyed, B: BuildHasher> BitOrAssign for HashKeyedSet<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs)
    }
}

impl<T: Keyed + Clone, B: BuildHasher + Clone> BitAnd for &HashKeyedSet<T, B> {
    type Output = HashKeyedSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        intersect(self, rhs)
    }
}

impl<T: Keyed, B: BuildHasher> BitAndAssign for HashKeyedSet<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.intersect_in_place(&rhs)
    }
}

impl<T: Keyed + Clone, B: BuildHasher + Clone> BitXor for &HashKeyedSet<T, B> {
    type Output = HashKeyedSet<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        symmetric_difference(self, rhs)
    }
}

impl<T: Keyed, B: BuildHasher> BitXorAssign for HashKeyedSet<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.toggle_entries(rhs.inner)
    }
}

impl<T: Keyed + Clone, B: BuildHasher + Clone> Sub for &HashKeyedSet<T, B> {
    type Output = HashKeyedSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        difference(self, rhs)
    }
}

impl<T: Keyed, B: BuildHasher> SubAssign for HashKeyedSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        self.difference_in_place(&rhs)
    }
}
