use std::hash::BuildHasher;
use std::iter::{Chain, FusedIterator};

use hashbrown::hash_map::{self, IntoValues, Values};

use super::HashKeyedSet;
use crate::Keyed;

impl<T: Keyed, B> IntoIterator for HashKeyedSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_values())
    }
}

/// A type for owned iteration over a [`HashKeyedSet`]. Produces values of type `T`.
pub struct IntoIter<T: Keyed>(pub(crate) IntoValues<T::Key, T>);

impl<T: Keyed> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T: Keyed> ExactSizeIterator for IntoIter<T> {}

impl<T: Keyed> FusedIterator for IntoIter<T> {}

impl<'a, T: Keyed, B> IntoIterator for &'a HashKeyedSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.values())
    }
}

/// A type for borrowed iteration over a [`HashKeyedSet`]. Produces values of type `&T`.
///
/// See [`HashKeyedSet::iter`].
pub struct Iter<'a, T: Keyed>(pub(crate) Values<'a, T::Key, T>);

impl<'a, T: Keyed> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T: Keyed> ExactSizeIterator for Iter<'_, T> {}

impl<T: Keyed> FusedIterator for Iter<'_, T> {}

/// An iterator over the keys of a [`HashKeyedSet`].
///
/// See [`HashKeyedSet::keys`].
pub struct Keys<'a, T: Keyed>(pub(crate) hash_map::Keys<'a, T::Key, T>);

impl<'a, T: Keyed> Iterator for Keys<'a, T> {
    type Item = &'a T::Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T: Keyed> ExactSizeIterator for Keys<'_, T> {}

impl<T: Keyed> FusedIterator for Keys<'_, T> {}

/// A lazy view over the elements of one set whose keys are absent from another.
///
/// See [`HashKeyedSet::difference`].
pub struct Difference<'a, T: Keyed, B> {
    pub(crate) inner: hash_map::Iter<'a, T::Key, T>,
    pub(crate) other: &'a HashKeyedSet<T, B>,
}

impl<'a, T: Keyed, B: BuildHasher> Iterator for Difference<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner
            .find(|(key, _)| !other.inner.contains_key(*key))
            .map(|(_, elem)| elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T: Keyed, B: BuildHasher> FusedIterator for Difference<'_, T, B> {}

/// A lazy view over the elements whose keys are in exactly one of two sets.
///
/// See [`HashKeyedSet::symmetric_difference`].
pub struct SymmetricDifference<'a, T: Keyed, B> {
    pub(crate) inner: Chain<Difference<'a, T, B>, Difference<'a, T, B>>,
}

impl<'a, T: Keyed, B: BuildHasher> Iterator for SymmetricDifference<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Keyed, B: BuildHasher> FusedIterator for SymmetricDifference<'_, T, B> {}

/// A lazy view over the elements of one set whose keys are also present in another.
///
/// See [`HashKeyedSet::intersection`].
pub struct Intersection<'a, T: Keyed, B> {
    pub(crate) inner: hash_map::Iter<'a, T::Key, T>,
    pub(crate) other: &'a HashKeyedSet<T, B>,
}

impl<'a, T: Keyed, B: BuildHasher> Iterator for Intersection<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner
            .find(|(key, _)| other.inner.contains_key(*key))
            .map(|(_, elem)| elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T: Keyed, B: BuildHasher> FusedIterator for Intersection<'_, T, B> {}

/// A lazy view over the elements whose keys are in either of two sets, each key produced once.
///
/// See [`HashKeyedSet::union`].
pub struct Union<'a, T: Keyed, B> {
    pub(crate) inner: Chain<Iter<'a, T>, Difference<'a, T, B>>,
}

impl<'a, T: Keyed, B: BuildHasher> Iterator for Union<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Keyed, B: BuildHasher> FusedIterator for Union<'_, T, B> {}
