use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};

use hashbrown::HashMap;
use hashbrown::hash_map::{DefaultHashBuilder, Entry};
use log::trace;

use super::{Difference, Intersection, Iter, Keys, Occupied, SymmetricDifference, Union};
use crate::Keyed;
use crate::util::fmt::write_set_contents;

/// A set of elements identified by their [`Keyed::key`], rather than by [`Eq`] on the elements
/// themselves.
///
/// Membership is decided by key alone: adding an element whose key is already present replaces
/// the stored element (last write wins), and [`has`](HashKeyedSet::has) reports an element as
/// present whenever any element with the same key is stored, no matter how the two differ
/// otherwise.
///
/// `B` is the [`BuildHasher`] used by the backing table to hash keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in `self`.
/// - `m`: The number of elements in `other`.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `add` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `has` | `O(1)`* |
/// | `union_in_place` | `O(m)` |
/// | `intersect_in_place` | `O(n)` |
/// | `difference_in_place` | `O(n)` |
/// | `is_subset` / `is_disjoint` / `equal` | `O(n)` |
/// | `to_list` / `clone` | `O(n)` |
///
/// \* Amortized, plus the cost of [`Keyed::key`].
#[derive(Clone)]
pub struct HashKeyedSet<T: Keyed, B = DefaultHashBuilder> {
    pub(crate) inner: HashMap<T::Key, T, B>,
}

impl<T: Keyed> HashKeyedSet<T, DefaultHashBuilder> {
    /// Creates a new, empty HashKeyedSet. Memory is allocated on the first insertion.
    pub fn new() -> HashKeyedSet<T> {
        HashKeyedSet::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates a new HashKeyedSet able to hold at least `cap` elements without reallocating.
    pub fn with_cap(cap: usize) -> HashKeyedSet<T> {
        HashKeyedSet::with_cap_and_hasher(cap, DefaultHashBuilder::default())
    }

    /// Creates a HashKeyedSet containing every element of `elements`, added in order. Elements
    /// sharing a key collapse into the last one encountered.
    pub fn from_elements<I: IntoIterator<Item = T>>(elements: I) -> HashKeyedSet<T> {
        elements.into_iter().collect()
    }
}

impl<T: Keyed, B> HashKeyedSet<T, B> {
    /// Creates a new, empty HashKeyedSet which will use `hasher` to hash keys.
    pub fn with_hasher(hasher: B) -> HashKeyedSet<T, B> {
        HashKeyedSet {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new HashKeyedSet with at least capacity `cap`, which will use `hasher` to hash
    /// keys.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashKeyedSet<T, B> {
        HashKeyedSet {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of distinct keys in the set.
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    /// Returns the number of distinct keys in the set. Equivalent to
    /// [`size`](HashKeyedSet::size).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the set's [`BuildHasher`].
    pub fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Returns an iterator over all elements in the set, as references, in no particular order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the keys of all elements in the set.
    pub fn keys(&self) -> Keys<'_, T> {
        Keys(self.inner.keys())
    }

    /// Collects a snapshot of every element into a [`Vec`]. The order is unspecified and may
    /// differ between calls.
    pub fn to_list(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.values().cloned().collect()
    }

    /// Removes all elements, keeping the allocated memory.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Keeps only the elements for which `pred` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut pred: F) {
        self.inner.retain(|_, elem| pred(elem))
    }
}

impl<T: Keyed, B: BuildHasher> HashKeyedSet<T, B> {
    /// Adds `elem` to the set under its key. If an element with the same key was already present,
    /// it is replaced and returned.
    pub fn add(&mut self, elem: T) -> Option<T> {
        self.inner.insert(elem.key(), elem)
    }

    /// Adds `elem` only if no element with the same key is present. Otherwise the set is left
    /// unchanged and `elem` is returned inside the error.
    pub fn try_add(&mut self, elem: T) -> Result<(), Occupied<T>> {
        match self.inner.entry(elem.key()) {
            Entry::Occupied(_) => Err(Occupied { element: elem }),
            Entry::Vacant(slot) => {
                slot.insert(elem);
                Ok(())
            },
        }
    }

    /// Removes the element sharing a key with `elem`, returning it if there was one.
    ///
    /// `elem` only needs to produce the same kind of key, so a set of `&E` can be queried with a
    /// plain `&E` that does not outlive the set's borrow.
    pub fn remove<Q: Keyed<Key = T::Key> + ?Sized>(&mut self, elem: &Q) -> Option<T> {
        self.inner.remove(&elem.key())
    }

    /// Removes the element stored under `key`, returning it if there was one.
    pub fn remove_key<Q>(&mut self, key: &Q) -> Option<T>
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(key)
    }

    /// Returns true if an element with the same key as `elem` is present. Only keys are
    /// compared: the stored element may differ from `elem` in every other respect.
    pub fn has<Q: Keyed<Key = T::Key> + ?Sized>(&self, elem: &Q) -> bool {
        self.inner.contains_key(&elem.key())
    }

    /// Returns true if an element is stored under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Returns the element stored under `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T::Key: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    /// Returns the stored element which shares a key with `elem`, if any.
    pub fn get_like<Q: Keyed<Key = T::Key> + ?Sized>(&self, elem: &Q) -> Option<&T> {
        self.inner.get(&elem.key())
    }

    /// Reserves capacity for at least `extra` more elements.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Shrinks the capacity of the set as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit()
    }

    /// Adds every element of `other` to `self`. Where both sets hold an element for the same key,
    /// `other`'s element replaces the one in `self`.
    pub fn union_in_place(&mut self, other: &HashKeyedSet<T, B>)
    where
        T: Clone,
    {
        let before = self.len();
        for (key, elem) in &other.inner {
            self.inner.insert(key.clone(), elem.clone());
        }
        trace!("union_in_place: {} of {} elements were new", self.len() - before, other.len());
    }

    /// Removes every element of `self` whose key is not present in `other`.
    pub fn intersect_in_place(&mut self, other: &HashKeyedSet<T, B>) {
        let before = self.len();
        self.inner.retain(|key, _| other.inner.contains_key(key));
        trace!("intersect_in_place: removed {} of {} elements", before - self.len(), before);
    }

    /// Removes every element of `self` whose key is present in `other`.
    pub fn difference_in_place(&mut self, other: &HashKeyedSet<T, B>) {
        let before = self.len();
        self.inner.retain(|key, _| !other.inner.contains_key(key));
        trace!("difference_in_place: removed {} of {} elements", before - self.len(), before);
    }

    /// Leaves `self` holding the elements whose keys are in exactly one of `self` and `other`.
    pub fn symmetric_difference_in_place(&mut self, other: &HashKeyedSet<T, B>)
    where
        T: Clone,
    {
        self.toggle_entries(other.inner.iter().map(|(key, elem)| (key.clone(), elem.clone())));
    }

    /// Removes every entry whose key is already present and inserts the rest.
    pub(crate) fn toggle_entries<I: IntoIterator<Item = (T::Key, T)>>(&mut self, entries: I) {
        let (mut added, mut removed) = (0_usize, 0_usize);
        for (key, elem) in entries {
            if self.inner.remove(&key).is_some() {
                removed += 1;
            } else {
                self.inner.insert(key, elem);
                added += 1;
            }
        }
        trace!("symmetric difference: added {added}, removed {removed}");
    }

    /// Returns true if every key in `self` is also in `other`. (`self ⊆ other`)
    ///
    /// The empty set is a subset of every set and every set is a subset of itself.
    pub fn is_subset(&self, other: &HashKeyedSet<T, B>) -> bool {
        self.len() <= other.len() && self.intersection(other).count() == self.len()
    }

    /// Returns true if every key in `other` is also in `self`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &HashKeyedSet<T, B>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` have no keys in common. (`self ∩ other = ∅`)
    pub fn is_disjoint(&self, other: &HashKeyedSet<T, B>) -> bool {
        self.intersection(other).next().is_none()
    }

    /// Returns true if `self` and `other` hold exactly the same keys. The elements stored under
    /// those keys are not compared.
    pub fn equal(&self, other: &HashKeyedSet<T, B>) -> bool {
        self.len() == other.len() && self.inner.keys().all(|key| other.inner.contains_key(key))
    }

    /// Creates a borrowed iterator over all elements whose keys are in `self` but not `other`.
    /// (`self \ other`)
    pub fn difference<'a>(&'a self, other: &'a HashKeyedSet<T, B>) -> Difference<'a, T, B> {
        Difference {
            inner: self.inner.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all elements whose keys are in `self` or `other` but not
    /// both. (`self △ other`)
    pub fn symmetric_difference<'a>(
        &'a self,
        other: &'a HashKeyedSet<T, B>,
    ) -> SymmetricDifference<'a, T, B> {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Creates a borrowed iterator over the elements of `self` whose keys are also in `other`.
    /// (`self ∩ other`)
    pub fn intersection<'a>(&'a self, other: &'a HashKeyedSet<T, B>) -> Intersection<'a, T, B> {
        Intersection {
            inner: self.inner.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all elements whose keys are in either `self` or `other`.
    /// (`self ∪ other`)
    ///
    /// For keys present in both sets the element from `self` is produced, unlike
    /// [`union`](super::union) which keeps `other`'s.
    pub fn union<'a>(&'a self, other: &'a HashKeyedSet<T, B>) -> Union<'a, T, B> {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }
}

impl<T: Keyed, B: Default> Default for HashKeyedSet<T, B> {
    fn default() -> Self {
        HashKeyedSet::with_hasher(B::default())
    }
}

impl<T: Keyed, B: BuildHasher + Default> FromIterator<T> for HashKeyedSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = HashKeyedSet::with_cap_and_hasher(iter.size_hint().0, B::default());
        set.extend(iter);
        set
    }
}

impl<T: Keyed, B: BuildHasher + Default, const N: usize> From<[T; N]> for HashKeyedSet<T, B> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Keyed, B: BuildHasher> Extend<T> for HashKeyedSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem);
        }
    }
}

impl<T: Keyed, B: BuildHasher> PartialEq for HashKeyedSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Keyed, B: BuildHasher> Eq for HashKeyedSet<T, B> {}

struct Contents<'a, T: Keyed, B>(&'a HashKeyedSet<T, B>);

impl<T: Keyed + Debug, B> Debug for Contents<'_, T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_set_contents(f, self.0.iter(), |f, elem| write!(f, "{elem:?}"))
    }
}

impl<T: Keyed + Debug, B: Debug> Debug for HashKeyedSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashKeyedSet")
            .field("contents", &Contents(self))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", self.hasher())
            .finish()
    }
}

impl<T: Keyed + Display, B> Display for HashKeyedSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_set_contents(f, self.iter(), |f, elem| write!(f, "{elem}"))
    }
}
