//! The [`Keyed`] capability and its implementations for common element forms.

use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// A type which can derive the key that identifies it within a
/// [`HashKeyedSet`](crate::HashKeyedSet).
///
/// Two values with equal keys are treated as the same set member, even if they differ in other
/// fields. It is a logic error for `key` to return different keys for the same value over time,
/// or for a value to be mutated in a way that changes its key while it is stored in a set. This
/// is not detected.
///
/// # Examples
/// ```
/// use keyed_set::{HashKeyedSet, Keyed};
///
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// impl Keyed for User {
///     type Key = u64;
///
///     fn key(&self) -> u64 {
///         self.id
///     }
/// }
///
/// let mut users = HashKeyedSet::new();
/// users.add(User { id: 1, name: "ada".into() });
/// users.add(User { id: 1, name: "grace".into() });
///
/// assert_eq!(users.size(), 1);
/// assert_eq!(users.get(&1).map(|u| u.name.as_str()), Some("grace"));
/// ```
pub trait Keyed {
    /// The identity of an element. Cloned when an element is stored.
    type Key: Hash + Eq + Clone;

    /// Derives the key for this value.
    fn key(&self) -> Self::Key;
}

impl<E: Keyed + ?Sized> Keyed for &E {
    type Key = E::Key;

    fn key(&self) -> Self::Key {
        (**self).key()
    }
}

impl<E: Keyed + ?Sized> Keyed for &mut E {
    type Key = E::Key;

    fn key(&self) -> Self::Key {
        (**self).key()
    }
}

impl<E: Keyed + ?Sized> Keyed for Box<E> {
    type Key = E::Key;

    fn key(&self) -> Self::Key {
        (**self).key()
    }
}

impl<E: Keyed + ?Sized> Keyed for Rc<E> {
    type Key = E::Key;

    fn key(&self) -> Self::Key {
        (**self).key()
    }
}

impl<E: Keyed + ?Sized> Keyed for Arc<E> {
    type Key = E::Key;

    fn key(&self) -> Self::Key {
        (**self).key()
    }
}

macro_rules! impl_keyed_by_self {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Keyed for $ty {
                type Key = $ty;

                fn key(&self) -> Self::Key {
                    *self
                }
            }
        )*
    };
}

impl_keyed_by_self!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char, bool);

impl Keyed for String {
    type Key = String;

    fn key(&self) -> Self::Key {
        self.clone()
    }
}

impl Keyed for str {
    type Key = String;

    fn key(&self) -> Self::Key {
        self.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::sync::Arc;

    use super::Keyed;
    use crate::util::fixture::Labeled;

    #[test]
    fn test_shared_forms_forward_key() {
        let value = Labeled::new(7, "seven");
        let boxed = Box::new(Labeled::new(7, "boxed"));
        let rc = Rc::new(Labeled::new(7, "rc"));
        let arc = Arc::new(Labeled::new(7, "arc"));

        assert_eq!((&value).key(), 7, "References should forward to the pointee's key.");
        assert_eq!(boxed.key(), 7, "Box should forward to the pointee's key.");
        assert_eq!(rc.key(), 7, "Rc should forward to the pointee's key.");
        assert_eq!(arc.key(), 7, "Arc should forward to the pointee's key.");
    }

    #[test]
    fn test_strings_key_by_value() {
        let owned = String::from("id");
        assert_eq!(owned.key(), "id");
        assert_eq!("id".key(), owned.key(), "str and String should produce equal keys.");
    }
}
