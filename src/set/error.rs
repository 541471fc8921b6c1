use std::error::Error;
use std::fmt::Debug;

use derive_more::Display;

/// The error returned by [`HashKeyedSet::try_add`](super::HashKeyedSet::try_add) when the set
/// already holds an element with the same key. The rejected element is handed back.
#[derive(Debug, Display)]
#[display("an element with the same key is already present in the set")]
pub struct Occupied<T> {
    pub(crate) element: T,
}

impl<T> Occupied<T> {
    /// Returns a reference to the element that was not added.
    pub const fn element(&self) -> &T {
        &self.element
    }

    /// Consumes the error, returning the element that was not added.
    pub fn into_element(self) -> T {
        self.element
    }
}

impl<T: Debug> Error for Occupied<T> {}
