use crate::Keyed;

/// An element identified by `id` alone, carrying a label that plays no part in membership.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Labeled {
    pub id: u32,
    pub label: &'static str,
}

impl Labeled {
    pub const fn new(id: u32, label: &'static str) -> Labeled {
        Labeled { id, label }
    }
}

impl Keyed for Labeled {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

/// An element with a string key, only reachable through a reference or smart pointer in tests.
#[derive(Debug)]
pub struct Named(pub String);

impl Keyed for Named {
    type Key = String;

    fn key(&self) -> String {
        self.0.clone()
    }
}
