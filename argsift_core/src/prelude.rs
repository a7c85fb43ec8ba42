//! Traits which, typically, may be imported without concern: `use argsift::prelude::*`.

/// Behaviour for naming a flag or parameter in a query.
///
/// A single name (`"verbose"`) or a list of alternatives (`["v", "verbose"]`).
/// Alternatives are tried in list order; the first match wins.
// Needs to be imported in order to implement a custom `Names`.
pub trait Names {
    /// The names to query, in priority order.
    fn names(&self) -> Vec<&str>;
}

impl<'a> Names for &'a str {
    fn names(&self) -> Vec<&str> {
        vec![*self]
    }
}

impl Names for String {
    fn names(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl<'a> Names for &'a String {
    fn names(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl<'a, const N: usize> Names for [&'a str; N] {
    fn names(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl<'a> Names for &'a [&'a str] {
    fn names(&self) -> Vec<&str> {
        self.to_vec()
    }
}

impl<'a> Names for Vec<&'a str> {
    fn names(&self) -> Vec<&str> {
        self.clone()
    }
}
