//! Nested evaluation traces and their flattening into table rows.

use std::fmt;

/// A value nested in lists of arbitrary depth.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

/// Intermediate truth values of an evaluation, shaped like the term tree.
pub type Trace = Nested<bool>;

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    pub fn list(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::List(items.into_iter().collect())
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        match self {
            Nested::Leaf(_) => 1,
            Nested::List(items) => items.iter().map(Nested::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Leaves in depth-first, left-to-right order.
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves { stack: vec![self] }
    }
}

/// Depth-first iterator over the leaves of a [`Nested`] value.
pub struct Leaves<'a, T> {
    stack: Vec<&'a Nested<T>>,
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Nested::Leaf(value) => return Some(value),
                Nested::List(items) => self.stack.extend(items.iter().rev()),
            }
        }
        None
    }
}

impl<T: fmt::Display> fmt::Display for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nested::Leaf(value) => write!(f, "{}", value),
            Nested::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Splices every nested list in place, keeping leaf order.
///
/// ```
/// use logictex::trace::{flatten, Nested};
///
/// let nested = Nested::list([
///     Nested::list([Nested::leaf(1), Nested::leaf(2), Nested::leaf(3)]),
///     Nested::leaf(4),
///     Nested::list([Nested::leaf(5), Nested::leaf(6)]),
/// ]);
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn flatten<T: Clone>(nested: &Nested<T>) -> Vec<T> {
    nested.leaves().cloned().collect()
}
