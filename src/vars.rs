//! Variable discovery.

use std::collections::BTreeSet;
use std::fmt;

use crate::connective::Connective;
use crate::term::Term;

/// Sorted, deduplicated variable names of a term.
///
/// The position of a name in this set is the position of its truth value in
/// every assignment.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct VarSet {
    names: Vec<String>,
}

impl VarSet {
    /// Collects the variables referenced by `term`.
    pub fn collect(term: &Term) -> Self {
        let names = collect_into(term, BTreeSet::new());
        Self {
            names: names.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Position of `name` in the set.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).ok()
    }
}

impl fmt::Display for VarSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.names.join(", "))
    }
}

/// Collects the sorted, deduplicated variable names referenced by `term`.
///
/// Atoms spelled like a connective symbol are skipped.
pub fn collect(term: &Term) -> Vec<String> {
    VarSet::collect(term).names
}

fn collect_into<'a>(term: &'a Term, mut acc: BTreeSet<&'a str>) -> BTreeSet<&'a str> {
    match term {
        Term::Atom(name) => {
            if !Connective::is_symbol(name) {
                acc.insert(name.as_str());
            }
            acc
        }
        Term::Unary(_, operand) => collect_into(operand, acc),
        Term::Binary(lhs, _, rhs) => {
            let acc = collect_into(lhs, acc);
            collect_into(rhs, acc)
        }
    }
}
