//! Term trees: the input form of a propositional expression.
//!
//! A term arrives as a [`RawTerm`], a nested sequence of strings such as
//! `[["A", "&", "B"], "=", ["~", "B"]]`, and is validated into a [`Term`]:
//!
//! - a bare string is an atom (a variable name),
//! - a two-element node `[connective, operand]` is a unary application,
//! - a three-element node `[lhs, connective, rhs]` is a binary application.
//!
//! Any other node length is malformed.

use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::connective::Connective;
use crate::error::{Error, Operation, Result};

/// Unvalidated term, exactly as nested in the input.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTerm {
    Atom(String),
    Node(Vec<RawTerm>),
}

impl RawTerm {
    pub fn atom(name: impl Into<String>) -> Self {
        RawTerm::Atom(name.into())
    }

    pub fn node(items: impl IntoIterator<Item = RawTerm>) -> Self {
        RawTerm::Node(items.into_iter().collect())
    }

    /// Parses a term from its JSON form.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Validates the term, reporting errors against the given operation.
    pub fn to_term(&self, operation: Operation) -> Result<Term> {
        match self {
            RawTerm::Atom(name) => Ok(Term::Atom(name.clone())),
            RawTerm::Node(items) => match items.as_slice() {
                [op, operand] => {
                    let connective = connective_at(op, operation)?;
                    if !connective.is_unary() {
                        return Err(Error::ArityMismatch {
                            connective,
                            found: 1,
                            operation,
                        });
                    }
                    Ok(Term::Unary(connective, Box::new(operand.to_term(operation)?)))
                }
                [lhs, op, rhs] => {
                    let connective = connective_at(op, operation)?;
                    if connective.is_unary() {
                        return Err(Error::ArityMismatch {
                            connective,
                            found: 2,
                            operation,
                        });
                    }
                    Ok(Term::Binary(
                        Box::new(lhs.to_term(operation)?),
                        connective,
                        Box::new(rhs.to_term(operation)?),
                    ))
                }
                _ => {
                    trace!("malformed node of length {}: {}", items.len(), self);
                    Err(Error::MalformedTerm {
                        term: self.to_string(),
                        operation,
                    })
                }
            },
        }
    }
}

fn connective_at(raw: &RawTerm, operation: Operation) -> Result<Connective> {
    match raw {
        RawTerm::Atom(symbol) => Connective::from_symbol(symbol).ok_or_else(|| Error::UnknownConnective {
            symbol: symbol.clone(),
            operation,
        }),
        RawTerm::Node(_) => Err(Error::UnknownConnective {
            symbol: raw.to_string(),
            operation,
        }),
    }
}

impl fmt::Display for RawTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawTerm::Atom(name) => write!(f, "'{}'", name),
            RawTerm::Node(items) => {
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

impl From<&str> for RawTerm {
    fn from(name: &str) -> Self {
        RawTerm::atom(name)
    }
}

impl From<&Term> for RawTerm {
    fn from(term: &Term) -> Self {
        match term {
            Term::Atom(name) => RawTerm::atom(name.as_str()),
            Term::Unary(c, operand) => RawTerm::node([RawTerm::atom(c.symbol()), RawTerm::from(operand.as_ref())]),
            Term::Binary(lhs, c, rhs) => RawTerm::node([
                RawTerm::from(lhs.as_ref()),
                RawTerm::atom(c.symbol()),
                RawTerm::from(rhs.as_ref()),
            ]),
        }
    }
}

/// A validated term tree.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Term {
    Atom(String),
    Unary(Connective, Box<Term>),
    Binary(Box<Term>, Connective, Box<Term>),
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Atom(name.into())
    }

    pub fn not(operand: Self) -> Self {
        Term::Unary(Connective::Not, Box::new(operand))
    }

    pub fn binary(lhs: Self, connective: Connective, rhs: Self) -> Self {
        Term::Binary(Box::new(lhs), connective, Box::new(rhs))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Term::binary(lhs, Connective::And, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Term::binary(lhs, Connective::Or, rhs)
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Term::binary(lhs, Connective::Iff, rhs)
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Term::binary(lhs, Connective::Implies, rhs)
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Term::Atom(_))
    }

    /// Number of leaf tokens: every atom plus every connective occurrence.
    ///
    /// This is the length of a flattened evaluation trace and the number of
    /// tokens in the rendered expression, parentheses aside.
    pub fn size(&self) -> usize {
        match self {
            Term::Atom(_) => 1,
            Term::Unary(_, operand) => 1 + operand.size(),
            Term::Binary(lhs, _, rhs) => lhs.size() + 1 + rhs.size(),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Term::Atom(_) => 0,
            Term::Unary(_, operand) => 1 + operand.depth(),
            Term::Binary(lhs, _, rhs) => 1 + lhs.depth().max(rhs.depth()),
        }
    }
}

impl TryFrom<&RawTerm> for Term {
    type Error = Error;

    fn try_from(raw: &RawTerm) -> Result<Self> {
        raw.to_term(Operation::Evaluation)
    }
}
