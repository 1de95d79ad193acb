//! Errors raised while building, evaluating, or rendering terms.

use std::fmt;
use std::io;

use crate::connective::Connective;

/// The operation that was in progress when an error occurred.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Operation {
    Evaluation,
    Rendering,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Evaluation => write!(f, "evaluation"),
            Operation::Rendering => write!(f, "rendering"),
        }
    }
}

/// Error type for the whole crate.
#[derive(Debug)]
pub enum Error {
    /// A node with a length other than 2 or 3.
    MalformedTerm { term: String, operation: Operation },
    /// A node references a symbol outside the connective set.
    UnknownConnective { symbol: String, operation: Operation },
    /// A connective placed in a node of the wrong shape.
    ArityMismatch {
        connective: Connective,
        found: usize,
        operation: Operation,
    },
    /// An atom that is missing from the variable set.
    UnboundVariable { name: String },
    /// A binary connective applied to a single operand.
    MissingOperand { connective: Connective },
    /// An assignment whose width does not match the variable set.
    AssignmentWidth { expected: usize, found: usize },
    /// Invalid JSON input.
    Json(serde_json::Error),
    /// File I/O error.
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedTerm { term, operation } => {
                write!(f, "{}: invalid node length in {}", operation, term)
            }
            Error::UnknownConnective { symbol, operation } => {
                write!(f, "{}: connective '{}' is undefined", operation, symbol)
            }
            Error::ArityMismatch {
                connective,
                found,
                operation,
            } => write!(
                f,
                "{}: connective '{}' takes {} operand(s), found {}",
                operation,
                connective,
                connective.arity(),
                found
            ),
            Error::UnboundVariable { name } => {
                write!(f, "evaluation: variable '{}' is not in the variable set", name)
            }
            Error::MissingOperand { connective } => {
                write!(f, "evaluation: connective '{}' is missing its second operand", connective)
            }
            Error::AssignmentWidth { expected, found } => {
                write!(f, "assignment has {} value(s), expected {}", found, expected)
            }
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}
