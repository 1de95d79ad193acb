//! The five propositional connectives and their truth rules.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Operation, Result};

/// A propositional connective.
///
/// The set is closed: every connective has a fixed symbol, a fixed arity and a
/// fixed truth rule.
///
/// | symbol | arity | connective   |
/// |--------|-------|--------------|
/// | `&`    | 2     | conjunction  |
/// | `\|`   | 2     | disjunction  |
/// | `=`    | 2     | biconditional|
/// | `i`    | 2     | implication  |
/// | `~`    | 1     | negation     |
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Connective {
    And,
    Or,
    Iff,
    Implies,
    Not,
}

impl Connective {
    pub const ALL: [Connective; 5] = [
        Connective::And,
        Connective::Or,
        Connective::Iff,
        Connective::Implies,
        Connective::Not,
    ];

    /// The symbol used for this connective in term trees and rendered headers.
    pub fn symbol(self) -> &'static str {
        match self {
            Connective::And => "&",
            Connective::Or => "|",
            Connective::Iff => "=",
            Connective::Implies => "i",
            Connective::Not => "~",
        }
    }

    /// Number of operands.
    pub fn arity(self) -> usize {
        match self {
            Connective::Not => 1,
            _ => 2,
        }
    }

    pub fn is_unary(self) -> bool {
        self.arity() == 1
    }

    /// Looks up a connective by its symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Connective::ALL.into_iter().find(|c| c.symbol() == symbol)
    }

    /// Returns `true` if `symbol` names a connective.
    ///
    /// Atoms spelled like a connective are never treated as variables.
    pub fn is_symbol(symbol: &str) -> bool {
        Connective::from_symbol(symbol).is_some()
    }

    /// Applies the truth rule of a binary connective.
    ///
    /// For [`Connective::Not`], `rhs` is ignored.
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Connective::And => lhs && rhs,
            Connective::Or => lhs || rhs,
            Connective::Iff => lhs == rhs,
            Connective::Implies => !lhs || rhs,
            Connective::Not => !lhs,
        }
    }

    /// Evaluates the connective on one or two operands.
    ///
    /// A binary connective without its second operand fails with
    /// [`Error::MissingOperand`].
    pub fn eval(self, lhs: bool, rhs: Option<bool>) -> Result<bool> {
        match (self, rhs) {
            (Connective::Not, _) => Ok(!lhs),
            (_, Some(rhs)) => Ok(self.apply(lhs, rhs)),
            (_, None) => Err(Error::MissingOperand { connective: self }),
        }
    }
}

/// Evaluates a connective given by its symbol.
pub fn evaluate(symbol: &str, lhs: bool, rhs: Option<bool>) -> Result<bool> {
    let connective = Connective::from_symbol(symbol).ok_or_else(|| Error::UnknownConnective {
        symbol: symbol.to_string(),
        operation: Operation::Evaluation,
    })?;
    connective.eval(lhs, rhs)
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Connective {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Connective::from_symbol(s).ok_or_else(|| Error::UnknownConnective {
            symbol: s.to_string(),
            operation: Operation::Evaluation,
        })
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn table(c: Connective) -> [bool; 4] {
        [
            c.apply(true, true),
            c.apply(true, false),
            c.apply(false, true),
            c.apply(false, false),
        ]
    }

    #[test]
    fn test_and() {
        assert_eq!(table(Connective::And), [true, false, false, false]);
    }

    #[test]
    fn test_or() {
        assert_eq!(table(Connective::Or), [true, true, true, false]);
    }

    #[test]
    fn test_iff() {
        assert_eq!(table(Connective::Iff), [true, false, false, true]);
    }

    #[test]
    fn test_implies() {
        assert_eq!(table(Connective::Implies), [true, false, true, true]);
    }

    #[test]
    fn test_not_ignores_rhs() {
        assert_eq!(table(Connective::Not), [false, false, true, true]);
        assert!(!Connective::Not.eval(true, None).unwrap());
        assert!(Connective::Not.eval(false, Some(false)).unwrap());
    }

    #[test]
    fn test_symbols_round_trip() {
        for c in Connective::ALL {
            assert_eq!(Connective::from_symbol(c.symbol()), Some(c));
            assert_eq!(c.symbol().parse::<Connective>().unwrap(), c);
        }
        assert!(Connective::from_symbol("^").is_none());
        assert!(!Connective::is_symbol("A"));
        assert!(Connective::is_symbol("i"));
    }

    #[test]
    fn test_evaluate_unknown_symbol() {
        let err = evaluate("^", true, Some(false)).unwrap_err();
        assert!(matches!(err, Error::UnknownConnective { ref symbol, .. } if symbol == "^"));
    }

    #[test]
    fn test_evaluate_missing_operand() {
        let err = evaluate("&", true, None).unwrap_err();
        assert!(matches!(err, Error::MissingOperand { connective: Connective::And }));
        assert!(!evaluate("i", true, Some(false)).unwrap());
        assert!(evaluate("~", false, None).unwrap());
    }
}
