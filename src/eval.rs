//! Evaluation of term trees under a truth assignment.
//!
//! Evaluation yields the final truth value together with a [`Trace`] that
//! mirrors the shape of the term:
//!
//! - an atom becomes its assigned value,
//! - `[c, x]` becomes `[c(x), trace(x)]`,
//! - `[x, c, y]` becomes `[trace(x), c(x, y), trace(y)]`.
//!
//! Flattening the trace gives one value per token of the rendered expression.

use log::trace;

use crate::error::{Error, Operation, Result};
use crate::term::{RawTerm, Term};
use crate::trace::{Nested, Trace};
use crate::vars::VarSet;

/// Evaluates terms against assignments over a fixed variable set.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    vars: &'a VarSet,
}

impl<'a> Evaluator<'a> {
    pub fn new(vars: &'a VarSet) -> Self {
        Self { vars }
    }

    pub fn vars(&self) -> &'a VarSet {
        self.vars
    }

    /// Evaluates `term`, returning the final value and the full trace.
    pub fn eval(&self, term: &Term, assignment: &[bool]) -> Result<(bool, Trace)> {
        self.check_width(assignment)?;
        self.eval_traced(term, assignment)
    }

    /// Evaluates `term`, returning only the final value.
    pub fn eval_simple(&self, term: &Term, assignment: &[bool]) -> Result<bool> {
        self.check_width(assignment)?;
        self.eval_value(term, assignment)
    }

    fn check_width(&self, assignment: &[bool]) -> Result<()> {
        if assignment.len() != self.vars.len() {
            return Err(Error::AssignmentWidth {
                expected: self.vars.len(),
                found: assignment.len(),
            });
        }
        Ok(())
    }

    fn lookup(&self, name: &str, assignment: &[bool]) -> Result<bool> {
        let index = self.vars.index_of(name).ok_or_else(|| Error::UnboundVariable {
            name: name.to_string(),
        })?;
        Ok(assignment[index])
    }

    fn eval_traced(&self, term: &Term, assignment: &[bool]) -> Result<(bool, Trace)> {
        match term {
            Term::Atom(name) => {
                let value = self.lookup(name, assignment)?;
                Ok((value, Nested::leaf(value)))
            }
            Term::Unary(connective, operand) => {
                let (value, operand_trace) = self.eval_traced(operand, assignment)?;
                let result = connective.eval(value, None)?;
                trace!("{} {} -> {}", connective, value, result);
                Ok((result, Nested::list([Nested::leaf(result), operand_trace])))
            }
            Term::Binary(lhs, connective, rhs) => {
                let (lhs_value, lhs_trace) = self.eval_traced(lhs, assignment)?;
                let (rhs_value, rhs_trace) = self.eval_traced(rhs, assignment)?;
                let result = connective.eval(lhs_value, Some(rhs_value))?;
                trace!("{} {} {} -> {}", lhs_value, connective, rhs_value, result);
                Ok((result, Nested::list([lhs_trace, Nested::leaf(result), rhs_trace])))
            }
        }
    }

    fn eval_value(&self, term: &Term, assignment: &[bool]) -> Result<bool> {
        match term {
            Term::Atom(name) => self.lookup(name, assignment),
            Term::Unary(connective, operand) => connective.eval(self.eval_value(operand, assignment)?, None),
            Term::Binary(lhs, connective, rhs) => {
                let lhs = self.eval_value(lhs, assignment)?;
                let rhs = self.eval_value(rhs, assignment)?;
                connective.eval(lhs, Some(rhs))
            }
        }
    }
}

/// Something that can be evaluated under an assignment.
pub trait Evaluate {
    fn evaluate(&self, vars: &VarSet, assignment: &[bool]) -> Result<(bool, Trace)>;

    fn evaluate_simple(&self, vars: &VarSet, assignment: &[bool]) -> Result<bool> {
        self.evaluate(vars, assignment).map(|(value, _)| value)
    }
}

impl Evaluate for Term {
    fn evaluate(&self, vars: &VarSet, assignment: &[bool]) -> Result<(bool, Trace)> {
        Evaluator::new(vars).eval(self, assignment)
    }

    fn evaluate_simple(&self, vars: &VarSet, assignment: &[bool]) -> Result<bool> {
        Evaluator::new(vars).eval_simple(self, assignment)
    }
}

impl Evaluate for RawTerm {
    fn evaluate(&self, vars: &VarSet, assignment: &[bool]) -> Result<(bool, Trace)> {
        self.to_term(Operation::Evaluation)?.evaluate(vars, assignment)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::trace::flatten;

    fn eval_all(term: &Term) -> Vec<(bool, Vec<bool>)> {
        let vars = VarSet::collect(term);
        let evaluator = Evaluator::new(&vars);
        crate::assign::Assignments::new(vars.len())
            .map(|a| {
                let (value, trace) = evaluator.eval(term, &a).unwrap();
                (value, flatten(&trace))
            })
            .collect()
    }

    #[test]
    fn test_eval_atom() {
        let term = Term::var("A");
        assert_eq!(eval_all(&term), vec![(true, vec![true]), (false, vec![false])]);
    }

    #[test]
    fn test_eval_not() {
        let term = Term::not(Term::var("B"));
        let vars = VarSet::collect(&term);
        let (value, trace) = Evaluator::new(&vars).eval(&term, &[true]).unwrap();
        assert!(!value);
        assert_eq!(trace, Nested::list([Nested::leaf(false), Nested::leaf(true)]));
    }

    #[test]
    fn test_eval_binary_trace_shape() {
        let term = Term::iff(Term::and(Term::var("A"), Term::var("B")), Term::not(Term::var("B")));
        let vars = VarSet::collect(&term);
        let (value, trace) = Evaluator::new(&vars).eval(&term, &[true, false]).unwrap();
        assert!(!value);
        let expected = Nested::list([
            Nested::list([Nested::leaf(true), Nested::leaf(false), Nested::leaf(false)]),
            Nested::leaf(false),
            Nested::list([Nested::leaf(true), Nested::leaf(false)]),
        ]);
        assert_eq!(trace, expected);
    }

    #[test]
    fn test_simple_matches_full() {
        let term = Term::implies(Term::or(Term::var("P"), Term::var("Q")), Term::not(Term::var("R")));
        let vars = VarSet::collect(&term);
        let evaluator = Evaluator::new(&vars);
        for a in crate::assign::enumerate(vars.len()) {
            let (value, trace) = evaluator.eval(&term, &a).unwrap();
            assert_eq!(evaluator.eval_simple(&term, &a).unwrap(), value);
            assert_eq!(trace.len(), term.size());
        }
    }

    #[test]
    fn test_unbound_variable() {
        let term = Term::and(Term::var("i"), Term::var("A"));
        let vars = VarSet::collect(&term);
        let err = Evaluator::new(&vars).eval(&term, &[true]).unwrap_err();
        assert!(matches!(err, Error::UnboundVariable { ref name } if name == "i"));
    }

    #[test]
    fn test_assignment_width() {
        let term = Term::var("A");
        let vars = VarSet::collect(&term);
        let err = Evaluator::new(&vars).eval(&term, &[true, false]).unwrap_err();
        assert!(matches!(err, Error::AssignmentWidth { expected: 1, found: 2 }));
    }

    #[test]
    fn test_evaluate_raw_malformed() {
        let raw = RawTerm::node(["A".into(), "&".into(), "B".into(), "C".into()]);
        let vars = VarSet::default();
        let err = raw.evaluate(&vars, &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedTerm {
                operation: Operation::Evaluation,
                ..
            }
        ));
    }
}
