//! Infix rendering of term trees.
//!
//! The rendered expression has exactly one whitespace-separated token per
//! atom and per connective, in the same order as a flattened evaluation
//! trace. Parentheses stick to the first and last token of the group they
//! enclose, so `[[["~", "A"], "&", "B"], "|", "C"]` renders as
//! `(~ A & B) | C`.

use std::fmt;

use crate::error::{Operation, Result};
use crate::term::{RawTerm, Term};

/// Renders `term` in infix notation.
///
/// ```
/// use logictex::render::render;
/// use logictex::term::Term;
///
/// let term = Term::iff(Term::and(Term::var("A"), Term::var("B")), Term::not(Term::var("B")));
/// assert_eq!(render(&term), "(A & B) = ~ B");
/// ```
pub fn render(term: &Term) -> String {
    tokens(term).join(" ")
}

/// Validates and renders a raw term.
pub fn render_raw(raw: &RawTerm) -> Result<String> {
    Ok(render(&raw.to_term(Operation::Rendering)?))
}

/// Header tokens of `term`, aligned with its flattened trace.
pub fn tokens(term: &Term) -> Vec<String> {
    let mut out = Vec::with_capacity(term.size());
    push_tokens(term, &mut out);
    out
}

fn push_tokens(term: &Term, out: &mut Vec<String>) {
    match term {
        Term::Atom(name) => out.push(name.clone()),
        Term::Unary(connective, operand) => {
            out.push(connective.symbol().to_string());
            push_operand(operand, out);
        }
        Term::Binary(lhs, connective, rhs) => {
            push_operand(lhs, out);
            out.push(connective.symbol().to_string());
            push_operand(rhs, out);
        }
    }
}

// Binary operands are grouped in parentheses; atoms and negations are not.
fn push_operand(term: &Term, out: &mut Vec<String>) {
    let start = out.len();
    push_tokens(term, out);
    if matches!(term, Term::Binary(..)) {
        out[start].insert(0, '(');
        if let Some(last) = out.last_mut() {
            last.push(')');
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render(self))
    }
}
