//! Truth table assembly.
//!
//! [`LogicTable`] ties together variable discovery, assignment enumeration,
//! evaluation, flattening and rendering for one term. It exposes the three
//! things a renderer needs: the variable columns, the expression header and
//! the rows.

use log::debug;

use crate::assign::{Assignment, Assignments};
use crate::error::{Error, Operation, Result};
use crate::eval::Evaluator;
use crate::render::{render, tokens};
use crate::term::{RawTerm, Term};
use crate::trace::flatten;
use crate::vars::VarSet;

/// What each row carries after the assignment.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Mode {
    /// One value per header token.
    #[default]
    Full,
    /// Only the value of the whole expression.
    Simple,
}

/// One assignment together with the values computed under it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub assignment: Assignment,
    pub values: Vec<bool>,
}

impl Row {
    /// Assignment values followed by the computed values.
    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        self.assignment.iter().chain(self.values.iter()).copied()
    }
}

#[derive(Debug, Clone)]
pub struct LogicTable {
    term: Term,
    vars: VarSet,
    assignment_override: Option<Assignment>,
}

impl LogicTable {
    pub fn new(term: Term) -> Self {
        let vars = VarSet::collect(&term);
        debug!("new table for {} over {} variable(s) {}", term, vars.len(), vars);
        Self {
            term,
            vars,
            assignment_override: None,
        }
    }

    pub fn from_raw(raw: &RawTerm) -> Result<Self> {
        Ok(Self::new(raw.to_term(Operation::Evaluation)?))
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Self::from_raw(&RawTerm::from_json(s)?)
    }

    /// Restricts the table to a single assignment.
    pub fn with_assignment(mut self, assignment: Assignment) -> Result<Self> {
        if assignment.len() != self.vars.len() {
            return Err(Error::AssignmentWidth {
                expected: self.vars.len(),
                found: assignment.len(),
            });
        }
        self.assignment_override = Some(assignment);
        Ok(self)
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn variables(&self) -> &VarSet {
        &self.vars
    }

    /// Rendered expression.
    pub fn header(&self) -> String {
        render(&self.term)
    }

    /// Expression tokens, one per value of a full-mode row.
    pub fn header_tokens(&self) -> Vec<String> {
        tokens(&self.term)
    }

    /// Assignments covered by the table, in enumeration order.
    pub fn assignments(&self) -> Vec<Assignment> {
        match &self.assignment_override {
            Some(assignment) => vec![assignment.clone()],
            None => Assignments::new(self.vars.len()).collect(),
        }
    }

    /// Evaluates every assignment.
    ///
    /// Fails on the first assignment whose evaluation fails; no partial table
    /// is returned.
    pub fn rows(&self, mode: Mode) -> Result<Vec<Row>> {
        let evaluator = Evaluator::new(&self.vars);
        let assignments = self.assignments();
        debug!("evaluating {} assignment(s) in {:?} mode", assignments.len(), mode);
        assignments
            .into_iter()
            .map(|assignment| {
                let values = match mode {
                    Mode::Full => {
                        let (_, trace) = evaluator.eval(&self.term, &assignment)?;
                        flatten(&trace)
                    }
                    Mode::Simple => vec![evaluator.eval_simple(&self.term, &assignment)?],
                };
                Ok(Row { assignment, values })
            })
            .collect()
    }

    /// Truth value of the expression under every assignment.
    pub fn final_values(&self) -> Result<Vec<bool>> {
        let evaluator = Evaluator::new(&self.vars);
        self.assignments()
            .iter()
            .map(|assignment| evaluator.eval_simple(&self.term, assignment))
            .collect()
    }

    /// Plain-text table with `T`/`F` cells, one column per header token.
    pub fn to_plain(&self, mode: Mode) -> Result<String> {
        let mut header: Vec<String> = self.vars.names().to_vec();
        match mode {
            Mode::Full => header.extend(self.header_tokens()),
            Mode::Simple => header.push(self.header()),
        }
        let widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        let split = self.vars.len();

        let mut out = String::new();
        write_plain_line(&mut out, &header, &widths, split);
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        write_plain_line(&mut out, &rule, &widths, split);
        for row in self.rows(mode)? {
            let cells: Vec<String> = row.cells().map(|b| String::from(if b { "T" } else { "F" })).collect();
            write_plain_line(&mut out, &cells, &widths, split);
        }
        Ok(out)
    }
}

fn write_plain_line(out: &mut String, cells: &[String], widths: &[usize], split: usize) {
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push_str(if i == split { " | " } else { " " });
        }
        out.push_str(&format!("{:^width$}", cell, width = width));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_rows_full() {
        let table = LogicTable::new(Term::not(Term::and(Term::var("A"), Term::var("A"))));
        let rows = table.rows(Mode::Full).unwrap();
        assert_eq!(
            rows,
            vec![
                Row {
                    assignment: vec![true],
                    values: vec![false, true, true, true],
                },
                Row {
                    assignment: vec![false],
                    values: vec![true, false, false, false],
                },
            ]
        );
    }

    #[test]
    fn test_rows_simple() {
        let table = LogicTable::new(Term::not(Term::and(Term::var("A"), Term::var("A"))));
        let rows = table.rows(Mode::Simple).unwrap();
        assert_eq!(rows[0].values, vec![false]);
        assert_eq!(rows[1].values, vec![true]);
        assert_eq!(table.final_values().unwrap(), vec![false, true]);
    }

    #[test]
    fn test_header_tokens_align() {
        let table = LogicTable::from_json(r#"[["A", "&", "B"], "=", ["~", "B"]]"#).unwrap();
        assert_eq!(table.variables().names(), ["A", "B"]);
        assert_eq!(table.header(), "(A & B) = ~ B");
        let tokens = table.header_tokens();
        for row in table.rows(Mode::Full).unwrap() {
            assert_eq!(row.values.len(), tokens.len());
        }
    }

    #[test]
    fn test_assignment_override() {
        let table = LogicTable::new(Term::or(Term::var("A"), Term::var("B")))
            .with_assignment(vec![false, true])
            .unwrap();
        let rows = table.rows(Mode::Simple).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].assignment, vec![false, true]);
        assert_eq!(rows[0].values, vec![true]);
    }

    #[test]
    fn test_assignment_override_width() {
        let err = LogicTable::new(Term::var("A")).with_assignment(vec![true, true]).unwrap_err();
        assert!(matches!(err, Error::AssignmentWidth { expected: 1, found: 2 }));
    }

    #[test]
    fn test_plain() {
        let table = LogicTable::new(Term::not(Term::var("B")));
        let plain = table.to_plain(Mode::Full).unwrap();
        assert_eq!(plain, "B | ~ B\n- | - -\nT | F T\nF | T F\n");
    }

    #[test]
    fn test_unbound_variable_fails_whole_table() {
        let table = LogicTable::from_json(r#"["i", "&", "A"]"#).unwrap();
        assert_eq!(table.variables().names(), ["A"]);
        assert!(matches!(table.rows(Mode::Full), Err(Error::UnboundVariable { .. })));
    }
}
