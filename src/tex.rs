//! LaTeX `tabular` output for truth tables.
//!
//! # Examples
//!
//! ```
//! use logictex::table::{LogicTable, Mode};
//! use logictex::term::Term;
//!
//! let table = LogicTable::new(Term::not(Term::var("B")));
//! let tex = table.to_tex(Mode::Full).unwrap();
//! assert!(tex.starts_with("\\begin{tabular}{ c | c c }\n"));
//! ```

use std::fs;
use std::path::Path;

use log::info;

use crate::connective::Connective;
use crate::error::Result;
use crate::table::{LogicTable, Mode, Row};

/// Symbols used in the LaTeX output.
#[derive(Debug, Clone)]
pub struct TexConfig {
    /// Negation (default: `$\lnot$`)
    pub not: &'static str,
    /// Conjunction (default: `$\&$`)
    pub and: &'static str,
    /// Disjunction (default: `$\lor$`)
    pub or: &'static str,
    /// Biconditional (default: `$\equiv$`)
    pub iff: &'static str,
    /// Implication (default: `$\supset$`)
    pub implies: &'static str,
    /// Cell for a true value (default: `T`)
    pub true_cell: &'static str,
    /// Cell for a false value (default: `F`)
    pub false_cell: &'static str,
}

impl Default for TexConfig {
    fn default() -> Self {
        Self {
            not: "$\\lnot$",
            and: "$\\&$",
            or: "$\\lor$",
            iff: "$\\equiv$",
            implies: "$\\supset$",
            true_cell: "T",
            false_cell: "F",
        }
    }
}

impl TexConfig {
    pub fn symbol(&self, connective: Connective) -> &'static str {
        match connective {
            Connective::Not => self.not,
            Connective::And => self.and,
            Connective::Or => self.or,
            Connective::Iff => self.iff,
            Connective::Implies => self.implies,
        }
    }

    pub fn cell(&self, value: bool) -> &'static str {
        if value {
            self.true_cell
        } else {
            self.false_cell
        }
    }

    /// Maps a header token, keeping any parentheses glued to it.
    fn token(&self, token: &str) -> String {
        let core = token.trim_start_matches('(');
        let opening = token.len() - core.len();
        let inner = core.trim_end_matches(')');
        let closing = core.len() - inner.len();
        let inner = match Connective::from_symbol(inner) {
            Some(c) => self.symbol(c),
            None => inner,
        };
        format!("{}{}{}", "(".repeat(opening), inner, ")".repeat(closing))
    }
}

impl LogicTable {
    /// Renders the table as a LaTeX `tabular` using the default symbols.
    pub fn to_tex(&self, mode: Mode) -> Result<String> {
        self.to_tex_with_config(mode, &TexConfig::default())
    }

    pub fn to_tex_with_config(&self, mode: Mode, config: &TexConfig) -> Result<String> {
        let rows = self.rows(mode)?;
        let result_columns = match mode {
            Mode::Full => self.term().size(),
            Mode::Simple => 1,
        };

        let mut output = String::new();
        output.push_str(&tabular_begin(self.variables().len(), result_columns));
        output.push_str(&self.tex_head(mode, config));
        output.push_str("\t\\hline\n");
        for row in &rows {
            output.push_str(&tex_line(row, config));
        }
        output.push_str("\\end{tabular}\n");
        Ok(output)
    }

    /// Header line: variables, then the expression tokens.
    ///
    /// In full mode every token gets its own column; in simple mode the whole
    /// expression shares one.
    pub fn tex_head(&self, mode: Mode, config: &TexConfig) -> String {
        let mut head = String::from("\t");
        for name in self.variables().iter() {
            head.push_str(name);
            head.push_str(" & ");
        }
        let tokens: Vec<String> = self.header_tokens().iter().map(|t| config.token(t)).collect();
        let separator = match mode {
            Mode::Full => " & ",
            Mode::Simple => " ",
        };
        head.push_str(&tokens.join(separator));
        head.push_str(" \\\\\n");
        head
    }

    /// Writes `<qid>.tex` into `dir` and returns the line that includes it.
    pub fn write_question(&self, dir: impl AsRef<Path>, qid: &str, mode: Mode) -> Result<String> {
        let tex = self.to_tex(mode)?;
        let path = dir.as_ref().join(format!("{}.tex", qid));
        fs::write(&path, tex)?;
        info!("wrote {}", path.display());
        Ok(format!("\\input{{{}.tex}}", qid))
    }
}

fn tabular_begin(variable_columns: usize, result_columns: usize) -> String {
    let mut begin = String::from("\\begin{tabular}{");
    begin.push_str(&" c".repeat(variable_columns));
    begin.push_str(" |");
    begin.push_str(&" c".repeat(result_columns));
    begin.push_str(" }\n");
    begin
}

fn tex_line(row: &Row, config: &TexConfig) -> String {
    let cells: Vec<&str> = row.cells().map(|b| config.cell(b)).collect();
    format!("\t{} \\\\\n", cells.join(" & "))
}
