//! # logictex: truth tables for propositional logic
//!
//! **`logictex`** evaluates a propositional expression, given as a nested term
//! tree, under every truth assignment of its variables and produces the rows
//! of its truth table, ready to be rendered as text or LaTeX.
//!
//! ## Terms
//!
//! A term is either a variable name or a node combining sub-terms with one of
//! five connectives: `&` (and), `|` (or), `=` (iff), `i` (implies) and `~`
//! (not). Unary nodes are written `[connective, operand]`, binary nodes
//! `[lhs, connective, rhs]`:
//!
//! ```json
//! [["A", "&", "B"], "=", ["~", "B"]]
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use logictex::table::{LogicTable, Mode};
//!
//! let table = LogicTable::from_json(r#"[["A", "&", "B"], "=", ["~", "B"]]"#).unwrap();
//!
//! assert_eq!(table.variables().names(), ["A", "B"]);
//! assert_eq!(table.header(), "(A & B) = ~ B");
//!
//! // One value per header token: A & B = ~ B
//! let rows = table.rows(Mode::Full).unwrap();
//! assert_eq!(rows[0].assignment, vec![true, true]);
//! assert_eq!(rows[0].values, vec![true, true, true, false, false, true]);
//!
//! // Only the value of the whole expression
//! let rows = table.rows(Mode::Simple).unwrap();
//! assert_eq!(rows[0].values, vec![false]);
//! ```
//!
//! ## Core Components
//!
//! - **[`connective`]**: the connectives and their truth rules.
//! - **[`term`]**: raw and validated term trees.
//! - **[`vars`]**: variable discovery.
//! - **[`assign`]**: enumeration of all assignments.
//! - **[`eval`]**: evaluation with a trace of intermediate values.
//! - **[`trace`]**: nested traces and flattening.
//! - **[`render`]**: infix rendering used for table headers.
//! - **[`table`]**: the [`LogicTable`][crate::table::LogicTable] facade.
//! - **[`tex`]**: LaTeX output.

pub mod assign;
pub mod connective;
pub mod error;
pub mod eval;
pub mod render;
pub mod table;
pub mod term;
pub mod tex;
pub mod trace;
pub mod vars;
