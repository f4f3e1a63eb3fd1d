//! # cellscript-formula
//!
//! Formula parser, evaluator and reference-cycle detector for cellscript.
//!
//! This crate provides the whole cell-rendering pipeline:
//! - Infix parsing (formula text → postfix token sequence)
//! - Postfix evaluation (token sequence → value, through a stack machine)
//! - Reference-cycle detection ahead of evaluation
//! - A built-in function registry the host can extend or replace
//!
//! The grid itself stays outside: cell contents are fetched through a
//! caller-supplied `get_cell_text(col, row)` lookup (0-based rows), and
//! referenced cells are re-rendered from scratch on every reference.
//!
//! ## Example
//!
//! ```rust
//! use cellscript_formula::{render, FormulaRegistry, Value};
//!
//! let registry = FormulaRegistry::new();
//! let grid = |col: u32, row: u32| match (col, row) {
//!     (0, 0) => "1".to_string(), // A1
//!     (0, 1) => "2".to_string(), // A2
//!     _ => String::new(),
//! };
//!
//! assert_eq!(render("=SUM(A1,A2)", &registry, &grid), Value::Number(3.0));
//! assert_eq!(render("hello", &registry, &grid), Value::Text("hello".into()));
//! ```

pub mod cycle;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;
pub mod render;
pub mod token;
pub mod value;

pub use cycle::find_cycle;
pub use error::{FormulaError, FormulaResult};
pub use evaluator::evaluate;
pub use functions::{FormulaDef, FormulaFn, FormulaRegistry};
pub use parser::parse;
pub use render::{render, try_render};
pub use token::{Operator, Token};
pub use value::Value;

// Addressing primitives, re-exported for relocation use cases
pub use cellscript_core::{alphabet, CellCoords};
