//! # cellscript-core
//!
//! Cell addressing primitives for the cellscript formula engine:
//! - [`alphabet`] - bijective conversion between column letters and 0-based
//!   column indices (`A` = 0, `Z` = 25, `AA` = 26, ...)
//! - [`CellCoords`] - a textual cell address (`B10`) decoded to a
//!   (column index, 1-based row number) pair, with offset arithmetic for
//!   formula relocation
//!
//! ## Example
//!
//! ```rust
//! use cellscript_core::CellCoords;
//!
//! let coords = CellCoords::parse("B10").unwrap();
//! assert_eq!((coords.col, coords.row), (1, 10));
//! assert_eq!(coords.offset(1, -2).unwrap().to_string(), "C8");
//! ```

pub mod alphabet;
pub mod coords;
pub mod error;

pub use coords::CellCoords;
pub use error::{Error, Result};
