//! Cell coordinates and the textual address codec

use crate::alphabet;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A decoded cell address (e.g. `B10`)
///
/// The column index is 0-based (`A` = 0). The row number is kept 1-based,
/// exactly as written in the address text; stores that index rows from 0
/// subtract one at the lookup boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoords {
    /// Column index (0-based, A=0, B=1, ...)
    pub col: u32,
    /// Row number (1-based, as written)
    pub row: u32,
}

impl CellCoords {
    /// Create coordinates from a column index and 1-based row number
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Parse an address from column-letters + row-digits notation
    ///
    /// The scan is a single left-to-right pass: ASCII digits accumulate into
    /// the row string, every other character into the column string, so
    /// interleaved input is accepted as long as both runs are well formed.
    ///
    /// # Examples
    /// ```
    /// use cellscript_core::CellCoords;
    ///
    /// let coords = CellCoords::parse("A1").unwrap();
    /// assert_eq!(coords.col, 0);
    /// assert_eq!(coords.row, 1);
    ///
    /// let coords = CellCoords::parse("AA100").unwrap();
    /// assert_eq!(coords.col, 26);
    /// assert_eq!(coords.row, 100);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let mut letters = String::new();
        let mut digits = String::new();

        for c in s.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else {
                letters.push(c);
            }
        }

        let col = alphabet::index_at(&letters)
            .map_err(|_| Error::InvalidAddress(s.to_string()))?;

        let row: u32 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(s.to_string()))?;
        if row == 0 {
            return Err(Error::InvalidAddress(s.to_string()));
        }

        Ok(Self { col, row })
    }

    /// Relocate by a signed column/row delta (fill and copy/paste)
    ///
    /// Errors if the result falls off the grid (negative column, row < 1).
    pub fn offset(&self, dcol: i64, drow: i64) -> Result<Self> {
        let col = self.col as i64 + dcol;
        let row = self.row as i64 + drow;

        if col < 0 || row < 1 || col > u32::MAX as i64 || row > u32::MAX as i64 {
            return Err(Error::OffsetOutOfBounds(self.to_string()));
        }

        Ok(Self {
            col: col as u32,
            row: row as u32,
        })
    }
}

impl fmt::Display for CellCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", alphabet::string_at(self.col), self.row)
    }
}

impl FromStr for CellCoords {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse() {
        assert_eq!(CellCoords::parse("A1").unwrap(), CellCoords::new(0, 1));
        assert_eq!(CellCoords::parse("B10").unwrap(), CellCoords::new(1, 10));
        assert_eq!(CellCoords::parse("Z99").unwrap(), CellCoords::new(25, 99));
        assert_eq!(CellCoords::parse("AA1").unwrap(), CellCoords::new(26, 1));

        // Digits and letters may interleave; the runs are what matter
        assert_eq!(CellCoords::parse("A1A2").unwrap(), CellCoords::parse("AA12").unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert!(CellCoords::parse("").is_err());
        assert!(CellCoords::parse("A").is_err());
        assert!(CellCoords::parse("12").is_err());
        assert!(CellCoords::parse("A0").is_err());
        assert!(CellCoords::parse("$A$1").is_err());
        assert!(CellCoords::parse("ZZZZZZZ1").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CellCoords::new(0, 1).to_string(), "A1");
        assert_eq!(CellCoords::new(2, 100).to_string(), "C100");
        assert_eq!(CellCoords::new(26, 3).to_string(), "AA3");
    }

    #[test]
    fn test_offset() {
        let a1 = CellCoords::parse("A1").unwrap();
        assert_eq!(a1.offset(1, 1).unwrap().to_string(), "B2");
        assert_eq!(a1.offset(26, 9).unwrap().to_string(), "AA10");

        let c3 = CellCoords::parse("C3").unwrap();
        assert_eq!(c3.offset(-2, -2).unwrap().to_string(), "A1");
        assert!(c3.offset(-3, 0).is_err());
        assert!(c3.offset(0, -3).is_err());
    }

    #[test]
    fn test_identity_offset_round_trips() {
        for addr in ["A1", "B10", "ZZ42", "XFD1048576"] {
            let coords = CellCoords::parse(addr).unwrap();
            let moved = coords.offset(0, 0).unwrap();
            assert_eq!(CellCoords::parse(&moved.to_string()).unwrap(), coords);
        }
    }

    #[test]
    fn test_round_trip_from_indices() {
        for col in [0, 1, 25, 26, 701, 702] {
            for row in [1, 2, 10, 1_048_576] {
                let text = format!("{}{}", crate::alphabet::string_at(col), row);
                assert_eq!(CellCoords::parse(&text).unwrap(), CellCoords::new(col, row));
            }
        }
    }
}
