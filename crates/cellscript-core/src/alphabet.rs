//! Bijective column letter alphabet
//!
//! Spreadsheet columns use a bijective base-26 encoding: `A`-`Z` for the
//! first 26 columns, then `AA`, `AB`, ... There is no zero digit, so the
//! usual positional arithmetic is shifted by one in each direction.

use crate::error::{Error, Result};

/// Convert column letters to a 0-based index (`A` = 0, `Z` = 25, `AA` = 26)
///
/// Case-insensitive. Empty input and non-alphabetic characters are errors.
pub fn index_at(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidColumn("empty column letters".into()));
    }

    // Accumulate 1-based in u64 so a long run of letters cannot wrap;
    // anything past `1 + u32::MAX` does not name a representable column.
    let mut index: u64 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumn(letters.to_string()));
        }
        index = index * 26 + (c.to_ascii_uppercase() as u64 - 'A' as u64 + 1);
        if index > u32::MAX as u64 + 1 {
            return Err(Error::InvalidColumn(letters.to_string()));
        }
    }

    Ok((index - 1) as u32)
}

/// Convert a 0-based column index to letters (0 = `A`, 25 = `Z`, 26 = `AA`)
pub fn string_at(index: u32) -> String {
    let mut result = String::new();
    // 1-based for the bijective arithmetic; u64 so `u32::MAX` stays in range
    let mut n = index as u64 + 1;

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}
