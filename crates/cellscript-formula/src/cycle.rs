//! Reference-cycle detection
//!
//! A formula may reference cells whose own formulas reference further cells;
//! before evaluating anything the renderer walks that reference graph
//! depth-first and reports the first chain that closes on itself.

use crate::parser::parse;
use cellscript_core::CellCoords;

/// Walk the reference graph rooted at `text` and return the address that
/// closes a cycle, if any
///
/// `path` is the chain of addresses currently being expanded: it grows on
/// descent and shrinks on backtrack, so the same address may appear safely
/// in two non-overlapping branches. Callers start with an empty path.
///
/// Every operand token enters the path and the containment check, including
/// numeric and string literals; a literal fails address decoding and
/// recurses into nothing, so it can never close a chain against a real
/// reference. Bodies that fail to parse contribute no references here; the
/// renderer surfaces the parse error when it evaluates that cell.
pub fn find_cycle<F>(text: &str, get_cell_text: &F, path: &mut Vec<String>) -> Option<String>
where
    F: Fn(u32, u32) -> String,
{
    let body = match text.strip_prefix('=') {
        Some(body) => body,
        None => return None,
    };

    let tokens = match parse(body) {
        Ok(tokens) => tokens,
        Err(_) => return None,
    };

    for token in &tokens {
        let addr = match token.operand_text() {
            Some(text) => text,
            None => continue,
        };

        if path.iter().any(|seen| seen == addr) {
            return Some(addr.to_string());
        }

        path.push(addr.to_string());
        if let Ok(coords) = CellCoords::parse(addr) {
            let referenced = get_cell_text(coords.col, coords.row - 1);
            if let Some(cycle) = find_cycle(&referenced, get_cell_text, path) {
                // Propagate without backtracking so the path still holds
                // the full chain.
                return Some(cycle);
            }
        }
        path.pop();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn grid(cells: &[(&str, &str)]) -> HashMap<(u32, u32), String> {
        cells
            .iter()
            .map(|(addr, text)| {
                let coords = CellCoords::parse(addr).unwrap();
                ((coords.col, coords.row - 1), text.to_string())
            })
            .collect()
    }

    fn lookup(grid: &HashMap<(u32, u32), String>) -> impl Fn(u32, u32) -> String + '_ {
        move |col, row| grid.get(&(col, row)).cloned().unwrap_or_default()
    }

    #[test]
    fn test_literal_is_not_a_formula() {
        let grid = grid(&[]);
        let mut path = Vec::new();
        assert_eq!(find_cycle("hello", &lookup(&grid), &mut path), None);
        assert!(path.is_empty());
    }

    #[test]
    fn test_two_cell_cycle() {
        let grid = grid(&[("A1", "=B1"), ("B1", "=A1")]);
        let mut path = Vec::new();
        // Expanding A1's formula: B1 descends to A1, whose body names B1
        // again. B1 closes the path first.
        assert_eq!(
            find_cycle("=B1", &lookup(&grid), &mut path),
            Some("B1".to_string())
        );
    }

    #[test]
    fn test_self_reference() {
        let grid = grid(&[("A1", "=A1")]);
        let mut path = Vec::new();
        assert_eq!(
            find_cycle("=A1", &lookup(&grid), &mut path),
            Some("A1".to_string())
        );
    }

    #[test]
    fn test_distinct_branches_are_not_a_cycle() {
        let grid = grid(&[("A1", "=A2+A3"), ("A2", "5"), ("A3", "10")]);
        let mut path = Vec::new();
        assert_eq!(find_cycle("=A2+A3", &lookup(&grid), &mut path), None);
        assert!(path.is_empty());
    }

    #[test]
    fn test_shared_dependency_is_not_a_cycle() {
        // Both branches reach C1; backtracking clears it between them.
        let grid = grid(&[("B1", "=C1"), ("B2", "=C1"), ("C1", "7")]);
        let mut path = Vec::new();
        assert_eq!(find_cycle("=B1+B2", &lookup(&grid), &mut path), None);
    }

    #[test]
    fn test_deep_chain_cycle() {
        let grid = grid(&[("A1", "=A2"), ("A2", "=A3"), ("A3", "=A1")]);
        let mut path = Vec::new();
        assert_eq!(
            find_cycle("=A2", &lookup(&grid), &mut path),
            Some("A2".to_string())
        );
    }

    #[test]
    fn test_literals_walk_harmlessly() {
        let grid = grid(&[("A1", "=50+B1"), ("B1", "3")]);
        let mut path = Vec::new();
        assert_eq!(find_cycle("=50+B1", &lookup(&grid), &mut path), None);
    }
}
