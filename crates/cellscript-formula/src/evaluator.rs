//! Postfix evaluator
//!
//! A stack machine over the parser's token sequence. References resolve
//! through a caller-supplied closure; function calls dispatch through the
//! caller's [`FormulaRegistry`].

use crate::error::{FormulaError, FormulaResult};
use crate::functions::FormulaRegistry;
use crate::token::{Operator, Token};
use crate::value::Value;
use cellscript_core::CellCoords;

/// Evaluate a postfix token sequence to a single value
///
/// `resolve` is called for every cell-address operand with the decoded
/// (column index, 1-based row number) pair and must produce that cell's
/// value.
///
/// Function arguments are handed to the registry in written left-to-right
/// order: the pop-collected list is reversed before dispatch, so
/// order-sensitive functions such as `IF` behave as authored.
///
/// Arithmetic is permissive: `-`, `*` and `/` coerce non-numeric operands
/// to NaN and division by zero follows IEEE 754 semantics; nothing traps.
/// `+` adds when both operands are numeric and concatenates otherwise.
///
/// A sequence that leaves the value stack with anything other than exactly
/// one value is a [`FormulaError::MalformedExpression`].
pub fn evaluate<R>(
    tokens: &[Token],
    registry: &FormulaRegistry,
    mut resolve: R,
) -> FormulaResult<Value>
where
    R: FnMut(u32, u32) -> FormulaResult<Value>,
{
    let mut stack: Vec<Value> = Vec::new();

    for token in tokens {
        match token {
            Token::Op(op) => {
                let top = pop(&mut stack)?;
                let bottom = pop(&mut stack)?;
                let result = match op {
                    Operator::Add => match (bottom.as_number(), top.as_number()) {
                        (Some(b), Some(t)) => Value::Number(b + t),
                        _ => Value::Text(format!("{}{}", bottom, top)),
                    },
                    Operator::Subtract => {
                        Value::Number(bottom.coerce_number() - top.coerce_number())
                    }
                    Operator::Multiply => {
                        Value::Number(bottom.coerce_number() * top.coerce_number())
                    }
                    Operator::Divide => {
                        Value::Number(bottom.coerce_number() / top.coerce_number())
                    }
                };
                stack.push(result);
            }
            Token::Call(name, count) => {
                let mut args = Vec::with_capacity(*count);
                for _ in 0..*count {
                    args.push(pop(&mut stack)?);
                }
                // Pop order is reverse of written order; restore it.
                args.reverse();

                let def = registry
                    .get(name)
                    .ok_or_else(|| FormulaError::UnknownFunction(name.clone()))?;
                def.check_args(args.len())?;
                stack.push((def.func)(&args)?);
            }
            Token::Operand(text) => {
                let value = resolve_operand(text, &mut resolve)?;
                stack.push(value);
            }
        }
    }

    let result = stack.pop().ok_or(FormulaError::MalformedExpression)?;
    if !stack.is_empty() {
        return Err(FormulaError::MalformedExpression);
    }
    Ok(result)
}

fn pop(stack: &mut Vec<Value>) -> FormulaResult<Value> {
    stack.pop().ok_or(FormulaError::MalformedExpression)
}

/// Resolve a leaf operand: numeric literal, marked string literal, or cell
/// reference (in that order of classification).
fn resolve_operand<R>(text: &str, resolve: &mut R) -> FormulaResult<Value>
where
    R: FnMut(u32, u32) -> FormulaResult<Value>,
{
    let first = text.chars().next();

    if first.map_or(false, |c| c.is_ascii_digit()) {
        // Digit-leading text is a numeric literal; unparseable remainders
        // coerce to NaN rather than failing.
        return Ok(Value::Number(text.parse().unwrap_or(f64::NAN)));
    }

    if let Some(rest) = text.strip_prefix('"') {
        return Ok(Value::Text(rest.to_string()));
    }

    let coords = CellCoords::parse(text)?;
    resolve(coords.col, coords.row)
}
