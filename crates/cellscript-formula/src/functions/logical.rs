//! Logical functions
//!
//! The value model has no boolean variant: truth is "coerces to a nonzero
//! number", and these functions answer in `1`/`0`.

use crate::error::FormulaResult;
use crate::value::Value;

fn truthy(value: &Value) -> bool {
    value.as_number().map_or(false, |n| n != 0.0)
}

/// IF(condition, then, [otherwise]) - `otherwise` defaults to `0`
pub fn fn_if(args: &[Value]) -> FormulaResult<Value> {
    // Arity is validated by the registry definition (2 to 3).
    if truthy(&args[0]) {
        Ok(args[1].clone())
    } else {
        Ok(args.get(2).cloned().unwrap_or(Value::Number(0.0)))
    }
}

/// AND - `1` when every argument is truthy
pub fn fn_and(args: &[Value]) -> FormulaResult<Value> {
    let all = args.iter().all(truthy);
    Ok(Value::Number(if all { 1.0 } else { 0.0 }))
}

/// OR - `1` when any argument is truthy
pub fn fn_or(args: &[Value]) -> FormulaResult<Value> {
    let any = args.iter().any(truthy);
    Ok(Value::Number(if any { 1.0 } else { 0.0 }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_if() {
        let args = [Value::Number(1.0), Value::Text("yes".into()), Value::Text("no".into())];
        assert_eq!(fn_if(&args).unwrap(), Value::Text("yes".to_string()));

        let args = [Value::Number(0.0), Value::Text("yes".into()), Value::Text("no".into())];
        assert_eq!(fn_if(&args).unwrap(), Value::Text("no".to_string()));

        // Missing else-branch defaults to 0
        let args = [Value::Number(0.0), Value::Text("yes".into())];
        assert_eq!(fn_if(&args).unwrap(), Value::Number(0.0));
    }

    #[test]
    fn test_if_numeric_text_condition() {
        let args = [Value::Text("2".into()), Value::Text("yes".into()), Value::Text("no".into())];
        assert_eq!(fn_if(&args).unwrap(), Value::Text("yes".to_string()));
    }

    #[test]
    fn test_and_or() {
        let t = Value::Number(1.0);
        let f = Value::Number(0.0);

        assert_eq!(fn_and(&[t.clone(), t.clone()]).unwrap(), Value::Number(1.0));
        assert_eq!(fn_and(&[t.clone(), f.clone()]).unwrap(), Value::Number(0.0));
        assert_eq!(fn_or(&[f.clone(), t.clone()]).unwrap(), Value::Number(1.0));
        assert_eq!(fn_or(&[f.clone(), f]).unwrap(), Value::Number(0.0));

        // Non-numeric text is falsy
        assert_eq!(fn_or(&[Value::Text("x".into())]).unwrap(), Value::Number(0.0));
    }
}
