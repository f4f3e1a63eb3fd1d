//! Text functions

use crate::error::FormulaResult;
use crate::value::Value;

/// CONCAT - joins the display form of every argument
pub fn fn_concat(args: &[Value]) -> FormulaResult<Value> {
    let mut out = String::new();
    for arg in args {
        out.push_str(&arg.to_string());
    }
    Ok(Value::Text(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_concat() {
        let args = [
            Value::Text("total: ".to_string()),
            Value::Number(15.0),
            Value::Text("!".to_string()),
        ];
        assert_eq!(
            fn_concat(&args).unwrap(),
            Value::Text("total: 15!".to_string())
        );
    }
}
