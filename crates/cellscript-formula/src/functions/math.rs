//! Math functions

use crate::error::FormulaResult;
use crate::value::Value;

/// SUM - adds every numeric argument; non-numeric values are ignored
pub fn fn_sum(args: &[Value]) -> FormulaResult<Value> {
    let sum: f64 = args.iter().filter_map(Value::as_number).sum();
    Ok(Value::Number(sum))
}

/// AVERAGE - mean of the numeric arguments
///
/// With no numeric argument at all the average is NaN, consistent with the
/// engine's permissive arithmetic.
pub fn fn_average(args: &[Value]) -> FormulaResult<Value> {
    let mut sum = 0.0;
    let mut count = 0u32;

    for n in args.iter().filter_map(Value::as_number) {
        sum += n;
        count += 1;
    }

    Ok(Value::Number(sum / count as f64))
}

/// MIN - smallest numeric argument, 0 when none is numeric
pub fn fn_min(args: &[Value]) -> FormulaResult<Value> {
    let min = args
        .iter()
        .filter_map(Value::as_number)
        .fold(None, |acc: Option<f64>, n| {
            Some(acc.map_or(n, |m| m.min(n)))
        });
    Ok(Value::Number(min.unwrap_or(0.0)))
}

/// MAX - largest numeric argument, 0 when none is numeric
pub fn fn_max(args: &[Value]) -> FormulaResult<Value> {
    let max = args
        .iter()
        .filter_map(Value::as_number)
        .fold(None, |acc: Option<f64>, n| {
            Some(acc.map_or(n, |m| m.max(n)))
        });
    Ok(Value::Number(max.unwrap_or(0.0)))
}

/// COUNT - how many arguments are numeric
pub fn fn_count(args: &[Value]) -> FormulaResult<Value> {
    let count = args.iter().filter(|v| v.as_number().is_some()).count();
    Ok(Value::Number(count as f64))
}

/// RAND - a random number in [0, 1)
///
/// Volatile: a different value on every evaluation.
pub fn fn_rand(_args: &[Value]) -> FormulaResult<Value> {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    Ok(Value::Number(rng.gen::<f64>()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nums(ns: &[f64]) -> Vec<Value> {
        ns.iter().copied().map(Value::Number).collect()
    }

    #[test]
    fn test_sum() {
        assert_eq!(fn_sum(&nums(&[1.0, 2.0, 3.0])).unwrap(), Value::Number(6.0));
        // Numeric text counts, other text does not
        let mixed = vec![
            Value::Number(1.0),
            Value::Text("2".to_string()),
            Value::Text("x".to_string()),
        ];
        assert_eq!(fn_sum(&mixed).unwrap(), Value::Number(3.0));
    }

    #[test]
    fn test_average() {
        assert_eq!(
            fn_average(&nums(&[5.0, 10.0, 15.0])).unwrap(),
            Value::Number(10.0)
        );
    }

    #[test]
    fn test_min_max() {
        assert_eq!(fn_min(&nums(&[3.0, 1.0, 2.0])).unwrap(), Value::Number(1.0));
        assert_eq!(fn_max(&nums(&[3.0, 1.0, 2.0])).unwrap(), Value::Number(3.0));
    }

    #[test]
    fn test_count() {
        let mixed = vec![
            Value::Number(1.0),
            Value::Text("2".to_string()),
            Value::Text("x".to_string()),
        ];
        assert_eq!(fn_count(&mixed).unwrap(), Value::Number(2.0));
    }

    #[test]
    fn test_rand_in_unit_interval() {
        for _ in 0..100 {
            match fn_rand(&[]).unwrap() {
                Value::Number(n) => assert!((0.0..1.0).contains(&n)),
                other => panic!("expected number, got {:?}", other),
            }
        }
    }
}
