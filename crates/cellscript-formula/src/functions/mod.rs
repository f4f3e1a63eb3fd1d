//! Built-in formula functions
//!
//! The registry is owned by the caller of the renderer: hosts can start
//! from the built-in set, start empty, or replace entries. Function
//! arguments arrive fully evaluated, in written left-to-right order.

pub mod logical;
pub mod math;
pub mod text;

use crate::error::{FormulaError, FormulaResult};
use crate::value::Value;
use std::collections::HashMap;

/// Function implementation signature
pub type FormulaFn = fn(&[Value]) -> FormulaResult<Value>;

/// Function definition
pub struct FormulaDef {
    /// Function name (uppercase)
    pub name: &'static str,
    /// Minimum arguments
    pub min_args: usize,
    /// Maximum arguments (None = unlimited)
    pub max_args: Option<usize>,
    /// Implementation
    pub func: FormulaFn,
}

impl FormulaDef {
    /// Validate an argument count against this definition's arity
    pub fn check_args(&self, actual: usize) -> FormulaResult<()> {
        let within_max = self.max_args.map_or(true, |max| actual <= max);
        if actual >= self.min_args && within_max {
            return Ok(());
        }

        let expected = match self.max_args {
            Some(max) if max == self.min_args => max.to_string(),
            Some(max) => format!("{} to {}", self.min_args, max),
            None => format!("at least {}", self.min_args),
        };
        Err(FormulaError::ArgumentCount {
            function: self.name.to_string(),
            expected,
            actual,
        })
    }
}

/// Function registry
///
/// Lookup is case-sensitive and expects uppercase names; the parser folds
/// formula text to uppercase before any name reaches the evaluator.
pub struct FormulaRegistry {
    functions: HashMap<String, FormulaDef>,
}

impl FormulaRegistry {
    /// Create a registry with all built-in functions
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register_math_functions();
        registry.register_logical_functions();
        registry.register_text_functions();

        registry
    }

    /// Create a registry with no functions
    pub fn empty() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Look up a function by (uppercase) name
    pub fn get(&self, name: &str) -> Option<&FormulaDef> {
        self.functions.get(name)
    }

    /// Register a function, replacing any existing entry with the same name
    pub fn register(&mut self, def: FormulaDef) {
        self.functions.insert(def.name.to_string(), def);
    }

    fn register_math_functions(&mut self) {
        self.register(FormulaDef {
            name: "SUM",
            min_args: 1,
            max_args: None,
            func: math::fn_sum,
        });

        self.register(FormulaDef {
            name: "AVERAGE",
            min_args: 1,
            max_args: None,
            func: math::fn_average,
        });

        self.register(FormulaDef {
            name: "MIN",
            min_args: 1,
            max_args: None,
            func: math::fn_min,
        });

        self.register(FormulaDef {
            name: "MAX",
            min_args: 1,
            max_args: None,
            func: math::fn_max,
        });

        self.register(FormulaDef {
            name: "COUNT",
            min_args: 1,
            max_args: None,
            func: math::fn_count,
        });

        self.register(FormulaDef {
            name: "RAND",
            min_args: 0,
            max_args: Some(0),
            func: math::fn_rand,
        });
    }

    fn register_logical_functions(&mut self) {
        self.register(FormulaDef {
            name: "IF",
            min_args: 2,
            max_args: Some(3),
            func: logical::fn_if,
        });

        self.register(FormulaDef {
            name: "AND",
            min_args: 1,
            max_args: None,
            func: logical::fn_and,
        });

        self.register(FormulaDef {
            name: "OR",
            min_args: 1,
            max_args: None,
            func: logical::fn_or,
        });
    }

    fn register_text_functions(&mut self) {
        self.register(FormulaDef {
            name: "CONCAT",
            min_args: 1,
            max_args: None,
            func: text::fn_concat,
        });
    }
}

impl Default for FormulaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
