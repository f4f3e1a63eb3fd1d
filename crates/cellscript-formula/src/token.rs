//! Postfix token types
//!
//! The parser emits an ordered token sequence in postfix order: every
//! operator and call marker follows its operands, so the evaluator can run
//! a single stack pass. Order is load-bearing.

/// One element of a postfix token sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A leaf value, kept textual until evaluation:
    /// - digit-leading text is a numeric literal (`50`)
    /// - a leading `"` marks a string literal (`"hello` stores `hello`)
    /// - anything else is a raw cell-address reference (`B10`)
    Operand(String),
    /// Binary arithmetic operator
    Op(Operator),
    /// Function-call marker: uppercase name and argument count
    Call(String, usize),
}

impl Token {
    /// Operand text with the string-literal marker, if this is an operand
    pub fn operand_text(&self) -> Option<&str> {
        match self {
            Token::Operand(s) => Some(s),
            _ => None,
        }
    }
}

/// The four binary operators of the formula language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The operator for a source character, if it is one
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Whether this is `*` or `/`
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Operator::Multiply | Operator::Divide)
    }
}

