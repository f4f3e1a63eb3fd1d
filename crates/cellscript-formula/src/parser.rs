//! Infix formula parser
//!
//! Converts a formula body (the text after the leading `=`) into a postfix
//! token sequence in a single left-to-right scan, handling string literals,
//! function calls with variadic arguments, and range expansion (`A1:B3`).
//!
//! Operator ordering applies one rule only: a pending `*` or `/` ahead of a
//! `+` or `-` flushes the whole operator stack. It is deliberately not a
//! full shunting-yard precedence pass.

use crate::error::{FormulaError, FormulaResult};
use crate::token::{Operator, Token};
use cellscript_core::{alphabet, CellCoords};

/// Parse a formula body into a postfix token sequence
///
/// An empty result is valid (degenerate input such as an empty body); the
/// caller decides what to do with it.
///
/// # Example
/// ```rust
/// use cellscript_formula::parse;
///
/// let tokens = parse("SUM(A1,A2)+50").unwrap();
/// assert_eq!(tokens.len(), 5); // A1 A2 SUM(2) 50 +
/// ```
pub fn parse(body: &str) -> FormulaResult<Vec<Token>> {
    InfixScanner::new(body).run()
}

/// Operator-stack entries
///
/// The stack carries pending operators, function names awaiting their `)`,
/// and bare grouping parens. Stray punctuation rides along too and drains
/// to the output as reference text, where the evaluator rejects it.
#[derive(Debug)]
enum StackEntry {
    Op(Operator),
    Name(String),
    LParen,
    Stray(char),
}

impl StackEntry {
    fn into_token(self) -> Token {
        match self {
            StackEntry::Op(op) => Token::Op(op),
            StackEntry::Name(name) => Token::Operand(name),
            StackEntry::LParen => Token::Operand("(".to_string()),
            StackEntry::Stray(c) => Token::Operand(c.to_string()),
        }
    }
}

/// Argument mode inside a function call: the most recent `,` or `:` marker
/// before the closing `)` decides how the call is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgMode {
    None,
    Comma,
    Range,
}

struct InfixScanner<'a> {
    input: &'a str,
    pos: usize,
    output: Vec<Token>,
    ops: Vec<StackEntry>,
    /// In-progress identifier or number, case-folded to uppercase
    acc: String,
    arg_mode: ArgMode,
    arg_len: usize,
}

impl<'a> InfixScanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            output: Vec::new(),
            ops: Vec::new(),
            acc: String::new(),
            arg_mode: ArgMode::None,
            arg_len: 1,
        }
    }

    fn run(mut self) -> FormulaResult<Vec<Token>> {
        while let Some(c) = self.peek_char() {
            self.advance();

            if c == ' ' {
                continue;
            }

            if c.is_ascii_alphanumeric() {
                self.acc.push(c.to_ascii_uppercase());
            } else if c == '"' {
                self.scan_string()?;
            } else {
                let flushed = self.flush_accumulator();
                match c {
                    ')' => self.close_paren()?,
                    ':' => self.arg_mode = ArgMode::Range,
                    ',' => {
                        self.arg_mode = ArgMode::Comma;
                        self.arg_len += 1;
                    }
                    '(' if flushed => {
                        // The identifier just flushed is a function name;
                        // it moves from the output to the operator stack.
                        if let Some(Token::Operand(name)) = self.output.pop() {
                            self.ops.push(StackEntry::Name(name));
                        }
                    }
                    _ => self.push_operator(c),
                }
            }
        }

        self.flush_accumulator();
        while let Some(entry) = self.ops.pop() {
            self.output.push(entry.into_token());
        }

        Ok(self.output)
    }

    // === Character scanning ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    /// Scan a quoted literal verbatim (no escape handling) up to the next
    /// `"`. Any accumulated identifier text folds into the literal. The
    /// operand keeps a leading `"` marker byte so the evaluator can tell it
    /// from a bare reference.
    fn scan_string(&mut self) -> FormulaResult<()> {
        let mut literal = std::mem::take(&mut self.acc);

        loop {
            match self.peek_char() {
                Some('"') => {
                    self.advance();
                    break;
                }
                Some(c) => {
                    literal.push(c);
                    self.advance();
                }
                None => return Err(FormulaError::UnterminatedString),
            }
        }

        self.output.push(Token::Operand(format!("\"{}", literal)));
        Ok(())
    }

    // === Stack handling ===

    /// Push the pending identifier onto the output, reporting whether there
    /// was one.
    fn flush_accumulator(&mut self) -> bool {
        if self.acc.is_empty() {
            return false;
        }
        let text = std::mem::take(&mut self.acc);
        self.output.push(Token::Operand(text));
        true
    }

    fn pop_operand(&mut self) -> FormulaResult<String> {
        match self.output.pop() {
            Some(Token::Operand(text)) => Ok(text),
            _ => Err(FormulaError::MalformedExpression),
        }
    }

    fn close_paren(&mut self) -> FormulaResult<()> {
        let top = self.ops.pop();

        match self.arg_mode {
            ArgMode::Range => {
                let name = match top {
                    Some(StackEntry::Name(name)) => name,
                    _ => return Err(FormulaError::MalformedExpression),
                };

                // Range argument: the two most recent operands are the end
                // then the start. Expand the rectangle column-major, one
                // operand per covered address.
                let end = CellCoords::parse(&self.pop_operand()?)?;
                let start = CellCoords::parse(&self.pop_operand()?)?;

                let mut count = 0;
                for col in start.col..=end.col {
                    for row in start.row..=end.row {
                        self.output
                            .push(Token::Operand(format!("{}{}", alphabet::string_at(col), row)));
                        count += 1;
                    }
                }
                self.output.push(Token::Call(name, count));
            }
            ArgMode::Comma => {
                let name = match top {
                    Some(StackEntry::Name(name)) => name,
                    _ => return Err(FormulaError::MalformedExpression),
                };
                self.output.push(Token::Call(name, self.arg_len));
                self.arg_len = 1;
            }
            ArgMode::None => {
                // Plain grouping: drain operators until the matching '('.
                let mut entry = top;
                while let Some(e) = entry {
                    if matches!(e, StackEntry::LParen) {
                        break;
                    }
                    self.output.push(e.into_token());
                    entry = self.ops.pop();
                }
            }
        }

        self.arg_mode = ArgMode::None;
        Ok(())
    }

    fn push_operator(&mut self, c: char) {
        if let Some(op) = Operator::from_char(c) {
            // The single ordering rule: '+'/'-' behind a pending '*'/'/'
            // flushes the entire operator stack first.
            if matches!(op, Operator::Add | Operator::Subtract) {
                if let Some(StackEntry::Op(top)) = self.ops.last() {
                    if top.is_multiplicative() {
                        while let Some(entry) = self.ops.pop() {
                            self.output.push(entry.into_token());
                        }
                    }
                }
            }
            self.ops.push(StackEntry::Op(op));
        } else if c == '(' {
            self.ops.push(StackEntry::LParen);
        } else {
            self.ops.push(StackEntry::Stray(c));
        }
    }
}
