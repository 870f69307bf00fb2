/// Builtin function lookup and application.
///
/// Declares the closed table of named one-argument functions (`sin`, `cos`,
/// `tan`, `sqrt`, `abs`, `log`, `ln`) and dispatches calls by name.
pub mod function;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::function::apply_function,
        lexer::{BinaryOperator, Token},
        parser::NEGATION_FUNCTION,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a postfix token sequence to a single numeric value.
///
/// The sequence is walked left to right over a value stack: numbers are
/// pushed; a binary operator pops its two operands (`b` first, then `a`) and
/// pushes `apply_binary(op, a, b)`; the synthetic negation identifier pops
/// one value and pushes its negation; any other identifier pops one value
/// and applies the named builtin. A well-formed sequence leaves exactly one
/// value, which becomes the result.
///
/// # Errors
/// - `RuntimeError::InsufficientOperands` when the stack runs dry mid-walk.
/// - `RuntimeError::UnknownFunction` for an identifier with no builtin.
/// - `RuntimeError::DomainError` for mathematically undefined operations.
/// - `RuntimeError::EmptyExpression` when the walk finishes with no value.
/// - `RuntimeError::TrailingValues` when more than one value remains.
/// - `RuntimeError::UnexpectedToken` for parentheses, which the converter
///   never emits in postfix order.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::evaluate, lexer::tokenize, parser::to_postfix};
///
/// let tokens = tokenize("3+4*2/(1-5)^2").unwrap();
/// let postfix = to_postfix(&tokens).unwrap();
/// let value = evaluate(&postfix).unwrap();
///
/// assert!((value - 3.5).abs() < 1e-12);
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(value) => stack.push(*value),
            Token::Operator(op) => {
                let symbol = op.to_string();
                let b = pop_operand(&mut stack, &symbol)?;
                let a = pop_operand(&mut stack, &symbol)?;
                stack.push(apply_binary(*op, a, b)?);
            },
            Token::Identifier(name) if name == NEGATION_FUNCTION => {
                let value = pop_operand(&mut stack, name)?;
                stack.push(-value);
            },
            Token::Identifier(name) => {
                let value = pop_operand(&mut stack, name)?;
                stack.push(apply_function(name, value)?);
            },
            Token::LParen | Token::RParen => {
                return Err(RuntimeError::UnexpectedToken { token: format!("{token:?}") });
            },
        }
    }

    match stack.as_slice() {
        [] => Err(RuntimeError::EmptyExpression),
        [result] => Ok(*result),
        _ => Err(RuntimeError::TrailingValues { count: stack.len() }),
    }
}

/// Applies a binary operator to its two operands.
///
/// `a` is the operand that was pushed first. Division checks its divisor
/// explicitly so that `5/0` reports a domain failure instead of quietly
/// producing an IEEE-754 infinity; `^` is ordinary floating-point `powf`,
/// fractional and negative exponents included.
///
/// # Errors
/// `RuntimeError::DomainError` on division by zero.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::apply_binary, lexer::BinaryOperator};
///
/// assert_eq!(apply_binary(BinaryOperator::Pow, 2.0, -1.0).unwrap(), 0.5);
/// assert!(apply_binary(BinaryOperator::Div, 5.0, 0.0).is_err());
/// ```
pub fn apply_binary(op: BinaryOperator, a: f64, b: f64) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Pow, Sub};

    match op {
        Add => Ok(a + b),
        Sub => Ok(a - b),
        Mul => Ok(a * b),
        Div => {
            if b == 0.0 {
                return Err(RuntimeError::DomainError { details: "division by zero".to_owned() });
            }
            Ok(a / b)
        },
        Pow => Ok(a.powf(b)),
    }
}

/// Pops one operand for `symbol`, failing when the stack has run dry.
fn pop_operand(stack: &mut Vec<f64>, symbol: &str) -> EvalResult<f64> {
    stack.pop()
         .ok_or_else(|| RuntimeError::InsufficientOperands { symbol: symbol.to_owned() })
}
