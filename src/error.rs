/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression or
/// converting it to postfix order. Parse errors include malformed numeric
/// literals, characters outside the expression language, and unbalanced
/// parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a postfix
/// sequence: missing operands, unknown function names, mathematically
/// undefined operations, and malformed sequences.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
