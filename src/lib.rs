//! # shunt
//!
//! shunt is an arithmetic expression evaluator written in Rust.
//! It tokenizes an expression, reorders it into postfix with the
//! shunting-yard algorithm, and reduces the postfix sequence on a value
//! stack, with support for unary negation, parentheses, and named
//! one-argument functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::evaluate, lexer::tokenize, parser::to_postfix};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// converting, or evaluating an expression. It standardizes error reporting
/// and carries detailed information about failures, including the offending
/// text, character, or token where one is available.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, converter,
///   evaluator).
/// - Attaches descriptive messages for user feedback.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the tokenizer, the infix-to-postfix converter,
/// and the postfix evaluator to provide a complete pipeline from raw text to
/// a numeric result. The stages are pure functions evaluated in strict
/// order; a failure at any stage aborts the remaining stages for that input.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, converter, and evaluator.
/// - Provides entry points for each pipeline stage.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for result presentation and safe numeric conversion.
///
/// This module provides the display policy applied to evaluation results and
/// reusable conversion helpers used when rendering them.
///
/// # Responsibilities
/// - Safely convert between `f64` and `i64` without silent data loss.
/// - Format results, snapping near-integer values to integer form.
pub mod util;

/// Returns the numeric result of evaluating an expression.
///
/// This function runs the full pipeline on the provided expression text:
/// tokenization, infix-to-postfix conversion, and postfix evaluation. The
/// stages short-circuit, so the first failure is returned and no later
/// stage runs.
///
/// # Errors
/// Returns an error if the expression is malformed (invalid literal,
/// unknown character, mismatched parentheses, missing operands, leftover
/// values, empty input), names an unknown function, or performs a
/// mathematically undefined operation such as division by zero.
///
/// # Examples
/// ```
/// use shunt::evaluate_expression;
///
/// // Operator precedence and parentheses behave as in ordinary notation.
/// let value = evaluate_expression("3+4*2/(1-5)^2").unwrap();
/// assert!((value - 3.5).abs() < 1e-12);
///
/// // Unary minus binds after the exponent chain: -2^2 is -(2^2).
/// let value = evaluate_expression("-2^2").unwrap();
/// assert!((value - -4.0).abs() < 1e-12);
///
/// // Failures are reported, never defaulted.
/// assert!(evaluate_expression("5/0").is_err());
/// assert!(evaluate_expression("(1+2").is_err());
/// ```
pub fn evaluate_expression(expr: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let tokens = tokenize(expr)?;
    let postfix = to_postfix(&tokens)?;
    let value = evaluate(&postfix)?;

    Ok(value)
}
