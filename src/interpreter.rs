/// Reduces a postfix token sequence to a single numeric value.
///
/// The evaluator walks the postfix sequence with a value stack, applying
/// binary operators and named one-argument functions as they appear, and
/// enforces numeric-domain validity along the way.
///
/// # Responsibilities
/// - Applies binary operators with explicit division-by-zero checking.
/// - Dispatches named builtin functions and the synthetic negation marker.
/// - Verifies the sequence reduces to exactly one value.
pub mod evaluator;
/// Turns raw expression text into a sequence of tokens.
///
/// The lexer recognizes numeric literals, function identifiers, the five
/// binary operator symbols, and parentheses. It performs no lookahead and no
/// token merging; resolving ambiguity (such as unary minus) is the
/// converter's job.
///
/// # Responsibilities
/// - Defines the `Token` and `BinaryOperator` types shared by all stages.
/// - Rejects malformed numeric literals and unknown characters.
pub mod lexer;
/// Reorders infix token sequences into postfix (reverse Polish) order.
///
/// The converter runs the shunting-yard algorithm with support for unary
/// negation and one-argument function calls, producing a sequence the
/// evaluator can reduce in a single left-to-right pass.
///
/// # Responsibilities
/// - Applies the operator precedence and associativity rules.
/// - Classifies unary minus from one-token lookback and rewrites it into a
///   synthetic function application.
/// - Detects mismatched parentheses.
pub mod parser;
