use crate::{
    error::ParseError,
    interpreter::lexer::{BinaryOperator, Token},
};

/// Result type used by the converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// Name of the synthetic one-argument function that models unary negation.
///
/// The converter rewrites a unary `-` into this identifier so that a single
/// popping rule covers both named functions and negation; the evaluator
/// special-cases the name back into a sign flip.
pub const NEGATION_FUNCTION: &str = "neg";

/// Binding strength of a pending function application (including the
/// synthetic negation) in the precedence comparison. Matching `^` means a
/// pending application pops before any left-associative operator, while a
/// right-associative exponent chain still groups to the right first, so
/// `-2^2` is `-(2^2)` and `2^-1` is `2^(-1)`.
const APPLICATION_PRECEDENCE: u8 = 4;

/// Reorders an infix token sequence into postfix (reverse Polish) order.
///
/// This is the shunting-yard algorithm, extended with unary-minus detection
/// and one-argument function calls. An output sequence and an operator stack
/// are maintained; each input token is handled by kind:
///
/// - numbers go straight to the output;
/// - identifiers are pushed as pending function applications;
/// - a `-` in unary position (see [`minus_is_unary`]) is pushed as the
///   synthetic [`NEGATION_FUNCTION`] identifier;
/// - a binary operator first pops every stack entry that binds at least as
///   tightly, then is pushed itself;
/// - `(` is pushed; `)` drains the stack back to the matching `(` and then
///   pops a wrapping function identifier, if any.
///
/// At the end of input the remaining stack is drained to the output; a
/// parenthesis still on the stack means the groups never matched.
///
/// # Errors
/// `ParseError::MismatchedParens` when a `)` has no matching `(`, or a `(`
/// is never closed.
///
/// # Example
/// ```
/// use shunt::interpreter::{
///     lexer::{BinaryOperator, Token, tokenize},
///     parser::to_postfix,
/// };
///
/// let tokens = tokenize("3+4*2").unwrap();
/// let postfix = to_postfix(&tokens).unwrap();
/// assert_eq!(postfix,
///            vec![Token::Number(3.0),
///                 Token::Number(4.0),
///                 Token::Number(2.0),
///                 Token::Operator(BinaryOperator::Mul),
///                 Token::Operator(BinaryOperator::Add)]);
///
/// let tokens = tokenize("(1+2").unwrap();
/// assert!(to_postfix(&tokens).is_err());
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();
    let mut previous: Option<&Token> = None;

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token.clone()),
            Token::Identifier(_) => operators.push(token.clone()),
            Token::Operator(op) => {
                if *op == BinaryOperator::Sub && minus_is_unary(previous) {
                    operators.push(Token::Identifier(NEGATION_FUNCTION.to_owned()));
                } else {
                    pop_tighter_bindings(*op, &mut operators, &mut output);
                    operators.push(token.clone());
                }
            },
            Token::LParen => operators.push(Token::LParen),
            Token::RParen => close_group(&mut operators, &mut output)?,
        }
        previous = Some(token);
    }

    while let Some(top) = operators.pop() {
        if matches!(top, Token::LParen | Token::RParen) {
            return Err(ParseError::MismatchedParens);
        }
        output.push(top);
    }

    Ok(output)
}

/// Classifies a `-` from its one-token lookback.
///
/// A minus negates (rather than subtracts) when no completed operand can
/// precede it: at the start of the expression, directly after another
/// operator, or directly after an opening parenthesis.
const fn minus_is_unary(previous: Option<&Token>) -> bool {
    match previous {
        None | Some(Token::Operator(_) | Token::LParen) => true,
        Some(_) => false,
    }
}

/// Pops stack entries that must reach the output before `incoming` is
/// pushed: every entry whose binding strength exceeds the incoming
/// operator's precedence, or ties it while the incoming operator is
/// left-associative. Pending function applications compare with
/// [`APPLICATION_PRECEDENCE`]; an opening parenthesis bounds the scan.
fn pop_tighter_bindings(incoming: BinaryOperator,
                        operators: &mut Vec<Token>,
                        output: &mut Vec<Token>) {
    loop {
        let stacked = match operators.last() {
            Some(Token::Identifier(_)) => APPLICATION_PRECEDENCE,
            Some(Token::Operator(op)) => op.precedence(),
            _ => break,
        };

        let outranks = stacked > incoming.precedence()
                       || (stacked == incoming.precedence() && !incoming.is_right_associative());
        if !outranks {
            break;
        }

        if let Some(top) = operators.pop() {
            output.push(top);
        }
    }
}

/// Drains operators for a `)` until the matching `(` is found and discarded,
/// then pops a wrapping function identifier, if any, so the call binds to
/// the group it encloses.
fn close_group(operators: &mut Vec<Token>, output: &mut Vec<Token>) -> ParseResult<()> {
    loop {
        match operators.pop() {
            Some(Token::LParen) => break,
            Some(token) => output.push(token),
            None => return Err(ParseError::MismatchedParens),
        }
    }

    if matches!(operators.last(), Some(Token::Identifier(_)))
       && let Some(function) = operators.pop()
    {
        output.push(function);
    }

    Ok(())
}
