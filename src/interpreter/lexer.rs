use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an arithmetic expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// Identifier tokens; function names such as `sin` or `sqrt`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Binary operator tokens: `+`, `-`, `*`, `/` and `^`.
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("^", |_| BinaryOperator::Pow)]
    Operator(BinaryOperator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Represents a binary arithmetic operator.
///
/// Operators are compared by precedence during infix-to-postfix conversion;
/// see [`Self::precedence`] and [`Self::is_right_associative`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Returns the binding strength used when ordering operators.
    ///
    /// Exponentiation binds tightest, then the multiplicative operators,
    /// then the additive ones.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::lexer::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Pow.precedence() > BinaryOperator::Mul.precedence());
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Mul.precedence(), BinaryOperator::Div.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 4,
            Self::Mul | Self::Div => 3,
            Self::Add | Self::Sub => 2,
        }
    }

    /// Returns `true` when consecutive uses of this operator group to the
    /// right. Only `^` does: `2^3^2` means `2^(3^2)`.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

/// Splits an expression into a sequence of tokens.
///
/// Whitespace is skipped. Runs of digits and decimal points become `Number`
/// tokens, alphabetic runs become `Identifier` tokens, and the five operator
/// symbols and parentheses become their own tokens. Ambiguity resolution
/// (such as unary minus) is deferred to the converter, which has sequence
/// context.
///
/// # Errors
/// - `ParseError::InvalidNumber` if a numeric run does not parse as a finite
///   number.
/// - `ParseError::UnknownCharacter` for any character outside the expression
///   language.
///
/// # Example
/// ```
/// use shunt::interpreter::lexer::{BinaryOperator, Token, tokenize};
///
/// let tokens = tokenize("1 + sin(2)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(1.0),
///                 Token::Operator(BinaryOperator::Add),
///                 Token::Identifier("sin".to_string()),
///                 Token::LParen,
///                 Token::Number(2.0),
///                 Token::RParen]);
///
/// assert!(tokenize("1.2.3").is_err());
/// ```
pub fn tokenize(expr: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expr);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => return Err(classify_lex_failure(lexer.slice())),
        }
    }

    Ok(tokens)
}

/// Turns a rejected input slice into the matching tokenizer error.
///
/// Only two rules can reject: the numeric rule (its callback refuses
/// malformed or non-finite literals) and the fallback for characters no rule
/// matches. The slice's first character tells the two cases apart.
fn classify_lex_failure(slice: &str) -> ParseError {
    if slice.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        ParseError::InvalidNumber { text: slice.to_owned() }
    } else {
        ParseError::UnknownCharacter { character: slice.chars().next().unwrap_or(' ') }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid, finite number.
/// - `None`: If the slice is not a valid number (e.g. `1.2.3`).
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|value: &f64| value.is_finite())
}
