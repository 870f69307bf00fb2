#[derive(Debug)]
/// Represents all errors that can occur during tokenization or
/// infix-to-postfix conversion.
pub enum ParseError {
    /// A numeric literal could not be parsed as a finite number.
    InvalidNumber {
        /// The literal text as written.
        text: String,
    },
    /// Found a character that is not part of the expression language.
    UnknownCharacter {
        /// The character encountered.
        character: char,
    },
    /// Parentheses do not pair up.
    MismatchedParens,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { text } => write!(f, "Invalid number: {text}."),

            Self::UnknownCharacter { character } => {
                write!(f, "Unknown character: {character}.")
            },

            Self::MismatchedParens => write!(f, "Mismatched parentheses."),
        }
    }
}

impl std::error::Error for ParseError {}
