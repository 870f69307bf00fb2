#[derive(Debug)]
/// Represents all errors that can occur during postfix evaluation.
pub enum RuntimeError {
    /// An operator or function ran out of operands.
    InsufficientOperands {
        /// The operator symbol or function name that came up short.
        symbol: String,
    },
    /// Called an unknown function.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// A mathematically undefined operation was attempted.
    DomainError {
        /// Details about the undefined operation.
        details: String,
    },
    /// The sequence finished with more than one value left over.
    TrailingValues {
        /// How many values remained on the stack.
        count: usize,
    },
    /// The sequence produced no value at all.
    EmptyExpression,
    /// A token that cannot appear in postfix order was encountered.
    UnexpectedToken {
        /// The offending token.
        token: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { symbol } => {
                write!(f, "Not enough operands for '{symbol}'.")
            },

            Self::UnknownFunction { name } => write!(f, "Unknown function '{name}'."),

            Self::DomainError { details } => write!(f, "Domain error: {details}."),

            Self::TrailingValues { count } => write!(f,
                                                     "Expected a single result, but {count} values remain."),

            Self::EmptyExpression => write!(f, "Empty expression."),

            Self::UnexpectedToken { token } => {
                write!(f, "Unexpected token in postfix sequence: {token}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
