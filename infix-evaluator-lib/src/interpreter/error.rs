use crate::interpreter::operator::Operator;
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// Errors found while splitting the input text into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that is not part of any token.
    InvalidCharacter {
        character: char,
        /// Zero-based character index into the input.
        position: usize,
    },
    /// A number literal containing more than one `.`.
    MultipleDecimalPoints {
        /// Zero-based character index where the literal starts.
        position: usize,
    },
}

/// Errors found while reordering infix tokens into postfix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    MismatchedParentheses,
}

/// Errors found while running a postfix expression.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An operator found fewer values on the stack than it consumes.
    InsufficientOperands { operator: Operator },
    DivisionByZero,
    /// Evaluation ended with other than exactly one value on the stack.
    MalformedExpression { remaining: usize },
    /// A number token whose text is not a valid float.
    InvalidNumber { text: String },
    /// A token that has no meaning in postfix form, i.e. a parenthesis.
    UnexpectedToken { token: Token },
}

/// Any error that can occur when evaluating an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Lex(LexError),
    Syntax(SyntaxError),
    Eval(EvalError),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LexError::InvalidCharacter {
                character,
                position,
            } => write!(f, "Invalid character: {} (at position {})", character, position),
            LexError::MultipleDecimalPoints { position } => write!(
                f,
                "Invalid number with multiple dots (at position {})",
                position
            ),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::MismatchedParentheses => write!(f, "Mismatched parentheses"),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InsufficientOperands {
                operator: Operator::Negate,
            } => write!(f, "Not enough operands for unary minus"),
            EvalError::InsufficientOperands { .. } => write!(f, "Not enough operands"),
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::MalformedExpression { .. } => write!(f, "Invalid expression"),
            EvalError::InvalidNumber { text } => write!(f, "Invalid number: {}", text),
            EvalError::UnexpectedToken { token } => {
                write!(f, "Unknown token in evaluation: {}", token)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(error) => write!(f, "{}", error),
            Error::Syntax(error) => write!(f, "{}", error),
            Error::Eval(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for LexError {}

impl std::error::Error for SyntaxError {}

impl std::error::Error for EvalError {}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(error) => Some(error),
            Error::Syntax(error) => Some(error),
            Error::Eval(error) => Some(error),
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Error::Lex(error)
    }
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Error::Syntax(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Error::Eval(error)
    }
}
