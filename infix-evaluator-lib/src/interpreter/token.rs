use crate::interpreter::operator::Operator;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A number literal, kept as the text it was written as.
    Number(String),
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    Caret,
    /// A negating `-`. Never produced by the lexer, only by the parser when it
    /// finds a `-` where an operand is expected.
    UnaryMinus,
    OpenParenthesis,
    CloseParenthesis,
}

impl Token {
    pub fn new_number(text: impl Into<String>) -> Token {
        Token::Number(text.into())
    }

    /// Maps one of `+ - * / ^ ( )` to its token.
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Dash),
            '*' => Some(Token::Asterisk),
            '/' => Some(Token::ForwardSlash),
            '^' => Some(Token::Caret),
            '(' => Some(Token::OpenParenthesis),
            ')' => Some(Token::CloseParenthesis),
            _ => None,
        }
    }

    /// The operator this token stands for, if any. A [`Token::Dash`] always
    /// means subtraction here; negation is [`Token::UnaryMinus`].
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Token::Plus => Some(Operator::Add),
            Token::Dash => Some(Operator::Subtract),
            Token::Asterisk => Some(Operator::Multiply),
            Token::ForwardSlash => Some(Operator::Divide),
            Token::Caret => Some(Operator::Exponentiate),
            Token::UnaryMinus => Some(Operator::Negate),
            Token::Number(_) | Token::OpenParenthesis | Token::CloseParenthesis => None,
        }
    }

    pub fn is_parenthesis(&self) -> bool {
        matches!(self, Token::OpenParenthesis | Token::CloseParenthesis)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::Caret => write!(f, "^"),
            Token::UnaryMinus => write!(f, "u-"),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
