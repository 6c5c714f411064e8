use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A mathematical operator, either binary or the unary negation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
    Negate,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl Operator {
    pub fn token(&self) -> Token {
        match self {
            Operator::Add => Token::Plus,
            Operator::Subtract => Token::Dash,
            Operator::Multiply => Token::Asterisk,
            Operator::Divide => Token::ForwardSlash,
            Operator::Exponentiate => Token::Caret,
            Operator::Negate => Token::UnaryMinus,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Exponentiate => 3,
            Operator::Negate => 4,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide => {
                Associativity::Left
            }
            Operator::Exponentiate | Operator::Negate => Associativity::Right,
        }
    }

    /// The number of operands the operator consumes when evaluated.
    pub fn arity(&self) -> usize {
        match self {
            Operator::Negate => 1,
            _ => 2,
        }
    }

    /// Whether an operator already on the stack has to be moved to the output
    /// before `self` can be pushed on top of it.
    ///
    /// Left-associative operators yield to operators of equal precedence,
    /// right-associative ones only to strictly higher precedence.
    pub fn yields_to(&self, top_of_stack: &Operator) -> bool {
        match self.associativity() {
            Associativity::Left => self.precedence_le(top_of_stack),
            Associativity::Right => self.precedence_lt(top_of_stack),
        }
    }

    pub fn precedence_lt(&self, other: &Self) -> bool {
        self.precedence().lt(&other.precedence())
    }

    pub fn precedence_le(&self, other: &Self) -> bool {
        self.precedence().le(&other.precedence())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
