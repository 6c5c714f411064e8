pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::Error;
use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::token::Token;
use anyhow::Context;
use log::debug;
use string_builder::Builder;

/// The outcome of evaluating an expression, along with the intermediate
/// token sequences it went through.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The tokens of the expression as written.
    pub tokens: Vec<Token>,
    /// The same expression in postfix order.
    pub postfix: Vec<Token>,
    pub value: f64,
}

impl Evaluation {
    /// Whether the value has no fractional part, e.g. to print `11` rather
    /// than `11.0`.
    pub fn is_integral(&self) -> bool {
        self.value.is_finite() && self.value == self.value.floor()
    }
}

/// Calculates the value of the given infix expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, made of numbers,
///   `+ - * / ^` and parentheses.
///
/// returns: The tokens, the postfix tokens and the value of the expression.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::evaluate;
///
/// let evaluation = evaluate("3 + 4 * 2").unwrap();
/// assert_eq!(evaluation.value, 11.0);
/// assert!(evaluation.is_integral());
/// ```
pub fn evaluate(expression: &str) -> Result<Evaluation, Error> {
    let tokens = lexer::tokenize(expression)?;
    let postfix = parser::parse(tokens.clone())?;
    let value = evaluate_postfix(&postfix)?;
    debug!("{:?} = {}", expression, value);
    Ok(Evaluation {
        tokens,
        postfix,
        value,
    })
}

/// Prints the given tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::tokens_to_string;
/// use infix_evaluator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::new_number("3"),
///     Token::UnaryMinus,
///     Token::new_number("4"),
///     Token::Plus,
/// ];
/// let printed_tokens = tokens_to_string(&tokens)?;
/// assert_eq!(printed_tokens, "3 u- 4 +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> anyhow::Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}
