mod infix_converter;
mod unary_rewriter;

use crate::interpreter::error::SyntaxError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::parser::unary_rewriter::rewrite_unary_minus;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::debug;

/// Parses the given infix tokens into the equivalent postfix tokens,
/// which can be evaluated from left to right with a single stack.
///
/// Every `-` standing where an operand is expected becomes a
/// [`Token::UnaryMinus`], and no parentheses remain in the output.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The equivalent tokens, in postfix format.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), infix_evaluator::interpreter::error::SyntaxError> {
/// use infix_evaluator::interpreter::parser::parse;
/// use infix_evaluator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Dash,
///     Token::new_number("3"),
///     Token::Plus,
///     Token::new_number("4"),
/// ];
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(
///     postfix_tokens,
///     vec![
///         Token::new_number("3"),
///         Token::UnaryMinus,
///         Token::new_number("4"),
///         Token::Plus,
///     ]
/// );
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let disambiguated_tokens = rewrite_unary_minus(infix_tokens);
    let postfix_tokens = infix_to_postfix(disambiguated_tokens)?;
    debug!("Postfix: {}", postfix_tokens.iter().join(" "));
    Ok(postfix_tokens)
}
