use crate::interpreter::error::LexError;
use crate::interpreter::token::Token;
use log::trace;
use std::iter::Peekable;

/// Splits an infix expression into its tokens.
///
/// Whitespace separates tokens but is otherwise ignored. A run of digits and
/// dots forms one number literal, which may contain at most one dot.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression, in the order they were written.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::lexer::tokenize;
/// use infix_evaluator::interpreter::token::Token;
///
/// let tokens = tokenize("1.5 * 2").unwrap();
/// assert_eq!(
///     tokens,
///     vec![Token::new_number("1.5"), Token::Asterisk, Token::new_number("2")]
/// );
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut characters = expression.chars().enumerate().peekable();

    while let Some(&(position, character)) = characters.peek() {
        if character.is_whitespace() {
            characters.next();
        } else if is_number_character(character) {
            tokens.push(read_number(&mut characters, position)?);
        } else if let Some(token) = Token::from_symbol(character) {
            characters.next();
            tokens.push(token);
        } else {
            return Err(LexError::InvalidCharacter {
                character,
                position,
            });
        }
    }

    trace!("Lexed {:?} into {} tokens", expression, tokens.len());
    Ok(tokens)
}

fn is_number_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

/// Consumes the longest run of digits and dots starting at `start`.
fn read_number(
    characters: &mut Peekable<impl Iterator<Item = (usize, char)>>,
    start: usize,
) -> Result<Token, LexError> {
    let mut text = String::new();
    let mut dots = 0;

    while let Some((_, character)) = characters.next_if(|&(_, c)| is_number_character(c)) {
        if character == '.' {
            dots += 1;
            if dots > 1 {
                return Err(LexError::MultipleDecimalPoints { position: start });
            }
        }
        text.push(character);
    }

    if text == "." {
        return Err(LexError::InvalidCharacter {
            character: '.',
            position: start,
        });
    }

    Ok(Token::Number(text))
}
