use crate::interpreter::error::SyntaxError;
use crate::interpreter::operator::Operator;
use crate::interpreter::token::Token;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
///
/// Negating minus signs are expected to already be [`Token::UnaryMinus`].
pub(crate) fn infix_to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let mut operators: Vec<Token> = vec![];
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match (token.operator(), token) {
            (Some(operator), _) => parse_operator_token(&mut operators, &mut output, &operator),
            (None, Token::OpenParenthesis) => operators.push(Token::OpenParenthesis),
            (None, Token::CloseParenthesis) => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
            (None, number) => output.push(number),
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), SyntaxError> {
    while let Some(operator) = operators.pop() {
        if operator.is_parenthesis() {
            return Err(SyntaxError::MismatchedParentheses);
        }
        output.push(operator);
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), SyntaxError> {
    loop {
        match operators.pop() {
            None => return Err(SyntaxError::MismatchedParentheses),
            // Discard the open parenthesis.
            Some(Token::OpenParenthesis) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(operators: &mut Vec<Token>, output: &mut Vec<Token>, operator: &Operator) {
    while let Some(other_operator) = operators.last().and_then(Token::operator) {
        if !operator.yields_to(&other_operator) {
            break;
        }
        if let Some(other_operator_token) = operators.pop() {
            output.push(other_operator_token);
        }
    }

    operators.push(operator.token());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn number(text: &str) -> Token {
        Token::new_number(text)
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 3 + 4 * 2
        let infix = vec![
            number("3"),
            Token::Plus,
            number("4"),
            Token::Asterisk,
            number("2"),
        ];
        let postfix = vec![
            number("3"),
            number("4"),
            number("2"),
            Token::Asterisk,
            Token::Plus,
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 - (2 + 3)
        let infix = vec![
            number("1"),
            Token::Dash,
            Token::OpenParenthesis,
            number("2"),
            Token::Plus,
            number("3"),
            Token::CloseParenthesis,
        ];
        let postfix = vec![
            number("1"),
            number("2"),
            number("3"),
            Token::Plus,
            Token::Dash,
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_complex_expression() {
        // 1 + 2 * 3 / (4 - 5)^6^7
        let infix = vec![
            number("1"),
            Token::Plus,
            number("2"),
            Token::Asterisk,
            number("3"),
            Token::ForwardSlash,
            Token::OpenParenthesis,
            number("4"),
            Token::Dash,
            number("5"),
            Token::CloseParenthesis,
            Token::Caret,
            number("6"),
            Token::Caret,
            number("7"),
        ];
        let postfix = vec![
            number("1"),
            number("2"),
            number("3"),
            Token::Asterisk,
            number("4"),
            number("5"),
            Token::Dash,
            number("6"),
            number("7"),
            Token::Caret,
            Token::Caret,
            Token::ForwardSlash,
            Token::Plus,
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_equal_precedence_groups_left() {
        // 8 - 4 + 2
        let infix = vec![number("8"), Token::Dash, number("4"), Token::Plus, number("2")];
        let postfix = vec![number("8"), number("4"), Token::Dash, number("2"), Token::Plus];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_exponentiation_groups_right() {
        // 2 ^ 3 ^ 2
        let infix = vec![number("2"), Token::Caret, number("3"), Token::Caret, number("2")];
        let postfix = vec![number("2"), number("3"), number("2"), Token::Caret, Token::Caret];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_chained_unary_minus_nests() {
        // u- u- 3
        let infix = vec![Token::UnaryMinus, Token::UnaryMinus, number("3")];
        let postfix = vec![number("3"), Token::UnaryMinus, Token::UnaryMinus];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_unary_minus_binds_tighter_than_exponentiation() {
        // u- 2 ^ 2
        let infix = vec![Token::UnaryMinus, number("2"), Token::Caret, number("2")];
        let postfix = vec![number("2"), Token::UnaryMinus, number("2"), Token::Caret];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_keeps_every_operator() {
        // u- 2 ^ 3 * 4 / 8 + 1 - 1
        let infix = vec![
            Token::UnaryMinus,
            number("2"),
            Token::Caret,
            number("3"),
            Token::Asterisk,
            number("4"),
            Token::ForwardSlash,
            number("8"),
            Token::Plus,
            number("1"),
            Token::Dash,
            number("1"),
        ];
        let postfix = vec![
            number("2"),
            Token::UnaryMinus,
            number("3"),
            Token::Caret,
            number("4"),
            Token::Asterisk,
            number("8"),
            Token::ForwardSlash,
            number("1"),
            Token::Plus,
            number("1"),
            Token::Dash,
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let infix = vec![
            number("1"),
            Token::Plus,
            Token::OpenParenthesis,
            Token::OpenParenthesis,
            number("2"),
            Token::Plus,
            number("3"),
            Token::CloseParenthesis,
            Token::Asterisk,
            number("4"),
            Token::CloseParenthesis,
        ];
        let postfix = vec![
            number("1"),
            number("2"),
            number("3"),
            Token::Plus,
            number("4"),
            Token::Asterisk,
            Token::Plus,
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_extra_closing_parenthesis_should_return_err() {
        // (1 + 2))
        let infix = vec![
            Token::OpenParenthesis,
            number("1"),
            Token::Plus,
            number("2"),
            Token::CloseParenthesis,
            Token::CloseParenthesis,
        ];

        assert_eq!(
            infix_to_postfix(infix),
            Err(SyntaxError::MismatchedParentheses)
        );
    }

    #[test]
    fn infix_to_postfix_unclosed_parenthesis_should_return_err() {
        // (1 + 2
        let infix = vec![Token::OpenParenthesis, number("1"), Token::Plus, number("2")];

        assert_eq!(
            infix_to_postfix(infix),
            Err(SyntaxError::MismatchedParentheses)
        );
    }
}
