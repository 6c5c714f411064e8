use crate::interpreter::token::Token;

/// What the next token of a well-formed infix expression has to be.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Expectation {
    /// At the start, after an operator or after `(`. A `-` here negates.
    Operand,
    /// After a number or `)`. A `-` here subtracts.
    Operator,
}

impl Expectation {
    fn after(token: &Token) -> Expectation {
        match token {
            Token::Number(_) | Token::CloseParenthesis => Expectation::Operator,
            _ => Expectation::Operand,
        }
    }
}

/// Replaces every `-` that stands where an operand is expected with
/// [`Token::UnaryMinus`]. All other tokens are left as they are.
pub(crate) fn rewrite_unary_minus(tokens: Vec<Token>) -> Vec<Token> {
    let mut expectation = Expectation::Operand;
    tokens
        .into_iter()
        .map(|token| {
            let token = match (token, expectation) {
                (Token::Dash, Expectation::Operand) => Token::UnaryMinus,
                (token, _) => token,
            };
            expectation = Expectation::after(&token);
            token
        })
        .collect()
}
