use crate::interpreter::error::EvalError;
use crate::interpreter::operator::Operator;
use crate::interpreter::token::Token;
use log::trace;

/// Evaluates the given postfix tokens with a stack machine.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to evaluate, in postfix format.
///
/// returns: The single value the expression evaluates to.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::evaluator::evaluate_postfix;
/// use infix_evaluator::interpreter::token::Token;
///
/// let postfix_tokens = vec![
///     Token::new_number("2"),
///     Token::new_number("3"),
///     Token::Caret,
/// ];
/// assert_eq!(evaluate_postfix(&postfix_tokens), Ok(8.0));
/// ```
pub fn evaluate_postfix(postfix_tokens: &[Token]) -> Result<f64, EvalError> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        match (token.operator(), token) {
            (Some(operator), _) => {
                let value = apply_operator(&mut operands, operator)?;
                trace!("{} -> {}", operator, value);
                operands.push(value);
            }
            (None, Token::Number(text)) => operands.push(parse_number(text)?),
            (None, token) => {
                return Err(EvalError::UnexpectedToken {
                    token: token.clone(),
                })
            }
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        remaining => Err(EvalError::MalformedExpression {
            remaining: remaining.len(),
        }),
    }
}

fn parse_number(text: &str) -> Result<f64, EvalError> {
    text.parse::<f64>().map_err(|_| EvalError::InvalidNumber {
        text: text.to_string(),
    })
}

/// Pops the operands of `operator` off the stack and computes its result.
fn apply_operator(operands: &mut Vec<f64>, operator: Operator) -> Result<f64, EvalError> {
    let operand_count = operator.arity();
    if operands.len() < operand_count {
        return Err(EvalError::InsufficientOperands { operator });
    }
    // Kept in push order, so the right-hand operand comes last.
    let arguments = operands.split_off(operands.len() - operand_count);
    match (operator, arguments.as_slice()) {
        (Operator::Negate, [x]) => Ok(-x),
        (Operator::Add, [a, b]) => Ok(a + b),
        (Operator::Subtract, [a, b]) => Ok(a - b),
        (Operator::Multiply, [a, b]) => Ok(a * b),
        (Operator::Divide, [_, b]) if *b == 0.0 => Err(EvalError::DivisionByZero),
        (Operator::Divide, [a, b]) => Ok(a / b),
        (Operator::Exponentiate, [a, b]) => Ok(a.powf(*b)),
        _ => Err(EvalError::InsufficientOperands { operator }),
    }
}
