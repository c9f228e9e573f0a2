//! Token sequence reduction
//!
//! The sequence is collapsed one operator symbol at a time, in the order
//! given by [`OPERATOR_PRIORITY`]. For each symbol, the first occurrence and
//! its two neighbours are replaced by the computed value until the symbol no
//! longer appears. This is not textual left-to-right evaluation:
//! `8 - 3 + 2` reduces the `+` first and yields `3`.

use super::error::CalcError;
use super::token::{Operator, Token};

/// Scan order used by [`reduce`].
pub const OPERATOR_PRIORITY: [Operator; 4] = [
    Operator::Multiply,
    Operator::Divide,
    Operator::Add,
    Operator::Subtract,
];

/// Check that a sequence is `Number (Operator Number)*`.
pub fn validate(tokens: &[Token]) -> Result<(), CalcError> {
    if tokens.is_empty() {
        return Err(CalcError::MalformedSequence {
            position: 0,
            expected: "number",
        });
    }

    for (position, token) in tokens.iter().enumerate() {
        let expects_number = position % 2 == 0;
        match (expects_number, token) {
            (true, Token::Number(_)) | (false, Token::Operator(_)) => {}
            (true, Token::Operator(_)) => {
                return Err(CalcError::MalformedSequence {
                    position,
                    expected: "number",
                })
            }
            (false, Token::Number(_)) => {
                return Err(CalcError::MalformedSequence {
                    position,
                    expected: "operator",
                })
            }
        }
    }

    if tokens.len() % 2 == 0 {
        return Err(CalcError::MalformedSequence {
            position: tokens.len(),
            expected: "number",
        });
    }

    Ok(())
}

/// Reduce a well-formed token sequence to a single value.
///
/// Division by zero is not an error here: the non-finite value is returned
/// and the caller decides how to present it.
pub fn reduce(tokens: &[Token]) -> Result<f64, CalcError> {
    validate(tokens)?;

    let mut sequence = tokens.to_vec();
    for op in OPERATOR_PRIORITY {
        while let Some(index) = sequence.iter().position(|t| t.is_operator(op)) {
            // validate() guarantees numbers on both sides of every operator
            let (lhs, rhs) = match (sequence[index - 1], sequence[index + 1]) {
                (Token::Number(lhs), Token::Number(rhs)) => (lhs, rhs),
                _ => {
                    return Err(CalcError::MalformedSequence {
                        position: index,
                        expected: "operands around operator",
                    })
                }
            };
            let value = op.apply(lhs, rhs);
            sequence.splice(index - 1..=index + 1, [Token::Number(value)]);
        }
    }

    match sequence.as_slice() {
        [Token::Number(result)] => Ok(*result),
        _ => Err(CalcError::MalformedSequence {
            position: 0,
            expected: "single result",
        }),
    }
}
