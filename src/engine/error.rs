use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("malformed token sequence at position {position}: expected {expected}")]
    MalformedSequence {
        position: usize,
        expected: &'static str,
    },
}
