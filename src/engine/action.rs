use crate::engine::token::Operator;

/// Discrete keypad actions understood by the calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// A single digit, 0 through 9
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Delete,
    Reset,
}

impl Action {
    /// Keypad label for the action
    pub fn label(&self) -> String {
        match self {
            Action::Digit(d) => d.to_string(),
            Action::DecimalPoint => ".".to_string(),
            Action::Operator(op) => op.symbol().to_string(),
            Action::Equals => "=".to_string(),
            Action::Delete => "DEL".to_string(),
            Action::Reset => "RESET".to_string(),
        }
    }
}
