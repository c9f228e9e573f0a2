use crate::engine::token::{Operator, Token};

/// Everything the calculator remembers between key presses.
///
/// `display` always parses as a finite number. `tokens` is either empty or
/// ends with an operator between actions; it is only read when equals is
/// pressed and is cleared right after.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    pub display: String,
    pub tokens: Vec<Token>,
    pub awaiting_new_operand: bool,
    pub pending_operator: Option<Operator>,
    pub first_operand: Option<f64>,
    pub overflow: bool,
    pub result_displayed: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            tokens: Vec::new(),
            awaiting_new_operand: false,
            pending_operator: None,
            first_operand: None,
            overflow: false,
            result_displayed: false,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Numeric value of the display buffer, `None` unless it is a finite number
    pub fn display_value(&self) -> Option<f64> {
        self.display
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// The expression entered so far, e.g. `12 + 3 ×`
    pub fn expression(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
