//! Input controller
//!
//! [`dispatch`] is the whole state machine: a pure function from the current
//! [`InputState`] and one [`Action`] to the next state. [`Calculator`] owns a
//! state and a formatter and exposes one entry point per keypad action.

use crate::engine::action::Action;
use crate::engine::config::DisplayConfig;
use crate::engine::format::{format_number, round_result, DisplayFormatter, Screen};
use crate::engine::reducer::reduce;
use crate::engine::state::InputState;
use crate::engine::token::{Operator, Token};

/// Fractional digits kept by [`dispatch`]
pub const DEFAULT_FRACTION_DIGITS: usize = 7;

pub fn dispatch(state: InputState, action: Action) -> InputState {
    dispatch_with(state, action, DEFAULT_FRACTION_DIGITS)
}

/// [`dispatch`] with an explicit result precision
pub fn dispatch_with(mut state: InputState, action: Action, fraction_digits: usize) -> InputState {
    if action == Action::Reset {
        return InputState::default();
    }
    if matches!(action, Action::Digit(d) if d > 9) {
        return state;
    }

    state.overflow = false;
    state.result_displayed = false;

    match action {
        Action::Digit(d) => input_digit(state, d),
        Action::DecimalPoint => input_decimal(state),
        Action::Operator(op) => input_operator(state, op),
        Action::Equals => calculate(state, fraction_digits),
        Action::Delete => delete_last(state),
        Action::Reset => InputState::default(),
    }
}

fn input_digit(mut state: InputState, digit: u8) -> InputState {
    let digit = char::from(b'0' + digit);
    if state.awaiting_new_operand {
        state.display = digit.to_string();
        state.awaiting_new_operand = false;
    } else if state.display == "0" {
        state.display = digit.to_string();
    } else {
        state.display.push(digit);
    }

    if state.display_value().is_none() {
        return overflowed(state);
    }
    state
}

fn input_decimal(mut state: InputState) -> InputState {
    if state.awaiting_new_operand {
        state.display = "0.".to_string();
        state.awaiting_new_operand = false;
    } else if !state.display.contains('.') {
        state.display.push('.');
    }
    state
}

fn input_operator(mut state: InputState, op: Operator) -> InputState {
    // Two operators in a row: the latest one wins
    if state.pending_operator.is_some() && state.awaiting_new_operand {
        state.pending_operator = Some(op);
        if let Some(last) = state.tokens.last_mut() {
            *last = Token::Operator(op);
        }
        return state;
    }

    let Some(value) = state.display_value() else {
        return overflowed(state);
    };
    if state.tokens.is_empty() {
        state.first_operand = Some(value);
        state.tokens.push(Token::Number(value));
    } else {
        state.tokens.push(Token::Number(value));
        state.display = format_number(value);
        state.first_operand = Some(value);
    }

    state.tokens.push(Token::Operator(op));
    state.pending_operator = Some(op);
    state.awaiting_new_operand = true;
    state
}

fn delete_last(mut state: InputState) -> InputState {
    // Deleting from a result edits it, so the next digit appends
    if state.pending_operator.is_none() {
        state.awaiting_new_operand = false;
    }
    state.display.pop();
    if state.display.is_empty() || state.display == "-" {
        state.display = "0".to_string();
    }
    state
}

fn calculate(mut state: InputState, fraction_digits: usize) -> InputState {
    let Some(operand) = state.display_value() else {
        return overflowed(state);
    };
    let mut tokens = std::mem::take(&mut state.tokens);
    tokens.push(Token::Number(operand));

    let result = match reduce(&tokens) {
        Ok(result) => result,
        Err(err) => {
            tracing::error!(%err, expression = ?tokens, "controller produced a malformed sequence");
            debug_assert!(false, "malformed token sequence: {err}");
            return InputState::default();
        }
    };

    state.pending_operator = None;
    state.awaiting_new_operand = true;

    if !result.is_finite() {
        tracing::info!(%result, "calculation overflowed");
        return overflowed(state);
    }

    let rounded = round_result(result, fraction_digits);
    state.display = format_number(rounded);
    state.first_operand = Some(rounded);
    state.result_displayed = true;
    state
}

/// Drop the expression and show Overflow; the buffer goes back to `"0"`
fn overflowed(mut state: InputState) -> InputState {
    state.overflow = true;
    state.display = "0".to_string();
    state.tokens.clear();
    state.pending_operator = None;
    state.first_operand = None;
    state.awaiting_new_operand = true;
    state.result_displayed = false;
    state
}

/// A calculator instance: one input state plus the formatter used to show it
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: InputState,
    formatter: DisplayFormatter,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display_config(config: DisplayConfig) -> Self {
        Self {
            state: InputState::default(),
            formatter: DisplayFormatter::new(config),
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn apply(&mut self, action: Action) {
        tracing::debug!(?action, display = %self.state.display, "dispatch");
        let state = std::mem::take(&mut self.state);
        self.state = dispatch_with(state, action, self.formatter.fraction_digits());
    }

    pub fn on_digit(&mut self, digit: u8) {
        self.apply(Action::Digit(digit));
    }

    pub fn on_decimal_point(&mut self) {
        self.apply(Action::DecimalPoint);
    }

    pub fn on_operator(&mut self, op: Operator) {
        self.apply(Action::Operator(op));
    }

    pub fn on_equals(&mut self) {
        self.apply(Action::Equals);
    }

    pub fn on_delete(&mut self) {
        self.apply(Action::Delete);
    }

    pub fn on_reset(&mut self) {
        self.apply(Action::Reset);
    }

    pub fn screen(&self) -> Screen {
        self.formatter.render(&self.state)
    }

    pub fn display_text(&self) -> String {
        self.screen().text
    }

    pub fn is_overflow(&self) -> bool {
        self.screen().overflow
    }

    pub fn is_wide(&self) -> bool {
        self.screen().wide
    }

    /// Expression typed so far, for the line above the display
    pub fn expression(&self) -> String {
        self.state.expression()
    }
}
