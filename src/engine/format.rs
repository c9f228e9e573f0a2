//! Display formatting
//!
//! Turns an [`InputState`] into the text shown on the calculator screen,
//! together with the overflow and wide-value signals the renderer needs.

use crate::engine::config::DisplayConfig;
use crate::engine::state::InputState;
use unicode_width::UnicodeWidthStr;

/// Shown instead of a non-finite result
pub const OVERFLOW_TEXT: &str = "Overflow";

/// Upper bound on fractional digits kept by results and grouping
pub const MAX_FRACTION_DIGITS: usize = 20;

/// What the screen should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub text: String,
    pub overflow: bool,
    pub wide: bool,
}

/// Round to at most `fraction_digits` decimals, the way a `toFixed` then
/// re-parse would. `-0` comes back as `0`.
pub fn round_result(value: f64, fraction_digits: usize) -> f64 {
    let digits = fraction_digits.min(MAX_FRACTION_DIGITS);
    let rounded = format!("{:.*}", digits, value)
        .parse::<f64>()
        .unwrap_or(value);
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Shortest decimal form of a finite value, never in exponent notation
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

pub fn format_result(value: f64, fraction_digits: usize) -> String {
    format_number(round_result(value, fraction_digits))
}

/// Insert `group` between thousands of the integer part and swap the
/// decimal point for `decimal`.
pub fn group_digits(text: &str, group: &str, decimal: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + integer.len() / 3 * group.len());
    out.push_str(sign);
    let len = integer.chars().count();
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(group);
        }
        out.push(ch);
    }

    if let Some(fraction) = fraction {
        out.push_str(decimal);
        out.extend(fraction.chars().take(MAX_FRACTION_DIGITS));
    }
    out
}

#[derive(Debug, Clone, Default)]
pub struct DisplayFormatter {
    config: DisplayConfig,
}

impl DisplayFormatter {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn fraction_digits(&self) -> usize {
        self.config.fraction_digits
    }

    pub fn render(&self, state: &InputState) -> Screen {
        let overflow = state.overflow || state.display_value().is_none();
        let text = if overflow {
            OVERFLOW_TEXT.to_string()
        } else if self.config.grouping && state.result_displayed {
            group_digits(
                &state.display,
                &self.config.group_separator,
                &self.config.decimal_separator,
            )
        } else {
            state.display.clone()
        };

        let wide = self.is_wide(&text);
        Screen {
            text,
            overflow,
            wide,
        }
    }

    pub fn is_wide(&self, text: &str) -> bool {
        text.width() >= self.config.wide_threshold
    }
}
