pub mod action;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod reducer;
pub mod state;
pub mod token;

pub use action::Action;
pub use controller::{dispatch, dispatch_with, Calculator};
pub use error::CalcError;
pub use format::{DisplayFormatter, Screen, OVERFLOW_TEXT};
pub use reducer::{reduce, OPERATOR_PRIORITY};
pub use state::InputState;
pub use token::{Operator, Token};
