use crate::engine::Action;
use crate::theme::ThemeId;

/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    Calculator(Action),
    SelectTheme(ThemeId),
    CycleTheme,
    CopyDisplay,
    ScrollLeft,
    ScrollRight,
    Help,
    Quit,
    None,
}
