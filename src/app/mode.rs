#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Calculator,
    Help,
    Quit,
}
