pub mod keymap;
pub mod render;
pub mod terminal;
pub mod theme;

pub use keymap::{actions_from_keys, map_char, map_key};
pub use render::render_app;
pub use terminal::{TerminalGuard, TuiManager};
pub use theme::Palette;
