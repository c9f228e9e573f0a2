use crate::app::{App, AppEvent, AppMode};
use crate::ui::keymap::map_key;
use crate::ui::render::render_app;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Raw mode and the alternate screen for as long as the guard lives
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        io::stdout().execute(terminal::EnterAlternateScreen)?;
        restore_on_panic();
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Leave the calculator screen before the default hook prints the panic,
/// and record it in the log file
fn restore_on_panic() {
    PANIC_HOOK_SET.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = io::stdout().execute(terminal::LeaveAlternateScreen);
            tracing::error!(%panic_info, "calculator panicked");
            default_hook(panic_info);
        }));
    });
}

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Draw, wait for a key, handle it; until the app quits.
    ///
    /// Each event is handled to completion before the next one is read.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<AppMode> {
        loop {
            self.render_frame(app)?;

            if app.mode() == AppMode::Quit {
                return Ok(AppMode::Quit);
            }

            match event::read()? {
                Event::Key(key) => {
                    let app_event = map_key(key);
                    if app_event != AppEvent::None {
                        tracing::trace!(?key, ?app_event, "key");
                        app.handle_event(app_event);
                    }
                }
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        self.terminal
            .draw(|frame| render_app(frame, &render_state))?;
        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
    }
}
