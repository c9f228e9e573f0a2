use calcpad::app::App;
use calcpad::engine::config::Config;
use calcpad::engine::Calculator;
use calcpad::logging;
use calcpad::storage::{FileStore, MemoryStore, PreferenceStore};
use calcpad::theme::{select_theme, ThemeId};
use calcpad::ui::{actions_from_keys, TuiManager};
use clap::Parser;
use std::path::PathBuf;

/// Keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about)]
struct Cli {
    /// Config file (default: <config_dir>/calcpad/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Select and save a theme before starting (theme-1, theme-2, theme-3)
    #[arg(long, value_name = "ID")]
    theme: Option<ThemeId>,

    /// Keep the theme preference in memory only
    #[arg(long)]
    no_persist: bool,

    /// Feed keys without opening the UI and print the display, e.g. "5+x3="
    #[arg(long, value_name = "KEYS")]
    keys: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match logging::init(&config.logging) {
        Ok(path) => tracing::info!(log = %path.display(), "calcpad starting"),
        Err(err) => eprintln!("calcpad: logging disabled: {}", err),
    }

    if let Some(keys) = cli.keys {
        let mut calculator = Calculator::with_display_config(config.display.clone());
        for action in actions_from_keys(&keys) {
            calculator.apply(action);
        }
        println!("{}", calculator.display_text());
        return Ok(());
    }

    let mut store: Box<dyn PreferenceStore> = match FileStore::default_path() {
        Some(path) if !cli.no_persist => Box::new(FileStore::new(path)),
        _ => Box::new(MemoryStore::new()),
    };
    if let Some(theme) = cli.theme {
        select_theme(&mut *store, theme)?;
    }

    let mut app = App::from_config(&config, store);
    let mut tui = TuiManager::new()?;

    // Blocks until the user quits
    tui.run_event_loop(&mut app)?;

    Ok(())
}
