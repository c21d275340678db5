use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

use tmux_menu::app::{
    config::{working_directory, Config},
    dispatch::dispatch,
    keymap::KeyMap,
    logging,
    r#loop::{run_loop, SessionContext},
    state::{SessionOutcome, SessionState},
};
use tmux_menu::domain::launcher::Launcher;
use tmux_menu::infrastructure::tmux::TmuxLauncher;
use tmux_menu::theme::Theme;

/// Pick a command from a filterable menu and run it in a new tmux window.
#[derive(Debug, Parser)]
#[command(name = "tmux-menu", version)]
struct Cli {
    /// Directory the new window starts in [default: current directory]
    dir: Option<PathBuf>,

    /// Config file to use instead of ~/.config/tmux-menu/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the invocation for the chosen item instead of running it
    #[arg(long)]
    print_invocation: bool,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Everything that can fail on bad input happens before the terminal is
    // switched to raw mode.
    let config = Config::load(cli.config.as_deref())?;
    logging::init_logging(&config);

    let start_dir = working_directory(cli.dir)?;

    let state = SessionState::new(config.menu_items(), start_dir);
    let keymap = KeyMap::from_config(&config.keys);
    let theme = Theme::from_palette_type(config.theme);
    let launcher = TmuxLauncher::new(config.launch.clone());
    let ctx = SessionContext {
        keymap: &keymap,
        theme: &theme,
        blink_interval: config.ui.blink_interval(),
    };

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run session
    let res = run_loop(&mut terminal, state, &ctx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res? {
        SessionOutcome::Launch(request) if cli.print_invocation => {
            println!("{}", launcher.describe(&request));
        }
        SessionOutcome::Launch(request) => {
            if let Err(err) = dispatch(&launcher, &request) {
                eprintln!("Error executing command: {err:#}");
            }
        }
        SessionOutcome::Cancelled => {}
    }

    Ok(())
}
