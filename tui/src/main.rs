//! Ticklist terminal UI binary.
//!
//! Renders the todo list with filter tabs and per-item controls, backed by
//! the API server configured via `TICKLIST_API_BASE`.
//!
//! # Keys
//!
//! - `1`/`2`/`3` - filter All / Active / Done
//! - `j`/`k` or arrows - move selection
//! - `Space` - toggle done
//! - `a` - add a todo (Enter submits, Esc cancels)
//! - `e` - edit the selected title (Enter commits, Esc abandons)
//! - `d` - delete the selected todo
//! - `r` - reload from the server
//! - `q` - quit

mod app;
mod render;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use ticklist_client::{ApiClient, Controller};

use app::App;

fn main() -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let api = Arc::new(ApiClient::from_env());
    let controller = Controller::new(api);

    let mut app = App::new(controller, runtime);
    // Initial load; a failure is surfaced in the status line, not fatal
    app.load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
