//! lodestar: a terminal viewer for long markdown documents with section navigation.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use lodestar::app_state::AppState;
use lodestar::config::Config;
use lodestar::document::Document;
use lodestar::error::Error;
use lodestar::keys::KeyInput;
use lodestar::navigator::{Event as NavEvent, Navigator};
use lodestar::ui;
use ratatui::crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Poll interval for input and animation frames.
const TICK: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(name = "lodestar")]
#[command(about = "Section navigation for long documents", long_about = None)]
struct Args {
    /// Markdown document to view
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Configuration file (defaults to ./lodestar.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Open at the section with this fragment
    #[arg(long, value_name = "FRAGMENT")]
    at: Option<String>,

    /// Print the section index as JSON and exit
    #[arg(long)]
    sections: bool,

    /// Refuse full-viewport requests
    #[arg(long)]
    no_fullscreen: bool,

    /// Where to write logs
    #[arg(long, default_value = "lodestar.log")]
    log_file: PathBuf,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    init_logging(&args.log_file);

    let cfg = Config::load(args.config.as_deref())?;
    if !cfg.accepts(&args.path) {
        tracing::warn!(path = %args.path.display(), "unexpected file extension");
    }

    let markdown = fs::read_to_string(&args.path)?;
    let fallback = args
        .path
        .file_stem()
        .map_or_else(|| "Document".to_string(), |s| s.to_string_lossy().to_string());
    let document = Document::parse(&fallback, &markdown, &cfg)?;
    tracing::info!(sections = document.index.len(), "document loaded");

    if args.sections {
        let json = serde_json::to_string_pretty(&document.index)?;
        println!("{json}");
        return Ok(());
    }

    let navigator = Navigator::new(document.index.clone(), &cfg);
    let mut app = AppState::new(document, &cfg, 24, Instant::now());
    app.allow_fullscreen = !args.no_fullscreen;
    if let Some(fragment) = args.at {
        app.fragment = fragment;
    }

    run_tui(app, navigator)?;
    Ok(())
}

/// Logs go to a file: the terminal belongs to the TUI.
fn init_logging(path: &Path) {
    let Ok(file) = fs::File::create(path) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn run_tui(mut app: AppState, mut navigator: Navigator) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut navigator);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        eprintln!("Error: {e}");
    } else if !app.fragment.is_empty() {
        println!("#{}", app.fragment);
    }

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    navigator: &mut Navigator,
) -> io::Result<()> {
    app.resize(usize::from(terminal.size()?.height));
    navigator.restore(app);
    pump(app, navigator);

    loop {
        terminal.draw(|f| ui::draw(f, app, navigator))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('j') => app.scroll_rows(1),
                    KeyCode::Char('k') => app.scroll_rows(-1),
                    _ => {
                        if let Some(input) = KeyInput::from_terminal(&key) {
                            navigator.dispatch(NavEvent::Key(input), app);
                        }
                    }
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => app.scroll_rows(3),
                    MouseEventKind::ScrollUp => app.scroll_rows(-3),
                    _ => {}
                },
                Event::Resize(_, height) => app.resize(usize::from(height)),
                _ => {}
            }
        }

        app.advance(Instant::now());
        pump(app, navigator);
    }
}

/// Delivers queued session events one at a time until none remain.
fn pump(app: &mut AppState, navigator: &mut Navigator) {
    while let Some(event) = app.next_event() {
        navigator.dispatch(event, app);
    }
}
