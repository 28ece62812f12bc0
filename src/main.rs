use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use overlay_menu::cli::Cli;
use overlay_menu::config::MenuConfig;
use overlay_menu::input::{map_key_to_intent, map_mouse_to_intents};
use overlay_menu::viewmodel::{Action, MenuEvent, MenuList, MenuViewModel, NoRows, RowGeometry};
use overlay_menu::{logging, sample, view};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = MenuConfig::load_or_default(cli.config.as_deref())
        .context("Could not load config")?;
    cli.apply(&mut config);
    config.validate().context("Invalid command-line overrides")?;

    let log_guard = logging::init(&config);
    if let Some(guard) = &log_guard {
        eprintln!("Logging to: {}", guard.log_dir().display());
    }

    let mut app = sample::build(&config);
    app.subscribe(|event: &MenuEvent, _: &mut MenuList| {
        tracing::debug!(cue = ?event.cue(), list = ?event.list, "feedback cue");
    });
    app.subscribe(sample::dismiss_on_activate);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, Duration::from_millis(config.frame_ms));

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop: draw, then process at most one input event per frame
fn run(terminal: &mut Term, app: &mut MenuViewModel, frame: Duration) -> Result<()> {
    loop {
        let mut layout = None;
        terminal.draw(|f| {
            let current = view::layout(f.area(), &*app);
            view::render(f, &*app, &current);
            layout = Some(current);
        })?;

        if !event::poll(frame)? {
            continue;
        }

        let intents = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                map_key_to_intent(&key).into_iter().collect()
            }
            Event::Mouse(mouse) => map_mouse_to_intents(&mouse),
            _ => Vec::new(),
        };

        let geometry: &dyn RowGeometry = match &layout {
            Some(layout) => layout,
            None => &NoRows,
        };
        for intent in intents {
            if app.handle_intent_with(intent, geometry) == Action::Close {
                tracing::info!("menu closed");
                return Ok(());
            }
        }
    }
}
