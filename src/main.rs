mod config;
mod document;
mod editor_view;

use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::prelude::*;

use editor_view::EditorView;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Parser)]
#[command(name = "jot")]
#[command(about = "A minimal text editor", long_about = None)]
#[command(version)]
struct Cli {
    /// File to open at startup
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let app_config = config::AppConfig::load_or_create();
    let mut view = EditorView::new(app_config);
    if let Some(path) = cli.file {
        view.open_path(&path);
    }

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let result = run(&mut view);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(view: &mut EditorView) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let mut last_title = String::new();

    loop {
        view.tick();

        let title = view.title();
        if title != last_title {
            stdout().execute(SetTitle(title.as_str()))?;
            last_title = title;
        }

        terminal.draw(|f| view.render(f))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    view.handle_key(key);
                }
            }
        }

        if view.should_quit() {
            break;
        }
    }

    Ok(())
}
