//! Folio — a single-page personal portfolio in the terminal.
//!
//! Sections, in anchor order:
//! 1. Profile — name, role, bio
//! 2. Work — project summaries
//! 3. Signals — working principles
//! 4. Decisions — single-selection Q&A panel with animated metric bars
//! 5. Outcomes — headline figures
//! 6. Contact — external links, rendered for copying

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use folio_core::Catalog;
use folio_tui::app::AppState;
use folio_tui::{input, ui};

#[derive(Debug, Parser)]
#[command(name = "folio", about = "Single-page terminal portfolio")]
struct Args {
    /// Content TOML overriding the embedded catalog.
    #[arg(long, value_name = "PATH")]
    content: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Content is fixed before first render; a malformed catalog is a startup
    // error, not a runtime condition.
    let catalog = match &args.content {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading content from {}", path.display()))?,
        None => Catalog::embedded(),
    };

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = AppState::new(catalog);
    app.set_status("n opens the section menu");

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        // 1. Measure the page at the current width and refresh geometry, so
        //    resizes land before the next progress sample.
        let size = terminal.size()?;
        let page = ui::page::build(app, size.width);
        let viewport = size.height.saturating_sub(2) as usize;
        app.set_layout(page.lines.len(), viewport, page.offsets);

        // 2. Advance the three machines by the elapsed frame time.
        let dt = last_tick.elapsed().as_secs_f64();
        last_tick = Instant::now();
        app.tick(dt);

        // 3. Render.
        terminal.draw(|f| ui::draw(f, app))?;

        // 4. Poll for input (50ms timeout for a ~20 FPS animation tick).
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                // Geometry is rebuilt at the top of every frame.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
