//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input (keys and mouse drags) and a framebuffer-based
//! renderer. Logs go to a file, since the terminal is in raw alternate-screen
//! mode while the game runs.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};
use log::info;

use tui_2048::app::Session;
use tui_2048::input::{handle_key_event, should_quit, terminal_swipe_tracker, SwipeTracker};
use tui_2048::reporter::{identity_from_env, NullSink, ReporterConfig, ScoreReporter, ScoreSink};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::TICK_MS;

/// How long a pending score submission may hold up exit.
const REPORT_GRACE: Duration = Duration::from_secs(2);

/// Play 2048 in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// RNG seed for tile spawns (random if omitted)
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Signed-in player name; overrides TUI_2048_USER
    #[arg(long, value_name = "NAME")]
    user: Option<String>,

    /// Score endpoint; overrides TUI_2048_SCORE_URL
    #[arg(long, value_name = "URL")]
    score_url: Option<String>,

    /// Do not submit scores
    #[arg(long)]
    no_report: bool,

    /// Append logs to this file; overrides TUI_2048_LOG_PATH
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Minimum drag distance (terminal columns) for a swipe
    #[arg(long, value_name = "CELLS")]
    swipe_min: Option<f32>,

    /// Disable mouse capture (no drag-to-swipe)
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut config = ReporterConfig::from_env();
    if let Some(url) = &cli.score_url {
        config.endpoint = url.clone();
    }
    if cli.no_report {
        config.disabled = true;
    }
    let identity = cli.user.clone().or_else(identity_from_env);
    let seed = cli.seed.unwrap_or_else(rand::random);

    let sink: Box<dyn ScoreSink> = if config.disabled {
        Box::new(NullSink)
    } else {
        Box::new(ScoreReporter::new(config.clone()).context("failed to start score reporter")?)
    };
    let mut session = Session::new(seed, identity, sink).with_reporting_enabled(!config.disabled);

    let mut swipe = match cli.swipe_min {
        Some(cells) => SwipeTracker::for_terminal(cells),
        None => terminal_swipe_tracker(),
    };

    let mut term = TerminalRenderer::new();
    if cli.no_mouse {
        term = term.without_mouse();
    }
    term.enter()?;

    let result = run(&mut term, &mut session, &mut swipe);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting with score {}", session.state().score());
    session.into_sink().finish(REPORT_GRACE);
    result
}

fn run<S: ScoreSink>(
    term: &mut TerminalRenderer,
    session: &mut Session<S>,
    swipe: &mut SwipeTracker,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snap = session.snapshot();
        let player = session.player_status();
        view.render_into_with_status(&snap, Some(&player), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(tick)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.handle(action);
                }
            }
            Event::Mouse(mouse) => {
                if let Some(action) = swipe.handle_mouse_event(mouse) {
                    session.handle(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let path = cli
        .log_file
        .clone()
        .or_else(|| std::env::var_os("TUI_2048_LOG_PATH").map(PathBuf::from));
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
