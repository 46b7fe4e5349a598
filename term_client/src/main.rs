use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use match_core::systems::input::PaddleMove;
use match_core::Config;
use match_session::{MatchSession, SessionTokens};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod ui;

use ui::{SharedUiState, TermFrontend, UiState};

#[derive(Parser)]
#[command(about = "Two-player Pong in the terminal")]
struct Args {
    /// Match length in seconds
    #[arg(long, default_value_t = 60)]
    duration: u32,

    /// Seed for serve directions
    #[arg(long, default_value_t = 7)]
    seed: u64,
}

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::new();
    config.match_duration_secs = args.duration;

    let shared: SharedUiState = Rc::new(RefCell::new(UiState::default()));
    let frontend = TermFrontend::new(shared.clone());
    let mut session = MatchSession::new(config, args.seed, Box::new(frontend));

    info!(duration = args.duration, seed = args.seed, "starting terminal client");

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut session, &shared);
    ratatui::restore();
    result
}

fn run(
    terminal: &mut ratatui::DefaultTerminal,
    session: &mut MatchSession,
    shared: &SharedUiState,
) -> Result<()> {
    let mut tokens: Option<SessionTokens> = None;
    let mut next_countdown = Instant::now() + Duration::from_secs(1);

    loop {
        // Drain pending key events first; moves apply immediately
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char(' ') | KeyCode::Enter => {
                    // A second start while running is a no-op inside the
                    // session, so mashing the key is harmless
                    if let Some(fresh) = session.start() {
                        tokens = Some(fresh);
                        next_countdown = Instant::now() + Duration::from_secs(1);
                    }
                }
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    tokens = Some(session.reset());
                    next_countdown = Instant::now() + Duration::from_secs(1);
                }
                KeyCode::Char('w') | KeyCode::Char('W') => session.apply_move(PaddleMove::LeftUp),
                KeyCode::Char('s') | KeyCode::Char('S') => session.apply_move(PaddleMove::LeftDown),
                KeyCode::Up => session.apply_move(PaddleMove::RightUp),
                KeyCode::Down => session.apply_move(PaddleMove::RightDown),
                _ => {}
            }
        }

        // Drive the two loops; each tick returns the token for its next
        // invocation, or nothing once cancelled
        if let Some(live) = tokens.as_mut() {
            if Instant::now() >= next_countdown {
                next_countdown += Duration::from_secs(1);
                if let Some(next) = session.countdown_tick(live.countdown) {
                    live.countdown = next;
                }
            }
            if let Some(next) = session.render_tick(live.render) {
                live.render = next;
            }
        }

        terminal.draw(|frame| ui::draw(frame, &shared.borrow()))?;
        std::thread::sleep(FRAME);
    }
}
