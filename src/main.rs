mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use star_volley::assets::{player_visual, PlayerVisual};
use star_volley::audio::{self, TerminalBell};
use star_volley::clock::SimulationClock;
use star_volley::compute::{init_state, restart, set_input, tick, toggle_pause};
use star_volley::config::GameConfig;
use star_volley::entities::{GameState, GameStatus};
use star_volley::events::{GameEvent, InputIntent, Notice};
use star_volley::frame::{draw_list, hud};

use display::Scene;

/// Vertical arcade shooter for the terminal.
#[derive(Parser, Debug)]
#[command(name = "star_volley", version, about)]
struct Args {
    /// Seed for enemy and power-up spawns; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Frames drawn per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Simulation ticks per second.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    tick_rate: u32,

    /// Session length in seconds.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    duration_secs: u32,

    /// Text-art file used for the player ship.
    #[arg(long)]
    player_sprite: Option<PathBuf>,

    /// Where log output goes; the terminal itself is taken by the game.
    #[arg(long, default_value = "star_volley.log")]
    log_file: PathBuf,
}

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// A key is considered "held" if its last press/repeat event arrived within
/// this window.  Covers terminals that don't emit key-release events: the OS
/// key-repeat rate is ≥ 15 Hz, so 130 ms is always refreshed before expiry.
const HOLD_WINDOW: Duration = Duration::from_millis(130);

/// Returns true if any of `keys` was seen within the last `HOLD_WINDOW`.
fn is_held(key_seen: &HashMap<KeyCode, Instant>, keys: &[KeyCode], now: Instant) -> bool {
    keys.iter().any(|key| {
        key_seen
            .get(key)
            .map(|&last| now.duration_since(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    })
}

fn current_intent(key_seen: &HashMap<KeyCode, Instant>, now: Instant) -> InputIntent {
    InputIntent {
        up: is_held(key_seen, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], now),
        down: is_held(key_seen, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], now),
        left: is_held(key_seen, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], now),
        right: is_held(key_seen, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], now),
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Host-side bookkeeping around the pure game state.
struct Session {
    state: GameState,
    bell: TerminalBell<std::io::Stdout>,
    notice: Option<Notice>,
}

impl Session {
    /// Adopt a new state and route its events to the collaborators.
    fn apply(&mut self, (state, events): (GameState, Vec<GameEvent>)) {
        self.state = state;
        audio::dispatch(&mut self.bell, &events);
        for event in &events {
            if let GameEvent::Notice(notice) = event {
                info!(?notice, "session ended");
                self.notice = Some(*notice);
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input model: instead of acting on each key event individually, we keep
/// the instant each key was last pressed or repeated.  Each frame the keys
/// still "fresh" become the player's input intent.  Terminals with keyboard
/// enhancement also send `Release`, which drops the key immediately.
///
/// Wall time feeds a `SimulationClock`, so the simulation runs at
/// `tick_rate` no matter how fast frames are drawn.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
    player: &PlayerVisual,
    args: &Args,
) -> Result<()> {
    let frame = Duration::from_secs(1) / args.fps.max(1);
    let mut clock = SimulationClock::new(session.state.config.ticks_per_second);
    let mut key_seen: HashMap<KeyCode, Instant> = HashMap::new();
    let mut last_intent = InputIntent::default();
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let elapsed = frame_start.duration_since(last_frame);
        last_frame = frame_start;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_seen.insert(code, frame_start);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => {
                            session.apply(toggle_pause(&session.state));
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            session.notice = None;
                            session.apply(restart(&session.state));
                            clock.reset();
                            // The new ship starts idle; re-send whatever is held.
                            last_intent = InputIntent::default();
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_seen.insert(code, frame_start);
                }
                KeyEventKind::Release => {
                    key_seen.remove(&code);
                }
            }
        }

        let intent = current_intent(&key_seen, frame_start);
        if intent != last_intent {
            session.apply(set_input(&session.state, intent));
            last_intent = intent;
        }

        // ── Simulation ────────────────────────────────────────────────────────
        if session.state.status == GameStatus::Running {
            for _ in 0..clock.advance(elapsed) {
                session.apply(tick(&session.state, rng));
            }
        } else {
            clock.reset();
        }

        // ── Presentation ──────────────────────────────────────────────────────
        let (cols, rows) = terminal::size()?;
        let calls = draw_list(&session.state, player);
        let hud = hud(&session.state);
        display::render(
            out,
            &Scene {
                calls: &calls,
                hud: &hud,
                player_sprite: player.sprite(),
                notice: session.notice,
                field_width: session.state.config.field_width,
                field_height: session.state.config.field_height,
                cols,
                rows,
            },
        )?;

        let spent = frame_start.elapsed();
        if spent < frame {
            thread::sleep(frame - spent);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    let config = GameConfig {
        ticks_per_second: args.tick_rate,
        countdown_ticks: args.duration_secs.saturating_mul(args.tick_rate),
        ..GameConfig::default()
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let player = player_visual(args.player_sprite.as_deref());
    info!(seed = ?args.seed, tick_rate = args.tick_rate, fps = args.fps, "starting session");

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let mut session = Session {
        state: init_state(config),
        bell: TerminalBell::new(stdout()),
        notice: None,
    };
    let result = game_loop(&mut out, &mut session, &rx, &mut rng, &player, &args);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!(final_score = session.state.score, "exiting");
    result
}
