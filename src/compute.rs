/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState` together with the events the hosts should act on.  Side
/// effects are limited to the injected RNG and log output.

use rand::Rng;
use tracing::{debug, info};

use crate::clock::Countdown;
use crate::collision::{overlaps, Bounded};
use crate::config::GameConfig;
use crate::entities::{Entity, GameState, GameStatus, Particle, Player};
use crate::events::{AudioCue, GameEvent, InputIntent, Notice};
use crate::spawn::SpawnController;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session.
pub fn init_state(config: GameConfig) -> GameState {
    GameState {
        player: Player::new(&config),
        enemies: Vec::new(),
        bullets: Vec::new(),
        power_ups: Vec::new(),
        particles: Vec::new(),
        score: 0,
        countdown: Countdown::new(config.countdown_ticks),
        wave: 1,
        status: GameStatus::Running,
        spawner: SpawnController::default(),
        music_started: false,
        config,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Replace the player's movement intent.  The first directional input of a
/// running session also starts the music.
pub fn set_input(state: &GameState, intent: InputIntent) -> (GameState, Vec<GameEvent>) {
    let mut next = state.clone();
    let mut events = Vec::new();
    next.player.apply_input(intent);
    if intent.any() && !next.music_started && next.status == GameStatus::Running {
        next.music_started = true;
        events.push(GameEvent::Audio(AudioCue::StartMusic));
    }
    (next, events)
}

/// Running ↔ Paused.  Has no effect once the game is over.
pub fn toggle_pause(state: &GameState) -> (GameState, Vec<GameEvent>) {
    let (status, cue) = match state.status {
        GameStatus::Running => (GameStatus::Paused, AudioCue::PauseMusic),
        GameStatus::Paused => (GameStatus::Running, AudioCue::StartMusic),
        GameStatus::GameOver => return (state.clone(), Vec::new()),
    };
    info!(?status, "pause toggled");
    let next = GameState {
        status,
        music_started: true,
        ..state.clone()
    };
    (next, vec![GameEvent::Audio(cue)])
}

/// Throw the session away and start over with the same configuration.
pub fn restart(state: &GameState) -> (GameState, Vec<GameEvent>) {
    info!(final_score = state.score, "restarting session");
    let next = GameState {
        music_started: true,
        ..init_state(state.config)
    };
    let events = vec![
        GameEvent::Audio(AudioCue::StopAndRewindMusic),
        GameEvent::Audio(AudioCue::StartMusic),
    ];
    (next, events)
}

// ── Collision detection (phase 1) ───────────────────────────────────────────

/// A contact found during detection, referring to entities by index into
/// the collections of the state it was computed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Contact {
    BulletHitEnemy { bullet: usize, enemy: usize },
    PlayerHitEnemy { enemy: usize },
    PlayerTouchedPowerUp { power_up: usize },
}

/// Find every contact for this tick without touching the state.
///
/// Each bullet registers against the first overlapping enemy that is still
/// standing once the hits of earlier bullets are counted.  Enemies killed by
/// bullets cannot also ram the player.
pub fn detect_contacts(state: &GameState) -> Vec<Contact> {
    let mut contacts = Vec::new();
    let mut standing: Vec<u8> = state.enemies.iter().map(|e| e.health).collect();

    for (bi, bullet) in state.bullets.iter().enumerate() {
        let target = state
            .enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| standing[*ei] > 0 && overlaps(bullet, *enemy))
            .map(|(ei, _)| ei);
        if let Some(ei) = target {
            standing[ei] -= 1;
            contacts.push(Contact::BulletHitEnemy { bullet: bi, enemy: ei });
        }
    }

    for (ei, enemy) in state.enemies.iter().enumerate() {
        if standing[ei] > 0 && overlaps(&state.player, enemy) {
            contacts.push(Contact::PlayerHitEnemy { enemy: ei });
        }
    }

    for (pi, power_up) in state.power_ups.iter().enumerate() {
        if overlaps(&state.player, power_up) {
            contacts.push(Contact::PlayerTouchedPowerUp { power_up: pi });
        }
    }

    contacts
}

// ── Collision resolution (phase 2) ──────────────────────────────────────────

fn resolve_contacts(
    state: &mut GameState,
    contacts: &[Contact],
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) {
    let config = state.config;
    let mut spent_bullets = vec![false; state.bullets.len()];
    let mut dead_enemies = vec![false; state.enemies.len()];
    let mut taken_power_ups = vec![false; state.power_ups.len()];

    for contact in contacts {
        match *contact {
            Contact::BulletHitEnemy { bullet, enemy } => {
                spent_bullets[bullet] = true;
                let target = &mut state.enemies[enemy];
                if target.take_hit() {
                    continue;
                }
                let (cx, cy) = target.bounds().center();
                dead_enemies[enemy] = true;
                state.score += config.kill_score;
                state
                    .particles
                    .extend((0..config.particle_burst).map(|_| Particle::scatter(cx, cy, rng)));
                events.push(GameEvent::Audio(AudioCue::PlayExplosion));
                debug!(score = state.score, "enemy destroyed");
            }
            Contact::PlayerHitEnemy { enemy } => {
                dead_enemies[enemy] = true;
                state.player.take_damage(config.contact_damage);
                debug!(health = state.player.health, "player rammed");
            }
            Contact::PlayerTouchedPowerUp { power_up } => {
                let kind = state.power_ups[power_up].kind;
                state.player.collect(kind, &config);
                taken_power_ups[power_up] = true;
                debug!(?kind, "power-up collected");
            }
        }
    }

    state.bullets = without(std::mem::take(&mut state.bullets), &spent_bullets);
    state.enemies = without(std::mem::take(&mut state.enemies), &dead_enemies);
    state.power_ups = without(std::mem::take(&mut state.power_ups), &taken_power_ups);
}

fn without<T>(items: Vec<T>, removed: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(removed)
        .filter(|(_, gone)| !**gone)
        .map(|(item, _)| item)
        .collect()
}

fn advance_all<T: Entity>(items: &mut Vec<T>, config: &GameConfig) {
    items.retain_mut(|item| item.advance(config));
}

// ── Per-tick update (nearly pure — RNG is injected) ─────────────────────────

/// Advance the simulation by one logical tick.  All randomness comes through
/// `rng` so callers control determinism (useful for tests with a seeded RNG).
///
/// A paused or finished game is returned untouched.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> (GameState, Vec<GameEvent>) {
    if state.status != GameStatus::Running {
        return (state.clone(), Vec::new());
    }

    let mut next = state.clone();
    let mut events = Vec::new();
    let config = next.config;

    // ── 1. Player moves and auto-fires ───────────────────────────────────────
    if let Some(bullet) = next.player.advance(&config) {
        next.bullets.push(bullet);
    }

    // ── 2. Everything else moves; leavers are pruned ─────────────────────────
    advance_all(&mut next.bullets, &config);
    advance_all(&mut next.enemies, &config);
    advance_all(&mut next.power_ups, &config);
    advance_all(&mut next.particles, &config);

    // ── 3. Spawn timers ──────────────────────────────────────────────────────
    let spawns = next.spawner.tick(&config, rng);
    next.enemies.extend(spawns.enemy);
    next.power_ups.extend(spawns.power_up);

    // ── 4. Collisions: detect, then apply ────────────────────────────────────
    let contacts = detect_contacts(&next);
    resolve_contacts(&mut next, &contacts, rng, &mut events);

    // ── 5. Health check ──────────────────────────────────────────────────────
    if next.player.health == 0 {
        next.status = GameStatus::GameOver;
        info!(final_score = next.score, "game over: out of health");
        events.push(GameEvent::Audio(AudioCue::StopAndRewindMusic));
        events.push(GameEvent::Notice(Notice::GameOver {
            final_score: next.score,
        }));
        return (next, events);
    }

    // ── 6. Countdown ─────────────────────────────────────────────────────────
    if next.countdown.tick() {
        next.status = GameStatus::GameOver;
        info!(final_score = next.score, "game over: time is up");
        events.push(GameEvent::Audio(AudioCue::StopAndRewindMusic));
        events.push(GameEvent::Notice(Notice::TimeUp {
            final_score: next.score,
        }));
    }

    (next, events)
}
