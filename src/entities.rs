/// All game entity types and their per-tick movement.
///
/// Positions are in play-field units (800×600 by default, origin top-left,
/// y growing downward).  One call to `advance` is one simulation tick.

use rand::Rng;

use crate::clock::Countdown;
use crate::collision::{Aabb, Bounded};
use crate::config::GameConfig;
use crate::events::InputIntent;
use crate::spawn::SpawnController;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Basic,
    Fast,
    /// Slow, always spawns at full health and drifts sideways.
    Strong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    BulletSpeed,
    BulletPower,
    Heal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const RED: Rgb = Rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Rgb = Rgb(0x00, 0xFF, 0x00);
    pub const YELLOW: Rgb = Rgb(0xFF, 0xFF, 0x00);
    pub const CYAN: Rgb = Rgb(0x00, 0xFF, 0xFF);
    pub const MAGENTA: Rgb = Rgb(0xFF, 0x00, 0xFF);

    /// Fully saturated colour at 50% lightness for a hue in degrees.
    pub fn from_hue(hue: f32) -> Rgb {
        let h = hue.rem_euclid(360.0) / 60.0;
        let x = 1.0 - ((h % 2.0) - 1.0).abs();
        let (r, g, b) = match h as u32 {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };
        let to_u8 = |c: f32| (c * 255.0).round() as u8;
        Rgb(to_u8(r), to_u8(g), to_u8(b))
    }
}

/// Shared per-tick contract for everything that moves on its own.
pub trait Entity: Bounded {
    /// Advance one tick.  Returns `false` once the entity should be removed.
    fn advance(&mut self, config: &GameConfig) -> bool;
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub health: u32,
    pub bullet_speed: f32,
    pub bullet_power: u32,
    pub moving_up: bool,
    pub moving_down: bool,
    pub moving_left: bool,
    pub moving_right: bool,
    /// Ticks since the last automatic shot.
    pub shoot_timer: u32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        let (x, y) = config.player_start;
        Self {
            x,
            y,
            width: config.player_size,
            height: config.player_size,
            speed: config.player_speed,
            health: config.max_health,
            bullet_speed: 5.0,
            bullet_power: 1,
            moving_up: false,
            moving_down: false,
            moving_left: false,
            moving_right: false,
            shoot_timer: 0,
        }
    }

    pub fn apply_input(&mut self, intent: InputIntent) {
        self.moving_up = intent.up;
        self.moving_down = intent.down;
        self.moving_left = intent.left;
        self.moving_right = intent.right;
    }

    /// Move one tick and run the auto-fire timer.  Returns the bullet to
    /// spawn when the timer fires.
    pub fn advance(&mut self, config: &GameConfig) -> Option<Bullet> {
        if self.moving_up {
            self.y = (self.y - self.speed).max(0.0);
        }
        if self.moving_down {
            self.y = (self.y + self.speed).min(config.player_max_y());
        }
        if self.moving_left {
            self.x = (self.x - self.speed).max(0.0);
        }
        if self.moving_right {
            self.x = (self.x + self.speed).min(config.player_max_x());
        }

        self.shoot_timer += 1;
        if self.shoot_timer >= config.fire_interval {
            self.shoot_timer = 0;
            return Some(Bullet::new(
                self.x + self.width / 2.0,
                self.y,
                self.bullet_speed,
                self.bullet_power,
            ));
        }
        None
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn collect(&mut self, kind: PowerUpKind, config: &GameConfig) {
        match kind {
            PowerUpKind::BulletSpeed => self.bullet_speed += 2.0,
            PowerUpKind::BulletPower => self.bullet_power += 1,
            PowerUpKind::Heal => {
                self.health = (self.health + config.heal_amount).min(config.max_health)
            }
        }
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: f32 = 50.0;
pub const ENEMY_MAX_HEALTH: u8 = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub kind: EnemyKind,
    pub health: u8,
}

impl Enemy {
    /// `health` is clamped to 1..=3 and ignored entirely for `Strong`.
    pub fn new(x: f32, y: f32, kind: EnemyKind, health: u8) -> Self {
        let (speed, health) = match kind {
            EnemyKind::Basic => (2.0, health.clamp(1, ENEMY_MAX_HEALTH)),
            EnemyKind::Fast => (4.0, health.clamp(1, ENEMY_MAX_HEALTH)),
            EnemyKind::Strong => (2.0, ENEMY_MAX_HEALTH),
        };
        Self { x, y, speed, kind, health }
    }

    /// Take one point of damage.  Returns `true` if the enemy survives.
    pub fn take_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health > 0
    }
}

impl Bounded for Enemy {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, ENEMY_SIZE, ENEMY_SIZE)
    }
}

impl Entity for Enemy {
    fn advance(&mut self, config: &GameConfig) -> bool {
        self.y += self.speed;
        if self.kind == EnemyKind::Strong {
            // Phase follows absolute y, so two strong enemies never sway in sync.
            self.x += (self.y / 100.0).sin() * 3.0;
        }
        self.y < config.despawn_y()
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    /// Side length of the square hit box (power × 5).
    pub size: f32,
    pub speed: f32,
}

impl Bullet {
    pub fn new(x: f32, y: f32, speed: f32, power: u32) -> Self {
        Self {
            x,
            y,
            size: power as f32 * 5.0,
            speed,
        }
    }
}

impl Bounded for Bullet {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.size, self.size)
    }
}

impl Entity for Bullet {
    fn advance(&mut self, _config: &GameConfig) -> bool {
        self.y -= self.speed;
        self.y > 0.0
    }
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

pub const POWER_UP_SIZE: f32 = 30.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
    pub speed: f32,
}

impl PowerUp {
    pub fn new(x: f32, y: f32, kind: PowerUpKind) -> Self {
        Self { x, y, kind, speed: 2.0 }
    }
}

impl Bounded for PowerUp {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, POWER_UP_SIZE, POWER_UP_SIZE)
    }
}

impl Entity for PowerUp {
    fn advance(&mut self, config: &GameConfig) -> bool {
        self.y += self.speed;
        self.y < config.despawn_y()
    }
}

// ── Particles ─────────────────────────────────────────────────────────────────

pub const PARTICLE_LIFE: u32 = 60;

/// Cosmetic explosion debris.  Never takes part in collisions.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Radius; shrinks 5% per tick.
    pub size: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Rgb,
    pub life: u32,
}

impl Particle {
    pub fn scatter(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            size: rng.gen_range(2.0..7.0),
            vx: rng.gen_range(-2.0..2.0),
            vy: rng.gen_range(-2.0..2.0),
            color: Rgb::from_hue(rng.gen_range(0.0..360.0)),
            life: PARTICLE_LIFE,
        }
    }
}

impl Bounded for Particle {
    fn bounds(&self) -> Aabb {
        Aabb::new(self.x - self.size, self.y - self.size, self.size * 2.0, self.size * 2.0)
    }
}

impl Entity for Particle {
    fn advance(&mut self, _config: &GameConfig) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.size *= 0.95;
        self.life = self.life.saturating_sub(1);
        self.life > 0 && self.size > 1.0
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session.  Cloneable so the pure update functions in
/// `compute` can hand back a fresh copy instead of mutating in place.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub score: u32,
    pub countdown: Countdown,
    /// Tracked but does not influence difficulty.
    pub wave: u32,
    pub status: GameStatus,
    pub spawner: SpawnController,
    /// Set once background music has been requested this session.
    pub music_started: bool,
    pub config: GameConfig,
}
