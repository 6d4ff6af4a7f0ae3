/// Timer-driven creation of enemies and power-ups.

use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::entities::{Enemy, EnemyKind, PowerUp, PowerUpKind, ENEMY_SIZE, POWER_UP_SIZE};

const ENEMY_KINDS: [EnemyKind; 3] = [EnemyKind::Basic, EnemyKind::Fast, EnemyKind::Strong];
const POWER_UP_KINDS: [PowerUpKind; 3] = [
    PowerUpKind::BulletSpeed,
    PowerUpKind::BulletPower,
    PowerUpKind::Heal,
];

/// Two independent reset-on-fire counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpawnController {
    pub enemy_timer: u32,
    pub power_up_timer: u32,
}

/// Whatever the controller produced this tick.
#[derive(Debug, Default)]
pub struct Spawns {
    pub enemy: Option<Enemy>,
    pub power_up: Option<PowerUp>,
}

impl SpawnController {
    /// Count one tick on both timers and roll new entities for any that fire.
    pub fn tick(&mut self, config: &GameConfig, rng: &mut impl Rng) -> Spawns {
        let mut spawns = Spawns::default();

        self.enemy_timer += 1;
        if self.enemy_timer >= config.enemy_spawn_interval {
            self.enemy_timer = 0;
            spawns.enemy = Some(spawn_enemy(config, rng));
        }

        self.power_up_timer += 1;
        if self.power_up_timer >= config.power_up_spawn_interval {
            self.power_up_timer = 0;
            spawns.power_up = Some(spawn_power_up(config, rng));
        }

        spawns
    }
}

/// A random enemy just above the top edge.
pub fn spawn_enemy(config: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let kind = ENEMY_KINDS[rng.gen_range(0..ENEMY_KINDS.len())];
    let x = rng.gen_range(0.0..(config.field_width - ENEMY_SIZE).max(f32::EPSILON));
    let health = rng.gen_range(1..=3);
    let enemy = Enemy::new(x, -ENEMY_SIZE, kind, health);
    debug!(?kind, x, health = enemy.health, "enemy spawned");
    enemy
}

/// A random power-up just above the top edge.
pub fn spawn_power_up(config: &GameConfig, rng: &mut impl Rng) -> PowerUp {
    let kind = POWER_UP_KINDS[rng.gen_range(0..POWER_UP_KINDS.len())];
    let x = rng.gen_range(0.0..(config.field_width - POWER_UP_SIZE).max(f32::EPSILON));
    debug!(?kind, x, "power-up spawned");
    PowerUp::new(x, -POWER_UP_SIZE, kind)
}
