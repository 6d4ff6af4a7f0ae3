/// Gameplay tuning.  Every number the simulation uses lives here so a host
/// can reshape the session without touching game logic.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    /// Logical ticks per second of game time.  The countdown display assumes 60.
    pub ticks_per_second: u32,
    /// Session length in ticks.
    pub countdown_ticks: u32,
    pub enemy_spawn_interval: u32,
    pub power_up_spawn_interval: u32,
    /// Ticks between automatic player shots.
    pub fire_interval: u32,
    pub player_speed: f32,
    pub player_start: (f32, f32),
    pub player_size: f32,
    pub max_health: u32,
    pub contact_damage: u32,
    pub heal_amount: u32,
    pub kill_score: u32,
    pub particle_burst: usize,
    /// How far below the field an entity may fall before it is pruned.
    pub despawn_margin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 600.0,
            ticks_per_second: 60,
            countdown_ticks: 60 * 60,
            enemy_spawn_interval: 60,
            power_up_spawn_interval: 300,
            fire_interval: 20,
            player_speed: 5.0,
            player_start: (400.0, 500.0),
            player_size: 50.0,
            max_health: 100,
            contact_damage: 20,
            heal_amount: 20,
            kill_score: 100,
            particle_burst: 20,
            despawn_margin: 50.0,
        }
    }
}

impl GameConfig {
    /// Y coordinate at or beyond which falling entities are removed.
    pub fn despawn_y(&self) -> f32 {
        self.field_height + self.despawn_margin
    }

    /// Largest x the player may occupy.
    pub fn player_max_x(&self) -> f32 {
        self.field_width - self.player_size
    }

    /// Largest y the player may occupy.
    pub fn player_max_y(&self) -> f32 {
        self.field_height - self.player_size
    }
}
