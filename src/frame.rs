/// Core → presentation boundary.  Turns a `GameState` into an ordered list
/// of draw descriptors plus a HUD snapshot; knows nothing about terminals.

use crate::assets::PlayerVisual;
use crate::collision::Bounded;
use crate::entities::{GameState, GameStatus, PowerUpKind, Rgb};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawKind {
    Player,
    Bullet,
    Enemy,
    PowerUp,
    Particle,
    /// Free-floating text over the field, anchored at its centre.
    Overlay,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Visual {
    Fill(Rgb),
    /// Named image the renderer resolves itself.
    Image(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub kind: DrawKind,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub visual: Visual,
    pub text: Option<String>,
}

impl DrawCall {
    fn boxed(kind: DrawKind, bounded: &impl Bounded, visual: Visual) -> Self {
        let b = bounded.bounds();
        Self {
            kind,
            x: b.x,
            y: b.y,
            w: b.w,
            h: b.h,
            visual,
            text: None,
        }
    }

    fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }
}

/// Enemy tint tracks remaining health.
pub fn enemy_color(health: u8) -> Rgb {
    match health {
        0 | 1 => Rgb::RED,
        2 => Rgb::YELLOW,
        _ => Rgb::WHITE,
    }
}

pub fn power_up_style(kind: PowerUpKind) -> (Rgb, &'static str) {
    match kind {
        PowerUpKind::BulletSpeed => (Rgb::CYAN, "S"),
        PowerUpKind::BulletPower => (Rgb::MAGENTA, "P"),
        PowerUpKind::Heal => (Rgb::GREEN, "H"),
    }
}

/// Everything to draw this frame, back to front.
pub fn draw_list(state: &GameState, player_visual: &PlayerVisual) -> Vec<DrawCall> {
    let mut calls = Vec::with_capacity(
        1 + state.bullets.len() + state.enemies.len() + state.power_ups.len() + state.particles.len() + 1,
    );

    calls.push(match player_visual {
        PlayerVisual::Sprite(sprite) => {
            DrawCall::boxed(DrawKind::Player, &state.player, Visual::Image(sprite.name.clone()))
        }
        PlayerVisual::Placeholder => {
            DrawCall::boxed(DrawKind::Player, &state.player, Visual::Fill(Rgb::GREEN)).with_text("Loading...")
        }
    });

    calls.extend(
        state
            .bullets
            .iter()
            .map(|b| DrawCall::boxed(DrawKind::Bullet, b, Visual::Fill(Rgb::RED))),
    );
    calls.extend(
        state
            .enemies
            .iter()
            .map(|e| DrawCall::boxed(DrawKind::Enemy, e, Visual::Fill(enemy_color(e.health)))),
    );
    calls.extend(state.power_ups.iter().map(|p| {
        let (color, letter) = power_up_style(p.kind);
        DrawCall::boxed(DrawKind::PowerUp, p, Visual::Fill(color)).with_text(letter)
    }));
    calls.extend(
        state
            .particles
            .iter()
            .map(|p| DrawCall::boxed(DrawKind::Particle, p, Visual::Fill(p.color))),
    );

    if state.status == GameStatus::Paused {
        calls.push(DrawCall {
            kind: DrawKind::Overlay,
            x: state.config.field_width / 2.0,
            y: state.config.field_height / 2.0,
            w: 0.0,
            h: 0.0,
            visual: Visual::Fill(Rgb::WHITE),
            text: Some("Game Paused".to_string()),
        });
    }

    calls
}

/// What the UI collaborator shows outside the play field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub health: u32,
    /// `MM:SS`.
    pub countdown: String,
    pub paused: bool,
    /// Present once the game is over.
    pub final_score: Option<u32>,
}

pub fn hud(state: &GameState) -> Hud {
    Hud {
        score: state.score,
        health: state.player.health,
        countdown: state.countdown.display(),
        paused: state.status == GameStatus::Paused,
        final_score: (state.status == GameStatus::GameOver).then_some(state.score),
    }
}
