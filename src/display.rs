/// Rendering layer — all terminal I/O lives here.
///
/// The simulation hands over draw descriptors in play-field units; this
/// module scales them onto the terminal grid and queues crossterm commands.
/// No game logic is performed.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use star_volley::assets::Sprite;
use star_volley::entities::Rgb;
use star_volley::events::Notice;
use star_volley::frame::{DrawCall, DrawKind, Hud, Visual};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_HEALTH: Color = Color::Red;
const C_HUD_TIMER: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;
const C_PLACEHOLDER_TEXT: Color = Color::Red;

/// Everything needed to paint one frame.
pub struct Scene<'a> {
    pub calls: &'a [DrawCall],
    pub hud: &'a Hud,
    pub player_sprite: Option<&'a Sprite>,
    /// Why the game ended, if it has.
    pub notice: Option<Notice>,
    pub field_width: f32,
    pub field_height: f32,
    pub cols: u16,
    pub rows: u16,
}

/// Maps play-field coordinates onto the bordered interior of the terminal:
/// columns `1..cols-1`, rows `2..rows-2`.
struct Viewport {
    sx: f32,
    sy: f32,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Viewport {
    fn new(scene: &Scene) -> Self {
        let inner_w = scene.cols.saturating_sub(2).max(1) as f32;
        let inner_h = scene.rows.saturating_sub(4).max(1) as f32;
        Self {
            sx: inner_w / scene.field_width,
            sy: inner_h / scene.field_height,
            left: 1,
            top: 2,
            right: scene.cols as i32 - 1,
            bottom: scene.rows as i32 - 2,
        }
    }

    fn cell(&self, x: f32, y: f32) -> (i32, i32) {
        (
            self.left + (x * self.sx).floor() as i32,
            self.top + (y * self.sy).floor() as i32,
        )
    }

    /// Width and height in cells; never less than one.
    fn span(&self, w: f32, h: f32) -> (i32, i32) {
        (
            ((w * self.sx).round() as i32).max(1),
            ((h * self.sy).round() as i32).max(1),
        )
    }

    fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.left && col < self.right && row >= self.top && row < self.bottom
    }
}

fn term_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, scene: &Scene) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, scene)?;
    draw_hud(out, scene)?;

    let view = Viewport::new(scene);
    for call in scene.calls {
        match call.kind {
            DrawKind::Player => draw_player(out, &view, call, scene.player_sprite)?,
            DrawKind::Bullet => fill_box(out, &view, call, "•")?,
            DrawKind::Enemy => fill_box(out, &view, call, "█")?,
            DrawKind::PowerUp => draw_power_up(out, &view, call)?,
            DrawKind::Particle => draw_particle(out, &view, call)?,
            DrawKind::Overlay => draw_overlay(out, &view, call)?,
        }
    }

    draw_controls_hint(out, scene)?;

    if let Some(notice) = scene.notice {
        draw_game_over(out, scene, notice)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, scene.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, scene: &Scene) -> std::io::Result<()> {
    let w = scene.cols as usize;
    let h = scene.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(scene.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, scene: &Scene) -> std::io::Result<()> {
    let hud = scene.hud;

    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", hud.score)))?;

    // Timer — centre
    let timer = format!("[ {} ]", hud.countdown);
    let tx = (scene.cols / 2).saturating_sub(timer.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(tx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_TIMER))?;
    out.queue(Print(&timer))?;

    // Health — right
    let health = format!("Health:{:>4}", hud.health);
    let hx = scene.cols.saturating_sub(health.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(hx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_HEALTH))?;
    out.queue(Print(&health))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Paint every cell of a descriptor's box with `glyph`, clipped to the field.
fn fill_box<W: Write>(
    out: &mut W,
    view: &Viewport,
    call: &DrawCall,
    glyph: &str,
) -> std::io::Result<()> {
    let Visual::Fill(rgb) = &call.visual else {
        return Ok(());
    };
    let (col, row) = view.cell(call.x, call.y);
    let (w, h) = view.span(call.w, call.h);
    out.queue(style::SetForegroundColor(term_color(*rgb)))?;
    for r in row..row + h {
        for c in col..col + w {
            if view.contains(c, r) {
                out.queue(cursor::MoveTo(c as u16, r as u16))?;
                out.queue(Print(glyph))?;
            }
        }
    }
    Ok(())
}

fn draw_player<W: Write>(
    out: &mut W,
    view: &Viewport,
    call: &DrawCall,
    sprite: Option<&Sprite>,
) -> std::io::Result<()> {
    let (col, row) = view.cell(call.x, call.y);

    if let (Visual::Image(_), Some(sprite)) = (&call.visual, sprite) {
        // Centre the art horizontally on the ship's box
        let (w, _) = view.span(call.w, call.h);
        let left = col + (w - sprite.width() as i32) / 2;
        out.queue(style::SetForegroundColor(Color::White))?;
        for (i, line) in sprite.rows.iter().enumerate() {
            let r = row + i as i32;
            for (j, ch) in line.chars().enumerate() {
                let c = left + j as i32;
                if ch != ' ' && view.contains(c, r) {
                    out.queue(cursor::MoveTo(c as u16, r as u16))?;
                    out.queue(Print(ch))?;
                }
            }
        }
        return Ok(());
    }

    // Placeholder: solid box with its caption on top
    fill_box(out, view, call, "▓")?;
    if let Some(text) = &call.text {
        let (w, _) = view.span(call.w, call.h);
        let caption: String = text.chars().take(w as usize).collect();
        if view.contains(col, row) {
            out.queue(cursor::MoveTo(col as u16, row as u16))?;
            out.queue(style::SetForegroundColor(C_PLACEHOLDER_TEXT))?;
            out.queue(Print(caption))?;
        }
    }
    Ok(())
}

/// Coloured block with its letter in the middle.
fn draw_power_up<W: Write>(out: &mut W, view: &Viewport, call: &DrawCall) -> std::io::Result<()> {
    let Visual::Fill(rgb) = &call.visual else {
        return Ok(());
    };
    let (col, row) = view.cell(call.x, call.y);
    let (w, h) = view.span(call.w, call.h);
    let letter = call.text.as_deref().unwrap_or(" ");

    out.queue(style::SetBackgroundColor(term_color(*rgb)))?;
    out.queue(style::SetForegroundColor(term_color(Rgb::BLACK)))?;
    for r in row..row + h {
        for c in col..col + w {
            if view.contains(c, r) {
                out.queue(cursor::MoveTo(c as u16, r as u16))?;
                let centre = r == row + h / 2 && c == col + w / 2;
                out.queue(Print(if centre { letter } else { " " }))?;
            }
        }
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

fn draw_particle<W: Write>(out: &mut W, view: &Viewport, call: &DrawCall) -> std::io::Result<()> {
    let Visual::Fill(rgb) = &call.visual else {
        return Ok(());
    };
    let (col, row) = view.cell(call.x + call.w / 2.0, call.y + call.h / 2.0);
    if view.contains(col, row) {
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(style::SetForegroundColor(term_color(*rgb)))?;
        out.queue(Print("*"))?;
    }
    Ok(())
}

fn draw_overlay<W: Write>(out: &mut W, view: &Viewport, call: &DrawCall) -> std::io::Result<()> {
    let Some(text) = &call.text else {
        return Ok(());
    };
    let (col, row) = view.cell(call.x, call.y);
    let col = (col - text.chars().count() as i32 / 2).max(view.left);
    out.queue(cursor::MoveTo(col as u16, row as u16))?;
    if let Visual::Fill(rgb) = &call.visual {
        out.queue(style::SetForegroundColor(term_color(*rgb)))?;
    }
    out.queue(Print(text))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, scene: &Scene) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, scene.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("WASD / arrows : Move   ESC : Pause   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, scene: &Scene, notice: Notice) -> std::io::Result<()> {
    let (banner, final_score) = match notice {
        Notice::GameOver { final_score } => ("║    GAME  OVER      ║", final_score),
        Notice::TimeUp { final_score } => ("║    TIME'S  UP      ║", final_score),
    };
    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        (banner, Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];
    let score_line = format!("Final Score: {:>6}", final_score);
    let hint = "R - Play Again  Q - Quit";

    let cx = scene.cols / 2;
    let total_rows = lines.len() + 2;
    let start_row = (scene.rows / 2).saturating_sub(total_rows as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row + 1))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
