use star_volley::assets::{PlayerVisual, Sprite};
use star_volley::compute::{init_state, toggle_pause};
use star_volley::config::GameConfig;
use star_volley::entities::*;
use star_volley::frame::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> GameState {
    init_state(GameConfig::default())
}

#[test]
fn placeholder_player_is_a_labelled_green_box() {
    let calls = draw_list(&make_state(), &PlayerVisual::Placeholder);
    assert_eq!(calls.len(), 1);
    let player = &calls[0];
    assert_eq!(player.kind, DrawKind::Player);
    assert_eq!((player.x, player.y, player.w, player.h), (400.0, 500.0, 50.0, 50.0));
    assert_eq!(player.visual, Visual::Fill(Rgb::GREEN));
    assert_eq!(player.text.as_deref(), Some("Loading..."));
}

#[test]
fn sprite_player_refers_to_image() {
    let sprite = Sprite {
        name: "ship".to_string(),
        rows: vec![" ^ ".to_string(), "/#\\".to_string()],
    };
    let calls = draw_list(&make_state(), &PlayerVisual::Sprite(sprite));
    assert_eq!(calls[0].visual, Visual::Image("ship".to_string()));
    assert_eq!(calls[0].text, None);
}

#[test]
fn draw_order_is_back_to_front() {
    let mut s = make_state();
    let mut rng = StdRng::seed_from_u64(1);
    s.particles.push(Particle::scatter(5.0, 5.0, &mut rng));
    s.power_ups.push(PowerUp::new(10.0, 10.0, PowerUpKind::Heal));
    s.enemies.push(Enemy::new(20.0, 20.0, EnemyKind::Basic, 2));
    s.bullets.push(Bullet::new(30.0, 30.0, 5.0, 1));

    let kinds: Vec<DrawKind> = draw_list(&s, &PlayerVisual::Placeholder)
        .iter()
        .map(|c| c.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            DrawKind::Player,
            DrawKind::Bullet,
            DrawKind::Enemy,
            DrawKind::PowerUp,
            DrawKind::Particle,
        ]
    );
}

#[test]
fn enemy_tint_follows_health() {
    assert_eq!(enemy_color(3), Rgb::WHITE);
    assert_eq!(enemy_color(2), Rgb::YELLOW);
    assert_eq!(enemy_color(1), Rgb::RED);
}

#[test]
fn power_ups_carry_their_letter() {
    let mut s = make_state();
    s.power_ups.push(PowerUp::new(0.0, 0.0, PowerUpKind::BulletSpeed));
    s.power_ups.push(PowerUp::new(0.0, 0.0, PowerUpKind::BulletPower));
    s.power_ups.push(PowerUp::new(0.0, 0.0, PowerUpKind::Heal));

    let styled: Vec<(Visual, Option<String>)> = draw_list(&s, &PlayerVisual::Placeholder)
        .into_iter()
        .filter(|c| c.kind == DrawKind::PowerUp)
        .map(|c| (c.visual, c.text))
        .collect();
    assert_eq!(
        styled,
        vec![
            (Visual::Fill(Rgb::CYAN), Some("S".to_string())),
            (Visual::Fill(Rgb::MAGENTA), Some("P".to_string())),
            (Visual::Fill(Rgb::GREEN), Some("H".to_string())),
        ]
    );
}

#[test]
fn bullet_box_matches_power() {
    let mut s = make_state();
    s.bullets.push(Bullet::new(30.0, 40.0, 5.0, 2));
    let calls = draw_list(&s, &PlayerVisual::Placeholder);
    let bullet = &calls[1];
    assert_eq!((bullet.w, bullet.h), (10.0, 10.0));
    assert_eq!(bullet.visual, Visual::Fill(Rgb::RED));
}

#[test]
fn pause_overlay_is_drawn_last() {
    let (paused, _) = toggle_pause(&make_state());
    let calls = draw_list(&paused, &PlayerVisual::Placeholder);
    let last = calls.last().expect("overlay present");
    assert_eq!(last.kind, DrawKind::Overlay);
    assert_eq!(last.text.as_deref(), Some("Game Paused"));
    assert_eq!((last.x, last.y), (400.0, 300.0));
}

#[test]
fn hud_reflects_running_state() {
    let mut s = make_state();
    s.score = 1200;
    s.player.health = 60;
    assert_eq!(
        hud(&s),
        Hud {
            score: 1200,
            health: 60,
            countdown: "01:00".to_string(),
            paused: false,
            final_score: None,
        }
    );
}

#[test]
fn hud_reports_final_score_after_game_over() {
    let mut s = make_state();
    s.score = 500;
    s.status = GameStatus::GameOver;
    assert_eq!(hud(&s).final_score, Some(500));

    let (paused, _) = toggle_pause(&make_state());
    let h = hud(&paused);
    assert!(h.paused);
    assert_eq!(h.final_score, None);
}
