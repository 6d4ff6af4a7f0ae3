use star_volley::config::GameConfig;
use star_volley::entities::*;
use star_volley::events::InputIntent;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn config() -> GameConfig {
    GameConfig::default()
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_starts_at_spawn_point() {
    let p = Player::new(&config());
    assert_eq!((p.x, p.y), (400.0, 500.0));
    assert_eq!((p.width, p.height), (50.0, 50.0));
    assert_eq!(p.speed, 5.0);
    assert_eq!(p.health, 100);
    assert_eq!(p.bullet_speed, 5.0);
    assert_eq!(p.bullet_power, 1);
}

#[test]
fn player_clamps_to_field() {
    let cfg = config();
    let mut p = Player::new(&cfg);
    p.x = 748.0;
    p.y = 548.0;
    p.apply_input(InputIntent { down: true, right: true, ..InputIntent::default() });
    p.advance(&cfg);
    assert_eq!((p.x, p.y), (750.0, 550.0));

    p.x = 2.0;
    p.apply_input(InputIntent { left: true, ..InputIntent::default() });
    p.advance(&cfg);
    assert_eq!(p.x, 0.0);
}

#[test]
fn opposite_directions_cancel() {
    let cfg = config();
    let mut p = Player::new(&cfg);
    p.apply_input(InputIntent { up: true, down: true, ..InputIntent::default() });
    p.advance(&cfg);
    assert_eq!(p.y, 500.0);
}

#[test]
fn player_shot_uses_current_upgrades() {
    let cfg = config();
    let mut p = Player::new(&cfg);
    p.collect(PowerUpKind::BulletSpeed, &cfg);
    p.collect(PowerUpKind::BulletPower, &cfg);
    p.shoot_timer = 19;

    let bullet = p.advance(&cfg).expect("timer should fire");

    assert_eq!(bullet, Bullet::new(425.0, 500.0, 7.0, 2));
    assert_eq!(bullet.size, 10.0);
    assert_eq!(p.shoot_timer, 0);
    assert!(p.advance(&cfg).is_none());
}

#[test]
fn heal_is_clamped_at_max() {
    let cfg = config();
    let mut p = Player::new(&cfg);
    p.health = 50;
    p.collect(PowerUpKind::Heal, &cfg);
    assert_eq!(p.health, 70);

    p.health = 90;
    p.collect(PowerUpKind::Heal, &cfg);
    assert_eq!(p.health, 100);
}

#[test]
fn damage_saturates_at_zero() {
    let mut p = Player::new(&config());
    p.health = 10;
    p.take_damage(20);
    assert_eq!(p.health, 0);
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[test]
fn enemy_speed_by_kind() {
    assert_eq!(Enemy::new(0.0, 0.0, EnemyKind::Basic, 1).speed, 2.0);
    assert_eq!(Enemy::new(0.0, 0.0, EnemyKind::Fast, 1).speed, 4.0);
    assert_eq!(Enemy::new(0.0, 0.0, EnemyKind::Strong, 1).speed, 2.0);
}

#[test]
fn strong_enemy_always_full_health() {
    assert_eq!(Enemy::new(0.0, 0.0, EnemyKind::Strong, 1).health, 3);
}

#[test]
fn enemy_health_is_kept_in_range() {
    assert_eq!(Enemy::new(0.0, 0.0, EnemyKind::Basic, 0).health, 1);
    assert_eq!(Enemy::new(0.0, 0.0, EnemyKind::Fast, 9).health, 3);
}

#[test]
fn take_hit_reports_survival() {
    let mut e = Enemy::new(0.0, 0.0, EnemyKind::Basic, 2);
    assert!(e.take_hit());
    assert!(!e.take_hit());
    assert_eq!(e.health, 0);
    assert!(!e.take_hit());
    assert_eq!(e.health, 0);
}

#[test]
fn strong_enemy_wobbles_with_absolute_y() {
    let cfg = config();
    let mut e = Enemy::new(100.0, 98.0, EnemyKind::Strong, 3);
    assert!(e.advance(&cfg));
    assert_eq!(e.y, 100.0);
    let expected = 100.0 + 1.0f32.sin() * 3.0;
    assert!((e.x - expected).abs() < 1e-4);
}

#[test]
fn basic_enemy_falls_straight() {
    let cfg = config();
    let mut e = Enemy::new(100.0, 98.0, EnemyKind::Basic, 1);
    e.advance(&cfg);
    assert_eq!((e.x, e.y), (100.0, 100.0));
}

#[test]
fn enemy_pruned_below_field() {
    let cfg = config();
    let mut e = Enemy::new(0.0, 646.0, EnemyKind::Basic, 1);
    assert!(e.advance(&cfg)); // 648
    assert!(!e.advance(&cfg)); // 650
}

// ── Bullet / PowerUp ──────────────────────────────────────────────────────────

#[test]
fn bullet_size_follows_power() {
    let b = Bullet::new(0.0, 0.0, 5.0, 3);
    assert_eq!(b.size, 15.0);
}

#[test]
fn bullet_dies_at_top_edge() {
    let cfg = config();
    let mut b = Bullet::new(0.0, 6.0, 5.0, 1);
    assert!(b.advance(&cfg)); // 1
    assert!(!b.advance(&cfg)); // -4
}

#[test]
fn power_up_falls_and_is_pruned() {
    let cfg = config();
    let mut p = PowerUp::new(0.0, 646.0, PowerUpKind::Heal);
    assert!(p.advance(&cfg));
    assert_eq!(p.y, 648.0);
    assert!(!p.advance(&cfg));
}

// ── Particle ──────────────────────────────────────────────────────────────────

#[test]
fn particle_scatter_ranges() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let p = Particle::scatter(50.0, 60.0, &mut rng);
        assert_eq!((p.x, p.y), (50.0, 60.0));
        assert!(p.size >= 2.0 && p.size < 7.0);
        assert!(p.vx >= -2.0 && p.vx < 2.0);
        assert!(p.vy >= -2.0 && p.vy < 2.0);
        assert_eq!(p.life, 60);
    }
}

#[test]
fn particle_dies_when_too_small() {
    let cfg = config();
    let mut p = Particle {
        x: 0.0,
        y: 0.0,
        size: 1.04,
        vx: 1.0,
        vy: -1.0,
        color: Rgb::RED,
        life: 60,
    };
    assert!(!p.advance(&cfg));
    assert_eq!((p.x, p.y), (1.0, -1.0));
}

#[test]
fn particle_dies_after_its_life() {
    let cfg = config();
    let mut p = Particle {
        x: 0.0,
        y: 0.0,
        size: 1.0e6,
        vx: 0.0,
        vy: 0.0,
        color: Rgb::RED,
        life: 60,
    };
    for _ in 0..59 {
        assert!(p.advance(&cfg));
    }
    assert!(!p.advance(&cfg));
    assert_eq!(p.life, 0);
}

#[test]
fn hue_to_rgb_primaries() {
    assert_eq!(Rgb::from_hue(0.0), Rgb(255, 0, 0));
    assert_eq!(Rgb::from_hue(120.0), Rgb(0, 255, 0));
    assert_eq!(Rgb::from_hue(240.0), Rgb(0, 0, 255));
    assert_eq!(Rgb::from_hue(60.0), Rgb(255, 255, 0));
    assert_eq!(Rgb::from_hue(360.0), Rgb(255, 0, 0));
}
