// Host-side tests for the pure particle field. The main crate is wasm-only,
// so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod particle {
    include!("../src/particle.rs");
}

use glam::Vec2;
use particle::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn quiet_config() -> FieldConfig {
    // No wave forcing, so the only pull is the spring toward the origin.
    FieldConfig {
        grid_spacing: 80.0,
        connect_dist: 120.0,
        pointer_influence: 150.0,
        wave_amplitude: 0.0,
        wave_frequency: 0.002,
        point_size: 2.0,
        line_opacity: 0.3,
        point_opacity: 0.8,
    }
}

#[test]
fn seeded_field_stays_in_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    for (w, h) in [
        (320.0_f32, 568.0_f32),
        (767.0, 1024.0),
        (768.0, 1024.0),
        (1366.0, 768.0),
        (1920.0, 1080.0),
    ] {
        let cfg = FieldConfig::for_width(w);
        let field = seed_field(w, h, &cfg, &mut rng);
        assert!(!field.is_empty(), "no particles for {w}x{h}");
        for p in &field {
            assert!(p.origin.x >= 0.0 && p.origin.x <= w, "{:?} out of x bounds", p.origin);
            assert!(p.origin.y >= 0.0 && p.origin.y <= h, "{:?} out of y bounds", p.origin);
            assert_eq!(p.pos, p.origin);
            assert_eq!(p.vel, Vec2::ZERO);
        }
    }
}

#[test]
fn seeded_field_matches_grid_density() {
    let mut rng = StdRng::seed_from_u64(7);
    // 800x600 at spacing 80: offsets (0, 20), 10 columns x 8 rows
    let cfg = FieldConfig::for_width(800.0);
    let field = seed_field(800.0, 600.0, &cfg, &mut rng);
    assert_eq!(field.len(), 80);
}

#[test]
fn degenerate_canvas_seeds_nothing() {
    let mut rng = StdRng::seed_from_u64(7);
    let cfg = FieldConfig::for_width(0.0);
    assert!(seed_field(0.0, 0.0, &cfg, &mut rng).is_empty());
    assert!(seed_field(-100.0, 400.0, &cfg, &mut rng).is_empty());
}

#[test]
fn reseeding_discards_prior_state() {
    let mut rng = StdRng::seed_from_u64(7);
    let cfg = FieldConfig::for_width(800.0);
    let mut field = seed_field(800.0, 600.0, &cfg, &mut rng);
    for p in field.iter_mut() {
        p.update(1.0, &cfg, Vec2::new(400.0, 300.0));
    }
    let fresh = seed_field(800.0, 600.0, &cfg, &mut rng);
    for p in &fresh {
        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.pos, p.origin);
    }
}

#[test]
fn velocity_decays_without_forcing() {
    let cfg = quiet_config();
    let origin = Vec2::new(200.0, 200.0);
    let mut p = Particle::new(origin);
    p.vel = Vec2::new(5.0, -3.0);
    let far_pointer = Vec2::new(1.0e6, 1.0e6);

    for clock in 0..1000 {
        p.update(clock as f64, &cfg, far_pointer);
    }
    assert!(p.vel.length() < 1e-3, "velocity did not decay: {:?}", p.vel);
    assert!(
        p.pos.distance(origin) < 1e-2,
        "position did not settle: {:?}",
        p.pos
    );
}

#[test]
fn pointer_attracts_within_influence() {
    let cfg = quiet_config();
    let mut p = Particle::new(Vec2::new(100.0, 100.0));
    p.update(0.0, &cfg, Vec2::new(110.0, 100.0));
    assert!(p.vel.x > 0.0);
    assert!(p.pos.x > 100.0);

    // outside the influence radius the pointer does nothing
    let mut far = Particle::new(Vec2::new(100.0, 100.0));
    far.update(0.0, &cfg, Vec2::new(100.0 + cfg.pointer_influence + 1.0, 100.0));
    assert_eq!(far.vel, Vec2::ZERO);
}

#[test]
fn wave_displaces_toward_bounded_target() {
    let cfg = FieldConfig::for_width(1024.0);
    let origin = Vec2::new(300.0, 300.0);
    let mut p = Particle::new(origin);
    let far_pointer = Vec2::new(1.0e6, 1.0e6);
    for clock in 0..2000 {
        p.update(clock as f64, &cfg, far_pointer);
        // the wave target never leaves origin +/- amplitude, and the damped
        // follower should not overshoot it by much
        assert!((p.pos.x - origin.x).abs() < cfg.wave_amplitude * 2.0);
        assert!((p.pos.y - origin.y).abs() < cfg.wave_amplitude * 2.0);
    }
    // it did actually move
    assert!(p.pos.distance(origin) > 0.0);
}

#[test]
fn connection_alpha_fades_with_distance() {
    let cfg = FieldConfig::for_width(1024.0);
    assert!((connection_alpha(0.0, &cfg) - cfg.line_opacity).abs() < 1e-6);
    let mid = connection_alpha(cfg.connect_dist / 2.0, &cfg);
    assert!((mid - cfg.line_opacity / 2.0).abs() < 1e-6);
    assert_eq!(connection_alpha(cfg.connect_dist, &cfg), 0.0);
    assert_eq!(connection_alpha(cfg.connect_dist + 50.0, &cfg), 0.0);
    // monotone over the fade range
    assert!(connection_alpha(10.0, &cfg) > connection_alpha(60.0, &cfg));
}

#[test]
fn scaling_touches_lengths_only() {
    let cfg = FieldConfig::for_width(1024.0);
    let scaled = cfg.scaled(2.0);
    assert_eq!(scaled.grid_spacing, cfg.grid_spacing * 2.0);
    assert_eq!(scaled.connect_dist, cfg.connect_dist * 2.0);
    assert_eq!(scaled.pointer_influence, cfg.pointer_influence * 2.0);
    assert_eq!(scaled.wave_amplitude, cfg.wave_amplitude * 2.0);
    assert_eq!(scaled.point_size, cfg.point_size * 2.0);
    assert_eq!(scaled.wave_frequency, cfg.wave_frequency);
    assert_eq!(scaled.line_opacity, cfg.line_opacity);
    assert_eq!(scaled.point_opacity, cfg.point_opacity);

    // nonsense ratios fall back to 1:1
    let fallback = cfg.scaled(0.0);
    assert_eq!(fallback.grid_spacing, cfg.grid_spacing);
    let nan = cfg.scaled(f32::NAN);
    assert_eq!(nan.grid_spacing, cfg.grid_spacing);
}

#[test]
fn config_switches_at_narrow_threshold() {
    let narrow = FieldConfig::for_width(767.0);
    let wide = FieldConfig::for_width(768.0);
    assert_eq!(narrow.grid_spacing, constants::GRID_SPACING_NARROW);
    assert_eq!(wide.grid_spacing, constants::GRID_SPACING);
    assert!(narrow.connect_dist < wide.connect_dist);
    assert!(narrow.pointer_influence < wide.pointer_influence);
    assert!(narrow.wave_amplitude < wide.wave_amplitude);
    assert!(narrow.point_size < wide.point_size);
    // shared tuning is width-independent
    assert_eq!(narrow.wave_frequency, wide.wave_frequency);
    assert_eq!(narrow.line_opacity, wide.line_opacity);
    assert_eq!(narrow.point_opacity, wide.point_opacity);
}
