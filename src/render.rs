use crate::constants::{LINE_WIDTH, POINT_COLOR, TRAIL_FILL};
use crate::particle::{connection_alpha, FieldConfig, Particle};
use std::f64::consts::TAU;
use web_sys as web;

/// Translucent wash over the previous frame instead of a hard clear; this
/// is what leaves the motion trails.
pub fn trail_fill(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style_str(TRAIL_FILL);
    ctx.fill_rect(0.0, 0.0, width, height);
}

/// Stroke a faded line between every pair closer than the connection
/// threshold. Quadratic over the field, which stays in the low hundreds.
pub fn draw_connections(
    ctx: &web::CanvasRenderingContext2d,
    particles: &[Particle],
    cfg: &FieldConfig,
) {
    ctx.save();
    ctx.set_stroke_style_str(POINT_COLOR);
    ctx.set_line_width(LINE_WIDTH);
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let dist = particles[i].pos.distance(particles[j].pos);
            let alpha = connection_alpha(dist, cfg);
            if alpha > 0.0 {
                ctx.set_global_alpha(alpha as f64);
                ctx.begin_path();
                ctx.move_to(particles[i].pos.x as f64, particles[i].pos.y as f64);
                ctx.line_to(particles[j].pos.x as f64, particles[j].pos.y as f64);
                ctx.stroke();
            }
        }
    }
    ctx.restore();
}

/// Particles are drawn over their connections as filled circles.
pub fn draw_points(
    ctx: &web::CanvasRenderingContext2d,
    particles: &[Particle],
    cfg: &FieldConfig,
) {
    ctx.save();
    ctx.set_fill_style_str(POINT_COLOR);
    ctx.set_global_alpha(cfg.point_opacity as f64);
    for p in particles {
        ctx.begin_path();
        _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, cfg.point_size as f64, 0.0, TAU);
        ctx.fill();
    }
    ctx.restore();
}
