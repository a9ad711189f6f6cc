use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// One sampled point of the background field.
///
/// The origin is fixed at seed time; the wave and pointer forces move the
/// particle around it through its velocity, never by assigning the position
/// directly, which is what gives the field its inertia.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub origin: Vec2,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Tuning for the field; picked per viewport width at seed time.
#[derive(Clone, Copy, Debug)]
pub struct FieldConfig {
    pub grid_spacing: f32,
    pub connect_dist: f32,
    pub pointer_influence: f32,
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    pub point_size: f32,
    pub line_opacity: f32,
    pub point_opacity: f32,
}

impl FieldConfig {
    pub fn for_width(css_width: f32) -> Self {
        let narrow = css_width < NARROW_VIEWPORT_PX;
        Self {
            grid_spacing: if narrow { GRID_SPACING_NARROW } else { GRID_SPACING },
            connect_dist: if narrow { CONNECT_DIST_NARROW } else { CONNECT_DIST },
            pointer_influence: if narrow {
                POINTER_INFLUENCE_NARROW
            } else {
                POINTER_INFLUENCE
            },
            wave_amplitude: if narrow {
                WAVE_AMPLITUDE_NARROW
            } else {
                WAVE_AMPLITUDE
            },
            wave_frequency: WAVE_FREQUENCY,
            point_size: if narrow { POINT_SIZE_NARROW } else { POINT_SIZE },
            line_opacity: LINE_OPACITY,
            point_opacity: POINT_OPACITY,
        }
    }

    /// Carry the length-based tuning into canvas backing pixels. The canvas
    /// backing store is CSS size times devicePixelRatio, so distances and
    /// sizes scale with it while opacities and the frame-clock frequency do
    /// not.
    pub fn scaled(mut self, dpr: f32) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.grid_spacing *= dpr;
        self.connect_dist *= dpr;
        self.pointer_influence *= dpr;
        self.wave_amplitude *= dpr;
        self.point_size *= dpr;
        self
    }
}

impl Particle {
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            pos: origin,
            vel: Vec2::ZERO,
        }
    }

    /// Advance one frame: wave target around the origin, pointer attraction
    /// inside the influence radius, damped velocity integration.
    pub fn update(&mut self, clock: f64, cfg: &FieldConfig, pointer: Vec2) {
        let phase = clock as f32 * cfg.wave_frequency;
        let wave_x = (phase + self.origin.x * WAVE_PHASE_SCALE).sin() * cfg.wave_amplitude;
        let wave_y =
            (phase + self.origin.y * WAVE_PHASE_SCALE).cos() * cfg.wave_amplitude * WAVE_Y_RATIO;
        let target = self.origin + Vec2::new(wave_x, wave_y);

        let to_pointer = pointer - self.pos;
        let dist = to_pointer.length();
        if dist < cfg.pointer_influence {
            let force = (cfg.pointer_influence - dist) / cfg.pointer_influence;
            let angle = to_pointer.y.atan2(to_pointer.x);
            self.vel += Vec2::new(angle.cos(), angle.sin()) * force * POINTER_FORCE;
        }

        self.vel += (target - self.pos) * SPRING_STIFFNESS;
        self.vel *= VELOCITY_DAMPING;
        self.pos += self.vel;
    }
}

/// Lay the field out on a spacing grid with a centered remainder offset and
/// a jittered position per cell. Jitter is clamped back into the canvas so
/// edge particles never start out of bounds.
pub fn seed_field(width: f32, height: f32, cfg: &FieldConfig, rng: &mut impl Rng) -> Vec<Particle> {
    let mut particles = Vec::new();
    if width <= 0.0 || height <= 0.0 {
        return particles;
    }
    let spacing = cfg.grid_spacing;
    let offset_x = (width % spacing) / 2.0;
    let offset_y = (height % spacing) / 2.0;

    let mut x = offset_x;
    while x < width {
        let mut y = offset_y;
        while y < height {
            let jx = (rng.gen::<f32>() - 0.5) * 2.0 * GRID_JITTER;
            let jy = (rng.gen::<f32>() - 0.5) * 2.0 * GRID_JITTER;
            let origin = Vec2::new((x + jx).clamp(0.0, width), (y + jy).clamp(0.0, height));
            particles.push(Particle::new(origin));
            y += spacing;
        }
        x += spacing;
    }
    particles
}

/// Line opacity for a pair at the given distance; zero at and beyond the
/// connection threshold, scaled by the global line opacity below it.
#[inline]
pub fn connection_alpha(dist: f32, cfg: &FieldConfig) -> f32 {
    if dist < cfg.connect_dist {
        (cfg.connect_dist - dist) / cfg.connect_dist * cfg.line_opacity
    } else {
        0.0
    }
}
