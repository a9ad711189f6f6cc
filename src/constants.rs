/// Field tuning, flow timing, and demo credential data.
///
/// Everything the screen is tuned by lives here; the narrow/wide pairs are
/// selected by viewport width when the field is seeded.
// Viewport width (CSS px) below which the compact tuning applies
pub const NARROW_VIEWPORT_PX: f32 = 768.0;

// Grid layout
pub const GRID_SPACING: f32 = 80.0;
pub const GRID_SPACING_NARROW: f32 = 60.0;
pub const GRID_JITTER: f32 = 10.0; // max offset per axis, either direction

// Connection pass
pub const CONNECT_DIST: f32 = 120.0;
pub const CONNECT_DIST_NARROW: f32 = 80.0;
pub const LINE_OPACITY: f32 = 0.3;
pub const LINE_WIDTH: f64 = 1.0;

// Point rendering
pub const POINT_SIZE: f32 = 2.0;
pub const POINT_SIZE_NARROW: f32 = 1.5;
pub const POINT_OPACITY: f32 = 0.8;

// Wave forcing
pub const WAVE_AMPLITUDE: f32 = 50.0;
pub const WAVE_AMPLITUDE_NARROW: f32 = 30.0;
pub const WAVE_FREQUENCY: f32 = 0.002; // radians per frame-clock tick
pub const WAVE_PHASE_SCALE: f32 = 0.01; // phase offset per origin px
pub const WAVE_Y_RATIO: f32 = 0.5; // y amplitude relative to x

// Pointer forcing
pub const POINTER_INFLUENCE: f32 = 150.0;
pub const POINTER_INFLUENCE_NARROW: f32 = 100.0;
pub const POINTER_FORCE: f32 = 0.5;

// Integration
pub const SPRING_STIFFNESS: f32 = 0.02;
pub const VELOCITY_DAMPING: f32 = 0.95; // < 1; velocity decays absent forcing

// Colors
pub const POINT_COLOR: &str = "#ffffff";
pub const TRAIL_FILL: &str = "rgba(10, 10, 20, 0.1)";

// Simulated latency (ms)
pub const LOGIN_DELAY_MS: u32 = 2000;
pub const VERIFY_DELAY_MS: u32 = 1500;
pub const SEND_DELAY_MS: u32 = 1500;
pub const SETTLE_DELAY_MS: u32 = 1000; // Granted/Sent shown before the modal closes
pub const REJECT_DELAY_MS: u32 = 2000; // Invalid/NotFound shown before reverting

// Notification lifetime (ms)
pub const NOTICE_TTL_MS: u32 = 4000;

// Demo allow-lists; there is no account backend behind them.
pub const SUPER_USER_PASSKEYS: &[&str] = &["DART2024", "admin", "superuser"];
pub const RESET_KNOWN_USERS: &[&str] = &["admin", "user"];
