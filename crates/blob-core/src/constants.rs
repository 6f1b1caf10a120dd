// Shared blob tuning constants used by the point set, the curve builder and
// the amplitude tracker.

// Point geometry
pub const MIN_POINT_COUNT: usize = 3; // below this the curve does not enclose an area
pub const ANGLE_JITTER_FRACTION: f32 = 0.05; // max jitter as a share of one angular slot

// Point animation
pub const MIN_SPEED: f32 = 0.8; // idle progress multiplier
pub const MAX_SPEED: f32 = 8.2; // extra multiplier at full amplitude
pub const POINT_SPEED_BASE: f32 = 0.017; // progress per tick before multipliers
pub const POINT_SPEED_SPAN: f32 = 0.003; // random spread added to the base speed

// Amplitude easing (rate = 1 - wave speed)
pub const WAVE_SPEED_LARGE: f32 = 0.65;
pub const WAVE_SPEED_SMALL: f32 = 0.45;
pub const EASE_BASE_MS: f32 = 100.0;
pub const EASE_RISE_SPAN_LARGE_MS: f32 = 300.0;
pub const EASE_RISE_SPAN_SMALL_MS: f32 = 400.0;
pub const EASE_FALL_SPAN_MS: f32 = 500.0;

// Display scale
pub const SCALE_LARGE_MIN: f32 = 0.878; // resting scale of the large blob
pub const SCALE_SMALL_MIN: f32 = 0.926; // resting scale of the small blob
pub const SCALE_MULTIPLIER: f32 = 1.2; // extra scale at full amplitude

// Raw recorder levels at or above this map to amplitude 1.0
pub const MAX_RAW_LEVEL: f32 = 1200.0;

/// Handle length factor that makes a regular `n`-gon of cubic segments
/// approximate a circle.
#[inline]
pub fn bezier_constant(point_count: usize) -> f32 {
    ((4.0 / 3.0) * (std::f64::consts::PI / (2.0 * point_count as f64)).tan()) as f32
}
