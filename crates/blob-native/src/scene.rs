// Two layered blobs around a solid core, the way a recording screen shows
// the microphone level.

use anyhow::Context;
use blob_core::{
    normalize_level, Blob, BlobCategory, BlobConfig, BlobPath, JitterSource, MAX_RAW_LEVEL,
};
use glam::Vec2;
use std::time::Duration;

const LARGE_POINTS: usize = 12;
const SMALL_POINTS: usize = 9;
const BLOB_SCALE_COEF: f32 = 1.1;
const LARGE_RADIUS: (f32, f32) = (65.0, 75.0);
const SMALL_RADIUS: (f32, f32) = (55.0, 67.0);
const CORE_RADIUS: f32 = 40.0;
const LARGE_SPEED_SCALE: f32 = 0.6;
const SMALL_SPEED_SCALE: f32 = 0.7;
const INTRO_DURATION: Duration = Duration::from_millis(1000);
const INTRO_TENSION: f32 = 1.1;

/// Geometry for one frame, already scaled about the center.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub center: Vec2,
    pub large: BlobPath,
    pub small: BlobPath,
    pub core_radius: f32,
}

pub struct WavesScene {
    large: Blob,
    small: Blob,
    core_radius: f32,
    intro_elapsed: Duration,
}

impl WavesScene {
    pub fn new(density: f32, seed: Option<u64>, jitter: JitterSource) -> anyhow::Result<Self> {
        let dp = |v: f32| v * BLOB_SCALE_COEF * density;
        let large = Blob::from_config(BlobConfig {
            point_count: LARGE_POINTS,
            min_radius: dp(LARGE_RADIUS.0),
            max_radius: dp(LARGE_RADIUS.1),
            seed,
            jitter,
        })
        .context("large blob")?;
        let small = Blob::from_config(BlobConfig {
            point_count: SMALL_POINTS,
            min_radius: dp(SMALL_RADIUS.0),
            max_radius: dp(SMALL_RADIUS.1),
            seed: seed.map(|s| s.wrapping_add(1)),
            jitter,
        })
        .context("small blob")?;
        Ok(Self {
            large,
            small,
            core_radius: dp(CORE_RADIUS),
            intro_elapsed: Duration::ZERO,
        })
    }

    /// Feeds a raw recorder level to both blobs.
    pub fn set_level(&mut self, raw: f32) {
        let value = normalize_level(raw, MAX_RAW_LEVEL);
        self.large.set_amplitude_target(value, BlobCategory::Large);
        self.small.set_amplitude_target(value, BlobCategory::Small);
    }

    pub fn tick(&mut self, dt: Duration) {
        self.intro_elapsed = (self.intro_elapsed + dt).min(INTRO_DURATION);

        self.large.advance_amplitude(dt);
        self.large
            .advance_points(self.large.amplitude(), LARGE_SPEED_SCALE);
        self.small.advance_amplitude(dt);
        self.small
            .advance_points(self.small.amplitude(), SMALL_SPEED_SCALE);
    }

    pub fn amplitudes(&self) -> (f32, f32) {
        (self.large.amplitude(), self.small.amplitude())
    }

    pub fn frame(&mut self, center: Vec2) -> SceneFrame {
        let intro = overshoot(
            self.intro_elapsed.as_secs_f32() / INTRO_DURATION.as_secs_f32(),
            INTRO_TENSION,
        );
        let large_scale = intro * self.large.display_scale(BlobCategory::Large);
        let small_scale = intro * self.small.display_scale(BlobCategory::Small);

        let mut large = self.large.build_path(center).clone();
        large.scale_about(center, large_scale);
        let mut small = self.small.build_path(center).clone();
        small.scale_about(center, small_scale);

        SceneFrame {
            center,
            large,
            small,
            core_radius: self.core_radius * (large_scale + small_scale) / 2.0,
        }
    }
}

/// Ease that runs past 1.0 and settles back, `t` in `[0, 1]`.
pub fn overshoot(t: f32, tension: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    t * t * ((tension + 1.0) * t + tension) + 1.0
}
