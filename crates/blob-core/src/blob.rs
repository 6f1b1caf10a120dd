use crate::amplitude::{AmplitudeTracker, BlobCategory};
use crate::constants::{bezier_constant, MIN_POINT_COUNT, SCALE_MULTIPLIER};
use crate::curve::{self, BlobPath};
use crate::error::{BlobError, Result};
use crate::points::{BlobPoint, JitterSource, PointSet, RadiusBounds};
use glam::Vec2;
use log::debug;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct BlobConfig {
    pub point_count: usize,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Fixed seed for reproducible shapes; `None` picks one at random.
    pub seed: Option<u64>,
    pub jitter: JitterSource,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            point_count: 12,
            min_radius: 0.0,
            max_radius: 0.0,
            seed: None,
            jitter: JitterSource::Uniform,
        }
    }
}

/// A morphing closed curve driven by an amplitude signal.
///
/// Drive it once per frame:
///
/// ```
/// use blob_core::{Blob, BlobCategory};
/// use glam::Vec2;
/// use std::time::Duration;
///
/// let mut blob = Blob::with_seed(12, 7).unwrap();
/// blob.set_radius_bounds(65.0, 75.0).unwrap();
/// blob.set_amplitude_target(0.5, BlobCategory::Large);
///
/// blob.advance_amplitude(Duration::from_millis(16));
/// blob.advance_points(blob.amplitude(), 0.6);
/// let path = blob.build_path(Vec2::new(100.0, 100.0));
/// assert_eq!(path.len(), 12);
/// ```
#[derive(Clone, Debug)]
pub struct Blob {
    points: PointSet,
    bezier_constant: f32,
    amplitude: AmplitudeTracker,
    path: BlobPath,
}

impl Blob {
    pub fn new(point_count: usize) -> Result<Self> {
        Self::from_config(BlobConfig {
            point_count,
            ..BlobConfig::default()
        })
    }

    pub fn with_seed(point_count: usize, seed: u64) -> Result<Self> {
        Self::from_config(BlobConfig {
            point_count,
            seed: Some(seed),
            ..BlobConfig::default()
        })
    }

    pub fn from_config(config: BlobConfig) -> Result<Self> {
        if config.point_count < MIN_POINT_COUNT {
            return Err(BlobError::TooFewPoints {
                count: config.point_count,
                min: MIN_POINT_COUNT,
            });
        }
        let bounds = RadiusBounds::new(config.min_radius, config.max_radius)?;
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        debug!(
            "[blob] new points={} radius={:.1}..{:.1} seed={seed} jitter={:?}",
            config.point_count, bounds.min, bounds.max, config.jitter
        );
        Ok(Self {
            points: PointSet::new(config.point_count, bounds, config.jitter, seed),
            bezier_constant: bezier_constant(config.point_count),
            amplitude: AmplitudeTracker::new(),
            path: BlobPath::with_capacity(config.point_count),
        })
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.points().len()
    }

    #[inline]
    pub fn bezier_constant(&self) -> f32 {
        self.bezier_constant
    }

    #[inline]
    pub fn points(&self) -> &[BlobPoint] {
        self.points.points()
    }

    #[inline]
    pub fn radius_bounds(&self) -> RadiusBounds {
        self.points.bounds()
    }

    #[inline]
    pub fn jitter(&self) -> JitterSource {
        self.points.jitter()
    }

    /// Replaces the radius bounds and regenerates every point inside them.
    pub fn set_radius_bounds(&mut self, min: f32, max: f32) -> Result<()> {
        self.retarget_radius_bounds(min, max)?;
        self.regenerate_all();
        Ok(())
    }

    /// Replaces the radius bounds without touching the current shape. Points
    /// drift into the new range as they pick their next targets.
    pub fn retarget_radius_bounds(&mut self, min: f32, max: f32) -> Result<()> {
        let bounds = RadiusBounds::new(min, max)?;
        debug!("[blob] radius bounds {:.1}..{:.1}", bounds.min, bounds.max);
        self.points.set_bounds(bounds);
        Ok(())
    }

    /// Fresh random current and next targets for every point, progress reset.
    pub fn regenerate_all(&mut self) {
        self.points.regenerate_all();
        debug!("[blob] regenerated {} points", self.point_count());
    }

    /// Restarts the point generator. `None` derives a new seed from the
    /// current generator.
    pub fn reseed(&mut self, seed: Option<u64>) {
        let seed = seed.unwrap_or_else(|| self.points.random_seed());
        self.points.reseed(seed);
    }

    pub fn advance_points(&mut self, amplitude: f32, speed_scale: f32) {
        self.points.advance(amplitude, speed_scale);
    }

    pub fn set_amplitude_target(&mut self, value: f32, category: BlobCategory) {
        self.amplitude.set_target(value, category);
    }

    pub fn advance_amplitude(&mut self, dt: Duration) {
        self.amplitude.advance(dt);
    }

    #[inline]
    pub fn amplitude(&self) -> f32 {
        self.amplitude.amplitude()
    }

    #[inline]
    pub fn amplitude_tracker(&self) -> &AmplitudeTracker {
        &self.amplitude
    }

    /// Scale a renderer should apply about the center for the current
    /// amplitude.
    pub fn display_scale(&self, category: BlobCategory) -> f32 {
        category.min_scale() + SCALE_MULTIPLIER * self.amplitude()
    }

    /// Rebuilds the frame geometry around `center` and returns it.
    pub fn build_path(&mut self, center: Vec2) -> &BlobPath {
        curve::build_path(
            &mut self.path,
            self.points.points(),
            self.bezier_constant,
            center,
        );
        &self.path
    }

    /// Geometry from the most recent `build_path`.
    #[inline]
    pub fn path(&self) -> &BlobPath {
        &self.path
    }
}
