//! Blob control points and their randomized animation targets.
//!
//! Every point owns one angular slot of the circle. It interpolates from its
//! current (radius, angle) toward a randomly generated next target and, once
//! its progress wraps, commits that target and draws a fresh one.

use crate::constants::*;
use crate::error::{BlobError, Result};
use log::trace;
use rand::prelude::*;
use smallvec::SmallVec;

/// How random fractions are drawn when generating point targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JitterSource {
    /// Uniform fractions in `[0, 1)`.
    #[default]
    Uniform,
    /// Signed `next_i32 as f32 % 100 / 100` fractions in `(-1, 1)`. The
    /// float conversion drops low bits of large integers, so most fractions
    /// land on multiples of 0.04. Radius and speed use the absolute value,
    /// angle jitter keeps the sign.
    Legacy,
}

impl JitterSource {
    fn fraction<R: Rng + ?Sized>(self, rng: &mut R) -> f32 {
        match self {
            JitterSource::Uniform => rng.gen::<f32>(),
            JitterSource::Legacy => (rng.gen::<i32>() as f32 % 100.0) / 100.0,
        }
    }
}

/// Radial range new point targets are drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RadiusBounds {
    pub min: f32,
    pub max: f32,
}

impl RadiusBounds {
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min > max {
            return Err(BlobError::InvalidRadiusBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    #[inline]
    pub fn contains(&self, radius: f32) -> bool {
        radius >= self.min && radius <= self.max
    }
}

/// Animation state of a single control point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlobPoint {
    pub radius: f32,
    pub angle: f32,
    pub radius_next: f32,
    pub angle_next: f32,
    /// Interpolation fraction toward the next target, kept in `[0, 1)`.
    pub progress: f32,
    pub speed: f32,
}

impl BlobPoint {
    /// Radius at the current progress.
    #[inline]
    pub fn interpolated_radius(&self) -> f32 {
        lerp(self.radius, self.radius_next, self.progress)
    }

    /// Angle in degrees at the current progress.
    #[inline]
    pub fn interpolated_angle(&self) -> f32 {
        lerp(self.angle, self.angle_next, self.progress)
    }
}

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from * (1.0 - t) + to * t
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Current,
    Next,
}

/// Fixed-size set of control points plus the generator that feeds them.
#[derive(Clone, Debug)]
pub(crate) struct PointSet {
    points: SmallVec<[BlobPoint; 16]>,
    bounds: RadiusBounds,
    jitter: JitterSource,
    rng: StdRng,
}

impl PointSet {
    pub(crate) fn new(
        point_count: usize,
        bounds: RadiusBounds,
        jitter: JitterSource,
        seed: u64,
    ) -> Self {
        let mut set = Self {
            points: SmallVec::from_elem(BlobPoint::default(), point_count),
            bounds,
            jitter,
            rng: StdRng::seed_from_u64(seed),
        };
        set.regenerate_all();
        set
    }

    #[inline]
    pub(crate) fn points(&self) -> &[BlobPoint] {
        &self.points
    }

    #[inline]
    pub(crate) fn bounds(&self) -> RadiusBounds {
        self.bounds
    }

    #[inline]
    pub(crate) fn set_bounds(&mut self, bounds: RadiusBounds) {
        self.bounds = bounds;
    }

    #[inline]
    pub(crate) fn jitter(&self) -> JitterSource {
        self.jitter
    }

    pub(crate) fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub(crate) fn random_seed(&mut self) -> u64 {
        self.rng.gen()
    }

    pub(crate) fn regenerate_all(&mut self) {
        for i in 0..self.points.len() {
            self.generate(i, Slot::Current);
            self.generate(i, Slot::Next);
            self.points[i].progress = 0.0;
        }
    }

    /// Moves every point toward its target. Louder input races points faster.
    pub(crate) fn advance(&mut self, amplitude: f32, speed_scale: f32) {
        let amplitude = amplitude.max(0.0);
        let speed_scale = speed_scale.max(0.0);
        for i in 0..self.points.len() {
            let point = &mut self.points[i];
            point.progress +=
                point.speed * MIN_SPEED + amplitude * point.speed * MAX_SPEED * speed_scale;
            if point.progress < 1.0 {
                continue;
            }
            point.progress = 0.0;
            point.radius = point.radius_next;
            point.angle = point.angle_next;
            self.generate(i, Slot::Next);
            trace!(
                "[blob] point {i} wrapped, next target r={:.2} a={:.2}",
                self.points[i].radius_next,
                self.points[i].angle_next
            );
        }
    }

    fn generate(&mut self, index: usize, slot: Slot) {
        let slot_width = 360.0 / self.points.len() as f32;
        let radius =
            self.bounds.min + self.jitter.fraction(&mut self.rng).abs() * self.bounds.span();
        let angle = slot_width * index as f32
            + self.jitter.fraction(&mut self.rng) * slot_width * ANGLE_JITTER_FRACTION;
        let speed = POINT_SPEED_BASE + POINT_SPEED_SPAN * self.jitter.fraction(&mut self.rng).abs();

        let point = &mut self.points[index];
        match slot {
            Slot::Current => {
                point.radius = radius;
                point.angle = angle;
            }
            Slot::Next => {
                point.radius_next = radius;
                point.angle_next = angle;
            }
        }
        point.speed = speed;
    }
}
