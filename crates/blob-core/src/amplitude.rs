//! Amplitude smoothing.
//!
//! An externally supplied target (e.g. a normalized microphone level) steps
//! around freely; the tracker walks the visible amplitude toward it at a fixed
//! per-millisecond rate chosen when the target is set. Large blobs grow fast
//! and decay slowly, small blobs react more gently.

use crate::constants::*;
use std::time::Duration;

/// Selects the easing table used when a new target is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlobCategory {
    #[default]
    Large,
    Small,
}

impl BlobCategory {
    pub fn from_is_large(is_large: bool) -> Self {
        if is_large {
            BlobCategory::Large
        } else {
            BlobCategory::Small
        }
    }

    /// Milliseconds-scale divisor applied when the target is above the
    /// current amplitude.
    pub fn rise_divisor(self) -> f32 {
        match self {
            BlobCategory::Large => {
                EASE_BASE_MS + EASE_RISE_SPAN_LARGE_MS * (1.0 - WAVE_SPEED_LARGE)
            }
            BlobCategory::Small => {
                EASE_BASE_MS + EASE_RISE_SPAN_SMALL_MS * (1.0 - WAVE_SPEED_SMALL)
            }
        }
    }

    /// Divisor applied when the target is at or below the current amplitude.
    pub fn fall_divisor(self) -> f32 {
        let rate = match self {
            BlobCategory::Large => 1.0 - WAVE_SPEED_LARGE,
            BlobCategory::Small => 1.0 - WAVE_SPEED_SMALL,
        };
        EASE_BASE_MS + EASE_FALL_SPAN_MS * rate
    }

    /// Display scale at zero amplitude.
    pub fn min_scale(self) -> f32 {
        match self {
            BlobCategory::Large => SCALE_LARGE_MIN,
            BlobCategory::Small => SCALE_SMALL_MIN,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AmplitudeTracker {
    amplitude: f32,
    target: f32,
    diff_per_ms: f32,
}

impl AmplitudeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Signed step applied per elapsed millisecond until the target is hit.
    #[inline]
    pub fn diff_per_ms(&self) -> f32 {
        self.diff_per_ms
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.amplitude == self.target
    }

    /// Sets a new target. The direction (and so the divisor) is fixed here and
    /// not re-evaluated by later advances.
    /// Non-finite values are ignored.
    pub fn set_target(&mut self, value: f32, category: BlobCategory) {
        if !value.is_finite() {
            return;
        }
        self.target = value;
        let divisor = if self.target > self.amplitude {
            category.rise_divisor()
        } else {
            category.fall_divisor()
        };
        self.diff_per_ms = (self.target - self.amplitude) / divisor;
    }

    pub fn advance(&mut self, dt: Duration) {
        self.advance_ms((dt.as_secs_f64() * 1000.0) as f32);
    }

    pub fn advance_ms(&mut self, dt_ms: f32) {
        if self.is_settled() {
            return;
        }
        self.amplitude += self.diff_per_ms * dt_ms.max(0.0);
        if self.diff_per_ms > 0.0 {
            if self.amplitude > self.target {
                self.amplitude = self.target;
            }
        } else if self.amplitude < self.target {
            self.amplitude = self.target;
        }
    }
}

/// Maps a raw recorder level onto `[0, 1]`, saturating at `max_level`.
pub fn normalize_level(raw: f32, max_level: f32) -> f32 {
    if max_level <= 0.0 {
        return 0.0;
    }
    raw.clamp(0.0, max_level) / max_level
}
