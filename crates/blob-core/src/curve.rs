//! Closed cubic-Bézier path built from the interpolated blob points.

use crate::points::BlobPoint;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::fmt::Write;

/// One cubic segment. Its start is the previous segment's `end` (or the
/// path start for the first segment).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CubicSegment {
    pub ctrl1: Vec2,
    pub ctrl2: Vec2,
    pub end: Vec2,
}

impl CubicSegment {
    /// Point on the segment at `t` in `[0, 1]`, given the segment start.
    pub fn point_at(&self, start: Vec2, t: f32) -> Vec2 {
        let u = 1.0 - t;
        start * (u * u * u)
            + self.ctrl1 * (3.0 * u * u * t)
            + self.ctrl2 * (3.0 * u * t * t)
            + self.end * (t * t * t)
    }
}

/// Geometry of one frame: a move-to followed by cubic segments.
///
/// The buffer is owned by the blob and rebuilt on every `build_path`, so a
/// borrowed path is only valid until the next frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlobPath {
    start: Vec2,
    segments: Vec<CubicSegment>,
}

impl BlobPath {
    pub fn with_capacity(segments: usize) -> Self {
        Self {
            start: Vec2::ZERO,
            segments: Vec::with_capacity(segments),
        }
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Where the cursor rests after the last segment.
    pub fn end(&self) -> Vec2 {
        self.segments.last().map_or(self.start, |s| s.end)
    }

    /// Anchor points: the start followed by every segment end.
    pub fn anchors(&self) -> impl Iterator<Item = Vec2> + '_ {
        std::iter::once(self.start).chain(self.segments.iter().map(|s| s.end))
    }

    /// Raw segment data for uploading into a vertex or storage buffer.
    pub fn segment_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.segments)
    }

    pub(crate) fn clear(&mut self) {
        self.start = Vec2::ZERO;
        self.segments.clear();
    }

    pub(crate) fn move_to(&mut self, point: Vec2) {
        self.start = point;
    }

    pub(crate) fn cubic_to(&mut self, ctrl1: Vec2, ctrl2: Vec2, end: Vec2) {
        self.segments.push(CubicSegment { ctrl1, ctrl2, end });
    }

    /// Uniformly scales the whole path about `pivot`.
    pub fn scale_about(&mut self, pivot: Vec2, factor: f32) {
        let scale = |p: Vec2| pivot + (p - pivot) * factor;
        self.start = scale(self.start);
        for seg in &mut self.segments {
            seg.ctrl1 = scale(seg.ctrl1);
            seg.ctrl2 = scale(seg.ctrl2);
            seg.end = scale(seg.end);
        }
    }

    /// Flattens the path into a polyline with `steps` samples per segment.
    /// The first point is the path start; the last equals the path end.
    pub fn sample(&self, steps: usize) -> Vec<Vec2> {
        let steps = steps.max(1);
        let mut out = Vec::with_capacity(self.segments.len() * steps + 1);
        out.push(self.start);
        let mut from = self.start;
        for seg in &self.segments {
            for k in 1..=steps {
                out.push(seg.point_at(from, k as f32 / steps as f32));
            }
            from = seg.end;
        }
        out
    }

    /// SVG `d` attribute for the path, closed with `Z`.
    pub fn to_svg_path_data(&self) -> String {
        let mut d = String::with_capacity(16 + self.segments.len() * 64);
        if self.segments.is_empty() {
            return d;
        }
        // Writing into a String cannot fail.
        let _ = write!(d, "M{:.3} {:.3}", self.start.x, self.start.y);
        for s in &self.segments {
            let _ = write!(
                d,
                " C{:.3} {:.3} {:.3} {:.3} {:.3} {:.3}",
                s.ctrl1.x, s.ctrl1.y, s.ctrl2.x, s.ctrl2.y, s.end.x, s.end.y
            );
        }
        d.push_str(" Z");
        d
    }
}

/// Rotates `point` about `pivot` by `degrees`. Positive angles turn
/// clockwise on a y-down surface.
#[inline]
pub fn rotate_about(point: Vec2, pivot: Vec2, degrees: f32) -> Vec2 {
    pivot + Vec2::from_angle(degrees.to_radians()).rotate(point - pivot)
}

/// Rebuilds `path` from the current point state around `center`.
pub(crate) fn build_path(
    path: &mut BlobPath,
    points: &[BlobPoint],
    bezier_constant: f32,
    center: Vec2,
) {
    path.clear();
    let n = points.len();
    for (i, point) in points.iter().enumerate() {
        let next = &points[(i + 1) % n];

        let r1 = point.interpolated_radius();
        let r2 = next.interpolated_radius();
        let angle1 = point.interpolated_angle();
        let angle2 = next.interpolated_angle();

        let (lo, hi) = (r1.min(r2), r1.max(r2));
        let l = bezier_constant * (lo + (hi - lo) / 2.0);

        let start = rotate_about(center - Vec2::new(0.0, r1), center, angle1);
        let ctrl1 = rotate_about(center + Vec2::new(l, -r1), center, angle1);
        let end = rotate_about(center - Vec2::new(0.0, r2), center, angle2);
        let ctrl2 = rotate_about(center + Vec2::new(-l, -r2), center, angle2);

        if i == 0 {
            path.move_to(start);
        }
        path.cubic_to(ctrl1, ctrl2, end);
    }
}
