//! Track measurement: where on the track a pointer landed.

use floem::kurbo::{Point, Rect, Size};

use crate::math;

/// Position of a pointer within the track rectangle.
///
/// Both fractions are 0.0 at the left/top edge and 1.0 at the right/bottom
/// edge. A pointer dragged past the track yields values outside that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchOffset {
    pub x_fraction: f64,
    pub y_fraction: f64,
}

/// Read access to the track's current bounding rectangle.
pub trait MeasureTrack {
    /// Track bounds in the same coordinate space as incoming pointer
    /// positions, or `None` before the track has been laid out.
    fn track_bounds(&self) -> Option<Rect>;

    /// Offset of `pos` within the track, or `None` when the track cannot be
    /// measured.
    fn touch_offset(&self, pos: Point) -> Option<TouchOffset> {
        touch_offset(self.track_bounds()?, pos)
    }
}

impl MeasureTrack for Rect {
    fn track_bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl MeasureTrack for Option<Rect> {
    fn track_bounds(&self) -> Option<Rect> {
        *self
    }
}

pub(crate) fn touch_offset(bounds: Rect, pos: Point) -> Option<TouchOffset> {
    let width = bounds.width();
    let height = bounds.height();
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let x_fraction = (pos.x - bounds.x0) / width;
    let y_fraction = (pos.y - bounds.y0) / height;
    if !(x_fraction.is_finite() && y_fraction.is_finite()) {
        return None;
    }
    Some(TouchOffset {
        x_fraction,
        y_fraction,
    })
}

/// Track bounds of a laid-out fader, refreshed on every layout pass.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TrackLayout {
    bounds: Option<Rect>,
}

impl TrackLayout {
    pub(crate) fn set_fader_size(&mut self, size: Size) {
        self.bounds = Some(math::track_rect(size));
    }
}

impl MeasureTrack for TrackLayout {
    fn track_bounds(&self) -> Option<Rect> {
        self.bounds
    }
}
