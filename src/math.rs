//! Fader layout math. Pure functions over plain `f64` and kurbo geometry so
//! every placement rule can be checked without a window.

use floem::kurbo::{Point, Rect, Size};

use crate::constants;

/// Invert and clamp a vertical touch offset into a fader fraction.
///
/// `y_fraction` is 0.0 at the top of the track and 1.0 at the bottom; the
/// fader value grows upward, so the result is `1 - y_fraction` kept in 0.0–1.0.
pub(crate) fn fraction_from_y(y_fraction: f64) -> f64 {
    (1.0 - y_fraction).clamp(0.0, 1.0)
}

/// Vertical offset of a legacy-scale value, as a fraction of the track
/// height measured from the top.
pub(crate) fn mark_offset_fraction(value: u16) -> f64 {
    1.0 - f64::from(value) / constants::LEGACY_SCALE_MAX
}

/// Top edge of a mark line, in fader coordinates.
///
/// The line is centred on the value's position, so its top sits half a line
/// above it.
pub(crate) fn mark_top(value: u16, track_height: f64, track_offset: f64) -> f64 {
    track_offset + track_height * mark_offset_fraction(value) - constants::MARK_HEIGHT / 2.0
}

/// Top-left corner of a mark's label: just past the right end of the mark
/// line, vertically centred on it.
pub(crate) fn mark_label_origin(value: u16, track: Rect) -> Point {
    let centre = track.y0 + track.height() * mark_offset_fraction(value);
    Point::new(
        track.x1 + constants::MARK_OVERHANG + constants::MARK_LABEL_GAP,
        centre - f64::from(constants::MARK_FONT) / 2.0,
    )
}

/// Track rectangle inside a fader of the given size.
///
/// The track is a third of the fader width, centred horizontally, and leaves
/// a square of the fader width as headroom, split evenly above and below.
///
/// Hosts use this to place `children`, e.g. a thumb, over the track.
pub fn track_rect(size: Size) -> Rect {
    let track_width = size.width / 3.0;
    let track_height = (size.height - size.width).max(0.0);
    let margin = (size.width - track_width) / 2.0;
    let offset = (size.height - track_height) / 2.0;
    Rect::new(margin, offset, margin + track_width, offset + track_height)
}

/// Vertical position on `track` of a fader fraction, the inverse of the
/// pointer mapping. Fractions outside 0.0–1.0 are clamped.
pub fn track_y_for_fraction(fraction: f64, track: Rect) -> f64 {
    track.y1 - fraction.clamp(0.0, 1.0) * track.height()
}

/// Height of the meter cover for a level in 0.0–1.0.
///
/// The cover hangs from the top of the track and hides the unlit part.
pub(crate) fn meter_cover_height(level: f64, track_height: f64) -> f64 {
    (1.0 - level.clamp(0.0, 1.0)) * track_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn inversion_at_known_points() {
        assert_eq!(fraction_from_y(0.0), 1.0);
        assert_eq!(fraction_from_y(1.0), 0.0);
        assert!((fraction_from_y(0.5) - 0.5).abs() < EPS);
        assert!((fraction_from_y(0.2) - 0.8).abs() < EPS);
    }

    #[test]
    fn overshoot_is_clamped() {
        assert_eq!(fraction_from_y(-0.3), 1.0);
        assert_eq!(fraction_from_y(1.7), 0.0);
    }

    #[test]
    fn default_mark_offsets() {
        assert!((mark_offset_fraction(895) - 0.1251).abs() < 1e-3);
        assert!((mark_offset_fraction(251) - 0.7546).abs() < 1e-3);
        assert_eq!(mark_offset_fraction(1023), 0.0);
        assert_eq!(mark_offset_fraction(0), 1.0);
    }

    #[test]
    fn mark_top_is_centred_on_value() {
        // 1023 sits on the top edge of the track
        assert!((mark_top(1023, 192.0, 24.0) - 23.0).abs() < EPS);
        assert!((mark_top(0, 192.0, 24.0) - 215.0).abs() < EPS);
    }

    #[test]
    fn label_sits_right_of_mark() {
        let track = Rect::new(16.0, 24.0, 32.0, 216.0);
        let origin = mark_label_origin(1023, track);
        assert!((origin.x - 40.0).abs() < EPS);
        assert!((origin.y - 18.0).abs() < EPS);
    }

    #[test]
    fn nominal_track_rect() {
        let rect = track_rect(Size::new(48.0, 240.0));
        assert!((rect.width() - 16.0).abs() < EPS);
        assert!((rect.height() - 192.0).abs() < EPS);
        assert!((rect.x0 - 16.0).abs() < EPS);
        assert!((rect.y0 - 24.0).abs() < EPS);
    }

    #[test]
    fn label_stays_on_line_for_restyled_fader() {
        for size in [Size::new(48.0, 240.0), Size::new(48.0, 400.0), Size::new(60.0, 180.0)] {
            let track = track_rect(size);
            for value in [895, 780, 673, 480, 251] {
                let label_centre =
                    mark_label_origin(value, track).y + f64::from(constants::MARK_FONT) / 2.0;
                let line_centre =
                    mark_top(value, track.height(), track.y0) + constants::MARK_HEIGHT / 2.0;
                assert!(
                    (label_centre - line_centre).abs() < EPS,
                    "{size:?} v={value}: label {label_centre} line {line_centre}"
                );
            }
        }
    }

    #[test]
    fn thumb_position_inverts_touch_mapping() {
        let track = track_rect(Size::new(48.0, 240.0));
        assert!((track_y_for_fraction(1.0, track) - track.y0).abs() < EPS);
        assert!((track_y_for_fraction(0.0, track) - track.y1).abs() < EPS);
        for fraction in [0.1, 0.25, 0.8] {
            let y = track_y_for_fraction(fraction, track);
            let y_fraction = (y - track.y0) / track.height();
            assert!((fraction_from_y(y_fraction) - fraction).abs() < EPS);
        }
        assert_eq!(track_y_for_fraction(2.0, track), track.y0);
    }

    #[test]
    fn squat_fader_has_empty_track() {
        let rect = track_rect(Size::new(48.0, 30.0));
        assert_eq!(rect.height(), 0.0);
    }

    #[test]
    fn meter_cover() {
        assert_eq!(meter_cover_height(0.0, 100.0), 100.0);
        assert_eq!(meter_cover_height(1.0, 100.0), 0.0);
        assert!((meter_cover_height(0.25, 100.0) - 75.0).abs() < EPS);
        assert_eq!(meter_cover_height(3.0, 100.0), 0.0);
    }

    proptest! {
        #[test]
        fn fraction_always_in_unit_range(y in -1.0e6f64..1.0e6) {
            let f = fraction_from_y(y);
            prop_assert!((0.0..=1.0).contains(&f));
        }

        #[test]
        fn fraction_inverts_inside_track(y in 0.0f64..=1.0) {
            prop_assert!((fraction_from_y(y) - (1.0 - y)).abs() < EPS);
        }
    }
}
