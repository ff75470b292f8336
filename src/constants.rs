//! Sizing, color, and styling constants for the fader.

use floem::peniko::Color;

/// Layout grid unit in pixels
pub const BASELINE: f64 = 4.0;

/// Overall fader width
pub const FADER_WIDTH: f64 = BASELINE * 12.0;

/// Overall fader height
pub const FADER_HEIGHT: f64 = BASELINE * 60.0;

/// Track width of a fader at the default size
pub const TRACK_WIDTH: f64 = FADER_WIDTH / 3.0;

/// Track height of a fader at the default size
pub const TRACK_HEIGHT: f64 = FADER_HEIGHT - FADER_WIDTH;

/// Gap between the fader's left edge and the track
pub const TRACK_MARGIN: f64 = (FADER_WIDTH - TRACK_WIDTH) / 2.0;

/// Gap between the fader's top edge and the track
pub const TRACK_OFFSET: f64 = (FADER_HEIGHT - TRACK_HEIGHT) / 2.0;

/// Margin around the whole fader
pub const FADER_MARGIN: f32 = (BASELINE * 1.5) as f32;

/// Upper bound of the legacy amplitude scale used by calibration marks
pub const LEGACY_SCALE_MAX: f64 = 1023.0;

/// Mark line thickness
pub const MARK_HEIGHT: f64 = 2.0;

/// How far a mark line reaches past each side of the track
pub const MARK_OVERHANG: f64 = 4.0;

/// Gap between a mark line and its label
pub const MARK_LABEL_GAP: f64 = 4.0;

/// Mark label font size
pub const MARK_FONT: f32 = 12.0;

/// Track gradient stops, bottom to top
pub const TRACK_LOW: Color = Color::rgb8(0, 255, 0);
pub const TRACK_MID: Color = Color::rgb8(255, 255, 0);
pub const TRACK_HIGH: Color = Color::rgb8(255, 0, 0);

/// Meter cover over the unlit part of the track
pub const METER_COVER: Color = Color::rgb8(72, 72, 72);

/// Mark line color
pub const MARK_COLOR: Color = Color::rgb8(110, 110, 110);

pub const MARK_LABEL_COLOR: Color = Color::rgb8(150, 150, 150);
