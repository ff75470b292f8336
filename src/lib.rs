//! # floem-fader
//!
//! A vertical mixer fader widget for [Floem](https://github.com/lapce/floem).
//!
//! Renders a gradient track with calibration marks and an optional level
//! meter, and reports drags as a 0.0 (bottom) to 1.0 (top) fraction.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem::reactive::SignalUpdate;
//! use floem_fader::{fader, FaderConfig, MeterHandle};
//!
//! let gain = RwSignal::new(0.75_f64);
//! let meter = MeterHandle::new();
//! let config = FaderConfig::default()
//!     .on_touch(move |fraction| gain.set(fraction))
//!     .meter(meter);
//! // Use `fader(config, empty())` in your Floem view tree and call
//! // `meter.set_level(..)` from your level observer.
//! ```

mod constants;
mod fader;
mod gesture;
mod mark;
mod math;
mod meter;
mod track;

pub use constants::{
    FADER_HEIGHT, FADER_WIDTH, TRACK_HEIGHT, TRACK_MARGIN, TRACK_OFFSET, TRACK_WIDTH,
};
pub use fader::{fader, FaderConfig};
pub use gesture::{DragState, FaderGesture, FaderHandlers, FaderInput};
pub use mark::{default_marks, CalibrationMark, MarkError, DEFAULT_MARKS, MARK_VALUE_MAX};
pub use math::{track_rect, track_y_for_fraction};
pub use meter::MeterHandle;
pub use track::{MeasureTrack, TouchOffset};
