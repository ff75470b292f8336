//! Level meter handle shared between a fader and whatever measures the signal.

use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

/// Write side of a fader's level meter.
///
/// The fader only ever reads the level; the owner of the handle (typically
/// an audio level observer) writes it. Clones refer to the same meter.
/// Must be used from the UI thread.
#[derive(Clone, Copy)]
pub struct MeterHandle {
    level: RwSignal<f64>,
}

impl MeterHandle {
    /// Starts silent, with the whole track covered.
    pub fn new() -> Self {
        Self {
            level: RwSignal::new(0.0),
        }
    }

    /// Set the displayed level, 0.0 (silent) to 1.0 (full scale).
    ///
    /// Out-of-range values are clamped and non-finite ones read as silence.
    pub fn set_level(&self, level: f64) {
        let level = if level.is_finite() {
            level.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if self.level.get_untracked() != level {
            self.level.set(level);
        }
    }

    pub fn level(&self) -> f64 {
        self.level.get_untracked()
    }

    /// Tracked read, for use inside effects.
    pub(crate) fn tracked_level(&self) -> f64 {
        self.level.get()
    }
}

impl std::fmt::Debug for MeterHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeterHandle")
            .field("level", &self.level())
            .finish()
    }
}

impl Default for MeterHandle {
    fn default() -> Self {
        Self::new()
    }
}
