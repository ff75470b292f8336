//! Vertical mixer fader.
//!
//! Paints a green→yellow→red track with calibration marks and an optional
//! meter cover, and turns pointer drags into 0.0–1.0 fractions (bottom to
//! top) reported through [`FaderConfig`] callbacks.

use floem::kurbo::{Rect, Shape, Size};
use floem::peniko::Gradient;

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::{container, stack_from_iter};
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::gesture::{FaderGesture, FaderHandlers, FaderInput};
use crate::mark::{default_marks, CalibrationMark};
use crate::math;
use crate::meter::MeterHandle;
use crate::track::{MeasureTrack, TrackLayout};

/// Per-instance fader options. Everything is optional.
pub struct FaderConfig {
    handlers: FaderHandlers,
    meter: Option<MeterHandle>,
    marks: Vec<CalibrationMark>,
}

impl Default for FaderConfig {
    fn default() -> Self {
        Self {
            handlers: FaderHandlers::default(),
            meter: None,
            marks: default_marks(),
        }
    }
}

impl FaderConfig {
    /// Called with the new fraction on press and on every move while dragging.
    pub fn on_touch(mut self, f: impl Fn(f64) + 'static) -> Self {
        self.handlers = self.handlers.on_touch(f);
        self
    }

    /// Called once when a drag ends.
    pub fn on_up(mut self, f: impl Fn() + 'static) -> Self {
        self.handlers = self.handlers.on_up(f);
        self
    }

    /// Show a level meter driven through `meter`.
    pub fn meter(mut self, meter: MeterHandle) -> Self {
        self.meter = Some(meter);
        self
    }

    /// Replace the default calibration marks.
    pub fn marks(mut self, marks: impl IntoIterator<Item = CalibrationMark>) -> Self {
        self.marks = marks.into_iter().collect();
        self
    }
}

enum FaderUpdate {
    MeterLevel(f64),
}

pub struct FaderTrack {
    id: ViewId,
    gesture: FaderGesture,
    track: TrackLayout,
    size: Size,
    /// `None` when the fader has no meter.
    meter_level: Option<f64>,
    marks: Vec<CalibrationMark>,
    /// Measured track, shared with the mark labels.
    track_bounds: RwSignal<Rect>,
}

fn fader_track(
    handlers: FaderHandlers,
    meter: Option<MeterHandle>,
    marks: Vec<CalibrationMark>,
    track_bounds: RwSignal<Rect>,
) -> FaderTrack {
    let id = ViewId::new();

    if let Some(meter) = meter {
        create_effect(move |_| {
            let level = meter.tracked_level();
            id.update_state(FaderUpdate::MeterLevel(level));
        });
    }

    FaderTrack {
        id,
        gesture: FaderGesture::new(handlers),
        track: TrackLayout::default(),
        size: Size::ZERO,
        meter_level: meter.map(|m| m.level()),
        marks,
        track_bounds,
    }
}

/// Creates a fader.
///
/// `children` is drawn above the track, e.g. a thumb, and never receives
/// pointer events: every press, drag, and release inside the fader drives
/// the fader itself. Pass `empty()` for a bare fader.
pub fn fader(config: FaderConfig, children: impl IntoView + 'static) -> impl IntoView {
    let FaderConfig {
        handlers,
        meter,
        marks,
    } = config;

    let nominal = math::track_rect(Size::new(constants::FADER_WIDTH, constants::FADER_HEIGHT));
    let track_bounds = RwSignal::new(nominal);
    let labels = stack_from_iter(
        marks
            .iter()
            .map(|mark| mark_label(mark, track_bounds))
            .collect::<Vec<_>>(),
    );

    stack((
        fader_track(handlers, meter, marks, track_bounds)
            .style(|s| s.size_full().cursor(floem::style::CursorStyle::Pointer)),
        labels
            .style(|s| s.absolute().size_full())
            .pointer_events(|| false),
        container(children)
            .style(|s| s.absolute().size_full())
            .pointer_events(|| false),
    ))
    .style(|s| {
        s.width(constants::FADER_WIDTH)
            .height(constants::FADER_HEIGHT)
            .margin(constants::FADER_MARGIN)
            .flex_shrink(0.0)
    })
}

/// Label follows the measured track so it stays on its line when the fader
/// is restyled.
fn mark_label(mark: &CalibrationMark, track_bounds: RwSignal<Rect>) -> impl IntoView {
    let text = mark.label().to_string();
    let value = mark.value();
    label(move || text.clone()).style(move |s| {
        let origin = math::mark_label_origin(value, track_bounds.get());
        s.absolute()
            .inset_left(origin.x)
            .inset_top(origin.y)
            .font_size(constants::MARK_FONT)
            .color(constants::MARK_LABEL_COLOR)
    })
}

impl View for FaderTrack {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<FaderUpdate>() {
            match *update {
                FaderUpdate::MeterLevel(level) => self.meter_level = Some(level),
            }
            self.id.request_paint();
        }
    }

    fn event_before_children(
        &mut self,
        cx: &mut EventCx,
        event: &Event,
    ) -> EventPropagation {
        if let Event::PointerDown(_) = event {
            cx.update_active(self.id());
        }
        match FaderInput::from_event(event) {
            Some(input) => self.gesture.handle(input, &self.track),
            None => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = Size::new(layout.size.width as f64, layout.size.height as f64);
        self.track.set_fader_size(self.size);
        if let Some(bounds) = self.track.track_bounds() {
            if self.track_bounds.get_untracked() != bounds {
                self.track_bounds.set(bounds);
            }
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let Some(track) = self.track.track_bounds() else {
            return;
        };
        if track.width() == 0.0 || track.height() == 0.0 {
            return;
        }

        // Low level at the bottom, clipping at the top
        let gradient = Gradient::new_linear((track.x0, track.y1), (track.x0, track.y0))
            .with_stops([constants::TRACK_LOW, constants::TRACK_MID, constants::TRACK_HIGH]);
        // vello's Rect fast-path only takes solid colors
        let path = track.to_path(0.1);
        cx.fill(&path, &gradient, 0.0);

        if let Some(level) = self.meter_level {
            let cover = math::meter_cover_height(level, track.height());
            if cover > 0.0 {
                let cover_rect = Rect::new(track.x0, track.y0, track.x1, track.y0 + cover);
                cx.fill(&cover_rect, constants::METER_COVER, 0.0);
            }
        }

        for mark in &self.marks {
            let top = math::mark_top(mark.value(), track.height(), track.y0);
            let line = Rect::new(
                track.x0 - constants::MARK_OVERHANG,
                top,
                track.x1 + constants::MARK_OVERHANG,
                top + constants::MARK_HEIGHT,
            );
            cx.fill(&line, constants::MARK_COLOR, 0.0);
        }
    }
}
