//! Drag gesture: turns pointer positions into fader fractions.
//!
//! Kept apart from the view so the idle/dragging rules can be driven
//! directly from tests with any [`MeasureTrack`].

use floem::event::{Event, EventPropagation};
use floem::kurbo::Point;

use crate::math;
use crate::track::MeasureTrack;

type TouchCallback = Box<dyn Fn(f64)>;
type UpCallback = Box<dyn Fn()>;

/// Callbacks a fader reports to. Either may be absent.
#[derive(Default)]
pub struct FaderHandlers {
    on_touch: Option<TouchCallback>,
    on_up: Option<UpCallback>,
}

impl FaderHandlers {
    pub fn on_touch(mut self, f: impl Fn(f64) + 'static) -> Self {
        self.on_touch = Some(Box::new(f));
        self
    }

    pub fn on_up(mut self, f: impl Fn() + 'static) -> Self {
        self.on_up = Some(Box::new(f));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// The part of a pointer event a fader cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaderInput {
    Press(Point),
    Drag(Point),
    /// Pointer up, or focus lost mid-drag.
    Release,
}

impl FaderInput {
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::PointerDown(e) => Some(Self::Press(e.pos)),
            Event::PointerMove(e) => Some(Self::Drag(e.pos)),
            Event::PointerUp(_) | Event::FocusLost => Some(Self::Release),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct FaderGesture {
    state: DragState,
    handlers: FaderHandlers,
}

impl FaderGesture {
    pub fn new(handlers: FaderHandlers) -> Self {
        Self {
            state: DragState::Idle,
            handlers,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Start a drag at `pos` and report its fraction.
    ///
    /// The drag starts even when the track cannot be measured, so the
    /// matching release still reaches `on_up`.
    pub fn press(&mut self, pos: Point, track: &impl MeasureTrack) -> Option<f64> {
        if self.state == DragState::Idle {
            log::debug!("fader drag started");
        }
        self.state = DragState::Dragging;
        self.touch(pos, track)
    }

    /// Continue a drag. Ignored while idle.
    pub fn drag(&mut self, pos: Point, track: &impl MeasureTrack) -> Option<f64> {
        match self.state {
            DragState::Dragging => self.touch(pos, track),
            DragState::Idle => None,
        }
    }

    /// End the drag, firing `on_up`. Returns whether a drag was active.
    pub fn release(&mut self) -> bool {
        if self.state == DragState::Idle {
            return false;
        }
        self.state = DragState::Idle;
        log::debug!("fader drag released");
        if let Some(cb) = &self.handlers.on_up {
            cb();
        }
        true
    }

    /// Feed one input through the state machine.
    ///
    /// Presses and drags in progress are consumed; everything else keeps
    /// propagating.
    pub fn handle(&mut self, input: FaderInput, track: &impl MeasureTrack) -> EventPropagation {
        match input {
            FaderInput::Press(pos) => {
                self.press(pos, track);
                EventPropagation::Stop
            }
            FaderInput::Drag(pos) if self.is_dragging() => {
                self.drag(pos, track);
                EventPropagation::Stop
            }
            FaderInput::Drag(_) => EventPropagation::Continue,
            FaderInput::Release => {
                self.release();
                EventPropagation::Continue
            }
        }
    }

    fn touch(&self, pos: Point, track: &impl MeasureTrack) -> Option<f64> {
        let Some(offset) = track.touch_offset(pos) else {
            log::trace!("dropping fader touch at {pos:?}: track not measurable");
            return None;
        };
        let fraction = math::fraction_from_y(offset.y_fraction);
        if let Some(cb) = &self.handlers.on_touch {
            cb(fraction);
        }
        Some(fraction)
    }
}
