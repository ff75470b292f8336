//! Standalone demo: a fader whose meter follows its own position.

use floem::prelude::*;
use floem::reactive::{SignalGet, SignalUpdate};
use floem::window::WindowConfig;
use floem_fader::{fader, FaderConfig, MeterHandle};

fn main() {
    env_logger::init();

    let gain = RwSignal::new(0.0_f64);
    let meter = MeterHandle::new();

    let config = FaderConfig::default()
        .on_touch(move |fraction| {
            gain.set(fraction);
            meter.set_level(fraction * 0.9);
        })
        .on_up(move || log::info!("fader released at {:.3}", gain.get_untracked()))
        .meter(meter);

    floem::Application::new()
        .window(
            move |_| {
                h_stack((
                    fader(config, empty()),
                    label(move || format!("{:.2}", gain.get())),
                ))
                .style(|s| s.items_center().gap(16.0).padding(16.0))
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((200.0, 300.0))
                    .title("floem-fader"),
            ),
        )
        .run();
}
