use log::{debug, warn};
use vmg_configurator::render::{
    render_configuration, render_performance, ConfigurationReadout, DocumentSink,
    PerformanceReadout,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Mirror the readouts into display targets of the host page (elements
/// outside the Yew mount point, looked up by id) after every change.
/// Targets the page does not contain are skipped.
#[hook]
pub fn use_host_mirror(performance: PerformanceReadout, configuration: ConfigurationReadout) {
    use_effect_with(performance, |readout| {
        let written = render_performance(readout, &mut DocumentSink);
        debug!("Mirrored performance readout into {} host targets", written);
        || ()
    });

    use_effect_with(configuration, |readout| {
        let written = render_configuration(readout, &mut DocumentSink);
        debug!("Mirrored configuration readout into {} host targets", written);
        || ()
    });
}

/// Tracks whether the window has been scrolled further than `threshold_px`.
#[hook]
pub fn use_scrolled_past(threshold_px: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with(threshold_px, move |&threshold_px| {
            let window = gloo_utils::window();
            let listener = {
                let window = window.clone();
                Closure::<dyn Fn()>::new(move || {
                    let past = window.scroll_y().map(|y| y > threshold_px).unwrap_or(false);
                    scrolled.set(past);
                })
            };

            if let Err(e) = window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            {
                warn!("Could not listen for scroll events: {:?}", e);
            }

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    listener.as_ref().unchecked_ref(),
                );
            }
        });
    }

    *scrolled
}

/// Mouse-enter / mouse-leave callbacks that lock page scrolling while the
/// pointer is over an element. The lock is released on unmount.
#[hook]
pub fn use_scroll_lock() -> (Callback<MouseEvent>, Callback<MouseEvent>) {
    use_effect_with((), |_| move || set_page_scroll_locked(false));

    let lock = use_callback((), |_: MouseEvent, _| set_page_scroll_locked(true));
    let unlock = use_callback((), |_: MouseEvent, _| set_page_scroll_locked(false));
    (lock, unlock)
}

fn set_page_scroll_locked(locked: bool) {
    let Some(body) = gloo_utils::document().body() else {
        return;
    };
    let overflow = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", overflow) {
        warn!("Could not set body overflow: {:?}", e);
    }
}
