//! Reactive bindings from browser signals to component state.
//!
//! Each hook subscribes inside an `Effect`, so nothing is registered during
//! server-side rendering, and unsubscribes in the effect's cleanup.
//!
//! A render that no client code will follow provides [`SettledMotion`]; the
//! entrance hooks then start in their final state, since nothing would ever
//! reveal the blocks.

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use tracing::warn;

use crate::motion::scroll_progress;
use crate::observe;

/// Context marker: render every entrance in its final pose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettledMotion;

/// Mark the current render as static. Call before rendering the page.
pub fn provide_settled_motion() {
    provide_context(SettledMotion);
}

fn motion_settled() -> bool {
    use_context::<SettledMotion>().is_some()
}

/// Normalized document scroll position, updated on scroll and resize.
pub fn use_scroll_progress() -> ReadSignal<f64> {
    let (progress, set_progress) = signal(0.0);

    Effect::new(move |_| {
        let measure = move || {
            if let Some(value) = measure_scroll_progress() {
                set_progress.set(value);
            }
        };
        measure();

        let on_scroll = window_event_listener(ev::scroll, move |_| measure());
        let on_resize = window_event_listener(ev::resize, move |_| measure());
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    });

    progress
}

fn measure_scroll_progress() -> Option<f64> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let scroll_top = window.scroll_y().ok()?;
    Some(scroll_progress(
        scroll_top,
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    ))
}

/// Becomes `true` once `target` has been visible, and stays `true`.
///
/// Without IntersectionObserver the block is revealed immediately.
pub fn use_reveal(target: NodeRef<Div>, threshold: f64) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(motion_settled());

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        match observe::on_first_visible(&element, threshold, move || set_revealed.set(true)) {
            Ok(id) => on_cleanup(move || observe::unsubscribe(id)),
            Err(err) => {
                warn!(?err, "visibility observer unavailable, revealing immediately");
                set_revealed.set(true);
            }
        }
    });

    revealed
}

/// Becomes `true` on the first animation frame after mount, so entrance
/// transitions start from the initial pose the server rendered.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(motion_settled());
    Effect::new(move |_| {
        request_animation_frame(move || set_mounted.set(true));
    });
    mounted
}
