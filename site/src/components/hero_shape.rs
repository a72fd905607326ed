//! The rotating, distorted sphere behind the hero copy.
//!
//! Rendering starts after mount: the effect creates a [`GlRenderer`] on the
//! canvas and drives it from an animation-frame subscription that is released
//! when the component unmounts. Without WebGL the canvas stays empty.

use leptos::html::Canvas;
use leptos::prelude::*;
use tracing::{debug, warn};

use crate::config::SceneConfig;
use crate::observe;
use crate::scene::{FrameClock, FrameUniforms, GlRenderer, OrbitCamera, OrbitControls};

#[component]
pub fn HeroShape(scene: SceneConfig) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();
    let controls = StoredValue::new(OrbitControls::new(OrbitCamera::from_position(
        scene.camera_position,
    )));
    let rotate_speed = scene.rotate_speed;

    // Drag height is measured against the canvas, like the camera's viewport.
    let canvas_height = move || {
        canvas_ref
            .get()
            .map(|canvas| canvas.client_height() as f32)
            .unwrap_or(1.0)
    };

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let renderer = match GlRenderer::new(canvas, &scene) {
            Ok(renderer) => renderer,
            Err(err) => {
                warn!(%err, "hero shape disabled");
                return;
            }
        };

        let frame_scene = scene.clone();
        let mut clock = FrameClock::default();
        let started = observe::on_animation_frame(move |timestamp| {
            let Some(controls) = controls.try_get_value() else {
                return;
            };
            let dpr = web_sys::window()
                .map(|window| window.device_pixel_ratio())
                .unwrap_or(1.0);
            let aspect = renderer.fit_to_display(dpr);
            let elapsed = clock.elapsed_secs(timestamp);
            renderer.draw(&FrameUniforms::compute(
                elapsed,
                aspect,
                &controls.camera,
                &frame_scene,
            ));
        });

        match started {
            Ok(id) => {
                debug!(?id, "hero shape animating");
                on_cleanup(move || observe::unsubscribe(id));
            }
            Err(err) => warn!(?err, "hero shape frame loop unavailable"),
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="hero-canvas"
            aria-hidden="true"
            on:pointerdown=move |ev| {
                controls.update_value(|c| c.press(ev.client_x() as f32, ev.client_y() as f32));
            }
            on:pointermove=move |ev| {
                let height = canvas_height();
                controls.update_value(|c| {
                    c.drag_to(ev.client_x() as f32, ev.client_y() as f32, height, rotate_speed)
                });
            }
            on:pointerup=move |_| controls.update_value(|c| c.release())
            on:pointercancel=move |_| controls.update_value(|c| c.release())
            on:pointerleave=move |_| controls.update_value(|c| c.release())
        ></canvas>
    }
}
