//! Pan and zoom image view.

use leptos::ev;
use leptos::prelude::*;

use super::css;
use crate::models::ZoomState;

/// Image with wheel zoom, drag to pan, and double-click to reset.
///
/// Pixel art stays crisp: the image is rendered without smoothing.
#[component]
pub fn ZoomableImage(src: String, alt: String) -> impl IntoView {
    let zoom = RwSignal::new(ZoomState::default());
    let drag_from = StoredValue::new(None::<(f64, f64)>);

    let on_wheel = move |e: ev::WheelEvent| {
        e.prevent_default();
        zoom.update(|z| z.wheel(e.delta_y()));
    };

    // Left or middle button
    let on_pointer_down = move |e: ev::PointerEvent| {
        if e.button() != 0 && e.button() != 1 {
            return;
        }
        e.prevent_default();
        drag_from.set_value(Some((e.client_x() as f64, e.client_y() as f64)));
    };

    let on_pointer_move = move |e: ev::PointerEvent| {
        let Some((x, y)) = drag_from.get_value() else {
            return;
        };
        let (nx, ny) = (e.client_x() as f64, e.client_y() as f64);
        zoom.update(|z| z.pan(nx - x, ny - y));
        drag_from.set_value(Some((nx, ny)));
    };

    let stop_drag = move |_: ev::PointerEvent| drag_from.set_value(None);

    view! {
        <div
            class=css::imageStage
            title="Scroll to zoom, drag to pan, double-click to reset"
            on:wheel=on_wheel
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=stop_drag
            on:pointerleave=stop_drag
            on:dblclick=move |_| zoom.set(ZoomState::default())
        >
            <img
                class=css::image
                src=src
                alt=alt
                draggable="false"
                style=move || format!("transform: {};", zoom.get().transform())
            />
            <span class=css::zoomLevel>{move || format!("{:.0}%", zoom.get().scale * 100.0)}</span>
        </div>
    }
}
