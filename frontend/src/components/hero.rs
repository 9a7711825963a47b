//! Hero banner with the animated dot field.
//!
//! The dot field starts on the animation frame after mount, follows the
//! window `resize` event and the banner's pointer events, and is disposed
//! on unmount. If the canvas cannot be set up the banner stays static.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement, MouseEvent};

use crate::dots::{DotField, DotFieldConfig, FieldEvent, WebCanvasHost};
use crate::AppResult;

enum FieldState {
    /// Mounted, waiting for the first frame
    Pending,
    Running {
        field: DotField,
        host: WebCanvasHost,
    },
    /// Unmounted or failed to start; events are ignored
    Disposed,
}

type SharedField = Rc<RefCell<FieldState>>;

/// Run `f` on the field if it is running.
fn with_running(state: &SharedField, f: impl FnOnce(&mut DotField, &mut WebCanvasHost)) {
    if let FieldState::Running { field, host } = &mut *state.borrow_mut() {
        f(field, host);
    }
}

/// Defer `f` to the next animation frame, once layout is available.
fn next_frame(f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    let scheduled = web_sys::window()
        .map(|window| {
            window
                .request_animation_frame(closure.as_ref().unchecked_ref())
                .is_ok()
        })
        .unwrap_or(false);

    if scheduled {
        closure.forget();
    } else {
        log::warn!("requestAnimationFrame unavailable, dot field not started");
    }
}

fn attach_field(
    container: HtmlElement,
    canvas: HtmlCanvasElement,
) -> AppResult<(DotField, WebCanvasHost)> {
    let mut host = WebCanvasHost::attach(container, canvas)?;
    let mut field = DotField::with_entropy(DotFieldConfig::default())?;
    host.fit_to_container();
    field.initialize(&mut host);
    Ok((field, host))
}

fn start_field(state: &SharedField, container: HtmlElement, canvas: HtmlCanvasElement) {
    let mut slot = state.borrow_mut();
    if !matches!(*slot, FieldState::Pending) {
        return;
    }

    *slot = match attach_field(container, canvas) {
        Ok((field, host)) => FieldState::Running { field, host },
        Err(e) => {
            log::warn!("Dot field disabled: {}", e);
            FieldState::Disposed
        }
    };
}

#[component]
pub fn Hero() -> impl IntoView {
    let banner_ref = create_node_ref::<html::Div>();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let state: SharedField = Rc::new(RefCell::new(FieldState::Pending));

    // Start once both nodes exist
    create_effect({
        let state = state.clone();
        move |_| {
            let (Some(banner), Some(canvas)) = (banner_ref.get(), canvas_ref.get()) else {
                return;
            };
            let container: HtmlElement = (*banner).clone().into();
            let canvas: HtmlCanvasElement = (*canvas).clone();
            let state = state.clone();
            next_frame(move || start_field(&state, container, canvas));
        }
    });

    let resize_handle = window_event_listener(ev::resize, {
        let state = state.clone();
        move |_| {
            with_running(&state, |field, host| {
                host.fit_to_container();
                field.handle(host, FieldEvent::Resize);
            });
        }
    });

    on_cleanup({
        let state = state.clone();
        move || {
            resize_handle.remove();
            *state.borrow_mut() = FieldState::Disposed;
            log::debug!("Dot field disposed");
        }
    });

    let on_pointer_move = {
        let state = state.clone();
        move |ev: MouseEvent| {
            with_running(&state, |field, host| {
                let pointer = host.pointer_position(&ev);
                field.handle(host, FieldEvent::PointerMove(pointer));
            });
        }
    };

    let on_pointer_leave = move |_: MouseEvent| {
        with_running(&state, |field, host| field.handle(host, FieldEvent::PointerLeave));
    };

    view! {
        <div
            class="banner"
            node_ref=banner_ref
            on:mousemove=on_pointer_move
            on:mouseleave=on_pointer_leave
        >
            <div>
                <h1 class="banner-heading">"WE BUILD DIGITAL EXPERIENCES"</h1>
            </div>
            <h4>
                "Suspendisse ut magna porttitor, sollicitudin ligula at, molestie dolor. "
                "Vivamus a ligula ut velit placerat egestas at id leo."
                <br/>
                "Nulla ac volutpat nunc. Nulla facilisi. "
                "Pellentesque tempus tellus ut magna porttitor scelerisque."
            </h4>
            <button
                class="banner-cta"
                on:click=move |_| log::info!("Subscribe clicked")
            >
                "Subscribe Now ↗"
            </button>
            <canvas id="dotsCanvas" class="dots-canvas" node_ref=canvas_ref></canvas>
        </div>
    }
}
