use super::*;
use crate::{app_runtime::ensure_window_session, host::window_dom_id, model::WindowId};
use glassdesk_app_contract::AppMountContext;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = store_value(window_id.clone());

    let window = Signal::derive(move || {
        runtime
            .state
            .get()
            .windows
            .into_iter()
            .find(|w| w.id == window_id)
    });

    let focus = move |_: web_sys::PointerEvent| {
        let should_focus = window
            .get_untracked()
            .map(|w| !w.is_focused || w.minimized)
            .unwrap_or(false);
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let minimize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: id.get_value(),
        });
    };
    let toggle_maximize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id: id.get_value(),
            viewport: runtime
                .host
                .get_value()
                .desktop_viewport_rect(TASKBAR_HEIGHT_PX),
        });
    };
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: id.get_value(),
        });
    };
    // Control buttons swallow pointerdown so pressing them neither focuses
    // the window nor starts a drag.
    let swallow_pointer = |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    let window_class = move || {
        let mut class = String::from("desktop-window");
        if let Some(win) = window.get() {
            if win.is_focused {
                class.push_str(" focused");
            }
            if win.minimized {
                class.push_str(" minimized");
            }
            if win.maximized {
                class.push_str(" maximized");
            }
        }
        class
    };
    let window_style = move || {
        window
            .get()
            .map(|win| {
                format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                    win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
                )
            })
            .unwrap_or_default()
    };
    let title = move || window.get().map(|win| win.title).unwrap_or_default();

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            <section
                id=window_dom_id(&id.get_value())
                class=window_class
                style=window_style
                tabindex="-1"
                role="dialog"
                aria-label=title
                on:pointerdown=focus
            >
                <header class="titlebar" on:pointerdown=begin_move>
                    <div class="titlebar-title">
                        <span class="titlebar-dot dot-red" aria-hidden="true"></span>
                        <span class="titlebar-dot dot-yellow" aria-hidden="true"></span>
                        <span class="titlebar-dot dot-green" aria-hidden="true"></span>
                        <span class="titlebar-text">{title}</span>
                    </div>
                    <div class="titlebar-controls">
                        <button
                            aria-label="Minimize window"
                            on:pointerdown=swallow_pointer
                            on:click=minimize
                        >
                            "–"
                        </button>
                        <button
                            aria-label=move || {
                                if window.get().map(|w| w.maximized).unwrap_or(false) {
                                    "Restore window"
                                } else {
                                    "Maximize window"
                                }
                            }
                            on:pointerdown=swallow_pointer
                            on:click=toggle_maximize
                        >
                            "□"
                        </button>
                        <button
                            class="close"
                            aria-label="Close window"
                            on:pointerdown=swallow_pointer
                            on:click=close
                        >
                            "×"
                        </button>
                    </div>
                </header>
                <div class="window-body">
                    <WindowBody window_id=id.get_value() />
                </div>
            </section>
        </Show>
    }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let session = ensure_window_session(runtime.app_runtime, &window_id);
    let services = build_app_services(runtime);

    // Content is mounted once and rendered as-is; the window manager never
    // looks inside it.
    let contents = runtime
        .state
        .get_untracked()
        .windows
        .iter()
        .find(|w| w.id == window_id)
        .map(|w| {
            w.content.mount(AppMountContext {
                window_id: w.id.as_str().to_string(),
                launch_params: w.launch_params.clone(),
                lifecycle: session.lifecycle.read_only(),
                services,
            })
        })
        .unwrap_or_else(|| ().into_view());

    view! { <div class="window-body-content">{contents}</div> }
}
