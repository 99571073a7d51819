//! Host-side helpers for executing reducer effects and querying the browser
//! viewport.
//!
//! Effect execution lives behind this typed boundary so the reducer stays a
//! pure state transition and the components never reach into browser APIs for
//! shell-level concerns.

use leptos::logging;

use crate::{
    app_runtime,
    model::{WindowId, WindowRect},
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntimeContext,
};

/// DOM id of a window's root element; the focus effect targets it.
pub fn window_dom_id(window_id: &WindowId) -> String {
    format!("desktop-window-{window_id}")
}

#[derive(Debug, Clone, Copy, Default)]
/// Host bundle for desktop runtime side effects and environment queries.
pub struct DesktopHostContext;

impl DesktopHostContext {
    /// Returns the desktop viewport rect available to the window manager:
    /// the browser inner size minus the taskbar strip.
    pub fn desktop_viewport_rect(&self, taskbar_height_px: i32) -> WindowRect {
        let (w, h) = browser_inner_size().unwrap_or((1280, 800));
        WindowRect {
            x: 0,
            y: 0,
            w,
            h: (h - taskbar_height_px).max(0),
        }
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(window_id) => {
                if let Err(err) = glassdesk_host::focus_element_by_id(&window_dom_id(&window_id)) {
                    logging::warn!("focus window input failed: {err}");
                }
            }
            RuntimeEffect::DispatchLifecycle { window_id, event } => {
                app_runtime::dispatch_lifecycle(runtime.app_runtime, &window_id, event);
            }
        }
    }
}

fn browser_inner_size() -> Option<(i32, i32)> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let w = window.inner_width().ok()?.as_f64()? as i32;
        let h = window.inner_height().ok()?.as_f64()? as i32;
        Some((w, h))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_reserves_the_taskbar_strip() {
        let viewport = DesktopHostContext.desktop_viewport_rect(60);
        assert_eq!(viewport.x, 0);
        assert_eq!(viewport.y, 0);
        assert_eq!(viewport.h, 800 - 60);
    }
}
