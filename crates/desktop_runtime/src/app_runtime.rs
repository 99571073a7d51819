//! Per-window app session signals owned by the desktop shell.

use std::collections::{HashMap, HashSet};

use glassdesk_app_contract::AppLifecycleEvent;
use leptos::*;

use crate::model::{WindowId, WindowRecord};

#[derive(Clone, Copy)]
/// Reactive per-window app session signals.
pub struct WindowAppSession {
    /// Latest lifecycle event delivered to the hosted app.
    pub lifecycle: RwSignal<AppLifecycleEvent>,
}

#[derive(Default)]
/// Runtime-owned app session state, keyed by window id.
pub struct AppRuntimeState {
    sessions: HashMap<WindowId, WindowAppSession>,
}

impl AppRuntimeState {
    fn ensure_session(&mut self, window_id: &WindowId) -> WindowAppSession {
        if let Some(session) = self.sessions.get(window_id).copied() {
            return session;
        }
        let session = WindowAppSession {
            lifecycle: create_rw_signal(AppLifecycleEvent::Mounted),
        };
        self.sessions.insert(window_id.clone(), session);
        session
    }
}

/// Ensures a session exists for `window_id` and returns it.
pub fn ensure_window_session(
    app_runtime: RwSignal<AppRuntimeState>,
    window_id: &WindowId,
) -> WindowAppSession {
    let mut session = None;
    app_runtime.update(|state| session = Some(state.ensure_session(window_id)));
    session.expect("session created by update")
}

/// Delivers a lifecycle event to the app hosted by `window_id`.
pub fn dispatch_lifecycle(
    app_runtime: RwSignal<AppRuntimeState>,
    window_id: &WindowId,
    event: AppLifecycleEvent,
) {
    app_runtime.update(|state| state.ensure_session(window_id).lifecycle.set(event));
}

/// Drops sessions whose windows no longer exist.
pub fn sync_runtime_sessions(app_runtime: RwSignal<AppRuntimeState>, windows: &[WindowRecord]) {
    app_runtime.update(|state| {
        let live: HashSet<&WindowId> = windows.iter().map(|w| &w.id).collect();
        state.sessions.retain(|id, _| live.contains(id));
    });
}
