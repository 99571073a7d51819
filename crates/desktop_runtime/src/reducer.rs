//! Reducer actions, side-effect intents, and transition logic for the desktop shell.

use glassdesk_app_contract::AppLifecycleEvent;

use crate::{
    model::{
        cascade_rect, DesktopState, DragSession, GrabOffset, InteractionState, OpenWindowRequest,
        PointerPosition, WindowId, WindowRecord, WindowRect,
    },
    wallpaper,
    window_manager::{focus_window, normalize_window_stack},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, replacing any existing window with the same id.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window into the taskbar.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Bring a minimized window back into the window layer.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Toggle a window between its stored geometry and the full viewport.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
        /// Viewport rect used as the maximized geometry.
        viewport: WindowRect,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update the in-progress drag with the current pointer position.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active drag. The release location is irrelevant; a release
    /// anywhere (including outside the viewport) terminates the session.
    EndMove,
    /// Select a built-in wallpaper and stop automatic rotation.
    SetWallpaper {
        /// Catalog index to display.
        index: usize,
    },
    /// Enable or disable automatic wallpaper rotation.
    SetWallpaperAutoRotate {
        /// Whether rotation should be active.
        enabled: bool,
    },
    /// Advance to the next wallpaper when automatic rotation is on.
    AdvanceWallpaper,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the window's root element.
    FocusWindowInput(WindowId),
    /// Deliver a lifecycle event to the app hosted by the window.
    DispatchLifecycle {
        /// Target window.
        window_id: WindowId,
        /// Lifecycle event to deliver.
        event: AppLifecycleEvent,
    },
}

/// Applies a [`DesktopAction`] to the desktop state and collects side effects.
///
/// This is the authoritative transition engine for window management: every
/// mutation of the window collection and of the drag session flows through
/// here, on a single logical thread. Actions referencing an unknown window id
/// are harmless no-ops, so stray UI events (a double-clicked close button, a
/// late pointer move) need no special handling at call sites.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            // The cascade slot is the window count at call time; a window
            // about to be replaced still counts, matching the behavior the
            // shell has always had.
            let rect = cascade_rect(state.windows.len());
            state.windows.retain(|w| w.id != req.id);
            state.windows.push(WindowRecord {
                id: req.id.clone(),
                title: req.title,
                content: req.content,
                launch_params: req.launch_params,
                rect,
                restore_rect: None,
                z_index: 0,
                is_focused: false,
                minimized: false,
                maximized: false,
            });
            focus_window(state, &req.id);
            state.start_menu_open = false;
            effects.push(RuntimeEffect::FocusWindowInput(req.id));
        }
        DesktopAction::CloseWindow { window_id } => {
            let before = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() != before {
                if interaction
                    .dragging
                    .as_ref()
                    .is_some_and(|session| session.window_id == window_id)
                {
                    interaction.dragging = None;
                }
                normalize_window_stack(state);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            let was_focused_top = state
                .window(&window_id)
                .is_some_and(|w| w.is_focused && !w.minimized);
            if focus_window(state, &window_id) && !was_focused_top {
                state.start_menu_open = false;
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                if !window.minimized {
                    window.minimized = true;
                    window.is_focused = false;
                    normalize_window_stack(state);
                    effects.push(RuntimeEffect::DispatchLifecycle {
                        window_id,
                        event: AppLifecycleEvent::Minimized,
                    });
                }
            }
        }
        DesktopAction::RestoreWindow { window_id } => {
            let was_minimized = state
                .window(&window_id)
                .is_some_and(|w| w.minimized);
            if was_minimized {
                focus_window(state, &window_id);
                effects.push(RuntimeEffect::DispatchLifecycle {
                    window_id: window_id.clone(),
                    event: AppLifecycleEvent::Restored,
                });
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::ToggleMaximize {
            window_id,
            viewport,
        } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                if window.maximized {
                    // The cached geometry was written on the way in and never
                    // touched since; restoring consumes it.
                    if let Some(restore) = window.restore_rect.take() {
                        window.rect = restore;
                    }
                    window.maximized = false;
                } else {
                    window.restore_rect = Some(window.rect);
                    window.rect = viewport;
                    window.maximized = true;
                }
                focus_window(state, &window_id);
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            // One drag at a time: a press while a session is live is ignored,
            // even in multi-pointer environments.
            let rect = state
                .window(&window_id)
                .filter(|w| !w.minimized)
                .map(|w| w.rect);
            if interaction.dragging.is_none() {
                if let Some(rect) = rect {
                    focus_window(state, &window_id);
                    interaction.dragging = Some(DragSession {
                        window_id,
                        grab_offset: GrabOffset {
                            x: pointer.x - rect.x,
                            y: pointer.y - rect.y,
                        },
                    });
                }
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.clone() {
                if let Some(window) = find_window_mut(state, &session.window_id) {
                    if !window.maximized {
                        window.rect = window.rect.moved_to(
                            pointer.x - session.grab_offset.x,
                            pointer.y - session.grab_offset.y,
                        );
                    }
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::SetWallpaper { index } => {
            state.wallpaper.index = index % wallpaper::catalog_len();
            state.wallpaper.auto_rotate = false;
        }
        DesktopAction::SetWallpaperAutoRotate { enabled } => {
            state.wallpaper.auto_rotate = enabled;
        }
        DesktopAction::AdvanceWallpaper => {
            if state.wallpaper.auto_rotate {
                state.wallpaper.index = (state.wallpaper.index + 1) % wallpaper::catalog_len();
            }
        }
    }

    effects
}

fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &WindowId,
) -> Option<&'a mut WindowRecord> {
    state.windows.iter_mut().find(|w| &w.id == window_id)
}

#[cfg(test)]
mod tests {
    use glassdesk_app_contract::{AppModule, AppMountContext};
    use leptos::{IntoView, View};
    use pretty_assertions::assert_eq;

    use super::*;

    fn blank_content(_: AppMountContext) -> View {
        ().into_view()
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, id: &str) -> WindowId {
        let request = OpenWindowRequest::new(id, id.to_string(), AppModule::new(blank_content));
        reduce_desktop(state, interaction, DesktopAction::OpenWindow(request));
        WindowId::new(id)
    }

    fn rect_of(state: &DesktopState, id: &WindowId) -> WindowRect {
        state.window(id).expect("window exists").rect
    }

    #[test]
    fn open_assigns_cascade_positions_and_defaults() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");
        let c = open(&mut state, &mut interaction, "c");

        assert_eq!(rect_of(&state, &a), WindowRect { x: 100, y: 100, w: 1000, h: 700 });
        assert_eq!(rect_of(&state, &b), WindowRect { x: 150, y: 150, w: 1000, h: 700 });
        assert_eq!(rect_of(&state, &c), WindowRect { x: 200, y: 200, w: 1000, h: 700 });

        let record = state.window(&c).unwrap();
        assert!(!record.minimized);
        assert!(!record.maximized);
        assert_eq!(record.restore_rect, None);
        assert!(record.is_focused);
    }

    #[test]
    fn open_counts_records_and_close_removes_them() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        open(&mut state, &mut interaction, "b");
        open(&mut state, &mut interaction, "c");
        assert_eq!(state.windows.len(), 3);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: a },
        );
        assert_eq!(state.windows.len(), 2);
        assert!(state.window(&WindowId::new("a")).is_none());
    }

    #[test]
    fn open_with_existing_id_replaces_instead_of_duplicating() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, "a");
        open(&mut state, &mut interaction, "b");
        open(&mut state, &mut interaction, "a");

        assert_eq!(state.windows.len(), 2);
        assert_eq!(
            state.windows.iter().filter(|w| w.id == a).count(),
            1,
            "replacement must not duplicate"
        );
        // Slot is the window count at the time of the second call.
        assert_eq!(rect_of(&state, &a), WindowRect { x: 200, y: 200, w: 1000, h: 700 });
        assert_eq!(state.focused_window_id(), Some(a));
    }

    #[test]
    fn close_on_unknown_id_changes_nothing() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "a");
        let before = state.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                window_id: WindowId::new("missing"),
            },
        );

        assert_eq!(state, before);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn minimize_then_restore_preserves_geometry_and_maximize_flag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "a");
        let viewport = WindowRect { x: 0, y: 0, w: 1280, h: 740 };

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: a.clone(), viewport },
        );
        let maximized_rect = rect_of(&state, &a);
        let cached = state.window(&a).unwrap().restore_rect;

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: a.clone() },
        );
        assert!(effects.contains(&RuntimeEffect::DispatchLifecycle {
            window_id: a.clone(),
            event: AppLifecycleEvent::Minimized,
        }));
        assert!(state.window(&a).unwrap().minimized);
        assert!(!state.window(&a).unwrap().is_focused);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { window_id: a.clone() },
        );
        let record = state.window(&a).unwrap();
        assert!(!record.minimized);
        assert!(record.maximized, "restore must not undo maximize");
        assert_eq!(record.rect, maximized_rect);
        assert_eq!(record.restore_rect, cached);
    }

    #[test]
    fn restore_is_a_noop_for_visible_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");
        // Focus "a" so restoring the visible, unfocused "b" would be
        // observable if it were not a no-op.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: WindowId::new("a") },
        );
        let before = state.clone();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow { window_id: b },
        );

        assert_eq!(state, before);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn toggle_maximize_twice_round_trips_any_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "a");
        let viewport = WindowRect { x: 0, y: 0, w: 1440, h: 840 };

        // Drag the window somewhere arbitrary first.
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: a.clone(),
                pointer: PointerPosition { x: 120, y: 110 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove { pointer: PointerPosition { x: 333, y: 471 } },
        );
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove);
        let original = rect_of(&state, &a);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: a.clone(), viewport },
        );
        let record = state.window(&a).unwrap();
        assert!(record.maximized);
        assert_eq!(record.rect, viewport);
        assert_eq!(record.restore_rect, Some(original));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: a.clone(), viewport },
        );
        let record = state.window(&a).unwrap();
        assert!(!record.maximized);
        assert_eq!(record.rect, original);
        assert_eq!(record.restore_rect, None);
    }

    #[test]
    fn drag_follows_pointer_with_grab_offset_until_release() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "a");
        assert_eq!(rect_of(&state, &a).x, 100);
        assert_eq!(rect_of(&state, &a).y, 100);

        // Press at (110, 108): grab offset (10, 8).
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: a.clone(),
                pointer: PointerPosition { x: 110, y: 108 },
            },
        );
        assert_eq!(
            interaction.dragging.as_ref().map(|s| s.grab_offset),
            Some(GrabOffset { x: 10, y: 8 })
        );

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove { pointer: PointerPosition { x: 300, y: 250 } },
        );
        assert_eq!(rect_of(&state, &a).x, 290);
        assert_eq!(rect_of(&state, &a).y, 242);

        // Release anywhere, including far outside the viewport. Ending twice
        // is harmless; the second release finds no session to clear.
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.dragging, None);
        reduce_desktop(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.dragging, None);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove { pointer: PointerPosition { x: 999, y: 999 } },
        );
        assert_eq!(rect_of(&state, &a).x, 290, "drag ended; moves must be inert");
        assert_eq!(rect_of(&state, &a).y, 242);
    }

    #[test]
    fn begin_move_is_ignored_while_another_drag_is_active() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: a.clone(),
                pointer: PointerPosition { x: 110, y: 110 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: b,
                pointer: PointerPosition { x: 160, y: 160 },
            },
        );

        assert_eq!(
            interaction.dragging.as_ref().map(|s| s.window_id.clone()),
            Some(a)
        );
    }

    #[test]
    fn update_move_leaves_maximized_windows_in_place() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "a");
        let viewport = WindowRect { x: 0, y: 0, w: 1280, h: 740 };

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: a.clone(),
                pointer: PointerPosition { x: 110, y: 110 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: a.clone(), viewport },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove { pointer: PointerPosition { x: 400, y: 300 } },
        );

        assert_eq!(rect_of(&state, &a), viewport);
    }

    #[test]
    fn minimized_windows_populate_taskbar_not_window_layer() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: a.clone() },
        );

        let visible: Vec<WindowId> = state.visible_windows().map(|w| w.id.clone()).collect();
        let minimized: Vec<WindowId> = state.minimized_windows().map(|w| w.id.clone()).collect();
        assert_eq!(visible, vec![b]);
        assert_eq!(minimized, vec![a]);
    }

    #[test]
    fn focus_raises_window_and_renormalizes_stacking() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "a");
        let b = open(&mut state, &mut interaction, "b");
        let c = open(&mut state, &mut interaction, "c");
        assert_eq!(state.focused_window_id(), Some(c.clone()));

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: a.clone() },
        );
        let order: Vec<WindowId> = state.windows.iter().map(|w| w.id.clone()).collect();
        assert_eq!(order, vec![b, c, a.clone()]);
        assert_eq!(state.windows.last().unwrap().z_index, 3);
        assert_eq!(state.focused_window_id(), Some(a.clone()));

        // Focusing the already-top window leaves the stack untouched.
        let before = state.clone();
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: a },
        );
        assert_eq!(state, before);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn open_emits_focus_effect_and_closes_start_menu() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);

        let request =
            OpenWindowRequest::new("calculator", "Calculator", AppModule::new(blank_content));
        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(request),
        );

        assert!(!state.start_menu_open);
        assert!(effects.contains(&RuntimeEffect::FocusWindowInput(WindowId::new("calculator"))));
    }

    #[test]
    fn wallpaper_rotation_wraps_and_respects_the_auto_flag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let count = wallpaper::catalog_len();
        assert!(state.wallpaper.auto_rotate);

        for _ in 0..count {
            reduce_desktop(&mut state, &mut interaction, DesktopAction::AdvanceWallpaper);
        }
        assert_eq!(state.wallpaper.index, 0, "advancing wraps modulo the catalog");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetWallpaper { index: 2 },
        );
        assert_eq!(state.wallpaper.index, 2);
        assert!(!state.wallpaper.auto_rotate, "manual selection stops rotation");

        reduce_desktop(&mut state, &mut interaction, DesktopAction::AdvanceWallpaper);
        assert_eq!(state.wallpaper.index, 2, "rotation is inert while disabled");
    }

    #[test]
    fn closing_the_dragged_window_clears_the_session() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let a = open(&mut state, &mut interaction, "a");

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: a.clone(),
                pointer: PointerPosition { x: 110, y: 110 },
            },
        );
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: a },
        );

        assert_eq!(interaction.dragging, None);
    }
}
