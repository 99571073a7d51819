//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use std::time::Duration;

use glassdesk_app_contract::{AppCommand, AppServices};
use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};
use crate::{
    apps,
    model::PointerPosition,
    reducer::DesktopAction,
    wallpaper,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Height of the taskbar strip; maximized windows stop above it.
pub const TASKBAR_HEIGHT_PX: i32 = 60;

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn build_app_services(runtime: DesktopRuntimeContext) -> AppServices {
    let sender = Callback::new(move |command: AppCommand| match command {
        AppCommand::SetWallpaper { index } => {
            runtime.dispatch_action(DesktopAction::SetWallpaper { index });
        }
        AppCommand::SetWallpaperAutoRotate { enabled } => {
            runtime.dispatch_action(DesktopAction::SetWallpaperAutoRotate { enabled });
        }
    });
    let state = runtime.state;
    AppServices::new(
        sender,
        Signal::derive(move || state.get().wallpaper.index),
        Signal::derive(move || state.get().wallpaper.auto_rotate),
        Signal::derive(move || state.get().windows.len()),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

fn format_clock_time(snapshot: ClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, snapshot.minute, suffix)
}

fn format_clock_date(snapshot: ClockSnapshot) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        snapshot.year, snapshot.month, snapshot.day
    )
}

#[component]
/// Renders the full desktop shell: wallpaper, icons, window layer, taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    // Pointer tracking lives on the shell root, not on individual windows, so
    // a release anywhere (including after the pointer left the title bar)
    // terminates the active drag.
    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    };

    // The rotation timer always ticks; the reducer decides whether the
    // wallpaper actually advances.
    if let Ok(interval) = set_interval_with_handle(
        move || runtime.dispatch_action(DesktopAction::AdvanceWallpaper),
        Duration::from_secs(wallpaper::WALLPAPER_ROTATION_SECS),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div
            class="desktop-shell"
            style=move || {
                format!(
                    "background-image:url('{}');",
                    wallpaper::wallpaper_url(state.get().wallpaper.index)
                )
            }
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
            on:mousedown=move |_| {
                if state.get_untracked().start_menu_open {
                    runtime.dispatch_action(DesktopAction::CloseStartMenu);
                }
            }
        >
            <DesktopIconColumn />

            <div class="window-layer">
                <For each=move || state.get().windows key=|win| win.id.clone() let:win>
                    <DesktopWindow window_id=win.id.clone() />
                </For>
            </div>

            <Taskbar />
        </div>
    }
}

#[component]
fn DesktopIconColumn() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="desktop-icons">
            <For each=move || apps::desktop_icon_apps() key=|app| app.id let:app>
                <button
                    class="desktop-icon"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::OpenWindow(apps::open_request(&app)));
                    }
                >
                    <span class="desktop-icon-glyph" aria-hidden="true">{app.glyph}</span>
                    <span class="desktop-icon-label">{app.title}</span>
                </button>
            </For>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_twelve_hour_time() {
        let snapshot = ClockSnapshot {
            year: 2024,
            month: 3,
            day: 9,
            hour: 0,
            minute: 5,
        };
        assert_eq!(format_clock_time(snapshot), "12:05 AM");

        let afternoon = ClockSnapshot { hour: 15, minute: 42, ..snapshot };
        assert_eq!(format_clock_time(afternoon), "03:42 PM");
        assert_eq!(format_clock_date(afternoon), "2024-03-09");
    }
}
