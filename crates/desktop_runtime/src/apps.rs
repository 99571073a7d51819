//! Static registry of the apps the desktop shell can host.
//!
//! The registry is the only place that knows which app crate sits behind
//! which window id; everywhere else an open window is just an id, a title,
//! and an opaque [`AppModule`].

use glassdesk_app_contract::{AppModule, AppMountContext};
use glassdesk_app_calculator::CalculatorApp;
use glassdesk_app_editor::EditorApp;
use glassdesk_app_monitor::MonitorApp;
use glassdesk_app_settings::SettingsApp;
use glassdesk_app_snake::SnakeApp;
use leptos::*;
use serde_json::json;

use crate::{model::OpenWindowRequest, wallpaper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One launchable app known to the shell.
pub struct AppDescriptor {
    /// Stable window id used when opening the app.
    pub id: &'static str,
    /// Window title and launcher label.
    pub title: &'static str,
    /// Icon glyph shown on the desktop and in the start menu.
    pub glyph: &'static str,
    /// Whether the app gets a desktop icon.
    pub show_on_desktop: bool,
    /// Whether the app is listed in the start menu.
    pub show_in_launcher: bool,
    module: AppModule,
}

const APP_REGISTRY: [AppDescriptor; 5] = [
    AppDescriptor {
        id: "calculator",
        title: "Calculator",
        glyph: "🧮",
        show_on_desktop: true,
        show_in_launcher: true,
        module: AppModule::new(mount_calculator),
    },
    AppDescriptor {
        id: "notepad",
        title: "Text Editor",
        glyph: "📝",
        show_on_desktop: true,
        show_in_launcher: true,
        module: AppModule::new(mount_editor),
    },
    AppDescriptor {
        id: "system-monitor",
        title: "System Monitor",
        glyph: "📊",
        show_on_desktop: false,
        show_in_launcher: true,
        module: AppModule::new(mount_monitor),
    },
    AppDescriptor {
        id: "snake-game",
        title: "Snake Game",
        glyph: "🎮",
        show_on_desktop: false,
        show_in_launcher: true,
        module: AppModule::new(mount_snake),
    },
    AppDescriptor {
        id: "settings",
        title: "Settings",
        glyph: "⚙️",
        show_on_desktop: false,
        show_in_launcher: true,
        module: AppModule::new(mount_settings),
    },
];

/// All registered apps.
pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Apps that get a desktop icon.
pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

/// Apps listed in the start menu.
pub fn launcher_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_launcher)
        .collect()
}

/// Builds the open request for a registry entry.
pub fn open_request(descriptor: &AppDescriptor) -> OpenWindowRequest {
    let mut request = OpenWindowRequest::new(descriptor.id, descriptor.title, descriptor.module);
    if descriptor.id == "settings" {
        // The settings app renders the wallpaper picker from its launch
        // params, which keeps the app crate decoupled from the shell catalog.
        request.launch_params = json!({ "wallpapers": wallpaper::catalog() });
    }
    request
}

fn mount_calculator(_context: AppMountContext) -> View {
    view! { <CalculatorApp /> }.into_view()
}

fn mount_editor(_context: AppMountContext) -> View {
    view! { <EditorApp /> }.into_view()
}

fn mount_monitor(context: AppMountContext) -> View {
    view! { <MonitorApp lifecycle=context.lifecycle /> }.into_view()
}

fn mount_snake(context: AppMountContext) -> View {
    view! { <SnakeApp lifecycle=context.lifecycle /> }.into_view()
}

fn mount_settings(context: AppMountContext) -> View {
    view! { <SettingsApp services=context.services launch_params=context.launch_params /> }
        .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_ids_are_unique() {
        for (i, a) in app_registry().iter().enumerate() {
            for b in app_registry().iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn settings_open_request_carries_the_wallpaper_catalog() {
        let settings = app_registry()
            .iter()
            .find(|entry| entry.id == "settings")
            .expect("settings registered");
        let request = open_request(settings);
        let urls = request.launch_params["wallpapers"]
            .as_array()
            .expect("wallpaper list");
        assert_eq!(urls.len(), wallpaper::catalog_len());
    }
}
