//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! The window manager stores app content as an opaque capability: a mount
//! function plus optional lifecycle hooks. Apps never touch desktop state
//! directly; anything they want from the shell goes through capability-scoped
//! service handles that translate into runtime commands.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, ReadSignal, Signal, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier of the runtime-managed window hosting an app instance.
pub type WindowRuntimeId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Lifecycle events emitted by the desktop window manager.
pub enum AppLifecycleEvent {
    /// App view has been mounted into a managed window.
    Mounted,
    /// Window was minimized into the taskbar.
    Minimized,
    /// Window was restored from the taskbar.
    Restored,
}

impl AppLifecycleEvent {
    /// Returns a stable string token for debugging hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Mounted => "mounted",
            Self::Minimized => "minimized",
            Self::Restored => "restored",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Commands apps send to the desktop shell.
pub enum AppCommand {
    /// Select a built-in wallpaper by catalog index.
    SetWallpaper {
        /// Zero-based index into the shell's wallpaper catalog.
        index: usize,
    },
    /// Enable or disable automatic wallpaper rotation.
    SetWallpaperAutoRotate {
        /// Whether rotation should be active.
        enabled: bool,
    },
}

#[derive(Clone, Copy)]
/// Wallpaper query and selection service handle.
pub struct WallpaperService {
    sender: Callback<AppCommand>,
    /// Index of the currently displayed built-in wallpaper.
    pub current_index: Signal<usize>,
    /// Whether the shell rotates wallpapers automatically.
    pub auto_rotate: Signal<bool>,
}

impl WallpaperService {
    /// Selects a wallpaper by catalog index. Manual selection also stops
    /// automatic rotation, mirroring the settings UI semantics.
    pub fn set_current(&self, index: usize) {
        self.sender.call(AppCommand::SetWallpaper { index });
    }

    /// Turns automatic rotation on or off.
    pub fn set_auto_rotate(&self, enabled: bool) {
        self.sender
            .call(AppCommand::SetWallpaperAutoRotate { enabled });
    }
}

#[derive(Clone, Copy)]
/// Read-only shell information exposed to apps.
pub struct ShellInfoService {
    /// Number of currently open windows, minimized ones included.
    pub open_window_count: Signal<usize>,
}

#[derive(Clone, Copy)]
/// Injected app services bundle.
///
/// Note the deliberately small surface: window titles are immutable for the
/// lifetime of a window, so no rename/title service exists.
pub struct AppServices {
    /// Wallpaper query/selection service.
    pub wallpaper: WallpaperService,
    /// Read-only shell information.
    pub shell: ShellInfoService,
}

impl AppServices {
    /// Creates service handles from the runtime command callback and the
    /// shell's reactive state slices.
    pub fn new(
        sender: Callback<AppCommand>,
        wallpaper_index: Signal<usize>,
        wallpaper_auto_rotate: Signal<bool>,
        open_window_count: Signal<usize>,
    ) -> Self {
        Self {
            wallpaper: WallpaperService {
                sender,
                current_index: wallpaper_index,
                auto_rotate: wallpaper_auto_rotate,
            },
            shell: ShellInfoService { open_window_count },
        }
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Stable id of the hosting window.
    pub window_id: WindowRuntimeId,
    /// Launch parameters supplied at window-open time.
    pub launch_params: Value,
    /// Reactive lifecycle signal for this window/app.
    pub lifecycle: ReadSignal<AppLifecycleEvent>,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Opaque window-content capability stored on each window record.
///
/// The window manager never looks inside; it stores the module at open time
/// and mounts it into the window body when the window is rendered.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_tokens_are_stable() {
        assert_eq!(AppLifecycleEvent::Mounted.token(), "mounted");
        assert_eq!(AppLifecycleEvent::Minimized.token(), "minimized");
        assert_eq!(AppLifecycleEvent::Restored.token(), "restored");
    }

    #[test]
    fn app_modules_compare_by_mount_function() {
        fn a(_: AppMountContext) -> View {
            unreachable!("never mounted in tests")
        }
        fn b(_: AppMountContext) -> View {
            unreachable!("never mounted in tests")
        }

        assert_eq!(AppModule::new(a), AppModule::new(a));
        assert_ne!(AppModule::new(a), AppModule::new(b));
    }
}
