//! Data model for the desktop window manager.

use glassdesk_app_contract::AppModule;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default width of a newly opened window.
pub const DEFAULT_WINDOW_WIDTH: i32 = 1000;
/// Default height of a newly opened window.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 700;
/// Top-left offset of the first cascade slot.
pub const CASCADE_BASE_PX: i32 = 100;
/// Offset added per already-open window so new windows do not stack exactly.
pub const CASCADE_STEP_PX: i32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Stable identity of an open window.
///
/// Identity is caller-supplied; opening a window whose id matches an existing
/// record replaces that record instead of producing a duplicate.
pub struct WindowId(String);

impl WindowId {
    /// Creates a window id from its raw string form.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer location in desktop coordinates.
pub struct PointerPosition {
    /// Horizontal offset in pixels.
    pub x: i32,
    /// Vertical offset in pixels.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Fixed pointer-to-corner offset captured when a drag begins.
///
/// Preserving this offset for the whole drag keeps the window rigid under the
/// pointer instead of snapping its corner to the pointer at drag start.
pub struct GrabOffset {
    /// Horizontal offset in pixels.
    pub x: i32,
    /// Vertical offset in pixels.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Position and size of a window in desktop coordinates.
pub struct WindowRect {
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowRect {
    /// Returns the same rect with its top-left corner moved to `(x, y)`.
    pub fn moved_to(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        cascade_rect(0)
    }
}

/// Returns the rect assigned to cascade slot `slot`: top-left at
/// `(100 + 50·slot, 100 + 50·slot)` with the default window size.
pub fn cascade_rect(slot: usize) -> WindowRect {
    let offset = CASCADE_BASE_PX + CASCADE_STEP_PX * slot as i32;
    WindowRect {
        x: offset,
        y: offset,
        w: DEFAULT_WINDOW_WIDTH,
        h: DEFAULT_WINDOW_HEIGHT,
    }
}

#[derive(Debug, Clone, PartialEq)]
/// State of one open application window.
pub struct WindowRecord {
    /// Stable identity, unique among open windows.
    pub id: WindowId,
    /// Display title; immutable for the lifetime of the record.
    pub title: String,
    /// Opaque content capability. Never inspected by the window manager.
    pub content: AppModule,
    /// Launch parameters forwarded to the content when mounted.
    pub launch_params: Value,
    /// Displayed geometry.
    pub rect: WindowRect,
    /// Pre-maximize geometry; present exactly while `maximized` is set.
    pub restore_rect: Option<WindowRect>,
    /// Normalized stacking index, 1-based from the bottom.
    pub z_index: u32,
    /// Whether this window currently holds focus.
    pub is_focused: bool,
    /// Whether the window lives in the taskbar instead of the window layer.
    pub minimized: bool,
    /// Whether the displayed geometry is the full viewport.
    pub maximized: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// Request to open (or replace) a window.
pub struct OpenWindowRequest {
    /// Identity of the window to open.
    pub id: WindowId,
    /// Title shown in the title bar and the taskbar.
    pub title: String,
    /// Opaque content to host.
    pub content: AppModule,
    /// Launch parameters forwarded to the content.
    pub launch_params: Value,
}

impl OpenWindowRequest {
    /// Creates a request with no launch parameters.
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: AppModule) -> Self {
        Self {
            id: WindowId::new(id),
            title: title.into(),
            content,
            launch_params: Value::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An in-progress window drag. At most one exists at a time.
pub struct DragSession {
    /// The window being repositioned.
    pub window_id: WindowId,
    /// Pointer offset from the window's top-left corner at drag start.
    pub grab_offset: GrabOffset,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Ephemeral pointer-interaction state, owned alongside the desktop state.
pub struct InteractionState {
    /// The active drag session, if any.
    pub dragging: Option<DragSession>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Wallpaper selection and rotation state.
pub struct WallpaperState {
    /// Index into the built-in wallpaper catalog.
    pub index: usize,
    /// Whether the shell advances the wallpaper on a timer.
    pub auto_rotate: bool,
}

impl Default for WallpaperState {
    fn default() -> Self {
        Self {
            index: 0,
            auto_rotate: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Root state of the desktop shell.
///
/// The window vector doubles as the stacking order: later entries render on
/// top, and focusing a window moves it to the end.
pub struct DesktopState {
    /// Open windows in stacking order.
    pub windows: Vec<WindowRecord>,
    /// Whether the start menu is open.
    pub start_menu_open: bool,
    /// Wallpaper selection and rotation state.
    pub wallpaper: WallpaperState,
}

impl DesktopState {
    /// Returns the window with the given id, if open.
    pub fn window(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == id)
    }

    /// Returns the id of the focused window, if any.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .find(|w| w.is_focused)
            .map(|w| w.id.clone())
    }

    /// Windows rendered in the window layer, bottom to top.
    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| !w.minimized)
    }

    /// Windows shown as taskbar entries.
    pub fn minimized_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| w.minimized)
    }
}
