pub mod app_runtime;
pub mod apps;
pub mod components;
pub mod host;
pub mod model;
pub mod reducer;
pub mod wallpaper;

mod effect_executor;
mod runtime_context;
mod window_manager;

pub use components::{DesktopShell, TASKBAR_HEIGHT_PX};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
