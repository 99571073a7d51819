//! Shared window-manager transition helpers used by the desktop reducer.

use crate::model::{DesktopState, WindowId};

/// Focuses and raises `window_id`, moving it to the top of the stacking order
/// and clearing its minimized flag.
///
/// Returns `true` when the window exists.
pub(crate) fn focus_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let Some(index) = state.windows.iter().position(|w| &w.id == window_id) else {
        return false;
    };

    let already_focused_top = index + 1 == state.windows.len()
        && state.windows[index].is_focused
        && !state.windows[index].minimized;
    if already_focused_top {
        return true;
    }

    let mut window = state.windows.remove(index);
    window.is_focused = true;
    window.minimized = false;
    state.windows.push(window);
    normalize_window_stack(state);
    true
}

/// Renormalizes stacking indices and the focus invariant.
///
/// Exactly one non-minimized window holds focus while any exists: the topmost
/// one that claims it, falling back to the topmost visible window.
pub(crate) fn normalize_window_stack(state: &mut DesktopState) {
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = (idx + 1) as u32;
        if window.minimized {
            window.is_focused = false;
        }
    }

    let top_claimed = state
        .windows
        .iter()
        .rposition(|w| w.is_focused && !w.minimized);
    let top_visible = state.windows.iter().rposition(|w| !w.minimized);
    let keep = top_claimed.or(top_visible);
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.is_focused = Some(idx) == keep;
    }
}
