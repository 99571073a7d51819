//! Best-effort browser environment queries.

/// Environment strings shown by the system monitor and settings apps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentInfo {
    /// Raw user-agent string.
    pub user_agent: String,
    /// Navigator platform string.
    pub platform: String,
    /// Preferred UI language tag.
    pub language: String,
    /// Physical screen width in pixels, 0 when unknown.
    pub screen_width: u32,
    /// Physical screen height in pixels, 0 when unknown.
    pub screen_height: u32,
}

/// Reads environment details from the browser, falling back to placeholders
/// when the relevant APIs are unavailable.
pub fn environment_info() -> EnvironmentInfo {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let navigator = window.navigator();
            let (screen_width, screen_height) = window
                .screen()
                .ok()
                .and_then(|screen| {
                    Some((screen.width().ok()? as u32, screen.height().ok()? as u32))
                })
                .unwrap_or((0, 0));
            return EnvironmentInfo {
                user_agent: navigator.user_agent().unwrap_or_default(),
                platform: navigator.platform().unwrap_or_default(),
                language: navigator.language().unwrap_or_default(),
                screen_width,
                screen_height,
            };
        }
    }

    EnvironmentInfo {
        user_agent: "unknown".to_string(),
        platform: "unknown".to_string(),
        language: "en".to_string(),
        screen_width: 0,
        screen_height: 0,
    }
}
