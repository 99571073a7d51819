//! Settings desktop app: wallpaper selection and shell information.

use glassdesk_app_contract::AppServices;
use glassdesk_host::environment_info;
use leptos::*;
use serde_json::Value;

/// Extracts the wallpaper URL list from the launch parameters.
fn wallpapers_from_params(launch_params: &Value) -> Vec<String> {
    launch_params
        .get("wallpapers")
        .and_then(Value::as_array)
        .map(|urls| {
            urls.iter()
                .filter_map(|url| url.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn SettingsApp(services: AppServices, launch_params: Value) -> impl IntoView {
    let wallpapers = wallpapers_from_params(&launch_params);
    let wallpaper = services.wallpaper;
    let shell = services.shell;

    let environment = environment_info();
    let resolution = format!(
        "{} × {}",
        environment.screen_width, environment.screen_height
    );

    view! {
        <div class="app-settings">
            <h2>"System Settings"</h2>

            <section class="settings-group">
                <h3>"Wallpaper Settings"</h3>

                <div class="settings-row">
                    <div>
                        <span class="settings-row-label">"Auto-rotate wallpaper"</span>
                        <p class="settings-row-hint">"Change wallpaper every 10 seconds"</p>
                    </div>
                    <button
                        type="button"
                        class="settings-toggle"
                        role="switch"
                        aria-checked=move || wallpaper.auto_rotate.get().to_string()
                        on:click=move |_| {
                            wallpaper.set_auto_rotate(!wallpaper.auto_rotate.get_untracked());
                        }
                    >
                        {move || if wallpaper.auto_rotate.get() { "On" } else { "Off" }}
                    </button>
                </div>

                <div class="settings-wallpapers">
                    <For
                        each={
                            let wallpapers = wallpapers.clone();
                            move || wallpapers.clone().into_iter().enumerate().collect::<Vec<_>>()
                        }
                        key=|entry| entry.0
                        let:entry
                    >
                        {
                            let (index, url) = entry;
                            view! {
                                <button
                                    type="button"
                                    class="settings-wallpaper"
                                    class:selected=move || wallpaper.current_index.get() == index
                                    aria-label=format!("Wallpaper {}", index + 1)
                                    on:click=move |_| wallpaper.set_current(index)
                                >
                                    <img src=url alt="" loading="lazy" />
                                </button>
                            }
                        }
                    </For>
                </div>

                <Show when=move || wallpaper.auto_rotate.get() fallback=|| ()>
                    <p class="settings-note">
                        "Auto-rotation is active. The wallpaper changes every 10 seconds; picking one manually turns rotation off."
                    </p>
                </Show>
            </section>

            <section class="settings-group">
                <h3>"System Information"</h3>
                <div class="settings-info">
                    <div class="settings-info-row">
                        <span>"OS Version:"</span>
                        <span>"GlassDesk 0.1"</span>
                    </div>
                    <div class="settings-info-row">
                        <span>"Screen Resolution:"</span>
                        <span>{resolution}</span>
                    </div>
                    <div class="settings-info-row">
                        <span>"Active Windows:"</span>
                        <span>{move || shell.open_window_count.get().to_string()}</span>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wallpapers_are_read_from_launch_params() {
        let params = json!({ "wallpapers": ["https://a.example/1.jpg", "https://a.example/2.jpg"] });
        assert_eq!(
            wallpapers_from_params(&params),
            vec![
                "https://a.example/1.jpg".to_string(),
                "https://a.example/2.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn missing_or_malformed_params_yield_an_empty_catalog() {
        assert!(wallpapers_from_params(&Value::Null).is_empty());
        assert!(wallpapers_from_params(&json!({ "wallpapers": 7 })).is_empty());
    }
}
