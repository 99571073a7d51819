use super::*;
use crate::model::WindowRecord;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock_now = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <div class="taskbar-left">
                <button
                    class="start-button"
                    aria-haspopup="menu"
                    aria-expanded=move || state.get().start_menu_open.to_string()
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    }
                >
                    <span class="start-glyph" aria-hidden="true">"⊞"</span>
                    <span>"Start"</span>
                </button>

                <Show when=move || state.get().start_menu_open fallback=|| ()>
                    <div class="start-menu" role="menu" aria-label="Application launcher">
                        <For each=move || apps::launcher_apps() key=|app| app.id let:app>
                            <button
                                class="start-menu-item"
                                role="menuitem"
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.stop_propagation();
                                    runtime.dispatch_action(
                                        DesktopAction::OpenWindow(apps::open_request(&app)),
                                    );
                                }
                            >
                                <span class="start-menu-glyph" aria-hidden="true">{app.glyph}</span>
                                <span>{app.title}</span>
                            </button>
                        </For>
                    </div>
                </Show>
            </div>

            <div class="taskbar-windows" role="group" aria-label="Minimized windows">
                <For
                    each=move || {
                        state
                            .get()
                            .minimized_windows()
                            .cloned()
                            .collect::<Vec<WindowRecord>>()
                    }
                    key=|win| win.id.clone()
                    let:win
                >
                    <button
                        class="taskbar-window-button"
                        on:click=move |_| {
                            runtime.dispatch_action(DesktopAction::RestoreWindow {
                                window_id: win.id.clone(),
                            });
                        }
                    >
                        {win.title.clone()}
                    </button>
                </For>
            </div>

            <div class="taskbar-tray">
                <span class="taskbar-clock-time">{move || format_clock_time(clock_now.get())}</span>
                <span class="taskbar-clock-date">{move || format_clock_date(clock_now.get())}</span>
            </div>
        </footer>
    }
}
