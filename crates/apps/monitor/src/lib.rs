//! Fake system monitor desktop app.
//!
//! All "telemetry" is randomly generated; only the environment panel shows
//! real (browser-reported) values.

use std::time::Duration;

use glassdesk_app_contract::AppLifecycleEvent;
use glassdesk_host::{environment_info, uptime_minutes};
use leptos::*;

mod stats;

use stats::{usage_label, SystemStats};

const SAMPLE_INTERVAL_SECS: u64 = 2;
const OS_NAME: &str = "GlassDesk 0.1";

#[component]
pub fn MonitorApp(lifecycle: ReadSignal<AppLifecycleEvent>) -> impl IntoView {
    let stats = create_rw_signal(SystemStats::sample(glassdesk_host::random_unit));
    let uptime = create_rw_signal(uptime_minutes());

    if let Ok(interval) = set_interval_with_handle(
        move || {
            // No point burning samples while the window sits in the taskbar.
            if lifecycle.get_untracked() == AppLifecycleEvent::Minimized {
                return;
            }
            stats.set(SystemStats::sample(glassdesk_host::random_unit));
            uptime.set(uptime_minutes());
        },
        Duration::from_secs(SAMPLE_INTERVAL_SECS),
    ) {
        on_cleanup(move || interval.clear());
    }

    let environment = environment_info();
    let browser = environment
        .user_agent
        .split_whitespace()
        .next()
        .unwrap_or("unknown")
        .to_string();
    let resolution = format!(
        "{} × {}",
        environment.screen_width, environment.screen_height
    );

    view! {
        <div class="app-monitor">
            <h2>"System Monitor"</h2>

            <div class="monitor-cards">
                {stat_card("CPU Usage", "cpu", Signal::derive(move || stats.get().cpu))}
                {stat_card("Memory", "memory", Signal::derive(move || stats.get().memory))}
                {stat_card("Storage", "storage", Signal::derive(move || stats.get().storage))}
                {stat_card("Network", "network", Signal::derive(move || stats.get().network))}
            </div>

            <div class="monitor-info">
                <h3>"System Information"</h3>
                <div class="monitor-info-grid">
                    {info_row("Operating System", OS_NAME.to_string())}
                    {info_row("Browser", browser)}
                    {info_row("Screen Resolution", resolution)}
                    {info_row("Platform", environment.platform.clone())}
                    {info_row("Language", environment.language.clone())}
                    <div class="monitor-info-row">
                        <span>"Uptime:"</span>
                        <span>{move || format!("{} minutes", uptime.get())}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn stat_card(title: &'static str, accent: &'static str, value: Signal<u32>) -> impl IntoView {
    view! {
        <div class=format!("monitor-card accent-{accent}")>
            <div class="monitor-card-header">
                <h3>{title}</h3>
                <span class="monitor-card-value">{move || format!("{}%", value.get())}</span>
            </div>
            <div class="monitor-bar-track">
                <div
                    class="monitor-bar-fill"
                    style=move || format!("width:{}%;", value.get().min(100))
                ></div>
            </div>
            <span class="monitor-card-label">{move || usage_label(value.get())}</span>
        </div>
    }
}

fn info_row(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="monitor-info-row">
            <span>{format!("{label}:")}</span>
            <span>{value}</span>
        </div>
    }
}
