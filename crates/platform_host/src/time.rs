//! Time helpers shared across the shell and hosted apps.

use std::cell::Cell;
#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

thread_local! {
    static PROCESS_START_MS: Cell<Option<u64>> = const { Cell::new(None) };
}

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Minutes elapsed since the first call in this page session.
///
/// The desktop has no real boot process; "uptime" is measured from the first
/// time anything asks for it, which in practice is page load.
pub fn uptime_minutes() -> u64 {
    let now = unix_time_ms_now();
    let start = PROCESS_START_MS.with(|cell| match cell.get() {
        Some(start) => start,
        None => {
            cell.set(Some(now));
            now
        }
    });
    now.saturating_sub(start) / 60_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_starts_at_zero_and_never_goes_backwards() {
        let first = uptime_minutes();
        assert_eq!(first, 0);
        assert!(uptime_minutes() >= first);
    }
}
