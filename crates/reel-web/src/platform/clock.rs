//! Millisecond clock for the `tick(now_ms)` state machines.

/// Monotonic milliseconds since page load, falling back to wall time when
/// the performance API is unavailable.
pub fn now_ms() -> u64 {
    let now = web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now);
    if now.is_finite() && now > 0.0 {
        now as u64
    } else {
        0
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
