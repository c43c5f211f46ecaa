//! Browser monotonic clock.

use std::time::Duration;

use warm_ui_core::Clock;

/// Clock backed by `performance.now()` in the browser.
///
/// Native builds (tests, tooling) fall back to [`warm_ui_core::MonotonicClock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClock {
    #[cfg(not(target_arch = "wasm32"))]
    fallback: warm_ui_core::MonotonicClock,
}

impl PerformanceClock {
    /// Creates a clock reading the page's performance timeline.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for PerformanceClock {
    #[cfg(target_arch = "wasm32")]
    fn now(&self) -> Duration {
        let millis = web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or_default();
        Duration::from_secs_f64(millis.max(0.0) / 1_000.0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now(&self) -> Duration {
        self.fallback.now()
    }
}
