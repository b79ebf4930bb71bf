use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "Sympta";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Inclusive age bounds enforced at the input boundary.
pub const AGE_MIN: u8 = 1;
pub const AGE_MAX: u8 = 100;

/// Inactivity window before an age input triggers a catalog fetch.
pub const AGE_DEBOUNCE: Duration = Duration::from_millis(350);

/// Maximum number of symptom rows the filtered view renders.
/// A display window, not a truncation: the full filtered set stays
/// the basis for further refiltering.
pub const CATALOG_RENDER_LIMIT: usize = 40;

/// Maximum number of non-top predictions shown in the results table.
pub const OTHERS_TABLE_LIMIT: usize = 4;

/// Default request timeout for backend calls.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Chart segment colors, cycled when a series is longer than the palette.
pub const CHART_PALETTE: [&str; 10] = [
    "#0b73b5", "#18a6c8", "#1e8d6d", "#d7891f", "#c53939", "#6e8596", "#095f95", "#4aa3a0",
    "#5f79a0", "#8a98a5",
];

/// Default triage backend when `SYMPTA_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Resolve the backend base URL from the environment.
pub fn base_url() -> String {
    std::env::var("SYMPTA_BASE_URL")
        .map(|v| normalize_base_url(&v))
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Strip trailing slashes so endpoint paths can be appended directly.
pub(crate) fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Default log filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,sympta=debug"
}
