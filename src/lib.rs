//! Sympta — client-side session core for symptom-based disease triage.
//!
//! The user enters an age, picks symptoms from an age-scoped catalog,
//! submits, and gets ranked disease candidates with severity, care
//! guidance, and recovery windows. This crate is the state machine behind
//! that flow: catalog filtering and tagging, the selection set, the
//! prediction pipeline, and the guidance/recovery lookups. Rendering and
//! the prediction model live elsewhere and are reached through narrow
//! data contracts.

pub mod age_group;
pub mod api;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod guidance;
pub mod pipeline;
pub mod recovery;
pub mod selection;
pub mod session;
pub mod severity;
pub mod status;
pub mod view;

pub use api::{HttpBackend, TriageBackend};
pub use session::{Effect, SessionEvent, TriageSession};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for an embedding shell. Safe to call more than
/// once; later calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    tracing::info!("{} core v{}", config::APP_NAME, config::APP_VERSION);
}
