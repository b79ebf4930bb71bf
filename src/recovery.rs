//! Recovery window reference data: fetch-once cache and exact lookup.
//!
//! The table is keyed AgeGroup label → disease name → severity key. Every
//! key match is exact; a miss at any level is an expected condition and
//! renders the fixed fallback message, never an error.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::age_group::AgeGroup;
use crate::api::{ApiError, TriageBackend};

pub const RECOVERY_UNAVAILABLE_MSG: &str = "Recovery info not available.";

/// Expected recovery span in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryWindow {
    pub min_days: u32,
    pub max_days: u32,
}

/// Nested recovery reference data, as served by the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RecoveryTable {
    groups: HashMap<String, HashMap<String, HashMap<String, RecoveryWindow>>>,
}

impl RecoveryTable {
    /// Exact nested lookup. Disease must equal the backend-provided string;
    /// severity is the lowercase key.
    pub fn lookup(
        &self,
        group: AgeGroup,
        disease: &str,
        severity_key: &str,
    ) -> Option<RecoveryWindow> {
        self.groups
            .get(group.label())?
            .get(disease)?
            .get(severity_key)
            .copied()
    }
}

/// Session-lifetime recovery table cache.
///
/// Lazy and single-shot: the first successful fetch is authoritative and
/// later triggers never hit the backend again. A failed fetch leaves the
/// cache empty so the next explicit trigger may retry.
#[derive(Debug, Default)]
pub struct RecoveryCache {
    table: OnceLock<RecoveryTable>,
}

impl RecoveryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// Cached table, fetching it on first use.
    pub fn get_or_fetch<B: TriageBackend>(&self, backend: &B) -> Result<&RecoveryTable, ApiError> {
        if let Some(table) = self.table.get() {
            return Ok(table);
        }
        let fetched = backend.fetch_recovery()?;
        // If another trigger stored a table between the check and here,
        // get_or_init keeps the first one.
        Ok(self.table.get_or_init(|| fetched))
    }
}

/// Rendered estimate line for a successful lookup.
pub fn estimate_sentence(
    disease: &str,
    group: AgeGroup,
    severity_key: &str,
    window: RecoveryWindow,
) -> String {
    format!(
        "For {disease} in a {} patient with {} severity, the expected recovery period is typically {} to {} days.",
        group.label(),
        capitalize(severity_key),
        window.min_days,
        window.max_days,
    )
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
