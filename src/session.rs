//! Session controller: owned state, named events, and transitions.
//!
//! All mutable session state lives here — catalog, selection, filters, the
//! last prediction, and the cached recovery table — and is touched only
//! through event handlers on a single thread. The backend calls are the
//! only blocking points. Every failure path leaves the session in a
//! consistent, re-submittable state.

use std::time::{Duration, Instant};

use crate::age_group::{parse_age, AgeGroup};
use crate::api::{
    ApiError, HttpBackend, PredictResponse, Prediction, SymptomsResponse, TriageBackend,
};
use crate::catalog::{Catalog, CatalogFilter, CategoryFilter};
use crate::config::AGE_DEBOUNCE;
use crate::guidance::{remedies_panel, resolve_actions, suggestion_panel, CarePanel};
use crate::pipeline::build_view;
use crate::recovery::{estimate_sentence, RecoveryCache, RECOVERY_UNAVAILABLE_MSG};
use crate::selection::SelectionSet;
use crate::status::StatusLine;
use crate::view::{PredictionView, SessionSummary};

// ═══════════════════════════════════════════════════════════
// Fixed status messages
// ═══════════════════════════════════════════════════════════

pub const MSG_INVALID_AGE: &str = "Enter a valid age.";
pub const MSG_NO_CATALOG: &str = "Load symptoms by entering age first.";
pub const MSG_EMPTY_SELECTION: &str = "Select at least one symptom.";
pub const MSG_FETCHING: &str = "Fetching symptoms…";
pub const MSG_NO_SYMPTOMS: &str = "No symptoms found.";
pub const MSG_FETCH_FAILED: &str = "Error fetching symptoms.";
pub const MSG_PREDICTING: &str = "Predicting…";
pub const MSG_PREDICT_FAILED: &str = "Prediction failed.";

/// Empty-state marker shown in place of the symptom list when a load
/// returned nothing for the entered age.
pub const EMPTY_CATALOG_NOTE: &str = "No symptoms available for this age.";

// ═══════════════════════════════════════════════════════════
// Events and effects
// ═══════════════════════════════════════════════════════════

/// Discrete UI events the session consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Raw text from the age field.
    AgeInput(String),
    QueryChanged(String),
    CategoryChanged(CategoryFilter),
    SymptomToggled(String),
    SubmitRequested,
    ResetRequested,
    RemediesRequested,
    SuggestionRequested,
    RecoveryRequested,
}

/// What the caller must do after an event, beyond re-reading state.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Call [`TriageSession::poll_debounce`] once this deadline passes.
    DebounceScheduled(Instant),
    ShowCare(CarePanel),
    ShowRecovery(String),
}

// ═══════════════════════════════════════════════════════════
// Age input debouncing
// ═══════════════════════════════════════════════════════════

/// Coalesces rapid age inputs: each input restarts the window, and the
/// pending value fires at most once when the window elapses. Pure over an
/// injected clock; the embedding shell owns real timers.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<(u8, Instant)>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record an input, restarting the window. Returns the new deadline.
    pub fn note(&mut self, age: u8, now: Instant) -> Instant {
        let deadline = now + self.window;
        self.pending = Some((age, deadline));
        deadline
    }

    /// Take the pending value if its window has elapsed.
    pub fn fire_due(&mut self, now: Instant) -> Option<u8> {
        match self.pending {
            Some((age, deadline)) if now >= deadline => {
                self.pending = None;
                Some(age)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

// ═══════════════════════════════════════════════════════════
// Catalog fetch generation guard
// ═══════════════════════════════════════════════════════════

/// Ticket for one catalog fetch. Responses carrying a ticket older than
/// the latest issued are discarded — overlapping fetches have no ordering
/// guarantee otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogTicket {
    generation: u64,
}

// ═══════════════════════════════════════════════════════════
// TriageSession
// ═══════════════════════════════════════════════════════════

/// The client session state machine.
///
/// Generic over the backend seam so the full event flow is testable
/// without a server.
pub struct TriageSession<B: TriageBackend> {
    backend: B,
    age: Option<u8>,
    catalog: Catalog,
    catalog_empty_for_age: bool,
    filter: CatalogFilter,
    selection: SelectionSet,
    status: StatusLine,
    view: Option<PredictionView>,
    top: Option<Prediction>,
    debounce: Debouncer,
    catalog_gen: u64,
    recovery: RecoveryCache,
}

impl TriageSession<HttpBackend> {
    /// Session against the backend from `SYMPTA_BASE_URL`.
    pub fn from_env() -> Self {
        Self::new(HttpBackend::from_env())
    }
}

impl<B: TriageBackend> TriageSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            age: None,
            catalog: Catalog::empty(),
            catalog_empty_for_age: false,
            filter: CatalogFilter::default(),
            selection: SelectionSet::new(),
            status: StatusLine::clear(),
            view: None,
            top: None,
            debounce: Debouncer::new(AGE_DEBOUNCE),
            catalog_gen: 0,
            recovery: RecoveryCache::new(),
        }
    }

    // ── Event dispatch ──────────────────────────────────────

    pub fn handle(&mut self, event: SessionEvent, now: Instant) -> Effect {
        match event {
            SessionEvent::AgeInput(raw) => self.age_input(&raw, now),
            SessionEvent::QueryChanged(query) => {
                self.filter.query = query;
                Effect::None
            }
            SessionEvent::CategoryChanged(category) => {
                self.filter.category = category;
                Effect::None
            }
            SessionEvent::SymptomToggled(symptom) => {
                self.selection.toggle(&symptom);
                Effect::None
            }
            SessionEvent::SubmitRequested => {
                self.submit();
                Effect::None
            }
            SessionEvent::ResetRequested => {
                self.reset();
                Effect::None
            }
            SessionEvent::RemediesRequested => self.remedies(),
            SessionEvent::SuggestionRequested => self.suggestion(),
            SessionEvent::RecoveryRequested => self.recovery_estimate(),
        }
    }

    // ── Age input ───────────────────────────────────────────

    fn age_input(&mut self, raw: &str, now: Instant) -> Effect {
        let Some(age) = parse_age(raw) else {
            // Non-numeric input: summary keeps the last valid age.
            return Effect::None;
        };
        self.age = Some(age);
        Effect::DebounceScheduled(self.debounce.note(age, now))
    }

    /// Run the debounced catalog fetch if its window has elapsed.
    /// Returns whether a fetch ran.
    pub fn poll_debounce(&mut self, now: Instant) -> bool {
        match self.debounce.fire_due(now) {
            Some(age) => {
                self.load_catalog(age);
                true
            }
            None => false,
        }
    }

    // ── Catalog load ────────────────────────────────────────

    /// Fetch and apply the catalog for an age in one step.
    pub fn load_catalog(&mut self, age: u8) {
        let ticket = self.begin_catalog_load();
        let result = self.backend.fetch_symptoms(age);
        self.apply_catalog_load(ticket, result);
    }

    /// Issue a fetch ticket. Split from [`apply_catalog_load`] so a driver
    /// running overlapping fetches can hand responses back in any order.
    pub fn begin_catalog_load(&mut self) -> CatalogTicket {
        self.catalog_gen += 1;
        self.status = StatusLine::muted(MSG_FETCHING);
        CatalogTicket {
            generation: self.catalog_gen,
        }
    }

    /// Apply a fetch outcome. Stale tickets are discarded outright.
    pub fn apply_catalog_load(
        &mut self,
        ticket: CatalogTicket,
        result: Result<SymptomsResponse, ApiError>,
    ) {
        if ticket.generation != self.catalog_gen {
            tracing::debug!(
                stale = ticket.generation,
                latest = self.catalog_gen,
                "Discarding stale catalog response"
            );
            return;
        }
        match result {
            Ok(resp) => {
                if let Some(error) = &resp.error {
                    tracing::warn!(error = %error, "Symptom fetch reported a backend error");
                }
                // Catalog replacement always clears the selection,
                // whether the new list is full or empty.
                self.selection.clear();
                if resp.symptoms.is_empty() {
                    self.catalog = Catalog::empty();
                    self.catalog_empty_for_age = true;
                    self.status = StatusLine::warn(MSG_NO_SYMPTOMS);
                } else {
                    let count = resp.symptoms.len();
                    self.catalog = Catalog::new(resp.symptoms);
                    self.catalog_empty_for_age = false;
                    self.status = StatusLine::ok(format!("Loaded {count} symptoms."));
                }
            }
            Err(e) => {
                // Transport failure: keep whatever catalog was there.
                tracing::warn!(error = %e, "Symptom fetch failed");
                self.status = StatusLine::danger(MSG_FETCH_FAILED);
            }
        }
    }

    // ── Submit ──────────────────────────────────────────────

    /// Run the prediction pipeline. Preconditions are checked in order and
    /// each failure reports its own status without touching state.
    pub fn submit(&mut self) {
        let Some(age) = self.age else {
            self.status = StatusLine::warn(MSG_INVALID_AGE);
            return;
        };
        if self.catalog.is_empty() {
            self.status = StatusLine::warn(MSG_NO_CATALOG);
            return;
        }
        if self.selection.is_empty() {
            self.status = StatusLine::warn(MSG_EMPTY_SELECTION);
            return;
        }

        self.status = StatusLine::muted(MSG_PREDICTING);
        let symptoms = self.selection.snapshot();
        match self.backend.predict(age, &symptoms) {
            Ok(resp) => self.apply_prediction(resp),
            Err(e) => {
                // Single attempt per explicit submit; no retry.
                tracing::warn!(error = %e, "Prediction request failed");
                self.status = StatusLine::danger(MSG_PREDICT_FAILED);
            }
        }
    }

    fn apply_prediction(&mut self, resp: PredictResponse) {
        if let Some(error) = resp.error {
            // Surfaced verbatim; nothing from a failed response renders.
            self.status = StatusLine::danger(error);
            return;
        }
        let Some(top) = resp.top_prediction else {
            tracing::warn!("Prediction response missing top result");
            self.status = StatusLine::danger(MSG_PREDICT_FAILED);
            return;
        };
        self.view = Some(build_view(&top, &resp.other_predictions));
        self.top = Some(top);
        self.status = StatusLine::clear();
    }

    // ── Care guidance ───────────────────────────────────────

    fn remedies(&self) -> Effect {
        match &self.top {
            // The remedies action exists only for mild/moderate results.
            Some(top) if resolve_actions(top).offer_remedies => {
                Effect::ShowCare(remedies_panel(top))
            }
            _ => Effect::None,
        }
    }

    fn suggestion(&self) -> Effect {
        match &self.top {
            Some(top) => Effect::ShowCare(suggestion_panel(top)),
            None => Effect::None,
        }
    }

    // ── Recovery estimate ───────────────────────────────────

    fn recovery_estimate(&self) -> Effect {
        let (Some(top), Some(age)) = (&self.top, self.age) else {
            return Effect::None;
        };
        let group = AgeGroup::from_age(age);
        let severity_key = top.severity_key();
        let message = match self.recovery.get_or_fetch(&self.backend) {
            Ok(table) => match table.lookup(group, &top.disease, &severity_key) {
                Some(window) => estimate_sentence(&top.disease, group, &severity_key, window),
                None => RECOVERY_UNAVAILABLE_MSG.to_string(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Recovery table fetch failed");
                RECOVERY_UNAVAILABLE_MSG.to_string()
            }
        };
        Effect::ShowRecovery(message)
    }

    // ── Reset ───────────────────────────────────────────────

    /// Synchronously restore the initial state: empty catalog, empty
    /// selection, cleared filters and displays. The cached recovery table
    /// survives — reference data, fetched at most once per session.
    pub fn reset(&mut self) {
        self.age = None;
        self.catalog = Catalog::empty();
        self.catalog_empty_for_age = false;
        self.filter = CatalogFilter::default();
        self.selection.clear();
        self.status = StatusLine::clear();
        self.view = None;
        self.top = None;
        self.debounce.cancel();
        // Invalidate any fetch still in flight.
        self.catalog_gen += 1;
    }

    // ── Read access ─────────────────────────────────────────

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn age(&self) -> Option<u8> {
        self.age
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The filtered, render-capped symptom rows.
    pub fn visible_symptoms(&self) -> Vec<&str> {
        self.catalog.visible(&self.filter)
    }

    /// Empty-state marker when the last load found no symptoms for the
    /// entered age — a valid empty state, not an error.
    pub fn catalog_note(&self) -> Option<&'static str> {
        self.catalog_empty_for_age.then_some(EMPTY_CATALOG_NOTE)
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::for_age(self.age, self.selection.len())
    }

    /// The last successful prediction's render plan, if any. Its absence
    /// means the results, guidance, recovery, and export surfaces are
    /// hidden.
    pub fn prediction(&self) -> Option<&PredictionView> {
        self.view.as_ref()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
