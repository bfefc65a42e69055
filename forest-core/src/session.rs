//! Fetch lifecycle for the dashboard: who owns the displayed record, the
//! loading flag and the error banner, and which in-flight request is allowed
//! to write them.
//!
//! Requests are tagged with a monotonically increasing token. Only the most
//! recently issued token may apply its result, so the dashboard shows "last
//! request wins" rather than "last response wins" when fetches race. A
//! location-type switch invalidates every outstanding token outright.

use crate::filter::{FilterState, Selection};
use crate::model::{ForestRecord, LocationType};

/// Fixed user-facing message for transport failures and non-2xx statuses.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load forest data. Please try again.";

/// Identifies one issued fetch. Compared against the latest issued token
/// before any state-mutating step after a suspension point.
pub type FetchToken = u64;

/// Dashboard session: filter state plus the fetched record and its
/// bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub filter: FilterState,
    record: Option<ForestRecord>,
    loading: bool,
    error: Option<String>,
    issued: u64,
    current: Option<FetchToken>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn record(&self) -> Option<&ForestRecord> {
        self.record.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch location type. Stale data must never be shown under the new
    /// filter, so the displayed record, any error and all in-flight fetches
    /// are discarded along with the selection.
    pub fn set_location_type(&mut self, location_type: LocationType) {
        if self.filter.set_location_type(location_type) {
            self.record = None;
            self.error = None;
            self.loading = false;
            self.current = None;
        }
    }

    /// Start a fetch for the current selection.
    ///
    /// A no-op (`None`) when the selection is incomplete; that is not an
    /// error, the form simply is not ready. Otherwise raises the loading
    /// flag, clears the error banner, and returns the token plus the frozen
    /// selection for the caller to run the request with.
    pub fn begin_fetch(&mut self) -> Option<(FetchToken, Selection)> {
        let selection = self.filter.selection()?;
        self.issued += 1;
        self.current = Some(self.issued);
        self.loading = true;
        self.error = None;
        Some((self.issued, selection))
    }

    /// Whether this token still identifies the latest issued fetch. Any
    /// step taken after a suspension point must re-check this, including
    /// secondary requests chained off a successful fetch.
    pub fn is_current(&self, token: FetchToken) -> bool {
        self.current == Some(token)
    }

    /// Store a fetched record. Discarded (returns `false`) when a newer
    /// fetch has been issued since this token.
    pub fn apply_success(&mut self, token: FetchToken, record: ForestRecord) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.record = Some(record);
        true
    }

    /// Record a fetch failure. The previously displayed record is left
    /// untouched: failure does not blank a still-valid prior view.
    pub fn apply_failure(&mut self, token: FetchToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.error = Some(FETCH_ERROR_MESSAGE.to_string());
        true
    }

    /// Final step of every fetch, success or failure. Clears the loading
    /// flag only if this token is still the latest; otherwise a newer fetch
    /// owns the flag.
    pub fn finish(&mut self, token: FetchToken) {
        if self.is_current(token) {
            self.loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::RECORD_JSON;

    fn record() -> ForestRecord {
        serde_json::from_str(RECORD_JSON).unwrap()
    }

    fn session_with_selection() -> Session {
        let mut session = Session::new();
        session.filter.set_search_term("kerala");
        assert!(session.filter.select_location("kerala"));
        session
    }

    #[test]
    fn begin_fetch_is_noop_without_selection() {
        let mut session = Session::new();
        assert!(session.begin_fetch().is_none());
        assert!(!session.loading(), "no-op must not raise the loading flag");
        assert!(session.error().is_none());
    }

    #[test]
    fn successful_fetch_stores_record_and_clears_loading() {
        let mut session = session_with_selection();
        let (token, selection) = session.begin_fetch().unwrap();
        assert!(session.loading());
        assert_eq!(selection.name, "kerala");
        assert_eq!(selection.density, 30);

        assert!(session.apply_success(token, record()));
        session.finish(token);
        assert!(!session.loading());
        assert_eq!(session.record().unwrap().location, "kerala");
    }

    #[test]
    fn failure_sets_message_but_keeps_prior_record() {
        let mut session = session_with_selection();
        let (token, _) = session.begin_fetch().unwrap();
        session.apply_success(token, record());
        session.finish(token);

        session.filter.set_density(50);
        let (token2, _) = session.begin_fetch().unwrap();
        assert!(session.apply_failure(token2));
        session.finish(token2);

        assert_eq!(session.error(), Some(FETCH_ERROR_MESSAGE));
        assert!(session.record().is_some(), "prior view survives a failed refresh");
        assert!(!session.loading());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut session = session_with_selection();
        let (old, _) = session.begin_fetch().unwrap();
        session.filter.set_density(75);
        let (new, _) = session.begin_fetch().unwrap();

        // The old response arrives after the new request was issued.
        assert!(!session.apply_success(old, record()));
        assert!(session.record().is_none());
        // And the old finish must not clear the flag the new fetch owns.
        session.finish(old);
        assert!(session.loading());

        assert!(session.apply_success(new, record()));
        session.finish(new);
        assert!(!session.loading());
    }

    #[test]
    fn stale_failure_cannot_raise_error_banner() {
        let mut session = session_with_selection();
        let (old, _) = session.begin_fetch().unwrap();
        let (new, _) = session.begin_fetch().unwrap();
        assert!(!session.apply_failure(old));
        assert!(session.error().is_none());
        assert!(session.apply_failure(new));
    }

    #[test]
    fn token_goes_stale_once_a_newer_fetch_is_issued() {
        let mut session = session_with_selection();
        let (old, _) = session.begin_fetch().unwrap();
        assert!(session.is_current(old));

        // Even a successfully applied fetch stops being current the moment
        // a newer one starts: chained follow-ups (the analysis request)
        // must re-check before writing anything.
        assert!(session.apply_success(old, record()));
        session.finish(old);
        session.filter.set_density(50);
        let (new, _) = session.begin_fetch().unwrap();
        assert!(!session.is_current(old));
        assert!(session.is_current(new));

        session.set_location_type(LocationType::District);
        assert!(!session.is_current(new));
    }

    #[test]
    fn location_type_change_drops_record_and_inflight_fetches() {
        let mut session = session_with_selection();
        let (token, _) = session.begin_fetch().unwrap();
        session.apply_success(token, record());
        session.finish(token);

        let (inflight, _) = session.begin_fetch().unwrap();
        session.set_location_type(LocationType::District);

        assert!(session.record().is_none());
        assert_eq!(session.filter.selected_location(), "");
        assert_eq!(session.filter.search_term(), "");
        assert!(!session.loading());
        // The request issued before the switch may not write anything.
        assert!(!session.apply_success(inflight, record()));
        assert!(!session.apply_failure(inflight));
    }
}
