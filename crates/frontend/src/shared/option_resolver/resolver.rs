//! Option list and selection behind the async multi-select.
//!
//! Each search gets a [`SearchTicket`]. Starting a new search cancels the
//! token of the previous one, and a completion is applied only when its
//! ticket is still the current one, so a slow early response can never
//! overwrite a later result.

use contracts::shared::filters::TaggedId;

use super::cancel::Cancellation;
use super::source::{filter_static, OptionSource};
use crate::shared::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Request was cancelled, never shown to the user
    Aborted,
    Failed(String),
}

impl From<ApiError> for ResolveError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Aborted => ResolveError::Aborted,
            other => ResolveError::Failed(other.to_string()),
        }
    }
}

/// What happened to a completed search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer search superseded this one
    Stale,
    Aborted,
    Failed(String),
}

pub struct OptionResolver<C: Cancellation> {
    source: OptionSource,
    permanent_ids: Vec<String>,
    max_selected: Option<usize>,
    recent: Vec<TaggedId>,
    query: String,
    results: Vec<TaggedId>,
    selected: Vec<TaggedId>,
    generation: u64,
    in_flight: Option<(SearchTicket, C)>,
    error: Option<String>,
}

impl<C: Cancellation> OptionResolver<C> {
    pub fn new(source: OptionSource) -> Self {
        let results = match &source {
            OptionSource::Static(options) => options.clone(),
            OptionSource::Remote(_) => Vec::new(),
        };
        Self {
            source,
            permanent_ids: Vec::new(),
            max_selected: None,
            recent: Vec::new(),
            query: String::new(),
            results,
            selected: Vec::new(),
            generation: 0,
            in_flight: None,
            error: None,
        }
    }

    pub fn with_permanent_ids(mut self, ids: Vec<String>) -> Self {
        self.permanent_ids = ids;
        self.normalize_selection();
        self
    }

    pub fn with_max_selected(mut self, max: Option<usize>) -> Self {
        self.max_selected = max;
        self.normalize_selection();
        self
    }

    pub fn with_recent(mut self, recent: Vec<TaggedId>) -> Self {
        self.recent = recent;
        self
    }

    pub fn with_selected(mut self, selected: Vec<TaggedId>) -> Self {
        self.set_selected(selected);
        self
    }

    pub fn source(&self) -> &OptionSource {
        &self.source
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_recent(&mut self, recent: Vec<TaggedId>) {
        self.recent = recent;
    }

    /// Record the typed text. Static sources resolve immediately; returns
    /// true when a remote search has to be started.
    pub fn set_query(&mut self, query: &str) -> bool {
        self.query = query.to_string();
        match &self.source {
            OptionSource::Static(options) => {
                self.results = filter_static(options, query);
                false
            }
            OptionSource::Remote(_) => true,
        }
    }

    /// Start a remote search, cancelling the one still in flight
    pub fn begin_search(&mut self, query: &str, token: C) -> SearchTicket {
        if let Some((_, previous)) = self.in_flight.take() {
            previous.cancel();
        }
        self.query = query.to_string();
        self.generation += 1;
        let ticket = SearchTicket {
            generation: self.generation,
        };
        self.in_flight = Some((ticket, token));
        self.error = None;
        ticket
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        matches!(&self.in_flight, Some((current, _)) if *current == ticket)
    }

    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<TaggedId>, ResolveError>,
    ) -> FetchOutcome {
        if !self.is_current(ticket) {
            return FetchOutcome::Stale;
        }
        let cancelled = self
            .in_flight
            .take()
            .map(|(_, token)| token.is_cancelled())
            .unwrap_or(false);
        match result {
            _ if cancelled => FetchOutcome::Aborted,
            Err(ResolveError::Aborted) => FetchOutcome::Aborted,
            Err(ResolveError::Failed(message)) => {
                self.error = Some(message.clone());
                FetchOutcome::Failed(message)
            }
            Ok(options) => {
                self.results = options;
                FetchOutcome::Applied
            }
        }
    }

    /// Abort whatever is in flight, e.g. when the control unmounts
    pub fn cancel_pending(&mut self) {
        if let Some((_, token)) = self.in_flight.take() {
            token.cancel();
        }
    }

    pub fn is_permanent(&self, id: &str) -> bool {
        self.permanent_ids.iter().any(|p| p == id)
    }

    fn lookup(&self, id: &str) -> Option<&TaggedId> {
        let static_options: &[TaggedId] = match &self.source {
            OptionSource::Static(options) => options,
            OptionSource::Remote(_) => &[],
        };
        self.results
            .iter()
            .chain(self.recent.iter())
            .chain(static_options.iter())
            .chain(self.selected.iter())
            .find(|o| o.id == id)
    }

    /// Permanent options with the best label known so far
    pub fn permanent_options(&self) -> Vec<TaggedId> {
        self.permanent_ids
            .iter()
            .map(|id| {
                self.lookup(id)
                    .cloned()
                    .unwrap_or_else(|| TaggedId::new(id.clone(), id.clone()))
            })
            .collect()
    }

    /// Permanent first, then recent matching the query, then results;
    /// each id appears once
    pub fn visible_options(&self) -> Vec<TaggedId> {
        let query = self.query.trim().to_lowercase();
        let recent = self
            .recent
            .iter()
            .filter(|r| query.is_empty() || r.label.to_lowercase().contains(&query))
            .cloned();

        let mut out: Vec<TaggedId> = Vec::new();
        for option in self
            .permanent_options()
            .into_iter()
            .chain(recent)
            .chain(self.results.iter().cloned())
        {
            if !out.iter().any(|o| o.id == option.id) {
                out.push(option);
            }
        }
        out
    }

    pub fn selected(&self) -> &[TaggedId] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s.id == id)
    }

    pub fn set_selected(&mut self, selected: Vec<TaggedId>) {
        let mut unique: Vec<TaggedId> = Vec::with_capacity(selected.len());
        for option in selected {
            if !unique.iter().any(|o| o.id == option.id) {
                unique.push(option);
            }
        }
        self.selected = unique;
        self.normalize_selection();
    }

    pub fn select(&mut self, option: TaggedId) -> bool {
        if self.is_selected(&option.id) {
            return false;
        }
        self.selected.push(option);
        self.enforce_limit();
        true
    }

    /// Permanent options cannot be removed
    pub fn deselect(&mut self, id: &str) -> bool {
        if self.is_permanent(id) {
            return false;
        }
        let before = self.selected.len();
        self.selected.retain(|s| s.id != id);
        before != self.selected.len()
    }

    pub fn toggle(&mut self, option: TaggedId) -> bool {
        if self.is_selected(&option.id) {
            self.deselect(&option.id)
        } else {
            self.select(option)
        }
    }

    /// Drop everything the user may remove
    pub fn clear_selection(&mut self) {
        let permanent = self.permanent_ids.clone();
        self.selected.retain(|s| permanent.contains(&s.id));
    }

    fn normalize_selection(&mut self) {
        for option in self.permanent_options() {
            if !self.is_selected(&option.id) {
                self.selected.insert(0, option);
            }
        }
        self.enforce_limit();
    }

    /// Oldest non-permanent selections go first
    fn enforce_limit(&mut self) {
        let Some(max) = self.max_selected else {
            return;
        };
        while self.selected.len() > max {
            let oldest = self
                .selected
                .iter()
                .position(|s| !self.permanent_ids.contains(&s.id));
            match oldest {
                Some(index) => {
                    self.selected.remove(index);
                }
                None => {
                    log::warn!(
                        "{} permanent options exceed the limit of {}",
                        self.selected.len(),
                        max
                    );
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::option_resolver::cancel::CancelToken;

    fn opt(id: &str) -> TaggedId {
        TaggedId::new(id, format!("Trailer {}", id))
    }

    fn remote() -> OptionResolver<CancelToken> {
        OptionResolver::new(OptionSource::remote("/api/assets/options"))
    }

    fn ids(options: &[TaggedId]) -> Vec<&str> {
        options.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_stale_response_is_not_shown() {
        let mut r = remote();
        let slow_token = CancelToken::new();
        let slow = r.begin_search("500", slow_token.clone());
        let fast = r.begin_search("5000", CancelToken::new());

        // the superseded request was cancelled, not merely ignored
        assert!(slow_token.is_cancelled());

        assert_eq!(r.complete(fast, Ok(vec![opt("5000")])), FetchOutcome::Applied);
        assert_eq!(r.complete(slow, Ok(vec![opt("500")])), FetchOutcome::Stale);
        assert_eq!(ids(&r.visible_options()), vec!["5000"]);
    }

    #[test]
    fn test_stale_response_arriving_first_is_dropped() {
        let mut r = remote();
        let slow = r.begin_search("500", CancelToken::new());
        let fast = r.begin_search("5000", CancelToken::new());
        assert_eq!(r.complete(slow, Ok(vec![opt("500")])), FetchOutcome::Stale);
        assert!(r.visible_options().is_empty());
        assert!(r.is_loading());
        r.complete(fast, Ok(vec![opt("5000")]));
        assert!(!r.is_loading());
    }

    #[test]
    fn test_abort_is_silent() {
        let mut r = remote();
        let first = r_begin(&mut r, "tr");
        r.complete(first, Ok(vec![opt("1")]));
        let t = r.begin_search("tra", CancelToken::new());
        assert_eq!(r.complete(t, Err(ResolveError::Aborted)), FetchOutcome::Aborted);
        assert!(r.error().is_none());
        assert_eq!(ids(&r.visible_options()), vec!["1"]);
    }

    fn r_begin(r: &mut OptionResolver<CancelToken>, q: &str) -> SearchTicket {
        r.begin_search(q, CancelToken::new())
    }

    #[test]
    fn test_failure_is_reported() {
        let mut r = remote();
        let t = r_begin(&mut r, "x");
        let outcome = r.complete(t, Err(ResolveError::Failed("HTTP error: 500".into())));
        assert_eq!(outcome, FetchOutcome::Failed("HTTP error: 500".into()));
        assert_eq!(r.error(), Some("HTTP error: 500"));
    }

    #[test]
    fn test_cancel_pending() {
        let mut r = remote();
        let token = CancelToken::new();
        let t = r.begin_search("x", token.clone());
        r.cancel_pending();
        assert!(token.is_cancelled());
        assert_eq!(r.complete(t, Ok(vec![opt("1")])), FetchOutcome::Stale);
    }

    #[test]
    fn test_static_source_filters_locally() {
        let mut r: OptionResolver<CancelToken> =
            OptionResolver::new(OptionSource::Static(vec![opt("1"), TaggedId::new("2", "Reefer")]));
        assert!(!r.set_query("reef"));
        assert_eq!(ids(&r.visible_options()), vec!["2"]);
        r.set_query("");
        assert_eq!(r.visible_options().len(), 2);
    }

    #[test]
    fn test_visible_options_merge_permanent_and_recent() {
        let mut r = remote()
            .with_recent(vec![opt("7"), opt("8")])
            .with_permanent_ids(vec!["1".into()]);
        let t = r_begin(&mut r, "");
        r.complete(t, Ok(vec![opt("1"), opt("8"), opt("9")]));
        assert_eq!(ids(&r.visible_options()), vec!["1", "7", "8", "9"]);
        // the permanent option got its label from the results
        assert_eq!(r.permanent_options()[0].label, "Trailer 1");
    }

    #[test]
    fn test_permanent_always_selected_and_not_removable() {
        let mut r = remote()
            .with_permanent_ids(vec!["1".into()])
            .with_selected(vec![opt("2")]);
        assert!(r.is_selected("1"));
        assert!(!r.deselect("1"));
        assert!(r.deselect("2"));
        r.clear_selection();
        assert_eq!(ids(r.selected()), vec!["1"]);
    }

    #[test]
    fn test_limit_drops_oldest_non_permanent() {
        let mut r = remote()
            .with_permanent_ids(vec!["p".into()])
            .with_max_selected(Some(3));
        r.select(opt("a"));
        r.select(opt("b"));
        assert_eq!(ids(r.selected()), vec!["p", "a", "b"]);
        r.select(opt("c"));
        assert_eq!(ids(r.selected()), vec!["p", "b", "c"]);
        r.select(opt("d"));
        assert_eq!(ids(r.selected()), vec!["p", "c", "d"]);
    }

    #[test]
    fn test_select_is_idempotent_and_toggle() {
        let mut r = remote();
        assert!(r.select(opt("a")));
        assert!(!r.select(opt("a")));
        assert!(r.toggle(opt("a")));
        assert!(r.selected().is_empty());
    }
}
