//! Client-side search state.
//!
//! The committed [`SearchState`] and its query-string encoding are the single
//! source of truth for which filters are active. [`SearchController`] keeps
//! staged (uncommitted) edits apart from the committed state, issues a
//! [`FetchTicket`] whenever the committed query string changes, and only
//! applies a fetch result if its ticket still matches the committed query.

use thiserror::Error;

use crate::domain::advocate::Advocate;
use crate::domain::filter::{DEFAULT_PAGE, PageSize, parse_lenient_int, split_list};
use crate::dto::api::{AdvocatesQuery, AdvocatesResponse};
use crate::pagination::Pagination;

#[cfg(feature = "client")]
pub mod http;

/// Path of the listing endpoint the controller fetches from.
pub const ADVOCATES_PATH: &str = "/api/advocates";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Failed to fetch advocates (status {0})")]
    Status(u16),

    #[error("Failed to fetch advocates: {0}")]
    Transport(String),
}

pub type SearchResult<T> = Result<T, SearchError>;

/// Transport used by [`SearchController`] to run a listing query.
pub trait AdvocateSource {
    /// Fetches the listing for an encoded query string (without leading `?`).
    fn fetch_advocates(&self, query: &str) -> impl Future<Output = SearchResult<AdvocatesResponse>>;
}

/// Filter values as they appear in the navigable URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    pub search: String,
    pub specialties: Vec<String>,
    pub degree: String,
    /// Zero means no experience filter.
    pub min_experience: u32,
    pub page: usize,
    pub limit: PageSize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            search: String::new(),
            specialties: Vec::new(),
            degree: String::new(),
            min_experience: 0,
            page: DEFAULT_PAGE,
            limit: PageSize::default(),
        }
    }
}

impl SearchState {
    /// Encodes the state, omitting empty and default values.
    pub fn to_query_string(&self) -> String {
        let specialties = self
            .specialties
            .iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let params = AdvocatesQuery {
            search: Some(self.search.clone()).filter(|s| !s.is_empty()),
            specialties: Some(specialties).filter(|s| !s.is_empty()),
            degree: Some(self.degree.clone()).filter(|s| !s.is_empty()),
            min_experience: Some(self.min_experience)
                .filter(|n| *n > 0)
                .map(|n| n.to_string()),
            page: Some(self.page)
                .filter(|p| *p > DEFAULT_PAGE)
                .map(|p| p.to_string()),
            limit: Some(self.limit)
                .filter(|l| *l != PageSize::default())
                .map(|l| l.get().to_string()),
        };

        serde_html_form::to_string(&params).unwrap_or_else(|err| {
            log::error!("Failed to encode search state: {err}");
            String::new()
        })
    }

    /// Decodes a query string leniently; unusable values fall back to defaults.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params: AdvocatesQuery = serde_html_form::from_str(query).unwrap_or_else(|err| {
            log::warn!("Ignoring malformed search query {query:?}: {err}");
            AdvocatesQuery::default()
        });

        let page = parse_lenient_int(params.page.as_deref())
            .filter(|p| *p >= 1)
            .and_then(|p| usize::try_from(p).ok())
            .unwrap_or(DEFAULT_PAGE);

        Self {
            search: params.search.unwrap_or_default(),
            specialties: split_list(params.specialties.as_deref()),
            degree: params.degree.unwrap_or_default(),
            min_experience: parse_lenient_int(params.min_experience.as_deref())
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0),
            page,
            limit: PageSize::from_requested(parse_lenient_int(params.limit.as_deref())),
        }
    }

    /// True when no filter (search, specialties, degree, experience) is set.
    pub fn has_no_filters(&self) -> bool {
        self.search.is_empty()
            && self.specialties.is_empty()
            && self.degree.is_empty()
            && self.min_experience == 0
    }

    /// Adds the specialty, or removes it when already selected.
    pub fn toggle_specialty(&mut self, specialty: &str) {
        if let Some(pos) = self.specialties.iter().position(|s| s == specialty) {
            self.specialties.remove(pos);
        } else {
            self.specialties.push(specialty.to_string());
        }
    }
}

/// Identifies one fetch by the committed query string it was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    query: String,
}

impl FetchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Request path including the query string.
    pub fn path(&self) -> String {
        if self.query.is_empty() {
            ADVOCATES_PATH.to_string()
        } else {
            format!("{ADVOCATES_PATH}?{}", self.query)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Showing the last successfully fetched page.
    Idle,
    Loading,
    /// The latest fetch failed; any data shown is from an earlier query.
    Error(String),
}

pub struct SearchController<S> {
    source: S,
    committed: SearchState,
    query: String,
    staged: SearchState,
    status: SearchStatus,
    advocates: Vec<Advocate>,
    pagination: Pagination,
}

impl<S: AdvocateSource> SearchController<S> {
    /// Restores the committed state from a URL query string. The controller
    /// starts in [`SearchStatus::Loading`]; run [`Self::refresh`] or resolve
    /// [`Self::ticket`] to load the first page.
    pub fn new(source: S, url_query: &str) -> Self {
        let committed = SearchState::from_query_string(url_query);
        let query = committed.to_query_string();

        Self {
            source,
            staged: committed.clone(),
            committed,
            query,
            status: SearchStatus::Loading,
            advocates: Vec::new(),
            pagination: Pagination::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> &SearchState {
        &self.committed
    }

    /// Encoded committed state, i.e. the query part of the navigable URL.
    pub fn query_string(&self) -> &str {
        &self.query
    }

    pub fn staged(&self) -> &SearchState {
        &self.staged
    }

    /// Local filter edits; nothing is fetched until [`Self::submit`].
    pub fn staged_mut(&mut self) -> &mut SearchState {
        &mut self.staged
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SearchStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn advocates(&self) -> &[Advocate] {
        &self.advocates
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Ticket for the currently committed query.
    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            query: self.query.clone(),
        }
    }

    /// Commits the staged filters, starting over from the first page.
    pub fn submit(&mut self) -> Option<FetchTicket> {
        let mut next = self.staged.clone();
        next.page = DEFAULT_PAGE;
        self.commit(next)
    }

    pub fn set_page(&mut self, page: usize) -> Option<FetchTicket> {
        let mut next = self.committed.clone();
        next.page = page.max(DEFAULT_PAGE);
        self.commit(next)
    }

    /// Changes the page size; the page offset no longer applies, so the page
    /// resets to the first one.
    pub fn set_limit(&mut self, limit: PageSize) -> Option<FetchTicket> {
        let mut next = self.committed.clone();
        next.limit = limit;
        next.page = DEFAULT_PAGE;
        self.commit(next)
    }

    /// Drops every filter and returns to the unfiltered first page.
    pub fn clear(&mut self) -> Option<FetchTicket> {
        self.commit(SearchState::default())
    }

    /// Follows an external URL change such as history navigation.
    pub fn navigate(&mut self, url_query: &str) -> Option<FetchTicket> {
        self.commit(SearchState::from_query_string(url_query))
    }

    /// Makes `next` the committed state. Returns a ticket only when the
    /// encoded query string actually changed.
    fn commit(&mut self, next: SearchState) -> Option<FetchTicket> {
        let query = next.to_query_string();
        if query == self.query {
            return None;
        }

        log::debug!("Search query changed from {:?} to {query:?}", self.query);

        self.committed = SearchState::from_query_string(&query);
        self.staged = self.committed.clone();
        self.query = query;
        self.status = SearchStatus::Loading;
        Some(self.ticket())
    }

    /// Applies a fetch result unless a newer query has been committed since
    /// the ticket was issued. Returns whether the result was applied.
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        result: SearchResult<AdvocatesResponse>,
    ) -> bool {
        if ticket.query != self.query {
            log::debug!("Dropping stale result for {:?}", ticket.query);
            return false;
        }

        match result {
            Ok(response) => {
                self.advocates = response.data;
                self.pagination = response.pagination;
                self.status = SearchStatus::Idle;
            }
            Err(err) => {
                log::warn!("Advocate search failed: {err}");
                self.status = SearchStatus::Error(err.to_string());
            }
        }
        true
    }

    /// Fetches the committed query and applies the result.
    pub async fn refresh(&mut self) -> bool {
        let ticket = self.ticket();
        self.status = SearchStatus::Loading;
        let result = self.source.fetch_advocates(ticket.query()).await;
        self.resolve(&ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::Utc;

    use super::*;
    use crate::domain::types::{AdvocateId, PhoneNumber};

    #[derive(Default)]
    struct StubSource {
        total: usize,
        fail: bool,
        calls: RefCell<Vec<String>>,
    }

    impl AdvocateSource for StubSource {
        async fn fetch_advocates(&self, query: &str) -> SearchResult<AdvocatesResponse> {
            self.calls.borrow_mut().push(query.to_string());
            if self.fail {
                return Err(SearchError::Status(500));
            }
            let state = SearchState::from_query_string(query);
            Ok(response(state.page, state.limit.get(), self.total, 1))
        }
    }

    fn advocate(id: i32) -> Advocate {
        Advocate {
            id: AdvocateId::new(id).unwrap(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            city: "Austin".into(),
            degree: "MD".into(),
            specialties: vec!["Oncology".into()],
            years_of_experience: 5,
            phone_number: PhoneNumber::new(5551234567).unwrap(),
            created_at: Utc::now().naive_utc(),
        }
    }

    fn response(page: usize, limit: usize, total: usize, first_id: i32) -> AdvocatesResponse {
        AdvocatesResponse {
            data: vec![advocate(first_id)],
            pagination: Pagination::new(page, limit, total),
        }
    }

    fn controller(url: &str) -> SearchController<StubSource> {
        SearchController::new(StubSource::default(), url)
    }

    #[test]
    fn empty_state_encodes_to_empty_query() {
        assert_eq!(SearchState::default().to_query_string(), "");
    }

    #[test]
    fn encoding_omits_sentinels_and_defaults() {
        let state = SearchState {
            search: "jane".into(),
            specialties: vec![],
            degree: String::new(),
            min_experience: 0,
            page: 1,
            limit: PageSize::TwentyFive,
        };
        assert_eq!(state.to_query_string(), "search=jane");
    }

    #[test]
    fn encoding_round_trips_all_filters() {
        let state = SearchState {
            search: "San Jose".into(),
            specialties: vec!["Bipolar".into(), "LGBTQ".into()],
            degree: "MD".into(),
            min_experience: 5,
            page: 3,
            limit: PageSize::Hundred,
        };
        let query = state.to_query_string();
        assert_eq!(
            query,
            "search=San+Jose&specialties=Bipolar%2CLGBTQ&degree=MD&minExperience=5&page=3&limit=100"
        );
        assert_eq!(SearchState::from_query_string(&query), state);
    }

    #[test]
    fn decoding_is_lenient() {
        let state =
            SearchState::from_query_string("?minExperience=abc&page=0&limit=50&specialties=,A,");
        assert_eq!(state.min_experience, 0);
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, PageSize::TwentyFive);
        assert_eq!(state.specialties, vec!["A"]);
    }

    #[test]
    fn toggle_specialty_adds_and_removes() {
        let mut state = SearchState::default();
        state.toggle_specialty("Bipolar");
        state.toggle_specialty("LGBTQ");
        state.toggle_specialty("Bipolar");
        assert_eq!(state.specialties, vec!["LGBTQ"]);
    }

    #[test]
    fn staged_edits_do_not_commit() {
        let mut controller = controller("");
        controller.staged_mut().search = "jane".into();

        assert_eq!(controller.query_string(), "");
        assert_eq!(controller.state().search, "");
    }

    #[test]
    fn submit_commits_staged_filters_on_first_page() {
        let mut controller = controller("page=4");
        controller.staged_mut().search = "jane".into();
        controller.staged_mut().min_experience = 3;

        let ticket = controller.submit().unwrap();

        assert_eq!(ticket.query(), "search=jane&minExperience=3");
        assert_eq!(ticket.path(), "/api/advocates?search=jane&minExperience=3");
        assert_eq!(controller.state().page, 1);
        assert!(controller.is_loading());
    }

    #[test]
    fn navigation_commits_the_new_url_and_resyncs_staged_filters() {
        let mut controller = controller("search=jane&page=3");
        controller.staged_mut().degree = "MD".into();

        let ticket = controller.navigate("?specialties=Bipolar&limit=10").unwrap();

        assert_eq!(ticket.query(), "specialties=Bipolar&limit=10");
        assert_eq!(controller.state().specialties, vec!["Bipolar"]);
        assert_eq!(controller.state().page, 1);
        assert_eq!(controller.staged(), controller.state());
        assert!(controller.is_loading());

        assert!(controller.navigate("specialties=Bipolar&limit=10").is_none());
    }

    #[test]
    fn unchanged_query_triggers_no_fetch() {
        let mut controller = controller("search=jane");
        assert!(controller.submit().is_none());
        assert!(controller.set_page(1).is_none());
    }

    #[test]
    fn changing_page_size_resets_to_first_page() {
        let mut controller = controller("page=3");
        let ticket = controller.set_limit(PageSize::Hundred).unwrap();

        assert_eq!(ticket.query(), "limit=100");
        assert_eq!(controller.state().page, 1);
        assert_eq!(controller.state().limit, PageSize::Hundred);
    }

    #[test]
    fn clear_removes_every_parameter() {
        let mut controller =
            controller("search=jane&specialties=Bipolar&degree=MD&minExperience=4&page=2");
        let ticket = controller.clear().unwrap();

        assert_eq!(ticket.query(), "");
        assert_eq!(ticket.path(), ADVOCATES_PATH);
        assert!(controller.state().has_no_filters());
        assert_eq!(controller.state().page, 1);
        assert!(controller.staged().has_no_filters());
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut controller = controller("");
        let first = controller.set_page(2).unwrap();
        let second = controller.set_page(3).unwrap();

        assert!(!controller.resolve(&first, Ok(response(2, 25, 100, 26))));
        assert!(controller.is_loading());
        assert!(controller.advocates().is_empty());

        assert!(controller.resolve(&second, Ok(response(3, 25, 100, 51))));
        assert_eq!(controller.status(), &SearchStatus::Idle);
        assert_eq!(controller.advocates()[0].id.get(), 51);
        assert_eq!(controller.pagination().page, 3);
    }

    #[test]
    fn stale_errors_are_dropped_too() {
        let mut controller = controller("");
        let first = controller.set_page(2).unwrap();
        let _second = controller.set_page(3).unwrap();

        assert!(!controller.resolve(&first, Err(SearchError::Status(500))));
        assert!(controller.error().is_none());
    }

    #[test]
    fn failures_keep_previous_data_but_report_error() {
        let mut controller = controller("");
        let ticket = controller.ticket();
        controller.resolve(&ticket, Ok(response(1, 25, 1, 1)));

        let ticket = controller.set_page(2).unwrap();
        controller.resolve(&ticket, Err(SearchError::Transport("offline".into())));

        assert_eq!(controller.error(), Some("Failed to fetch advocates: offline"));
        assert_eq!(controller.advocates().len(), 1);
    }

    #[actix_web::test]
    async fn refresh_fetches_committed_query() {
        let mut controller = SearchController::new(
            StubSource {
                total: 47,
                ..StubSource::default()
            },
            "page=2",
        );

        assert!(controller.refresh().await);

        assert_eq!(controller.status(), &SearchStatus::Idle);
        assert_eq!(controller.pagination(), &Pagination::new(2, 25, 47));
        assert_eq!(controller.source().calls.borrow().as_slice(), ["page=2"]);
    }

    #[actix_web::test]
    async fn refresh_reports_transport_errors() {
        let mut controller = SearchController::new(
            StubSource {
                fail: true,
                ..StubSource::default()
            },
            "",
        );

        assert!(controller.refresh().await);
        assert_eq!(
            controller.status(),
            &SearchStatus::Error("Failed to fetch advocates (status 500)".into())
        );
    }
}
