//! Dashboard view state
//!
//! Owns the fetched agent roster, the filter selections and the memoized
//! filtered view that the dashboard renders.

use std::cell::RefCell;
use std::sync::Arc;

use crate::api::ApiError;
use crate::models::{AgentRecord, FilterState, FilterUpdate};

/// Shown when the roster could not be fetched.
pub const FETCH_ERROR_MESSAGE: &str = "Error al cargar los datos. Por favor, intenta de nuevo más tarde.";

/// Narrow `agents` to the records matching both selectors, in input order.
///
/// A missing collection behaves like an empty one.
pub fn filter_agents(agents: Option<&[AgentRecord]>, filters: &FilterState) -> Vec<AgentRecord> {
    agents
        .unwrap_or_default()
        .iter()
        .filter(|agent| filters.matches(agent))
        .cloned()
        .collect()
}

/// Lifecycle of the roster fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready(Arc<Vec<AgentRecord>>),
    Failed(ApiError),
}

/// What the dashboard should render right now.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Loading,
    Failed(&'static str),
    Ready(Arc<Vec<AgentRecord>>),
}

struct FilteredCache {
    agents: Arc<Vec<AgentRecord>>,
    filters: FilterState,
    visible: Arc<Vec<AgentRecord>>,
}

pub struct DashboardController {
    fetch: FetchState,
    filters: FilterState,
    cache: RefCell<Option<FilteredCache>>,
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardController {
    pub fn new() -> Self {
        Self {
            fetch: FetchState::Loading,
            filters: FilterState::default(),
            cache: RefCell::new(None),
        }
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn filters(&self) -> FilterState {
        self.filters
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.fetch, FetchState::Loading)
    }

    /// Record the outcome of the roster fetch. Only the first outcome counts;
    /// a failed fetch stays failed until the page is reloaded.
    pub fn finish_fetch(&mut self, result: Result<Vec<AgentRecord>, ApiError>) {
        if !self.is_loading() {
            tracing::debug!("Ignoring late roster fetch result");
            return;
        }

        self.fetch = match result {
            Ok(agents) => {
                tracing::info!("Loaded {} agents", agents.len());
                FetchState::Ready(Arc::new(agents))
            }
            Err(e) => {
                tracing::error!("Failed to load agents: {}", e);
                FetchState::Failed(e)
            }
        };
    }

    pub fn apply_filter(&mut self, update: FilterUpdate) {
        self.filters.merge(update);
    }

    /// Filtered records, recomputed only when the roster or the filters changed
    /// since the last call.
    pub fn visible(&self) -> Arc<Vec<AgentRecord>> {
        let agents = match &self.fetch {
            FetchState::Ready(agents) => agents,
            _ => return Arc::new(Vec::new()),
        };

        let mut cache = self.cache.borrow_mut();
        if let Some(cached) = cache.as_ref() {
            if Arc::ptr_eq(&cached.agents, agents) && cached.filters == self.filters {
                return cached.visible.clone();
            }
        }

        let visible = Arc::new(filter_agents(Some(agents.as_slice()), &self.filters));
        *cache = Some(FilteredCache {
            agents: agents.clone(),
            filters: self.filters,
            visible: visible.clone(),
        });
        visible
    }

    pub fn view(&self) -> DashboardView {
        match &self.fetch {
            FetchState::Loading => DashboardView::Loading,
            FetchState::Failed(_) => DashboardView::Failed(FETCH_ERROR_MESSAGE),
            FetchState::Ready(_) => DashboardView::Ready(self.visible()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgentStatus, Selector, Team};
    use crate::server::roster::mock_agents;

    fn names(agents: &[AgentRecord]) -> Vec<&str> {
        agents.iter().map(|a| a.name.as_str()).collect()
    }

    fn all_filter_states() -> Vec<FilterState> {
        let teams = [
            Selector::All,
            Selector::Only(Team::StudentSuccess),
            Selector::Only(Team::Enrollment),
        ];
        let statuses = [
            Selector::All,
            Selector::Only(AgentStatus::Operational),
            Selector::Only(AgentStatus::Warning),
            Selector::Only(AgentStatus::Critical),
        ];

        let mut states = Vec::new();
        for team in teams {
            for status in statuses {
                states.push(FilterState { team, status });
            }
        }
        states
    }

    #[test]
    fn test_filter_by_team() {
        let agents = mock_agents();
        let filters = FilterState {
            team: Selector::Only(Team::StudentSuccess),
            ..Default::default()
        };

        let result = filter_agents(Some(agents.as_slice()), &filters);
        assert_eq!(names(&result), vec!["Athena", "Orion"]);
    }

    #[test]
    fn test_filter_by_status() {
        let agents = mock_agents();
        let filters = FilterState {
            status: Selector::Only(AgentStatus::Critical),
            ..Default::default()
        };

        let result = filter_agents(Some(agents.as_slice()), &filters);
        assert_eq!(names(&result), vec!["Cygnus"]);
    }

    #[test]
    fn test_filter_by_team_and_status() {
        let agents = mock_agents();
        let filters = FilterState {
            team: Selector::Only(Team::Enrollment),
            status: Selector::Only(AgentStatus::Operational),
        };

        let result = filter_agents(Some(agents.as_slice()), &filters);
        assert_eq!(names(&result), vec!["Helios"]);

        let none = FilterState {
            team: Selector::Only(Team::StudentSuccess),
            status: Selector::Only(AgentStatus::Critical),
        };
        assert!(filter_agents(Some(agents.as_slice()), &none).is_empty());
    }

    #[test]
    fn test_wildcard_is_identity() {
        let agents = mock_agents();
        let result = filter_agents(Some(agents.as_slice()), &FilterState::default());
        assert_eq!(result, agents);
    }

    #[test]
    fn test_missing_or_empty_input_yields_empty() {
        for filters in all_filter_states() {
            assert!(filter_agents(None, &filters).is_empty());
            assert!(filter_agents(Some(&[][..]), &filters).is_empty());
        }
    }

    #[test]
    fn test_output_is_exactly_the_matching_subsequence() {
        let agents = mock_agents();

        for filters in all_filter_states() {
            let result = filter_agents(Some(agents.as_slice()), &filters);

            // Every output record matches.
            assert!(result.iter().all(|a| filters.matches(a)));

            // Every matching input record appears once, in input order.
            let expected: Vec<&str> = agents
                .iter()
                .filter(|a| filters.team.matches(&a.team) && filters.status.matches(&a.status))
                .map(|a| a.id.as_str())
                .collect();
            let actual: Vec<&str> = result.iter().map(|a| a.id.as_str()).collect();
            assert_eq!(actual, expected, "filters: {:?}", filters);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let agents = mock_agents();

        for filters in all_filter_states() {
            let once = filter_agents(Some(agents.as_slice()), &filters);
            let twice = filter_agents(Some(once.as_slice()), &filters);
            assert_eq!(once, twice);
            assert_eq!(filter_agents(Some(agents.as_slice()), &filters), once);
        }
    }

    #[test]
    fn test_controller_starts_loading() {
        let controller = DashboardController::new();
        assert_eq!(controller.view(), DashboardView::Loading);
        assert_eq!(controller.filters(), FilterState::default());
        assert!(controller.visible().is_empty());
    }

    #[test]
    fn test_successful_fetch_reaches_ready() {
        let mut controller = DashboardController::new();
        controller.finish_fetch(Ok(mock_agents()));

        match controller.view() {
            DashboardView::Ready(agents) => assert_eq!(agents.as_slice(), mock_agents().as_slice()),
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_fetch_is_ready_not_failed() {
        let mut controller = DashboardController::new();
        controller.finish_fetch(Ok(Vec::new()));

        assert_eq!(controller.view(), DashboardView::Ready(Arc::new(Vec::new())));
    }

    #[test]
    fn test_failed_fetch_stays_failed() {
        let mut controller = DashboardController::new();
        controller.finish_fetch(Err(ApiError::Network("connection refused".to_string())));
        assert_eq!(controller.view(), DashboardView::Failed(FETCH_ERROR_MESSAGE));

        // A late success does not resurrect the view.
        controller.finish_fetch(Ok(mock_agents()));
        assert_eq!(controller.view(), DashboardView::Failed(FETCH_ERROR_MESSAGE));

        // Filters stay usable while failed.
        controller.apply_filter(FilterUpdate::team(Selector::Only(Team::Enrollment)));
        assert_eq!(controller.filters().team, Selector::Only(Team::Enrollment));
        assert!(controller.visible().is_empty());
    }

    #[test]
    fn test_filter_change_recomputes_view() {
        let mut controller = DashboardController::new();
        controller.finish_fetch(Ok(mock_agents()));

        controller.apply_filter(FilterUpdate::team(Selector::Only(Team::StudentSuccess)));
        assert_eq!(names(&controller.visible()), vec!["Athena", "Orion"]);

        controller.apply_filter(FilterUpdate::status(Selector::Only(AgentStatus::Warning)));
        assert_eq!(names(&controller.visible()), vec!["Orion"]);

        controller.apply_filter(FilterUpdate::team(Selector::All));
        assert_eq!(names(&controller.visible()), vec!["Orion"]);
    }

    #[test]
    fn test_visible_is_memoized() {
        let mut controller = DashboardController::new();
        controller.finish_fetch(Ok(mock_agents()));

        let first = controller.visible();
        let second = controller.visible();
        assert!(Arc::ptr_eq(&first, &second));

        // Re-applying the same selection is not a change.
        controller.apply_filter(FilterUpdate::team(Selector::All));
        assert!(Arc::ptr_eq(&first, &controller.visible()));

        controller.apply_filter(FilterUpdate::status(Selector::Only(AgentStatus::Critical)));
        let third = controller.visible();
        assert!(!Arc::ptr_eq(&first, &third));
        assert!(Arc::ptr_eq(&third, &controller.visible()));
    }

    #[tokio::test]
    async fn test_fetch_against_provider() {
        use crate::api::{agents::fetch_agents, ApiClient};
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/agents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_agents()))
            .mount(&server)
            .await;

        let mut controller = DashboardController::new();
        controller.finish_fetch(fetch_agents(&ApiClient::new(&server.uri())).await);
        controller.apply_filter(FilterUpdate::status(Selector::Only(AgentStatus::Critical)));

        assert_eq!(names(&controller.visible()), vec!["Cygnus"]);
    }

    #[tokio::test]
    async fn test_provider_rejection_fails_view() {
        use crate::api::{agents::fetch_agents, ApiClient};
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/agents"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let mut controller = DashboardController::new();
        controller.finish_fetch(fetch_agents(&ApiClient::new(&server.uri())).await);

        assert!(matches!(controller.fetch_state(), FetchState::Failed(ApiError::Rejected { status: 503, .. })));
        assert_eq!(controller.view(), DashboardView::Failed(FETCH_ERROR_MESSAGE));
    }
}
