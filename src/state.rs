//! Snapshot state of the search screen and the pure `update` that advances it.
//!
//! Every message yields a fresh [`AppState`]; network work is described by the
//! returned [`Command`] and its outcome comes back as another [`Msg`].

use serde::Serialize;

use crate::consts::DEFAULT_AREA_ID;
use crate::error::ApiResult;
use crate::models::{MetroStationOption, SpecializationOption, Vacancy, VacancyPage};
use crate::search::{suggestions, SearchCriteria, SearchRequest};

/// Identifies one submit. Only the latest ticket may change results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureSource {
    Specializations,
    MetroStations,
    Search,
}

/// A swallowed network failure, kept so callers and tests can see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub source: FailureSource,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppState {
    pub area: u32,
    pub specializations: Vec<SpecializationOption>,
    pub metro_stations: Vec<MetroStationOption>,
    pub criteria: SearchCriteria,
    pub vacancies: Vec<Vacancy>,
    pub is_loading: bool,
    pub last_failure: Option<Failure>,
    latest_ticket: SearchTicket,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_AREA_ID)
    }
}

impl AppState {
    pub fn new(area: u32) -> Self {
        Self {
            area,
            specializations: Vec::new(),
            metro_stations: Vec::new(),
            criteria: SearchCriteria::default(),
            vacancies: Vec::new(),
            is_loading: false,
            last_failure: None,
            latest_ticket: SearchTicket::default(),
        }
    }

    pub fn latest_ticket(&self) -> SearchTicket {
        self.latest_ticket
    }

    /// A success only retracts a failure of the same source.
    fn clear_failure(&mut self, source: FailureSource) {
        if self.last_failure.as_ref().is_some_and(|failure| failure.source == source) {
            self.last_failure = None;
        }
    }

    pub fn specialization_suggestions(&self) -> Vec<&SpecializationOption> {
        suggestions(&self.specializations, &self.criteria.query_text)
    }

    pub fn metro_suggestions(&self) -> Vec<&MetroStationOption> {
        suggestions(&self.metro_stations, &self.criteria.metro_label)
    }
}

#[derive(Debug)]
pub enum Msg {
    SpecializationsLoaded(ApiResult<Vec<SpecializationOption>>),
    MetroLoaded(ApiResult<Vec<MetroStationOption>>),
    QueryChanged(String),
    MetroChanged(String),
    Submit,
    SearchFinished {
        ticket: SearchTicket,
        result: ApiResult<VacancyPage>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search {
        ticket: SearchTicket,
        request: SearchRequest,
    },
}

pub fn update(state: &AppState, msg: Msg) -> (AppState, Option<Command>) {
    let mut next = state.clone();

    match msg {
        Msg::SpecializationsLoaded(Ok(options)) => {
            next.specializations = options;
            next.clear_failure(FailureSource::Specializations);
        }
        Msg::SpecializationsLoaded(Err(err)) => {
            next.last_failure = Some(Failure {
                source: FailureSource::Specializations,
                message: err.to_string(),
            });
        }
        Msg::MetroLoaded(Ok(options)) => {
            next.metro_stations = options;
            next.clear_failure(FailureSource::MetroStations);
        }
        Msg::MetroLoaded(Err(err)) => {
            next.last_failure = Some(Failure {
                source: FailureSource::MetroStations,
                message: err.to_string(),
            });
        }
        Msg::QueryChanged(text) => next.criteria.query_text = text,
        Msg::MetroChanged(text) => next.criteria.metro_label = text,
        Msg::Submit => {
            let ticket = SearchTicket(state.latest_ticket.0 + 1);
            let request = SearchRequest::from_criteria(&state.criteria, &state.metro_stations, state.area);
            next.latest_ticket = ticket;
            next.is_loading = true;
            return (next, Some(Command::Search { ticket, request }));
        }
        Msg::SearchFinished { ticket, .. } if ticket != state.latest_ticket => {
            // superseded by a later submit
        }
        Msg::SearchFinished { result, .. } => {
            next.is_loading = false;
            match result {
                Ok(page) => {
                    next.vacancies = page.items;
                    next.clear_failure(FailureSource::Search);
                }
                Err(err) => {
                    next.last_failure = Some(Failure {
                        source: FailureSource::Search,
                        message: err.to_string(),
                    });
                }
            }
        }
    }

    (next, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::Employer;
    use pretty_assertions::assert_eq;

    fn vacancy(id: &str) -> Vacancy {
        Vacancy {
            id: id.to_string(),
            name: format!("Вакансия {id}"),
            alternate_url: format!("https://hh.ru/vacancy/{id}"),
            published_at: "2024-05-01T10:00:00+0300".to_string(),
            employer: Employer {
                id: None,
                name: "Acme".to_string(),
                alternate_url: None,
            },
            salary: None,
            address: None,
        }
    }

    fn page(ids: &[&str]) -> VacancyPage {
        VacancyPage {
            items: ids.iter().map(|id| vacancy(id)).collect(),
            ..VacancyPage::default()
        }
    }

    fn failed() -> ApiError {
        ApiError::Url("boom".to_string())
    }

    fn submit(state: &AppState) -> (AppState, SearchTicket, SearchRequest) {
        let (next, command) = update(state, Msg::Submit);
        let Some(Command::Search { ticket, request }) = command else {
            panic!("submit must emit a search");
        };
        (next, ticket, request)
    }

    #[test]
    fn loading_is_set_only_between_submit_and_response() {
        let state = AppState::default();
        assert!(!state.is_loading);

        let (state, ticket, _) = submit(&state);
        assert!(state.is_loading);

        let (state, command) = update(&state, Msg::QueryChanged("rust".into()));
        assert!(state.is_loading);
        assert_eq!(command, None);

        let (state, _) = update(
            &state,
            Msg::SearchFinished {
                ticket,
                result: Ok(page(&["1", "2"])),
            },
        );
        assert!(!state.is_loading);
        assert_eq!(state.vacancies.len(), 2);
    }

    #[test]
    fn failed_search_keeps_previous_results_and_clears_loading() {
        let (state, ticket, _) = submit(&AppState::default());
        let (state, _) = update(&state, Msg::SearchFinished { ticket, result: Ok(page(&["1"])) });

        let (state, ticket, _) = submit(&state);
        let (state, _) = update(&state, Msg::SearchFinished { ticket, result: Err(failed()) });

        assert!(!state.is_loading);
        assert_eq!(state.vacancies, page(&["1"]).items);
        assert_eq!(state.last_failure.as_ref().map(|f| f.source), Some(FailureSource::Search));
    }

    #[test]
    fn successful_search_clears_search_failure() {
        let (state, ticket, _) = submit(&AppState::default());
        let (state, _) = update(&state, Msg::SearchFinished { ticket, result: Err(failed()) });
        assert!(state.last_failure.is_some());

        let (state, ticket, _) = submit(&state);
        let (state, _) = update(&state, Msg::SearchFinished { ticket, result: Ok(page(&[])) });
        assert_eq!(state.last_failure, None);
    }

    #[test]
    fn lookup_success_clears_only_its_own_failure() {
        let (state, _) = update(&AppState::default(), Msg::SpecializationsLoaded(Err(failed())));
        let (state, _) = update(&state, Msg::MetroLoaded(Ok(Vec::new())));
        assert_eq!(
            state.last_failure.as_ref().map(|f| f.source),
            Some(FailureSource::Specializations)
        );

        let (state, _) = update(&state, Msg::SpecializationsLoaded(Ok(Vec::new())));
        assert_eq!(state.last_failure, None);
    }

    #[test]
    fn new_results_replace_old_ones() {
        let (state, ticket, _) = submit(&AppState::default());
        let (state, _) = update(&state, Msg::SearchFinished { ticket, result: Ok(page(&["1", "2"])) });
        let (state, ticket, _) = submit(&state);
        let (state, _) = update(&state, Msg::SearchFinished { ticket, result: Ok(page(&["3"])) });

        let ids: Vec<_> = state.vacancies.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn stale_response_is_discarded() {
        let (state, first, _) = submit(&AppState::default());
        let (state, second, _) = submit(&state);
        assert!(second > first);

        let (state, _) = update(&state, Msg::SearchFinished { ticket: first, result: Ok(page(&["old"])) });
        assert!(state.is_loading);
        assert!(state.vacancies.is_empty());

        let (state, _) = update(&state, Msg::SearchFinished { ticket: second, result: Ok(page(&["new"])) });
        assert!(!state.is_loading);
        assert_eq!(state.vacancies[0].id, "new");
    }

    #[test]
    fn lookup_failure_keeps_previous_list() {
        let stations = vec![MetroStationOption {
            label: "Kursk".into(),
            line_name: "Ring".into(),
            id: "7".into(),
        }];
        let (state, _) = update(&AppState::default(), Msg::MetroLoaded(Ok(stations.clone())));
        let (state, _) = update(&state, Msg::MetroLoaded(Err(failed())));

        assert_eq!(state.metro_stations, stations);
        assert_eq!(
            state.last_failure.as_ref().map(|f| f.source),
            Some(FailureSource::MetroStations)
        );

        let (state, _) = update(&state, Msg::SpecializationsLoaded(Err(failed())));
        assert!(state.specializations.is_empty());
    }

    #[test]
    fn submit_resolves_metro_from_current_snapshot() {
        let stations = vec![MetroStationOption {
            label: "Kursk".into(),
            line_name: "Ring".into(),
            id: "7".into(),
        }];
        let (state, _) = update(&AppState::default(), Msg::MetroLoaded(Ok(stations)));
        let (state, _) = update(&state, Msg::QueryChanged("rust".into()));
        let (state, _) = update(&state, Msg::MetroChanged("Kursk".into()));

        let (_, _, request) = submit(&state);
        assert_eq!(
            request,
            SearchRequest {
                area: 1,
                text: "rust".into(),
                metro: Some("7".into()),
            }
        );

        let (state, _) = update(&state, Msg::MetroChanged("Kur".into()));
        let (_, _, request) = submit(&state);
        assert_eq!(request.metro, None);
        assert_eq!(state.metro_suggestions().len(), 1);
    }

    #[test]
    fn update_leaves_the_previous_snapshot_untouched() {
        let before = AppState::default();
        let (after, _) = update(&before, Msg::QueryChanged("go".into()));
        assert_eq!(before.criteria.query_text, "");
        assert_eq!(after.criteria.query_text, "go");
    }
}
