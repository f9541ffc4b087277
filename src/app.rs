use tracing::{debug, info};

use crate::api::HhClient;
use crate::lookup::{load_lookups, load_metro, load_specializations};
use crate::state::{update, AppState, Command, Msg};

/// Runs [`update`] against a live client: applies messages, executes the
/// commands they emit and feeds the outcomes back in.
pub struct App {
    client: HhClient,
    metro_city: u32,
    state: AppState,
}

impl App {
    pub fn new(client: HhClient, area: u32, metro_city: u32) -> Self {
        Self {
            client,
            metro_city,
            state: AppState::new(area),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, msg: Msg) -> Option<Command> {
        let (next, command) = update(&self.state, msg);
        if next.last_failure != self.state.last_failure {
            if let Some(failure) = &next.last_failure {
                debug!(source = ?failure.source, message = %failure.message, "request failed, ignoring");
            }
        }
        self.state = next;
        command
    }

    /// Startup: both reference lists, fetched concurrently.
    pub async fn init(&mut self) {
        let lookups = load_lookups(&self.client, self.metro_city).await;
        self.dispatch(Msg::SpecializationsLoaded(lookups.specializations));
        self.dispatch(Msg::MetroLoaded(lookups.metro_stations));
        info!(
            specializations = self.state.specializations.len(),
            metro_stations = self.state.metro_stations.len(),
            "lookups loaded"
        );
    }

    pub async fn load_specializations(&mut self) {
        let result = load_specializations(&self.client).await;
        self.dispatch(Msg::SpecializationsLoaded(result));
    }

    pub async fn load_metro(&mut self) {
        let result = load_metro(&self.client, self.metro_city).await;
        self.dispatch(Msg::MetroLoaded(result));
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::QueryChanged(text.into()));
    }

    pub fn set_metro(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::MetroChanged(text.into()));
    }

    pub async fn submit(&mut self) {
        let mut pending = self.dispatch(Msg::Submit);
        while let Some(command) = pending.take() {
            pending = self.execute(command).await;
        }
        info!(vacancies = self.state.vacancies.len(), "search settled");
    }

    async fn execute(&mut self, command: Command) -> Option<Command> {
        match command {
            Command::Search { ticket, request } => {
                debug!(?ticket, text = %request.text, metro = ?request.metro, "searching");
                let result = self.client.vacancies(&request).await;
                self.dispatch(Msg::SearchFinished { ticket, result })
            }
        }
    }
}
