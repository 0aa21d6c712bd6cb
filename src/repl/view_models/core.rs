//! # Core ViewModel Structure
//!
//! Contains the main ViewModel struct and basic initialization logic.
//! This is the central coordinator; behaviour lives in the manager modules
//! (`search_manager`, `notification_manager`, `selection_manager`).

use crate::config::AppConfig;
use crate::repl::events::{Focus, ViewEvent};
use crate::repl::geometry::ScreenLayout;
use crate::repl::models::{
    DisplayState, ResultsModel, SearchBarModel, SearchState, SelectionModel, ToastQueue,
};
use crate::repl::services::SearchService;
use anyhow::Result;

/// Main ViewModel that coordinates all state for the search screen
pub struct ViewModel {
    pub(super) search_bar: SearchBarModel,
    pub(super) search_state: SearchState,
    pub(super) results: ResultsModel,
    pub(super) selection: SelectionModel,
    pub(super) toasts: ToastQueue,
    pub(super) search_service: SearchService,
    pub(super) focus: Focus,
    pub(super) card_cursor: usize,
    pub(super) terminal_size: (u16, u16),
    pending_view_events: Vec<ViewEvent>,
}

impl ViewModel {
    /// Create a view model talking to the endpoint described by `config`
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self::with_search_service(SearchService::new(config)?))
    }

    pub fn with_search_service(search_service: SearchService) -> Self {
        Self {
            search_bar: SearchBarModel::new(),
            search_state: SearchState::new(),
            results: ResultsModel::new(),
            selection: SelectionModel::new(),
            toasts: ToastQueue::new(),
            search_service,
            focus: Focus::SearchBar,
            card_cursor: 0,
            terminal_size: (80, 24),
            pending_view_events: Vec::new(),
        }
    }

    // === Accessors ===

    pub fn search_input(&self) -> &str {
        self.search_bar.input()
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search_state
    }

    pub fn results(&self) -> &ResultsModel {
        &self.results
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn search_service(&self) -> &SearchService {
        &self.search_service
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn card_cursor(&self) -> usize {
        self.card_cursor
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::new(self.terminal_size.0, self.terminal_size.1)
    }

    /// What the result area shows right now
    pub fn display_state(&self) -> DisplayState {
        self.results
            .display_state(self.search_state.key().as_ref())
    }

    /// Number of cards currently on screen
    pub fn visible_card_count(&self) -> usize {
        match self.display_state() {
            DisplayState::Results { response, .. } => response.len(),
            _ => 0,
        }
    }

    // === Focus and terminal ===

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            tracing::debug!("Focus changed: {:?} -> {:?}", self.focus, focus);
            self.focus = focus;
            self.emit_view_event(ViewEvent::SearchBarUpdateRequired);
            self.emit_view_event(ViewEvent::ResultsRedrawRequired);
            self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
        }
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }

    // === View events ===

    /// Queue a view event, skipping ones already covered by a queued event
    pub fn emit_view_event(&mut self, event: ViewEvent) {
        if self
            .pending_view_events
            .iter()
            .any(|queued| queued.covers(event))
        {
            return;
        }
        if event == ViewEvent::FullRedrawRequired {
            self.pending_view_events.clear();
        }
        self.pending_view_events.push(event);
    }

    /// Take all queued view events
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::repl::models::{Movie, MovieSearchResponse, QueryKey};
    use std::sync::Arc;

    /// View model pointed at an address nothing listens on
    pub fn offline_view_model() -> ViewModel {
        let config = AppConfig {
            api_url: "http://127.0.0.1:9/search".to_string(),
            token: "test".to_string(),
            ..AppConfig::default()
        };
        ViewModel::new(&config).unwrap()
    }

    pub fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: Some(format!("/{id}.jpg")),
            backdrop_path: None,
            overview: format!("Overview of {title}"),
            release_date: "2005-06-10".to_string(),
            vote_average: 7.5,
        }
    }

    pub fn response(page: u32, total_pages: u32, titles: &[&str]) -> Arc<MovieSearchResponse> {
        Arc::new(MovieSearchResponse {
            results: titles
                .iter()
                .enumerate()
                .map(|(i, title)| movie(u64::from(page) * 100 + i as u64, title))
                .collect(),
            page,
            total_results: titles.len() as u64,
            total_pages,
        })
    }

    /// Put `response` on screen for (`query`, `page`) as if a fetch completed
    pub fn show_response(vm: &mut ViewModel, query: &str, response: Arc<MovieSearchResponse>) {
        vm.search_state.submit(query);
        vm.search_state.set_page(response.page);
        let key = QueryKey::new(query, response.page);
        vm.results.show(key, response, false);
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn new_view_model_should_start_neutral_in_search_bar() {
        let vm = offline_view_model();
        assert_eq!(vm.focus(), Focus::SearchBar);
        assert_eq!(vm.display_state(), DisplayState::Neutral);
        assert_eq!(vm.visible_card_count(), 0);
        assert!(!vm.selection().is_open());
    }

    #[test]
    fn full_redraw_should_absorb_other_events() {
        let mut vm = offline_view_model();
        vm.emit_view_event(ViewEvent::ToastsUpdateRequired);
        vm.emit_view_event(ViewEvent::FullRedrawRequired);
        vm.emit_view_event(ViewEvent::SearchBarUpdateRequired);

        assert_eq!(
            vm.collect_pending_view_events(),
            vec![ViewEvent::FullRedrawRequired]
        );
        assert!(vm.collect_pending_view_events().is_empty());
    }

    #[test]
    fn duplicate_events_should_be_queued_once() {
        let mut vm = offline_view_model();
        vm.emit_view_event(ViewEvent::ToastsUpdateRequired);
        vm.emit_view_event(ViewEvent::ToastsUpdateRequired);
        assert_eq!(vm.collect_pending_view_events().len(), 1);
    }

    #[test]
    fn resize_should_update_layout() {
        let mut vm = offline_view_model();
        vm.update_terminal_size(120, 40);
        assert_eq!(vm.layout().grid().columns, 4);
        assert_eq!(
            vm.collect_pending_view_events(),
            vec![ViewEvent::FullRedrawRequired]
        );
    }

    #[test]
    fn shown_response_should_count_cards() {
        let mut vm = offline_view_model();
        show_response(&mut vm, "batman", response(1, 3, &["Batman", "Batman Begins"]));
        assert_eq!(vm.visible_card_count(), 2);
    }
}
