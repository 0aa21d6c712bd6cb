//! # Application Controller
//!
//! The controller orchestrates the components and manages the event loop.
//! It's responsible for connecting user input to commands, pumping completed
//! fetches into the view model and coordinating view updates.

use crate::cmd_args::CommandLineArgs;
use crate::config::AppConfig;
use crate::repl::{
    commands::{CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot},
    events::ViewEvent,
    io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream},
    view_models::ViewModel,
    views::{TerminalRenderer, ViewRenderer},
};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};

/// How long the loop waits for terminal input before checking fetches and toasts
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    initial_search: Option<(String, u32)>,
    should_quit: bool,
}

impl AppController<TerminalEventStream, TerminalRenderStream<io::Stdout>> {
    /// Create a controller bound to the real terminal
    pub fn new(cmd_args: CommandLineArgs, config: &AppConfig) -> Result<Self> {
        Self::with_io_streams(
            cmd_args,
            config,
            TerminalEventStream::new(),
            TerminalRenderStream::new(),
        )
    }
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create new application controller with injected I/O streams (dependency injection)
    pub fn with_io_streams(
        cmd_args: CommandLineArgs,
        config: &AppConfig,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let mut view_model = ViewModel::new(config)?;

        // Pass RenderStream ownership to the View layer (TerminalRenderer)
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;

        // Synchronize view model with actual terminal size
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);

        tracing::debug!(
            "Controller created for {} (profile '{}')",
            config.api_url,
            cmd_args.profile()
        );

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            event_stream,
            initial_search: cmd_args
                .query()
                .map(|query| (query.to_string(), cmd_args.page())),
            should_quit: false,
        })
    }

    /// Run the main application loop until the user quits
    ///
    /// The terminal is restored even when the loop fails.
    pub async fn run(&mut self) -> Result<()> {
        // Initialize view renderer (handles all terminal setup)
        self.view_renderer.initialize()?;

        let result = self.event_loop().await;
        if let Err(e) = &result {
            tracing::error!("Event loop failed: {:#}", e);
        }

        self.view_renderer.cleanup()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.submit_initial_search();
        self.view_renderer.render_full(&self.view_model)?;
        self.view_model.collect_pending_view_events();

        while !self.should_quit {
            if self.event_stream.poll(INPUT_POLL_INTERVAL)? {
                let event = self.event_stream.read()?;
                self.handle_event(event)?;
            } else {
                // Give spawned fetches a chance on single-threaded runtimes
                tokio::task::yield_now().await;
            }

            self.tick(Instant::now())?;
        }

        Ok(())
    }

    /// Submit the query given on the command line, if any
    fn submit_initial_search(&mut self) {
        if let Some((query, page)) = self.initial_search.take() {
            self.view_model.submit_search_at(&query, page);
        }
    }

    /// Process every input event that is ready, then completed fetches and toasts
    pub fn step(&mut self) -> Result<()> {
        self.submit_initial_search();
        while !self.should_quit && self.event_stream.poll(Duration::ZERO)? {
            let event = self.event_stream.read()?;
            self.handle_event(event)?;
        }
        self.tick(Instant::now())
    }

    /// Wait up to `timeout` for one fetch to complete and render its outcome
    ///
    /// Returns false if nothing arrived in time.
    pub async fn wait_for_search(&mut self, timeout: Duration) -> Result<bool> {
        let received = tokio::time::timeout(timeout, self.view_model.wait_for_search_message())
            .await
            .unwrap_or(false);
        self.render_pending()?;
        Ok(received)
    }

    fn tick(&mut self, now: Instant) -> Result<()> {
        let arrived = self.view_model.poll_search_messages();
        if arrived > 0 {
            tracing::debug!("Applied {} completed fetches", arrived);
        }
        self.view_model.expire_toasts(now);
        self.render_pending()
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)?;
            }
            Event::Resize(width, height) => {
                tracing::debug!("Terminal resized to {}x{}", width, height);
                self.view_renderer.update_size(width, height);
                self.view_model.update_terminal_size(width, height);
            }
            _ => {
                // Ignore other events
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);

        // Create command context from current state
        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));

        // Process through command registry
        let events = self.command_registry.process_event(key_event, &context)?;
        if !events.is_empty() {
            tracing::debug!("Command events generated: {:?}", events);
        }
        for event in events {
            self.apply_command_event(event);
        }
        Ok(())
    }

    /// Apply a command event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::SearchInputRequested { ch } => self.view_model.insert_search_char(ch),
            CommandEvent::SearchBackspaceRequested => self.view_model.backspace_search_input(),
            CommandEvent::SearchClearRequested => self.view_model.clear_search_input(),
            CommandEvent::SearchSubmitRequested => self.view_model.submit_search_input(),
            CommandEvent::FocusChangeRequested { target } => self.view_model.set_focus(target),
            CommandEvent::CardMoveRequested { direction } => {
                self.view_model.move_card_cursor(direction);
            }
            CommandEvent::CardSelectRequested => {
                if !self.view_model.select_card_under_cursor() {
                    tracing::debug!("No card under cursor to select");
                }
            }
            CommandEvent::PageChangeRequested { target } => self.view_model.change_page(target),
            CommandEvent::ModalCloseRequested => self.view_model.close_modal(),
            CommandEvent::QuitRequested => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            CommandEvent::NoAction => {}
        }
    }

    /// Draw whatever the view model has queued since the last render
    pub fn render_pending(&mut self) -> Result<()> {
        if self.should_quit {
            return Ok(());
        }
        let view_events = self.view_model.collect_pending_view_events();
        self.process_view_events(&view_events)
    }

    /// Process view events for selective rendering instead of always doing full redraws
    fn process_view_events(&mut self, view_events: &[ViewEvent]) -> Result<()> {
        if view_events.contains(&ViewEvent::FullRedrawRequired) {
            // Full redraw overrides all other events
            return self.view_renderer.render_full(&self.view_model);
        }
        for event in view_events {
            self.view_renderer
                .handle_view_event(event, &self.view_model)?;
        }
        Ok(())
    }

    /// Get reference to view model (for testing)
    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    /// Get mutable reference to the input stream (for testing)
    pub fn event_stream_mut(&mut self) -> &mut ES {
        &mut self.event_stream
    }

    /// Get reference to the renderer (for testing)
    pub fn renderer(&self) -> &TerminalRenderer<RS> {
        &self.view_renderer
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
