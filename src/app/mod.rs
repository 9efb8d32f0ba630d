//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`UiMode`] - Which of the Loading/Error/Content regions is shown
//! - [`AppMessage`] - Messages for async communication

mod handlers;
mod messages;

pub use handlers::handle_key;
pub use messages::AppMessage;

use crate::api::ApiClient;
use crate::state::SessionState;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Which body region is currently displayed.
///
/// Exactly one of the three is rendered at a time; the mode is overwritten
/// at the end of every fetch, so Loading is always cleared regardless of
/// outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// A page fetch is in flight
    Loading,
    /// The last fetch failed; holds the message shown to the user
    Error(String),
    /// The current page (or its filtered view) is shown
    Content,
}

/// Main application state
pub struct App {
    /// Loaded page and derived filtered view
    pub session: SessionState,
    /// Which body region is displayed
    pub mode: UiMode,
    /// Current content of the search input
    pub search_input: String,
    /// Whether the pagination bar is shown
    pub pagination_visible: bool,
    /// Vertical scroll offset into the card list
    pub scroll: u16,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// True when the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner animation
    pub tick_count: u64,
    /// Receiver for async messages (fetch completions)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// API client (shared across spawned fetches)
    pub client: Arc<ApiClient>,
    /// Sequence number of the most recently issued fetch.
    /// A completion carrying an older number is stale and is discarded.
    request_seq: u64,
}

impl App {
    /// Create a new App around the given API client.
    pub fn new(client: ApiClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            session: SessionState::new(),
            mode: UiMode::Loading,
            search_input: String::new(),
            pagination_visible: false,
            scroll: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            client: Arc::new(client),
            request_seq: 0,
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick. Redraws only while the spinner is visible.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.mode == UiMode::Loading {
            self.mark_dirty();
        }
    }

    /// Request the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Sequence number of the most recently issued fetch.
    pub fn latest_request_seq(&self) -> u64 {
        self.request_seq
    }

    /// Start loading a page.
    ///
    /// Switches to Loading mode, hides pagination, and spawns the fetch on
    /// the runtime. The fetch reports back through the message channel
    /// tagged with a fresh sequence number; see [`App::handle_message`] for
    /// how stale completions are discarded.
    pub fn load_page(&mut self, page: u32) {
        self.request_seq += 1;
        let seq = self.request_seq;

        self.mode = UiMode::Loading;
        self.pagination_visible = false;
        self.scroll = 0;
        self.mark_dirty();

        tracing::debug!("Loading page {} (request seq {})", page, seq);

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_page(page).await.map(|p| p.results);
            // Receiver only drops on shutdown; nothing to do if send fails
            let _ = tx.send(AppMessage::PageLoaded { seq, page, result });
        });
    }

    /// Load the next page. No upper bound is enforced locally; an
    /// out-of-range page surfaces as the server's HTTP error.
    pub fn next_page(&mut self) {
        self.load_page(self.session.current_page + 1);
    }

    /// Load the previous page, clamped at page 1 (no-op at the start).
    pub fn prev_page(&mut self) {
        if self.session.current_page > 1 {
            self.load_page(self.session.current_page - 1);
        }
    }

    /// Re-filter the current page from the search input.
    ///
    /// Runs on every keystroke. The match uses the untrimmed term; the
    /// pagination-visibility decision uses the trimmed term. Whitespace-only
    /// input therefore hides pagination while still matching everything.
    pub fn apply_search(&mut self) {
        self.session.apply_filter(&self.search_input);
        self.pagination_visible = self.search_input.trim().is_empty();
        self.scroll = 0;
        self.mark_dirty();
    }

    /// Apply a fetch completion to the application state.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PageLoaded { seq, page, result } => {
                if seq != self.request_seq {
                    // A newer request was issued while this one was in
                    // flight; only the latest may mutate state.
                    tracing::debug!(
                        "Discarding stale page {} response (seq {} < {})",
                        page,
                        seq,
                        self.request_seq
                    );
                    return;
                }

                match result {
                    Ok(characters) => {
                        tracing::debug!("Loaded {} characters for page {}", characters.len(), page);
                        self.session.replace_page(page, characters);
                        self.mode = UiMode::Content;
                        self.pagination_visible = true;
                    }
                    Err(err) => {
                        tracing::error!("Failed to load page {}: {}", page, err);
                        self.mode = UiMode::Error(err.to_string());
                    }
                }
                self.scroll = 0;
                self.mark_dirty();
            }
        }
    }
}
