//! History browser state and event handling.
//!
//! The `App` struct owns the loaded records and the live search query. Every
//! keystroke re-runs the same case-insensitive `type` search that
//! `history search` uses; matches are shown newest first. Ctrl+R reloads the
//! history file when the browser was opened with a store.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::debug;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_to_clipboard;
use crate::history::HistoryStore;
use crate::history::search::matches_query;
use crate::models::ConversionRecord;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Longest search query accepted
const MAX_QUERY_LEN: usize = 256;
const PAGE_SIZE: isize = 10;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    records: Vec<ConversionRecord>,
    store: Option<HistoryStore>,
    /// Indices into `records` that match the query, newest first
    matches: Vec<usize>,
    selected_idx: usize,
    search_query: String,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(records: Vec<ConversionRecord>) -> Self {
        let mut app = Self {
            records,
            store: None,
            matches: Vec::new(),
            selected_idx: 0,
            search_query: String::new(),
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        };
        app.update_matches();
        app
    }

    /// Browser over the contents of `store`, with Ctrl+R reload
    pub fn with_store(store: HistoryStore) -> Result<Self> {
        let records = store.load()?;
        let mut app = Self::new(records);
        app.store = Some(store);
        Ok(app)
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            if self.clear_expired_status() {
                self.needs_redraw = true;
            }

            // Redraw when dirty, or every 100ms to pick up terminal resizes
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                let matched = self.matched_records();
                let state = RenderState {
                    search_query: &self.search_query,
                    total_count: self.records.len(),
                    status_message: self.status_message.as_ref(),
                };
                terminal.draw(|f| render_ui(f, &matched, self.selected_idx, &state))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Records matching the current query, in display order
    fn matched_records(&self) -> Vec<&ConversionRecord> {
        self.matches.iter().map(|&idx| &self.records[idx]).collect()
    }

    fn selected_record(&self) -> Option<&ConversionRecord> {
        self.matches.get(self.selected_idx).map(|&idx| &self.records[idx])
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.search_query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.search_query.clear();
                    self.update_matches();
                }
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::UpdateSearch(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            Action::CopyOutput => self.copy_selected_output(),
            Action::Refresh => self.reload(),
            Action::None => {}
        }
    }

    fn copy_selected_output(&mut self) {
        let Some(record) = self.selected_record() else {
            self.set_status("✗ No record to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_to_clipboard(&record.output) {
            Ok(()) => self.set_status(
                "✓ Output copied to clipboard",
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Err(e) => self.set_status(
                format!("✗ Clipboard error: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }

    fn reload(&mut self) {
        let Some(store) = &self.store else {
            return;
        };

        match store.load() {
            Ok(records) => {
                debug!("Reloaded {} records", records.len());
                let count = records.len();
                self.records = records;
                self.update_matches();
                self.set_status(
                    format!("✓ Reloaded {} records", count),
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => self.set_status(
                format!("✗ Reload failed: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.matches.len();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn update_search(&mut self, c: char) {
        if self.search_query.len() < MAX_QUERY_LEN {
            self.search_query.push(c);
            self.update_matches();
        }
    }

    fn delete_char(&mut self) {
        if self.search_query.pop().is_some() {
            self.update_matches();
        }
    }

    /// Re-run the search and reset the selection
    fn update_matches(&mut self) {
        let query_lower = self.search_query.to_lowercase();
        self.matches = (0..self.records.len())
            .rev()
            .filter(|&idx| matches_query(&self.records[idx], &query_lower))
            .collect();
        self.selected_idx = 0;
        self.needs_redraw = true;
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Drop the status message once expired; returns true if one was dropped
    fn clear_expired_status(&mut self) -> bool {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
        }
        expired
    }
}
