//! Sidebar search and filter state.
//!
//! DESIGN
//! ======
//! Two monotonically increasing counters guard against out-of-order async
//! work. `input_seq` debounces keystrokes: only the timer holding the latest
//! ticket may commit the typed text. `search_seq` orders searches: a response
//! is applied only if its ticket is still the newest one issued.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use std::collections::BTreeSet;

use crate::net::api::SearchParams;

/// Debounce window for the search box.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Clone, Debug, Default)]
pub struct FilterState {
    /// Committed search text.
    pub query: String,
    /// Text typed but not yet committed by the debounce timer.
    pub pending_query: String,
    /// Include PubChem synonyms for the committed query.
    pub synonyms: bool,
    /// Selected room (location id); `None` means "Any".
    pub room: Option<i32>,
    pub manufacturers: BTreeSet<i32>,
    pub input_seq: u64,
    pub search_seq: u64,
}

impl FilterState {
    /// Record a keystroke and return the ticket its debounce timer must present.
    pub fn note_input(&mut self, text: String) -> u64 {
        self.pending_query = text;
        self.input_seq += 1;
        self.input_seq
    }

    /// Commit the pending text if no newer keystroke arrived. Returns whether
    /// the committed query changed.
    pub fn commit_input(&mut self, ticket: u64) -> bool {
        if ticket != self.input_seq || self.pending_query == self.query {
            return false;
        }
        self.query = self.pending_query.clone();
        self.synonyms = false;
        true
    }

    /// Commit immediately (Enter key), superseding any running timer.
    pub fn submit(&mut self, text: String) {
        self.input_seq += 1;
        self.pending_query.clone_from(&text);
        if text != self.query {
            self.synonyms = false;
        }
        self.query = text;
    }

    pub fn expand_search(&mut self) {
        if !self.query.trim().is_empty() {
            self.synonyms = true;
        }
    }

    pub fn set_room(&mut self, room: Option<i32>) {
        self.room = room;
    }

    pub fn toggle_manufacturer(&mut self, id: i32) {
        if !self.manufacturers.remove(&id) {
            self.manufacturers.insert(id);
        }
    }

    /// Issue a ticket for a new search request.
    pub fn begin_search(&mut self) -> u64 {
        self.search_seq += 1;
        self.search_seq
    }

    /// Only the newest search may update the result list.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.search_seq
    }

    pub fn params(&self) -> SearchParams {
        SearchParams {
            query: self.query.clone(),
            synonyms: self.synonyms,
            room: self.room,
            manufacturers: self.manufacturers.iter().copied().collect(),
        }
    }
}
