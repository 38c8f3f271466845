//! Search and selection controller
//!
//! Owns the query (raw and settled), the derived view and the selection.
//! Hosts feed it [`ControllerEvent`]s and call [`SelectionController::tick`]
//! from their event loop; every handler returns an [`Update`] telling the
//! host whether to redraw and whether to reset its input widget.

use super::clock::{Clock, SystemClock};
use super::debounce::{DEFAULT_DELAY, Debouncer};
use super::filter::matching_indices;
use super::item::Item;
use super::selection::Selection;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Events delivered by the presentation collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// The input text changed (every keystroke)
    QueryTextChanged(String),
    /// An item row was activated
    ItemActivated(Item),
    /// The user asked to clear the search
    ClearRequested,
    /// The caller supplied a new source collection
    SourceReplaced(Vec<Item>),
}

/// What the host should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// Nothing visible changed
    Unchanged,
    /// Render again
    Redraw,
    /// Render again and reset the text shown by the input widget
    ResetInput,
}

impl Update {
    /// Whether the host needs to render
    #[must_use]
    pub const fn needs_redraw(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Query state machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPhase {
    /// The settled query matches the last input
    Idle,
    /// Input is waiting for the debounce timer
    Pending,
}

/// Render contract handed to the presentation layer
#[derive(Debug)]
pub struct RenderFrame<'a> {
    /// Visible items, in source order
    pub view: Vec<&'a Item>,
    /// Total selected ids (including ones not currently visible)
    pub selected_count: usize,
    /// Raw query text
    pub query: &'a str,
    /// Whether a query change is still settling
    pub pending: bool,
    selection: &'a Selection,
}

impl RenderFrame<'_> {
    /// Per-item selection predicate
    #[must_use]
    pub fn is_selected(&self, item: &Item) -> bool {
        self.selection.is_selected(&item.id)
    }
}

/// Stateful filter/selection controller
#[derive(Debug)]
pub struct SelectionController<C: Clock = SystemClock> {
    clock: C,
    source: Vec<Item>,
    query: String,
    settled_query: String,
    debouncer: Debouncer<String>,
    view: Vec<usize>,
    selection: Selection,
    mounted: bool,
}

impl SelectionController<SystemClock> {
    /// Create a controller over `source` with the default 300 ms delay
    #[must_use]
    pub fn new(source: Vec<Item>) -> Self {
        Self::with_clock(source, DEFAULT_DELAY, SystemClock)
    }

    /// Create a controller with a custom debounce delay
    #[must_use]
    pub fn with_delay(source: Vec<Item>, delay: Duration) -> Self {
        Self::with_clock(source, delay, SystemClock)
    }
}

impl<C: Clock> SelectionController<C> {
    /// Create a controller reading time from `clock`
    #[must_use]
    pub fn with_clock(source: Vec<Item>, delay: Duration, clock: C) -> Self {
        let view = (0..source.len()).collect();
        debug!(items = source.len(), ?delay, "selection controller mounted");

        Self {
            clock,
            source,
            query: String::new(),
            settled_query: String::new(),
            debouncer: Debouncer::new(delay),
            view,
            selection: Selection::new(),
            mounted: true,
        }
    }

    /// Dispatch a collaborator event to its handler
    pub fn handle(&mut self, event: ControllerEvent) -> Update {
        match event {
            ControllerEvent::QueryTextChanged(text) => self.on_query_change(text),
            ControllerEvent::ItemActivated(item) => self.toggle(&item),
            ControllerEvent::ClearRequested => self.clear(),
            ControllerEvent::SourceReplaced(items) => self.set_source(items),
        }
    }

    /// Record new input text and (re)arm the debounce timer
    pub fn on_query_change(&mut self, raw: impl Into<String>) -> Update {
        if !self.mounted {
            return Update::Unchanged;
        }

        let raw = raw.into();
        trace!(query = %raw, "query changed");
        self.debouncer.submit(raw.clone(), self.clock.now());
        self.query = raw;
        Update::Redraw
    }

    /// Settle the query if its quiet period has elapsed
    ///
    /// Hosts call this from their event loop. Returns `Redraw` when the view
    /// was recomputed.
    pub fn tick(&mut self) -> Update {
        if !self.mounted {
            return Update::Unchanged;
        }

        let Some(settled) = self.debouncer.poll(self.clock.now()) else {
            return Update::Unchanged;
        };

        if settled == self.settled_query {
            trace!("settled query unchanged; view kept");
            return Update::Unchanged;
        }

        debug!(query = %settled, "query settled");
        self.settled_query = settled;
        self.recompute_view();
        Update::Redraw
    }

    /// Toggle `item` in the selection
    pub fn toggle(&mut self, item: &Item) -> Update {
        if !self.mounted {
            return Update::Unchanged;
        }
        if item.id.is_empty() {
            warn!(name = %item.name, "ignoring toggle of item without id");
            return Update::Unchanged;
        }

        let selected = self.selection.toggle(item);
        debug!(id = %item.id, selected, count = self.selection.len(), "selection toggled");
        Update::Redraw
    }

    /// Reset the search immediately, keeping the selection
    pub fn clear(&mut self) -> Update {
        if !self.mounted {
            return Update::Unchanged;
        }

        self.debouncer.cancel();
        self.query.clear();
        if !self.settled_query.is_empty() {
            self.settled_query.clear();
            self.recompute_view();
        }
        debug!("query cleared");
        Update::ResetInput
    }

    /// Replace the source collection
    ///
    /// The view is recomputed against the settled query. The selection is
    /// left alone, including ids that no longer appear in the new source.
    pub fn set_source(&mut self, items: Vec<Item>) -> Update {
        if !self.mounted || items == self.source {
            return Update::Unchanged;
        }

        debug!(items = items.len(), "source replaced");
        self.source = items;
        self.recompute_view();
        Update::Redraw
    }

    /// Cancel pending work and stop reacting to events
    ///
    /// Calling this more than once is harmless.
    pub fn teardown(&mut self) {
        if self.debouncer.cancel() {
            debug!("pending query discarded on teardown");
        }
        self.mounted = false;
    }

    /// Whether the controller still accepts events
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Time until the pending query settles, if one is pending
    #[must_use]
    pub fn time_until_settle(&self) -> Option<Duration> {
        self.debouncer.remaining(self.clock.now())
    }

    /// Current phase of the query state machine
    #[must_use]
    pub const fn phase(&self) -> QueryPhase {
        if self.debouncer.is_pending() {
            QueryPhase::Pending
        } else {
            QueryPhase::Idle
        }
    }

    /// Raw input text
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Query the view was last computed from
    #[must_use]
    pub fn settled_query(&self) -> &str {
        &self.settled_query
    }

    /// Full source collection
    #[must_use]
    pub fn source(&self) -> &[Item] {
        &self.source
    }

    /// Number of visible items
    #[must_use]
    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// Visible item at `pos` in the view
    #[must_use]
    pub fn view_item(&self, pos: usize) -> Option<&Item> {
        self.view.get(pos).and_then(|&idx| self.source.get(idx))
    }

    /// Visible items, in source order
    pub fn view(&self) -> impl Iterator<Item = &Item> {
        self.view.iter().filter_map(|&idx| self.source.get(idx))
    }

    /// Check membership by id
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Number of selected ids
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// The selection set
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selected items present in the current source, in pick order
    ///
    /// When several source items share an id, the first one stands for it.
    #[must_use]
    pub fn selected_items(&self) -> Vec<&Item> {
        let mut by_id: HashMap<&str, &Item> = HashMap::with_capacity(self.selection.len());
        for item in &self.source {
            if self.selection.is_selected(&item.id) {
                by_id.entry(item.id.as_str()).or_insert(item);
            }
        }

        self.selection
            .ids()
            .filter_map(|id| by_id.get(id).copied())
            .collect()
    }

    /// Snapshot for one render cycle
    #[must_use]
    pub fn frame(&self) -> RenderFrame<'_> {
        RenderFrame {
            view: self.view().collect(),
            selected_count: self.selection.len(),
            query: &self.query,
            pending: self.debouncer.is_pending(),
            selection: &self.selection,
        }
    }

    fn recompute_view(&mut self) {
        self.view = matching_indices(&self.source, &self.settled_query);
        trace!(visible = self.view.len(), total = self.source.len(), "view recomputed");
    }
}

impl<C: Clock> Drop for SelectionController<C> {
    fn drop(&mut self) {
        self.teardown();
    }
}
