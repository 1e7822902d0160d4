//! Fetch phase tracking with explicit request supersession.
//!
//! A view issues a fresh request whenever its view-state changes. Requests
//! may complete out of order, so every request carries a [`FetchTicket`] and
//! only the most recently issued ticket may settle the phase. A slow response
//! for an older view is dropped instead of overwriting newer data.

/// The three mutually exclusive states of a view's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchPhase<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchPhase::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchPhase::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Result<T, String>> for FetchPhase<T> {
    fn from(outcome: Result<T, String>) -> Self {
        match outcome {
            Ok(value) => FetchPhase::Ready(value),
            Err(message) => FetchPhase::Failed(message),
        }
    }
}

/// Identifies one issued request. Only the latest ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

impl FetchTicket {
    #[must_use]
    pub fn seq(self) -> u64 {
        self.seq
    }
}

/// Owns a view's fetch phase. Single writer: only the owning view mutates it.
#[derive(Debug)]
pub struct FetchEffect<T> {
    phase: FetchPhase<T>,
    latest: u64,
}

impl<T> Default for FetchEffect<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchEffect<T> {
    /// A freshly mounted view starts out loading.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: FetchPhase::Loading,
            latest: 0,
        }
    }

    /// Starts a new request, superseding any still in flight.
    ///
    /// The previous value or error is discarded; the phase is `Loading` until
    /// the returned ticket settles.
    pub fn begin(&mut self) -> FetchTicket {
        self.latest += 1;
        self.phase = FetchPhase::Loading;
        FetchTicket { seq: self.latest }
    }

    /// Applies a request's outcome if `ticket` is still the latest one.
    ///
    /// Returns `false` (and changes nothing) for a superseded or cancelled ticket.
    pub fn settle(&mut self, ticket: FetchTicket, outcome: Result<T, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = outcome.into();
        true
    }

    /// Invalidates every outstanding ticket, e.g. when the view goes away.
    pub fn cancel(&mut self) {
        self.latest += 1;
    }

    #[must_use]
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.seq == self.latest
    }

    #[must_use]
    pub fn phase(&self) -> &FetchPhase<T> {
        &self.phase
    }
}
