//! View-state for the analyze page: idle form, pending analysis, results.

use std::fmt;

use time::OffsetDateTime;
use uuid::Uuid;

use super::seller::SellerMetrics;
use super::validation::{validate_listing_url, UrlValidationError};

/// Ties a deferred completion to the submission that started it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnalysisTicket(Uuid);

impl AnalysisTicket {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AnalysisTicket {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnalysisTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisReport {
    pub url: String,
    pub seller: SellerMetrics,
    pub completed_at: OffsetDateTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Loading,
    Results,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading {
        url: String,
        ticket: AnalysisTicket,
    },
    Results {
        report: AnalysisReport,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started(AnalysisTicket),
    /// An analysis is already running; nothing changed.
    AlreadyLoading,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisSession {
    state: ViewState,
}

impl AnalysisSession {
    pub fn phase(&self) -> ViewPhase {
        match self.state {
            ViewState::Idle => ViewPhase::Idle,
            ViewState::Loading { .. } => ViewPhase::Loading,
            ViewState::Results { .. } => ViewPhase::Results,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase() == ViewPhase::Loading
    }

    /// Last submitted URL, if any analysis is pending or shown.
    pub fn url(&self) -> Option<&str> {
        match &self.state {
            ViewState::Idle => None,
            ViewState::Loading { url, .. } => Some(url),
            ViewState::Results { report } => Some(&report.url),
        }
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.state {
            ViewState::Results { report } => Some(report),
            _ => None,
        }
    }

    pub fn pending_ticket(&self) -> Option<AnalysisTicket> {
        match self.state {
            ViewState::Loading { ticket, .. } => Some(ticket),
            _ => None,
        }
    }

    /// Starts an analysis for `url`. The form validates too; this repeats the
    /// check so the session never holds a rejected URL.
    pub fn submit(&mut self, url: impl Into<String>) -> Result<SubmitOutcome, UrlValidationError> {
        if self.is_loading() {
            return Ok(SubmitOutcome::AlreadyLoading);
        }

        let url = url.into();
        validate_listing_url(&url)?;

        let ticket = AnalysisTicket::new();
        tracing::info!(%ticket, url = %url, "analysis started");
        self.state = ViewState::Loading { url, ticket };
        Ok(SubmitOutcome::Started(ticket))
    }

    /// Attaches a finished analysis. Returns false (and changes nothing) when
    /// `ticket` does not belong to the analysis currently pending.
    pub fn complete(&mut self, ticket: AnalysisTicket, seller: SellerMetrics) -> bool {
        let url = match &self.state {
            ViewState::Loading { url, ticket: pending } if *pending == ticket => url.clone(),
            _ => {
                tracing::debug!(%ticket, phase = ?self.phase(), "discarding stale analysis result");
                return false;
            }
        };

        tracing::info!(%ticket, seller = %seller.name, "analysis complete");
        self.state = ViewState::Results {
            report: AnalysisReport {
                url,
                seller,
                completed_at: OffsetDateTime::now_utc(),
            },
        };
        true
    }

    /// Drops the pending analysis for `ticket` without results, e.g. after a
    /// failed fixture load or when the page running it goes away.
    pub fn abandon(&mut self, ticket: AnalysisTicket) -> bool {
        if self.pending_ticket() != Some(ticket) {
            return false;
        }
        tracing::warn!(%ticket, "analysis abandoned");
        self.state = ViewState::Idle;
        true
    }

    /// Returns to the empty form, forgetting the URL and any result.
    pub fn back(&mut self) {
        if let Some(ticket) = self.pending_ticket() {
            tracing::debug!(%ticket, "leaving while analysis pending");
        }
        self.state = ViewState::Idle;
    }
}
