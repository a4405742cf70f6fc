use std::io::Write;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::actions::{Acknowledgement, ActionError, CandidateActions};
use super::domain::{CandidateId, CandidateRecord, CandidateStatus, ContactMethod};
use super::export::{write_csv, ExportError};
use super::presentation::CandidateCard;
use super::selection::{SelectionState, SelectionSummary};
use super::source::{CandidateSource, SourceError};
use super::view::{derive_view, FilterOptions, ViewParams};

/// Service composing a candidate source with the action callbacks.
///
/// Every call refetches the working set; nothing is cached between requests.
pub struct CandidateDashboardService<S, A> {
    source: Arc<S>,
    actions: Arc<A>,
}

/// Serialized answer of the view endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub cards: Vec<CandidateCard>,
    pub total_count: usize,
    pub visible_count: usize,
    pub filtered: bool,
    pub selection: SelectionSummary,
    pub filter_options: FilterOptions,
}

impl<S, A> CandidateDashboardService<S, A>
where
    S: CandidateSource + 'static,
    A: CandidateActions + 'static,
{
    pub fn new(source: Arc<S>, actions: Arc<A>) -> Self {
        Self { source, actions }
    }

    pub fn records(&self) -> Result<Vec<CandidateRecord>, DashboardServiceError> {
        Ok(self.source.fetch_candidates()?)
    }

    pub fn view(
        &self,
        params: &ViewParams,
        selection: &SelectionState,
    ) -> Result<DashboardSnapshot, DashboardServiceError> {
        let records = self.records()?;
        let view = derive_view(&records, params, selection);

        Ok(DashboardSnapshot {
            cards: view.cards(selection),
            total_count: view.total_count,
            visible_count: view.visible_count,
            filtered: view.is_filtered(),
            selection: view.selection,
            filter_options: FilterOptions::collect(&records),
        })
    }

    /// Cards for an export: the selected visible rows, or every visible row when
    /// none of them is selected.
    pub fn export_cards(
        &self,
        params: &ViewParams,
        selection: &SelectionState,
    ) -> Result<Vec<CandidateCard>, DashboardServiceError> {
        let snapshot = self.view(params, selection)?;
        let cards = if snapshot.selection.visible_selected > 0 {
            snapshot.cards.into_iter().filter(|card| card.selected).collect()
        } else {
            snapshot.cards
        };
        Ok(cards)
    }

    pub fn export_csv<W: Write>(
        &self,
        writer: W,
        params: &ViewParams,
        selection: &SelectionState,
    ) -> Result<usize, DashboardServiceError> {
        let cards = self.export_cards(params, selection)?;
        write_csv(writer, &cards)?;
        info!(rows = cards.len(), "candidate export written");
        Ok(cards.len())
    }

    /// Flip the favorite flag as seen in the current data. The callback receives
    /// the new value exactly once; local state is left for the next refresh.
    pub fn toggle_favorite(
        &self,
        id: &CandidateId,
    ) -> Result<Acknowledgement, DashboardServiceError> {
        let record = self.find(id)?;
        let favorite = !record.favorite;
        self.actions.request_favorite_toggle(id, favorite)?;
        info!(candidate = %id, favorite, "favorite toggle requested");
        Ok(Acknowledgement::favorite(
            id.clone(),
            favorite,
            record.display_name(),
        ))
    }

    pub fn contact(
        &self,
        id: &CandidateId,
        method: ContactMethod,
    ) -> Result<Acknowledgement, DashboardServiceError> {
        let record = self.find(id)?;
        let reachable = match method {
            ContactMethod::Email => record.revealed_email().is_some(),
            ContactMethod::Phone => record.revealed_phone().is_some(),
            ContactMethod::Message => true,
        };
        if !reachable {
            return Err(DashboardServiceError::ContactUnavailable {
                id: id.clone(),
                method,
            });
        }

        self.actions.request_contact(id, method)?;
        info!(candidate = %id, method = method.label(), "contact requested");
        Ok(Acknowledgement::contact(
            id.clone(),
            method,
            record.display_name(),
        ))
    }

    pub fn request_reveal(
        &self,
        id: &CandidateId,
    ) -> Result<Acknowledgement, DashboardServiceError> {
        self.find(id)?;
        self.actions.request_reveal(id)?;
        info!(candidate = %id, "reveal requested");
        Ok(Acknowledgement::reveal(id.clone()))
    }

    pub fn change_status(
        &self,
        id: &CandidateId,
        status: CandidateStatus,
    ) -> Result<Acknowledgement, DashboardServiceError> {
        if status.as_str().trim().is_empty() {
            return Err(DashboardServiceError::InvalidStatus);
        }
        self.find(id)?;
        self.actions.request_status_change(id, &status)?;
        info!(candidate = %id, status = status.as_str(), "status change requested");
        Ok(Acknowledgement::status(id.clone(), &status))
    }

    fn find(&self, id: &CandidateId) -> Result<CandidateRecord, DashboardServiceError> {
        self.records()?
            .into_iter()
            .find(|record| &record.id == id)
            .ok_or_else(|| DashboardServiceError::NotFound(id.clone()))
    }
}

/// Error raised by the dashboard service.
#[derive(Debug, thiserror::Error)]
pub enum DashboardServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("candidate '{0}' not found")]
    NotFound(CandidateId),
    #[error("candidate '{id}' cannot be reached by {}", .method.label())]
    ContactUnavailable { id: CandidateId, method: ContactMethod },
    #[error("status must not be empty")]
    InvalidStatus,
}
