//! Candidate view engine: filter, sort and selection over a borrowed record list,
//! plus the collaborators (sources, action callbacks) and HTTP surface around it.
//!
//! The engine functions in `filter`, `sort`, `selection` and `view` are pure. State
//! that persists between interactions lives in [`CandidateViewController`] or, over
//! HTTP, on the client which resends it with every request.

pub mod actions;
pub mod controller;
pub mod domain;
pub mod export;
pub mod filter;
pub mod presentation;
pub mod router;
pub mod selection;
pub mod service;
pub mod sort;
pub mod source;
pub mod view;

#[cfg(test)]
mod tests;

pub use actions::{Acknowledgement, AcknowledgementTone, ActionError, CandidateActions};
pub use controller::CandidateViewController;
pub use domain::{CandidateId, CandidateRecord, CandidateStatus, ContactMethod, Intent};
pub use export::{csv_string, write_csv, ExportError, CSV_HEADERS};
pub use filter::{filter_options, filter_records, matches_search, ActiveFilters, FilterDimension};
pub use presentation::{intent_tone, status_tone, Badge, BadgeTone, CandidateCard};
pub use router::{candidate_router, ContactRequest, StatusRequest, ViewRequest};
pub use selection::{SelectionState, SelectionSummary};
pub use service::{CandidateDashboardService, DashboardServiceError, DashboardSnapshot};
pub use sort::{compare, sort_records, SortDirection, SortKey, SortState};
pub use source::{
    parse_candidates, working_set, CandidateSource, DemoCandidateProvider,
    JsonFileCandidateSource, SourceError, StaticCandidateSource,
};
pub use view::{
    derive_view, selection_summary, visible_records, CandidateView, FilterOptions, ViewParams,
};
