//! Analytics panels: the metric/chart/heatmap catalogs, per-program selection
//! preferences, the rendering helpers for heatmaps and the geographic map, and
//! the radial skill chart of a candidate assessment.

pub mod catalog;
pub mod heatmap;
pub mod router;
pub mod selection;
pub mod skills;
pub mod store;

pub use catalog::{
    chart, heatmap as heatmap_definition, metric, AnalyticsCategory, CatalogEntry, ChartDefinition,
    ChartKind, HeatmapDefinition, MetricCategory, MetricDefinition, TimeRange, CHARTS,
    DEFAULT_CHARTS, DEFAULT_HEATMAPS, DEFAULT_METRICS, HEATMAPS, METRICS,
};
pub use heatmap::{
    bubble_radius, color_for_value, count_opacity, display_order, geographic_bubbles, intent_fill,
    GeoBubble, HeatmapGrid, StateStat, DEFAULT_STATE_DATA,
};
pub use router::analytics_router;
pub use selection::{CatalogSelection, CategoryState};
pub use skills::{
    radial_points, CategorySpokes, ProficiencyLevel, RadialPoint, RankedSkill, SkillAssessment,
    SkillCategory, SkillScore, SAMPLE_SKILL_CATEGORIES, TOP_SKILL_COUNT,
};
pub use store::{
    FilePreferenceStore, InMemoryPreferenceStore, PreferenceError, PreferenceKind,
    PreferenceStore, ProgramPreferences, ProgramSelections,
};
