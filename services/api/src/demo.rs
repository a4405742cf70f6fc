use crate::infra::{parse_sort_key, ConfiguredSource, InMemoryActionLog};
use clap::Args;
use starsyn::analytics::{
    display_order, geographic_bubbles, metric, CatalogSelection, FilePreferenceStore,
    HeatmapGrid, InMemoryPreferenceStore, MetricCategory, PreferenceKind, PreferenceStore,
    ProgramPreferences, SkillAssessment, DEFAULT_STATE_DATA, METRICS, TOP_SKILL_COUNT,
};
use starsyn::candidates::{
    csv_string, ActiveFilters, CandidateCard, CandidateDashboardService, CandidateId,
    CandidateStatus, CandidateViewController, ContactMethod, DashboardSnapshot,
    DemoCandidateProvider, FilterDimension, SelectionState, SortDirection, SortKey, SortState,
    ViewParams,
};
use starsyn::config::DataConfig;
use starsyn::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

/// View inputs shared by the candidate commands.
#[derive(Args, Debug, Default)]
pub(crate) struct ViewArgs {
    /// Case-insensitive search over name, program, skills and location
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Keep candidates with this intent (repeatable)
    #[arg(long)]
    pub(crate) intent: Vec<String>,
    /// Keep candidates in this program (repeatable)
    #[arg(long)]
    pub(crate) program: Vec<String>,
    /// Keep candidates with this status (repeatable)
    #[arg(long)]
    pub(crate) status: Vec<String>,
    /// Sort key: matchScore, activity, intent, program or status
    #[arg(long, value_parser = parse_sort_key)]
    pub(crate) sort: Option<SortKey>,
    /// Sort ascending instead of the default descending order
    #[arg(long)]
    pub(crate) ascending: bool,
    /// Candidate JSON file. Defaults to STARSYN_CANDIDATES_PATH, then the demo data.
    #[arg(long, value_name = "PATH")]
    pub(crate) source: Option<PathBuf>,
}

impl ViewArgs {
    fn params(&self) -> ViewParams {
        let direction = if self.ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        ViewParams {
            search: self.search.clone(),
            filters: ActiveFilters {
                intent: self.intent.clone(),
                program: self.program.clone(),
                status: self.status.clone(),
            },
            sort: SortState::new(self.sort.unwrap_or_default(), direction),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct CandidateListArgs {
    #[command(flatten)]
    pub(crate) view: ViewArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CandidateExportArgs {
    #[command(flatten)]
    pub(crate) view: ViewArgs,
    /// Export only these candidate ids when they are visible (repeatable)
    #[arg(long = "select", value_name = "ID")]
    pub(crate) selected: Vec<String>,
    /// Write the CSV to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub(crate) out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyticsShowArgs {
    /// Program whose saved panels should be shown
    #[arg(long)]
    pub(crate) program: String,
    /// Preference file. Defaults to STARSYN_PREFERENCES_PATH.
    #[arg(long, value_name = "PATH")]
    pub(crate) preferences: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyticsSkillsArgs {
    /// Candidate whose skill assessment should be shown
    #[arg(long)]
    pub(crate) candidate: String,
}

type CliDashboard = CandidateDashboardService<ConfiguredSource, InMemoryActionLog>;

fn dashboard_for(source: Option<PathBuf>) -> Result<CliDashboard, AppError> {
    let path = match source {
        Some(path) => Some(path),
        None => DataConfig::load().candidates_path,
    };
    Ok(CandidateDashboardService::new(
        Arc::new(ConfiguredSource::from_path(path)),
        Arc::new(InMemoryActionLog::default()),
    ))
}

pub(crate) fn run_candidate_list(args: CandidateListArgs) -> Result<(), AppError> {
    let params = args.view.params();
    let dashboard = dashboard_for(args.view.source)?;
    let snapshot = dashboard.view(&params, &SelectionState::new())?;
    render_snapshot(&snapshot);
    Ok(())
}

pub(crate) fn run_candidate_export(args: CandidateExportArgs) -> Result<(), AppError> {
    let CandidateExportArgs {
        view,
        selected,
        out,
    } = args;
    let params = view.params();
    let selection: SelectionState = selected.into_iter().map(CandidateId).collect();
    let dashboard = dashboard_for(view.source)?;

    match out {
        Some(path) => {
            let file = std::fs::File::create(&path)?;
            let rows = dashboard.export_csv(file, &params, &selection)?;
            println!("Exported {} candidates to {}", rows, path.display());
        }
        None => {
            let stdout = std::io::stdout();
            dashboard.export_csv(stdout.lock(), &params, &selection)?;
        }
    }
    Ok(())
}

pub(crate) fn run_analytics_show(args: AnalyticsShowArgs) -> Result<(), AppError> {
    let path = match args.preferences {
        Some(path) => path,
        None => DataConfig::load().preferences_path,
    };
    let store = Arc::new(FilePreferenceStore::new(path));
    let preferences = ProgramPreferences::new(store);
    render_program_panels(&preferences, &args.program);
    Ok(())
}

pub(crate) fn run_analytics_skills(args: AnalyticsSkillsArgs) -> Result<(), AppError> {
    render_assessment(&SkillAssessment::sample(args.candidate));
    Ok(())
}

/// Scripted session over the demo data: the controller drives the view the way
/// the dashboard would, then the service handles row actions and export.
pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("Starsyn candidate dashboard demo");

    let mut controller = CandidateViewController::new(DemoCandidateProvider::records());
    println!("\nInitial view (best match first)");
    render_rows(&controller.view().cards(controller.selection()));

    controller.on_filter_toggle(FilterDimension::Intent, "very-high");
    controller.on_filter_toggle(FilterDimension::Intent, "high");
    controller.on_sort_change(SortKey::Activity);
    let view = controller.view();
    println!(
        "\nHigh intent, most recent activity first ({} of {} candidates)",
        view.visible_count, view.total_count
    );
    render_rows(&view.cards(controller.selection()));

    controller.on_select_all_toggle();
    let summary = controller.view().selection;
    println!(
        "\nSelected {} visible candidates (all selected: {})",
        summary.visible_selected, summary.all_selected
    );

    controller.on_search_change("python");
    let view = controller.view();
    println!(
        "Search 'python' narrows the view to {} rows; {} of the selection still visible",
        view.visible_count, view.selection.visible_selected
    );

    println!("\nCSV export of the current view");
    let cards = controller.view().cards(controller.selection());
    match csv_string(&cards) {
        Ok(csv) => print!("{csv}"),
        Err(err) => println!("  Export unavailable: {err}"),
    }

    controller.clear_filters();
    println!(
        "\nFilters cleared: {} candidates visible, selection kept ({} ids)",
        controller.view().visible_count,
        controller.selection().len()
    );

    println!("\nRow actions");
    let actions = Arc::new(InMemoryActionLog::default());
    let dashboard = CandidateDashboardService::new(
        Arc::new(ConfiguredSource::from_path(None)),
        actions.clone(),
    );
    let revealed = CandidateId::from("cand-1001");
    let blind = CandidateId::from("cand-1002");
    let outcomes = [
        dashboard.toggle_favorite(&revealed),
        dashboard.contact(&revealed, ContactMethod::Email),
        dashboard.contact(&blind, ContactMethod::Phone),
        dashboard.request_reveal(&blind),
        dashboard.change_status(&blind, CandidateStatus::Contacted),
    ];
    for outcome in outcomes {
        match outcome {
            Ok(ack) => println!("- {}: {}", ack.title, ack.description),
            Err(err) => println!("- Rejected: {err}"),
        }
    }
    println!("Callbacks delivered: {}", actions.events().len());

    println!("\nAnalytics panels for program 'demo'");
    let preferences = ProgramPreferences::new(Arc::new(InMemoryPreferenceStore::new()));
    render_program_panels(&preferences, "demo");

    let mut selection = CatalogSelection::new(preferences.load(PreferenceKind::Metrics, "demo"));
    selection.select_category(METRICS, MetricCategory::General.key());
    match preferences.save(PreferenceKind::Metrics, "demo", selection.keys()) {
        Ok(()) => println!(
            "Added every general metric: {} metrics now selected",
            preferences.load(PreferenceKind::Metrics, "demo").len()
        ),
        Err(err) => println!("Saving metrics failed: {err}"),
    }

    println!("\nSkill assessment for {}", revealed.as_str());
    render_assessment(&SkillAssessment::sample(revealed.as_str()));

    Ok(())
}

fn render_snapshot(snapshot: &DashboardSnapshot) {
    if snapshot.filtered {
        println!(
            "{} of {} candidates",
            snapshot.visible_count, snapshot.total_count
        );
    } else {
        println!("{} candidates", snapshot.total_count);
    }

    if snapshot.cards.is_empty() {
        println!("No candidates match the current search and filters.");
        return;
    }
    render_rows(&snapshot.cards);
}

fn render_rows(cards: &[CandidateCard]) {
    for card in cards {
        let status = card
            .status
            .as_ref()
            .map(|badge| badge.label.as_str())
            .unwrap_or("-");
        let marker = if card.selected { "[x]" } else { "[ ]" };
        let favorite = if card.favorite { " *" } else { "" };
        println!(
            "  {marker} {:<14} {:>3}%  {:<18} {:<10} {:<12} {}{favorite}",
            card.display_name,
            card.match_score,
            card.program,
            card.intent.label,
            status,
            card.activity
        );
    }
}

fn render_assessment(assessment: &SkillAssessment) {
    println!("Top skills:");
    for ranked in assessment.top_skills(TOP_SKILL_COUNT) {
        println!(
            "  - {:<22} {:>3}  {:<12} {}",
            ranked.skill.name,
            ranked.skill.score,
            ranked.level.label(),
            ranked.category_name
        );
    }

    println!("Radial chart:");
    for (category, group) in assessment.categories.iter().zip(assessment.spokes()) {
        let ends: Vec<String> = group
            .points
            .iter()
            .map(|point| format!("{} ({:.1}, {:.1})", point.skill_id, point.x, point.y))
            .collect();
        println!(
            "  {} {}% [{}]: {}",
            category.name,
            category.score,
            group.color,
            ends.join(", ")
        );
    }
}

fn render_program_panels<S>(preferences: &ProgramPreferences<S>, program_id: &str)
where
    S: PreferenceStore + 'static,
{
    let selections = preferences.load_all(program_id);

    println!("Metrics:");
    for key in &selections.metrics {
        match metric(key) {
            Some(entry) => println!("  - {}: {}", entry.title, entry.value),
            None => println!("  - {key} (no longer in the catalog)"),
        }
    }
    let selected = CatalogSelection::new(selections.metrics.clone());
    for category in MetricCategory::ALL {
        let state = selected.category_state(METRICS, category.key());
        println!(
            "  {}: {}/{} selected",
            category.label(),
            state.selected,
            state.total
        );
    }

    println!("Charts: {}", selections.charts.join(", "));

    println!("Heatmaps:");
    for definition in display_order(&selections.heatmaps) {
        if definition.is_geographic() {
            let bubbles = geographic_bubbles(&DEFAULT_STATE_DATA);
            let top: Vec<&str> = bubbles
                .iter()
                .take(3)
                .map(|bubble| bubble.tooltip.as_str())
                .collect();
            println!(
                "  - {} ({} states; {})",
                definition.title,
                bubbles.len(),
                top.join("; ")
            );
        } else {
            let grid = HeatmapGrid::resolve(definition);
            println!(
                "  - {} ({}x{} cells, range {}..{})",
                definition.title,
                grid.x_labels.len(),
                grid.y_labels.len(),
                grid.min,
                grid.max
            );
        }
    }
}
