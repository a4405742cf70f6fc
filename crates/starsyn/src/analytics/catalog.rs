//! Static catalogs of dashboard panels: headline metrics, trend charts and heatmaps.
//!
//! Keys are the stable identifiers persisted in program preferences; everything else
//! is display data.

use serde::Serialize;

/// Shared surface of metric, chart and heatmap definitions used by the category
/// selection helpers.
pub trait CatalogEntry {
    fn key(&self) -> &'static str;
    fn category(&self) -> &'static str;
    fn important(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricCategory {
    Engagement,
    Conversion,
    Activity,
    General,
}

impl MetricCategory {
    pub const ALL: [MetricCategory; 4] = [
        MetricCategory::Engagement,
        MetricCategory::Conversion,
        MetricCategory::Activity,
        MetricCategory::General,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            MetricCategory::Engagement => "engagement",
            MetricCategory::Conversion => "conversion",
            MetricCategory::Activity => "activity",
            MetricCategory::General => "general",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MetricCategory::Engagement => "Engagement",
            MetricCategory::Conversion => "Conversion",
            MetricCategory::Activity => "Activity",
            MetricCategory::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricDefinition {
    pub key: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    pub category: MetricCategory,
    pub sparkline: &'static [f64],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub important: bool,
}

impl CatalogEntry for MetricDefinition {
    fn key(&self) -> &'static str {
        self.key
    }

    fn category(&self) -> &'static str {
        self.category.key()
    }

    fn important(&self) -> bool {
        self.important
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsCategory {
    Performance,
    Distribution,
    Conversion,
    Prediction,
}

impl AnalyticsCategory {
    pub const ALL: [AnalyticsCategory; 4] = [
        AnalyticsCategory::Performance,
        AnalyticsCategory::Distribution,
        AnalyticsCategory::Conversion,
        AnalyticsCategory::Prediction,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            AnalyticsCategory::Performance => "performance",
            AnalyticsCategory::Distribution => "distribution",
            AnalyticsCategory::Conversion => "conversion",
            AnalyticsCategory::Prediction => "prediction",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AnalyticsCategory::Performance => "Performance",
            AnalyticsCategory::Distribution => "Distribution",
            AnalyticsCategory::Conversion => "Conversion",
            AnalyticsCategory::Prediction => "Prediction",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Area,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeRange {
    #[serde(rename = "7days")]
    SevenDays,
    #[serde(rename = "30days")]
    ThirtyDays,
    #[serde(rename = "90days")]
    NinetyDays,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::SevenDays,
        TimeRange::ThirtyDays,
        TimeRange::NinetyDays,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7days",
            TimeRange::ThirtyDays => "30days",
            TimeRange::NinetyDays => "90days",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.key() == raw.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: &'static str,
    pub data: &'static [f64],
    pub color: &'static str,
    /// Drawn dashed; used for forecast lines.
    pub dashed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSeries {
    pub range: TimeRange,
    pub labels: &'static [&'static str],
    pub datasets: &'static [ChartDataset],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartDefinition {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ChartKind,
    pub category: AnalyticsCategory,
    pub important: bool,
    pub series: &'static [ChartSeries],
}

impl ChartDefinition {
    pub fn series_for(&self, range: TimeRange) -> Option<&'static ChartSeries> {
        self.series.iter().find(|series| series.range == range)
    }
}

impl CatalogEntry for ChartDefinition {
    fn key(&self) -> &'static str {
        self.key
    }

    fn category(&self) -> &'static str {
        self.category.key()
    }

    fn important(&self) -> bool {
        self.important
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub x: &'static str,
    pub y: &'static str,
    pub v: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatmapDefinition {
    pub key: &'static str,
    /// Rendering id; the geographic map is special-cased on it.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: AnalyticsCategory,
    pub important: bool,
    pub x_labels: &'static [&'static str],
    pub y_labels: &'static [&'static str],
    pub cells: &'static [HeatmapCell],
    pub color_scale: Option<&'static [&'static str]>,
}

impl HeatmapDefinition {
    pub fn is_geographic(&self) -> bool {
        self.id == GEOGRAPHIC_HEATMAP_ID
    }
}

impl CatalogEntry for HeatmapDefinition {
    fn key(&self) -> &'static str {
        self.key
    }

    fn category(&self) -> &'static str {
        self.category.key()
    }

    fn important(&self) -> bool {
        self.important
    }
}

pub const GEOGRAPHIC_HEATMAP_ID: &str = "geographic-distribution";

pub const DEFAULT_METRICS: [&str; 6] = [
    "impression_rate",
    "application_completion",
    "high_intent",
    "new_signups",
    "conversion_rate",
    "active_applicants",
];

pub const DEFAULT_CHARTS: [&str; 4] = [
    "intent_activity",
    "conversion_funnel",
    "capability_strength",
    "response_rate",
];

pub const DEFAULT_HEATMAPS: [&str; 3] = [
    "geographic_distribution",
    "intent_capability",
    "conversion_stage",
];

pub fn metric(key: &str) -> Option<&'static MetricDefinition> {
    METRICS.iter().find(|entry| entry.key == key)
}

pub fn chart(key: &str) -> Option<&'static ChartDefinition> {
    CHARTS.iter().find(|entry| entry.key == key)
}

pub fn heatmap(key: &str) -> Option<&'static HeatmapDefinition> {
    HEATMAPS.iter().find(|entry| entry.key == key)
}

pub static METRICS: &[MetricDefinition] = &[
    MetricDefinition {
        key: "impression_rate",
        title: "Impression Rate",
        value: "84%",
        change: Some("12.5%"),
        trend: Some(Trend::Up),
        category: MetricCategory::Engagement,
        sparkline: &[12.0, 15.0, 18.0, 14.0, 20.0, 25.0, 22.0],
        description: Some("The percentage of users who viewed your program details"),
        important: true,
    },
    MetricDefinition {
        key: "click_through_rate",
        title: "Click-Through Rate",
        value: "21.3%",
        change: Some("3.2%"),
        trend: Some(Trend::Up),
        category: MetricCategory::Engagement,
        sparkline: &[15.0, 12.0, 14.0, 18.0, 20.0, 22.0, 25.0],
        description: None,
        important: false,
    },
    MetricDefinition {
        key: "application_completion",
        title: "Application Completion",
        value: "62.7%",
        change: Some("5.8%"),
        trend: Some(Trend::Down),
        category: MetricCategory::Conversion,
        sparkline: &[65.0, 62.0, 58.0, 60.0, 55.0, 58.0, 54.0],
        description: Some("Percentage of started applications that are completed"),
        important: true,
    },
    MetricDefinition {
        key: "average_session",
        title: "Avg. Session Duration",
        value: "4:32",
        change: Some("0:48"),
        trend: Some(Trend::Up),
        category: MetricCategory::Engagement,
        sparkline: &[3.5, 3.8, 4.1, 3.9, 4.2, 4.5, 4.8],
        description: None,
        important: false,
    },
    MetricDefinition {
        key: "new_signups",
        title: "New Signups",
        value: "287",
        change: Some("16.4%"),
        trend: Some(Trend::Up),
        category: MetricCategory::Conversion,
        sparkline: &[220.0, 245.0, 260.0, 248.0, 265.0, 280.0, 295.0],
        description: None,
        important: true,
    },
    MetricDefinition {
        key: "conversion_rate",
        title: "Conversion Rate",
        value: "8.3%",
        change: Some("1.2%"),
        trend: Some(Trend::Up),
        category: MetricCategory::Conversion,
        sparkline: &[6.5, 7.0, 7.2, 7.8, 8.0, 8.3, 8.5],
        description: Some("Percentage of visitors who submit an application"),
        important: false,
    },
    MetricDefinition {
        key: "active_applicants",
        title: "Active Applicants",
        value: "1,248",
        change: Some("3.1%"),
        trend: Some(Trend::Up),
        category: MetricCategory::Activity,
        sparkline: &[1150.0, 1180.0, 1210.0, 1195.0, 1220.0, 1240.0, 1260.0],
        description: None,
        important: false,
    },
    MetricDefinition {
        key: "total_applicants",
        title: "Total Applicants",
        value: "3,824",
        change: None,
        trend: None,
        category: MetricCategory::General,
        sparkline: &[],
        description: Some("Total number of applicants across all programs"),
        important: false,
    },
    MetricDefinition {
        key: "bounce_rate",
        title: "Bounce Rate",
        value: "38%",
        change: Some("2.5%"),
        trend: Some(Trend::Down),
        category: MetricCategory::Engagement,
        sparkline: &[44.0, 42.0, 40.0, 41.0, 39.0, 38.0, 36.0],
        description: Some("Percentage of visitors who leave without further interaction"),
        important: false,
    },
    MetricDefinition {
        key: "high_intent",
        title: "High Intent Leads",
        value: "512",
        change: Some("8.7%"),
        trend: Some(Trend::Up),
        category: MetricCategory::Conversion,
        sparkline: &[425.0, 460.0, 475.0, 490.0, 505.0, 520.0, 540.0],
        description: Some("Leads identified as high intent by AI analysis"),
        important: true,
    },
    MetricDefinition {
        key: "returning_users",
        title: "Returning Users",
        value: "45%",
        change: Some("2.1%"),
        trend: Some(Trend::Up),
        category: MetricCategory::Engagement,
        sparkline: &[40.0, 41.0, 42.0, 43.0, 44.0, 45.0, 46.0],
        description: None,
        important: false,
    },
    MetricDefinition {
        key: "acceptance_rate",
        title: "Acceptance Rate",
        value: "18.4%",
        change: Some("0.7%"),
        trend: Some(Trend::Neutral),
        category: MetricCategory::General,
        sparkline: &[18.2, 18.3, 18.5, 18.1, 18.3, 18.4, 18.5],
        description: Some("Percentage of applicants accepted to programs"),
        important: false,
    },
];

const WEEKDAYS: &[&str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEKS: &[&str] = &["W1", "W2", "W3", "W4"];
const QUARTER: &[&str] = &["Apr", "May", "Jun"];
const CAPABILITIES: &[&str] = &["Python", "ML/AI", "Stats", "Cyber", "Data"];
const FUNNEL: &[&str] = &["Aware", "Interest", "Apply", "Accept"];

const fn line(label: &'static str, data: &'static [f64], color: &'static str) -> ChartDataset {
    ChartDataset {
        label,
        data,
        color,
        dashed: false,
    }
}

pub static CHARTS: &[ChartDefinition] = &[
    ChartDefinition {
        key: "intent_activity",
        title: "Intent Activity",
        description: "Measures user interest and engagement over time",
        kind: ChartKind::Area,
        category: AnalyticsCategory::Performance,
        important: true,
        series: &[
            ChartSeries {
                range: TimeRange::SevenDays,
                labels: WEEKDAYS,
                datasets: &[line(
                    "Intent Score",
                    &[42.0, 46.0, 45.0, 58.0, 62.0, 65.0, 72.0],
                    "#6200ee",
                )],
            },
            ChartSeries {
                range: TimeRange::ThirtyDays,
                labels: WEEKS,
                datasets: &[line("Intent Score", &[45.0, 58.0, 62.0, 81.0], "#6200ee")],
            },
            ChartSeries {
                range: TimeRange::NinetyDays,
                labels: QUARTER,
                datasets: &[line("Intent Score", &[38.0, 55.0, 72.0], "#6200ee")],
            },
        ],
    },
    ChartDefinition {
        key: "capability_strength",
        title: "Capability Strength",
        description: "Distribution of candidate skills and capabilities",
        kind: ChartKind::Bar,
        category: AnalyticsCategory::Distribution,
        important: false,
        series: &[
            ChartSeries {
                range: TimeRange::SevenDays,
                labels: CAPABILITIES,
                datasets: &[line(
                    "Signal Strength",
                    &[78.0, 92.0, 84.0, 73.0, 69.0],
                    "#03dac6",
                )],
            },
            ChartSeries {
                range: TimeRange::ThirtyDays,
                labels: CAPABILITIES,
                datasets: &[line(
                    "Signal Strength",
                    &[75.0, 88.0, 82.0, 70.0, 68.0],
                    "#03dac6",
                )],
            },
            ChartSeries {
                range: TimeRange::NinetyDays,
                labels: CAPABILITIES,
                datasets: &[line(
                    "Signal Strength",
                    &[68.0, 79.0, 75.0, 68.0, 62.0],
                    "#03dac6",
                )],
            },
        ],
    },
    ChartDefinition {
        key: "conversion_funnel",
        title: "Conversion Funnel",
        description: "Tracks movement through recruitment stages",
        kind: ChartKind::Bar,
        category: AnalyticsCategory::Conversion,
        important: true,
        series: &[
            ChartSeries {
                range: TimeRange::SevenDays,
                labels: FUNNEL,
                datasets: &[line("Candidates", &[120.0, 85.0, 42.0, 24.0], "#bb86fc")],
            },
            ChartSeries {
                range: TimeRange::ThirtyDays,
                labels: FUNNEL,
                datasets: &[line("Candidates", &[320.0, 195.0, 86.0, 48.0], "#bb86fc")],
            },
            ChartSeries {
                range: TimeRange::NinetyDays,
                labels: FUNNEL,
                datasets: &[line("Candidates", &[580.0, 385.0, 180.0, 95.0], "#bb86fc")],
            },
        ],
    },
    ChartDefinition {
        key: "response_rate",
        title: "Response Over Time",
        description: "Shows candidate response rates to outreach efforts",
        kind: ChartKind::Line,
        category: AnalyticsCategory::Performance,
        important: false,
        series: &[
            ChartSeries {
                range: TimeRange::SevenDays,
                labels: WEEKDAYS,
                datasets: &[line(
                    "Response Rate",
                    &[52.0, 54.0, 59.0, 63.0, 58.0, 56.0, 60.0],
                    "#03dac6",
                )],
            },
            ChartSeries {
                range: TimeRange::ThirtyDays,
                labels: WEEKS,
                datasets: &[line("Response Rate", &[54.0, 58.0, 62.0, 64.0], "#03dac6")],
            },
            ChartSeries {
                range: TimeRange::NinetyDays,
                labels: QUARTER,
                datasets: &[line("Response Rate", &[48.0, 56.0, 65.0], "#03dac6")],
            },
        ],
    },
    ChartDefinition {
        key: "enrollment_forecast",
        title: "Enrollment Forecast",
        description: "Predicted enrollment numbers for upcoming periods",
        kind: ChartKind::Line,
        category: AnalyticsCategory::Prediction,
        important: false,
        series: &[
            ChartSeries {
                range: TimeRange::SevenDays,
                labels: WEEKDAYS,
                datasets: &[
                    forecast(&[15.0, 18.0, 22.0, 19.0, 24.0, 28.0, 32.0]),
                    line(
                        "Actual",
                        &[16.0, 20.0, 24.0, 18.0, 25.0, 30.0, 31.0],
                        "#6200ee",
                    ),
                ],
            },
            ChartSeries {
                range: TimeRange::ThirtyDays,
                labels: WEEKS,
                datasets: &[
                    forecast(&[42.0, 55.0, 63.0, 72.0]),
                    line("Actual", &[45.0, 52.0, 68.0, 76.0], "#6200ee"),
                ],
            },
            ChartSeries {
                range: TimeRange::NinetyDays,
                labels: QUARTER,
                datasets: &[
                    forecast(&[120.0, 145.0, 170.0]),
                    line("Actual", &[124.0, 152.0, 168.0], "#6200ee"),
                ],
            },
        ],
    },
];

const fn forecast(data: &'static [f64]) -> ChartDataset {
    ChartDataset {
        label: "Forecast",
        data,
        color: "#bb86fc",
        dashed: true,
    }
}

const fn cell(x: &'static str, y: &'static str, v: u32) -> HeatmapCell {
    HeatmapCell { x, y, v }
}

const PROGRAMS: &[&str] = &[
    "Computer Science",
    "Data Science",
    "Cybersecurity",
    "AI/ML",
    "Software Eng",
];

pub static HEATMAPS: &[HeatmapDefinition] = &[
    HeatmapDefinition {
        key: "geographic_distribution",
        id: GEOGRAPHIC_HEATMAP_ID,
        title: "Geographic Distribution",
        description: "Shows candidate locations and intent levels across the United States",
        category: AnalyticsCategory::Distribution,
        important: true,
        x_labels: &[],
        y_labels: &[],
        cells: &[],
        color_scale: Some(&["#63b3ed", "#9f7aea", "#ed64a6"]),
    },
    HeatmapDefinition {
        key: "intent_capability",
        id: "intent-capability",
        title: "Intent × Capability Matrix",
        description: "Shows the relationship between candidate intent level and their capabilities",
        category: AnalyticsCategory::Distribution,
        important: true,
        x_labels: &["Low Intent", "Medium Intent", "High Intent"],
        y_labels: &["Python", "ML/AI", "Stats", "Cyber", "Data Viz"],
        cells: &[
            cell("Low Intent", "Python", 4),
            cell("Medium Intent", "Python", 7),
            cell("High Intent", "Python", 11),
            cell("Low Intent", "ML/AI", 3),
            cell("Medium Intent", "ML/AI", 6),
            cell("High Intent", "ML/AI", 10),
            cell("Low Intent", "Stats", 2),
            cell("Medium Intent", "Stats", 5),
            cell("High Intent", "Stats", 8),
            cell("Low Intent", "Cyber", 1),
            cell("Medium Intent", "Cyber", 4),
            cell("High Intent", "Cyber", 7),
            cell("Low Intent", "Data Viz", 2),
            cell("Medium Intent", "Data Viz", 6),
            cell("High Intent", "Data Viz", 9),
        ],
        color_scale: Some(&["#ffebee", "#f48fb1", "#f06292", "#c2185b"]),
    },
    HeatmapDefinition {
        key: "program_interest",
        id: "program-interest",
        title: "Program Interest Distribution",
        description: "Shows candidate interest levels across different programs and departments",
        category: AnalyticsCategory::Distribution,
        important: false,
        x_labels: &["Low", "Medium", "High"],
        y_labels: PROGRAMS,
        cells: &[
            cell("Low", "Computer Science", 5),
            cell("Medium", "Computer Science", 8),
            cell("High", "Computer Science", 14),
            cell("Low", "Data Science", 4),
            cell("Medium", "Data Science", 9),
            cell("High", "Data Science", 12),
            cell("Low", "Cybersecurity", 3),
            cell("Medium", "Cybersecurity", 6),
            cell("High", "Cybersecurity", 9),
            cell("Low", "AI/ML", 2),
            cell("Medium", "AI/ML", 8),
            cell("High", "AI/ML", 15),
            cell("Low", "Software Eng", 6),
            cell("Medium", "Software Eng", 10),
            cell("High", "Software Eng", 11),
        ],
        color_scale: Some(&["#e3f2fd", "#90caf9", "#42a5f5", "#1565c0"]),
    },
    HeatmapDefinition {
        key: "conversion_stage",
        id: "conversion-stage",
        title: "Conversion Stage Analysis",
        description: "Shows candidate counts at different conversion stages by program",
        category: AnalyticsCategory::Conversion,
        important: true,
        x_labels: &["Awareness", "Interest", "Application", "Accepted"],
        y_labels: PROGRAMS,
        cells: &[
            cell("Awareness", "Computer Science", 24),
            cell("Interest", "Computer Science", 18),
            cell("Application", "Computer Science", 12),
            cell("Accepted", "Computer Science", 8),
            cell("Awareness", "Data Science", 28),
            cell("Interest", "Data Science", 22),
            cell("Application", "Data Science", 15),
            cell("Accepted", "Data Science", 10),
            cell("Awareness", "Cybersecurity", 20),
            cell("Interest", "Cybersecurity", 15),
            cell("Application", "Cybersecurity", 8),
            cell("Accepted", "Cybersecurity", 5),
            cell("Awareness", "AI/ML", 22),
            cell("Interest", "AI/ML", 17),
            cell("Application", "AI/ML", 12),
            cell("Accepted", "AI/ML", 9),
            cell("Awareness", "Software Eng", 26),
            cell("Interest", "Software Eng", 20),
            cell("Application", "Software Eng", 14),
            cell("Accepted", "Software Eng", 11),
        ],
        color_scale: Some(&["#e8f5e9", "#a5d6a7", "#66bb6a", "#2e7d32"]),
    },
    HeatmapDefinition {
        key: "demographic_distribution",
        id: "demographic-distribution",
        title: "Demographic Distribution",
        description: "Shows the distribution of candidates across different demographic factors",
        category: AnalyticsCategory::Distribution,
        important: false,
        x_labels: &["18-24", "25-34", "35-44", "45+"],
        y_labels: &["Urban", "Suburban", "Rural", "International"],
        cells: &[
            cell("18-24", "Urban", 18),
            cell("25-34", "Urban", 24),
            cell("35-44", "Urban", 12),
            cell("45+", "Urban", 6),
            cell("18-24", "Suburban", 14),
            cell("25-34", "Suburban", 20),
            cell("35-44", "Suburban", 15),
            cell("45+", "Suburban", 8),
            cell("18-24", "Rural", 7),
            cell("25-34", "Rural", 10),
            cell("35-44", "Rural", 8),
            cell("45+", "Rural", 5),
            cell("18-24", "International", 12),
            cell("25-34", "International", 16),
            cell("35-44", "International", 6),
            cell("45+", "International", 2),
        ],
        color_scale: Some(&["#fff8e1", "#ffecb3", "#ffd54f", "#ffb300"]),
    },
];
