use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::catalog::{heatmap, HeatmapDefinition, HEATMAPS};

/// Fallback scale for heatmaps that do not define their own.
pub const DEFAULT_COLOR_SCALE: [&str; 4] = ["#f3e5f5", "#ce93d8", "#9c27b0", "#4a148c"];

/// Dense grid of a heatmap definition: `rows[y][x]`, missing cells read as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapGrid {
    pub key: &'static str,
    pub title: &'static str,
    pub x_labels: Vec<&'static str>,
    pub y_labels: Vec<&'static str>,
    pub rows: Vec<Vec<u32>>,
    pub min: u32,
    pub max: u32,
    pub color_scale: Vec<&'static str>,
}

impl HeatmapGrid {
    pub fn resolve(definition: &HeatmapDefinition) -> Self {
        let rows: Vec<Vec<u32>> = definition
            .y_labels
            .iter()
            .map(|y| {
                definition
                    .x_labels
                    .iter()
                    .map(|x| {
                        definition
                            .cells
                            .iter()
                            .find(|cell| cell.x == *x && cell.y == *y)
                            .map(|cell| cell.v)
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();

        // Legend bounds come from the declared cells, not the zero-filled gaps.
        let min = definition.cells.iter().map(|cell| cell.v).min().unwrap_or(0);
        let max = definition.cells.iter().map(|cell| cell.v).max().unwrap_or(0);

        Self {
            key: definition.key,
            title: definition.title,
            x_labels: definition.x_labels.to_vec(),
            y_labels: definition.y_labels.to_vec(),
            rows,
            min,
            max,
            color_scale: definition
                .color_scale
                .map(|scale| scale.to_vec())
                .unwrap_or_else(|| DEFAULT_COLOR_SCALE.to_vec()),
        }
    }

    pub fn color_at(&self, x: usize, y: usize) -> Option<&'static str> {
        let value = *self.rows.get(y)?.get(x)?;
        Some(color_for_value(value, self.max, &self.color_scale))
    }
}

/// Quartile bucket of `value / max` into the scale. Short scales reuse their last
/// color for the upper buckets; an empty scale falls back to the default one.
pub fn color_for_value(value: u32, max: u32, scale: &[&'static str]) -> &'static str {
    let scale = if scale.is_empty() {
        &DEFAULT_COLOR_SCALE[..]
    } else {
        scale
    };

    let bucket = if max == 0 {
        0
    } else {
        let normalized = f64::from(value) / f64::from(max);
        if normalized < 0.25 {
            0
        } else if normalized < 0.5 {
            1
        } else if normalized < 0.75 {
            2
        } else {
            3
        }
    };

    scale[bucket.min(scale.len() - 1)]
}

/// Heatmaps to render for a stored selection. Unknown ids are dropped, an empty
/// selection shows the whole catalog, and the geographic map always goes last.
pub fn display_order(keys: &[String]) -> Vec<&'static HeatmapDefinition> {
    let mut resolved: Vec<&'static HeatmapDefinition> = if keys.is_empty() {
        HEATMAPS.iter().collect()
    } else {
        keys.iter()
            .filter_map(|key| {
                let found = heatmap(key);
                if found.is_none() {
                    debug!(%key, "no heatmap registered for key");
                }
                found
            })
            .collect()
    };

    resolved.sort_by_key(|definition| definition.is_geographic());
    resolved
}

/// Candidate count and average intent for one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateStat {
    pub state: &'static str,
    pub count: u32,
    pub avg_intent: u32,
}

const fn stat(state: &'static str, count: u32, avg_intent: u32) -> StateStat {
    StateStat {
        state,
        count,
        avg_intent,
    }
}

pub static DEFAULT_STATE_DATA: [StateStat; 51] = [
    stat("CA", 235, 72),
    stat("TX", 188, 68),
    stat("NY", 172, 75),
    stat("FL", 156, 64),
    stat("IL", 112, 70),
    stat("PA", 105, 67),
    stat("OH", 98, 65),
    stat("GA", 95, 71),
    stat("NC", 92, 69),
    stat("MI", 88, 66),
    stat("NJ", 85, 73),
    stat("VA", 82, 74),
    stat("WA", 79, 76),
    stat("MA", 75, 77),
    stat("AZ", 72, 63),
    stat("IN", 65, 62),
    stat("TN", 62, 64),
    stat("MO", 58, 61),
    stat("MD", 56, 72),
    stat("WI", 55, 68),
    stat("MN", 54, 71),
    stat("CO", 52, 75),
    stat("AL", 48, 63),
    stat("SC", 45, 65),
    stat("LA", 44, 61),
    stat("KY", 42, 62),
    stat("OR", 41, 73),
    stat("OK", 38, 60),
    stat("CT", 36, 74),
    stat("IA", 32, 63),
    stat("MS", 30, 59),
    stat("AR", 29, 60),
    stat("KS", 28, 62),
    stat("UT", 27, 69),
    stat("NV", 25, 68),
    stat("NM", 22, 64),
    stat("NE", 20, 61),
    stat("WV", 18, 59),
    stat("ID", 16, 66),
    stat("HI", 14, 70),
    stat("ME", 13, 68),
    stat("NH", 12, 72),
    stat("RI", 11, 71),
    stat("MT", 10, 65),
    stat("DE", 9, 67),
    stat("SD", 8, 62),
    stat("AK", 7, 64),
    stat("ND", 6, 60),
    stat("VT", 5, 71),
    stat("WY", 4, 63),
    stat("DC", 20, 78),
];

/// CSS `rgba(...)` color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

const MIN_RADIUS: f64 = 5.0;
const MAX_RADIUS: f64 = 25.0;

/// Bubble radius scaled linearly between 5 and 25 by share of the largest count.
pub fn bubble_radius(count: u32, max_count: u32) -> f64 {
    if max_count == 0 {
        return MIN_RADIUS;
    }
    MIN_RADIUS + (f64::from(count) / f64::from(max_count)) * (MAX_RADIUS - MIN_RADIUS)
}

/// Blue under 50, purple under 75, pink above; opacity grows within each band.
pub fn intent_fill(avg_intent: u32) -> Rgba {
    let intent = f64::from(avg_intent.min(100));
    if intent < 50.0 {
        Rgba {
            r: 66,
            g: 153,
            b: 225,
            a: intent / 50.0,
        }
    } else if intent < 75.0 {
        Rgba {
            r: 159,
            g: 122,
            b: 234,
            a: intent / 75.0,
        }
    } else {
        Rgba {
            r: 237,
            g: 100,
            b: 166,
            a: intent / 100.0,
        }
    }
}

pub fn count_opacity(count: u32, max_count: u32) -> f64 {
    if max_count == 0 {
        return 0.1;
    }
    (f64::from(count) / f64::from(max_count)).clamp(0.1, 0.9)
}

pub fn count_fill(count: u32, max_count: u32) -> Rgba {
    Rgba {
        r: 159,
        g: 122,
        b: 234,
        a: count_opacity(count, max_count),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoBubble {
    pub state: &'static str,
    pub count: u32,
    pub avg_intent: u32,
    pub radius: f64,
    pub intent_fill: Rgba,
    pub count_fill: Rgba,
    pub tooltip: String,
}

pub fn geographic_bubbles(data: &[StateStat]) -> Vec<GeoBubble> {
    let max_count = data.iter().map(|entry| entry.count).max().unwrap_or(0);
    data.iter()
        .map(|entry| GeoBubble {
            state: entry.state,
            count: entry.count,
            avg_intent: entry.avg_intent,
            radius: bubble_radius(entry.count, max_count),
            intent_fill: intent_fill(entry.avg_intent),
            count_fill: count_fill(entry.count, max_count),
            tooltip: format!(
                "{}: {} candidates, {}% avg intent",
                entry.state, entry.count, entry.avg_intent
            ),
        })
        .collect()
}
