use std::fmt;

use serde::Serialize;

use super::model::{distinct_in_order, Outcome};

pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_LABEL: &str = "Launch Success";
pub const BOOSTER_COLOR_KEY: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// Proportion (pie) chart description
// ---------------------------------------------------------------------------

/// Column the proportion chart is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grouping {
    /// One slice per launch site (all-sites view).
    Site,
    /// One slice per outcome class (single-site view).
    Outcome,
}

impl Grouping {
    /// Source column name, shown as the pie legend heading.
    pub fn column(self) -> &'static str {
        match self {
            Grouping::Site => "Launch Site",
            Grouping::Outcome => "class",
        }
    }
}

/// The value a slice stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GroupValue {
    Site(String),
    Outcome(Outcome),
}

impl GroupValue {
    /// Legend text: the site name, or the class with its meaning (`1 (Success)`).
    pub fn legend_label(&self) -> String {
        match self {
            GroupValue::Site(site) => site.clone(),
            GroupValue::Outcome(outcome) => format!("{outcome} ({})", outcome.label()),
        }
    }
}

impl fmt::Display for GroupValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupValue::Site(site) => write!(f, "{site}"),
            GroupValue::Outcome(outcome) => write!(f, "{outcome}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub value: GroupValue,
    pub count: usize,
}

impl Slice {
    /// Fraction of `total` covered by this slice (0 when `total` is 0).
    pub fn share(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.count as f64 / total as f64
        }
    }
}

/// Declarative pie chart: grouping key, one count per group, title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProportionChart {
    pub grouping: Grouping,
    pub slices: Vec<Slice>,
    pub title: String,
}

impl ProportionChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn count_for(&self, value: &GroupValue) -> Option<usize> {
        self.slices.iter().find(|s| s.value == *value).map(|s| s.count)
    }
}

// ---------------------------------------------------------------------------
// Correlation (scatter) chart description
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationPoint {
    /// Horizontal coordinate.
    pub payload_mass: f64,
    /// Vertical coordinate, a two-valued category.
    pub outcome: Outcome,
    /// Colour group.
    pub booster_category: String,
    pub site: String,
}

/// Declarative scatter chart: one point per filtered launch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationChart {
    pub points: Vec<CorrelationPoint>,
    pub x_label: String,
    pub y_label: String,
    pub color_key: String,
    pub title: String,
}

impl CorrelationChart {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Booster categories present in the chart, first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        distinct_in_order(self.points.iter().map(|p| p.booster_category.as_str()))
    }

    pub fn points_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CorrelationPoint> + 'a {
        self.points.iter().filter(move |p| p.booster_category == category)
    }
}

// ---------------------------------------------------------------------------
// Export bundle
// ---------------------------------------------------------------------------

/// Both chart descriptions for one selection, as written by "Export charts…".
#[derive(Debug, Clone, Serialize)]
pub struct ChartExport<'a> {
    pub site_filter: String,
    pub payload_low: f64,
    pub payload_high: f64,
    pub proportion: &'a ProportionChart,
    pub correlation: &'a CorrelationChart,
}
