use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::chart::{ChartExport, CorrelationChart, ProportionChart};
use crate::data::model::RecordSet;
use crate::data::resolver::{correlation_chart, proportion_chart};
use crate::data::selection::{PayloadInterval, Selection, SiteFilter};
use crate::data::DataError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded launch records, shared read-only.
    pub dataset: Arc<RecordSet>,

    /// Current site selector and payload interval.
    pub selection: Selection,

    /// Pie chart for the current site filter (cached).
    pub proportion: ProportionChart,

    /// Scatter chart for the current selection (cached).
    pub correlation: CorrelationChart,

    /// Colours for pie slices.
    pub slice_colors: ColorMap,

    /// Colours for booster categories, fixed per dataset so a category keeps
    /// its colour while the selection changes.
    pub booster_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state for a freshly loaded dataset. The payload interval
    /// starts at the dataset's bounds.
    pub fn new(dataset: Arc<RecordSet>, site_filter: SiteFilter) -> Result<Self, DataError> {
        let interval = PayloadInterval::from(dataset.payload_bounds()?);
        let selection = Selection::new(site_filter, interval);
        let proportion = proportion_chart(&dataset, &selection.site_filter);
        let correlation = correlation_chart(&dataset, &selection);
        let booster_colors = ColorMap::new(dataset.booster_categories());

        let mut state = AppState {
            dataset,
            selection,
            proportion,
            correlation,
            slice_colors: ColorMap::default(),
            booster_colors,
            status_message: None,
        };
        state.rebuild_slice_colors();
        Ok(state)
    }

    /// Replace the dataset (File → Open…), keeping the site selection and
    /// resetting the payload interval to the new bounds.
    pub fn set_dataset(&mut self, dataset: RecordSet) -> Result<(), DataError> {
        let site_filter = self.selection.site_filter.clone();
        *self = AppState::new(Arc::new(dataset), site_filter)?;
        Ok(())
    }

    /// Selector options: `ALL` followed by the dataset's sites.
    pub fn site_options(&self) -> Vec<SiteFilter> {
        std::iter::once(SiteFilter::All)
            .chain(self.dataset.sites().into_iter().map(|s| SiteFilter::Site(s.to_string())))
            .collect()
    }

    pub fn set_site_filter(&mut self, site_filter: SiteFilter) {
        if self.selection.site_filter != site_filter {
            self.selection.site_filter = site_filter;
            self.recompute();
        }
    }

    pub fn set_payload_interval(&mut self, interval: PayloadInterval) {
        if self.selection.payload_interval != interval {
            self.selection.payload_interval = interval;
            self.recompute();
        }
    }

    /// Re-resolve both charts from the current selection.
    pub fn recompute(&mut self) {
        let selection = &self.selection;
        self.proportion = proportion_chart(&self.dataset, &selection.site_filter);
        self.correlation = correlation_chart(&self.dataset, selection);
        log::debug!(
            "site={} payload={}: {} slices, {} points",
            selection.site_filter,
            selection.payload_interval,
            self.proportion.slices.len(),
            self.correlation.len()
        );
        self.rebuild_slice_colors();
    }

    fn rebuild_slice_colors(&mut self) {
        let labels: Vec<String> = self.proportion.slices.iter().map(|s| s.value.to_string()).collect();
        self.slice_colors = ColorMap::new(labels.iter().map(String::as_str));
    }

    /// Both chart descriptions bundled for JSON export.
    pub fn export(&self) -> ChartExport<'_> {
        ChartExport {
            site_filter: self.selection.site_filter.to_string(),
            payload_low: self.selection.payload_interval.low,
            payload_high: self.selection.payload_interval.high,
            proportion: &self.proportion,
            correlation: &self.correlation,
        }
    }
}
