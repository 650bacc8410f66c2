use super::chart::{
    CorrelationChart, CorrelationPoint, GroupValue, Grouping, ProportionChart, Slice,
    BOOSTER_COLOR_KEY, OUTCOME_AXIS_LABEL, PAYLOAD_AXIS_LABEL,
};
use super::model::{LaunchRecord, RecordSet};
use super::selection::{Selection, SiteFilter};

// ---------------------------------------------------------------------------
// Outcome proportion view
// ---------------------------------------------------------------------------

/// Resolve the pie chart for a site selection.
///
/// * `All` counts successful launches per site.
/// * A specific site counts that site's launches per outcome class.
///
/// A site with no launches yields a chart with no slices.
pub fn proportion_chart(records: &RecordSet, site_filter: &SiteFilter) -> ProportionChart {
    match site_filter {
        SiteFilter::All => ProportionChart {
            grouping: Grouping::Site,
            slices: count_groups(
                records.iter().filter(|r| r.is_success()),
                |r| GroupValue::Site(r.site.clone()),
            ),
            title: "Total Success Launches by Site".to_string(),
        },
        SiteFilter::Site(site) => ProportionChart {
            grouping: Grouping::Outcome,
            slices: count_groups(
                records.iter().filter(|r| r.site == *site),
                |r| GroupValue::Outcome(r.outcome),
            ),
            title: format!("Total Success Launches for site {site}"),
        },
    }
}

/// Count records per group value, keeping groups in first-appearance order.
fn count_groups<'a, I, F>(records: I, key: F) -> Vec<Slice>
where
    I: Iterator<Item = &'a LaunchRecord>,
    F: Fn(&LaunchRecord) -> GroupValue,
{
    let mut slices: Vec<Slice> = Vec::new();
    for record in records {
        let value = key(record);
        match slices.iter_mut().find(|s| s.value == value) {
            Some(slice) => slice.count += 1,
            None => slices.push(Slice { value, count: 1 }),
        }
    }
    slices
}

// ---------------------------------------------------------------------------
// Payload correlation view
// ---------------------------------------------------------------------------

/// Resolve the scatter chart for a site selection and payload interval.
///
/// Records are kept when `low <= payload_mass <= high` and, for a specific
/// site, when the site matches. An inverted interval keeps nothing.
pub fn correlation_chart(records: &RecordSet, selection: &Selection) -> CorrelationChart {
    let points = records
        .iter()
        .filter(|r| selection.matches(r))
        .map(|r| CorrelationPoint {
            payload_mass: r.payload_mass,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
            site: r.site.clone(),
        })
        .collect();

    let title = match &selection.site_filter {
        SiteFilter::All => "Payload and Launch Success Correlation (All Sites)".to_string(),
        SiteFilter::Site(site) => format!("Payload and Launch Success Correlation for {site}"),
    };

    CorrelationChart {
        points,
        x_label: PAYLOAD_AXIS_LABEL.to_string(),
        y_label: OUTCOME_AXIS_LABEL.to_string(),
        color_key: BOOSTER_COLOR_KEY.to_string(),
        title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;
    use crate::data::selection::PayloadInterval;

    /// Two sites, three launches: (A,1000,1), (A,2000,0), (B,1500,1).
    fn boundary_set() -> RecordSet {
        RecordSet::from_records(vec![
            LaunchRecord::new("A", 1000.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("A", 2000.0, Outcome::Failure, "FT"),
            LaunchRecord::new("B", 1500.0, Outcome::Success, "v1.0"),
        ])
    }

    fn site(name: &str) -> SiteFilter {
        SiteFilter::Site(name.to_string())
    }

    fn select(site_filter: SiteFilter, low: f64, high: f64) -> Selection {
        Selection::new(site_filter, PayloadInterval::new(low, high))
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let chart = proportion_chart(&boundary_set(), &SiteFilter::All);
        assert_eq!(chart.grouping, Grouping::Site);
        assert_eq!(chart.title, "Total Success Launches by Site");
        assert_eq!(
            chart.slices,
            vec![
                Slice { value: GroupValue::Site("A".into()), count: 1 },
                Slice { value: GroupValue::Site("B".into()), count: 1 },
            ]
        );
    }

    #[test]
    fn single_site_counts_each_outcome() {
        let chart = proportion_chart(&boundary_set(), &site("A"));
        assert_eq!(chart.grouping, Grouping::Outcome);
        assert_eq!(chart.title, "Total Success Launches for site A");
        assert_eq!(chart.count_for(&GroupValue::Outcome(Outcome::Success)), Some(1));
        assert_eq!(chart.count_for(&GroupValue::Outcome(Outcome::Failure)), Some(1));
        assert_eq!(chart.total(), 2);
    }

    #[test]
    fn unknown_site_gives_empty_pie() {
        let chart = proportion_chart(&boundary_set(), &site("C"));
        assert!(chart.is_empty());
        assert_eq!(chart.total(), 0);
    }

    #[test]
    fn slices_follow_first_appearance() {
        let set = RecordSet::from_records(vec![
            LaunchRecord::new("A", 100.0, Outcome::Failure, "FT"),
            LaunchRecord::new("A", 200.0, Outcome::Success, "FT"),
            LaunchRecord::new("A", 300.0, Outcome::Failure, "FT"),
        ]);
        let chart = proportion_chart(&set, &site("A"));
        let order: Vec<_> = chart.slices.iter().map(|s| s.value.clone()).collect();
        assert_eq!(
            order,
            vec![GroupValue::Outcome(Outcome::Failure), GroupValue::Outcome(Outcome::Success)]
        );
        assert_eq!(chart.slices[0].count, 2);
    }

    #[test]
    fn interval_bounds_are_inclusive() {
        let chart = correlation_chart(&boundary_set(), &select(SiteFilter::All, 1000.0, 1500.0));
        let masses: Vec<f64> = chart.points.iter().map(|p| p.payload_mass).collect();
        assert_eq!(masses, vec![1000.0, 1500.0]);
        assert_eq!(chart.title, "Payload and Launch Success Correlation (All Sites)");
        assert_eq!(chart.x_label, "Payload Mass (kg)");
        assert_eq!(chart.y_label, "Launch Success");
    }

    #[test]
    fn inverted_interval_gives_no_points() {
        let chart = correlation_chart(&boundary_set(), &select(SiteFilter::All, 1500.0, 1000.0));
        assert!(chart.is_empty());
    }

    #[test]
    fn site_filter_narrows_scatter() {
        let chart = correlation_chart(&boundary_set(), &select(site("A"), 0.0, 10000.0));
        assert_eq!(chart.len(), 2);
        assert!(chart.points.iter().all(|p| p.site == "A"));
        assert_eq!(chart.title, "Payload and Launch Success Correlation for A");
        assert_eq!(chart.categories(), vec!["v1.0", "FT"]);
        assert_eq!(chart.points_in("FT").count(), 1);
    }

    #[test]
    fn full_range_keeps_every_record() {
        let set = boundary_set();
        let bounds = set.payload_bounds().unwrap();
        let chart = correlation_chart(&set, &Selection::new(SiteFilter::All, bounds.into()));
        assert_eq!(chart.len(), set.len());
    }

    #[test]
    fn resolvers_are_deterministic() {
        let set = boundary_set();
        let selection = select(site("B"), 0.0, 1800.0);
        assert_eq!(proportion_chart(&set, &SiteFilter::All), proportion_chart(&set, &SiteFilter::All));
        assert_eq!(
            correlation_chart(&set, &selection),
            correlation_chart(&set, &selection)
        );
    }
}
