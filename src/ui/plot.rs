use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use spacex_dash::data::Outcome;
use spacex_dash::state::AppState;

/// Segments used for a full circle; slices get a proportional share.
const PIE_RESOLUTION: f64 = 180.0;

// ---------------------------------------------------------------------------
// Proportion (pie) plot
// ---------------------------------------------------------------------------

/// Render the outcome proportion chart as a pie.
pub fn proportion_plot(ui: &mut Ui, state: &AppState) {
    let chart = &state.proportion;
    ui.heading(chart.title.as_str());

    if chart.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches for this site");
        });
        return;
    }

    let total = chart.total();
    ui.strong(chart.grouping.column());

    Plot::new("proportion_plot")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            // Start at twelve o'clock and run clockwise.
            let mut start = TAU / 4.0;
            for slice in &chart.slices {
                let share = slice.share(total);
                let sweep = share * TAU;
                let color = state.slice_colors.color_for(&slice.value.to_string());

                plot_ui.polygon(
                    Polygon::new(wedge(start, start - sweep))
                        .name(slice.value.legend_label())
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                let mid = start - sweep / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    RichText::new(format!("{:.1}%", share * 100.0)).color(Color32::BLACK),
                ));
                start -= sweep;
            }
        });
}

/// Closed polygon for a pie wedge between two angles (radians).
fn wedge(from: f64, to: f64) -> PlotPoints<'static> {
    let steps = (((from - to).abs() / TAU) * PIE_RESOLUTION).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = from + (to - from) * i as f64 / steps as f64;
        points.push([angle.cos(), angle.sin()]);
    }
    PlotPoints::new(points)
}

// ---------------------------------------------------------------------------
// Correlation (scatter) plot
// ---------------------------------------------------------------------------

/// Render the payload / outcome scatter chart, one series per booster
/// category.
pub fn correlation_plot(ui: &mut Ui, state: &AppState) {
    let chart = &state.correlation;
    ui.heading(chart.title.as_str());

    if chart.is_empty() {
        ui.label("No launches in the selected payload range");
    }

    Plot::new("correlation_plot")
        .legend(Legend::default())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .include_y(-0.25)
        .include_y(1.25)
        .y_axis_formatter(|mark, _range| {
            if mark.value == Outcome::Failure.as_class() as f64 {
                Outcome::Failure.to_string()
            } else if mark.value == Outcome::Success.as_class() as f64 {
                Outcome::Success.to_string()
            } else {
                String::new()
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for category in chart.categories() {
                let points: PlotPoints = chart
                    .points_in(category)
                    .map(|p| [p.payload_mass, p.outcome.as_class() as f64])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(category)
                        .color(state.booster_colors.color_for(category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(5.0),
                );
            }
        });
}
