use eframe::egui::{self, Color32, RichText, Slider, SliderClamping, Ui};

use spacex_dash::config::{PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};
use spacex_dash::data::{PayloadInterval, SiteFilter};
use spacex_dash::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the left selection panel: site selector and payload range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Launch Site");
    ui.separator();

    let current = state.selection.site_filter.clone();
    let mut picked: Option<SiteFilter> = None;
    egui::ComboBox::from_id_salt("site_selector")
        .selected_text(site_label(&current))
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in state.site_options() {
                let label = site_label(&option);
                if ui.selectable_label(current == option, label).clicked() {
                    picked = Some(option);
                }
            }
        });
    if let Some(site_filter) = picked {
        state.set_site_filter(site_filter);
    }

    ui.add_space(12.0);
    ui.strong("Payload range (Kg):");

    // `Edits` leaves an unsnapped value (the data bounds) alone until the user
    // moves the slider; the step only applies to drags.
    let mut interval = state.selection.payload_interval;
    let range = PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX;
    let low = ui.add(
        Slider::new(&mut interval.low, range.clone())
            .step_by(PAYLOAD_SLIDER_STEP)
            .clamping(SliderClamping::Edits)
            .suffix(" kg")
            .text("from"),
    );
    let high = ui.add(
        Slider::new(&mut interval.high, range)
            .step_by(PAYLOAD_SLIDER_STEP)
            .clamping(SliderClamping::Edits)
            .suffix(" kg")
            .text("to"),
    );
    if low.changed() || high.changed() {
        state.set_payload_interval(interval);
    }

    if ui.small_button("Reset to data range").clicked() {
        if let Ok(bounds) = state.dataset.payload_bounds() {
            state.set_payload_interval(PayloadInterval::from(bounds));
        }
    }

    if state.selection.payload_interval.is_inverted() {
        ui.label(RichText::new("Lower bound exceeds upper bound").color(Color32::YELLOW));
    }

    ui.add_space(12.0);
    ui.separator();
    ui.strong(state.correlation.color_key.as_str());
    for (label, color) in state.booster_colors.legend_entries() {
        ui.label(RichText::new(format!("● {label}")).color(color));
    }
}

fn site_label(site_filter: &SiteFilter) -> String {
    match site_filter {
        SiteFilter::All => "All Sites".to_string(),
        SiteFilter::Site(site) => site.clone(),
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export charts…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.heading("SpaceX Launch Records Dashboard");
        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in range",
            state.dataset.len(),
            state.correlation.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    let Some(path) = file else {
        return;
    };

    let result = spacex_dash::data::load_file(&path).and_then(|dataset| {
        log::info!(
            "Loaded {} launches from {} (sites {:?})",
            dataset.len(),
            path.display(),
            dataset.sites()
        );
        state.set_dataset(dataset)
    });

    if let Err(e) = result {
        // A bad file at runtime keeps the current dataset on screen.
        log::error!("Failed to load file: {e}");
        state.status_message = Some(format!("Error: {e}"));
    }
}

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export chart descriptions")
        .set_file_name("charts.json")
        .add_filter("JSON", &["json"])
        .save_file();

    let Some(path) = file else {
        return;
    };

    let result = serde_json::to_string_pretty(&state.export())
        .map_err(anyhow::Error::from)
        .and_then(|json| std::fs::write(&path, json).map_err(anyhow::Error::from));

    match result {
        Ok(()) => {
            log::info!("Exported charts to {}", path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to export charts: {e:#}");
            state.status_message = Some(format!("Export failed: {e:#}"));
        }
    }
}
