mod app;
mod ui;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use app::SpaceXDashApp;
use spacex_dash::config::DashConfig;
use spacex_dash::data::{load_file, SiteFilter};
use spacex_dash::state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = DashConfig::parse();

    // The dataset is loaded once; without it (or its payload bounds) there is
    // nothing to show, so both failures abort startup.
    let dataset = load_file(&config.data).inspect_err(|e| log::error!("{e}"))?;
    let bounds = dataset.payload_bounds().inspect_err(|e| log::error!("{e}"))?;
    log::info!(
        "Loaded {} launches from {} (sites {:?}, payload {}..={} kg)",
        dataset.len(),
        config.data.display(),
        dataset.sites(),
        bounds.min,
        bounds.max
    );

    let mut site_filter = config.initial_site_filter();
    if let SiteFilter::Site(site) = &site_filter {
        if !dataset.sites().contains(&site.as_str()) {
            log::warn!("Unknown launch site {site:?}, showing all sites");
            site_filter = SiteFilter::All;
        }
    }

    let state = AppState::new(Arc::new(dataset), site_filter).context("initialising dashboard")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(SpaceXDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard window: {e}"))
}
