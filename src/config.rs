use std::path::PathBuf;

use clap::Parser;

use crate::data::selection::{SiteFilter, ALL_SITES};

/// Payload slider range and default step (kg).
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

// ---------------------------------------------------------------------------
// Command line / environment configuration
// ---------------------------------------------------------------------------

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about = "SpaceX launch records dashboard", long_about = None)]
pub struct DashConfig {
    /// Launch records file (.csv, .json or .parquet)
    #[arg(long, env = "SPACEX_DASH_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Initially selected site (`ALL` for every site)
    #[arg(long, default_value = ALL_SITES)]
    pub site: String,

    /// Initial window width in points
    #[arg(long, default_value_t = 1200.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,
}

impl Default for DashConfig {
    fn default() -> Self {
        DashConfig {
            data: PathBuf::from(DEFAULT_DATA_FILE),
            site: ALL_SITES.to_string(),
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl DashConfig {
    pub fn initial_site_filter(&self) -> SiteFilter {
        SiteFilter::from_selector(&self.site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cfg = DashConfig::try_parse_from([
            "spacex-dash",
            "--data",
            "launches.parquet",
            "--site",
            "KSC LC-39A",
            "--width",
            "800",
        ])
        .unwrap();
        assert_eq!(cfg.data, PathBuf::from("launches.parquet"));
        assert_eq!(cfg.initial_site_filter(), SiteFilter::Site("KSC LC-39A".into()));
        assert_eq!(cfg.width, 800.0);
        assert_eq!(cfg.height, 800.0);
    }

    #[test]
    fn default_site_is_all() {
        assert!(DashConfig::default().initial_site_filter().is_all());
    }
}
