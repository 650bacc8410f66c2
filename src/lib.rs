//! SpaceX launch records dashboard: launch data, selection and chart
//! resolution, plus the UI state the egui front end drives.

pub mod color;
pub mod config;
pub mod data;
pub mod state;
