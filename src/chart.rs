//! JavaScript interop for Chart.js visualization.
//! Provides Rust bindings to chart helper functions defined in chart_helpers.js
//! and builders that turn sample sequences into chart series.

use log::warn;
use race_analytics::catalog::LapSplit;
use race_analytics::{Driver, LapSample, ProfileSample, RunSample};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/chart_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = renderLineChart)]
    fn render_line_chart(canvas_id: &str, spec: JsValue);

    #[wasm_bindgen(js_name = destroyChart)]
    pub fn destroy_chart(canvas_id: &str);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub label: String,
    pub color: String,
    pub data: Vec<f64>,
    pub fill: bool,
    pub secondary_axis: bool,
}

impl ChartSeries {
    fn line(label: &str, color: &str, data: Vec<f64>) -> Self {
        ChartSeries {
            label: label.to_string(),
            color: color.to_string(),
            data,
            fill: false,
            secondary_axis: false,
        }
    }

    fn area(label: &str, color: &str, data: Vec<f64>) -> Self {
        ChartSeries {
            fill: true,
            ..ChartSeries::line(label, color, data)
        }
    }

    fn on_secondary_axis(mut self) -> Self {
        self.secondary_axis = true;
        self
    }
}

/// Everything Chart.js needs for one line/area chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub x_label: String,
    pub y_label: String,
    pub y2_label: Option<String>,
    pub series: Vec<ChartSeries>,
}

/// Draw (or redraw) `spec` into the canvas with id `canvas_id`.
pub fn draw(canvas_id: &str, spec: &ChartSpec) {
    match serde_wasm_bindgen::to_value(spec) {
        Ok(value) => render_line_chart(canvas_id, value),
        Err(e) => warn!("Could not serialise chart {}: {}", canvas_id, e),
    }
}

pub fn profile_chart(profile: &[ProfileSample]) -> ChartSpec {
    ChartSpec {
        labels: profile.iter().map(|s| s.distance.to_string()).collect(),
        x_label: "Distance (m)".to_string(),
        y_label: "Speed (km/h)".to_string(),
        y2_label: Some("RPM".to_string()),
        series: vec![
            ChartSeries::line("Speed (km/h)", "#ef4444", profile.iter().map(|s| s.speed as f64).collect()),
            ChartSeries::line("RPM", "#60a5fa", profile.iter().map(|s| s.rpm as f64).collect())
                .on_secondary_axis(),
        ],
    }
}

pub fn throttle_brake_chart(run: &[RunSample]) -> ChartSpec {
    ChartSpec {
        labels: run.iter().map(|s| format!("{:.1}", s.t)).collect(),
        x_label: "Time (s)".to_string(),
        y_label: "Ratio".to_string(),
        y2_label: None,
        series: vec![
            ChartSeries::area("Throttle", "#22c55e", run.iter().map(|s| s.throttle).collect()),
            ChartSeries::area("Brake", "#ef4444", run.iter().map(|s| s.brake).collect()),
        ],
    }
}

pub fn speed_rpm_chart(run: &[RunSample]) -> ChartSpec {
    ChartSpec {
        labels: run.iter().map(|s| format!("{:.1}", s.t)).collect(),
        x_label: "Time (s)".to_string(),
        y_label: "Speed (km/h)".to_string(),
        y2_label: Some("RPM".to_string()),
        series: vec![
            ChartSeries::area("Speed (km/h)", "#3b82f6", run.iter().map(|s| s.speed).collect()),
            ChartSeries::area("RPM", "#9333ea", run.iter().map(|s| s.rpm).collect()).on_secondary_axis(),
        ],
    }
}

/// Speed-vs-distance overlay. Every lap shares the same distance grid, so
/// the first lap provides the labels.
pub fn comparison_chart(laps: &[(Driver, Vec<LapSample>)]) -> ChartSpec {
    let labels = laps
        .first()
        .map(|(_, lap)| lap.iter().map(|s| s.distance.to_string()).collect())
        .unwrap_or_default();
    ChartSpec {
        labels,
        x_label: "Distance (m)".to_string(),
        y_label: "Speed (km/h)".to_string(),
        y2_label: None,
        series: laps
            .iter()
            .map(|(driver, lap)| {
                ChartSeries::line(&driver.name, &driver.color, lap.iter().map(|s| s.speed as f64).collect())
            })
            .collect(),
    }
}

pub fn lap_breakdown_chart(splits: &[LapSplit]) -> ChartSpec {
    ChartSpec {
        labels: splits.iter().map(|s| s.lap.to_string()).collect(),
        x_label: "Lap".to_string(),
        y_label: "Sector time (s)".to_string(),
        y2_label: None,
        series: vec![
            ChartSeries::line("S1", "#ef4444", splits.iter().map(|s| s.s1).collect()),
            ChartSeries::line("S2", "#22c55e", splits.iter().map(|s| s.s2).collect()),
            ChartSeries::line("S3", "#3b82f6", splits.iter().map(|s| s.s3).collect()),
        ],
    }
}
