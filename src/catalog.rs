//! Built-in reference data: tracks, corners, power units, tire compounds,
//! drivers and the static lap breakdown sample.
//!
//! Everything here is illustrative. Fetched datasets may replace the track,
//! driver and Ferrari engine tables at runtime.

use crate::{
    Corner, DatasetDriver, Driver, DrivingStyle, EngineMaker, EngineModel, TireCompound, Track,
    TrackCategory,
};
use serde::{Deserialize, Serialize};

/// Maximum number of fetched drivers shown in the comparison view.
pub const MAX_DATASET_DRIVERS: usize = 8;

pub fn tracks() -> Vec<Track> {
    [
        ("monza", "Monza", "Italy", TrackCategory::LowDragHighSpeed),
        ("monaco", "Monaco", "Monte Carlo", TrackCategory::StreetHighDownforce),
        ("silverstone", "Silverstone", "UK", TrackCategory::BalancedHighDownforce),
        ("spa", "Spa-Francorchamps", "Belgium", TrackCategory::HighSpeedVariance),
        ("suzuka", "Suzuka", "Japan", TrackCategory::TechnicalFlow),
    ]
    .into_iter()
    .map(|(id, name, country, category)| Track {
        id: id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        category,
    })
    .collect()
}

// (track, label, radius m, camber deg, elevation m)
const CORNERS: [(&str, &str, f64, f64, f64); 22] = [
    ("monza", "T1-2 Chicane", 45.0, 1.0, 0.0),
    ("monza", "Lesmo 1", 140.0, 2.0, -3.0),
    ("monza", "Lesmo 2", 120.0, 2.0, -2.0),
    ("monza", "Ascari", 170.0, 1.5, 1.0),
    ("monza", "Parabolica", 250.0, 2.0, 0.0),
    ("monaco", "Sainte Devote", 60.0, 2.0, 2.0),
    ("monaco", "Mirabeau", 35.0, 3.0, -5.0),
    ("monaco", "Loews Hairpin", 15.0, 4.0, -2.0),
    ("monaco", "Tabac", 90.0, 1.0, 0.0),
    ("monaco", "Swimming Pool", 80.0, 1.0, 0.0),
    ("silverstone", "Copse", 220.0, 1.0, 0.0),
    ("silverstone", "Maggotts/Becketts", 180.0, 1.0, 1.0),
    ("silverstone", "Stowe", 180.0, 1.0, -3.0),
    ("silverstone", "Club", 140.0, 1.0, 0.0),
    ("spa", "La Source", 40.0, 3.0, 0.0),
    ("spa", "Eau Rouge/Raidillon", 250.0, 1.0, 20.0),
    ("spa", "Pouhon", 190.0, 1.0, -5.0),
    ("spa", "Blanchimont", 350.0, 1.0, 0.0),
    ("suzuka", "S Curves", 140.0, 1.0, 3.0),
    ("suzuka", "Degner", 95.0, 1.0, -2.0),
    ("suzuka", "Spoon", 230.0, 1.0, 0.0),
    ("suzuka", "130R", 300.0, 1.0, 0.0),
];

/// Corners of `track_id` in lap order. Unknown tracks have none.
pub fn corners_for(track_id: &str) -> Vec<Corner> {
    CORNERS
        .iter()
        .filter(|(track, ..)| *track == track_id)
        .map(|&(track, label, radius_m, camber_deg, elevation_m)| Corner {
            track_id: track.to_string(),
            label: label.to_string(),
            radius_m,
            camber_deg,
            elevation_m,
        })
        .collect()
}

fn engine(maker: &str, code: &str, peak_power_kw: f64, torque_nm: f64, throttle_response: f64) -> EngineModel {
    EngineModel {
        maker: maker.to_string(),
        code: code.to_string(),
        year: 2024,
        peak_power_kw,
        torque_nm,
        max_rpm: 15_000,
        throttle_response,
        ers_kw: 120.0,
    }
}

pub fn engine_makers() -> Vec<EngineMaker> {
    vec![
        EngineMaker {
            maker: "Ferrari".to_string(),
            models: vec![engine("Ferrari", "066/12", 735.0, 680.0, 1.05)],
        },
        EngineMaker {
            maker: "Mercedes".to_string(),
            models: vec![engine("Mercedes", "M14 E Performance", 730.0, 670.0, 1.03)],
        },
        EngineMaker {
            maker: "Honda RBPT".to_string(),
            models: vec![engine("Honda RBPT", "RA624H", 740.0, 685.0, 1.06)],
        },
        EngineMaker {
            maker: "Renault".to_string(),
            models: vec![engine("Renault", "E-Tech RE24", 720.0, 660.0, 1.02)],
        },
    ]
}

/// Replace the `maker` group with `models` and move it to the front.
/// An empty `models` leaves the catalog untouched.
pub fn with_maker_models(makers: Vec<EngineMaker>, maker: &str, models: Vec<EngineModel>) -> Vec<EngineMaker> {
    if models.is_empty() {
        return makers;
    }
    let mut out = Vec::with_capacity(makers.len());
    out.push(EngineMaker {
        maker: maker.to_string(),
        models,
    });
    out.extend(makers.into_iter().filter(|m| m.maker != maker));
    out
}

pub fn tires() -> Vec<TireCompound> {
    [
        ("soft", "Soft (C5)", 1.05, 0.02),
        ("medium", "Medium (C3)", 1.0, 0.015),
        ("hard", "Hard (C1)", 0.96, 0.01),
    ]
    .into_iter()
    .map(|(id, label, grip, degradation)| TireCompound {
        id: id.to_string(),
        label: label.to_string(),
        grip,
        degradation,
    })
    .collect()
}

pub fn tire(id: &str) -> Option<TireCompound> {
    tires().into_iter().find(|t| t.id == id)
}

pub fn drivers() -> Vec<Driver> {
    [
        ("verstappen", "Max Verstappen", DrivingStyle::Aggressive, "#f97316"),
        ("hamilton", "Lewis Hamilton", DrivingStyle::Smooth, "#22d3ee"),
        ("leclerc", "Charles Leclerc", DrivingStyle::LateBraker, "#ef4444"),
        ("norris", "Lando Norris", DrivingStyle::Balanced, "#f59e0b"),
    ]
    .into_iter()
    .map(|(id, name, style, color)| Driver {
        id: id.to_string(),
        name: name.to_string(),
        style,
        color: color.to_string(),
    })
    .collect()
}

/// Turn fetched dataset rows into comparison drivers, cycling `palette`
/// for colors. Returns `None` when there is nothing to show so the caller
/// keeps its current catalog.
pub fn drivers_from_dataset(list: Vec<DatasetDriver>, palette: &[&str]) -> Option<Vec<Driver>> {
    if list.is_empty() || palette.is_empty() {
        return None;
    }
    Some(
        list.into_iter()
            .take(MAX_DATASET_DRIVERS)
            .enumerate()
            .map(|(i, d)| d.into_driver(palette[i % palette.len()]))
            .collect(),
    )
}

/// Look `id` up in `active`, then in the built-in drivers. An id found in
/// neither becomes a balanced driver named after the id.
pub fn find_driver(active: &[Driver], id: &str, fallback_color: &str) -> Driver {
    active
        .iter()
        .find(|d| d.id == id)
        .cloned()
        .or_else(|| drivers().into_iter().find(|d| d.id == id))
        .unwrap_or_else(|| Driver {
            id: id.to_string(),
            name: id.to_string(),
            style: DrivingStyle::Balanced,
            color: fallback_color.to_string(),
        })
}

/// One lap of sector splits, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LapSplit {
    pub lap: u32,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
    pub total: f64,
}

pub fn lap_breakdown_sample() -> Vec<LapSplit> {
    vec![
        LapSplit { lap: 1, s1: 30.1, s2: 31.0, s3: 31.1, total: 92.2 },
        LapSplit { lap: 2, s1: 29.9, s2: 30.8, s3: 30.8, total: 91.5 },
        LapSplit { lap: 3, s1: 30.0, s2: 30.9, s3: 31.0, total: 91.9 },
    ]
}

pub const STRATEGY_NOTE: &str = "Start on Mediums, pit Laps 18 & 40, take Softs for final stint.";
