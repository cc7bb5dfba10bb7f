//! Application-level configuration constants.

// Backend and dataset locations
pub const API_URL: &str = match option_env!("RACE_ANALYTICS_API_URL") {
    Some(url) => url,
    None => "",
};
pub const FERRARI_CSV_URL: Option<&str> = option_env!("RACE_ANALYTICS_FERRARI_CSV_URL");
pub const ENGINE_DATASET_MAKER: &str = "Ferrari";

const DATASET_BASE: &str = "https://raw.githubusercontent.com/toUpperCase78/formula1-datasets/master";

pub fn driver_dataset_urls() -> Vec<String> {
    vec![
        format!("{DATASET_BASE}/F1%202025%20Season%20Drivers/F1_2025_Drivers.csv"),
        format!("{DATASET_BASE}/F1%202024%20Season%20Drivers/F1_2024_Drivers.csv"),
        format!("{DATASET_BASE}/formula1_2021season_drivers.csv"),
    ]
}

pub fn track_dataset_urls() -> Vec<String> {
    vec![
        format!("{DATASET_BASE}/F1%20Race%20Tracks/F1_Tracks.csv"),
        format!("{DATASET_BASE}/formula1_2019season_tracks.csv"),
    ]
}

// UI Behavior
pub const DEBOUNCE_MS: u32 = 300;
pub const DATASET_TIMEOUT_MS: u32 = 8_000;
pub const DRIVER_PALETTE: [&str; 7] = [
    "#f97316", "#22d3ee", "#ef4444", "#f59e0b", "#84cc16", "#a78bfa", "#60a5fa",
];
pub const FALLBACK_DRIVER_COLOR: &str = "#60a5fa";

// Default selections
pub const DEFAULT_TRACK_ID: &str = "monza";
pub const DEFAULT_TIRE_ID: &str = "soft";
pub const DEFAULT_COMPARED_DRIVERS: [&str; 2] = ["verstappen", "hamilton"];

// Custom corner calculator defaults and limits
pub const DEFAULT_CUSTOM_RADIUS_M: f64 = 120.0;
pub const DEFAULT_CUSTOM_CAMBER_DEG: f64 = 1.0;
pub const DEFAULT_CUSTOM_ELEVATION_M: f64 = 0.0;
pub const MIN_RADIUS_M: f64 = 1.0;
pub const MAX_RADIUS_M: f64 = 2000.0;
pub const MIN_CAMBER_DEG: f64 = -15.0;
pub const MAX_CAMBER_DEG: f64 = 15.0;
pub const MIN_ELEVATION_M: f64 = -100.0;
pub const MAX_ELEVATION_M: f64 = 100.0;
