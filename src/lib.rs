use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical and synthesis constants. These are illustrative placeholders,
/// not validated vehicle data.
pub mod defaults {
    pub const GRAVITY: f64 = 9.81;
    pub const MS_TO_KMH: f64 = 3.6;

    pub const BASE_GRIP: f64 = 1.65;
    pub const MIN_EFFECTIVE_GRIP: f64 = 0.9;
    pub const MIN_RADIUS_M: f64 = 10.0;
    pub const MAX_CAMBER_DEG: f64 = 6.0;
    pub const CAMBER_GAIN_PER_DEG: f64 = 0.01;
    pub const ELEVATION_SCALE_M: f64 = 20.0;
    pub const MAX_ELEVATION_EFFECT: f64 = 0.1;

    pub const PROFILE_LENGTH_M: u32 = 3000;
    pub const PROFILE_STEP_M: u32 = 100;
    pub const PROFILE_MIN_SPEED_KMH: u32 = 60;
    pub const RPM_PER_KMH: f64 = 290.0;
    pub const RPM_CEILING: u32 = 15_500;

    pub const LAP_LENGTH_M: u32 = 3000;
    pub const LAP_STEP_M: u32 = 100;
    pub const LAP_SPEED_CEILING_KMH: f64 = 320.0;

    pub const RUN_SAMPLES: usize = 50;
    pub const RUN_SAMPLE_PERIOD_S: f64 = 0.1;

    // Fallbacks for engine rows that lack a usable value.
    pub const ENGINE_YEAR: u32 = 2025;
    pub const ENGINE_PEAK_POWER_KW: f64 = 720.0;
    pub const ENGINE_TORQUE_NM: f64 = 650.0;
    pub const ENGINE_MAX_RPM: u32 = 15_000;
    pub const ENGINE_ERS_KW: f64 = 120.0;
    pub const ENGINE_THROTTLE_RESPONSE: f64 = 1.05;
}

pub mod catalog;
pub mod remote;

// ──────────────────────────────────────────────────────────────────────────────
// Reference data

/// Coarse aerodynamic character of a circuit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackCategory {
    LowDragHighSpeed,
    StreetHighDownforce,
    #[default]
    BalancedHighDownforce,
    HighSpeedVariance,
    TechnicalFlow,
}

/// Engine map and aero parts suggested for a track category.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecommendation {
    pub engine: &'static str,
    pub parts: [&'static str; 3],
}

impl TrackCategory {
    pub const ALL: [TrackCategory; 5] = [
        TrackCategory::LowDragHighSpeed,
        TrackCategory::StreetHighDownforce,
        TrackCategory::BalancedHighDownforce,
        TrackCategory::HighSpeedVariance,
        TrackCategory::TechnicalFlow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackCategory::LowDragHighSpeed => "low-drag-high-speed",
            TrackCategory::StreetHighDownforce => "street-high-downforce",
            TrackCategory::BalancedHighDownforce => "balanced-high-downforce",
            TrackCategory::HighSpeedVariance => "high-speed-variance",
            TrackCategory::TechnicalFlow => "technical-flow",
        }
    }

    /// Top-speed ceiling used by the distance profile.
    pub fn top_speed_kmh(&self) -> f64 {
        match self {
            TrackCategory::LowDragHighSpeed => 340.0,
            TrackCategory::StreetHighDownforce => 290.0,
            _ => 315.0,
        }
    }

    pub fn recommendation(&self) -> PackageRecommendation {
        match self {
            TrackCategory::LowDragHighSpeed => PackageRecommendation {
                engine: "ICE low-drag mapping, shorter 7th-8th gear, aggressive ERS deploy",
                parts: [
                    "Low-drag rear wing + trimmed beam wing",
                    "Low cooling louvres (watch temps)",
                    "Brake ducts minimal drag spec",
                ],
            },
            TrackCategory::StreetHighDownforce => PackageRecommendation {
                engine: "Higher downforce mapping, shorter gearing for traction, conservative ERS",
                parts: [
                    "High-downforce rear wing + larger flap",
                    "Max mechanical grip: softer suspension, higher rake",
                    "High cooling louvres for low speed airflow",
                ],
            },
            TrackCategory::BalancedHighDownforce => PackageRecommendation {
                engine: "Balanced map, mid-high downforce, ERS split deploy/harvest across lap",
                parts: [
                    "Medium rear wing + efficient beam wing",
                    "Robust floor edge + mid-corner stability setup",
                    "Brake cooling medium spec",
                ],
            },
            TrackCategory::HighSpeedVariance => PackageRecommendation {
                engine: "Strong ICE efficiency, flexible ERS for hills, taller top gear",
                parts: [
                    "Medium-low downforce wing compromise",
                    "High-efficiency cooling for long full-throttle",
                    "Brake ducts medium for heavy stops",
                ],
            },
            TrackCategory::TechnicalFlow => PackageRecommendation {
                engine: "Responsive throttle map, strong mid-range torque, ERS recovery focus",
                parts: [
                    "Mid-high downforce package",
                    "Stable front end with stiffer front ARB",
                    "Cooling medium spec",
                ],
            },
        }
    }
}

impl fmt::Display for TrackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub country: String,
    pub category: TrackCategory,
}

impl Track {
    /// Name with the country appended when one is known.
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.country)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corner {
    pub track_id: String,
    pub label: String,
    pub radius_m: f64,
    pub camber_deg: f64,
    pub elevation_m: f64,
}

impl Corner {
    pub fn apex_speed_kmh(&self) -> u32 {
        estimate_apex_speed(
            self.radius_m,
            self.camber_deg,
            self.elevation_m,
            defaults::BASE_GRIP,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineModel {
    pub maker: String,
    pub code: String,
    pub year: u32,
    pub peak_power_kw: f64,
    pub torque_nm: f64,
    pub max_rpm: u32,
    pub throttle_response: f64,
    pub ers_kw: f64,
}

/// Engine models grouped under one manufacturer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineMaker {
    pub maker: String,
    pub models: Vec<EngineModel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TireCompound {
    pub id: String,
    pub label: String,
    pub grip: f64,
    pub degradation: f64,
}

/// Named throttle/ERS deployment profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineMap {
    Balanced,
    Qualifying,
    Endurance,
}

impl EngineMap {
    pub const ALL: [EngineMap; 3] = [EngineMap::Balanced, EngineMap::Qualifying, EngineMap::Endurance];

    pub fn id(&self) -> &'static str {
        match self {
            EngineMap::Balanced => "balanced",
            EngineMap::Qualifying => "quali",
            EngineMap::Endurance => "endurance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EngineMap::Balanced => "Balanced (race)",
            EngineMap::Qualifying => "Qualifying (max deploy)",
            EngineMap::Endurance => "Endurance (fuel/thermal save)",
        }
    }

    pub fn from_id(id: &str) -> Option<EngineMap> {
        EngineMap::ALL.into_iter().find(|m| m.id() == id)
    }

    /// Multiplier applied to synthesized speed.
    pub fn speed_factor(&self) -> f64 {
        match self {
            EngineMap::Balanced => 1.0,
            EngineMap::Qualifying => 1.08,
            EngineMap::Endurance => 0.95,
        }
    }

    pub fn downforce_setup(&self) -> f64 {
        match self {
            EngineMap::Balanced => 0.75,
            EngineMap::Qualifying => 0.9,
            EngineMap::Endurance => 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrivingStyle {
    Aggressive,
    Smooth,
    LateBraker,
    #[default]
    Balanced,
}

impl DrivingStyle {
    pub fn factor(&self) -> f64 {
        match self {
            DrivingStyle::Aggressive => 1.03,
            DrivingStyle::Smooth => 0.99,
            DrivingStyle::LateBraker => 1.02,
            DrivingStyle::Balanced => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub style: DrivingStyle,
    pub color: String,
}

// ──────────────────────────────────────────────────────────────────────────────
// Derived samples

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSample {
    pub distance: u32,
    pub speed: u32,
    pub throttle: u32,
    pub rpm: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LapSample {
    pub distance: u32,
    pub speed: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSample {
    pub t: f64,
    pub speed: f64,
    pub throttle: f64,
    pub brake: f64,
    pub rpm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapSummary {
    pub top_speed: u32,
    pub avg_speed: u32,
    pub sector1_avg: u32,
    pub sector2_avg: u32,
    pub sector3_avg: u32,
}

impl LapSummary {
    /// 1-based index of the sector with the highest average, earliest on ties.
    pub fn strongest_sector(&self) -> usize {
        let sectors = [self.sector1_avg, self.sector2_avg, self.sector3_avg];
        let best = sectors.iter().copied().max().unwrap_or(0);
        sectors.iter().position(|&s| s == best).unwrap_or(0) + 1
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Synthesizers

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Recommended apex speed in km/h from a circular-motion grip model.
///
/// Camber above 6° adds nothing, the elevation effect is limited to ±10% of
/// grip, and radius is floored at 10 m. All inputs are clamped rather than
/// rejected, so the function is total.
pub fn estimate_apex_speed(radius_m: f64, camber_deg: f64, elevation_m: f64, base_grip: f64) -> u32 {
    use defaults::*;

    let camber_factor = 1.0 + finite_or_zero(camber_deg).min(MAX_CAMBER_DEG) * CAMBER_GAIN_PER_DEG;
    let elevation_factor = 1.0
        - (finite_or_zero(elevation_m) / ELEVATION_SCALE_M)
            .clamp(-MAX_ELEVATION_EFFECT, MAX_ELEVATION_EFFECT);
    let effective_grip =
        (finite_or_zero(base_grip) * camber_factor * elevation_factor).max(MIN_EFFECTIVE_GRIP);
    let radius = finite_or_zero(radius_m).max(MIN_RADIUS_M);

    let speed_ms = (effective_grip * GRAVITY * radius).sqrt();
    (speed_ms * MS_TO_KMH).round() as u32
}

/// Distance-indexed speed/throttle/rpm trace for a track ceiling.
///
/// Produces `length_m / step_m + 1` samples starting at 0 m. Speed is held
/// within `[60, top_speed_kmh]` after the engine map and tire factors apply.
pub fn synthesize_profile(
    top_speed_kmh: f64,
    engine_map_factor: f64,
    tire_grip_factor: f64,
    length_m: u32,
    step_m: u32,
) -> Vec<ProfileSample> {
    use defaults::*;

    let step = step_m.max(1);
    let ceiling = finite_or_zero(top_speed_kmh).max(PROFILE_MIN_SPEED_KMH as f64);
    let factor = finite_or_zero(engine_map_factor) * finite_or_zero(tire_grip_factor);

    let samples: Vec<ProfileSample> = (0..=length_m)
        .step_by(step as usize)
        .map(|distance| {
            let d = distance as f64;
            let base = ceiling.min(120.0 + 0.12 * d + 10.0 * (d / 250.0).sin());
            let speed = (base * factor)
                .round()
                .clamp(PROFILE_MIN_SPEED_KMH as f64, ceiling.floor()) as u32;
            let throttle = (60.0 + 40.0 * (d / 220.0).cos()).round().clamp(20.0, 100.0) as u32;
            let rpm = ((speed as f64 * RPM_PER_KMH).round() as u32).min(RPM_CEILING);
            ProfileSample {
                distance,
                speed,
                throttle,
                rpm,
            }
        })
        .collect();

    debug!(
        "Synthesized {} profile samples (ceiling {} km/h, factor {:.3})",
        samples.len(),
        ceiling,
        factor
    );
    samples
}

/// Profile over the default 3000 m course at 100 m resolution.
pub fn synthesize_track_profile(
    category: TrackCategory,
    engine_map: EngineMap,
    tire: &TireCompound,
) -> Vec<ProfileSample> {
    synthesize_profile(
        category.top_speed_kmh(),
        engine_map.speed_factor(),
        tire.grip,
        defaults::PROFILE_LENGTH_M,
        defaults::PROFILE_STEP_M,
    )
}

/// Distance/speed trace for one lap, scaled by a driving-style factor.
pub fn synthesize_lap(style_factor: f64) -> Vec<LapSample> {
    use defaults::*;

    let factor = finite_or_zero(style_factor);
    (0..=LAP_LENGTH_M)
        .step_by(LAP_STEP_M as usize)
        .map(|distance| {
            let d = distance as f64;
            let base = LAP_SPEED_CEILING_KMH.min(110.0 + 0.13 * d + 12.0 * (d / 260.0).sin());
            LapSample {
                distance,
                speed: (base * factor).round().max(0.0) as u32,
            }
        })
        .collect()
}

fn rounded_mean(samples: &[LapSample]) -> u32 {
    if samples.is_empty() {
        return 0;
    }
    let total: u64 = samples.iter().map(|s| s.speed as u64).sum();
    (total as f64 / samples.len() as f64).round() as u32
}

/// Top speed, rounded mean, and the rounded mean of three contiguous
/// sectors. The first two sectors hold `n / 3` samples each and the third
/// takes the remainder.
pub fn summarize(samples: &[LapSample]) -> LapSummary {
    let sector = samples.len() / 3;
    let (first, rest) = samples.split_at(sector);
    let (second, third) = rest.split_at(sector);

    LapSummary {
        top_speed: samples.iter().map(|s| s.speed).max().unwrap_or(0),
        avg_speed: rounded_mean(samples),
        sector1_avg: rounded_mean(first),
        sector2_avg: rounded_mean(second),
        sector3_avg: rounded_mean(third),
    }
}

/// Time-indexed throttle/brake/speed/rpm trace for an engine and tire pair.
pub fn synthesize_run(max_rpm: u32, throttle_response: f64, grip: f64, samples: usize) -> Vec<RunSample> {
    let response = finite_or_zero(throttle_response);
    let grip = finite_or_zero(grip);

    (0..samples)
        .map(|i| {
            let x = i as f64;
            let throttle = (x / 8.0).sin().max(0.0) * response;
            let brake = ((x / 10.0).cos() - 0.85).max(0.0);
            let rpm = (9000.0 + throttle * 6000.0 - brake * 3000.0).min(max_rpm as f64);
            let speed = ((90.0 + throttle * 200.0 - brake * 120.0) * grip).max(0.0);
            RunSample {
                t: x * defaults::RUN_SAMPLE_PERIOD_S,
                speed,
                throttle,
                brake,
                rpm,
            }
        })
        .collect()
}

// ──────────────────────────────────────────────────────────────────────────────
// Dataset parsing

#[derive(Debug)]
pub enum CatalogError {
    /// The CSV text had no header row.
    MissingHeader,
    /// The CSV reader rejected the input.
    Csv(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::MissingHeader => write!(f, "CSV input has no header row"),
            CatalogError::Csv(msg) => write!(f, "Malformed CSV: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::Csv(err.to_string())
    }
}

/// Loosely-typed CSV contents: a header row plus string records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// First header matching `pattern`, in header order.
    pub fn find_column(&self, pattern: &Regex) -> Option<usize> {
        self.headers.iter().position(|h| pattern.is_match(h))
    }

    pub fn value<'a>(&self, record: &'a [String], column: usize) -> Option<&'a str> {
        record.get(column).map(String::as_str)
    }

    /// Value of the first listed column that is present and non-empty in `record`.
    pub fn first_present<'a>(&self, record: &'a [String], names: &[&str]) -> Option<&'a str> {
        names
            .iter()
            .filter_map(|name| self.column(name))
            .filter_map(|col| self.value(record, col))
            .find(|v| !v.is_empty())
    }
}

/// Parse CSV text with a header row. Fields are trimmed and short rows are
/// kept; missing trailing cells read as absent.
pub fn read_table_from_csv_string(csv_content: &str) -> Result<CsvTable, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.trim().as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(CatalogError::MissingHeader);
    }

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        match result {
            Ok(record) => records.push(record.iter().map(str::to_string).collect()),
            Err(e) => debug!("Warning: skipping CSV line {}: {}", i + 2, e),
        }
    }

    info!("Loaded {} CSV rows with {} columns", records.len(), headers.len());
    Ok(CsvTable { headers, records })
}

static NON_ALNUM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());
static MAKE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)make").unwrap());
static POWER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(power|hp|kw)").unwrap());
static TORQUE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)torque").unwrap());
static YEAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)year").unwrap());
static MODEL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)model").unwrap());
static RPM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)rpm").unwrap());

/// Lowercase identifier with every run of non-alphanumerics replaced by `-`.
pub fn slugify(text: &str) -> String {
    NON_ALNUM_REGEX
        .replace_all(&text.to_lowercase(), "-")
        .into_owned()
}

/// Driver row normalised from one of the public season datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDriver {
    pub id: String,
    pub name: String,
    pub team: String,
    pub country: String,
    pub number: String,
}

impl DatasetDriver {
    /// Datasets carry no style information, so fetched drivers are balanced.
    pub fn into_driver(self, color: &str) -> Driver {
        Driver {
            id: self.id,
            name: self.name,
            style: DrivingStyle::Balanced,
            color: color.to_string(),
        }
    }
}

const DRIVER_NAME_FIELDS: [&str; 4] = ["Driver", "driver", "Name", "name"];
const DRIVER_TEAM_FIELDS: [&str; 2] = ["Team", "team"];
const DRIVER_COUNTRY_FIELDS: [&str; 3] = ["Country", "Nationality", "country"];
const DRIVER_NUMBER_FIELDS: [&str; 3] = ["Number", "number", "No"];
const TRACK_NAME_FIELDS: [&str; 6] = ["Track", "track", "Name", "name", "Circuit", "circuit"];
const TRACK_COUNTRY_FIELDS: [&str; 3] = ["Country", "country", "Location"];

pub fn drivers_from_table(table: &CsvTable) -> Vec<DatasetDriver> {
    table
        .records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let name = table.first_present(record, &DRIVER_NAME_FIELDS);
            DatasetDriver {
                id: slugify(name.unwrap_or(&format!("driver-{}", idx))),
                name: name
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Driver {}", idx + 1)),
                team: table
                    .first_present(record, &DRIVER_TEAM_FIELDS)
                    .unwrap_or("Unknown")
                    .to_string(),
                country: table
                    .first_present(record, &DRIVER_COUNTRY_FIELDS)
                    .unwrap_or("—")
                    .to_string(),
                number: table
                    .first_present(record, &DRIVER_NUMBER_FIELDS)
                    .unwrap_or("—")
                    .to_string(),
            }
        })
        .collect()
}

/// Tracks from a dataset. Category is not in the source data and defaults
/// to balanced-high-downforce.
pub fn tracks_from_table(table: &CsvTable) -> Vec<Track> {
    table
        .records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let name = table.first_present(record, &TRACK_NAME_FIELDS);
            Track {
                id: slugify(name.unwrap_or(&format!("track-{}", idx))),
                name: name
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("Track {}", idx + 1)),
                country: table
                    .first_present(record, &TRACK_COUNTRY_FIELDS)
                    .unwrap_or("—")
                    .to_string(),
                category: TrackCategory::default(),
            }
        })
        .collect()
}

fn parse_positive(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v != 0.0)
}

/// Engine models for rows whose make column contains `maker_substring`
/// (case-insensitive). Columns are located by name patterns; missing or
/// non-numeric values fall back to [`defaults`].
pub fn engines_from_table(table: &CsvTable, maker: &str, maker_substring: &str) -> Vec<EngineModel> {
    let Some(make_col) = table.find_column(&MAKE_REGEX) else {
        warn!("Engine dataset has no make column; headers: {:?}", table.headers);
        return Vec::new();
    };
    let power_col = table.find_column(&POWER_REGEX);
    let torque_col = table.find_column(&TORQUE_REGEX);
    let year_col = table.find_column(&YEAR_REGEX);
    let model_col = table.find_column(&MODEL_REGEX);
    let rpm_col = table.find_column(&RPM_REGEX);

    let needle = maker_substring.to_lowercase();
    let cell = |record: &[String], col: Option<usize>| -> Option<String> {
        col.and_then(|c| record.get(c)).cloned()
    };

    table
        .records
        .iter()
        .filter(|record| {
            record
                .get(make_col)
                .map(|m| m.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .enumerate()
        .map(|(i, record)| EngineModel {
            maker: maker.to_string(),
            code: cell(record, model_col)
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| format!("{}-{}", maker, i + 1)),
            year: parse_positive(cell(record, year_col).as_deref())
                .map(|y| y as u32)
                .unwrap_or(defaults::ENGINE_YEAR),
            peak_power_kw: parse_positive(cell(record, power_col).as_deref())
                .unwrap_or(defaults::ENGINE_PEAK_POWER_KW),
            torque_nm: parse_positive(cell(record, torque_col).as_deref())
                .unwrap_or(defaults::ENGINE_TORQUE_NM),
            max_rpm: parse_positive(cell(record, rpm_col).as_deref())
                .map(|r| r as u32)
                .unwrap_or(defaults::ENGINE_MAX_RPM),
            throttle_response: defaults::ENGINE_THROTTLE_RESPONSE,
            ers_kw: defaults::ENGINE_ERS_KW,
        })
        .collect()
}
