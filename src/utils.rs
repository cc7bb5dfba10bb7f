use crate::config::{
    MAX_CAMBER_DEG, MAX_ELEVATION_M, MAX_RADIUS_M, MIN_CAMBER_DEG, MIN_ELEVATION_M, MIN_RADIUS_M,
};
use race_analytics::{EngineModel, LapSummary};

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &str,
) -> Result<T, String>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<T>() {
        Ok(val) => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        Err(_) => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Like [`validate_numeric_input`] for `f64`, additionally rejecting NaN and
/// infinities, which slip through range checks.
fn validate_measurement(input: &str, min: f64, max: f64, field_name: &str) -> Result<f64, String> {
    let val = validate_numeric_input(input, Some(min), Some(max), field_name)?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(format!("{} must be a valid number", field_name))
    }
}

pub fn validate_radius(input: &str) -> Result<f64, String> {
    validate_measurement(input, MIN_RADIUS_M, MAX_RADIUS_M, "Radius")
}

pub fn validate_camber(input: &str) -> Result<f64, String> {
    validate_measurement(input, MIN_CAMBER_DEG, MAX_CAMBER_DEG, "Camber")
}

pub fn validate_elevation(input: &str) -> Result<f64, String> {
    validate_measurement(input, MIN_ELEVATION_M, MAX_ELEVATION_M, "Elevation")
}

/// `0.634` → `"63%"`.
pub fn format_probability(p: f64) -> String {
    format!("{}%", (p * 100.0).round() as i64)
}

pub fn format_power(model: &EngineModel) -> String {
    format!("{} kW + ERS {} kW", model.peak_power_kw, model.ers_kw)
}

/// One-sentence description of a driver's synthetic lap.
pub fn describe_lap(name: &str, summary: &LapSummary) -> String {
    format!(
        "{} shows {} km/h top speed with {} km/h average pace. Sector strengths: S1 {}, S2 {}, S3 {}. Style influences corner exit and Vmax.",
        name,
        summary.top_speed,
        summary.avg_speed,
        summary.sector1_avg,
        summary.sector2_avg,
        summary.sector3_avg
    )
}

pub fn strongest_sector_label(summary: &LapSummary) -> String {
    format!("S{}", summary.strongest_sector())
}
