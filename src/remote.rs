//! Best-effort network collaborators: public CSV datasets and the
//! win-probability endpoint.
//!
//! Nothing here is required for the dashboard to work. Callers keep their
//! built-in catalogs when a fetch fails.

use crate::{read_table_from_csv_string, CatalogError, CsvTable, EngineMap, TrackCategory};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCache, RequestInit, Response};

pub const WIN_PROBABILITY_PATH: &str = "/ml/predict-win-probability";

#[derive(Debug)]
pub enum RemoteError {
    /// The request could not be built or the fetch promise rejected.
    Network(String),
    /// The server answered with a non-success status.
    Status { url: String, status: u16 },
    /// The body could not be read or decoded.
    Parse(String),
    /// A numeric field was outside its documented range.
    OutOfRange(f64),
    Catalog(CatalogError),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Network(msg) => write!(f, "Network error: {}", msg),
            RemoteError::Status { url, status } => {
                write!(f, "Failed to fetch {}: HTTP {}", url, status)
            }
            RemoteError::Parse(msg) => write!(f, "Could not decode response: {}", msg),
            RemoteError::OutOfRange(value) => {
                write!(f, "Value {} is outside the expected range [0, 1]", value)
            }
            RemoteError::Catalog(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RemoteError {}

impl From<CatalogError> for RemoteError {
    fn from(err: CatalogError) -> Self {
        RemoteError::Catalog(err)
    }
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

async fn send(request: Request) -> Result<Response, RemoteError> {
    let url = request.url();
    let promise = gloo_utils::window().fetch_with_request(&request);
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| RemoteError::Network(js_error(e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| RemoteError::Parse("fetch did not resolve to a Response".to_string()))?;

    if !response.ok() {
        return Err(RemoteError::Status {
            url,
            status: response.status(),
        });
    }
    Ok(response)
}

/// GET `url` bypassing the HTTP cache and parse the body as a CSV table.
pub async fn fetch_csv(url: &str) -> Result<CsvTable, RemoteError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| RemoteError::Network(js_error(e)))?;

    let response = send(request).await?;
    let text_promise = response
        .text()
        .map_err(|e| RemoteError::Parse(js_error(e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| RemoteError::Parse(js_error(e)))?
        .as_string()
        .ok_or_else(|| RemoteError::Parse("response body is not text".to_string()))?;

    Ok(read_table_from_csv_string(&text)?)
}

/// Try each URL in order and return the first table that loads.
/// Returns an empty table when every candidate fails.
pub async fn fetch_first_available<S: AsRef<str>>(urls: &[S]) -> CsvTable {
    for url in urls.iter().map(AsRef::as_ref) {
        match fetch_csv(url).await {
            Ok(table) => {
                info!("Loaded dataset from {} ({} rows)", url, table.records.len());
                return table;
            }
            Err(e) => debug!("Dataset candidate {} unavailable: {}", url, e),
        }
    }
    warn!("No dataset candidate could be loaded; keeping built-in data");
    CsvTable::default()
}

/// Body of the placeholder win-probability model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinProbabilityRequest {
    pub driver_rating: f64,
    pub team_rating: f64,
    pub engine_power_kw: f64,
    pub track_top_speed_kmh: f64,
    pub downforce_setup: f64,
    pub tire_choice: String,
}

impl WinProbabilityRequest {
    /// Request for the dashboard's current selection. Ratings and power are
    /// fixed demo values.
    pub fn for_selection(category: TrackCategory, engine_map: EngineMap, tire_id: &str) -> Self {
        WinProbabilityRequest {
            driver_rating: 92.0,
            team_rating: 90.0,
            engine_power_kw: 740.0,
            track_top_speed_kmh: if category == TrackCategory::LowDragHighSpeed {
                340.0
            } else {
                315.0
            },
            downforce_setup: engine_map.downforce_setup(),
            tire_choice: tire_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WinProbabilityResponse {
    pub win_probability: f64,
}

impl WinProbabilityResponse {
    pub fn validated(self) -> Result<f64, RemoteError> {
        if (0.0..=1.0).contains(&self.win_probability) {
            Ok(self.win_probability)
        } else {
            Err(RemoteError::OutOfRange(self.win_probability))
        }
    }
}

/// POST the selection to `{api_url}/ml/predict-win-probability`.
pub async fn predict_win_probability(
    api_url: &str,
    body: &WinProbabilityRequest,
) -> Result<f64, RemoteError> {
    let payload = serde_json::to_string(body).map_err(|e| RemoteError::Parse(e.to_string()))?;

    let headers = Headers::new().map_err(|e| RemoteError::Network(js_error(e)))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| RemoteError::Network(js_error(e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&payload));

    let url = format!("{}{}", api_url, WIN_PROBABILITY_PATH);
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| RemoteError::Network(js_error(e)))?;

    let response = send(request).await?;
    let json_promise = response
        .json()
        .map_err(|e| RemoteError::Parse(js_error(e)))?;
    let value = JsFuture::from(json_promise)
        .await
        .map_err(|e| RemoteError::Parse(js_error(e)))?;
    let decoded: WinProbabilityResponse =
        serde_wasm_bindgen::from_value(value).map_err(|e| RemoteError::Parse(e.to_string()))?;

    decoded.validated()
}
