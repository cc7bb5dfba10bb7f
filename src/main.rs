//! Main module for the Race Analytics application using Yew.
//! Wires views, per-view selection state, dataset loading and chart effects.

use log::{info, warn};
use race_analytics::remote::{predict_win_probability, WinProbabilityRequest};
use race_analytics::{
    catalog, defaults, drivers_from_table, engines_from_table, estimate_apex_speed, summarize,
    synthesize_lap, synthesize_run, synthesize_track_profile, tracks_from_table, EngineMap, Track,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod cache;
mod chart;
mod components;
mod config;
mod hooks;
mod utils;

use cache::fetch_dataset;
use components::{
    render_corner_table, render_driver_metrics, render_engine_specs, render_lap_table,
    render_package, render_quick_metrics, render_sector_card, ChartCanvas, DriverToggle,
    NumberField, NumberFieldProps, SelectField,
};
use config::*;
use hooks::use_validated_input;
use utils::{format_probability, validate_camber, validate_elevation, validate_radius};

const PROFILE_CHART_ID: &str = "profile-chart";
const THROTTLE_CHART_ID: &str = "throttle-brake-chart";
const SPEED_RPM_CHART_ID: &str = "speed-rpm-chart";
const COMPARISON_CHART_ID: &str = "comparison-chart";
const LAP_BREAKDOWN_CHART_ID: &str = "lap-breakdown-chart";

// ──────────────────────────────────────────────────────────────────────────────
// Navigation

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Dashboard,
    LapBreakdown,
    EngineTire,
    Comparison,
    Strategy,
}

impl Page {
    const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::LapBreakdown,
        Page::EngineTire,
        Page::Comparison,
        Page::Strategy,
    ];

    fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::LapBreakdown => "Lap Breakdown",
            Page::EngineTire => "Engine & Tire",
            Page::Comparison => "Comparison",
            Page::Strategy => "Strategy",
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Draw a chart after render and tear it down when the view unmounts or the
/// inputs change.
fn redraw_on_change(canvas_id: &'static str, spec: chart::ChartSpec) -> impl FnOnce() {
    chart::draw(canvas_id, &spec);
    move || chart::destroy_chart(canvas_id)
}

fn track_options(tracks: &[Track]) -> Vec<(String, String)> {
    tracks.iter().map(|t| (t.id.clone(), t.display_name())).collect()
}

fn engine_map_options() -> Vec<(String, String)> {
    EngineMap::ALL
        .iter()
        .map(|m| (m.id().to_string(), m.label().to_string()))
        .collect()
}

fn tire_options() -> Vec<(String, String)> {
    catalog::tires()
        .into_iter()
        .map(|t| (t.id, t.label))
        .collect()
}

// ──────────────────────────────────────────────────────────────────────────────
// Views

/// Track selection, corner speeds, package advice and the distance profile.
#[function_component(DashboardView)]
fn dashboard_view() -> Html {
    let track_catalog = use_state(catalog::tracks);
    let track_id = use_state(|| DEFAULT_TRACK_ID.to_string());
    let engine_map = use_state(|| EngineMap::Balanced);
    let tire_id = use_state(|| DEFAULT_TIRE_ID.to_string());
    let win_probability = use_state(|| None::<f64>);

    // Replace the built-in tracks wholesale if a public dataset loads
    {
        let track_catalog = track_catalog.clone();
        let track_id = track_id.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let table = fetch_dataset(track_dataset_urls()).await;
                let fetched = tracks_from_table(&table);
                if let Some(first) = fetched.first() {
                    info!("Using {} tracks from dataset", fetched.len());
                    track_id.set(first.id.clone());
                    track_catalog.set(fetched);
                }
            });
        });
    }

    let selected_track = track_catalog
        .iter()
        .find(|t| t.id == *track_id)
        .or_else(|| track_catalog.first())
        .cloned()
        .unwrap_or_else(|| catalog::tracks().swap_remove(0));
    let tire = catalog::tire(&tire_id).unwrap_or_else(|| catalog::tires().swap_remove(0));
    let corners = catalog::corners_for(&selected_track.id);
    let recommendation = selected_track.category.recommendation();

    {
        let profile = synthesize_track_profile(selected_track.category, *engine_map, &tire);
        use_effect_with(profile, move |profile| {
            redraw_on_change(PROFILE_CHART_ID, chart::profile_chart(profile))
        });
    }

    // Custom corner calculator
    let radius = use_validated_input(DEFAULT_CUSTOM_RADIUS_M, Rc::new(validate_radius));
    let camber = use_validated_input(DEFAULT_CUSTOM_CAMBER_DEG, Rc::new(validate_camber));
    let elevation = use_validated_input(DEFAULT_CUSTOM_ELEVATION_M, Rc::new(validate_elevation));
    let custom_speed = estimate_apex_speed(radius.value, camber.value, elevation.value, defaults::BASE_GRIP);

    let on_track = {
        let track_id = track_id.clone();
        Callback::from(move |id: String| track_id.set(id))
    };
    let on_engine_map = {
        let engine_map = engine_map.clone();
        Callback::from(move |id: String| {
            if let Some(map) = EngineMap::from_id(&id) {
                engine_map.set(map);
            }
        })
    };
    let on_tire = {
        let tire_id = tire_id.clone();
        Callback::from(move |id: String| tire_id.set(id))
    };
    let on_predict = {
        let win_probability = win_probability.clone();
        let body = WinProbabilityRequest::for_selection(selected_track.category, *engine_map, &tire.id);
        Callback::from(move |_: MouseEvent| {
            let win_probability = win_probability.clone();
            let body = body.clone();
            spawn_local(async move {
                match predict_win_probability(API_URL, &body).await {
                    Ok(p) => win_probability.set(Some(p)),
                    Err(e) => {
                        warn!("Win probability unavailable: {}", e);
                        win_probability.set(None);
                    }
                }
            });
        })
    };

    html! {
        <div class="view">
            <h2 class="view-title">{ "Race Engineering Dashboard" }</h2>
            <div class="card form-row">
                <SelectField id="track" label="Select Track"
                    options={track_options(&track_catalog)}
                    selected={selected_track.id.clone()}
                    onchange={on_track} />
                <SelectField id="engine" label="Engine Map"
                    options={engine_map_options()}
                    selected={engine_map.id()}
                    onchange={on_engine_map} />
                <SelectField id="tire" label="Tire Compound"
                    options={tire_options()}
                    selected={tire.id.clone()}
                    onchange={on_tire} />
                <div class="form-group">
                    <button class="btn" onclick={on_predict}>{ "Predict Win Probability" }</button>
                    if let Some(p) = *win_probability {
                        <span class="win-probability">
                            { "Win Probability: " }<strong>{ format_probability(p) }</strong>
                        </span>
                    }
                </div>
            </div>

            <div class="card-grid">
                { render_package(&recommendation) }
                { render_quick_metrics(corners.len(), defaults::BASE_GRIP) }
                <div class="card">
                    <p class="card-title">{ "Notes" }</p>
                    <p>{ "Calculations use a simplified lateral grip model with camber/elevation modifiers for indicative setup guidance." }</p>
                </div>
            </div>

            <div class="card">
                <p class="card-title">{ "Turn-by-Turn Recommended Corner Speeds" }</p>
                { render_corner_table(&corners) }
            </div>

            <div class="card form-row">
                <NumberField ..NumberFieldProps::wire("custom-radius", "Radius (m)", &radius) />
                <NumberField ..NumberFieldProps::wire("custom-camber", "Camber (°)", &camber) />
                <NumberField ..NumberFieldProps::wire("custom-elevation", "Elevation (m)", &elevation) />
                <div class="form-group">
                    <p class="metric-label">{ "Custom corner apex speed" }</p>
                    <p class="metric-value">{ format!("{} km/h", custom_speed) }</p>
                </div>
            </div>

            <ChartCanvas id={PROFILE_CHART_ID}
                title="Speed and RPM Profile by Distance"
                caption="Chart: Speed and RPM vs Distance (engine map and tire compound applied)" />
        </div>
    }
}

/// Power unit specs with synthetic throttle/brake and speed/rpm traces.
#[function_component(EngineTireView)]
fn engine_tire_view() -> Html {
    let makers = use_state(catalog::engine_makers);
    let maker_idx = use_state(|| 0usize);
    let model_idx = use_state(|| 0usize);
    let tire_id = use_state(|| DEFAULT_TIRE_ID.to_string());

    // Enrich the Ferrari group from a configured dataset, if any
    {
        let makers = makers.clone();
        use_effect_with((), move |_| {
            if let Some(url) = FERRARI_CSV_URL {
                spawn_local(async move {
                    let table = fetch_dataset(vec![url.to_string()]).await;
                    let models = engines_from_table(&table, ENGINE_DATASET_MAKER, ENGINE_DATASET_MAKER);
                    if !models.is_empty() {
                        info!("Loaded {} {} engine rows", models.len(), ENGINE_DATASET_MAKER);
                        makers.set(catalog::with_maker_models(
                            catalog::engine_makers(),
                            ENGINE_DATASET_MAKER,
                            models,
                        ));
                    }
                });
            }
        });
    }

    let maker = makers.get(*maker_idx).or_else(|| makers.first()).cloned();
    let model = maker
        .as_ref()
        .and_then(|m| m.models.get(*model_idx).or_else(|| m.models.first()))
        .cloned();
    let tire = catalog::tire(&tire_id).unwrap_or_else(|| catalog::tires().swap_remove(0));

    {
        let run = model
            .as_ref()
            .map(|m| synthesize_run(m.max_rpm, m.throttle_response, tire.grip, defaults::RUN_SAMPLES))
            .unwrap_or_default();
        use_effect_with(run, move |run| {
            let throttle = redraw_on_change(THROTTLE_CHART_ID, chart::throttle_brake_chart(run));
            let speed = redraw_on_change(SPEED_RPM_CHART_ID, chart::speed_rpm_chart(run));
            move || {
                throttle();
                speed();
            }
        });
    }

    let maker_options: Vec<(String, String)> = makers
        .iter()
        .enumerate()
        .map(|(i, m)| (i.to_string(), m.maker.clone()))
        .collect();
    let model_options: Vec<(String, String)> = maker
        .as_ref()
        .map(|m| {
            m.models
                .iter()
                .enumerate()
                .map(|(i, model)| (i.to_string(), format!("{} ({})", model.code, model.year)))
                .collect()
        })
        .unwrap_or_default();

    let on_maker = {
        let maker_idx = maker_idx.clone();
        let model_idx = model_idx.clone();
        Callback::from(move |raw: String| {
            maker_idx.set(raw.parse().unwrap_or(0));
            model_idx.set(0);
        })
    };
    let on_model = {
        let model_idx = model_idx.clone();
        Callback::from(move |raw: String| model_idx.set(raw.parse().unwrap_or(0)))
    };
    let on_tire = {
        let tire_id = tire_id.clone();
        Callback::from(move |id: String| tire_id.set(id))
    };

    html! {
        <div class="view">
            <h2 class="view-title">{ "Engine & Tire Analytics" }</h2>
            <div class="card">
                <div class="form-row">
                    <SelectField id="maker" label="Engine Manufacturer"
                        options={maker_options}
                        selected={maker_idx.to_string()}
                        onchange={on_maker} />
                    <SelectField id="model" label="Engine Model"
                        options={model_options}
                        selected={model_idx.to_string()}
                        onchange={on_model} />
                    <SelectField id="engine-tire" label="Tire Compound"
                        options={tire_options()}
                        selected={tire.id.clone()}
                        onchange={on_tire} />
                </div>
                if let Some(model) = &model {
                    { render_engine_specs(model) }
                }
                <p class="caption">{ "Data modeled from common F1 PU specs; a configured engine dataset replaces the Ferrari figures." }</p>
            </div>
            <div class="card-grid two">
                <ChartCanvas id={THROTTLE_CHART_ID} title="Throttle / Brake" />
                <ChartCanvas id={SPEED_RPM_CHART_ID} title="Speed / RPM" />
            </div>
        </div>
    }
}

/// Synthetic laps for the selected drivers with pace and sector summaries.
#[function_component(ComparisonView)]
fn comparison_view() -> Html {
    let driver_catalog = use_state(catalog::drivers);
    let selected = use_state(|| {
        DEFAULT_COMPARED_DRIVERS
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
    });

    {
        let driver_catalog = driver_catalog.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let table = fetch_dataset(driver_dataset_urls()).await;
                if let Some(drivers) =
                    catalog::drivers_from_dataset(drivers_from_table(&table), &DRIVER_PALETTE)
                {
                    info!("Using {} drivers from dataset", drivers.len());
                    driver_catalog.set(drivers);
                }
            });
        });
    }

    let laps: Vec<_> = selected
        .iter()
        .map(|id| {
            let driver = catalog::find_driver(&driver_catalog, id, FALLBACK_DRIVER_COLOR);
            let lap = synthesize_lap(driver.style.factor());
            (driver, lap)
        })
        .collect();
    let summaries: Vec<_> = laps.iter().map(|(_, lap)| summarize(lap)).collect();

    {
        let spec = chart::comparison_chart(&laps);
        use_effect_with(spec, move |spec| {
            redraw_on_change(COMPARISON_CHART_ID, spec.clone())
        });
    }

    let on_toggle = {
        let selected = selected.clone();
        Callback::from(move |id: String| {
            let mut next = (*selected).clone();
            if let Some(pos) = next.iter().position(|s| *s == id) {
                next.remove(pos);
            } else {
                next.push(id);
            }
            selected.set(next);
        })
    };

    html! {
        <div class="view">
            <h2 class="view-title">{ "Competitor Comparison" }</h2>
            <div class="card">
                <p class="card-title">{ "Select Drivers" }</p>
                <DriverToggle drivers={(*driver_catalog).clone()}
                    selected={(*selected).clone()}
                    ontoggle={on_toggle} />
            </div>
            <div class="card-grid wide-right">
                <div class="card">
                    <p class="card-title">{ "Driver Metrics" }</p>
                    { laps.iter().zip(&summaries).map(|((driver, _), summary)| {
                        render_driver_metrics(driver, summary)
                    }).collect::<Html>() }
                </div>
                <ChartCanvas id={COMPARISON_CHART_ID}
                    title="Speed vs Distance (Comparison)"
                    caption="Chart: Speed vs Distance for selected drivers. Differences reflect style assumptions." />
            </div>
            <div class="card">
                <p class="card-title">{ "Sector Pace Comparison" }</p>
                <div class="card-grid">
                    { laps.iter().zip(&summaries).map(|((driver, _), summary)| {
                        render_sector_card(driver, summary)
                    }).collect::<Html>() }
                </div>
            </div>
        </div>
    }
}

#[function_component(LapBreakdownView)]
fn lap_breakdown_view() -> Html {
    let splits = catalog::lap_breakdown_sample();

    {
        let spec = chart::lap_breakdown_chart(&splits);
        use_effect_with((), move |_| redraw_on_change(LAP_BREAKDOWN_CHART_ID, spec));
    }

    html! {
        <div class="view">
            <h2 class="view-title">{ "Lap Time Breakdown" }</h2>
            <ChartCanvas id={LAP_BREAKDOWN_CHART_ID} title="Sector times by lap" />
            <div class="card">{ render_lap_table(&splits) }</div>
        </div>
    }
}

#[function_component(StrategyView)]
fn strategy_view() -> Html {
    html! {
        <div class="view">
            <h2 class="view-title">{ "Race Strategy Planner" }</h2>
            <div class="card">
                <p class="caption">{ "AI-driven recommendation (placeholder):" }</p>
                <div class="strategy-note">{ catalog::STRATEGY_NOTE }</div>
            </div>
        </div>
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Application shell: sidebar navigation and the active view.
#[function_component]
pub fn App() -> Html {
    let page = use_state(|| Page::Dashboard);

    let nav = Page::ALL
        .iter()
        .map(|&p| {
            let onclick = {
                let page = page.clone();
                Callback::from(move |_: MouseEvent| page.set(p))
            };
            html! {
                <button key={p.label()} class={classes!("nav-link", (*page == p).then_some("active"))} {onclick}>
                    { p.label() }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="app-layout">
            <aside class="sidebar">
                <h1 class="brand">{ "Race Analytics" }</h1>
                <nav>{ nav }</nav>
            </aside>
            <main class="content">
                {
                    match *page {
                        Page::Dashboard => html! { <DashboardView /> },
                        Page::LapBreakdown => html! { <LapBreakdownView /> },
                        Page::EngineTire => html! { <EngineTireView /> },
                        Page::Comparison => html! { <ComparisonView /> },
                        Page::Strategy => html! { <StrategyView /> },
                    }
                }
            </main>
        </div>
    }
}

/// Entry point: installs logging and the panic hook, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    yew::Renderer::<App>::new().render();
}
