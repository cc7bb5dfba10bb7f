//! Pure Yew view components for the Race Analytics UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use crate::hooks::ValidatedInput;
use crate::utils::{describe_lap, format_power, strongest_sector_label};
use race_analytics::catalog::LapSplit;
use race_analytics::{Corner, Driver, EngineModel, LapSummary, PackageRecommendation};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Renders the turn-by-turn apex speed table.
///
/// Displays each corner as a row, showing:
/// - Corner name
/// - Radius, camber and elevation change
/// - Recommended apex speed
pub fn render_corner_table(corners: &[Corner]) -> Html {
    if corners.is_empty() {
        return html! {
            <p class="no-results-message">{ "No corner data for this track" }</p>
        };
    }

    html! {
        <div class="table-container">
            <table class="corner-table">
                <thead>
                    <tr>
                        <th>{ "Corner" }</th>
                        <th>{ "Radius (m)" }</th>
                        <th>{ "Camber (°)" }</th>
                        <th>{ "Elevation (m)" }</th>
                        <th>{ "Recommended apex speed (km/h)" }</th>
                    </tr>
                </thead>
                <tbody>
                    { corners.iter().map(|c| html! {
                        <tr key={c.label.clone()}>
                            <td>{ &c.label }</td>
                            <td>{ c.radius_m }</td>
                            <td>{ c.camber_deg }</td>
                            <td>{ c.elevation_m }</td>
                            <td class="emphasis">{ c.apex_speed_kmh() }</td>
                        </tr>
                    }).collect::<Html>() }
                </tbody>
            </table>
        </div>
    }
}

pub fn render_package(rec: &PackageRecommendation) -> Html {
    html! {
        <div class="card">
            <p class="card-title">{ "Package Recommendation" }</p>
            <p class="emphasis">{ rec.engine }</p>
            <ul>
                { rec.parts.iter().map(|p| html! { <li>{ *p }</li> }).collect::<Html>() }
            </ul>
        </div>
    }
}

pub fn render_quick_metrics(corner_count: usize, base_grip: f64) -> Html {
    html! {
        <div class="card">
            <p class="card-title">{ "Quick Metrics" }</p>
            <div class="metric-grid">
                { metric_tile("Corners", corner_count.to_string()) }
                { metric_tile("Grip index", base_grip.to_string()) }
                { metric_tile("Typical top speed", "330+ km/h".to_string()) }
            </div>
        </div>
    }
}

fn metric_tile(label: &str, value: String) -> Html {
    html! {
        <div class="metric-tile">
            <p class="metric-label">{ label }</p>
            <p class="metric-value">{ value }</p>
        </div>
    }
}

pub fn render_engine_specs(model: &EngineModel) -> Html {
    html! {
        <div class="metric-grid">
            { metric_tile("Peak Power", format_power(model)) }
            { metric_tile("Torque", format!("{} Nm", model.torque_nm)) }
            { metric_tile("Max RPM", format!("{} rpm", model.max_rpm)) }
        </div>
    }
}

/// Top/average pace and a short description for one compared driver.
pub fn render_driver_metrics(driver: &Driver, summary: &LapSummary) -> Html {
    html! {
        <div class="metric-tile" key={driver.id.clone()}>
            <p class="emphasis" style={format!("color: {}", driver.color)}>{ &driver.name }</p>
            <div class="metric-grid four">
                { metric_tile("Top", format!("{} km/h", summary.top_speed)) }
                { metric_tile("Avg", format!("{} km/h", summary.avg_speed)) }
                { metric_tile("S1", summary.sector1_avg.to_string()) }
                { metric_tile("S2", summary.sector2_avg.to_string()) }
            </div>
            <p class="metric-label">{ "Description" }</p>
            <p>{ describe_lap(&driver.name, summary) }</p>
        </div>
    }
}

pub fn render_sector_card(driver: &Driver, summary: &LapSummary) -> Html {
    html! {
        <div class="metric-tile" key={driver.id.clone()}>
            <p class="emphasis" style={format!("color: {}", driver.color)}>{ &driver.name }</p>
            <div class="metric-grid">
                { metric_tile("S1", format!("{} km/h", summary.sector1_avg)) }
                { metric_tile("S2", format!("{} km/h", summary.sector2_avg)) }
                { metric_tile("S3", format!("{} km/h", summary.sector3_avg)) }
            </div>
            <p class="metric-label">
                { format!("Summary: Strongest in {}; opportunity in other sectors.", strongest_sector_label(summary)) }
            </p>
        </div>
    }
}

pub fn render_lap_table(splits: &[LapSplit]) -> Html {
    html! {
        <table class="corner-table">
            <thead>
                <tr>
                    <th>{ "Lap" }</th>
                    <th>{ "S1 (s)" }</th>
                    <th>{ "S2 (s)" }</th>
                    <th>{ "S3 (s)" }</th>
                    <th>{ "Total (s)" }</th>
                </tr>
            </thead>
            <tbody>
                { splits.iter().map(|s| html! {
                    <tr key={s.lap}>
                        <td>{ s.lap }</td>
                        <td>{ format!("{:.1}", s.s1) }</td>
                        <td>{ format!("{:.1}", s.s2) }</td>
                        <td>{ format!("{:.1}", s.s3) }</td>
                        <td>{ format!("{:.1}", s.total) }</td>
                    </tr>
                }).collect::<Html>() }
            </tbody>
        </table>
    }
}

/// Labelled `<select>` emitting the chosen option value.
#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    /// (value, text) pairs in display order.
    pub options: Vec<(String, String)>,
    pub selected: AttrValue,
    pub onchange: Callback<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let emit = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            emit.emit(select.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <select id={props.id.clone()} {onchange}>
                { props.options.iter().map(|(value, text)| html! {
                    <option value={value.clone()} selected={value.as_str() == props.selected.as_str()}>{ text }</option>
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// Driver chips that toggle membership in the comparison.
#[derive(Properties, PartialEq)]
pub struct DriverToggleProps {
    pub drivers: Vec<Driver>,
    pub selected: Vec<String>,
    pub ontoggle: Callback<String>,
}

#[function_component(DriverToggle)]
pub fn driver_toggle(props: &DriverToggleProps) -> Html {
    html! {
        <div class="driver-chips">
            { props.drivers.iter().map(|d| {
                let active = props.selected.contains(&d.id);
                let onclick = {
                    let id = d.id.clone();
                    let ontoggle = props.ontoggle.clone();
                    Callback::from(move |_: MouseEvent| ontoggle.emit(id.clone()))
                };
                let style = if active {
                    format!("box-shadow: inset 0 0 0 1px {}", d.color)
                } else {
                    String::new()
                };
                html! {
                    <button key={d.id.clone()} class={classes!("chip", active.then_some("active"))} {style} {onclick}>
                        <span class="dot" style={format!("background-color: {}", d.color)} />
                        { &d.name }
                    </button>
                }
            }).collect::<Html>() }
        </div>
    }
}

/// Text field wired to a [`ValidatedInput`].
#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub text: AttrValue,
    pub error: Option<String>,
    pub oninput: Callback<InputEvent>,
    pub onchange: Callback<Event>,
}

impl NumberFieldProps {
    pub fn wire<T: Clone + PartialEq + 'static>(id: &'static str, label: &'static str, input: &ValidatedInput<T>) -> Self {
        NumberFieldProps {
            id: id.into(),
            label: label.into(),
            text: input.text.clone().into(),
            error: input.error.clone(),
            oninput: input.on_text_input.clone(),
            onchange: input.on_commit.clone(),
        }
    }
}

#[function_component(NumberField)]
pub fn number_field(props: &NumberFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <input id={props.id.clone()}
                type="text"
                inputmode="decimal"
                value={props.text.clone()}
                oninput={props.oninput.clone()}
                onchange={props.onchange.clone()}
            />
            if let Some(err) = &props.error {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

/// Fixed-height canvas that a chart effect draws into.
#[derive(Properties, PartialEq)]
pub struct ChartCanvasProps {
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
}

#[function_component(ChartCanvas)]
pub fn chart_canvas(props: &ChartCanvasProps) -> Html {
    html! {
        <div class="card">
            <p class="card-title">{ props.title.clone() }</p>
            <div class="chart-box">
                <canvas id={props.id.clone()}></canvas>
            </div>
            if let Some(caption) = &props.caption {
                <p class="caption">{ caption.clone() }</p>
            }
        </div>
    }
}
