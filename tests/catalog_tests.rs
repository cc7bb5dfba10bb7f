// Host-side tests for the built-in catalogs and dataset normalisation.
// No network access: datasets are literal CSV strings.

use race_analytics::remote::{WinProbabilityRequest, WinProbabilityResponse};
use race_analytics::{
    catalog, drivers_from_table, engines_from_table, read_table_from_csv_string, slugify,
    tracks_from_table, CatalogError, DrivingStyle, EngineMap, TrackCategory,
};

const PALETTE: [&str; 7] = [
    "#f97316", "#22d3ee", "#ef4444", "#f59e0b", "#84cc16", "#a78bfa", "#60a5fa",
];

#[test]
fn every_builtin_track_has_corners() {
    let tracks = catalog::tracks();
    assert_eq!(tracks.len(), 5);
    for track in &tracks {
        assert!(!catalog::corners_for(&track.id).is_empty(), "{}", track.id);
    }
    assert!(catalog::corners_for("nurburgring").is_empty());
}

#[test]
fn track_categories_set_the_ceiling() {
    assert_eq!(TrackCategory::LowDragHighSpeed.top_speed_kmh(), 340.0);
    assert_eq!(TrackCategory::StreetHighDownforce.top_speed_kmh(), 290.0);
    assert_eq!(TrackCategory::TechnicalFlow.top_speed_kmh(), 315.0);
    let monaco = catalog::tracks().into_iter().find(|t| t.id == "monaco").unwrap();
    assert_eq!(monaco.category, TrackCategory::StreetHighDownforce);
    assert_eq!(monaco.display_name(), "Monaco (Monte Carlo)");
}

#[test]
fn every_category_has_a_recommendation() {
    for category in TrackCategory::ALL {
        let rec = category.recommendation();
        assert!(!rec.engine.is_empty());
        assert!(rec.parts.iter().all(|p| !p.is_empty()));
    }
}

#[test]
fn tire_set_is_fixed() {
    let grips: Vec<(String, f64)> = catalog::tires().into_iter().map(|t| (t.id, t.grip)).collect();
    assert_eq!(
        grips,
        vec![
            ("soft".to_string(), 1.05),
            ("medium".to_string(), 1.0),
            ("hard".to_string(), 0.96)
        ]
    );
    assert!(catalog::tire("intermediate").is_none());
}

#[test]
fn engine_maps_round_trip_through_ids() {
    for map in EngineMap::ALL {
        assert_eq!(EngineMap::from_id(map.id()), Some(map));
    }
    assert_eq!(EngineMap::from_id("quali"), Some(EngineMap::Qualifying));
    assert_eq!(EngineMap::from_id("party"), None);
}

#[test]
fn builtin_drivers_have_distinct_styles() {
    let drivers = catalog::drivers();
    assert_eq!(drivers.len(), 4);
    let verstappen = drivers.iter().find(|d| d.id == "verstappen").unwrap();
    assert_eq!(verstappen.style, DrivingStyle::Aggressive);
    assert_eq!(verstappen.style.factor(), 1.03);
}

#[test]
fn csv_reader_handles_quotes_and_short_rows() {
    let table = read_table_from_csv_string(
        "Driver,Team,Country\n\"Hamilton, Lewis\",Ferrari,UK\nNorris,McLaren\n",
    )
    .unwrap();
    assert_eq!(table.headers, vec!["Driver", "Team", "Country"]);
    assert_eq!(table.records.len(), 2);
    assert_eq!(table.records[0][0], "Hamilton, Lewis");
    assert_eq!(table.records[1].len(), 2);
}

#[test]
fn csv_without_header_is_rejected() {
    assert!(matches!(
        read_table_from_csv_string(""),
        Err(CatalogError::MissingHeader)
    ));
}

#[test]
fn slugs_are_lowercase_and_dashed() {
    assert_eq!(slugify("Max Verstappen"), "max-verstappen");
    assert_eq!(slugify("Spa-Francorchamps (Belgium)"), "spa-francorchamps-belgium-");
    assert_eq!(slugify("Sergio  Pérez"), "sergio-p-rez");
}

#[test]
fn drivers_are_normalised_from_any_known_columns() {
    let table = read_table_from_csv_string(
        "Name,team,Nationality,No\nMax Verstappen,Red Bull,Netherlands,1\n,Williams,,\n",
    )
    .unwrap();
    let drivers = drivers_from_table(&table);
    assert_eq!(drivers.len(), 2);

    assert_eq!(drivers[0].id, "max-verstappen");
    assert_eq!(drivers[0].name, "Max Verstappen");
    assert_eq!(drivers[0].team, "Red Bull");
    assert_eq!(drivers[0].country, "Netherlands");
    assert_eq!(drivers[0].number, "1");

    assert_eq!(drivers[1].id, "driver-1");
    assert_eq!(drivers[1].name, "Driver 2");
    assert_eq!(drivers[1].country, "—");
    assert_eq!(drivers[1].number, "—");
}

#[test]
fn dataset_drivers_are_balanced_and_capped() {
    let csv: String = std::iter::once("Driver".to_string())
        .chain((1..=10).map(|i| format!("Driver Number {i}")))
        .collect::<Vec<_>>()
        .join("\n");
    let table = read_table_from_csv_string(&csv).unwrap();
    let drivers = catalog::drivers_from_dataset(drivers_from_table(&table), &PALETTE).unwrap();

    assert_eq!(drivers.len(), catalog::MAX_DATASET_DRIVERS);
    assert!(drivers.iter().all(|d| d.style == DrivingStyle::Balanced));
    assert_eq!(drivers[0].color, PALETTE[0]);
    assert_eq!(drivers[7].color, PALETTE[0]);
    assert_eq!(drivers[6].color, PALETTE[6]);
}

#[test]
fn empty_dataset_keeps_current_drivers() {
    assert!(catalog::drivers_from_dataset(Vec::new(), &PALETTE).is_none());
}

#[test]
fn driver_lookup_falls_back_to_builtins_then_placeholder() {
    let active = vec![catalog::drivers().swap_remove(3)];
    assert_eq!(catalog::find_driver(&active, "norris", "#fff").name, "Lando Norris");

    let hamilton = catalog::find_driver(&active, "hamilton", "#fff");
    assert_eq!(hamilton.style, DrivingStyle::Smooth);

    let unknown = catalog::find_driver(&active, "rookie", "#fff");
    assert_eq!(unknown.name, "rookie");
    assert_eq!(unknown.style, DrivingStyle::Balanced);
    assert_eq!(unknown.color, "#fff");
}

#[test]
fn tracks_are_normalised_with_default_category() {
    let table = read_table_from_csv_string(
        "Circuit,Location,Length\nAutodromo Nazionale Monza,Italy,5.793\n,,\n",
    )
    .unwrap();
    let tracks = tracks_from_table(&table);
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].id, "autodromo-nazionale-monza");
    assert_eq!(tracks[0].country, "Italy");
    assert_eq!(tracks[0].category, TrackCategory::BalancedHighDownforce);
    assert_eq!(tracks[1].id, "track-1");
    assert_eq!(tracks[1].name, "Track 2");
}

#[test]
fn engine_rows_are_filtered_and_defaulted() {
    let table = read_table_from_csv_string(
        "Make,Model,Year,Engine Power (kW),Torque (Nm),Max RPM\n\
         Ferrari,SF90,2023,735,800,8000\n\
         FERRARI S.p.A.,,n/a,,,\n\
         Porsche,911,2024,400,500,9000\n",
    )
    .unwrap();
    let engines = engines_from_table(&table, "Ferrari", "ferrari");
    assert_eq!(engines.len(), 2);

    assert_eq!(engines[0].code, "SF90");
    assert_eq!(engines[0].year, 2023);
    assert_eq!(engines[0].peak_power_kw, 735.0);
    assert_eq!(engines[0].torque_nm, 800.0);
    assert_eq!(engines[0].max_rpm, 8000);
    assert_eq!(engines[0].ers_kw, 120.0);

    assert_eq!(engines[1].maker, "Ferrari");
    assert_eq!(engines[1].code, "Ferrari-2");
    assert_eq!(engines[1].year, 2025);
    assert_eq!(engines[1].peak_power_kw, 720.0);
    assert_eq!(engines[1].torque_nm, 650.0);
    assert_eq!(engines[1].max_rpm, 15_000);
    assert_eq!(engines[1].throttle_response, 1.05);
}

#[test]
fn engine_table_without_make_column_yields_nothing() {
    let table = read_table_from_csv_string("Model,Power\nSF90,735\n").unwrap();
    assert!(engines_from_table(&table, "Ferrari", "ferrari").is_empty());
}

#[test]
fn fetched_models_replace_and_lead_their_maker() {
    let table = read_table_from_csv_string("Make,Model\nFerrari,296\n").unwrap();
    let models = engines_from_table(&table, "Ferrari", "ferrari");
    let makers = catalog::with_maker_models(catalog::engine_makers(), "Ferrari", models);

    assert_eq!(makers.len(), 4);
    assert_eq!(makers[0].maker, "Ferrari");
    assert_eq!(makers[0].models[0].code, "296");
    assert_eq!(makers.iter().filter(|m| m.maker == "Ferrari").count(), 1);

    let untouched = catalog::with_maker_models(catalog::engine_makers(), "Ferrari", Vec::new());
    assert_eq!(untouched, catalog::engine_makers());
}

#[test]
fn win_probability_request_reflects_selection() {
    let req = WinProbabilityRequest::for_selection(
        TrackCategory::LowDragHighSpeed,
        EngineMap::Qualifying,
        "soft",
    );
    assert_eq!(req.track_top_speed_kmh, 340.0);
    assert_eq!(req.downforce_setup, 0.9);
    assert_eq!(req.tire_choice, "soft");

    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["driver_rating"], 92.0);
    assert_eq!(json["engine_power_kw"], 740.0);

    let street = WinProbabilityRequest::for_selection(
        TrackCategory::StreetHighDownforce,
        EngineMap::Endurance,
        "hard",
    );
    assert_eq!(street.track_top_speed_kmh, 315.0);
    assert_eq!(street.downforce_setup, 0.6);
}

#[test]
fn win_probability_must_be_a_probability() {
    let ok: WinProbabilityResponse = serde_json::from_str(r#"{"win_probability": 0.42}"#).unwrap();
    assert_eq!(ok.validated().unwrap(), 0.42);

    let too_high: WinProbabilityResponse =
        serde_json::from_str(r#"{"win_probability": 1.2}"#).unwrap();
    assert!(too_high.validated().is_err());

    assert!(serde_json::from_str::<WinProbabilityResponse>(r#"{"probability": 0.4}"#).is_err());
}
