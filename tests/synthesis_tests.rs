// Host-side tests for the corner, profile, lap and run synthesizers.

use race_analytics::{
    catalog, defaults, estimate_apex_speed, summarize, synthesize_lap, synthesize_profile,
    synthesize_run, synthesize_track_profile, DrivingStyle, EngineMap, LapSample, TrackCategory,
};

#[test]
fn parabolica_reference_speed() {
    // sqrt(1.65 * 1.02 * 9.81 * 250) * 3.6
    assert_eq!(estimate_apex_speed(250.0, 2.0, 0.0, defaults::BASE_GRIP), 231);
}

#[test]
fn apex_speed_is_positive_and_monotone_in_radius() {
    for camber in 0..=6 {
        for elevation in (-20..=20).step_by(5) {
            let mut previous = 0;
            for radius in (10..=500).step_by(10) {
                let v = estimate_apex_speed(
                    radius as f64,
                    camber as f64,
                    elevation as f64,
                    defaults::BASE_GRIP,
                );
                assert!(v > 0, "radius {radius} camber {camber} elevation {elevation}");
                assert!(
                    v >= previous,
                    "speed fell from {previous} to {v} at radius {radius}"
                );
                previous = v;
            }
        }
    }
}

#[test]
fn apex_inputs_are_clamped_not_rejected() {
    let grip = defaults::BASE_GRIP;
    // Radius is floored at 10 m
    assert_eq!(
        estimate_apex_speed(0.0, 0.0, 0.0, grip),
        estimate_apex_speed(10.0, 0.0, 0.0, grip)
    );
    assert_eq!(
        estimate_apex_speed(-50.0, 0.0, 0.0, grip),
        estimate_apex_speed(10.0, 0.0, 0.0, grip)
    );
    // Camber beyond 6 degrees adds nothing
    assert_eq!(
        estimate_apex_speed(150.0, 12.0, 0.0, grip),
        estimate_apex_speed(150.0, 6.0, 0.0, grip)
    );
    // Elevation effect saturates at +/-2 m
    assert_eq!(
        estimate_apex_speed(150.0, 0.0, 40.0, grip),
        estimate_apex_speed(150.0, 0.0, 2.0, grip)
    );
    assert_eq!(
        estimate_apex_speed(150.0, 0.0, -40.0, grip),
        estimate_apex_speed(150.0, 0.0, -2.0, grip)
    );
}

#[test]
fn crest_is_slower_than_compression() {
    let crest = estimate_apex_speed(200.0, 1.0, 5.0, defaults::BASE_GRIP);
    let flat = estimate_apex_speed(200.0, 1.0, 0.0, defaults::BASE_GRIP);
    let dip = estimate_apex_speed(200.0, 1.0, -5.0, defaults::BASE_GRIP);
    assert!(crest < flat && flat < dip);
}

#[test]
fn effective_grip_has_a_floor() {
    assert_eq!(estimate_apex_speed(100.0, 0.0, 0.0, 0.1), 107);
    assert_eq!(
        estimate_apex_speed(100.0, 0.0, 0.0, 0.0),
        estimate_apex_speed(100.0, 0.0, 0.0, 0.9)
    );
}

#[test]
fn non_finite_inputs_fall_back_to_clamps() {
    let v = estimate_apex_speed(f64::NAN, f64::INFINITY, f64::NAN, defaults::BASE_GRIP);
    assert_eq!(v, estimate_apex_speed(10.0, 0.0, 0.0, defaults::BASE_GRIP));
}

#[test]
fn corners_report_their_apex_speed() {
    for corner in catalog::corners_for("monza") {
        assert_eq!(
            corner.apex_speed_kmh(),
            estimate_apex_speed(corner.radius_m, corner.camber_deg, corner.elevation_m, 1.65)
        );
    }
}

#[test]
fn profile_has_fixed_length_and_bounded_speed() {
    for category in TrackCategory::ALL {
        for map in EngineMap::ALL {
            for tire in catalog::tires() {
                let top = category.top_speed_kmh();
                let profile = synthesize_track_profile(category, map, &tire);
                assert_eq!(profile.len(), 31);
                assert_eq!(profile.first().map(|s| s.distance), Some(0));
                assert_eq!(profile.last().map(|s| s.distance), Some(3000));
                for sample in &profile {
                    assert!(sample.speed as f64 <= top, "{category} {:?} {}", map, tire.id);
                    assert!(sample.speed >= 60);
                    assert!((20..=100).contains(&sample.throttle));
                    assert!(sample.rpm <= defaults::RPM_CEILING);
                }
            }
        }
    }
}

#[test]
fn profile_length_follows_step() {
    assert_eq!(synthesize_profile(315.0, 1.0, 1.0, 1000, 250).len(), 5);
    assert_eq!(synthesize_profile(315.0, 1.0, 1.0, 1000, 300).len(), 4);
    // A zero step is treated as 1 m instead of looping forever
    assert_eq!(synthesize_profile(315.0, 1.0, 1.0, 10, 0).len(), 11);
}

#[test]
fn profile_starts_at_full_throttle() {
    let profile = synthesize_profile(315.0, 1.0, 1.0, 3000, 100);
    assert_eq!(profile[0].throttle, 100);
    assert_eq!(profile[0].speed, 120);
}

#[test]
fn low_factors_hit_the_speed_floor() {
    let profile = synthesize_profile(315.0, 0.1, 0.1, 3000, 100);
    assert!(profile.iter().all(|s| s.speed == 60));
}

#[test]
fn softer_tire_is_faster_everywhere() {
    let soft = catalog::tire("soft").unwrap();
    let hard = catalog::tire("hard").unwrap();
    for category in TrackCategory::ALL {
        for map in [EngineMap::Balanced, EngineMap::Endurance] {
            let slow = synthesize_track_profile(category, map, &hard);
            let fast = synthesize_track_profile(category, map, &soft);
            for (h, s) in slow.iter().zip(&fast) {
                assert!(
                    s.speed > h.speed,
                    "{category} {:?} at {} m: soft {} vs hard {}",
                    map,
                    h.distance,
                    s.speed,
                    h.speed
                );
            }
        }
    }
}

#[test]
fn aggressive_lap_beats_smooth_lap_at_every_distance() {
    let aggressive = synthesize_lap(DrivingStyle::Aggressive.factor());
    let smooth = synthesize_lap(DrivingStyle::Smooth.factor());
    assert_eq!(aggressive.len(), 31);
    assert_eq!(aggressive.len(), smooth.len());
    for (a, s) in aggressive.iter().zip(&smooth) {
        assert_eq!(a.distance, s.distance);
        assert!(a.speed > s.speed, "at {} m: {} vs {}", a.distance, a.speed, s.speed);
    }
}

#[test]
fn balanced_lap_is_capped() {
    let lap = synthesize_lap(1.0);
    assert_eq!(lap[0].speed, 110);
    assert!(lap.iter().all(|s| s.speed <= 320));
    assert_eq!(lap.last().map(|s| s.speed), Some(320));
}

#[test]
fn summary_of_constant_lap_is_that_constant() {
    let lap: Vec<LapSample> = (0..31)
        .map(|i| LapSample {
            distance: i * 100,
            speed: 250,
        })
        .collect();
    let summary = summarize(&lap);
    assert_eq!(summary.top_speed, 250);
    assert_eq!(summary.avg_speed, 250);
    assert_eq!(summary.sector1_avg, 250);
    assert_eq!(summary.sector2_avg, 250);
    assert_eq!(summary.sector3_avg, 250);
}

#[test]
fn summary_sectors_split_in_thirds_with_remainder_last() {
    // 7 samples: sectors of 2, 2 and 3
    let speeds = [100, 100, 200, 200, 300, 300, 330];
    let lap: Vec<LapSample> = speeds
        .iter()
        .enumerate()
        .map(|(i, &speed)| LapSample {
            distance: i as u32 * 100,
            speed,
        })
        .collect();
    let summary = summarize(&lap);
    assert_eq!(summary.sector1_avg, 100);
    assert_eq!(summary.sector2_avg, 200);
    assert_eq!(summary.sector3_avg, 310);
    assert_eq!(summary.top_speed, 330);
    assert_eq!(summary.avg_speed, 219);
    assert_eq!(summary.strongest_sector(), 3);
}

#[test]
fn summary_of_synthetic_lap_rises_through_the_sectors() {
    let summary = summarize(&synthesize_lap(1.0));
    assert_eq!(summary.top_speed, 320);
    assert!(summary.sector1_avg < summary.sector2_avg);
    assert!(summary.sector2_avg < summary.sector3_avg);
    assert!(summary.avg_speed > summary.sector1_avg && summary.avg_speed < summary.sector3_avg);
}

#[test]
fn summary_handles_short_and_empty_laps() {
    let empty = summarize(&[]);
    assert_eq!(empty.top_speed, 0);
    assert_eq!(empty.avg_speed, 0);

    let two = [
        LapSample { distance: 0, speed: 100 },
        LapSample { distance: 100, speed: 200 },
    ];
    let summary = summarize(&two);
    assert_eq!(summary.sector1_avg, 0);
    assert_eq!(summary.sector2_avg, 0);
    assert_eq!(summary.sector3_avg, 150);
}

#[test]
fn run_trace_respects_engine_limits() {
    let run = synthesize_run(12_000, 1.05, 1.0, defaults::RUN_SAMPLES);
    assert_eq!(run.len(), 50);
    assert!((run[1].t - 0.1).abs() < 1e-9);
    assert_eq!(run[0].throttle, 0.0);
    for s in &run {
        assert!(s.rpm <= 12_000.0);
        assert!(s.speed >= 0.0);
        assert!(s.throttle >= 0.0 && s.brake >= 0.0);
    }
}

#[test]
fn run_trace_scales_with_grip() {
    let soft = synthesize_run(15_000, 1.05, 1.05, 50);
    let hard = synthesize_run(15_000, 1.05, 0.96, 50);
    for (s, h) in soft.iter().zip(&hard) {
        assert!(s.speed > h.speed);
        assert_eq!(s.rpm, h.rpm);
    }
}
