// Host-side tests for the frontend's pure helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod settings {
    include!("../src/settings.rs");
}
mod stats {
    include!("../src/stats.rs");
}

use galaxy_core::{FrameStats, GalaxyConfig, DEFAULT_STAR_COUNT};
use instant::Instant;
use std::time::Duration;

#[test]
fn missing_attributes_give_defaults() {
    assert_eq!(settings::config_from_attrs(None, None), GalaxyConfig::default());
}

#[test]
fn attributes_override_count_and_seed() {
    let config = settings::config_from_attrs(Some(" 1500 "), Some("99"));
    assert_eq!(config.star_count, 1500);
    assert_eq!(config.seed, Some(99));
}

#[test]
fn malformed_attributes_are_ignored() {
    let config = settings::config_from_attrs(Some("lots"), Some("-3"));
    assert_eq!(config.star_count, DEFAULT_STAR_COUNT);
    assert_eq!(config.seed, None);
}

#[test]
fn out_of_range_count_falls_back_but_keeps_seed() {
    let config = settings::config_from_attrs(Some("0"), Some("5"));
    assert_eq!(config.star_count, DEFAULT_STAR_COUNT);
    assert_eq!(config.seed, Some(5));

    let config = settings::config_from_attrs(Some("10000000"), None);
    assert_eq!(config.star_count, DEFAULT_STAR_COUNT);
}

#[test]
fn stats_window_reports_once_per_interval() {
    let t0 = Instant::now();
    let mut window = stats::StatsWindow::new(t0, 1.0);
    let frame = FrameStats {
        drawn: 90,
        culled: 10,
    };
    for i in 1..60u64 {
        let now = t0 + Duration::from_millis(i * 16);
        assert!(window.record(frame, now).is_none());
    }
    let report = window
        .record(frame, t0 + Duration::from_millis(1000))
        .expect("interval elapsed");
    assert_eq!(report.avg_drawn, 90);
    assert_eq!(report.avg_culled, 10);
    assert!((report.fps - 60.0).abs() < 1e-3);

    // Window restarted
    assert!(window
        .record(frame, t0 + Duration::from_millis(1016))
        .is_none());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frontend_constants_are_sane() {
    assert!(constants::STATS_LOG_INTERVAL_SEC > 0.0);
    assert_ne!(constants::CANVAS_ID, constants::OVERLAY_ID);
    assert!(constants::STAR_COUNT_ATTR.starts_with("data-"));
    assert!(constants::SEED_ATTR.starts_with("data-"));
    assert_ne!(constants::CURSOR_IDLE, constants::CURSOR_DRAGGING);
}
