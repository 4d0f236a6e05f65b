use galaxy_core::GalaxyConfig;
use std::str::FromStr;

/// Parse an optional attribute value, warning and ignoring it when malformed.
fn parse_override<T: FromStr>(name: &str, raw: Option<&str>) -> Option<T> {
    let raw = raw?.trim();
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring {}={:?}: not a valid value", name, raw);
            None
        }
    }
}

/// Merge attribute overrides into the default config. A merged config that
/// fails validation falls back to the defaults.
pub fn config_from_attrs(star_count: Option<&str>, seed: Option<&str>) -> GalaxyConfig {
    let mut config = GalaxyConfig::default();
    if let Some(n) = parse_override::<usize>("star count", star_count) {
        config.star_count = n;
    }
    config.seed = parse_override::<u64>("seed", seed);

    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            GalaxyConfig {
                seed: config.seed,
                ..GalaxyConfig::default()
            }
        }
    }
}
