/// DOM hooks and frontend tuning constants.
///
/// Simulation tuning lives in `galaxy_core::constants`; these only cover the
/// browser side.
// Element ids
pub const CANVAS_ID: &str = "galaxy-canvas";
pub const OVERLAY_ID: &str = "galaxy-overlay";

// Optional canvas attributes overriding the default config
pub const STAR_COUNT_ATTR: &str = "data-star-count";
pub const SEED_ATTR: &str = "data-seed";

// Overlay copy
pub const OVERLAY_TITLE: &str = "Interactive Galaxy";
pub const OVERLAY_HINT: &str = "Click and drag to rotate";

// Cursor while idle / while dragging
pub const CURSOR_IDLE: &str = "grab";
pub const CURSOR_DRAGGING: &str = "grabbing";

// Frame statistics are summarized at most this often (seconds)
pub const STATS_LOG_INTERVAL_SEC: f32 = 5.0;
