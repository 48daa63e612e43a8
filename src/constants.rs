//! Detection thresholds and tuning constants
//!
//! Values calibrated against legitimate client movement; raising them trades
//! detection latency for fewer false positives. Map-specific data (transport
//! allow-lists, battleground pens, exclusion areas) lives in the data files,
//! not here.

// =============================================================================
// SPEED
// =============================================================================

/// Tolerance margin applied on top of the server-side speed cap.
pub const SPEED_TOLERANCE: f32 = 1.05;

/// Floor for elapsed client time between two samples.
pub const MIN_ELAPSED_MS: u32 = 1;

// =============================================================================
// TELEPORT
// =============================================================================

/// Horizontal displacement in a single sample that counts as a teleport.
pub const TELEPORT_XY_THRESHOLD: f32 = 50.0;

/// Vertical displacement threshold, only meaningful while neither flying
/// nor falling.
pub const TELEPORT_Z_THRESHOLD: f32 = 10.0;

// =============================================================================
// CLIMB
// =============================================================================

/// Minimum vertical rise before the climb angle is even computed.
pub const CLIMB_MIN_RISE: f32 = 1.87;

/// Steepest walkable slope in radians (~30 degrees).
pub const MAX_CLIMB_ANGLE: f32 = 0.52;

// =============================================================================
// VERTICAL / PLANE
// =============================================================================

/// Gap between the tracked floor height and the reported Z that marks a
/// mismatched floor layer.
pub const PLANE_Z_GAP: f32 = 1.0;

/// Height above the tracked floor at which a perfectly level Z is treated as
/// airborne no-clip movement.
pub const ZAXIS_FLOOR_MARGIN: f32 = 1.0;

/// Height above ground that a fresh jump may legitimately start from.
pub const JUMP_HEIGHT_EPSILON: f32 = 1.0;

/// Tolerance band around the water surface inside which jump packets are
/// assumed to be swim bobbing.
pub const WATER_SURFACE_BAND: f32 = 2.0;

/// Downward speed below which gravity is considered absent after a jump.
pub const GRAVITY_FALL_SPEED_EPSILON: f32 = 0.1;

// =============================================================================
// CONTROL
// =============================================================================

/// Round-trip latency above which a rooted player's position drift is
/// attributed to lag rather than input injection.
pub const IGNORE_CONTROL_LATENCY_CAP_MS: u32 = 400;

// =============================================================================
// FALL DAMAGE
// =============================================================================

/// Per-yard factor of the fall damage formula used by the world's own fall
/// handler: damage_pct = FALL_DAMAGE_FACTOR * (dz - safe_fall) - FALL_DAMAGE_OFFSET.
pub const FALL_DAMAGE_FACTOR: f32 = 0.018;
pub const FALL_DAMAGE_OFFSET: f32 = 0.2426;

// =============================================================================
// REPORTING
// =============================================================================

/// Length of the burst window for debounced detection types.
pub const BURST_WINDOW_SECS: u64 = 3;

/// Hits inside one window required to promote a burst to a counted report.
pub const BURST_PROMOTE_AT: u32 = 3;

// Default countermeasure thresholds (total lifetime reports).
pub const DEFAULT_WARNING_THRESHOLD: u32 = 20;
pub const DEFAULT_KICK_THRESHOLD: u32 = 40;
pub const DEFAULT_JAIL_THRESHOLD: u32 = 55;
pub const DEFAULT_BAN_THRESHOLD: u32 = 70;

/// Authoring identity stamped on automatic bans.
pub const AUTO_BAN_AUTHOR: &str = "server";

/// Canned reason stamped on automatic bans.
pub const AUTO_BAN_REASON: &str = "Movement cheat reports exceeded the automatic ban threshold";

// =============================================================================
// HOUSEKEEPING
// =============================================================================

pub const CLEANUP_INTERVAL_SECS: u64 = 60;
