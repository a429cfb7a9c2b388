// Shared tuning constants and endpoints used by the web frontend.

// Data providers
pub const API_ENDPOINT_WEBSTATUS: &str = "https://api.webstatus.dev/v1/features/";
pub const API_ENDPOINT_MDN_CDN: &str = "https://cdn.jsdelivr.net/npm/mdn-browser-compat-data@latest/";
pub const WEBSTATUS_FEATURE_PAGE: &str = "https://webstatus.dev/features/";

// Epoch numbers below this are seconds, otherwise milliseconds
pub const EPOCH_MILLIS_THRESHOLD: f64 = 1e12;

// Icon fallback size when the svg tag carries no width/height
pub const DEFAULT_ICON_SIZE: u32 = 21;

// Pointer bridges
pub const PERCENT_MIN: f32 = 0.0;
pub const PERCENT_MAX: f32 = 100.0;
pub const PERCENT_CENTER: f32 = 50.0;
pub const KEYBOARD_STEP_PERCENT: f32 = 2.0; // arrow key nudge for the draggable title

// Proximity scaling
pub const PROXIMITY_RADIUS_FACTOR: f32 = 0.6; // of the container's shorter side
pub const PROXIMITY_RADIUS_MIN: f32 = 1.0;

// Visual centering calibration
pub const CALIBRATION_MAX_ATTEMPTS: u32 = 6;
pub const CALIBRATION_CENTER_TOLERANCE: f32 = 0.5; // percent
pub const CALIBRATION_MIN_DELTA_PX: f32 = 0.2;

// Orbit trail smoothing
pub const ORBIT_BASE_SPEED: f32 = 0.18; // fraction of remaining distance per 60Hz frame
pub const ORBIT_SPEED_FALLOFF: f32 = 0.72; // each trailing dot follows more lazily
pub const ORBIT_SETTLE_EPSILON: f32 = 0.01; // percent
pub const REFERENCE_FRAME_SEC: f32 = 1.0 / 60.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches

// Idle auto-motion
pub const IDLE_CYCLE_SEC: f32 = 6.0;
pub const IDLE_AMPLITUDE_X: f32 = 32.0; // percent
pub const IDLE_AMPLITUDE_Y: f32 = 48.0; // percent; lemniscate y spans roughly +-0.35
